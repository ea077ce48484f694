//! Backend API client and payload models.

pub mod client;
pub mod models;

pub use client::ApiClient;
