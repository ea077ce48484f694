//! State management module
//!
//! This module handles the client-side application state:
//! - The favorites cache and its derived queries (favorites.rs)
//! - Screen routing and deep-link parsing (route.rs)

pub mod favorites;
pub mod route;
