use thiserror::Error;

/// Application error type.
///
/// Variants carry rendered detail strings rather than the source errors so
/// the type stays `Clone` and can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The request never completed (DNS, connection, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The stored session token could not be read or written.
    #[error("session storage: {0}")]
    SessionStorage(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Error::Status(status.as_u16())
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}
