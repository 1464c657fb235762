use rowdesk_types::RecordId;
use std::fmt;

/// Result type for rowdesk-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// The record store could not be opened. Fatal for the session.
    StoreUnavailable(String),

    /// Edit or delete referenced an id that no longer exists
    RecordNotFound(RecordId),

    /// Store layer error after a successful open
    Store(rowdesk_index::Error),

    /// Operation issued before the controller finished loading
    NotReady,

    /// Blocking store task panicked or was cancelled
    Background(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StoreUnavailable(msg) => write!(f, "Record store unavailable: {}", msg),
            Error::RecordNotFound(id) => write!(f, "Record not found: {}", id),
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::NotReady => write!(f, "Controller is still loading"),
            Error::Background(msg) => write!(f, "Background task failed: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::StoreUnavailable(_)
            | Error::RecordNotFound(_)
            | Error::NotReady
            | Error::Background(_)
            | Error::Config(_) => None,
        }
    }
}

impl From<rowdesk_index::Error> for Error {
    fn from(err: rowdesk_index::Error) -> Self {
        match err {
            rowdesk_index::Error::RecordNotFound(id) => Error::RecordNotFound(id),
            other => Error::Store(other),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Background(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
