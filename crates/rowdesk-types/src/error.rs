use std::fmt;

/// Result type for rowdesk-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown sort key (expected "id" or "name")
    InvalidSortKey(String),

    /// Unknown sort direction (expected "asc" or "desc")
    InvalidSortDirection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSortKey(key) => {
                write!(f, "Invalid sort key '{}': expected 'id' or 'name'", key)
            }
            Error::InvalidSortDirection(dir) => {
                write!(f, "Invalid sort direction '{}': expected 'asc' or 'desc'", dir)
            }
        }
    }
}

impl std::error::Error for Error {}
