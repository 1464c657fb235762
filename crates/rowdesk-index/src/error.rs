use rowdesk_types::RecordId;
use std::fmt;

/// Result type for rowdesk-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Database operation failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Update or delete addressed an id that is not in the store
    RecordNotFound(RecordId),

    /// Query-specific error (invalid input, etc.)
    Query(String),

    /// The file carries a `user_version` this build does not understand
    UnsupportedSchemaVersion { found: i32, expected: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                if msg.contains("no such column") || msg.contains("no such table") {
                    write!(
                        f,
                        "Database schema mismatch: {}. The file was not written by a compatible rowdesk build.",
                        msg
                    )
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::RecordNotFound(id) => write!(f, "Record not found: {}", id),
            Error::Query(msg) => write!(f, "Query error: {}", msg),
            Error::UnsupportedSchemaVersion { found, expected } => write!(
                f,
                "Unsupported schema version {} (this build reads version {}); the database was left untouched",
                found, expected
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::RecordNotFound(_)
            | Error::Query(_)
            | Error::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
