use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned record identifier.
///
/// Ids are handed out by the store on insert and are never reused,
/// even after the record they pointed to is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A named row in the record table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Trim a candidate record name, rejecting blank input.
///
/// Returns `None` for empty or whitespace-only names.
pub fn normalize_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_trims() {
        assert_eq!(normalize_name("  Alpha "), Some("Alpha"));
    }

    #[test]
    fn test_normalize_name_rejects_blank() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("  \t\n"), None);
    }

    #[test]
    fn test_record_id_serializes_transparently() {
        let record = Record::new(7, "Seven");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Seven"}"#);
    }
}
