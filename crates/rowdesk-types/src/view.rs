use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{DEFAULT_PAGE_SIZE, Error};

/// Field the table is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Name,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            _ => Err(Error::InvalidSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(Error::InvalidSortDirection(s.to_string())),
        }
    }
}

/// User-controlled view parameters for the record table.
///
/// Owned by the controller. `current_page` is 1-based and is clamped
/// back into range every time the table is recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub sort_by: SortKey,
    pub sort_dir: SortDirection,
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Fresh view: empty search, ascending by id, first page.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_by: SortKey::Id,
            sort_dir: SortDirection::Asc,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Header-click semantics: the same key flips direction,
    /// a different key is selected ascending.
    pub fn apply_sort(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_by = key;
            self.sort_dir = SortDirection::Asc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sort_toggles_same_key() {
        let mut view = ViewState::default();
        view.apply_sort(SortKey::Id);
        assert_eq!(view.sort_by, SortKey::Id);
        assert_eq!(view.sort_dir, SortDirection::Desc);

        view.apply_sort(SortKey::Id);
        assert_eq!(view.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn test_apply_sort_new_key_resets_to_ascending() {
        let mut view = ViewState::default();
        view.apply_sort(SortKey::Id);
        assert_eq!(view.sort_dir, SortDirection::Desc);

        view.apply_sort(SortKey::Name);
        assert_eq!(view.sort_by, SortKey::Name);
        assert_eq!(view.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn test_zero_page_size_is_raised_to_one() {
        let view = ViewState::new(0);
        assert_eq!(view.page_size, 1);
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("NAME".parse::<SortKey>().unwrap(), SortKey::Name);
        assert!(matches!(
            "identity".parse::<SortKey>(),
            Err(Error::InvalidSortKey(_))
        ));
    }

    #[test]
    fn test_view_state_serializes_lowercase_enums() {
        let view = ViewState::default();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["sort_by"], "id");
        assert_eq!(json["sort_dir"], "asc");
        assert_eq!(json["page_size"], 10);
    }
}
