pub mod error;
pub mod record;
pub mod view;

pub use error::{Error, Result};
pub use record::{Record, RecordId, normalize_name};
pub use view::{SortDirection, SortKey, ViewState};

/// Rows per page when no configuration overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of records written on the first-ever open of a store.
pub const DEFAULT_SEED_COUNT: usize = 1000;

/// Name given to the `n`-th seeded record (1-based).
pub fn seed_name(n: usize) -> String {
    format!("Record {}", n)
}
