// SQLite record store
// One table, autoincrement ids, seeded once on first open

mod db;
mod error;
mod queries;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
