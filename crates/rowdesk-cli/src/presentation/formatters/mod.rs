pub mod text;

pub use text::{sort_arrow, truncate};
