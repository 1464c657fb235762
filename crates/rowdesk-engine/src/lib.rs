// Engine module - pure table computations
// Sits between the record collection (types) and any renderer. No I/O, no state.

pub mod headers;
pub mod pagination;
pub mod view_model;

pub use headers::{Column, HeaderCell, header_cells};
pub use pagination::{ControlKind, PageControl, build_pagination};
pub use view_model::{PageResult, compute_page, filter_records, sort_records, total_pages};
