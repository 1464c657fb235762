pub mod browse;
pub mod init;
pub mod table;

pub use browse::present_browse_status;
pub use init::{present_guidance, present_init_result};
pub use table::{RecordChange, present_change_result, present_list_result, present_table};
