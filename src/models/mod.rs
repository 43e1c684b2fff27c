pub mod chart;
pub mod entry_type;
pub mod log_entry;
