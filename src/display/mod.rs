//! Display formatting for terminal output

pub mod backup;
pub mod category;
pub mod preferences;

pub use backup::{format_backup_status, format_modified_at, format_trigger_outcome, BackupStatus};
pub use category::format_category_diff;
pub use preferences::{format_preference_table, format_raw_value};
