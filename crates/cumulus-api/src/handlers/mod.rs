pub mod dashboard;
pub mod files_delete;
pub mod files_get;
pub mod files_list;
pub mod files_rename;
pub mod files_share;
pub mod files_upload;
pub mod health;
pub mod usage;
