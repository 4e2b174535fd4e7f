pub mod file;
pub mod usage;
pub mod user;

pub use file::{FileCategory, FilePatch, FileRecord, NewFileRecord};
pub use usage::{CategoryUsage, UsageSummary};
pub use user::{Requester, UserAccount};
