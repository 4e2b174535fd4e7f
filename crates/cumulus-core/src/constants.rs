//! Shared constants.

/// Fixed storage ceiling per account: 2 GiB. Display only, not enforced.
pub const STORAGE_QUOTA_BYTES: i64 = 2 * 1024 * 1024 * 1024;

/// Sort applied to listings when the caller supplies none.
pub const DEFAULT_SORT: &str = "lastModified-desc";
