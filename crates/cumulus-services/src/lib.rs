//! Server-side file actions.
//!
//! `FileService` translates UI intents (upload, list, rename, share,
//! delete, usage) into collaborator calls. Every operation is a single
//! synchronous request/response: failures are logged and re-raised, with
//! no retry, no backoff, and no partial-success reporting.

mod files;

pub use files::FileService;
