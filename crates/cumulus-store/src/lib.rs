//! Backend platform collaborators.
//!
//! The hosted platform is three services behind three traits: the
//! document store holding file metadata, the object store holding raw
//! bytes, and the account service resolving session tokens. `remote`
//! talks to the real platform over HTTP; `memory` is an in-process
//! implementation for tests and local development. `factory` picks one
//! from configuration and hands out `Arc<dyn ...>` handles — handles are
//! built once at startup and injected, never recreated per call.

mod account;
mod documents;
mod error;
mod factory;
mod memory;
mod objects;
mod remote;

pub use account::AccountService;
pub use documents::DocumentStore;
pub use error::{StoreError, StoreResult};
pub use factory::{create_backend, Backend};
pub use memory::MemoryBackend;
pub use objects::{ObjectStorage, StoredObject};
pub use remote::BackendClient;
