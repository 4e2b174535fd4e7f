//! Backend selection.

use std::sync::Arc;

use cumulus_core::{BackendKind, Config};

use crate::account::AccountService;
use crate::documents::DocumentStore;
use crate::error::StoreResult;
use crate::memory::MemoryBackend;
use crate::objects::ObjectStorage;
use crate::remote::BackendClient;

/// The three collaborator handles the rest of the system is built on.
#[derive(Clone)]
pub struct Backend {
    pub documents: Arc<dyn DocumentStore>,
    pub objects: Arc<dyn ObjectStorage>,
    pub accounts: Arc<dyn AccountService>,
}

/// Construct the configured backend once, at startup.
pub fn create_backend(config: &Config) -> StoreResult<Backend> {
    match config.backend_kind {
        BackendKind::Remote => {
            tracing::info!("Initializing remote backend platform client");
            let client = Arc::new(BackendClient::from_config(config)?);
            Ok(Backend {
                documents: client.clone(),
                objects: client.clone(),
                accounts: client,
            })
        }
        BackendKind::Memory => {
            tracing::info!("Initializing in-memory backend");
            let backend = Arc::new(MemoryBackend::new(config.public_base_url.clone()));
            Ok(Backend {
                documents: backend.clone(),
                objects: backend.clone(),
                accounts: backend,
            })
        }
    }
}
