use std::sync::Arc;

use cumulus_core::Config;
use cumulus_services::FileService;
use cumulus_store::create_backend;

use crate::state::AppState;

/// Construct the backend handles once and assemble the shared state.
pub fn build_state(config: Config) -> Result<Arc<AppState>, anyhow::Error> {
    let backend = create_backend(&config)?;
    let files = FileService::new(backend.documents, backend.objects);

    Ok(Arc::new(AppState {
        files,
        accounts: backend.accounts,
        config,
    }))
}
