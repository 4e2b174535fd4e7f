//! Application state.
//!
//! Everything a handler needs, built once in `setup::services` and
//! shared as `Arc<AppState>`. The collaborator handles inside are
//! injected; nothing is lazily constructed per request.

use std::sync::Arc;

use cumulus_core::Config;
use cumulus_services::FileService;
use cumulus_store::AccountService;

#[derive(Clone)]
pub struct AppState {
    pub files: FileService,
    pub accounts: Arc<dyn AccountService>,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
