pub mod routes;
pub mod server;
pub mod services;

use std::sync::Arc;

use axum::Router;

use cumulus_core::Config;

use crate::state::AppState;

/// Validate configuration, build the collaborator handles, and wire the
/// router.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    config.validate()?;
    let state = services::build_state(config)?;
    let router = routes::build_router(state.clone());
    Ok((state, router))
}
