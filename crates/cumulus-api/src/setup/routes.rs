//! Router assembly and middleware layering.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cumulus_core::Config;

use crate::api_doc::openapi_json;
use crate::auth::session_middleware;
use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    let files = Router::new()
        .route(
            "/files",
            post(handlers::files_upload::upload_file).get(handlers::files_list::list_files),
        )
        .route(
            "/files/{id}",
            get(handlers::files_get::get_file).delete(handlers::files_delete::delete_file),
        )
        .route(
            "/files/{id}/name",
            patch(handlers::files_rename::rename_file),
        )
        .route(
            "/files/{id}/users",
            put(handlers::files_share::share_file),
        )
        .route("/usage", get(handlers::usage::usage_summary))
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .nest(API_PREFIX, files)
        .route("/health", get(handlers::health::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
