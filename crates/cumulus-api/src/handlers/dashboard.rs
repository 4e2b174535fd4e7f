use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use cumulus_core::models::{FileRecord, UsageSummary};

use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

const RECENT_FILES_LIMIT: u32 = 10;

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub recent: Vec<FileRecord>,
    pub usage: UsageSummary,
}

/// The page-render read pair: recent files and the usage summary are two
/// independent reads, fetched concurrently and joined.
#[utoipa::path(
    get,
    path = "/api/v0/dashboard",
    tag = "usage",
    responses(
        (status = 200, description = "Recent files plus the usage summary", body = DashboardResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %user.0.id))]
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> Result<impl IntoResponse, HttpAppError> {
    let requester = user.requester();
    let (recent, usage) = tokio::join!(
        state
            .files
            .list(&requester, &[], "", "", Some(RECENT_FILES_LIMIT)),
        state.files.usage(&requester),
    );

    Ok(Json(DashboardResponse {
        recent: recent?,
        usage: usage?,
    }))
}
