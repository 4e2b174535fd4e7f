use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use cumulus_core::models::UsageSummary;

use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v0/usage",
    tag = "usage",
    responses(
        (status = 200, description = "Per-category usage for the requester's owned files", body = UsageSummary),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %user.0.id))]
pub async fn usage_summary(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> Result<impl IntoResponse, HttpAppError> {
    let summary = state.files.usage(&user.requester()).await?;
    Ok(Json(summary))
}
