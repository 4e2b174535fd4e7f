use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use cumulus_core::models::FileRecord;

use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ShareRequest {
    /// Full replacement for the file's shared-with set.
    pub emails: Vec<String>,
}

#[utoipa::path(
    put,
    path = "/api/v0/files/{id}/users",
    tag = "files",
    params(
        ("id" = Uuid, Path, description = "File ID")
    ),
    request_body = ShareRequest,
    responses(
        (status = 200, description = "Share set updated", body = FileRecord),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, body), fields(user_id = %user.0.id))]
pub async fn share_file(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<ShareRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = state.files.share(id, body.emails).await?;
    Ok(Json(record))
}
