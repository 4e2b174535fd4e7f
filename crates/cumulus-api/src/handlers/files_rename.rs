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
pub struct RenameRequest {
    /// New display name without the extension.
    pub name: String,
    pub extension: String,
}

#[utoipa::path(
    patch,
    path = "/api/v0/files/{id}/name",
    tag = "files",
    params(
        ("id" = Uuid, Path, description = "File ID")
    ),
    request_body = RenameRequest,
    responses(
        (status = 200, description = "File renamed", body = FileRecord),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, body), fields(user_id = %user.0.id))]
pub async fn rename_file(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<RenameRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = state.files.rename(id, &body.name, &body.extension).await?;
    Ok(Json(record))
}
