use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use cumulus_core::models::FileRecord;
use cumulus_core::AppError;

use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v0/files",
    tag = "files",
    responses(
        (status = 201, description = "File uploaded", body = FileRecord),
        (status = 400, description = "Missing or invalid file part", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 413, description = "File exceeds the upload limit", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(user_id = %user.0.id))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidInput("missing filename".to_string()))?;
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file part: {}", e)))?
            .to_vec();
        if data.len() > state.config.max_upload_bytes {
            return Err(HttpAppError(AppError::PayloadTooLarge(format!(
                "{} bytes exceeds max {} bytes",
                data.len(),
                state.config.max_upload_bytes
            ))));
        }

        let record = state
            .files
            .upload(&user.0, &filename, &content_type, data)
            .await?;
        return Ok((StatusCode::CREATED, Json(record)));
    }

    Err(HttpAppError(AppError::InvalidInput(
        "missing 'file' field".to_string(),
    )))
}
