use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cumulus_core::models::{FileCategory, FileRecord};

use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Comma-separated category names, e.g. `image,video`.
    pub categories: Option<String>,
    pub search: Option<String>,
    /// `<field>-<asc|desc>`; defaults to `lastModified-desc`.
    pub sort: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FileListResponse {
    pub files: Vec<FileRecord>,
    pub total: usize,
}

fn parse_categories(raw: Option<&str>) -> Vec<FileCategory> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(FileCategory::parse_lossy)
            .collect()
    })
    .unwrap_or_default()
}

#[utoipa::path(
    get,
    path = "/api/v0/files",
    tag = "files",
    params(
        ("categories" = Option<String>, Query, description = "Comma-separated category filter"),
        ("search" = Option<String>, Query, description = "Substring match on the display name"),
        ("sort" = Option<String>, Query, description = "<field>-<asc|desc>, default lastModified-desc"),
        ("limit" = Option<u32>, Query, description = "Result-count cap")
    ),
    responses(
        (status = 200, description = "Matching files", body = FileListResponse),
        (status = 400, description = "Malformed sort specification", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, params), fields(user_id = %user.0.id))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, HttpAppError> {
    let categories = parse_categories(params.categories.as_deref());
    let files = state
        .files
        .list(
            &user.requester(),
            &categories,
            params.search.as_deref().unwrap_or(""),
            params.sort.as_deref().unwrap_or(""),
            params.limit,
        )
        .await?;

    let total = files.len();
    Ok(Json(FileListResponse { files, total }))
}
