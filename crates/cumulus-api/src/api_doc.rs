//! OpenAPI document.

use axum::Json;
use utoipa::OpenApi;

use cumulus_core::models::{CategoryUsage, FileCategory, FileRecord, UsageSummary, UserAccount};

use crate::error::ErrorResponse;
use crate::handlers;
use crate::handlers::dashboard::DashboardResponse;
use crate::handlers::files_list::FileListResponse;
use crate::handlers::files_rename::RenameRequest;
use crate::handlers::files_share::ShareRequest;
use crate::handlers::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::files_upload::upload_file,
        handlers::files_list::list_files,
        handlers::files_get::get_file,
        handlers::files_rename::rename_file,
        handlers::files_share::share_file,
        handlers::files_delete::delete_file,
        handlers::usage::usage_summary,
        handlers::dashboard::dashboard,
        handlers::health::health,
    ),
    components(schemas(
        FileRecord,
        FileCategory,
        UserAccount,
        UsageSummary,
        CategoryUsage,
        FileListResponse,
        RenameRequest,
        ShareRequest,
        DashboardResponse,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "files", description = "Upload, list, rename, share, and delete files"),
        (name = "usage", description = "Storage usage reporting"),
        (name = "system", description = "Liveness and metadata"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
