//! Test helpers: build AppState and router over the in-memory backend.
//!
//! Run from workspace root: `cargo test -p cumulus-api`.

use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use http::StatusCode;
use uuid::Uuid;

use cumulus_api::constants::API_PREFIX;
use cumulus_api::setup::routes::build_router;
use cumulus_api::state::AppState;
use cumulus_core::models::UserAccount;
use cumulus_core::Config;
use cumulus_services::FileService;
use cumulus_store::MemoryBackend;

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

/// Test application: server plus the backing store for direct assertions.
pub struct TestApp {
    pub server: TestServer,
    pub backend: Arc<MemoryBackend>,
}

pub struct TestUser {
    pub account: UserAccount,
    pub token: String,
}

pub async fn setup_test_app() -> TestApp {
    let backend = Arc::new(MemoryBackend::new("http://localhost:8080"));
    let state = Arc::new(AppState {
        files: FileService::new(backend.clone(), backend.clone()),
        accounts: backend.clone(),
        config: Config::for_tests(),
    });
    let server = TestServer::new(build_router(state)).expect("test server");
    TestApp { server, backend }
}

/// Seed a session token for a fresh account. Session issuance itself is
/// the hosted platform's job and out of scope here.
pub async fn register_test_user(app: &TestApp, email: &str) -> TestUser {
    let account = UserAccount {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: email.split('@').next().unwrap_or("user").to_string(),
    };
    let token = format!("tok-{}", account.id.simple());
    app.backend
        .register_session(token.clone(), account.clone())
        .await;
    TestUser { account, token }
}

/// Upload a file through the API and return the created record.
pub async fn upload_file(
    app: &TestApp,
    user: &TestUser,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> serde_json::Value {
    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(data.to_vec())
            .file_name(filename)
            .mime_type(content_type),
    );
    let response = app
        .server
        .post(&api_path("/files"))
        .add_header("Authorization", format!("Bearer {}", user.token))
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}
