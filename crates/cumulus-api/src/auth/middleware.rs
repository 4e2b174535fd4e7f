//! Session resolution.
//!
//! The token comes from `Authorization: Bearer ...` or the `session`
//! cookie and is resolved through the account service before any file
//! route runs. No token, unknown token, or an account-service failure
//! ends the request here; nothing downstream sees an unauthenticated
//! request.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use cumulus_core::AppError;
use cumulus_store::StoreError;

use crate::auth::models::CurrentUser;
use crate::error::HttpAppError;
use crate::state::AppState;

const SESSION_COOKIE: &str = "session";

pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match extract_session_token(request.headers()) {
        Some(token) => token,
        None => {
            return HttpAppError(AppError::Unauthorized("No session".to_string()))
                .into_response();
        }
    };

    match state.accounts.current_user(&token).await {
        Ok(account) => {
            request.extensions_mut().insert(CurrentUser(account));
            next.run(request).await
        }
        Err(StoreError::Unauthorized(msg)) => {
            HttpAppError(AppError::Unauthorized(msg)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Account service failure during session resolution");
            HttpAppError(AppError::Internal(err.to_string())).into_response()
        }
    }
}

/// Bearer token first, `session` cookie as the fallback.
fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(auth) = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        if let Some(token) = auth.strip_prefix("Bearer ") {
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(session_cookie_value)
}

fn session_cookie_value(cookie_header: &str) -> Option<String> {
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}
