use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cumulus_core::models::{Requester, UserAccount};
use cumulus_core::AppError;

use crate::error::HttpAppError;

/// Authenticated account resolved by the session middleware and stored
/// in request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserAccount);

impl CurrentUser {
    pub fn requester(&self) -> Requester {
        Requester::from(&self.0)
    }
}

// FromRequestParts so handlers taking Multipart (which consumes the
// body) can still extract the user.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Missing session context".to_string(),
                ))
            })
    }
}
