use async_trait::async_trait;

use cumulus_core::models::UserAccount;

use crate::error::StoreResult;

/// Account service abstraction
///
/// Resolves a session token to the account it belongs to. Session
/// issuance happens elsewhere (the hosted platform's auth flow); this
/// side only ever reads.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Resolve the current user for a session token.
    ///
    /// An unknown or expired token is `StoreError::Unauthorized`.
    async fn current_user(&self, session_token: &str) -> StoreResult<UserAccount>;
}
