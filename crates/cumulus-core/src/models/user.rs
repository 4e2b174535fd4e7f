use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Authenticated account as reported by the backend account service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// The identity a listing is issued on behalf of: ownership is matched on
/// the account id, shared-with membership on the email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub id: Uuid,
    pub email: String,
}

impl From<&UserAccount> for Requester {
    fn from(account: &UserAccount) -> Self {
        Requester {
            id: account.id,
            email: account.email.clone(),
        }
    }
}
