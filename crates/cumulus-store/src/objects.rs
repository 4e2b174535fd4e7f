use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Stored blob reference: the opaque object id plus the byte count the
/// backend actually recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    pub id: String,
    pub size: i64,
}

/// Object storage abstraction
///
/// The external blob store holding raw file bytes, addressed by the
/// opaque id returned from `upload`.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload raw bytes under a name and return the stored reference.
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StoreResult<StoredObject>;

    /// Delete an object by id. Deleting an absent object is not an error.
    async fn delete(&self, object_id: &str) -> StoreResult<()>;

    /// Public view URL for an object.
    fn object_url(&self, object_id: &str) -> String;
}
