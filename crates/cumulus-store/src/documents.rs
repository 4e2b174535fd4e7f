use async_trait::async_trait;
use uuid::Uuid;

use cumulus_core::models::{FilePatch, FileRecord, NewFileRecord};
use cumulus_core::query::Predicate;

use crate::error::StoreResult;

/// Document store abstraction
///
/// The external record database holding file metadata. A listing call
/// consumes one predicate list, built by `cumulus_core::query::build_query`
/// (or the owner-only filter the usage path composes). Implementations
/// must apply every term; in particular the access term is the only thing
/// standing between a requester and other users' records.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return the records matching the predicate list.
    async fn list(&self, query: &[Predicate]) -> StoreResult<Vec<FileRecord>>;

    /// Fetch a single record by id.
    async fn get(&self, id: Uuid) -> StoreResult<Option<FileRecord>>;

    /// Create a record; the store assigns id and timestamps.
    async fn create(&self, record: NewFileRecord) -> StoreResult<FileRecord>;

    /// Apply a mutation and return the updated record.
    async fn update(&self, id: Uuid, patch: FilePatch) -> StoreResult<FileRecord>;

    /// Delete a record by id.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}
