//! In-process backend for tests and local development.
//!
//! Implements all three collaborator traits over `RwLock`ed maps and
//! interprets predicate lists the same way the hosted platform does:
//! filters narrow, exactly one ordering applies, the limit truncates.
//! Unknown sort fields fail at call time, matching the remote contract.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use cumulus_core::models::{FilePatch, FileRecord, NewFileRecord, UserAccount};
use cumulus_core::query::{Predicate, SortDirection};

use crate::account::AccountService;
use crate::documents::DocumentStore;
use crate::error::{StoreError, StoreResult};
use crate::objects::{ObjectStorage, StoredObject};

pub struct MemoryBackend {
    base_url: String,
    documents: RwLock<HashMap<Uuid, FileRecord>>,
    objects: RwLock<HashMap<String, Vec<u8>>>,
    sessions: RwLock<HashMap<String, UserAccount>>,
    next_object_id: AtomicU64,
}

impl MemoryBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        MemoryBackend {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            documents: RwLock::new(HashMap::new()),
            objects: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            next_object_id: AtomicU64::new(1),
        }
    }

    /// Register a session token for an account. Session issuance is the
    /// platform's business; tests and local setups seed tokens here.
    pub async fn register_session(&self, token: impl Into<String>, account: UserAccount) {
        self.sessions.write().await.insert(token.into(), account);
    }

    /// Raw object bytes, for assertions on upload/compensation behavior.
    pub async fn object_bytes(&self, object_id: &str) -> Option<Vec<u8>> {
        self.objects.read().await.get(object_id).cloned()
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }

    fn matches(record: &FileRecord, query: &[Predicate]) -> bool {
        query.iter().all(|term| match term {
            Predicate::AccessibleBy { owner_id, email } => {
                record.owner_id == *owner_id || record.shared_with.contains(email)
            }
            Predicate::OwnedBy(owner_id) => record.owner_id == *owner_id,
            Predicate::CategoryIn(categories) => categories.contains(&record.category),
            // Substring match is case-insensitive, same as the hosted platform.
            Predicate::NameContains(text) => record
                .name
                .to_lowercase()
                .contains(&text.to_lowercase()),
            Predicate::OrderBy { .. } | Predicate::Limit(_) => true,
        })
    }

    fn sort(records: &mut [FileRecord], field: &str, direction: SortDirection) -> StoreResult<()> {
        match field {
            "name" => records.sort_by(|a, b| a.name.cmp(&b.name)),
            "size" => records.sort_by_key(|r| r.size),
            "createdAt" => records.sort_by_key(|r| r.created_at),
            "lastModified" => records.sort_by_key(|r| r.last_modified),
            other => {
                return Err(StoreError::Backend(format!(
                    "cannot order on unknown attribute '{}'",
                    other
                )))
            }
        }
        if direction == SortDirection::Desc {
            records.reverse();
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryBackend {
    async fn list(&self, query: &[Predicate]) -> StoreResult<Vec<FileRecord>> {
        let mut matches: Vec<FileRecord> = {
            let documents = self.documents.read().await;
            documents
                .values()
                .filter(|record| Self::matches(record, query))
                .cloned()
                .collect()
        };

        for term in query {
            if let Predicate::OrderBy { field, direction } = term {
                Self::sort(&mut matches, field, *direction)?;
            }
        }
        for term in query {
            if let Predicate::Limit(limit) = term {
                matches.truncate(*limit as usize);
            }
        }
        Ok(matches)
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<FileRecord>> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn create(&self, record: NewFileRecord) -> StoreResult<FileRecord> {
        let now = Utc::now();
        let created = FileRecord {
            id: Uuid::new_v4(),
            name: record.name,
            category: record.category,
            extension: record.extension,
            size: record.size,
            url: record.url,
            owner_id: record.owner_id,
            shared_with: record.shared_with,
            object_id: record.object_id,
            created_at: now,
            last_modified: now,
        };
        self.documents
            .write()
            .await
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, patch: FilePatch) -> StoreResult<FileRecord> {
        let mut documents = self.documents.write().await;
        let record = documents
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("document {}", id)))?;
        match patch {
            FilePatch::Rename { name } => record.name = name,
            FilePatch::Share { emails } => record.shared_with = emails,
        }
        record.last_modified = Utc::now();
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.documents
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("document {}", id)))
    }
}

#[async_trait]
impl ObjectStorage for MemoryBackend {
    async fn upload(
        &self,
        _filename: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StoreResult<StoredObject> {
        let id = format!("obj-{}", self.next_object_id.fetch_add(1, Ordering::Relaxed));
        let size = data.len() as i64;
        self.objects.write().await.insert(id.clone(), data);
        Ok(StoredObject { id, size })
    }

    async fn delete(&self, object_id: &str) -> StoreResult<()> {
        self.objects.write().await.remove(object_id);
        Ok(())
    }

    fn object_url(&self, object_id: &str) -> String {
        format!("{}/objects/{}/view", self.base_url, object_id)
    }
}

#[async_trait]
impl AccountService for MemoryBackend {
    async fn current_user(&self, session_token: &str) -> StoreResult<UserAccount> {
        self.sessions
            .read()
            .await
            .get(session_token)
            .cloned()
            .ok_or_else(|| StoreError::Unauthorized("unknown session".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cumulus_core::models::FileCategory;
    use cumulus_core::models::Requester;
    use cumulus_core::query::build_query;

    fn new_record(owner: Uuid, name: &str, category: FileCategory, size: i64) -> NewFileRecord {
        NewFileRecord {
            name: name.to_string(),
            category,
            extension: name.rsplit('.').next().unwrap_or("").to_string(),
            size,
            url: format!("http://localhost/objects/{}/view", name),
            owner_id: owner,
            shared_with: vec![],
            object_id: name.to_string(),
        }
    }

    fn requester_for(owner: Uuid) -> Requester {
        Requester {
            id: owner,
            email: "owner@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn listing_applies_the_access_filter() {
        let backend = MemoryBackend::new("http://localhost:8080");
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        backend
            .create(new_record(owner, "mine.png", FileCategory::Image, 10))
            .await
            .unwrap();
        backend
            .create(new_record(stranger, "theirs.png", FileCategory::Image, 10))
            .await
            .unwrap();
        let mut shared = new_record(stranger, "shared.pdf", FileCategory::Document, 5);
        shared.shared_with = vec!["owner@example.com".to_string()];
        backend.create(shared).await.unwrap();

        let query = build_query(&requester_for(owner), &[], "", "name-asc", None).unwrap();
        let listed = backend.list(&query).await.unwrap();

        let names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["mine.png", "shared.pdf"]);
    }

    #[tokio::test]
    async fn listing_filters_by_category_and_substring() {
        let backend = MemoryBackend::new("http://localhost:8080");
        let owner = Uuid::new_v4();
        for (name, category) in [
            ("holiday.png", FileCategory::Image),
            ("holiday.mp4", FileCategory::Video),
            ("notes.txt", FileCategory::Document),
        ] {
            backend
                .create(new_record(owner, name, category, 1))
                .await
                .unwrap();
        }

        let query = build_query(
            &requester_for(owner),
            &[FileCategory::Image, FileCategory::Video],
            "HOLIDAY",
            "name-asc",
            None,
        )
        .unwrap();
        let listed = backend.list(&query).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|r| r.name.starts_with("holiday")));
    }

    #[tokio::test]
    async fn listing_sorts_and_limits() {
        let backend = MemoryBackend::new("http://localhost:8080");
        let owner = Uuid::new_v4();
        for (name, size) in [("a.bin", 30), ("b.bin", 10), ("c.bin", 20)] {
            backend
                .create(new_record(owner, name, FileCategory::Other, size))
                .await
                .unwrap();
        }

        let query = build_query(&requester_for(owner), &[], "", "size-asc", Some(2)).unwrap();
        let listed = backend.list(&query).await.unwrap();
        let sizes: Vec<i64> = listed.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![10, 20]);

        let query = build_query(&requester_for(owner), &[], "", "size-desc", None).unwrap();
        let listed = backend.list(&query).await.unwrap();
        let sizes: Vec<i64> = listed.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![30, 20, 10]);
    }

    #[tokio::test]
    async fn unknown_sort_field_is_a_backend_error() {
        let backend = MemoryBackend::new("http://localhost:8080");
        let owner = Uuid::new_v4();
        backend
            .create(new_record(owner, "a.bin", FileCategory::Other, 1))
            .await
            .unwrap();

        let query = build_query(&requester_for(owner), &[], "", "wibble-asc", None).unwrap();
        let err = backend.list(&query).await.unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
    }

    #[tokio::test]
    async fn update_applies_patch_variants_and_bumps_last_modified() {
        let backend = MemoryBackend::new("http://localhost:8080");
        let owner = Uuid::new_v4();
        let record = backend
            .create(new_record(owner, "draft.txt", FileCategory::Document, 1))
            .await
            .unwrap();

        let renamed = backend
            .update(
                record.id,
                FilePatch::Rename {
                    name: "final.txt".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "final.txt");
        assert!(renamed.last_modified >= record.last_modified);

        let shared = backend
            .update(
                record.id,
                FilePatch::Share {
                    emails: vec!["friend@example.com".to_string()],
                },
            )
            .await
            .unwrap();
        assert_eq!(shared.shared_with, vec!["friend@example.com".to_string()]);
    }

    #[tokio::test]
    async fn delete_of_missing_document_is_not_found() {
        let backend = MemoryBackend::new("http://localhost:8080");
        let err = DocumentStore::delete(&backend, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn object_store_round_trip() {
        let backend = MemoryBackend::new("http://localhost:8080/");
        let stored = backend
            .upload("photo.png", "image/png", b"bytes".to_vec())
            .await
            .unwrap();
        assert_eq!(stored.size, 5);
        assert_eq!(backend.object_bytes(&stored.id).await.unwrap(), b"bytes");
        assert_eq!(
            backend.object_url(&stored.id),
            format!("http://localhost:8080/objects/{}/view", stored.id)
        );

        ObjectStorage::delete(&backend, &stored.id).await.unwrap();
        assert!(backend.object_bytes(&stored.id).await.is_none());
        // Deleting again stays Ok.
        ObjectStorage::delete(&backend, &stored.id).await.unwrap();
    }

    #[tokio::test]
    async fn sessions_resolve_to_accounts() {
        let backend = MemoryBackend::new("http://localhost:8080");
        let account = UserAccount {
            id: Uuid::new_v4(),
            email: "me@example.com".to_string(),
            name: "Me".to_string(),
        };
        backend.register_session("tok-1", account.clone()).await;

        let resolved = backend.current_user("tok-1").await.unwrap();
        assert_eq!(resolved.id, account.id);

        let err = backend.current_user("tok-2").await.unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized(_)));
    }
}
