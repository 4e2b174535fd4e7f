use std::sync::Arc;

use uuid::Uuid;

use cumulus_core::models::{
    FileCategory, FilePatch, FileRecord, NewFileRecord, Requester, UsageSummary, UserAccount,
};
use cumulus_core::query::{build_query, Predicate};
use cumulus_core::usage::summarize;
use cumulus_core::AppError;
use cumulus_store::{DocumentStore, ObjectStorage, StoreError};

/// File actions over the injected collaborator handles.
///
/// Delete is not atomic across the two stores: the record goes first,
/// then the object. A failed object delete (or a failed compensating
/// delete during upload) can leave an orphaned object; both are logged
/// and never reconciled.
#[derive(Clone)]
pub struct FileService {
    documents: Arc<dyn DocumentStore>,
    objects: Arc<dyn ObjectStorage>,
}

fn document_error(err: StoreError) -> AppError {
    match err {
        StoreError::NotFound(msg) => AppError::NotFound(msg),
        StoreError::Unauthorized(msg) => AppError::Unauthorized(msg),
        other => AppError::DocumentStore(other.to_string()),
    }
}

fn object_error(err: StoreError) -> AppError {
    match err {
        StoreError::NotFound(msg) => AppError::NotFound(msg),
        StoreError::Unauthorized(msg) => AppError::Unauthorized(msg),
        other => AppError::ObjectStorage(other.to_string()),
    }
}

impl FileService {
    pub fn new(documents: Arc<dyn DocumentStore>, objects: Arc<dyn ObjectStorage>) -> Self {
        FileService { documents, objects }
    }

    /// Store the bytes, then create the metadata record.
    ///
    /// If record creation fails the just-stored object is deleted
    /// best-effort; the original failure propagates either way.
    #[tracing::instrument(
        skip(self, data),
        fields(owner_id = %owner.id, filename = %filename, size = data.len())
    )]
    pub async fn upload(
        &self,
        owner: &UserAccount,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<FileRecord, AppError> {
        if filename.is_empty() {
            return Err(AppError::InvalidInput("missing filename".to_string()));
        }
        if data.is_empty() {
            return Err(AppError::InvalidInput("file is empty".to_string()));
        }

        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let category = FileCategory::from_extension(&extension);

        let stored = self
            .objects
            .upload(filename, content_type, data)
            .await
            .map_err(object_error)?;

        let record = NewFileRecord {
            name: filename.to_string(),
            category,
            extension,
            size: stored.size,
            url: self.objects.object_url(&stored.id),
            owner_id: owner.id,
            shared_with: vec![],
            object_id: stored.id.clone(),
        };

        match self.documents.create(record).await {
            Ok(created) => {
                tracing::info!(file_id = %created.id, object_id = %stored.id, "File uploaded");
                Ok(created)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    object_id = %stored.id,
                    "Failed to create file record; removing stored object"
                );
                if let Err(cleanup_err) = self.objects.delete(&stored.id).await {
                    tracing::error!(
                        error = %cleanup_err,
                        object_id = %stored.id,
                        "Compensating delete failed; object is orphaned"
                    );
                }
                Err(document_error(err))
            }
        }
    }

    /// List the records the requester owns or has been granted access to.
    #[tracing::instrument(skip(self, requester), fields(requester_id = %requester.id))]
    pub async fn list(
        &self,
        requester: &Requester,
        categories: &[FileCategory],
        search_text: &str,
        sort: &str,
        limit: Option<u32>,
    ) -> Result<Vec<FileRecord>, AppError> {
        let query = build_query(requester, categories, search_text, sort, limit)?;
        self.documents.list(&query).await.map_err(document_error)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<FileRecord, AppError> {
        self.documents
            .get(id)
            .await
            .map_err(document_error)?
            .ok_or_else(|| AppError::NotFound(format!("file {}", id)))
    }

    /// Rename a file; the stored display name is `"{name}.{extension}"`.
    #[tracing::instrument(skip(self, name))]
    pub async fn rename(
        &self,
        id: Uuid,
        name: &str,
        extension: &str,
    ) -> Result<FileRecord, AppError> {
        if name.is_empty() {
            return Err(AppError::InvalidInput("missing file name".to_string()));
        }
        let full_name = format!("{}.{}", name, extension);
        self.documents
            .update(id, FilePatch::Rename { name: full_name })
            .await
            .map_err(document_error)
    }

    /// Replace the set of accounts the file is shared with.
    #[tracing::instrument(skip(self, emails), fields(recipients = emails.len()))]
    pub async fn share(&self, id: Uuid, emails: Vec<String>) -> Result<FileRecord, AppError> {
        self.documents
            .update(id, FilePatch::Share { emails })
            .await
            .map_err(document_error)
    }

    /// Delete the metadata record, then its backing object.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let record = self.get(id).await?;
        self.documents.delete(id).await.map_err(document_error)?;
        if let Err(err) = self.objects.delete(&record.object_id).await {
            tracing::error!(
                error = %err,
                file_id = %id,
                object_id = %record.object_id,
                "Object delete failed after record delete; object may be orphaned"
            );
            return Err(object_error(err));
        }
        tracing::info!(file_id = %id, object_id = %record.object_id, "File deleted");
        Ok(())
    }

    /// Usage summary over the requester's owned records.
    #[tracing::instrument(skip(self, requester), fields(requester_id = %requester.id))]
    pub async fn usage(&self, requester: &Requester) -> Result<UsageSummary, AppError> {
        let records = self
            .documents
            .list(&[Predicate::OwnedBy(requester.id)])
            .await
            .map_err(document_error)?;
        Ok(summarize(&records))
    }
}
