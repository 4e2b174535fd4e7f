//! HTTP client for the hosted backend platform.
//!
//! One `BackendClient` implements all three collaborator traits. Wire
//! shape: documents live under
//! `databases/{database}/collections/{collection}/documents` with listing
//! predicates passed as repeated `queries[]` JSON terms; objects live
//! under `storage/buckets/{bucket}/files`; the account resource resolves
//! the session token header. Project id and API key ride on every request.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

use cumulus_core::models::{FilePatch, FileRecord, NewFileRecord, UserAccount};
use cumulus_core::query::{Predicate, SortDirection};
use cumulus_core::Config;

use crate::account::AccountService;
use crate::documents::DocumentStore;
use crate::error::{StoreError, StoreResult};
use crate::objects::{ObjectStorage, StoredObject};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const HEADER_PROJECT: &str = "X-Project-Id";
const HEADER_API_KEY: &str = "X-Api-Key";
const HEADER_SESSION: &str = "X-Session-Token";

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    api_key: String,
    database_id: String,
    collection_id: String,
    bucket_id: String,
}

#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    documents: Vec<FileRecord>,
}

impl BackendClient {
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        let require = |value: &Option<String>, name: &str| {
            value
                .clone()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| StoreError::ConfigError(format!("{} is not configured", name)))
        };

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoreError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(BackendClient {
            http,
            endpoint: require(&config.endpoint_url, "BACKEND_ENDPOINT")?
                .trim_end_matches('/')
                .to_string(),
            project_id: require(&config.project_id, "BACKEND_PROJECT_ID")?,
            api_key: require(&config.api_key, "BACKEND_API_KEY")?,
            database_id: require(&config.database_id, "BACKEND_DATABASE_ID")?,
            collection_id: require(&config.collection_id, "BACKEND_FILES_COLLECTION_ID")?,
            bucket_id: require(&config.bucket_id, "BACKEND_BUCKET_ID")?,
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    fn document_url(&self, id: Uuid) -> String {
        format!("{}/{}", self.documents_url(), id)
    }

    fn files_url(&self) -> String {
        format!("{}/storage/buckets/{}/files", self.endpoint, self.bucket_id)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header(HEADER_PROJECT, &self.project_id)
            .header(HEADER_API_KEY, &self.api_key)
    }

    /// Map non-success statuses onto the collaborator error taxonomy.
    async fn check(response: reqwest::Response) -> StoreResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            401 | 403 => StoreError::Unauthorized(body),
            404 => StoreError::NotFound(body),
            _ => StoreError::RequestFailed(format!("status {}: {}", status, body)),
        })
    }
}

/// Serialize one predicate to the platform's query-term JSON.
///
/// The access combinator becomes an `or` of an ownership `equal` and a
/// shared-with `contains`; category membership is an `equal` with several
/// values; sort terms carry the field name through untouched, so an
/// illegal field is the platform's error to raise.
pub fn wire_term(predicate: &Predicate) -> JsonValue {
    match predicate {
        Predicate::AccessibleBy { owner_id, email } => json!({
            "method": "or",
            "queries": [
                { "method": "equal", "attribute": "ownerId", "values": [owner_id] },
                { "method": "contains", "attribute": "sharedWith", "values": [email] },
            ],
        }),
        Predicate::OwnedBy(owner_id) => json!({
            "method": "equal",
            "attribute": "ownerId",
            "values": [owner_id],
        }),
        Predicate::CategoryIn(categories) => json!({
            "method": "equal",
            "attribute": "category",
            "values": categories,
        }),
        Predicate::NameContains(text) => json!({
            "method": "contains",
            "attribute": "name",
            "values": [text],
        }),
        Predicate::OrderBy { field, direction } => {
            let method = match direction {
                SortDirection::Asc => "orderAsc",
                SortDirection::Desc => "orderDesc",
            };
            json!({ "method": method, "attribute": field })
        }
        Predicate::Limit(limit) => json!({ "method": "limit", "values": [limit] }),
    }
}

#[async_trait]
impl DocumentStore for BackendClient {
    #[tracing::instrument(skip(self, query), fields(terms = query.len()))]
    async fn list(&self, query: &[Predicate]) -> StoreResult<Vec<FileRecord>> {
        let params: Vec<(&str, String)> = query
            .iter()
            .map(|term| ("queries[]", wire_term(term).to_string()))
            .collect();

        let response = self
            .request(reqwest::Method::GET, self.documents_url())
            .query(&params)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: ListDocumentsResponse = response.json().await?;
        Ok(body.documents)
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, id: Uuid) -> StoreResult<Option<FileRecord>> {
        let response = self
            .request(reqwest::Method::GET, self.document_url(id))
            .send()
            .await?;
        match Self::check(response).await {
            Ok(response) => Ok(Some(response.json().await?)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    #[tracing::instrument(skip(self, record), fields(name = %record.name))]
    async fn create(&self, record: NewFileRecord) -> StoreResult<FileRecord> {
        let response = self
            .request(reqwest::Method::POST, self.documents_url())
            .json(&record)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    #[tracing::instrument(skip(self, patch))]
    async fn update(&self, id: Uuid, patch: FilePatch) -> StoreResult<FileRecord> {
        // Flat partial-document body, one field per mutation variant.
        let body = match patch {
            FilePatch::Rename { name } => json!({ "name": name }),
            FilePatch::Share { emails } => json!({ "sharedWith": emails }),
        };
        let response = self
            .request(reqwest::Method::PATCH, self.document_url(id))
            .json(&body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let response = self
            .request(reqwest::Method::DELETE, self.document_url(id))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for BackendClient {
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StoreResult<StoredObject> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| StoreError::RequestFailed(format!("Invalid content type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .request(reqwest::Method::POST, self.files_url())
            .multipart(form)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, object_id: &str) -> StoreResult<()> {
        let url = format!("{}/{}", self.files_url(), object_id);
        let response = self.request(reqwest::Method::DELETE, url).send().await?;
        match Self::check(response).await {
            // Already gone counts as deleted.
            Ok(_) | Err(StoreError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn object_url(&self, object_id: &str) -> String {
        format!(
            "{}/{}/view?project={}",
            self.files_url(),
            object_id,
            self.project_id
        )
    }
}

#[async_trait]
impl AccountService for BackendClient {
    #[tracing::instrument(skip(self, session_token))]
    async fn current_user(&self, session_token: &str) -> StoreResult<UserAccount> {
        let url = format!("{}/account", self.endpoint);
        let response = self
            .http
            .get(url)
            .header(HEADER_PROJECT, &self.project_id)
            .header(HEADER_SESSION, session_token)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}
