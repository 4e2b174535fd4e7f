//! Configuration module
//!
//! Environment-driven configuration for the API server and the backend
//! platform clients, loaded once at startup and validated before any
//! service handle is constructed.

use std::env;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Which backend implementation serves the collaborator traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// The hosted platform, reached over HTTP.
    Remote,
    /// In-process stores for tests and local development.
    Memory,
}

impl std::str::FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "remote" => Ok(BackendKind::Remote),
            "memory" => Ok(BackendKind::Memory),
            other => Err(anyhow::anyhow!(
                "Invalid STORAGE_BACKEND: {}. Must be 'remote' or 'memory'",
                other
            )),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub max_upload_bytes: usize,
    pub backend_kind: BackendKind,
    // Hosted platform connection (required when backend_kind is Remote)
    pub endpoint_url: Option<String>,
    pub project_id: Option<String>,
    pub api_key: Option<String>,
    pub database_id: Option<String>,
    pub collection_id: Option<String>,
    pub bucket_id: Option<String>,
    /// Base URL used by the in-memory backend when constructing object URLs.
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = env::var("SERVER_PORT")
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid SERVER_PORT: {}", e))?
            .unwrap_or(DEFAULT_SERVER_PORT);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .map(|v| v.parse::<usize>())
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid MAX_UPLOAD_BYTES: {}", e))?
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let backend_kind = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "remote".to_string())
            .parse::<BackendKind>()?;

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", server_port));

        Ok(Config {
            server_port,
            cors_origins,
            environment,
            max_upload_bytes,
            backend_kind,
            endpoint_url: env::var("BACKEND_ENDPOINT").ok(),
            project_id: env::var("BACKEND_PROJECT_ID").ok(),
            api_key: env::var("BACKEND_API_KEY").ok(),
            database_id: env::var("BACKEND_DATABASE_ID").ok(),
            collection_id: env::var("BACKEND_FILES_COLLECTION_ID").ok(),
            bucket_id: env::var("BACKEND_BUCKET_ID").ok(),
            public_base_url,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.backend_kind == BackendKind::Remote {
            for (value, name) in [
                (&self.endpoint_url, "BACKEND_ENDPOINT"),
                (&self.project_id, "BACKEND_PROJECT_ID"),
                (&self.api_key, "BACKEND_API_KEY"),
                (&self.database_id, "BACKEND_DATABASE_ID"),
                (&self.collection_id, "BACKEND_FILES_COLLECTION_ID"),
                (&self.bucket_id, "BACKEND_BUCKET_ID"),
            ] {
                match value {
                    Some(v) if !v.is_empty() => {}
                    _ => {
                        return Err(anyhow::anyhow!(
                            "{} is required when STORAGE_BACKEND is 'remote'",
                            name
                        ))
                    }
                }
            }
        }
        if self.max_upload_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_BYTES must be positive"));
        }
        Ok(())
    }

    /// A memory-backend configuration for tests.
    pub fn for_tests() -> Self {
        Config {
            server_port: 0,
            cors_origins: vec![],
            environment: "test".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            backend_kind: BackendKind::Memory,
            endpoint_url: None,
            project_id: None,
            api_key: None,
            database_id: None,
            collection_id: None,
            bucket_id: None,
            public_base_url: "http://localhost:8080".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_backend_requires_connection_settings() {
        let mut config = Config::for_tests();
        config.backend_kind = BackendKind::Remote;
        assert!(config.validate().is_err());

        config.endpoint_url = Some("https://backend.example.com/v1".into());
        config.project_id = Some("proj".into());
        config.api_key = Some("key".into());
        config.database_id = Some("db".into());
        config.collection_id = Some("files".into());
        config.bucket_id = Some("bucket".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn memory_backend_validates_without_connection_settings() {
        assert!(Config::for_tests().validate().is_ok());
    }

    #[test]
    fn backend_kind_parsing() {
        assert_eq!("remote".parse::<BackendKind>().unwrap(), BackendKind::Remote);
        assert_eq!("MEMORY".parse::<BackendKind>().unwrap(), BackendKind::Memory);
        assert!("postgres".parse::<BackendKind>().is_err());
    }
}
