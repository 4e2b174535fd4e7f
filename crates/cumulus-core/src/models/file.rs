use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// File category enum
///
/// Fixed classification used for bucketed usage totals. An unrecognized
/// wire value deserializes to `Other` rather than failing the record, so
/// an unexpected category can never break a listing or the aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Document,
    #[serde(other)]
    Other,
}

impl FileCategory {
    pub const ALL: [FileCategory; 5] = [
        FileCategory::Image,
        FileCategory::Video,
        FileCategory::Audio,
        FileCategory::Document,
        FileCategory::Other,
    ];

    /// Classify a filename extension. Unknown or empty extensions are `Other`.
    pub fn from_extension(extension: &str) -> FileCategory {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" | "webp" | "heic" => {
                FileCategory::Image
            }
            "mp4" | "avi" | "mov" | "mkv" | "webm" | "flv" | "m4v" => FileCategory::Video,
            "mp3" | "wav" | "ogg" | "flac" | "aac" | "m4a" => FileCategory::Audio,
            "pdf" | "doc" | "docx" | "txt" | "md" | "rtf" | "xls" | "xlsx" | "csv" | "ppt"
            | "pptx" | "odt" | "ods" | "odp" | "html" | "htm" | "epub" => FileCategory::Document,
            _ => FileCategory::Other,
        }
    }

    /// Same coercion as deserialization: unknown names land in `Other`.
    pub fn parse_lossy(s: &str) -> FileCategory {
        match s.to_ascii_lowercase().as_str() {
            "image" => FileCategory::Image,
            "video" => FileCategory::Video,
            "audio" => FileCategory::Audio,
            "document" => FileCategory::Document,
            _ => FileCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Image => "image",
            FileCategory::Video => "video",
            FileCategory::Audio => "audio",
            FileCategory::Document => "document",
            FileCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FileCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FileCategory::parse_lossy(s))
    }
}

/// File metadata record as held by the document store.
///
/// Owned by exactly one account; shared with zero or more accounts by
/// email. `object_id` references the backing blob in object storage.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: Uuid,
    pub name: String,
    pub category: FileCategory,
    pub extension: String,
    pub size: i64,
    pub url: String,
    pub owner_id: Uuid,
    pub shared_with: Vec<String>,
    pub object_id: String,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

/// Create payload for a file record. The document store assigns the id
/// and both timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFileRecord {
    pub name: String,
    pub category: FileCategory,
    pub extension: String,
    pub size: i64,
    pub url: String,
    pub owner_id: Uuid,
    pub shared_with: Vec<String>,
    pub object_id: String,
}

/// Tagged mutation payload for a file record: one variant per action the
/// product supports, matched exhaustively by every store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum FilePatch {
    /// Replace the display name (already joined with its extension).
    Rename { name: String },
    /// Replace the set of accounts granted view access.
    Share { emails: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_extensions() {
        assert_eq!(FileCategory::from_extension("PNG"), FileCategory::Image);
        assert_eq!(FileCategory::from_extension("mov"), FileCategory::Video);
        assert_eq!(FileCategory::from_extension("flac"), FileCategory::Audio);
        assert_eq!(FileCategory::from_extension("docx"), FileCategory::Document);
        assert_eq!(FileCategory::from_extension("iso"), FileCategory::Other);
        assert_eq!(FileCategory::from_extension(""), FileCategory::Other);
    }

    #[test]
    fn unknown_wire_category_coerces_to_other() {
        let parsed: FileCategory = serde_json::from_str("\"spreadsheet\"").unwrap();
        assert_eq!(parsed, FileCategory::Other);

        let parsed: FileCategory = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(parsed, FileCategory::Video);
    }

    #[test]
    fn file_record_uses_camel_case_wire_names() {
        let record = FileRecord {
            id: Uuid::nil(),
            name: "report.pdf".into(),
            category: FileCategory::Document,
            extension: "pdf".into(),
            size: 1024,
            url: "https://files.example.com/view/obj-1".into(),
            owner_id: Uuid::nil(),
            shared_with: vec!["friend@example.com".into()],
            object_id: "obj-1".into(),
            created_at: Utc::now(),
            last_modified: Utc::now(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("ownerId").is_some());
        assert!(value.get("sharedWith").is_some());
        assert!(value.get("lastModified").is_some());
        assert!(value.get("owner_id").is_none());
    }
}
