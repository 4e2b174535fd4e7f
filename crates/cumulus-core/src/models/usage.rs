use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::FileCategory;
use crate::constants::STORAGE_QUOTA_BYTES;

/// Accumulated usage for one category bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUsage {
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Per-category usage plus grand total against the fixed quota.
///
/// Recomputed fresh on every request; never persisted or incrementally
/// maintained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub image: CategoryUsage,
    pub video: CategoryUsage,
    pub audio: CategoryUsage,
    pub document: CategoryUsage,
    pub other: CategoryUsage,
    pub total_used: i64,
    pub quota: i64,
}

impl UsageSummary {
    /// All buckets zero/unset, quota at the fixed ceiling.
    pub fn empty() -> Self {
        UsageSummary {
            image: CategoryUsage::default(),
            video: CategoryUsage::default(),
            audio: CategoryUsage::default(),
            document: CategoryUsage::default(),
            other: CategoryUsage::default(),
            total_used: 0,
            quota: STORAGE_QUOTA_BYTES,
        }
    }

    pub fn bucket(&self, category: FileCategory) -> &CategoryUsage {
        match category {
            FileCategory::Image => &self.image,
            FileCategory::Video => &self.video,
            FileCategory::Audio => &self.audio,
            FileCategory::Document => &self.document,
            FileCategory::Other => &self.other,
        }
    }

    pub fn bucket_mut(&mut self, category: FileCategory) -> &mut CategoryUsage {
        match category {
            FileCategory::Image => &mut self.image,
            FileCategory::Video => &mut self.video,
            FileCategory::Audio => &mut self.audio,
            FileCategory::Document => &mut self.document,
            FileCategory::Other => &mut self.other,
        }
    }
}

impl Default for UsageSummary {
    fn default() -> Self {
        Self::empty()
    }
}
