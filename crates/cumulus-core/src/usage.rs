//! Usage aggregation.
//!
//! Single pass over one owner's file records: per-category byte totals,
//! per-category latest-modified markers (a running max over parsed
//! timestamps), and a grand total against the fixed quota. Pure function;
//! input order does not affect the result.

use crate::models::{FileRecord, UsageSummary};

pub fn summarize(records: &[FileRecord]) -> UsageSummary {
    let mut summary = UsageSummary::empty();
    for record in records {
        let bucket = summary.bucket_mut(record.category);
        bucket.size += record.size;
        if bucket
            .last_modified
            .map_or(true, |seen| record.last_modified > seen)
        {
            bucket.last_modified = Some(record.last_modified);
        }
        summary.total_used += record.size;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STORAGE_QUOTA_BYTES;
    use crate::models::FileCategory;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    fn record(category: FileCategory, size: i64, modified: DateTime<Utc>) -> FileRecord {
        FileRecord {
            id: Uuid::new_v4(),
            name: format!("file.{}", category),
            category,
            extension: "bin".to_string(),
            size,
            url: "https://files.example.com/view/x".to_string(),
            owner_id: Uuid::new_v4(),
            shared_with: vec![],
            object_id: "x".to_string(),
            created_at: modified,
            last_modified: modified,
        }
    }

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn empty_input_yields_zeroed_buckets_and_full_quota() {
        let summary = summarize(&[]);
        for category in FileCategory::ALL {
            assert_eq!(summary.bucket(category).size, 0);
            assert_eq!(summary.bucket(category).last_modified, None);
        }
        assert_eq!(summary.total_used, 0);
        assert_eq!(summary.quota, STORAGE_QUOTA_BYTES);
        assert_eq!(summary.quota, 2 * 1024 * 1024 * 1024);
    }

    #[test]
    fn accumulates_sizes_and_tracks_latest_timestamp() {
        let t1 = ts(1_000);
        let t2 = ts(2_000);
        let summary = summarize(&[
            record(FileCategory::Image, 100, t1),
            record(FileCategory::Image, 50, t2),
        ]);
        assert_eq!(summary.image.size, 150);
        assert_eq!(summary.image.last_modified, Some(t2));
        assert_eq!(summary.total_used, 150);
        assert_eq!(summary.video.size, 0);
    }

    #[test]
    fn result_is_independent_of_input_order() {
        let records = vec![
            record(FileCategory::Audio, 10, ts(500)),
            record(FileCategory::Audio, 20, ts(300)),
            record(FileCategory::Document, 5, ts(900)),
        ];
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(summarize(&records), summarize(&reversed));
    }

    #[test]
    fn summarize_is_idempotent() {
        let records = vec![
            record(FileCategory::Video, 4_096, ts(100)),
            record(FileCategory::Other, 1, ts(200)),
        ];
        assert_eq!(summarize(&records), summarize(&records));
    }

    #[test]
    fn zero_byte_record_still_advances_the_marker() {
        let t1 = ts(1_000);
        let t2 = ts(5_000);
        let summary = summarize(&[
            record(FileCategory::Document, 64, t1),
            record(FileCategory::Document, 0, t2),
        ]);
        assert_eq!(summary.document.size, 64);
        assert_eq!(summary.document.last_modified, Some(t2));
    }

    #[test]
    fn equal_timestamp_does_not_replace_marker() {
        let t = ts(1_000);
        let summary = summarize(&[
            record(FileCategory::Image, 1, t),
            record(FileCategory::Image, 2, t),
        ]);
        // Strictly-newer comparison: the marker settles on the shared value.
        assert_eq!(summary.image.last_modified, Some(t));
    }

    #[test]
    fn other_bucket_absorbs_unclassified_records() {
        let summary = summarize(&[record(FileCategory::Other, 7, ts(42))]);
        assert_eq!(summary.other.size, 7);
        assert_eq!(summary.total_used, 7);
    }
}
