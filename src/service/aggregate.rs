use crate::models::error::Result;
use crate::models::mapping_file::{extract_mappings, parse_records};
use crate::models::site_record::{SiteMigrationRecord, SiteStatus};
use crate::models::summary::{MigrationSummary, StatusCounts};
use log::{info, warn};
use serde_json::Value;
use std::collections::BTreeSet;

const GB_PER_TB: f64 = 1024.0;

/// Parses a site mapping document and aggregates its records.
pub fn summarize_document(document: &Value) -> Result<MigrationSummary> {
    let records = parse_records(extract_mappings(document)?)?;
    let summary = summarize(&records);

    info!(
        "Aggregated {} sites: {} complete, {} in progress, {} pending",
        summary.total_sites, summary.complete_sites, summary.in_progress_sites, summary.pending_sites
    );
    Ok(summary)
}

pub fn summarize(records: &[SiteMigrationRecord]) -> MigrationSummary {
    let counts = count_by_status(records);
    let total_storage_gb = sum_storage(records);

    MigrationSummary {
        total_sites: counts.total(),
        complete_sites: counts.complete,
        in_progress_sites: counts.in_progress,
        pending_sites: counts.pending,
        unrecognized_status_sites: counts.unrecognized,
        total_storage_gb,
        total_storage_tb: gb_to_tb(total_storage_gb),
        total_items: sum_items(records),
    }
}

/// Splits records into complete, in-progress and pending buckets.
///
/// Pending is whatever is left over, so unknown status strings land there.
/// They are also counted separately and logged once per distinct value.
pub fn count_by_status(records: &[SiteMigrationRecord]) -> StatusCounts {
    let complete = records.iter().filter(|r| r.status.is_complete()).count();
    let in_progress = records.iter().filter(|r| r.status.is_in_progress()).count();

    let unrecognized: BTreeSet<&str> = records
        .iter()
        .filter_map(|r| match &r.status {
            SiteStatus::Unrecognized(tag) => Some(tag.as_str()),
            _ => None,
        })
        .collect();
    for tag in &unrecognized {
        warn!("Unrecognized site status '{}' counted as pending", tag);
    }

    StatusCounts {
        complete,
        in_progress,
        pending: records.len() - complete - in_progress,
        unrecognized: records.iter().filter(|r| r.status.is_unrecognized()).count(),
    }
}

/// Total storage across all records in gigabytes.
pub fn sum_storage(records: &[SiteMigrationRecord]) -> f64 {
    records.iter().fold(0.0, |acc, r| acc + r.storage_gb)
}

pub fn sum_items(records: &[SiteMigrationRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.item_count()))
}

pub fn gb_to_tb(gb: f64) -> f64 {
    gb / GB_PER_TB
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::error::ReportError;
    use serde_json::json;

    fn records(value: Value) -> Vec<SiteMigrationRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize(&[]);

        assert_eq!(summary, MigrationSummary::default());
        assert!(summary.total_storage_gb.is_sign_positive());
        assert!(summary.total_storage_tb.is_sign_positive());
    }

    #[test]
    fn test_mixed_statuses_and_storage() {
        let summary = summarize(&records(json!([
            { "status": "complete", "storageGB": 100 },
            { "status": "in-progress", "storageGB": 50 },
            { "status": "other", "storageGB": 0 }
        ])));

        assert_eq!(summary.total_sites, 3);
        assert_eq!(summary.complete_sites, 1);
        assert_eq!(summary.in_progress_sites, 1);
        assert_eq!(summary.pending_sites, 1);
        assert_eq!(summary.unrecognized_status_sites, 1);
        assert_eq!(summary.total_storage_gb, 150.0);
        assert_eq!(summary.total_storage_tb, 150.0 / 1024.0);
        assert!((summary.total_storage_tb - 0.1465).abs() < 0.0001);
        assert_eq!(summary.total_items, 0);
    }

    #[test]
    fn test_libraries_without_status() {
        let summary = summarize(&records(json!([
            { "metadata": { "libraries": [ { "itemCount": 100 }, { "itemCount": 250 } ] } }
        ])));

        assert_eq!(summary.total_items, 350);
        assert_eq!(summary.pending_sites, 1);
        assert_eq!(summary.unrecognized_status_sites, 0);
    }

    #[test]
    fn test_missing_storage_contributes_zero() {
        let summary = summarize(&records(json!([
            { "status": "complete" },
            { "status": "complete", "storageGB": 2.5 }
        ])));

        assert_eq!(summary.total_storage_gb, 2.5);
        assert_eq!(summary.complete_sites, 2);
    }

    #[test]
    fn test_mappings_string_is_malformed() {
        let result = summarize_document(&json!({ "mappings": "not a list" }));

        assert!(matches!(result, Err(ReportError::MalformedInput { .. })));
    }

    #[test]
    fn test_summarize_document() {
        let summary = summarize_document(&json!({
            "mappings": [
                { "status": "complete", "storageGB": 512, "metadata": { "libraries": [ { "itemCount": 10 } ] } },
                { "status": "pending", "storageGB": 512, "metadata": { "libraries": [ { "itemCount": 5 } ] } }
            ]
        }))
        .unwrap();

        assert_eq!(summary.total_sites, 2);
        assert_eq!(summary.complete_sites, 1);
        assert_eq!(summary.pending_sites, 1);
        assert_eq!(summary.total_storage_tb, 1.0);
        assert_eq!(summary.total_items, 15);
    }

    #[test]
    fn test_status_buckets_cover_every_record() {
        let inputs = [
            json!([]),
            json!([{ "status": "failed" }, { "status": "failed" }, {}]),
            json!([{ "status": "complete" }, { "status": "in-progress" }, { "status": "pending" }]),
            json!([{ "status": null }, { "status": "COMPLETE" }, { "status": "complete" }]),
        ];

        for input in inputs {
            let recs = records(input);
            let counts = count_by_status(&recs);
            assert_eq!(counts.total(), recs.len());
            assert!(counts.unrecognized <= counts.pending);

            let summary = summarize(&recs);
            assert_eq!(
                summary.complete_sites + summary.in_progress_sites + summary.pending_sites,
                summary.total_sites
            );
        }
    }

    #[test]
    fn test_items_sum_across_records() {
        let recs = records(json!([
            { "metadata": { "libraries": [ { "itemCount": 1 }, { "itemCount": 2 } ] } },
            { "metadata": {} },
            { "metadata": { "libraries": [ { "itemCount": 3 }, {} ] } },
            {}
        ]));

        assert_eq!(sum_items(&recs), 6);
    }

    #[test]
    fn test_item_sum_saturates() {
        let recs = records(json!([
            { "metadata": { "libraries": [ { "itemCount": u64::MAX } ] } },
            { "metadata": { "libraries": [ { "itemCount": 1 } ] } }
        ]));

        assert_eq!(sum_items(&recs), u64::MAX);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let recs = records(json!([
            { "status": "complete", "storageGB": 33.3 },
            { "status": "in-progress", "storageGB": 0.7, "metadata": { "libraries": [ { "itemCount": 9 } ] } }
        ]));

        assert_eq!(summarize(&recs), summarize(&recs));
    }

    #[test]
    fn test_tb_conversion_is_exact() {
        let recs = records(json!([{ "storageGB": 1.1 }, { "storageGB": 2.2 }, { "storageGB": 3.3 }]));
        let summary = summarize(&recs);

        assert!(summary.total_storage_gb >= 0.0);
        assert_eq!(summary.total_storage_tb, summary.total_storage_gb / 1024.0);
    }
}
