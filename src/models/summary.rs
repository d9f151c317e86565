use serde::Serialize;

/// Aggregate figures computed from a site mapping document.
///
/// `pending_sites` is always the remainder after complete and in-progress
/// sites, so the three status buckets sum to `total_sites`.
/// `unrecognized_status_sites` is the subset of pending sites whose status
/// string was not one of the known tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationSummary {
    pub total_sites: usize,
    pub complete_sites: usize,
    pub in_progress_sites: usize,
    pub pending_sites: usize,
    pub unrecognized_status_sites: usize,
    #[serde(rename = "totalStorageGB")]
    pub total_storage_gb: f64,
    #[serde(rename = "totalStorageTB")]
    pub total_storage_tb: f64,
    pub total_items: u64,
}

/// Site counts per status bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub complete: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub unrecognized: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.complete + self.in_progress + self.pending
    }
}

impl MigrationSummary {
    pub fn complete_percent(&self) -> f64 {
        percent_of(self.complete_sites, self.total_sites)
    }

    pub fn in_progress_percent(&self) -> f64 {
        percent_of(self.in_progress_sites, self.total_sites)
    }

    pub fn pending_percent(&self) -> f64 {
        percent_of(self.pending_sites, self.total_sites)
    }
}

fn percent_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
