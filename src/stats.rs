// Per-page and run-level statistics plus the JSON writers for run output

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::record::ResidentRecord;

/// Outcome counters for one page file
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PageStats {
    /// Page file path as discovered
    pub path: String,
    /// None when the file name carried no page number
    pub page_number: Option<u32>,
    pub lines_read: u64,
    /// Stitched fragments handed to the extractor
    pub fragments: u64,
    /// Records kept in the output
    pub records: u64,
    pub rejected_as_ad: u64,
    /// Records dropped for carrying no name and no street number. Always zero with
    /// the current extractor: every record it returns already has a last name.
    pub rejected_incomplete: u64,
    pub processing_time_ms: u64,
    /// "success" or "skipped"
    pub status: String,
    /// Error message when the page was skipped
    pub error: Option<String>,
}

/// Aggregate statistics for one collection run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// Unix timestamp (seconds) when the run started
    pub run_start: u64,
    pub total_processing_time_ms: u64,
    pub pages_processed: u64,
    pub pages_skipped: u64,
    pub total_fragments: u64,
    pub total_records: u64,
    pub page_stats: Vec<PageStats>,
}

impl RunStats {
    pub fn started_now() -> Self {
        Self {
            run_start: std::time::SystemTime::now()
                .duration_since(std::time::SystemTime::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Fold one page's counters into the totals
    pub fn record_page(&mut self, page: PageStats) {
        if page.error.is_some() {
            self.pages_skipped += 1;
        } else {
            self.pages_processed += 1;
        }
        self.total_fragments += page.fragments;
        self.total_records += page.records;
        self.page_stats.push(page);
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Write the record collection as a pretty-printed JSON array
pub async fn write_records(path: &Path, records: &[ResidentRecord]) -> Result<()> {
    write_json(path, records).await
}

/// Write run statistics as pretty-printed JSON
pub async fn write_stats(path: &Path, stats: &RunStats) -> Result<()> {
    write_json(path, stats).await
}
