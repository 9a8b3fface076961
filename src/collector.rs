use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::CollectorConfig;
use crate::discovery::{discover_page_files, PageFile};
use crate::error::PageError;
use crate::extractor::FieldExtractor;
use crate::reader::PageReader;
use crate::record::ResidentRecord;
use crate::stats::{PageStats, RunStats};
use crate::stitcher::stitch_page;

/// Fragment outcome counters for one page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTally {
    pub fragments: u64,
    pub records: u64,
    pub rejected_as_ad: u64,
    /// Always zero while the ad filter requires a last name; kept as the retention check
    pub rejected_incomplete: u64,
}

/// Stitch, extract and filter one page's lines, preserving fragment order
pub fn process_page<I, S>(
    extractor: &FieldExtractor,
    lines: I,
    page_number: u32,
) -> (Vec<ResidentRecord>, PageTally)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally = PageTally::default();
    let mut records = Vec::new();

    for fragment in stitch_page(lines, page_number) {
        tally.fragments += 1;
        match extractor.parse_fragment(&fragment) {
            None => tally.rejected_as_ad += 1,
            Some(record) if !record.is_retainable() => {
                debug!(
                    page_number,
                    fragment = %fragment.text,
                    "Dropped fragment without name or street number"
                );
                tally.rejected_incomplete += 1;
            }
            Some(record) => {
                tally.records += 1;
                records.push(record);
            }
        }
    }

    (records, tally)
}

/// Everything one run produced: records in page order and the run statistics
#[derive(Debug, Clone)]
pub struct CollectionRun {
    pub records: Vec<ResidentRecord>,
    pub stats: RunStats,
}

/// Drives discovery, reading and extraction over every page of one input directory
pub struct PageCollector {
    config: CollectorConfig,
    extractor: FieldExtractor,
    reader: PageReader,
    progress: ProgressBar,
}

impl PageCollector {
    pub fn new(config: CollectorConfig) -> Self {
        let extractor = FieldExtractor::new(config.directory_label.clone());
        Self {
            config,
            extractor,
            reader: PageReader::default(),
            progress: ProgressBar::hidden(),
        }
    }

    /// Report per-page progress on the given bar; its length is set at run time
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Process every page file in file-name order.
    ///
    /// Pages that fail are skipped and recorded in the stats; with `fail_fast`
    /// the first failure ends the run with an error instead.
    pub async fn run(&self) -> Result<CollectionRun> {
        let run_start = Instant::now();
        let mut stats = RunStats::started_now();
        let mut records = Vec::new();

        let pages = discover_page_files(&self.config.input_dir).await?;
        self.progress.set_length(pages.len() as u64);
        info!("Collecting records from {} pages", pages.len());

        for page in &pages {
            let page_start = Instant::now();
            let mut page_stats = PageStats {
                path: page.path.display().to_string(),
                ..PageStats::default()
            };

            match self.collect_page(page, &mut page_stats).await {
                Ok(page_records) => {
                    page_stats.status = "success".to_string();
                    records.extend(page_records);
                }
                Err(e) => {
                    if self.config.fail_fast {
                        self.progress.abandon();
                        return Err(e)
                            .with_context(|| format!("Aborting run at {}", page.path.display()));
                    }
                    warn!(kind = e.kind(), "Skipping page {}: {}", page.path.display(), e);
                    page_stats.status = "skipped".to_string();
                    page_stats.error = Some(e.to_string());
                }
            }

            page_stats.processing_time_ms = page_start.elapsed().as_millis() as u64;
            stats.record_page(page_stats);
            self.progress.inc(1);
        }

        stats.total_processing_time_ms = run_start.elapsed().as_millis() as u64;
        self.progress.finish_and_clear();
        info!(
            "Collected {} records from {} pages ({} skipped) in {}ms",
            records.len(),
            stats.pages_processed,
            stats.pages_skipped,
            stats.total_processing_time_ms
        );

        Ok(CollectionRun { records, stats })
    }

    async fn collect_page(
        &self,
        page: &PageFile,
        page_stats: &mut PageStats,
    ) -> Result<Vec<ResidentRecord>, PageError> {
        let page_number = page.page_number()?;
        page_stats.page_number = Some(page_number);

        let (lines, read_stats) = self.reader.read_page_lines(&page.path).await?;
        page_stats.lines_read = read_stats.lines_read;

        let (page_records, tally) = process_page(&self.extractor, &lines, page_number);
        page_stats.fragments = tally.fragments;
        page_stats.records = tally.records;
        page_stats.rejected_as_ad = tally.rejected_as_ad;
        page_stats.rejected_incomplete = tally.rejected_incomplete;

        debug!(
            page_number,
            fragments = tally.fragments,
            records = tally.records,
            rejected_as_ad = tally.rejected_as_ad,
            "Processed page {}",
            page.file_name
        );
        Ok(page_records)
    }
}

/// Collect all records for a configuration without progress reporting
pub async fn collect_pages(config: &CollectorConfig) -> Result<CollectionRun> {
    PageCollector::new(config.clone()).run().await
}
