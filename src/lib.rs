pub mod ad_filter;
pub mod collector;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod normalize;
pub mod reader;
pub mod record;
pub mod stats;
pub mod stitcher;

// Re-export main types for convenient access
pub use collector::{collect_pages, process_page, CollectionRun, PageCollector, PageTally};
pub use config::CollectorConfig;
pub use error::PageError;
pub use extractor::FieldExtractor;
pub use record::{HomeAddress, ResidentRecord};

// Re-export the text heuristics for callers that work on raw strings
pub use ad_filter::looks_like_ad;
pub use discovery::page_number_from_filename;
pub use normalize::{clean_line, normalize_text};
pub use stitcher::{starts_new_entry, stitch_lines, StitchedFragment};
