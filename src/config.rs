use std::path::PathBuf;

/// Label stamped into every record when none is configured
pub const DEFAULT_DIRECTORY_LABEL: &str = "Minneapolis 1900";

/// Where the record collection is written when no output path is configured
pub const DEFAULT_OUTPUT_PATH: &str = "parsed_output.json";

/// Run configuration passed explicitly into the collector
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Directory holding one OCR text file per page
    pub input_dir: PathBuf,
    /// Destination for the JSON record collection
    pub output_path: PathBuf,
    /// Source volume name copied into each record's DirectoryName
    pub directory_label: String,
    /// Abort on the first unusable page instead of skipping it
    pub fail_fast: bool,
}

impl CollectorConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            directory_label: DEFAULT_DIRECTORY_LABEL.to_string(),
            fail_fast: false,
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_directory_label(mut self, directory_label: impl Into<String>) -> Self {
        self.directory_label = directory_label.into();
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}
