use std::path::PathBuf;
use thiserror::Error;

/// Failures local to one page file. The collector skips the page and keeps
/// going unless it runs in fail-fast mode.
#[derive(Debug, Error)]
pub enum PageError {
    /// The file name has no digit run to derive a page number from
    #[error("no page number in file name {file_name:?}")]
    MalformedFilename { file_name: String },

    #[error("cannot read page file {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PageError {
    /// Short machine-readable kind used in run statistics
    pub fn kind(&self) -> &'static str {
        match self {
            PageError::MalformedFilename { .. } => "malformed_filename",
            PageError::UnreadableFile { .. } => "unreadable_file",
        }
    }
}
