// Integration test utilities and common code

use std::path::{Path, PathBuf};
use std::fs;
use tempfile::TempDir;

/// Test fixture helper for a temporary directory of OCR page files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a page text file with given content
    pub fn create_page_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Output path inside the fixture, outside the page directory scan
    #[allow(dead_code)]
    pub fn output_path(&self) -> PathBuf {
        self.root_path.join("out").join("parsed_output.json")
    }
}

/// Collapse all whitespace runs to single spaces
#[allow(dead_code)]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
