use anyhow::Result;
use glob::{glob, Pattern};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::PageError;

static PAGE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// A page text file found in the input directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl PageFile {
    /// Page number from the first digit run of the file name
    pub fn page_number(&self) -> Result<u32, PageError> {
        page_number_from_filename(&self.file_name)
    }
}

/// Derive the page number from the first run of digits in a file name.
/// "page_108.txt" → 108; a name without digits is malformed.
pub fn page_number_from_filename(file_name: &str) -> Result<u32, PageError> {
    PAGE_NUMBER_RE
        .find(file_name)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| PageError::MalformedFilename {
            file_name: file_name.to_string(),
        })
}

/// Find every `*.txt` regular file directly inside `input_dir`, sorted by file name.
///
/// A missing or non-directory `input_dir` is the only fatal condition; entries
/// that cannot be inspected are logged and left out.
pub async fn discover_page_files(input_dir: impl AsRef<Path>) -> Result<Vec<PageFile>> {
    let input_dir = input_dir.as_ref();

    let metadata = match fs::metadata(input_dir).await {
        Ok(metadata) => metadata,
        Err(e) => anyhow::bail!("Input directory {} is not accessible: {}", input_dir.display(), e),
    };
    if !metadata.is_dir() {
        anyhow::bail!("Input path is not a directory: {}", input_dir.display());
    }

    let pattern = format!("{}/*.txt", Pattern::escape(&input_dir.display().to_string()));
    debug!("Starting page discovery with pattern: {}", pattern);

    let mut pages = Vec::new();
    for entry in glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => {
                debug!("Not a regular file, ignoring: {}", path.display());
                continue;
            }
            Err(e) => {
                warn!("Cannot access {}: {}", path.display(), e);
                continue;
            }
        }

        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        debug!("Found page file: {}", path.display());
        pages.push(PageFile { path, file_name });
    }

    pages.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    info!("Discovered {} page files in {}", pages.len(), input_dir.display());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = dir.join(name);
        if let Some(parent) = file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&file_path, content).await?;
        Ok(file_path)
    }

    #[test]
    fn test_page_number_from_filename() {
        assert_eq!(page_number_from_filename("page_108.txt").unwrap(), 108);
        assert_eq!(page_number_from_filename("108.txt").unwrap(), 108);
        assert_eq!(page_number_from_filename("p12_part3.txt").unwrap(), 12);
        assert_eq!(page_number_from_filename("page_007.txt").unwrap(), 7);
    }

    #[test]
    fn test_page_number_malformed() {
        let err = page_number_from_filename("cover.txt").unwrap_err();
        assert!(matches!(
            err,
            PageError::MalformedFilename { ref file_name } if file_name == "cover.txt"
        ));
        assert!(page_number_from_filename("page_99999999999999.txt").is_err());
    }

    #[tokio::test]
    async fn test_discover_sorted_txt_files_only() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "page_110.txt", "b").await.unwrap();
        create_test_file(temp_dir.path(), "page_108.txt", "a").await.unwrap();
        create_test_file(temp_dir.path(), "notes.md", "ignored").await.unwrap();
        create_test_file(temp_dir.path(), "nested/page_1.txt", "ignored").await.unwrap();
        std::fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

        let pages = discover_page_files(temp_dir.path()).await.unwrap();
        let names: Vec<_> = pages.iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(names, vec!["page_108.txt", "page_110.txt"]);
    }

    #[tokio::test]
    async fn test_discover_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let pages = discover_page_files(temp_dir.path()).await.unwrap();
        assert!(pages.is_empty());
    }

    #[tokio::test]
    async fn test_missing_input_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        assert!(discover_page_files(&missing).await.is_err());

        let file = create_test_file(temp_dir.path(), "page_1.txt", "x").await.unwrap();
        assert!(discover_page_files(&file).await.is_err());
    }
}
