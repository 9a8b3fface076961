use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::error::PageError;

/// Buffer size for async page reads
const READ_BUFFER_SIZE: usize = 8192;

/// Statistics for one page read
#[derive(Debug, Clone, Default)]
pub struct ReadStats {
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Async reader that loads a page file line by line
#[derive(Debug, Default)]
pub struct PageReader;

impl PageReader {
    /// Read every line of a page file. Line terminators (`\n` or `\r\n`) are
    /// stripped. Open failures and invalid UTF-8 both surface as `UnreadableFile`.
    pub async fn read_page_lines<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<String>, ReadStats), PageError> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();
        let unreadable = |source| PageError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).await.map_err(unreadable)?;
        let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
        let mut lines = reader.lines();

        let mut result_lines = Vec::new();
        let mut byte_count = 0u64;
        while let Some(line) = lines.next_line().await.map_err(unreadable)? {
            byte_count += line.len() as u64 + 1;
            result_lines.push(line);
        }

        let stats = ReadStats {
            lines_read: result_lines.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };
        debug!(
            "Read {}: {} lines, {} bytes in {}ms",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            stats.duration_ms
        );
        Ok((result_lines, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    #[tokio::test]
    async fn test_read_page_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("page_1.txt");
        fs::write(&file_path, "John Smith, clerk\r\nr 2103 Bryant av S\n\nlast").await.unwrap();

        let (lines, stats) = PageReader::default().read_page_lines(&file_path).await.unwrap();
        assert_eq!(lines, vec!["John Smith, clerk", "r 2103 Bryant av S", "", "last"]);
        assert_eq!(stats.lines_read, 4);
    }

    #[tokio::test]
    async fn test_missing_file_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let err = PageReader::default()
            .read_page_lines(temp_dir.path().join("page_2.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, PageError::UnreadableFile { .. }));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("page_3.txt");
        fs::write(&file_path, [0xFF, 0xFE, 0xFD]).await.unwrap();

        let err = PageReader::default().read_page_lines(&file_path).await.unwrap_err();
        assert_eq!(err.kind(), "unreadable_file");
    }
}
