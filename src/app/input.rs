//! Batch input reading.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Reads inputs from `path`, or from stdin when `path` is `-`.
///
/// One input per line. Lines are trimmed; blank lines and lines starting with
/// `#` are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a line cannot be read.
pub async fn read_inputs(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        info!("Reading inputs from stdin");
        return read_lines(BufReader::new(tokio::io::stdin())).await;
    }

    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let inputs = read_lines(BufReader::new(file))
        .await
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    info!("Total inputs in file: {}", inputs.len());
    Ok(inputs)
}

async fn read_lines<R>(reader: R) -> Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut inputs = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read line")? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            debug!("Skipping blank or comment line");
            continue;
        }
        inputs.push(trimmed.to_string());
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_lines_skips_comments_and_blanks() {
        let content = "# header\n\nhttps://shopee.co.id\n   \n  # indented comment\n\tbit.ly/abc  \n";
        let inputs = read_lines(BufReader::new(content.as_bytes())).await.unwrap();
        assert_eq!(inputs, ["https://shopee.co.id", "bit.ly/abc"]);
    }

    #[tokio::test]
    async fn test_read_lines_handles_crlf() {
        let content = "random text\r\nhttps://shopee.co.id\r\n";
        let inputs = read_lines(BufReader::new(content.as_bytes())).await.unwrap();
        assert_eq!(inputs, ["random text", "https://shopee.co.id"]);
    }

    #[tokio::test]
    async fn test_read_inputs_missing_file() {
        let result = read_inputs(Path::new("/nonexistent/inputs.txt")).await;
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open input file"));
    }
}
