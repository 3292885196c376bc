use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::RawRow;

// ============================================================================
// Raw Row Reader
// ============================================================================
//
// Splits file content on '\n' and every line on ','. Content ending with a
// newline therefore yields a trailing row holding one empty field, which
// the table loader drops together with the header.
//
// The csv crate is not used here: it swallows that trailing empty row.
//
// ============================================================================

pub fn split_rows(content: &str) -> Vec<RawRow> {
    content
        .split('\n')
        .map(|line| {
            line.strip_suffix('\r')
                .unwrap_or(line)
                .split(',')
                .map(str::to_string)
                .collect()
        })
        .collect()
}

pub async fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let rows = split_rows(&content);
    tracing::debug!(path = %path.display(), rows = rows.len(), "Read raw rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_newline_leaves_empty_row() {
        let rows = split_rows("a,b\n1,2\n");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["a", "b"]);
        assert_eq!(rows[1], vec!["1", "2"]);
        assert_eq!(rows[2], vec![""]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = split_rows("a,b\r\n1,2\r\n");
        assert_eq!(rows[1], vec!["1", "2"]);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(split_rows(""), vec![vec![String::new()]]);
    }

    #[tokio::test]
    async fn test_read_rows_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("orders.csv");
        let content = "id,client_id,placed_at,status,origin\n1,100,t1,Pending,O\n";
        std::fs::write(&path, content).unwrap();

        let rows = read_rows(&path).await.unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][3], "Pending");
    }

    #[tokio::test]
    async fn test_read_rows_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_rows(&dir.path().join("missing.csv")).await.unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
    }
}
