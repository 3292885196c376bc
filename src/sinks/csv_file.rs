use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::{Sink, SinkError};
use crate::domain::order::AggregatedOrder;
use crate::pipeline::format_lines;

/// Writes the header and one line per aggregate to a flat file, replacing
/// any previous content.
pub struct CsvFileSink {
    path: PathBuf,
    name: String,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

#[async_trait]
impl Sink for CsvFileSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn write(&mut self, rows: &[AggregatedOrder]) -> Result<usize, SinkError> {
        let mut file = tokio::fs::File::create(&self.path).await?;
        for line in format_lines(rows) {
            file.write_all(line.as_bytes()).await?;
        }
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "Wrote output file");
        Ok(rows.len())
    }
}
