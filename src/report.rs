use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pipeline::{FilterSpec, StageCounts};

// ============================================================================
// Run Report - what one batch run did
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub filter: FilterSpec,
    #[serde(flatten)]
    pub counts: StageCounts,
    /// Sink name and rows written, in write order
    pub sinks: Vec<SinkOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SinkOutcome {
    pub sink: String,
    pub rows_written: usize,
}

impl RunReport {
    pub fn new(
        run_id: Uuid,
        started_at: DateTime<Utc>,
        filter: FilterSpec,
        counts: StageCounts,
    ) -> Self {
        Self {
            run_id,
            started_at,
            finished_at: started_at,
            filter,
            counts,
            sinks: Vec::new(),
        }
    }

    pub fn record_sink(&mut self, sink: &str, rows_written: usize) {
        self.sinks.push(SinkOutcome {
            sink: sink.to_string(),
            rows_written,
        });
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }

    pub async fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write run report to {}", path.display()))?;
        Ok(())
    }
}
