// ============================================================================
// Output Sinks
// ============================================================================
//
// A sink receives the complete aggregate set of a run. Sinks are only
// invoked after every transform stage has succeeded.
//
// ============================================================================

mod csv_file;
mod postgres;

use async_trait::async_trait;

use crate::domain::order::AggregatedOrder;

pub use csv_file::CsvFileSink;
pub use postgres::{PostgresSink, PostgresSinkConfig};

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[async_trait]
pub trait Sink: Send {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Write all rows; returns the number of rows written.
    async fn write(&mut self, rows: &[AggregatedOrder]) -> Result<usize, SinkError>;
}
