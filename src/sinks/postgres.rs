//! PostgreSQL sink.
//!
//! Upserts each aggregate into a table keyed by `order_id`. Values are bound
//! as the same two-decimal text written to the flat file and cast to their
//! column types by the server. Rows are written one statement at a time with
//! no enclosing transaction.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{Sink, SinkError};
use crate::domain::order::AggregatedOrder;
use crate::pipeline::format_values;

#[derive(Debug, Clone)]
pub struct PostgresSinkConfig {
    pub connection_url: String,
    pub table_name: String,
    pub max_connections: u32,
}

impl PostgresSinkConfig {
    pub fn new(
        connection_url: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Result<Self, SinkError> {
        let table_name = table_name.into();
        validate_identifier(&table_name)?;

        Ok(Self {
            connection_url: connection_url.into(),
            table_name,
            max_connections: 1,
        })
    }

    pub fn create_table_sql(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\
             order_id BIGINT PRIMARY KEY, \
             total_amount NUMERIC(14, 2) NOT NULL, \
             total_taxes NUMERIC(14, 2) NOT NULL)",
            self.table_name
        )
    }

    pub fn upsert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (order_id, total_amount, total_taxes) \
             VALUES ($1::BIGINT, $2::NUMERIC, $3::NUMERIC) \
             ON CONFLICT (order_id) DO UPDATE SET \
             total_amount = EXCLUDED.total_amount, \
             total_taxes = EXCLUDED.total_taxes",
            self.table_name
        )
    }
}

/// Table names are interpolated into SQL, so only plain identifiers pass.
fn validate_identifier(name: &str) -> Result<(), SinkError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if !valid || name.len() > 63 {
        return Err(SinkError::Config(format!("invalid table name: {:?}", name)));
    }
    Ok(())
}

pub struct PostgresSink {
    pool: PgPool,
    config: PostgresSinkConfig,
    name: String,
}

impl PostgresSink {
    pub async fn connect(config: PostgresSinkConfig) -> Result<Self, SinkError> {
        tracing::info!(table = %config.table_name, "Connecting to PostgreSQL");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.connection_url)
            .await?;

        let name = format!("postgres:{}", config.table_name);
        Ok(Self { pool, config, name })
    }

    async fn ensure_table(&self) -> Result<(), SinkError> {
        sqlx::query(&self.config.create_table_sql())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Sink for PostgresSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn write(&mut self, rows: &[AggregatedOrder]) -> Result<usize, SinkError> {
        self.ensure_table().await?;

        let sql = self.config.upsert_sql();
        for row in rows {
            let [order_id, total_amount, total_taxes] = format_values(row);
            sqlx::query(&sql)
                .bind(order_id)
                .bind(total_amount)
                .bind(total_taxes)
                .execute(&self.pool)
                .await?;
        }

        tracing::debug!(
            table = %self.config.table_name,
            rows = rows.len(),
            "Upserted aggregates"
        );
        Ok(rows.len())
    }
}
