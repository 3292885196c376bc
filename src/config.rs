use std::path::PathBuf;

use clap::Parser;

use crate::domain::order::{OrderOrigin, OrderStatus};
use crate::pipeline::{FilterMode, FilterSpec};

// ============================================================================
// Command Line & Environment Configuration
// ============================================================================

/// Join orders with their line items and write per-order totals.
#[derive(Parser, Debug, Clone)]
#[command(name = "order_etl", version)]
pub struct Cli {
    /// Orders table (id,client_id,placed_at,status,origin)
    #[arg(long, env = "ORDERS_PATH", default_value = "orders.csv")]
    pub orders: PathBuf,

    /// Line items table (order_id,product_id,quantity,unit_price,tax)
    #[arg(long, env = "ITEMS_PATH", default_value = "order_items.csv")]
    pub items: PathBuf,

    /// Output file for the aggregated totals
    #[arg(long, env = "OUTPUT_PATH", default_value = "order_totals.csv")]
    pub output: PathBuf,

    /// PostgreSQL connection string. The database sink is skipped when unset.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Destination table for the database sink
    #[arg(long, env = "OUTPUT_TABLE", default_value = "order_totals")]
    pub table: String,

    /// Write a JSON run report to this path
    #[arg(long, env = "REPORT_PATH")]
    pub report: Option<PathBuf>,

    /// Optional filters: [STATUS] [ORIGIN], STATUS in Pending|Complete|Cancelled, ORIGIN in O|P
    #[arg(value_name = "FILTER")]
    pub filters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{reason}\n\nusage: order_etl [STATUS] [ORIGIN]\n  \
         (no arguments)    no filtering\n  \
         STATUS            keep orders with STATUS (Pending, Complete, Cancelled)\n  \
         ORIGIN            keep orders with ORIGIN (O = online, P = phone)\n  \
         STATUS ORIGIN     keep orders matching both")]
pub struct UsageError {
    pub reason: String,
}

impl UsageError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Cli {
    pub fn filter_spec(&self) -> Result<FilterSpec, UsageError> {
        derive_filter(&self.filters)
    }
}

/// Map positional arguments to a filter mode and its values.
pub fn derive_filter<S: AsRef<str>>(args: &[S]) -> Result<FilterSpec, UsageError> {
    let defaults = FilterSpec::unfiltered();

    match args {
        [] => Ok(defaults),
        [one] => {
            let one = one.as_ref();
            if let Some(status) = OrderStatus::from_token(one) {
                Ok(FilterSpec {
                    mode: FilterMode::StatusOnly,
                    status,
                    ..defaults
                })
            } else if let Some(origin) = OrderOrigin::from_token(one) {
                Ok(FilterSpec {
                    mode: FilterMode::OriginOnly,
                    origin,
                    ..defaults
                })
            } else {
                Err(UsageError::new(format!("unrecognized status or origin: {:?}", one)))
            }
        }
        [status, origin] => {
            let (status, origin) = (status.as_ref(), origin.as_ref());
            let status = OrderStatus::from_token(status)
                .ok_or_else(|| UsageError::new(format!("unrecognized status: {:?}", status)))?;
            let origin = OrderOrigin::from_token(origin)
                .ok_or_else(|| UsageError::new(format!("unrecognized origin: {:?}", origin)))?;
            Ok(FilterSpec {
                mode: FilterMode::StatusAndOrigin,
                status,
                origin,
            })
        }
        more => Err(UsageError::new(format!(
            "expected at most 2 filter arguments, got {}",
            more.len()
        ))),
    }
}
