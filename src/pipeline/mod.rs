// ============================================================================
// Transform Pipeline
// ============================================================================
//
// raw rows -> load -> join -> filter -> aggregate
//
// Every stage owns its output and hands it to the next one. The whole run
// is a single synchronous computation over in-memory collections; the
// caller formats the result for the sinks.
//
// ============================================================================

pub mod loader;
pub mod join;
pub mod filter;
pub mod aggregate;
pub mod format;

#[cfg(test)]
pub(crate) mod testing;

use serde::Serialize;

use crate::domain::order::{decode_line_item, decode_order, AggregatedOrder};

pub use aggregate::{aggregate, aggregate_rows, unique_order_ids};
pub use filter::{
    apply_filters, filter_by_origin, filter_by_status, FilterError, FilterMode, FilterSpec,
};
pub use format::{format_lines, format_row, format_values, CSV_HEADER};
pub use join::{inner_join, JoinedRow};
pub use loader::{load_table, LoadError, RawRow};

pub const ORDERS_TABLE: &str = "orders";
pub const LINE_ITEMS_TABLE: &str = "order_items";

/// Row counts observed at each stage of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    pub orders_loaded: usize,
    pub items_loaded: usize,
    pub rows_joined: usize,
    pub rows_after_filter: usize,
    pub orders_aggregated: usize,
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub aggregates: Vec<AggregatedOrder>,
    pub counts: StageCounts,
}

/// Composes the transform stages for one filter configuration.
#[derive(Debug, Clone)]
pub struct Pipeline {
    filter: FilterSpec,
}

impl Pipeline {
    pub fn new(filter: FilterSpec) -> Self {
        Self { filter }
    }

    pub fn run(
        &self,
        raw_orders: &[RawRow],
        raw_items: &[RawRow],
    ) -> Result<PipelineOutput, LoadError> {
        let orders = load_table(ORDERS_TABLE, raw_orders, decode_order)?;
        let items = load_table(LINE_ITEMS_TABLE, raw_items, decode_line_item)?;

        let joined = inner_join(&orders, &items);
        let rows_joined = joined.len();

        let filtered = self.filter.apply(joined);
        let aggregates = aggregate_rows(&filtered);

        let counts = StageCounts {
            orders_loaded: orders.len(),
            items_loaded: items.len(),
            rows_joined,
            rows_after_filter: filtered.len(),
            orders_aggregated: aggregates.len(),
        };

        tracing::info!(
            filter = %self.filter,
            orders = counts.orders_loaded,
            items = counts.items_loaded,
            joined = counts.rows_joined,
            filtered = counts.rows_after_filter,
            aggregated = counts.orders_aggregated,
            "Transform complete"
        );

        Ok(PipelineOutput { aggregates, counts })
    }
}
