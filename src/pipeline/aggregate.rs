use std::collections::{BTreeMap, BTreeSet};

use super::join::JoinedRow;
use crate::domain::order::AggregatedOrder;

// ============================================================================
// Aggregator - per-order totals over joined rows
// ============================================================================

/// Distinct order ids present in `rows`.
pub fn unique_order_ids(rows: &[JoinedRow<'_>]) -> BTreeSet<i64> {
    rows.iter().map(|r| r.order.id).collect()
}

/// Sum `unit_price` and `tax` over the rows of every id in `order_ids`.
///
/// `order_ids` must come from the same `rows` (see [`aggregate_rows`]); an id
/// with no rows would come out with zero totals. Sums are unrounded. Output
/// follows the iteration order of `order_ids`.
pub fn aggregate(rows: &[JoinedRow<'_>], order_ids: &BTreeSet<i64>) -> Vec<AggregatedOrder> {
    let mut totals: BTreeMap<i64, (f64, f64)> =
        order_ids.iter().map(|id| (*id, (0.0, 0.0))).collect();

    for row in rows {
        if let Some((amount, taxes)) = totals.get_mut(&row.order.id) {
            *amount += row.item.unit_price;
            *taxes += row.item.tax;
        }
    }

    totals
        .into_iter()
        .map(|(order_id, (total_amount, total_taxes))| AggregatedOrder {
            order_id,
            total_amount,
            total_taxes,
        })
        .collect()
}

/// Aggregate every order present in `rows`.
pub fn aggregate_rows(rows: &[JoinedRow<'_>]) -> Vec<AggregatedOrder> {
    let ids = unique_order_ids(rows);
    let out = aggregate(rows, &ids);
    tracing::debug!(rows = rows.len(), orders = out.len(), "Aggregation complete");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderOrigin, OrderStatus};
    use crate::pipeline::filter::{apply_filters, FilterMode};
    use crate::pipeline::join::inner_join;
    use crate::pipeline::testing::{item, order, sample_items, sample_orders};

    #[test]
    fn test_unique_order_ids() {
        let orders = sample_orders();
        let items = sample_items();
        let rows = inner_join(&orders, &items);

        let ids: Vec<i64> = unique_order_ids(&rows).into_iter().collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(unique_order_ids(&[]).is_empty());
    }

    #[test]
    fn test_unfiltered_aggregate() {
        let orders = sample_orders();
        let items = sample_items();
        let rows = inner_join(&orders, &items);

        let out = aggregate_rows(&rows);

        assert_eq!(out.len(), 3);
        let first = out.iter().find(|a| a.order_id == 1).unwrap();
        assert_eq!(first.total_amount, 30.0);
        assert_eq!(first.total_taxes, 3.0);
    }

    #[test]
    fn test_filtered_aggregate_keeps_surviving_orders_only() {
        let orders = sample_orders();
        let items = sample_items();
        let rows = apply_filters(
            inner_join(&orders, &items),
            OrderStatus::Complete,
            OrderOrigin::Online,
            FilterMode::StatusAndOrigin,
        );

        let out = aggregate_rows(&rows);

        let expected = AggregatedOrder {
            order_id: 3,
            total_amount: 20.0,
            total_taxes: 2.0,
        };
        assert_eq!(out, vec![expected]);
    }

    #[test]
    fn test_one_aggregate_per_id_with_exact_sums() {
        let orders = vec![
            order(5, OrderStatus::Pending, OrderOrigin::Phone),
            order(6, OrderStatus::Pending, OrderOrigin::Phone),
        ];
        let items = vec![
            item(5, 0.1, 0.01),
            item(6, 7.25, 0.5),
            item(5, 0.2, 0.02),
            item(5, 0.3, 0.03),
        ];
        let rows = inner_join(&orders, &items);
        let ids = unique_order_ids(&rows);

        let out = aggregate(&rows, &ids);

        assert_eq!(out.len(), ids.len());
        for agg in &out {
            let expected: f64 = rows
                .iter()
                .filter(|r| r.order.id == agg.order_id)
                .map(|r| r.item.unit_price)
                .sum();
            assert_eq!(agg.total_amount, expected);
        }
    }

    #[test]
    fn test_aggregate_of_no_rows() {
        assert!(aggregate_rows(&[]).is_empty());
    }
}
