use std::collections::HashMap;

use crate::domain::order::{LineItem, Order};

/// One (order, matching line item) pair.
///
/// Invariant: `item.order_id == order.id`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedRow<'a> {
    pub order: &'a Order,
    pub item: &'a LineItem,
}

/// Inner join of orders and line items on order id.
///
/// Rows are grouped by order input order, then by line item input order.
/// Orders without items produce nothing; items without an order are dropped.
pub fn inner_join<'a>(orders: &'a [Order], items: &'a [LineItem]) -> Vec<JoinedRow<'a>> {
    let mut by_order: HashMap<i64, Vec<&'a LineItem>> = HashMap::new();
    for item in items {
        by_order.entry(item.order_id).or_default().push(item);
    }

    let mut rows = Vec::with_capacity(items.len());
    for order in orders {
        if let Some(matching) = by_order.get(&order.id) {
            rows.extend(matching.iter().map(|item| JoinedRow { order, item }));
        }
    }

    tracing::debug!(
        orders = orders.len(),
        items = items.len(),
        rows = rows.len(),
        "Inner join complete"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderOrigin, OrderStatus};
    use crate::pipeline::testing::{item, order, sample_items, sample_orders};

    #[test]
    fn test_join_pairs_every_matching_item() {
        let orders = sample_orders();
        let items = sample_items();

        let rows = inner_join(&orders, &items);

        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_eq!(row.item.order_id, row.order.id);
        }
    }

    #[test]
    fn test_join_preserves_order_then_item_order() {
        let orders = vec![
            order(2, OrderStatus::Complete, OrderOrigin::Phone),
            order(1, OrderStatus::Pending, OrderOrigin::Online),
        ];
        let items = vec![
            item(1, 10.0, 1.0),
            item(2, 15.0, 1.5),
            item(1, 20.0, 2.0),
            item(2, 5.0, 0.5),
        ];

        let rows = inner_join(&orders, &items);
        let seen: Vec<(i64, f64)> = rows
            .iter()
            .map(|r| (r.order.id, r.item.unit_price))
            .collect();

        assert_eq!(seen, vec![(2, 15.0), (2, 5.0), (1, 10.0), (1, 20.0)]);
    }

    #[test]
    fn test_join_is_inner() {
        let orders = vec![
            order(1, OrderStatus::Pending, OrderOrigin::Online),
            order(2, OrderStatus::Pending, OrderOrigin::Online),
        ];
        let items = vec![item(1, 10.0, 1.0), item(99, 1.0, 0.1)];

        let rows = inner_join(&orders, &items);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order.id, 1);
    }

    #[test]
    fn test_row_count_matches_per_order_item_counts() {
        let orders = sample_orders();
        let items = sample_items();

        let expected: usize = orders
            .iter()
            .map(|o| items.iter().filter(|i| i.order_id == o.id).count())
            .sum();

        assert_eq!(inner_join(&orders, &items).len(), expected);
    }

    #[test]
    fn test_join_of_empty_inputs() {
        assert!(inner_join(&[], &sample_items()).is_empty());
        assert!(inner_join(&sample_orders(), &[]).is_empty());
    }
}
