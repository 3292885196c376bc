//! Shared fixtures for pipeline stage tests.

use crate::domain::order::{LineItem, Order, OrderOrigin, OrderStatus};

pub fn order(id: i64, status: OrderStatus, origin: OrderOrigin) -> Order {
    Order {
        id,
        client_id: 100 + id,
        placed_at: format!("t{}", id),
        status,
        origin,
    }
}

pub fn item(order_id: i64, unit_price: f64, tax: f64) -> LineItem {
    LineItem {
        order_id,
        product_id: 1,
        quantity: 1,
        unit_price,
        tax,
    }
}

/// Orders 1 (Pending/Online), 2 (Complete/Phone), 3 (Complete/Online).
pub fn sample_orders() -> Vec<Order> {
    vec![
        order(1, OrderStatus::Pending, OrderOrigin::Online),
        order(2, OrderStatus::Complete, OrderOrigin::Phone),
        order(3, OrderStatus::Complete, OrderOrigin::Online),
    ]
}

pub fn sample_items() -> Vec<LineItem> {
    vec![
        item(1, 10.0, 1.0),
        item(1, 20.0, 2.0),
        item(2, 15.0, 1.5),
        item(3, 20.0, 2.0),
    ]
}
