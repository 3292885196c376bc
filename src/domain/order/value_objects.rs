use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Order header record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub placed_at: String,
    pub status: OrderStatus,
    pub origin: OrderOrigin,
}

/// One product line within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub tax: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Complete,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Complete,
        OrderStatus::Cancelled,
    ];

    /// Token used for this status in raw rows and on the command line.
    pub fn token(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Complete => "Complete",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Case-sensitive exact match.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.token() == token)
    }
}

/// Channel through which an order was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderOrigin {
    Online,
    Phone,
}

impl OrderOrigin {
    pub const ALL: [OrderOrigin; 2] = [OrderOrigin::Online, OrderOrigin::Phone];

    pub fn token(self) -> &'static str {
        match self {
            OrderOrigin::Online => "O",
            OrderOrigin::Phone => "P",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.token() == token)
    }
}

/// Per-order totals, the final output unit of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedOrder {
    pub order_id: i64,
    pub total_amount: f64,
    pub total_taxes: f64,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens_are_case_sensitive() {
        assert_eq!(
            OrderStatus::from_token("Complete"),
            Some(OrderStatus::Complete)
        );
        assert_eq!(OrderStatus::from_token("complete"), None);
        assert_eq!(OrderStatus::from_token("COMPLETE"), None);
        assert_eq!(OrderStatus::from_token(""), None);
    }

    #[test]
    fn test_all_statuses_resolve_from_their_token() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_token(status.token()), Some(status));
        }
    }

    #[test]
    fn test_origin_tokens() {
        assert_eq!(OrderOrigin::from_token("O"), Some(OrderOrigin::Online));
        assert_eq!(OrderOrigin::from_token("P"), Some(OrderOrigin::Phone));
        assert_eq!(OrderOrigin::from_token("Online"), None);
        assert_eq!(OrderOrigin::from_token("o"), None);
    }

    #[test]
    fn test_status_equality() {
        assert_eq!(OrderStatus::Pending, OrderStatus::Pending);
        assert_ne!(OrderStatus::Pending, OrderStatus::Cancelled);
    }
}
