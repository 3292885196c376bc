use std::str::FromStr;

use super::errors::DecodeError;
use super::value_objects::{LineItem, Order, OrderOrigin, OrderStatus};

// ============================================================================
// Record Decoder - raw text fields to typed entities
// ============================================================================
//
// Field layouts:
//   order:     [id, client_id, placed_at, status, origin]
//   line item: [order_id, product_id, quantity, unit_price, tax]
//
// ============================================================================

pub const ORDER_FIELDS: usize = 5;
pub const LINE_ITEM_FIELDS: usize = 5;

pub fn decode_order<S: AsRef<str>>(fields: &[S]) -> Result<Order, DecodeError> {
    check_arity(fields, ORDER_FIELDS)?;

    let status = fields[3].as_ref();
    let origin = fields[4].as_ref();

    Ok(Order {
        id: parse_int("id", fields[0].as_ref())?,
        client_id: parse_int("client_id", fields[1].as_ref())?,
        placed_at: fields[2].as_ref().to_string(),
        status: OrderStatus::from_token(status)
            .ok_or_else(|| DecodeError::UnknownStatus(status.to_string()))?,
        origin: OrderOrigin::from_token(origin)
            .ok_or_else(|| DecodeError::UnknownOrigin(origin.to_string()))?,
    })
}

pub fn decode_line_item<S: AsRef<str>>(fields: &[S]) -> Result<LineItem, DecodeError> {
    check_arity(fields, LINE_ITEM_FIELDS)?;

    Ok(LineItem {
        order_id: parse_int("order_id", fields[0].as_ref())?,
        product_id: parse_int("product_id", fields[1].as_ref())?,
        quantity: parse_int("quantity", fields[2].as_ref())?,
        unit_price: parse_decimal("unit_price", fields[3].as_ref())?,
        tax: parse_decimal("tax", fields[4].as_ref())?,
    })
}

impl Order {
    /// Render back to raw field order, the inverse of [`decode_order`].
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.client_id.to_string(),
            self.placed_at.clone(),
            self.status.token().to_string(),
            self.origin.token().to_string(),
        ]
    }
}

impl LineItem {
    /// Render back to raw field order, the inverse of [`decode_line_item`].
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.product_id.to_string(),
            self.quantity.to_string(),
            self.unit_price.to_string(),
            self.tax.to_string(),
        ]
    }
}

fn check_arity<S>(fields: &[S], expected: usize) -> Result<(), DecodeError> {
    if fields.len() != expected {
        return Err(DecodeError::Arity {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, DecodeError> {
    i64::from_str(value).map_err(|_| DecodeError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

// NaN and infinities parse as f64 but are never valid money.
fn parse_decimal(field: &'static str, value: &str) -> Result<f64, DecodeError> {
    match f64::from_str(value) {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DecodeError::InvalidDecimal {
            field,
            value: value.to_string(),
        }),
    }
}
