// ============================================================================
// Order Domain - typed order and line item records
// ============================================================================
//
// This module contains the order-specific code:
// - Value objects (Order, LineItem, OrderStatus, OrderOrigin, AggregatedOrder)
// - Decoder (raw text fields -> value objects)
// - Errors (DecodeError)
//
// The relational transform stages live in crate::pipeline.
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod decoder;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use decoder::*;
