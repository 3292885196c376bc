// ============================================================================
// Record Decoding Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("Expected {expected} fields, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("Field '{field}' is not a valid integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Field '{field}' is not a valid decimal: {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Unknown order status: {0:?} (expected Pending, Complete or Cancelled)")]
    UnknownStatus(String),

    #[error("Unknown order origin: {0:?} (expected O or P)")]
    UnknownOrigin(String),
}
