// ============================================================================
// Domain Layer
// ============================================================================
//
// Entities of the order totals job and the rules for decoding them from raw
// rows. Nothing in here performs I/O.
//
// ============================================================================

pub mod order;
