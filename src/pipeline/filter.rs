use std::fmt;

use serde::Serialize;

use super::join::JoinedRow;
use crate::domain::order::{OrderOrigin, OrderStatus};

// ============================================================================
// Filter Engine
// ============================================================================
//
// Numeric mode codes:
//   1 = status AND origin
//   2 = status only
//   3 = origin only
//   4 = no filtering
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid filter mode {0} (expected 1, 2, 3 or 4)")]
    InvalidMode(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterMode {
    StatusAndOrigin,
    StatusOnly,
    OriginOnly,
    Unfiltered,
}

impl FilterMode {
    pub fn from_code(code: u8) -> Result<Self, FilterError> {
        match code {
            1 => Ok(FilterMode::StatusAndOrigin),
            2 => Ok(FilterMode::StatusOnly),
            3 => Ok(FilterMode::OriginOnly),
            4 => Ok(FilterMode::Unfiltered),
            other => Err(FilterError::InvalidMode(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            FilterMode::StatusAndOrigin => 1,
            FilterMode::StatusOnly => 2,
            FilterMode::OriginOnly => 3,
            FilterMode::Unfiltered => 4,
        }
    }
}

/// A filter mode together with the values it compares against.
///
/// Values not consulted by `mode` are carried but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub mode: FilterMode,
    pub status: OrderStatus,
    pub origin: OrderOrigin,
}

impl FilterSpec {
    pub fn unfiltered() -> Self {
        Self {
            mode: FilterMode::Unfiltered,
            status: OrderStatus::Pending,
            origin: OrderOrigin::Online,
        }
    }

    pub fn apply<'a>(&self, rows: Vec<JoinedRow<'a>>) -> Vec<JoinedRow<'a>> {
        apply_filters(rows, self.status, self.origin, self.mode)
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            FilterMode::StatusAndOrigin => {
                let (status, origin) = (self.status.token(), self.origin.token());
                write!(f, "status={} origin={}", status, origin)
            }
            FilterMode::StatusOnly => write!(f, "status={}", self.status.token()),
            FilterMode::OriginOnly => write!(f, "origin={}", self.origin.token()),
            FilterMode::Unfiltered => write!(f, "none"),
        }
    }
}

pub fn filter_by_status<'a>(status: OrderStatus, rows: Vec<JoinedRow<'a>>) -> Vec<JoinedRow<'a>> {
    rows.into_iter()
        .filter(|r| r.order.status == status)
        .collect()
}

pub fn filter_by_origin<'a>(origin: OrderOrigin, rows: Vec<JoinedRow<'a>>) -> Vec<JoinedRow<'a>> {
    rows.into_iter()
        .filter(|r| r.order.origin == origin)
        .collect()
}

pub fn apply_filters<'a>(
    rows: Vec<JoinedRow<'a>>,
    status: OrderStatus,
    origin: OrderOrigin,
    mode: FilterMode,
) -> Vec<JoinedRow<'a>> {
    let before = rows.len();
    let rows = match mode {
        FilterMode::StatusAndOrigin => filter_by_origin(origin, filter_by_status(status, rows)),
        FilterMode::StatusOnly => filter_by_status(status, rows),
        FilterMode::OriginOnly => filter_by_origin(origin, rows),
        FilterMode::Unfiltered => rows,
    };

    tracing::debug!(
        mode = mode.code(),
        before = before,
        after = rows.len(),
        "Filters applied"
    );
    rows
}
