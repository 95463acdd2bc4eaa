//! Error types for period-engine operations.

use thiserror::Error;

/// Errors raised by period arithmetic.
///
/// Construction, containment and the interval algebra never fail once the
/// endpoints are valid instants; only delegated duration arithmetic can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Duration overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, PeriodError>;
