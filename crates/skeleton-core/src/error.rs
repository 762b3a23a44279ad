//! Error handling for Skeleton Core.
//!
//! The core has exactly one failure mode: an arithmetic result that does not
//! fit in an `i32`, reported only by the `checked_*` operations. The default
//! operations wrap and never fail.

use std::fmt;

use thiserror::Error;

/// Arithmetic operation named in an overflow report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Multiply => f.write_str("*"),
        }
    }
}

/// Root error type for Skeleton Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The exact result is not representable in an `i32`.
    #[error("integer overflow: {a} {op} {b} does not fit in i32")]
    Overflow { op: Operation, a: i32, b: i32 },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Overflow { op, a, b } => vec![
                format!("{a} {op} {b} exceeds the range {}..={}", i32::MIN, i32::MAX),
                "Use the wrapping operation if modular arithmetic is acceptable".into(),
            ],
        }
    }
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;
