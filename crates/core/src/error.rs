//! Core error types for Bedrock operations using Railway-Oriented Programming.
//!
//! Every expected failure is a specific, structured variant. Nothing in the
//! core panics or returns sentinel values.

use std::fmt;

use thiserror::Error;

/// Arithmetic operation that produced an error, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Neg,
    Abs,
    Pow,
}

impl Operation {
    /// Short lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "rem",
            Self::Neg => "neg",
            Self::Abs => "abs",
            Self::Pow => "pow",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for Bedrock operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Collection errors
    #[error("Index {index} is out of bounds for size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    // Arithmetic errors
    #[error("integer overflow in {operation}({lhs}, {rhs})")]
    Overflow {
        operation: Operation,
        lhs: i64,
        rhs: i64,
    },

    #[error("integer overflow in {operation}({value})")]
    UnaryOverflow { operation: Operation, value: i64 },

    #[error("division by zero in {operation}({dividend}, 0)")]
    DivisionByZero { operation: Operation, dividend: i64 },

    // Conversion errors
    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("cannot parse '{input}' as an integer: {reason}")]
    ParseInteger { input: String, reason: String },

    // Configuration errors
    #[error("{format} config parse error: {reason}")]
    ConfigParse {
        format: &'static str,
        reason: String,
    },
}

impl Error {
    /// Create an index out of bounds error.
    #[must_use]
    pub const fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Create a binary overflow error.
    #[must_use]
    pub const fn overflow(operation: Operation, lhs: i64, rhs: i64) -> Self {
        Self::Overflow {
            operation,
            lhs,
            rhs,
        }
    }

    /// Create a unary overflow error.
    #[must_use]
    pub const fn unary_overflow(operation: Operation, value: i64) -> Self {
        Self::UnaryOverflow { operation, value }
    }

    /// Create a division by zero error.
    #[must_use]
    pub const fn division_by_zero(operation: Operation, dividend: i64) -> Self {
        Self::DivisionByZero {
            operation,
            dividend,
        }
    }

    /// Create a conversion range error.
    pub fn out_of_range(value: impl fmt::Display, target: &'static str) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            target,
        }
    }

    /// Create an integer parse error.
    pub fn parse_integer(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseInteger {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration parse error.
    pub fn config_parse(format: &'static str, reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            format,
            reason: reason.into(),
        }
    }

    /// Whether this error came from integer arithmetic.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Overflow { .. } | Self::UnaryOverflow { .. } | Self::DivisionByZero { .. }
        )
    }
}
