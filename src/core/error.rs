// src/core/error.rs

use thiserror::Error;

/// Errors raised by polynomial operations.
///
/// Array-level multiplication routines never fail; these are detected at the
/// polynomial-object level before any coefficient is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Binary operation on polynomials over different coefficient rings.
    #[error("coefficient rings differ: {left} vs {right}")]
    DomainMismatch {
        /// Ring of the receiver.
        left: String,
        /// Ring of the operand.
        right: String,
    },

    /// A value that must be a unit of the ring is not.
    #[error("{value} is not invertible in {ring}")]
    NotInvertible {
        /// Value that has no inverse.
        value: i64,
        /// Ring the inverse was requested in.
        ring: String,
    },

    /// Exact division was required but leaves a remainder.
    #[error("{value} is not divisible by {divisor}")]
    NotDivisible {
        /// Dividend.
        value: i64,
        /// Divisor.
        divisor: i64,
    },

    /// An exact result does not fit in a machine word.
    #[error("{value} * {factor} / {divisor} does not fit in an i64")]
    Overflow {
        /// Coefficient being scaled.
        value: i64,
        /// Multiplier.
        factor: i64,
        /// Exact divisor.
        divisor: i64,
    },

    /// Modulus outside the supported range `2..=i64::MAX`.
    #[error("invalid modulus {0}: expected a value of at least 2")]
    InvalidModulus(i64),
}

pub type Result<T> = std::result::Result<T, PolyError>;
