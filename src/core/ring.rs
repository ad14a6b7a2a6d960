// src/core/ring.rs

use std::fmt::{Debug, Display};
use crate::core::error::{PolyError, Result};

/// Coefficient domain of a machine-word polynomial.
///
/// A ring is a small value object held by every polynomial. The polynomial
/// stores raw `i64` words that are assumed to be canonical for its ring;
/// every scalar combine in the "safe" code paths goes through these methods.
///
/// Implementations:
/// - IntegerRing: plain integers, overflow-checked
/// - ModularRing: integers modulo `m`, residues in `[0, m)`
///
/// The ring axioms (associativity, commutativity, distributivity) must hold,
/// otherwise Karatsuba products disagree with classical ones.
pub trait Ring: Clone + Debug + Display + PartialEq + Eq {
    /// a + b
    fn add(&self, a: i64, b: i64) -> i64;

    /// a - b
    fn subtract(&self, a: i64, b: i64) -> i64;

    /// a * b
    fn multiply(&self, a: i64, b: i64) -> i64;

    /// -a
    fn negate(&self, a: i64) -> i64;

    /// Map a raw machine word to its canonical representative.
    fn value_of(&self, a: i64) -> i64;

    /// Canonicalize a whole coefficient buffer in place.
    fn value_of_all(&self, data: &mut [i64]) {
        for x in data.iter_mut() {
            *x = self.value_of(*x);
        }
    }

    /// Exact quotient `a / b`, or an error if `b` does not divide `a` in this ring.
    fn divide_exact(&self, a: i64, b: i64) -> Result<i64>;

    /// Divide every entry of `data` exactly by the same divisor.
    fn divide_all_exact(&self, data: &mut [i64], divisor: i64) -> Result<()> {
        for x in data.iter_mut() {
            *x = self.divide_exact(*x, divisor)?;
        }
        Ok(())
    }

    /// Replace every entry `c` of `data` by `c * factor / divisor`, exactly.
    ///
    /// Leaves `data` untouched on error. The default scales by
    /// `factor / divisor`, which must exist in the ring.
    fn multiply_divide_all_exact(&self, data: &mut [i64], factor: i64, divisor: i64) -> Result<()> {
        let scale = self.divide_exact(factor, divisor)?;
        for x in data.iter_mut() {
            *x = self.multiply(*x, scale);
        }
        Ok(())
    }

    /// Content of a coefficient slice: the positive gcd over Z, the leading
    /// coefficient over a modular ring (so the primitive part is monic).
    fn content(&self, coefficients: &[i64]) -> i64;

    /// Whether `a` is considered negative (only meaningful for signed rings).
    fn is_negative(&self, _a: i64) -> bool {
        false
    }

    /// Short human readable name used in errors and logs.
    fn name(&self) -> String {
        self.to_string()
    }

    /// Fail with `DomainMismatch` unless both rings are the same.
    fn ensure_same(&self, other: &Self) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(PolyError::DomainMismatch {
                left: self.name(),
                right: other.name(),
            })
        }
    }
}
