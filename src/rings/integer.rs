// src/rings/integer.rs

use std::fmt;
use quickdiv::DivisorU64;
use crate::core::error::{PolyError, Result};
use crate::core::ring::Ring;
use crate::integer_math::gcd::GCD;

/// Plain integers backed by `i64`.
///
/// Every operation is overflow-checked: a result that does not fit in a
/// machine word panics instead of wrapping. Use the `_unsafe` multiplication
/// entry points when wrapping arithmetic is acceptable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntegerRing;

impl IntegerRing {
    pub fn new() -> Self {
        IntegerRing
    }
}

#[cold]
#[inline(never)]
fn overflow(op: &str, a: i64, b: i64) -> ! {
    panic!("integer overflow in Z: {} {} {}", a, op, b)
}

impl Ring for IntegerRing {
    #[inline]
    fn add(&self, a: i64, b: i64) -> i64 {
        a.checked_add(b).unwrap_or_else(|| overflow("+", a, b))
    }

    #[inline]
    fn subtract(&self, a: i64, b: i64) -> i64 {
        a.checked_sub(b).unwrap_or_else(|| overflow("-", a, b))
    }

    #[inline]
    fn multiply(&self, a: i64, b: i64) -> i64 {
        a.checked_mul(b).unwrap_or_else(|| overflow("*", a, b))
    }

    #[inline]
    fn negate(&self, a: i64) -> i64 {
        a.checked_neg().unwrap_or_else(|| overflow("-", 0, a))
    }

    #[inline]
    fn value_of(&self, a: i64) -> i64 {
        a
    }

    fn value_of_all(&self, _data: &mut [i64]) {}

    fn divide_exact(&self, a: i64, b: i64) -> Result<i64> {
        // checked_rem is None for b == 0 and for i64::MIN / -1
        match a.checked_rem(b) {
            Some(0) => a.checked_div(b).ok_or(PolyError::NotDivisible { value: a, divisor: b }),
            _ => Err(PolyError::NotDivisible { value: a, divisor: b }),
        }
    }

    /// Exact division by a loop-invariant divisor using a precomputed
    /// reciprocal. Leaves `data` untouched on error.
    fn divide_all_exact(&self, data: &mut [i64], divisor: i64) -> Result<()> {
        if divisor == 0 {
            return Err(PolyError::NotDivisible { value: data.first().copied().unwrap_or(0), divisor });
        }
        if divisor == 1 {
            return Ok(());
        }

        let magnitude = divisor.unsigned_abs();
        let fast = DivisorU64::new(magnitude);
        for &x in data.iter() {
            let q = x.unsigned_abs() / fast;
            let negative = (x < 0) != (divisor < 0);
            if q * magnitude != x.unsigned_abs() || (!negative && q > i64::MAX as u64) {
                return Err(PolyError::NotDivisible { value: x, divisor });
            }
        }

        for x in data.iter_mut() {
            let q = (x.unsigned_abs() / fast) as i64;
            *x = if (*x < 0) != (divisor < 0) { q.wrapping_neg() } else { q };
        }
        Ok(())
    }

    /// Exact `c * factor / divisor` through `i128`, so an intermediate
    /// product wider than a word never panics.
    fn multiply_divide_all_exact(&self, data: &mut [i64], factor: i64, divisor: i64) -> Result<()> {
        if divisor == 0 {
            return Err(PolyError::NotDivisible { value: factor, divisor });
        }
        let scaled = data
            .iter()
            .map(|&c| {
                let product = c as i128 * factor as i128;
                if product % divisor as i128 != 0 {
                    return Err(PolyError::NotDivisible { value: c, divisor });
                }
                i64::try_from(product / divisor as i128)
                    .map_err(|_| PolyError::Overflow { value: c, factor, divisor })
            })
            .collect::<Result<Vec<i64>>>()?;
        data.copy_from_slice(&scaled);
        Ok(())
    }

    /// Positive gcd of all coefficients (0 for an all-zero slice).
    ///
    /// The gcd `2^63` only arises when every nonzero entry is `i64::MIN`; it
    /// is reported as `i64::MIN`, the word with the same bit pattern.
    fn content(&self, coefficients: &[i64]) -> i64 {
        GCD::find_gcd(coefficients) as i64
    }

    fn is_negative(&self, a: i64) -> bool {
        a < 0
    }
}

impl fmt::Display for IntegerRing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Z")
    }
}
