// src/rings/modular.rs

use std::fmt;
use quickdiv::DivisorU64;
use crate::core::error::{PolyError, Result};
use crate::core::ring::Ring;
use crate::integer_math::gcd::GCD;

/// Integers modulo `m` for `2 <= m <= i64::MAX`.
///
/// Canonical residues live in `[0, m)`. Products are reduced through `u128`,
/// so the ring is exact for every modulus that fits in a signed word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModularRing {
    modulus: i64,
}

impl ModularRing {
    pub fn new(modulus: i64) -> Result<Self> {
        if modulus < 2 {
            return Err(PolyError::InvalidModulus(modulus));
        }
        Ok(ModularRing { modulus })
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Multiplicative inverse of `a`, if it exists.
    pub fn inverse(&self, a: i64) -> Result<i64> {
        GCD::mod_inverse(a, self.modulus).ok_or_else(|| PolyError::NotInvertible {
            value: a,
            ring: self.name(),
        })
    }

    /// a^exp by square-and-multiply.
    pub fn pow(&self, a: i64, mut exp: u64) -> i64 {
        let mut result = self.value_of(1);
        let mut base = self.value_of(a);
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.multiply(result, base);
            }
            exp >>= 1;
            base = self.multiply(base, base);
        }
        result
    }
}

impl Ring for ModularRing {
    #[inline]
    fn add(&self, a: i64, b: i64) -> i64 {
        let s = a as u64 + b as u64;
        let m = self.modulus as u64;
        (if s >= m { s - m } else { s }) as i64
    }

    #[inline]
    fn subtract(&self, a: i64, b: i64) -> i64 {
        let d = a - b;
        if d < 0 { d + self.modulus } else { d }
    }

    #[inline]
    fn multiply(&self, a: i64, b: i64) -> i64 {
        ((a as u128 * b as u128) % self.modulus as u128) as i64
    }

    #[inline]
    fn negate(&self, a: i64) -> i64 {
        if a == 0 { 0 } else { self.modulus - a }
    }

    #[inline]
    fn value_of(&self, a: i64) -> i64 {
        a.rem_euclid(self.modulus)
    }

    /// Bulk reduction with a precomputed reciprocal of the modulus.
    fn value_of_all(&self, data: &mut [i64]) {
        let m = DivisorU64::new(self.modulus as u64);
        for x in data.iter_mut() {
            let r = (x.unsigned_abs() % m) as i64;
            *x = if *x < 0 && r != 0 { self.modulus - r } else { r };
        }
    }

    fn divide_exact(&self, a: i64, b: i64) -> Result<i64> {
        Ok(self.multiply(a, self.inverse(b)?))
    }

    fn divide_all_exact(&self, data: &mut [i64], divisor: i64) -> Result<()> {
        let inv = self.inverse(divisor)?;
        for x in data.iter_mut() {
            *x = self.multiply(*x, inv);
        }
        Ok(())
    }

    /// Over Z/m every nonzero polynomial is associated to a monic one, so the
    /// content is the leading coefficient.
    fn content(&self, coefficients: &[i64]) -> i64 {
        coefficients.last().copied().unwrap_or(0)
    }
}

impl fmt::Display for ModularRing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Z/{}", self.modulus)
    }
}
