// src/polynomial/big_poly.rs

use std::fmt::{Display, Formatter, Result};
use std::ops::{Index, Mul};
use num::{BigInt, Signed, ToPrimitive, Zero};
use crate::core::ring::Ring;
use crate::polynomial::dense::Poly;

/// Dense polynomial with arbitrary-precision integer coefficients.
///
/// Target of the machine-word promotion; trailing zeros are trimmed so the
/// last coefficient is nonzero unless the polynomial is zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigPoly {
    pub coefficients: Vec<BigInt>,
}

impl BigPoly {
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        let mut polynomial = BigPoly { coefficients };
        polynomial.remove_zeros();
        polynomial
    }

    pub fn zero() -> Self {
        BigPoly { coefficients: vec![BigInt::zero()] }
    }

    pub fn from_words(words: &[i64]) -> Self {
        BigPoly::new(words.iter().map(|&w| BigInt::from(w)).collect())
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    fn remove_zeros(&mut self) {
        while self.coefficients.len() > 1 && self.coefficients.last().map_or(false, |c| c.is_zero()) {
            self.coefficients.pop();
        }
        if self.coefficients.is_empty() {
            self.coefficients.push(BigInt::zero());
        }
    }

    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * x + c)
    }

    /// Classical product, no overflow possible.
    pub fn multiply(left: &BigPoly, right: &BigPoly) -> Self {
        let mut coefficients = vec![BigInt::zero(); left.degree() + right.degree() + 1];
        for (i, a) in left.coefficients.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in right.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        BigPoly::new(coefficients)
    }

    pub fn max_abs_coefficient(&self) -> BigInt {
        self.coefficients.iter().map(|c| c.abs()).max().unwrap_or_else(BigInt::zero)
    }

    /// Demote back to machine words over `ring`, if every coefficient fits in an `i64`.
    pub fn to_poly<R: Ring>(&self, ring: R) -> Option<Poly<R>> {
        let words = self
            .coefficients
            .iter()
            .map(|c| c.to_i64())
            .collect::<Option<Vec<i64>>>()?;
        Some(Poly::from_slice(ring, &words))
    }
}

impl<R: Ring> From<&Poly<R>> for BigPoly {
    fn from(poly: &Poly<R>) -> Self {
        BigPoly::from_words(poly.coefficients())
    }
}

impl<R: Ring> Poly<R> {
    /// Promote to arbitrary-precision coefficients, one coefficient at a time.
    pub fn to_big_poly(&self) -> BigPoly {
        BigPoly::from(self)
    }
}

impl Index<usize> for BigPoly {
    type Output = BigInt;

    fn index(&self, index: usize) -> &BigInt {
        &self.coefficients[index]
    }
}

impl Mul for &BigPoly {
    type Output = BigPoly;

    fn mul(self, other: Self) -> BigPoly {
        BigPoly::multiply(self, other)
    }
}

impl Display for BigPoly {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, c) in self.coefficients.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if c.is_negative() {
                write!(f, "-")?;
            } else if !first {
                write!(f, "+")?;
            }
            first = false;

            let magnitude = c.abs();
            if i == 0 {
                write!(f, "{}", magnitude)?;
                continue;
            }
            if magnitude != BigInt::from(1) {
                write!(f, "{}*", magnitude)?;
            }
            if i == 1 {
                write!(f, "x")?;
            } else {
                write!(f, "x^{}", i)?;
            }
        }
        Ok(())
    }
}
