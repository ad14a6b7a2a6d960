// src/polynomial/dense.rs

use std::fmt::{Display, Formatter, Result as FmtResult};
use crate::core::ring::Ring;

/// Dense univariate polynomial with machine-word coefficients over a ring `R`.
///
/// `data[i]` is the coefficient of `x^i`. The store keeps three invariants:
///
/// 1. `degree < data.len()`;
/// 2. `data[degree] != 0` unless `degree == 0` (zero is `degree = 0, data = [0]`);
/// 3. every slot above `degree` holds zero, so raising the degree never exposes
///    stale values.
///
/// All coefficients are canonical for the ring. Mutating operations end with
/// [`Poly::fix_degree`] to restore invariant 2.
#[derive(Clone, Debug)]
pub struct Poly<R: Ring> {
    pub(crate) ring: R,
    pub(crate) data: Vec<i64>,
    pub(crate) degree: usize,
}

impl<R: Ring> Poly<R> {
    /// Build from raw words (lowest degree first), canonicalizing each one.
    pub fn from_slice(ring: R, coefficients: &[i64]) -> Self {
        let mut data = coefficients.to_vec();
        ring.value_of_all(&mut data);
        Self::adopt(ring, data)
    }

    /// Take ownership of already canonical words.
    pub(crate) fn adopt(ring: R, mut data: Vec<i64>) -> Self {
        if data.is_empty() {
            data.push(0);
        }
        let degree = data.len() - 1;
        let mut poly = Poly { ring, data, degree };
        poly.fix_degree();
        poly
    }

    pub fn zero(ring: R) -> Self {
        Poly { ring, data: vec![0], degree: 0 }
    }

    pub fn one(ring: R) -> Self {
        Self::constant(ring, 1)
    }

    pub fn constant(ring: R, value: i64) -> Self {
        let value = ring.value_of(value);
        Poly { ring, data: vec![value], degree: 0 }
    }

    /// `coefficient * x^exponent`
    pub fn monomial(ring: R, coefficient: i64, exponent: usize) -> Self {
        let coefficient = ring.value_of(coefficient);
        if coefficient == 0 {
            return Self::zero(ring);
        }
        let mut data = vec![0; exponent + 1];
        data[exponent] = coefficient;
        Poly { ring, data, degree: exponent }
    }

    /// `cc + lc * x`
    pub fn linear(ring: R, cc: i64, lc: i64) -> Self {
        Self::from_slice(ring, &[cc, lc])
    }

    pub fn create_zero(&self) -> Self {
        Self::zero(self.ring.clone())
    }

    pub fn create_one(&self) -> Self {
        Self::one(self.ring.clone())
    }

    pub fn create_constant(&self, value: i64) -> Self {
        Self::constant(self.ring.clone(), value)
    }

    pub fn create_monomial(&self, coefficient: i64, exponent: usize) -> Self {
        Self::monomial(self.ring.clone(), coefficient, exponent)
    }

    pub fn create_linear(&self, cc: i64, lc: i64) -> Self {
        Self::linear(self.ring.clone(), cc, lc)
    }

    pub fn create_from_slice(&self, coefficients: &[i64]) -> Self {
        Self::from_slice(self.ring.clone(), coefficients)
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of live coefficients, `degree + 1`.
    pub fn size(&self) -> usize {
        self.degree + 1
    }

    /// Allocated coefficient slots (always greater than the degree).
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Live coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[i64] {
        &self.data[..=self.degree]
    }

    /// Coefficient of `x^i`; zero above the degree.
    pub fn get(&self, i: usize) -> i64 {
        if i <= self.degree { self.data[i] } else { 0 }
    }

    /// Leading coefficient.
    pub fn lc(&self) -> i64 {
        self.data[self.degree]
    }

    /// Constant coefficient.
    pub fn cc(&self) -> i64 {
        self.data[0]
    }

    /// Relies on invariant 2; see [`Poly::storage_mut_unchecked`].
    pub fn is_zero(&self) -> bool {
        self.data[self.degree] == 0
    }

    pub fn is_one(&self) -> bool {
        self.degree == 0 && self.data[0] == self.ring.value_of(1)
    }

    pub fn is_constant(&self) -> bool {
        self.degree == 0
    }

    pub fn is_monic(&self) -> bool {
        self.lc() == self.ring.value_of(1)
    }

    pub fn is_monomial(&self) -> bool {
        self.data[..self.degree].iter().all(|&c| c == 0)
    }

    /// -1, 0 or 1 following the ring's notion of sign of the leading coefficient.
    pub fn signum_of_lc(&self) -> i64 {
        if self.is_zero() {
            0
        } else if self.ring.is_negative(self.lc()) {
            -1
        } else {
            1
        }
    }

    /// Lowest exponent with a nonzero coefficient (0 for the zero polynomial).
    pub fn first_nonzero_position(&self) -> usize {
        self.coefficients().iter().position(|&c| c != 0).unwrap_or(0)
    }

    /// Write `value` (canonicalized) as the coefficient of `x^i`.
    pub fn set(&mut self, i: usize, value: i64) -> &mut Self {
        let value = self.ring.value_of(value);
        if value == 0 {
            if i <= self.degree {
                self.data[i] = 0;
                self.fix_degree();
            }
            return self;
        }
        self.ensure_capacity(i);
        self.data[i] = value;
        self.fix_degree();
        self
    }

    /// Replace the leading coefficient.
    pub fn set_lc(&mut self, value: i64) -> &mut Self {
        let degree = self.degree;
        self.set(degree, value)
    }

    /// Raise the degree to `desired_degree` (growing storage with zeros).
    /// May leave a zero leading coefficient until the next `fix_degree`.
    pub(crate) fn ensure_capacity(&mut self, desired_degree: usize) {
        if desired_degree > self.degree {
            self.degree = desired_degree;
        }
        if self.data.len() < desired_degree + 1 {
            self.data.resize(desired_degree + 1, 0);
        }
    }

    /// Drop zero leading coefficients, never going below degree 0.
    pub fn fix_degree(&mut self) {
        while self.degree > 0 && self.data[self.degree] == 0 {
            self.degree -= 1;
        }
    }

    /// Keep only the terms of degree `<= new_degree`.
    pub fn truncate(&mut self, new_degree: usize) -> &mut Self {
        if new_degree >= self.degree {
            return self;
        }
        self.data[new_degree + 1..=self.degree].fill(0);
        self.degree = new_degree;
        self.fix_degree();
        self
    }

    pub fn to_zero(&mut self) -> &mut Self {
        self.data[..=self.degree].fill(0);
        self.degree = 0;
        self
    }

    /// Take over `other`'s ring and storage; `other` is consumed.
    pub fn set_and_destroy(&mut self, other: Poly<R>) -> &mut Self {
        self.ring = other.ring;
        self.data = other.data;
        self.degree = other.degree;
        self
    }

    /// Raw mutable access to the whole backing buffer, bypassing every
    /// invariant. Slots above the degree are zero when handed out. Callers
    /// must write canonical values only and call [`Poly::recompute_degree`]
    /// before using any other method.
    pub fn storage_mut_unchecked(&mut self) -> &mut [i64] {
        &mut self.data
    }

    /// Re-derive the degree from the whole buffer after unchecked writes.
    pub fn recompute_degree(&mut self) -> &mut Self {
        self.degree = self.data.len() - 1;
        self.fix_degree();
        self
    }
}

impl<R: Ring> PartialEq for Poly<R> {
    fn eq(&self, other: &Self) -> bool {
        self.ring == other.ring && self.coefficients() == other.coefficients()
    }
}

impl<R: Ring> Eq for Poly<R> {}

impl<R: Ring> Display for Poly<R> {
    /// Informal algebraic notation, highest degree first: `3*x^2+2*x+1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for i in (0..=self.degree).rev() {
            let c = self.data[i];
            if c == 0 {
                continue;
            }
            if c < 0 {
                write!(f, "-")?;
            } else if !first {
                write!(f, "+")?;
            }
            first = false;

            let magnitude = c.unsigned_abs();
            match (i, magnitude) {
                (0, _) => write!(f, "{}", magnitude)?,
                (_, 1) => {}
                _ => write!(f, "{}*", magnitude)?,
            }
            match i {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }
        Ok(())
    }
}
