// src/polynomial/arithmetic.rs
//
// In-place elementwise operations. Binary operations check that both operands
// live over the same ring before touching any coefficient.

use crate::core::error::Result;
use crate::core::ring::Ring;
use crate::polynomial::dense::Poly;

impl<R: Ring> Poly<R> {
    pub fn add(&mut self, other: &Poly<R>) -> Result<&mut Self> {
        self.ring.ensure_same(&other.ring)?;
        if other.is_zero() {
            return Ok(self);
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            self.data[i] = self.ring.add(self.data[i], other.data[i]);
        }
        self.fix_degree();
        Ok(self)
    }

    pub fn subtract(&mut self, other: &Poly<R>) -> Result<&mut Self> {
        self.ring.ensure_same(&other.ring)?;
        if other.is_zero() {
            return Ok(self);
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            self.data[i] = self.ring.subtract(self.data[i], other.data[i]);
        }
        self.fix_degree();
        Ok(self)
    }

    /// `self += factor * other`
    pub fn add_mul(&mut self, other: &Poly<R>, factor: i64) -> Result<&mut Self> {
        self.ring.ensure_same(&other.ring)?;
        let factor = self.ring.value_of(factor);
        if factor == 0 || other.is_zero() {
            return Ok(self);
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            let term = self.ring.multiply(factor, other.data[i]);
            self.data[i] = self.ring.add(self.data[i], term);
        }
        self.fix_degree();
        Ok(self)
    }

    /// `self -= factor * x^exponent * other`
    pub fn subtract_shifted(&mut self, other: &Poly<R>, factor: i64, exponent: usize) -> Result<&mut Self> {
        self.ring.ensure_same(&other.ring)?;
        let factor = self.ring.value_of(factor);
        if factor == 0 || other.is_zero() {
            return Ok(self);
        }
        self.ensure_capacity(other.degree + exponent);
        for i in 0..=other.degree {
            let term = self.ring.multiply(factor, other.data[i]);
            self.data[i + exponent] = self.ring.subtract(self.data[i + exponent], term);
        }
        self.fix_degree();
        Ok(self)
    }

    /// `self += coefficient * x^exponent`
    pub fn add_monomial(&mut self, coefficient: i64, exponent: usize) -> &mut Self {
        let coefficient = self.ring.value_of(coefficient);
        if coefficient == 0 {
            return self;
        }
        self.ensure_capacity(exponent);
        self.data[exponent] = self.ring.add(self.data[exponent], coefficient);
        self.fix_degree();
        self
    }

    pub fn negate(&mut self) -> &mut Self {
        for i in 0..=self.degree {
            self.data[i] = self.ring.negate(self.data[i]);
        }
        self
    }

    pub fn increment(&mut self) -> &mut Self {
        self.add_monomial(1, 0)
    }

    pub fn decrement(&mut self) -> &mut Self {
        let minus_one = self.ring.negate(self.ring.value_of(1));
        self.add_monomial(minus_one, 0)
    }

    pub fn multiply_by_scalar(&mut self, factor: i64) -> &mut Self {
        let factor = self.ring.value_of(factor);
        if factor == 0 {
            return self.to_zero();
        }
        if factor == self.ring.value_of(1) {
            return self;
        }
        for i in 0..=self.degree {
            self.data[i] = self.ring.multiply(self.data[i], factor);
        }
        // zero divisors can kill the leading term
        self.fix_degree();
        self
    }

    /// Multiply by `x^offset`.
    pub fn shift_left(&mut self, offset: usize) -> &mut Self {
        if offset == 0 || self.is_zero() {
            return self;
        }
        let old_degree = self.degree;
        self.ensure_capacity(old_degree + offset);
        self.data.copy_within(0..=old_degree, offset);
        self.data[..offset].fill(0);
        self
    }

    /// Divide by `x^offset`, discarding the low terms.
    pub fn shift_right(&mut self, offset: usize) -> &mut Self {
        if offset == 0 {
            return self;
        }
        if offset > self.degree {
            return self.to_zero();
        }
        let old_degree = self.degree;
        self.data.copy_within(offset..=old_degree, 0);
        self.data[old_degree - offset + 1..=old_degree].fill(0);
        self.degree = old_degree - offset;
        self
    }

    /// Reverse the live coefficients: `x^deg * p(1/x)`.
    pub fn reverse(&mut self) -> &mut Self {
        self.data[..=self.degree].reverse();
        self.fix_degree();
        self
    }

    pub fn derivative(&self) -> Poly<R> {
        if self.is_constant() {
            return self.create_zero();
        }
        let data = (1..=self.degree)
            .map(|i| {
                let n = self.ring.value_of(i as i64);
                self.ring.multiply(n, self.data[i])
            })
            .collect();
        Poly::adopt(self.ring.clone(), data)
    }

    /// Horner evaluation at `point`.
    pub fn evaluate(&self, point: i64) -> i64 {
        let point = self.ring.value_of(point);
        if point == 0 {
            return self.cc();
        }
        let mut acc = 0;
        for i in (0..=self.degree).rev() {
            acc = self.ring.add(self.ring.multiply(acc, point), self.data[i]);
        }
        acc
    }

    /// Substitute `value` for the variable: `self(value(x))`.
    pub fn composition(&self, value: &Poly<R>) -> Result<Poly<R>> {
        self.ring.ensure_same(&value.ring)?;
        if value.is_one() {
            return Ok(self.clone());
        }
        if value.is_zero() || self.is_constant() {
            return Ok(self.create_constant(self.cc()));
        }

        let mut result = self.create_zero();
        for i in (0..=self.degree).rev() {
            result.multiply(value)?;
            result.add_monomial(self.data[i], 0);
        }
        Ok(result)
    }

    /// Taylor shift `self(x + c)`.
    pub fn shift(&self, c: i64) -> Poly<R> {
        let linear = self.create_linear(c, 1);
        let mut result = self.create_zero();
        for i in (0..=self.degree).rev() {
            result.multiply_same_ring(&linear);
            result.add_monomial(self.data[i], 0);
        }
        result
    }
}
