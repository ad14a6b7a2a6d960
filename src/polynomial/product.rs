// src/polynomial/product.rs

use log::debug;
use crate::core::error::Result;
use crate::core::ring::Ring;
use crate::multiplication;
use crate::polynomial::dense::Poly;

/// Largest absolute value in `data`.
pub(crate) fn max_abs(data: &[i64]) -> u64 {
    data.iter().map(|c| c.unsigned_abs()).max().unwrap_or(0)
}

/// Whether every coefficient of `a * b` provably fits in an `i64`.
///
/// Each output coefficient is a sum of at most `min(len)` products, so
/// `max|a| * max|b| * min(len)` bounds it. Wrapping arithmetic is exact modulo
/// 2^64, which makes the unsafe engine exact whenever this holds, Karatsuba
/// intermediates included.
pub(crate) fn fits_in_word(a: &[i64], b: &[i64]) -> bool {
    let terms = a.len().min(b.len()) as u128;
    (max_abs(a) as u128)
        .checked_mul(max_abs(b) as u128)
        .and_then(|bound| bound.checked_mul(terms))
        .map_or(false, |bound| bound <= i64::MAX as u128)
}

impl<R: Ring> Poly<R> {
    /// `self *= other`, using native arithmetic when the result provably fits
    /// in a machine word and ring arithmetic otherwise.
    pub fn multiply(&mut self, other: &Poly<R>) -> Result<&mut Self> {
        self.ring.ensure_same(&other.ring)?;
        self.multiply_same_ring(other);
        Ok(self)
    }

    pub(crate) fn multiply_same_ring(&mut self, other: &Poly<R>) {
        if self.is_zero() {
            return;
        }
        if other.is_zero() {
            self.to_zero();
            return;
        }
        if other.is_constant() {
            self.multiply_by_scalar(other.cc());
            return;
        }

        let (a, b) = (self.coefficients(), other.coefficients());
        let product = if fits_in_word(a, b) {
            debug!("multiply: native path for degrees {}x{} over {}", self.degree, other.degree, self.ring);
            let mut product = multiplication::multiply_unsafe(a, b);
            self.ring.value_of_all(&mut product);
            product
        } else {
            debug!("multiply: ring path for degrees {}x{} over {}", self.degree, other.degree, self.ring);
            multiplication::multiply_safe(&self.ring, a, b)
        };
        self.replace_data(product);
    }

    /// `self *= other` with every combine routed through the ring.
    pub fn multiply_safe(&mut self, other: &Poly<R>) -> Result<&mut Self> {
        self.ring.ensure_same(&other.ring)?;
        let product = multiplication::multiply_safe(&self.ring, self.coefficients(), other.coefficients());
        self.replace_data(product);
        Ok(self)
    }

    /// `self *= other` with wrapping machine arithmetic, canonicalizing only
    /// the final coefficients. Silently wrong if any true product coefficient
    /// overflows an `i64`.
    pub fn multiply_unsafe(&mut self, other: &Poly<R>) -> Result<&mut Self> {
        self.ring.ensure_same(&other.ring)?;
        let mut product = multiplication::multiply_unsafe(self.coefficients(), other.coefficients());
        self.ring.value_of_all(&mut product);
        self.replace_data(product);
        Ok(self)
    }

    pub fn square(&mut self) -> &mut Self {
        if self.is_constant() {
            let c = self.cc();
            self.data[0] = self.ring.multiply(c, c);
            return self;
        }

        let a = self.coefficients();
        let product = if fits_in_word(a, a) {
            debug!("square: native path for degree {} over {}", self.degree, self.ring);
            let mut product = multiplication::square_unsafe(a);
            self.ring.value_of_all(&mut product);
            product
        } else {
            debug!("square: ring path for degree {} over {}", self.degree, self.ring);
            multiplication::square_safe(&self.ring, a)
        };
        self.replace_data(product);
        self
    }

    pub fn square_safe(&mut self) -> &mut Self {
        let product = multiplication::square_safe(&self.ring, self.coefficients());
        self.replace_data(product);
        self
    }

    /// Square with wrapping machine arithmetic; see [`Poly::multiply_unsafe`].
    pub fn square_unsafe(&mut self) -> &mut Self {
        let mut product = multiplication::square_unsafe(self.coefficients());
        self.ring.value_of_all(&mut product);
        self.replace_data(product);
        self
    }

    fn replace_data(&mut self, product: Vec<i64>) {
        let ring = self.ring.clone();
        self.set_and_destroy(Poly::adopt(ring, product));
    }
}
