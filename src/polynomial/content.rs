// src/polynomial/content.rs

use crate::core::error::Result;
use crate::core::ring::Ring;
use crate::polynomial::dense::Poly;
use crate::polynomial::product::max_abs;

impl<R: Ring> Poly<R> {
    /// Ring-specific content: the gcd of the coefficients over Z, the leading
    /// coefficient over Z/m.
    pub fn content(&self) -> i64 {
        self.ring.content(self.coefficients())
    }

    /// Divide out the content, making the leading coefficient positive.
    pub fn primitive_part(&mut self) -> Result<&mut Self> {
        if self.is_zero() {
            return Ok(self);
        }
        let mut content = self.content();
        // a negative content is the gcd 2^63, already equal to its negation
        if self.ring.is_negative(self.lc()) && !self.ring.is_negative(content) {
            content = self.ring.negate(content);
        }
        self.primitive_part0(content)
    }

    /// Divide out the content keeping the sign of the leading coefficient.
    pub fn primitive_part_same_sign(&mut self) -> Result<&mut Self> {
        if self.is_zero() {
            return Ok(self);
        }
        let content = self.content();
        if self.ring.is_negative(content) {
            // dividing by i64::MIN (gcd 2^63) flips every sign
            self.primitive_part0(content)?;
            return Ok(self.negate());
        }
        self.primitive_part0(content)
    }

    fn primitive_part0(&mut self, content: i64) -> Result<&mut Self> {
        if content == self.ring.value_of(1) {
            return Ok(self);
        }
        let degree = self.degree;
        self.ring.divide_all_exact(&mut self.data[..=degree], content)?;
        self.fix_degree();
        Ok(self)
    }

    /// Normalize so the leading coefficient becomes one.
    pub fn monic(&mut self) -> Result<&mut Self> {
        let one = self.ring.value_of(1);
        self.monic_with(one)
    }

    /// Normalize so the leading coefficient becomes `factor`.
    ///
    /// Over Z this needs `lc | c * factor` for every coefficient `c` and every
    /// quotient to fit in a word; the polynomial is left untouched otherwise.
    pub fn monic_with(&mut self, factor: i64) -> Result<&mut Self> {
        if self.is_zero() {
            return Ok(self);
        }
        let factor = self.ring.value_of(factor);
        let lc = self.lc();
        let degree = self.degree;
        self.ring.multiply_divide_all_exact(&mut self.data[..=degree], factor, lc)?;
        self.fix_degree();
        Ok(self)
    }

    /// Sum of absolute values of the coefficients.
    pub fn norm1(&self) -> u128 {
        self.coefficients().iter().map(|c| c.unsigned_abs() as u128).sum()
    }

    /// Euclidean norm, rounded up to the next integer.
    ///
    /// Saturating: the sum of squares is capped at `u128::MAX` and the result
    /// at `u64::MAX`, so the value is exact only while the true norm is below
    /// 2^64 (e.g. four coefficients equal to `i64::MIN` already saturate).
    pub fn norm2(&self) -> u64 {
        let sum_of_squares = self
            .coefficients()
            .iter()
            .map(|c| (c.unsigned_abs() as u128).pow(2))
            .fold(0u128, |acc, x| acc.saturating_add(x));
        ceil_sqrt(sum_of_squares)
    }

    pub fn max_abs_coefficient(&self) -> u64 {
        max_abs(self.coefficients())
    }
}

/// Smallest `r` with `r * r >= n`.
fn ceil_sqrt(n: u128) -> u64 {
    let mut r = (n as f64).sqrt() as u128;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    let r = if r * r == n { r } else { r + 1 };
    u64::try_from(r).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PolyError;
    use crate::rings::{IntegerRing, ModularRing};

    fn z(coefficients: &[i64]) -> Poly<IntegerRing> {
        Poly::from_slice(IntegerRing, coefficients)
    }

    #[test]
    fn test_content_and_primitive_part() {
        let mut p = z(&[6, -9, 12]);
        assert_eq!(p.content(), 3);
        p.primitive_part().unwrap();
        assert_eq!(p.coefficients(), &[2, -3, 4]);
        assert_eq!(p.content(), 1);
    }

    #[test]
    fn test_primitive_part_sign() {
        let mut p = z(&[4, -8]);
        p.primitive_part().unwrap();
        assert_eq!(p.coefficients(), &[-1, 2]);

        let mut q = z(&[4, -8]);
        q.primitive_part_same_sign().unwrap();
        assert_eq!(q.coefficients(), &[1, -2]);

        let mut zero = z(&[0]);
        zero.primitive_part().unwrap();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_primitive_part_of_extreme_content() {
        // gcd 2^63 is only representable as i64::MIN
        let mut p = z(&[i64::MIN, i64::MIN]);
        assert_eq!(p.content(), i64::MIN);
        p.primitive_part().unwrap();
        assert_eq!(p.coefficients(), &[1, 1]);
        assert_eq!(p.content(), 1);

        let mut q = z(&[i64::MIN, 0, i64::MIN]);
        q.primitive_part_same_sign().unwrap();
        assert_eq!(q.coefficients(), &[-1, 0, -1]);

        let mut r = z(&[i64::MIN, 6]);
        r.primitive_part().unwrap();
        assert_eq!(r.coefficients(), &[i64::MIN / 2, 3]);
    }

    #[test]
    fn test_modular_primitive_part_is_monic() {
        let r = ModularRing::new(7).unwrap();
        let mut p = Poly::from_slice(r, &[1, 2, 3]);
        assert_eq!(p.content(), 3);
        p.primitive_part().unwrap();
        assert!(p.is_monic());
        assert_eq!(p.coefficients(), &[5, 3, 1]);
    }

    #[test]
    fn test_monic() {
        let r = ModularRing::new(11).unwrap();
        let mut p = Poly::from_slice(r, &[3, 4, 2]);
        p.monic().unwrap();
        assert_eq!(p.coefficients(), &[7, 2, 1]);

        let mut q = Poly::from_slice(r, &[3, 4, 2]);
        q.monic_with(5).unwrap();
        assert_eq!(q.lc(), 5);

        let mut integral = z(&[2, 4, 2]);
        integral.monic().unwrap();
        assert_eq!(integral.coefficients(), &[1, 2, 1]);

        // lc does not divide the factor but does divide every c * factor
        let mut scaled = z(&[3, 6, 6]);
        scaled.monic_with(4).unwrap();
        assert_eq!(scaled.coefficients(), &[2, 4, 4]);
    }

    #[test]
    fn test_monic_with_wide_intermediate() {
        // 3 * 2^62 does not fit in a word, 3 * 2^62 / 6 does
        let mut p = z(&[3, 6]);
        p.monic_with(1 << 62).unwrap();
        assert_eq!(p.coefficients(), &[1 << 61, 1 << 62]);

        let mut q = z(&[4, 2]);
        assert_eq!(
            q.monic_with(i64::MAX).unwrap_err(),
            PolyError::Overflow { value: 4, factor: i64::MAX, divisor: 2 }
        );
        assert_eq!(q.coefficients(), &[4, 2]);
    }

    #[test]
    fn test_monic_failures() {
        let mut p = z(&[1, 2]);
        assert_eq!(p.monic().unwrap_err(), PolyError::NotDivisible { value: 1, divisor: 2 });
        assert_eq!(p.coefficients(), &[1, 2]);

        let mut q = Poly::from_slice(ModularRing::new(12).unwrap(), &[1, 4]);
        assert!(matches!(q.monic(), Err(PolyError::NotInvertible { value: 4, .. })));
    }

    #[test]
    fn test_norms() {
        let p = z(&[3, -4]);
        assert_eq!(p.norm1(), 7);
        assert_eq!(p.norm2(), 5);
        assert_eq!(p.max_abs_coefficient(), 4);

        // sqrt(2) rounds up
        assert_eq!(z(&[1, 1]).norm2(), 2);
        assert_eq!(z(&[0]).norm2(), 0);
        assert_eq!(z(&[i64::MIN]).norm2(), 1u64 << 63);
        // saturates instead of wrapping
        assert_eq!(z(&[i64::MIN; 4]).norm2(), u64::MAX);
    }
}
