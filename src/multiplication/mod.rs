// src/multiplication/mod.rs
//
// Coefficient-array multiplication engine.
//
// Every algorithm is available in two arithmetic modes:
//
// - safe: each elementary add/subtract/multiply is routed through the ring,
//   correct for any ring (Z panics on overflow instead of wrapping);
// - unsafe: raw machine-word arithmetic that silently wraps modulo 2^64. The
//   result is exact only when every true output coefficient fits in an i64.
//   This is an explicit opt-in; nothing in the safe API falls back to it.
//
// The array routines do not check rings; that is done at the polynomial level.

pub mod classical;
pub mod karatsuba;

use log::trace;
use crate::core::ring::Ring;

/// Below this operand-length product, Karatsuba recursion switches to classical.
pub const KARATSUBA_THRESHOLD: usize = 2048;

/// Dispatcher cutoff: operand-length products up to this use classical only.
pub const MUL_CLASSICAL_THRESHOLD: usize = 256 * 256;

/// Elementary operations the multiplication algorithms are written against.
pub trait Arithmetic {
    fn add(&self, a: i64, b: i64) -> i64;
    fn subtract(&self, a: i64, b: i64) -> i64;
    fn multiply(&self, a: i64, b: i64) -> i64;
}

/// Safe mode: delegate to the ring.
#[derive(Clone, Copy, Debug)]
pub struct RingArithmetic<'a, R: Ring>(pub &'a R);

impl<R: Ring> Arithmetic for RingArithmetic<'_, R> {
    #[inline]
    fn add(&self, a: i64, b: i64) -> i64 {
        self.0.add(a, b)
    }

    #[inline]
    fn subtract(&self, a: i64, b: i64) -> i64 {
        self.0.subtract(a, b)
    }

    #[inline]
    fn multiply(&self, a: i64, b: i64) -> i64 {
        self.0.multiply(a, b)
    }
}

/// Unsafe mode: native two's-complement arithmetic, wrapping on overflow.
#[derive(Clone, Copy, Debug, Default)]
pub struct WrappingArithmetic;

impl Arithmetic for WrappingArithmetic {
    #[inline]
    fn add(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    #[inline]
    fn subtract(&self, a: i64, b: i64) -> i64 {
        a.wrapping_sub(b)
    }

    #[inline]
    fn multiply(&self, a: i64, b: i64) -> i64 {
        a.wrapping_mul(b)
    }
}

pub fn multiply_classical_safe<R: Ring>(ring: &R, a: &[i64], b: &[i64]) -> Vec<i64> {
    classical::multiply(&RingArithmetic(ring), a, b)
}

/// Classical product with wrapping machine arithmetic; overflow is silent.
pub fn multiply_classical_unsafe(a: &[i64], b: &[i64]) -> Vec<i64> {
    classical::multiply(&WrappingArithmetic, a, b)
}

pub fn multiply_karatsuba_safe<R: Ring>(ring: &R, a: &[i64], b: &[i64]) -> Vec<i64> {
    karatsuba::multiply(&RingArithmetic(ring), a, b)
}

/// Karatsuba product with wrapping machine arithmetic; overflow is silent.
pub fn multiply_karatsuba_unsafe(a: &[i64], b: &[i64]) -> Vec<i64> {
    karatsuba::multiply(&WrappingArithmetic, a, b)
}

pub fn square_classical_safe<R: Ring>(ring: &R, a: &[i64]) -> Vec<i64> {
    classical::square(&RingArithmetic(ring), a)
}

/// Classical square with wrapping machine arithmetic; overflow is silent.
pub fn square_classical_unsafe(a: &[i64]) -> Vec<i64> {
    classical::square(&WrappingArithmetic, a)
}

pub fn square_karatsuba_safe<R: Ring>(ring: &R, a: &[i64]) -> Vec<i64> {
    karatsuba::square(&RingArithmetic(ring), a)
}

/// Karatsuba square with wrapping machine arithmetic; overflow is silent.
pub fn square_karatsuba_unsafe(a: &[i64]) -> Vec<i64> {
    karatsuba::square(&WrappingArithmetic, a)
}

fn use_classical(a_len: usize, b_len: usize) -> bool {
    (a_len as u128) * (b_len as u128) <= MUL_CLASSICAL_THRESHOLD as u128
}

/// Product of two coefficient arrays, picking classical or Karatsuba by size.
pub fn multiply_safe<R: Ring>(ring: &R, a: &[i64], b: &[i64]) -> Vec<i64> {
    if use_classical(a.len(), b.len()) {
        multiply_classical_safe(ring, a, b)
    } else {
        trace!("multiply_safe: karatsuba for {}x{} over {}", a.len(), b.len(), ring);
        multiply_karatsuba_safe(ring, a, b)
    }
}

/// Size-dispatched product with wrapping machine arithmetic; overflow is silent.
pub fn multiply_unsafe(a: &[i64], b: &[i64]) -> Vec<i64> {
    if use_classical(a.len(), b.len()) {
        multiply_classical_unsafe(a, b)
    } else {
        trace!("multiply_unsafe: karatsuba for {}x{}", a.len(), b.len());
        multiply_karatsuba_unsafe(a, b)
    }
}

pub fn square_safe<R: Ring>(ring: &R, a: &[i64]) -> Vec<i64> {
    if use_classical(a.len(), a.len()) {
        square_classical_safe(ring, a)
    } else {
        trace!("square_safe: karatsuba for length {} over {}", a.len(), ring);
        square_karatsuba_safe(ring, a)
    }
}

/// Size-dispatched square with wrapping machine arithmetic; overflow is silent.
pub fn square_unsafe(a: &[i64]) -> Vec<i64> {
    if use_classical(a.len(), a.len()) {
        square_classical_unsafe(a)
    } else {
        trace!("square_unsafe: karatsuba for length {}", a.len());
        square_karatsuba_unsafe(a)
    }
}
