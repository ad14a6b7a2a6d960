// src/multiplication/classical.rs
//
// Schoolbook O(n*m) products over an arbitrary `Arithmetic`.

use super::Arithmetic;

/// Full convolution of `a` and `b`, length `a.len() + b.len() - 1`.
///
/// The shorter operand drives the outer loop so zero coefficients skip as
/// much inner work as possible. Empty input gives an empty product.
pub fn multiply<A: Arithmetic>(arith: &A, a: &[i64], b: &[i64]) -> Vec<i64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let (outer, inner) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut result = vec![0i64; a.len() + b.len() - 1];
    for (i, &x) in outer.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let row = &mut result[i..i + inner.len()];
        for (acc, &y) in row.iter_mut().zip(inner) {
            *acc = arith.add(*acc, arith.multiply(x, y));
        }
    }
    result
}

/// `a * a`, computing each cross product once and doubling.
pub fn square<A: Arithmetic>(arith: &A, a: &[i64]) -> Vec<i64> {
    if a.is_empty() {
        return Vec::new();
    }

    let len = a.len();
    let mut result = vec![0i64; 2 * len - 1];
    for i in 0..len {
        let x = a[i];
        if x == 0 {
            continue;
        }
        for j in (i + 1)..len {
            result[i + j] = arith.add(result[i + j], arith.multiply(x, a[j]));
        }
    }

    for c in result.iter_mut() {
        *c = arith.add(*c, *c);
    }
    for (i, &x) in a.iter().enumerate() {
        result[2 * i] = arith.add(result[2 * i], arith.multiply(x, x));
    }
    result
}
