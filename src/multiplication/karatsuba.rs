// src/multiplication/karatsuba.rs
//
// Recursive Karatsuba multiplication and squaring: three sub-products instead
// of four, O(n^1.585). Falls back to the classical routines once the operand
// product drops below KARATSUBA_THRESHOLD.

use super::{classical, Arithmetic, KARATSUBA_THRESHOLD};

/// Karatsuba product of `f` and `g`, length `f.len() + g.len() - 1`.
pub fn multiply<A: Arithmetic>(arith: &A, f: &[i64], g: &[i64]) -> Vec<i64> {
    if f.is_empty() || g.is_empty() {
        return Vec::new();
    }

    // scalar times polynomial
    if f.len() == 1 {
        return g.iter().map(|&y| arith.multiply(f[0], y)).collect();
    }
    if g.len() == 1 {
        return f.iter().map(|&x| arith.multiply(x, g[0])).collect();
    }

    // two linear factors
    if f.len() == 2 && g.len() == 2 {
        return vec![
            arith.multiply(f[0], g[0]),
            arith.add(arith.multiply(f[0], g[1]), arith.multiply(f[1], g[0])),
            arith.multiply(f[1], g[1]),
        ];
    }

    if f.len() * g.len() < KARATSUBA_THRESHOLD {
        return classical::multiply(arith, f, g);
    }

    // always split the longer operand
    if f.len() < g.len() {
        return multiply(arith, g, f);
    }

    let result_len = f.len() + g.len() - 1;
    let split = (f.len() + 1) / 2;
    let (f0, f1) = f.split_at(split);

    if g.len() <= split {
        // g has no upper half: f*g = f0*g + x^split * f1*g, no cross term
        let f1g = multiply(arith, f1, g);
        let mut result = multiply(arith, f0, g);
        result.resize(result_len, 0);
        add_shifted(arith, &mut result, &f1g, split);
        return result;
    }

    let (g0, g1) = g.split_at(split);
    let f0g0 = multiply(arith, f0, g0);
    let f1g1 = multiply(arith, f1, g1);

    let f0_plus_f1 = add_halves(arith, f0, f1);
    let g0_plus_g1 = add_halves(arith, g0, g1);
    let mut mid = multiply(arith, &f0_plus_f1, &g0_plus_g1);

    mid.resize(mid.len().max(f0g0.len()).max(f1g1.len()), 0);
    subtract_in_place(arith, &mut mid, &f0g0);
    subtract_in_place(arith, &mut mid, &f1g1);

    let mut result = f0g0;
    result.resize(result_len, 0);
    add_shifted(arith, &mut result, &mid, split);
    add_shifted(arith, &mut result, &f1g1, 2 * split);
    result
}

/// Karatsuba square of `f`, length `2 * f.len() - 1`.
pub fn square<A: Arithmetic>(arith: &A, f: &[i64]) -> Vec<i64> {
    if f.is_empty() {
        return Vec::new();
    }
    if f.len() == 1 {
        return vec![arith.multiply(f[0], f[0])];
    }
    if f.len() == 2 {
        let cross = arith.multiply(f[0], f[1]);
        return vec![
            arith.multiply(f[0], f[0]),
            arith.add(cross, cross),
            arith.multiply(f[1], f[1]),
        ];
    }

    if f.len() * f.len() < KARATSUBA_THRESHOLD {
        return classical::square(arith, f);
    }

    let split = (f.len() + 1) / 2;
    let (f0, f1) = f.split_at(split);
    let f0f0 = square(arith, f0);
    let f1f1 = square(arith, f1);

    let f0_plus_f1 = add_halves(arith, f0, f1);
    let mut mid = square(arith, &f0_plus_f1);

    mid.resize(mid.len().max(f0f0.len()).max(f1f1.len()), 0);
    subtract_in_place(arith, &mut mid, &f0f0);
    subtract_in_place(arith, &mut mid, &f1f1);

    let mut result = f0f0;
    result.resize(2 * f.len() - 1, 0);
    add_shifted(arith, &mut result, &mid, split);
    add_shifted(arith, &mut result, &f1f1, 2 * split);
    result
}

/// `low + high` where `high` is never longer than `low`.
fn add_halves<A: Arithmetic>(arith: &A, low: &[i64], high: &[i64]) -> Vec<i64> {
    debug_assert!(high.len() <= low.len());
    let mut sum = low.to_vec();
    for (s, &h) in sum.iter_mut().zip(high) {
        *s = arith.add(*s, h);
    }
    sum
}

/// `target -= source`, `source` treated as zero-padded.
fn subtract_in_place<A: Arithmetic>(arith: &A, target: &mut [i64], source: &[i64]) {
    for (t, &s) in target.iter_mut().zip(source) {
        *t = arith.subtract(*t, s);
    }
}

/// `target += x^offset * source`.
fn add_shifted<A: Arithmetic>(arith: &A, target: &mut [i64], source: &[i64], offset: usize) {
    for (t, &s) in target[offset..].iter_mut().zip(source) {
        *t = arith.add(*t, s);
    }
}
