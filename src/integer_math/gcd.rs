// src/integer_math/gcd.rs

use num::integer::gcd;

pub struct GCD;

impl GCD {
    /// Gcd of the absolute values. `gcd(0, 0) == 0`.
    pub fn find_gcd_pair(left: i64, right: i64) -> u64 {
        gcd(left.unsigned_abs(), right.unsigned_abs())
    }

    /// Gcd of a whole slice, stopping early once it reaches 1.
    pub fn find_gcd(numbers: &[i64]) -> u64 {
        let mut acc = 0u64;
        for &x in numbers {
            acc = gcd(acc, x.unsigned_abs());
            if acc == 1 {
                break;
            }
        }
        acc
    }

    pub fn are_coprime(numbers: &[i64]) -> bool {
        Self::find_gcd(numbers) == 1
    }

    /// Extended Euclid: returns `(g, x, y)` with `a*x + b*y == g`.
    pub fn extended(a: i64, b: i64) -> (i128, i128, i128) {
        let (mut old_r, mut r) = (a as i128, b as i128);
        let (mut old_s, mut s) = (1i128, 0i128);
        let (mut old_t, mut t) = (0i128, 1i128);

        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
            (old_t, t) = (t, old_t - q * t);
        }

        if old_r < 0 {
            (-old_r, -old_s, -old_t)
        } else {
            (old_r, old_s, old_t)
        }
    }

    /// Inverse of `a` modulo `modulus`, if `gcd(a, modulus) == 1`.
    pub fn mod_inverse(a: i64, modulus: i64) -> Option<i64> {
        if modulus < 2 {
            return None;
        }
        let (g, x, _) = Self::extended(a.rem_euclid(modulus), modulus);
        if g != 1 {
            return None;
        }
        Some(x.rem_euclid(modulus as i128) as i64)
    }
}
