// tests/polynomial_tests.rs
//
// Integration tests for the dense polynomial store and its elementwise,
// content and normalization operations.

use proptest::prelude::*;
use wordpoly::{IntegerRing, ModularRing, Poly, PolyError, Ring};

fn z(coefficients: &[i64]) -> Poly<IntegerRing> {
    Poly::from_slice(IntegerRing, coefficients)
}

fn naive_evaluate<R: Ring>(p: &Poly<R>, point: i64) -> i64 {
    let ring = p.ring();
    let point = ring.value_of(point);
    let mut sum = ring.value_of(0);
    for (i, &c) in p.coefficients().iter().enumerate() {
        let mut power = ring.value_of(1);
        for _ in 0..i {
            power = ring.multiply(power, point);
        }
        sum = ring.add(sum, ring.multiply(c, power));
    }
    sum
}

fn assert_store_invariants<R: Ring>(p: &Poly<R>) {
    assert!(p.degree() < p.capacity());
    assert!(p.degree() == 0 || p.lc() != 0);
}

#[cfg(test)]
mod polynomial_tests {
    use super::*;

    #[test]
    fn test_concrete_evaluation() {
        assert_eq!(z(&[1, 2, 3]).evaluate(2), 17);
    }

    #[test]
    fn test_concrete_product() {
        let mut p = z(&[1, 2, 3]);
        p.multiply(&z(&[1, 1])).unwrap();
        assert_eq!(p.coefficients(), &[1, 3, 5, 3]);
        assert_eq!(p.to_string(), "3*x^3+5*x^2+3*x+1");
    }

    #[test]
    fn test_composition_identities() {
        let p = z(&[4, -1, 0, 2]);
        assert_eq!(p.composition(&p.create_one()).unwrap(), p);
        assert_eq!(p.composition(&p.create_zero()).unwrap(), z(&[4]));
    }

    #[test]
    fn test_mismatched_rings_are_rejected() {
        let r5 = ModularRing::new(5).unwrap();
        let r7 = ModularRing::new(7).unwrap();
        let mut p = Poly::from_slice(r5, &[1, 2, 3]);
        let q = Poly::from_slice(r7, &[1, 2, 3]);

        assert!(matches!(p.add(&q), Err(PolyError::DomainMismatch { .. })));
        assert!(matches!(p.subtract(&q), Err(PolyError::DomainMismatch { .. })));
        assert!(matches!(p.multiply(&q), Err(PolyError::DomainMismatch { .. })));
        assert!(matches!(p.subtract_shifted(&q, 1, 2), Err(PolyError::DomainMismatch { .. })));
        assert_eq!(p, Poly::from_slice(r5, &[1, 2, 3]));
    }

    #[test]
    fn test_invalid_modulus() {
        assert_eq!(ModularRing::new(1).unwrap_err(), PolyError::InvalidModulus(1));
        assert_eq!(ModularRing::new(-3).unwrap_err(), PolyError::InvalidModulus(-3));
    }

    #[test]
    fn test_unchecked_storage_requires_recompute() {
        let mut p = z(&[1, 2, 3]);
        p.storage_mut_unchecked()[2] = 0;
        p.recompute_degree();
        assert_eq!(p.degree(), 1);
        assert_store_invariants(&p);

        let mut q = z(&[1]);
        q.set(4, 9);
        q.storage_mut_unchecked()[4] = 0;
        q.storage_mut_unchecked()[0] = 0;
        q.recompute_degree();
        assert!(q.is_zero());
    }

    #[test]
    fn test_set_and_destroy_moves_storage() {
        let mut p = z(&[1, 2]);
        let q = z(&[7, 0, 0, 5]);
        p.set_and_destroy(q);
        assert_eq!(p.coefficients(), &[7, 0, 0, 5]);
        assert_eq!(p.degree(), 3);
    }

    #[test]
    fn test_content_of_extreme_coefficients() {
        // gcd(i64::MIN, i64::MIN) = 2^63 is reported as i64::MIN
        let p = z(&[i64::MIN, i64::MIN]);
        assert_eq!(p.content(), i64::MIN);
        assert_eq!(z(&[i64::MIN, 6]).content(), 2);

        let mut primitive = p.clone();
        primitive.primitive_part().unwrap();
        assert_eq!(primitive, z(&[1, 1]));
        assert_eq!(primitive.content(), 1);

        let mut same_sign = p.clone();
        same_sign.primitive_part_same_sign().unwrap();
        assert_eq!(same_sign, z(&[-1, -1]));
    }

    #[test]
    fn test_monic_does_not_overflow_intermediate_products() {
        let mut p = z(&[3, 6]);
        p.monic_with(1 << 62).unwrap();
        assert_eq!(p.coefficients(), &[1 << 61, 1 << 62]);
        assert_eq!(p.lc(), 1 << 62);
    }

    #[test]
    fn test_modular_normalization() {
        let r = ModularRing::new(101).unwrap();
        let mut p = Poly::from_slice(r, &[5, 10, 20]);
        p.primitive_part().unwrap();
        assert!(p.is_monic());
        assert_eq!(p.content(), 1);
    }
}

proptest! {
    #[test]
    fn horner_matches_naive_sum(
        coefficients in proptest::collection::vec(-100i64..=100, 1..9),
        point in -5i64..=5,
    ) {
        let p = z(&coefficients);
        prop_assert_eq!(p.evaluate(point), naive_evaluate(&p, point));
    }

    #[test]
    fn modular_horner_matches_naive_sum(
        modulus in 2i64..i64::MAX,
        coefficients in proptest::collection::vec(any::<i64>(), 1..20),
        point in any::<i64>(),
    ) {
        let p = Poly::from_slice(ModularRing::new(modulus).unwrap(), &coefficients);
        prop_assert_eq!(p.evaluate(point), naive_evaluate(&p, point));
    }

    #[test]
    fn composition_identities_hold(
        modulus in 2i64..1_000_000,
        coefficients in proptest::collection::vec(any::<i64>(), 1..20),
    ) {
        let p = Poly::from_slice(ModularRing::new(modulus).unwrap(), &coefficients);
        prop_assert_eq!(p.composition(&p.create_one()).unwrap(), p.clone());
        prop_assert_eq!(p.composition(&p.create_zero()).unwrap(), p.create_constant(p.cc()));
    }

    #[test]
    fn shift_round_trips(
        coefficients in proptest::collection::vec(-50i64..=50, 1..8),
        c in -4i64..=4,
    ) {
        let p = z(&coefficients);
        prop_assert_eq!(p.shift(c).shift(-c), p);
    }

    #[test]
    fn modular_shift_round_trips(
        modulus in 2i64..(1 << 40),
        coefficients in proptest::collection::vec(any::<i64>(), 1..16),
        c in any::<i64>(),
    ) {
        let ring = ModularRing::new(modulus).unwrap();
        let p = Poly::from_slice(ring, &coefficients);
        let back = ring.negate(ring.value_of(c));
        prop_assert_eq!(p.shift(c).shift(back), p);
    }

    #[test]
    fn reverse_is_an_involution_with_nonzero_constant(
        coefficients in proptest::collection::vec(-1000i64..=1000, 1..30),
        cc in 1i64..1000,
    ) {
        let mut coefficients = coefficients;
        coefficients[0] = cc;
        let p = z(&coefficients);
        let mut q = p.clone();
        q.reverse().reverse();
        prop_assert_eq!(q, p);
    }

    #[test]
    fn truncate_is_idempotent(
        coefficients in proptest::collection::vec(-1000i64..=1000, 1..30),
        d in 0usize..40,
    ) {
        let mut once = z(&coefficients);
        once.truncate(d);
        let mut twice = once.clone();
        twice.truncate(d);
        prop_assert_eq!(&twice, &once);
        assert_store_invariants(&twice);
    }

    #[test]
    fn primitive_part_times_content_restores_polynomial(
        coefficients in proptest::collection::vec(-10_000i64..=10_000, 1..20),
        scale in -50i64..=50,
    ) {
        let mut p = z(&coefficients);
        p.multiply_by_scalar(scale);
        prop_assume!(!p.is_zero());

        let content = p.content();
        let mut primitive = p.clone();
        primitive.primitive_part().unwrap();
        prop_assert_eq!(primitive.content(), 1);
        prop_assert_eq!(primitive.signum_of_lc(), 1);

        let mut restored = primitive.clone();
        restored.multiply_by_scalar(content);
        if p.signum_of_lc() < 0 {
            restored.negate();
        }
        prop_assert_eq!(restored, p.clone());

        let mut same_sign = p.clone();
        same_sign.primitive_part_same_sign().unwrap();
        prop_assert_eq!(same_sign.signum_of_lc(), p.signum_of_lc());
        same_sign.multiply_by_scalar(content);
        prop_assert_eq!(same_sign, p);
    }

    #[test]
    fn elementwise_operations_preserve_invariants(
        modulus in 2i64..16,
        a in proptest::collection::vec(any::<i64>(), 1..20),
        b in proptest::collection::vec(any::<i64>(), 1..20),
        factor in any::<i64>(),
        exponent in 0usize..8,
    ) {
        let ring = ModularRing::new(modulus).unwrap();
        let q = Poly::from_slice(ring, &b);
        let mut p = Poly::from_slice(ring, &a);

        p.add(&q).unwrap();
        assert_store_invariants(&p);
        p.subtract(&q).unwrap();
        assert_store_invariants(&p);
        prop_assert_eq!(&p, &Poly::from_slice(ring, &a));

        p.add_mul(&q, factor).unwrap();
        assert_store_invariants(&p);
        p.subtract_shifted(&q, factor, exponent).unwrap();
        assert_store_invariants(&p);
        p.multiply_by_scalar(factor);
        assert_store_invariants(&p);
        p.shift_left(exponent).shift_right(exponent);
        assert_store_invariants(&p);
    }
}
