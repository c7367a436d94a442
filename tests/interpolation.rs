#[cfg(test)]
mod tests {
    use exactpoly::{InterpolationError, Interpolator, Point, Polynomial, Rational, solve};
    use num_bigint::{BigInt, BigUint};
    use num_integer::Integer;
    use num_traits::One;
    use rand_chacha::ChaCha8Rng;
    use rand_core::{RngCore, SeedableRng};

    fn points(raw: &[(i64, u64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn ints(values: &[i64]) -> Vec<Rational> {
        values.iter().map(|&v| Rational::from(v)).collect()
    }

    /// Distinct x values in a random order with large random y values.
    fn random_points(rng: &mut ChaCha8Rng, k: usize) -> Vec<Point> {
        let mut x = -((rng.next_u64() % 50) as i64);
        let mut pts = Vec::with_capacity(k);
        for _ in 0..k {
            x += (rng.next_u64() % 7) as i64 + 1;
            let y = BigUint::from(rng.next_u64()) * BigUint::from(rng.next_u64());
            pts.push((rng.next_u64(), Point { x, y }));
        }
        pts.sort_by_key(|(key, _)| *key);
        pts.into_iter().map(|(_, p)| p).collect()
    }

    fn assert_canonical(poly: &Polynomial) {
        for c in poly.coefficients() {
            assert!(c.denom() > &BigInt::from(0));
            assert!(c.numer().gcd(c.denom()).is_one());
        }
    }

    #[test]
    fn test_scenario_quadratic() {
        let pts = points(&[(1, 4), (2, 4), (3, 6)]);
        let (interpolation, verification) = solve(&pts, 3).unwrap();

        assert_eq!(interpolation.polynomial.degree(), 2);
        assert_eq!(interpolation.polynomial.coefficients(), ints(&[6, -3, 1]).as_slice());
        assert!(verification.all_matched);
        assert!(verification.mismatches.is_empty());
    }

    #[test]
    fn test_scenario_extra_inconsistent_point() {
        let pts = points(&[(1, 4), (2, 4), (3, 6), (4, 100)]);
        let (interpolation, verification) = solve(&pts, 3).unwrap();

        assert_eq!(interpolation.polynomial.coefficients(), ints(&[6, -3, 1]).as_slice());
        assert!(!verification.all_matched);
        assert_eq!(verification.mismatches.len(), 1);
        let mismatch = &verification.mismatches[0];
        assert_eq!(mismatch.x, 4);
        assert_eq!(mismatch.expected, BigUint::from(100u32));
        assert_eq!(mismatch.actual, BigInt::from(10));
    }

    #[test]
    fn test_scenario_single_point() {
        let (interpolation, verification) = solve(&points(&[(5, 7)]), 1).unwrap();
        assert_eq!(interpolation.polynomial.degree(), 0);
        assert_eq!(interpolation.polynomial.coefficients(), ints(&[7]).as_slice());
        assert!(verification.all_matched);
    }

    #[test]
    fn test_scenario_insufficient_points() {
        let pts = points(&[(1, 4), (1, 5), (2, 4)]);
        let err = solve(&pts, 3).unwrap_err();
        assert!(matches!(
            err,
            InterpolationError::InsufficientPoints {
                required: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn test_huge_sample_count() {
        let err = solve(&points(&[(1, 4)]), i64::MAX).unwrap_err();
        assert!(matches!(
            err,
            InterpolationError::InsufficientPoints { available: 1, .. }
        ));
    }

    #[test]
    fn test_invalid_sample_count() {
        let err = solve(&points(&[(1, 1)]), 0).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidConfiguration { k: 0 }));
    }

    #[test]
    fn test_fractional_coefficients() {
        // Points on x(x + 1) / 2: triangular numbers
        let pts = points(&[(0, 0), (1, 1), (2, 3), (3, 6)]);
        let (interpolation, verification) = solve(&pts, 3).unwrap();
        let half = Rational::new(BigInt::from(1), BigInt::from(2)).unwrap();

        assert_eq!(
            interpolation.polynomial.coefficients(),
            &[Rational::from(0i64), half.clone(), half]
        );
        assert_canonical(&interpolation.polynomial);
        assert!(verification.all_matched);
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for k in 1..=12 {
            let pts = random_points(&mut rng, k);
            let (interpolation, verification) = solve(&pts, k as i64).unwrap();

            assert!(interpolation.polynomial.degree() < k);
            assert_canonical(&interpolation.polynomial);
            assert!(verification.all_matched, "k = {k}");
            for p in &pts {
                assert_eq!(
                    interpolation.polynomial.evaluate_integer(p.x).unwrap(),
                    BigInt::from(p.y.clone())
                );
            }
        }
    }

    #[test]
    fn test_order_independent() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pts = random_points(&mut rng, 8);
        let interpolator = Interpolator::new(8).unwrap();
        let expected = interpolator.interpolate(&pts).unwrap();

        let mut reversed = pts.clone();
        reversed.reverse();
        assert_eq!(interpolator.interpolate(&reversed).unwrap(), expected);

        let mut rotated = pts.clone();
        rotated.rotate_left(3);
        assert_eq!(interpolator.interpolate(&rotated).unwrap(), expected);
    }

    #[test]
    fn test_negative_x_nodes() {
        // y = x^2 at -2, -1, 0
        let pts = points(&[(-2, 4), (-1, 1), (0, 0)]);
        let (interpolation, _) = solve(&pts, 3).unwrap();
        assert_eq!(interpolation.polynomial.coefficients(), ints(&[0, 0, 1]).as_slice());
    }
}
