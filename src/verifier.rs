use num_bigint::{BigInt, BigUint};
use tracing::{info, warn};

use crate::{error::Result, interpolator::Point, math::polynomial::Polynomial};

/// A point whose value disagrees with the polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub x: i64,
    pub expected: BigUint,
    pub actual: BigInt,
}

/// Outcome of checking a polynomial against a set of points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub all_matched: bool,
    /// Every mismatch, in the order the points were supplied.
    pub mismatches: Vec<Mismatch>,
}

/// Checks an interpolated polynomial against every supplied point.
///
/// The verifier:
/// 1. Evaluates the polynomial at each point's x with exact arithmetic
/// 2. Compares the integer value with the point's y
/// 3. Collects all disagreements instead of stopping at the first one
pub struct Verifier<'a> {
    polynomial: &'a Polynomial,
}

impl<'a> Verifier<'a> {
    pub fn new(polynomial: &'a Polynomial) -> Self {
        Self { polynomial }
    }

    /// Verifies the polynomial against `points`.
    ///
    /// # Returns
    ///
    /// A complete [`Verification`] report. Mismatches are data, not errors; the
    /// only failure is [`crate::InterpolationError::NonIntegerEvaluation`], which
    /// means the polynomial itself is inconsistent with integral data.
    pub fn verify(&self, points: &[Point]) -> Result<Verification> {
        let mut mismatches = Vec::new();

        for point in points {
            let actual = self.polynomial.evaluate_integer(point.x)?;
            if actual != BigInt::from(point.y.clone()) {
                warn!(x = point.x, expected = %point.y, actual = %actual, "verify mismatch");
                mismatches.push(Mismatch {
                    x: point.x,
                    expected: point.y.clone(),
                    actual,
                });
            }
        }

        let all_matched = mismatches.is_empty();
        info!(
            points = points.len(),
            mismatches = mismatches.len(),
            all_matched,
            "verification finished"
        );

        Ok(Verification {
            all_matched,
            mismatches,
        })
    }
}
