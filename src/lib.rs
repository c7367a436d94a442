//! Exact polynomial interpolation with verification.
//!
//! Reconstructs the polynomial of degree ≤ k-1 through k points using Newton
//! divided differences over exact rationals, then checks it against every
//! supplied point.

pub mod error;
pub mod input;
pub mod interpolator;
pub mod math;
pub mod report;
pub mod verifier;

pub use error::{InterpolationError, Result};
pub use input::InputDocument;
pub use interpolator::{Interpolation, Interpolator, Point};
pub use math::{polynomial::Polynomial, rational::Rational};
pub use report::Report;
pub use verifier::{Mismatch, Verification, Verifier};

/// Interpolates `k` of the points and verifies the result against all of them.
pub fn solve(points: &[Point], k: i64) -> Result<(Interpolation, Verification)> {
    let interpolation = Interpolator::new(k)?.interpolate(points)?;
    let verification = Verifier::new(&interpolation.polynomial).verify(points)?;
    Ok((interpolation, verification))
}
