//! Rendering interpolation results for output.

use serde::Serialize;
use std::fmt;

use crate::{
    math::polynomial::Polynomial,
    verifier::{Mismatch, Verification},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchRecord {
    pub x: i64,
    pub expected: String,
    pub actual: String,
}

impl From<&Mismatch> for MismatchRecord {
    fn from(m: &Mismatch) -> Self {
        Self {
            x: m.x,
            expected: m.expected.to_string(),
            actual: m.actual.to_string(),
        }
    }
}

/// Degree, coefficients and verification outcome, with numbers as decimal strings.
///
/// Coefficients are in ascending order of power and render as a plain integer or
/// a reduced `numerator/denominator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub degree: usize,
    pub coefficients: Vec<String>,
    pub verified: bool,
    pub mismatches: Vec<MismatchRecord>,
}

impl Report {
    pub fn new(polynomial: &Polynomial, verification: &Verification) -> Self {
        Self {
            degree: polynomial.degree(),
            coefficients: polynomial
                .coefficients()
                .iter()
                .map(ToString::to_string)
                .collect(),
            verified: verification.all_matched,
            mismatches: verification.mismatches.iter().map(Into::into).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Degree m = {}", self.degree)?;
        writeln!(f, "Coefficients (a0..a{}):", self.degree)?;
        for (i, c) in self.coefficients.iter().enumerate() {
            writeln!(f, "a{i} = {c}")?;
        }
        for m in &self.mismatches {
            writeln!(
                f,
                "VERIFY MISMATCH at x={}: expected {}, got {}",
                m.x, m.expected, m.actual
            )?;
        }
        if self.verified {
            write!(f, "VERIFY: all provided points match")
        } else {
            write!(f, "VERIFY: mismatches found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rational::Rational;
    use num_bigint::{BigInt, BigUint};

    fn sample() -> Report {
        let half = Rational::new(BigInt::from(-1), BigInt::from(2)).unwrap();
        let poly = Polynomial::new(vec![Rational::from(6i64), half, Rational::from(1i64)]);
        let verification = Verification {
            all_matched: false,
            mismatches: vec![Mismatch {
                x: 4,
                expected: BigUint::from(100u32),
                actual: BigInt::from(20),
            }],
        };
        Report::new(&poly, &verification)
    }

    #[test]
    fn test_text_report() {
        let expected = "\
Degree m = 2
Coefficients (a0..a2):
a0 = 6
a1 = -1/2
a2 = 1
VERIFY MISMATCH at x=4: expected 100, got 20
VERIFY: mismatches found";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_json_report() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(value["degree"], 2);
        assert_eq!(value["coefficients"][1], "-1/2");
        assert_eq!(value["verified"], false);
        assert_eq!(value["mismatches"][0]["expected"], "100");
        assert_eq!(value["mismatches"][0]["actual"], "20");
    }
}
