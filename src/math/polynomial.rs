//! Polynomials with exact rational coefficients.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;

use crate::error::{InterpolationError, Result};
use crate::math::rational::Rational;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Polynomial with rational coefficients.
///
/// The polynomial is stored as a vector of coefficients, where the index represents
/// the power of x. For example, [6, -3, 1] represents x² - 3x + 6.
///
/// # Invariants
///
/// * The coefficients vector is never empty
/// * The last coefficient is non-zero, except for the zero polynomial `[0]`
///
/// Every operation returns a new, trimmed polynomial.
pub struct Polynomial {
    coefficients: Vec<Rational>,
}

impl Polynomial {
    /// Creates a new polynomial from coefficients in ascending order of power.
    ///
    /// Trailing zeros are removed. An empty vector yields the zero polynomial.
    pub fn new(coefficients: Vec<Rational>) -> Self {
        let mut poly = Self { coefficients };
        poly.trim();
        poly
    }

    /// Creates the zero polynomial `[0]`.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![Rational::zero()],
        }
    }

    /// Creates the constant polynomial `[1]`.
    pub fn one() -> Self {
        Self::constant(Rational::one())
    }

    pub fn constant(value: Rational) -> Self {
        Self::new(vec![value])
    }

    // Drops trailing zeros while keeping at least one coefficient.
    fn trim(&mut self) {
        while self.coefficients.len() > 1
            && self.coefficients.last().is_some_and(|c| c.is_zero())
        {
            self.coefficients.pop();
        }
        if self.coefficients.is_empty() {
            self.coefficients.push(Rational::zero());
        }
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the coefficient of the highest power term.
    pub fn leading_coefficient(&self) -> &Rational {
        &self.coefficients[self.coefficients.len() - 1]
    }

    /// Returns polynomial coefficients in ascending order of power.
    pub fn coefficients(&self) -> &[Rational] {
        &self.coefficients
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    /// Adds two polynomials.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let max_len = std::cmp::max(self.coefficients.len(), other.coefficients.len());
        let mut result = vec![Rational::zero(); max_len];

        for (coeff, c) in result.iter_mut().zip(&self.coefficients) {
            *coeff += c;
        }

        for (coeff, c) in result.iter_mut().zip(&other.coefficients) {
            *coeff += c;
        }

        Polynomial::new(result)
    }

    /// Multiplies every coefficient by `k`.
    pub fn scale(&self, k: &Rational) -> Polynomial {
        if k.is_zero() {
            return Polynomial::zero();
        }
        Polynomial::new(self.coefficients.iter().map(|c| c * k).collect())
    }

    /// Multiplies the polynomial by the linear factor `(x - a)`.
    ///
    /// # Details
    ///
    /// For input coefficients c_0..c_{n-1} the output has length n + 1, where
    /// every c_i contributes `c_i` to the x^{i+1} slot and `-a·c_i` to the x^i slot.
    pub fn mul_linear(&self, a: &Rational) -> Polynomial {
        let n = self.coefficients.len();
        let mut result = vec![Rational::zero(); n + 1];

        for (i, c) in self.coefficients.iter().enumerate() {
            result[i + 1] += c;
            result[i] -= &(c * a);
        }

        Polynomial::new(result)
    }

    /// Evaluates the polynomial at point x.
    ///
    /// # Details
    ///
    /// Evaluation is performed using Horner's method, from the highest power
    /// down to the constant term.
    pub fn evaluate(&self, x: &Rational) -> Rational {
        self.coefficients
            .iter()
            .rev()
            .fold(Rational::zero(), |acc, c| &(&acc * x) + c)
    }

    /// Evaluates the polynomial at an integer point, requiring an integer result.
    ///
    /// Fails with [`InterpolationError::NonIntegerEvaluation`] if the value has a
    /// denominator other than one.
    pub fn evaluate_integer(&self, x: i64) -> Result<BigInt> {
        let value = self.evaluate(&Rational::from(x));
        if !value.is_integer() {
            return Err(InterpolationError::NonIntegerEvaluation {
                x,
                value: value.to_string(),
            });
        }
        Ok(value.numer().clone())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (power, coeff) in self.coefficients.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }

            let negative = coeff.numer().is_negative();
            if first {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let abs_coeff = if negative { -coeff.clone() } else { coeff.clone() };
            if power == 0 || !abs_coeff.is_one() {
                write!(f, "{abs_coeff}")?;
            }

            if power > 0 {
                write!(f, "x")?;
                if power > 1 {
                    write!(f, "^{power}")?;
                }
            }
        }

        Ok(())
    }
}
