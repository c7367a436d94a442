//! Exact arithmetic used by the interpolator.
//!
//! This module provides a canonical rational type over arbitrary-precision integers
//! and univariate polynomials with rational coefficients in the standard basis.

pub mod polynomial;
pub mod rational;
