//! Newton divided-difference interpolation over the rationals.
//!
//! The interpolator picks `k` points with distinct x, builds the divided-difference
//! table and expands the Newton form
//!
//! ```text
//! P(x) = Σᵢ dd[0][i] · Πₜ<ᵢ (x - xₜ)
//! ```
//!
//! into ascending-power coefficients.

use num_bigint::BigUint;
use tracing::{debug, info, trace};

use crate::error::{InterpolationError, Result};
use crate::math::{polynomial::Polynomial, rational::Rational};

/// A sample `(x, y)` with an integer key and a non-negative value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: BigUint,
}

impl Point {
    pub fn new(x: i64, y: impl Into<BigUint>) -> Self {
        Self { x, y: y.into() }
    }
}

/// Result of a successful interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation {
    /// Points used as interpolation nodes, ascending by x.
    pub nodes: Vec<Point>,
    /// Top row of the divided-difference table, `dd[0][0..k]`.
    pub newton_coefficients: Vec<Rational>,
    /// The interpolating polynomial in the standard basis.
    pub polynomial: Polynomial,
}

/// Interpolator for a fixed number of required samples.
pub struct Interpolator {
    /// Number of distinct-x points that determine the polynomial
    k: usize,
}

impl Interpolator {
    /// Creates an interpolator requiring `k` samples.
    ///
    /// Fails with [`InterpolationError::InvalidConfiguration`] if `k < 1`.
    pub fn new(k: i64) -> Result<Self> {
        if k < 1 {
            return Err(InterpolationError::InvalidConfiguration { k });
        }
        let k = usize::try_from(k).map_err(|_| InterpolationError::InvalidConfiguration { k })?;
        Ok(Self { k })
    }

    pub fn required_samples(&self) -> usize {
        self.k
    }

    /// Builds the polynomial of degree ≤ k-1 through the first `k` distinct-x points.
    ///
    /// # Arguments
    ///
    /// * `points` - Raw points in any order; duplicates of an x are ignored after the first
    ///
    /// # Returns
    ///
    /// The selected nodes, their Newton coefficients and the expanded polynomial.
    pub fn interpolate(&self, points: &[Point]) -> Result<Interpolation> {
        let nodes = select_nodes(points, self.k)?;
        debug!(
            xs = ?nodes.iter().map(|p| p.x).collect::<Vec<_>>(),
            "selected interpolation nodes"
        );

        let newton_coefficients = divided_differences(&nodes)?;
        debug!(
            coefficients = %join(&newton_coefficients),
            "computed newton coefficients"
        );

        let polynomial = newton_to_standard(&nodes, &newton_coefficients);
        info!(degree = polynomial.degree(), k = self.k, "interpolated polynomial");

        Ok(Interpolation {
            nodes,
            newton_coefficients,
            polynomial,
        })
    }
}

/// Sorts points by x and keeps the first occurrence of each x until `k` are found.
///
/// Fails with [`InterpolationError::InsufficientPoints`] if fewer than `k`
/// distinct x values exist.
pub fn select_nodes(points: &[Point], k: usize) -> Result<Vec<Point>> {
    let mut sorted: Vec<&Point> = points.iter().collect();
    // Stable, so the first supplied point wins for a repeated x.
    sorted.sort_by_key(|p| p.x);

    let mut nodes: Vec<Point> = Vec::with_capacity(k.min(points.len()));
    for point in sorted {
        if nodes.len() == k {
            break;
        }
        if nodes.last().is_some_and(|last| last.x == point.x) {
            continue;
        }
        nodes.push(point.clone());
    }

    if nodes.len() < k {
        return Err(InterpolationError::InsufficientPoints {
            required: k,
            available: nodes.len(),
        });
    }
    Ok(nodes)
}

/// Computes the Newton coefficients `dd[0][0..k]` of the given nodes.
///
/// # Details
///
/// `dd[i][0] = yᵢ` and
/// `dd[i][j] = (dd[i+1][j-1] - dd[i][j-1]) / (x_{i+j} - xᵢ)`.
/// Nodes must have distinct x; a repeated x surfaces as
/// [`InterpolationError::DivisionByZero`].
pub fn divided_differences(nodes: &[Point]) -> Result<Vec<Rational>> {
    let n = nodes.len();
    let xs: Vec<Rational> = nodes.iter().map(|p| Rational::from(p.x)).collect();

    let mut table: Vec<Vec<Rational>> = nodes
        .iter()
        .map(|p| {
            let mut row = Vec::with_capacity(n);
            row.push(Rational::from(&p.y));
            row
        })
        .collect();

    for j in 1..n {
        for i in 0..n - j {
            let num = &table[i + 1][j - 1] - &table[i][j - 1];
            let den = &xs[i + j] - &xs[i];
            let value = num.checked_div(&den)?;
            table[i].push(value);
        }
        trace!(order = j, entries = n - j, "divided differences");
    }

    // Row 0 has collected one entry per order.
    Ok(table.into_iter().next().unwrap_or_default())
}

/// Expands the Newton form into the standard basis.
///
/// The basis product `Πₜ<ᵢ (x - xₜ)` is grown by one linear factor per step,
/// so the expansion costs O(k²) rational operations.
pub fn newton_to_standard(nodes: &[Point], newton_coefficients: &[Rational]) -> Polynomial {
    let mut result = Polynomial::zero();
    let mut basis = Polynomial::one();
    let last = newton_coefficients.len().saturating_sub(1);

    for (i, (node, coeff)) in nodes.iter().zip(newton_coefficients).enumerate() {
        result = result.add(&basis.scale(coeff));
        if i < last {
            basis = basis.mul_linear(&Rational::from(node.x));
        }
    }

    result
}

fn join(values: &[Rational]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
