//! Composite quadrature over ordered samples.
//!
//! Both rules take the sampled ordinates together with their abscissas and
//! accept non-uniform spacing. They are independent of any geometry so they
//! can be checked against closed-form integrals directly.

use crate::error::{GeometryError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadratureRule {
    #[default]
    Simpson,
    Trapezoid,
}

impl QuadratureRule {
    /// Smallest number of samples the rule can integrate.
    pub fn min_samples(self) -> usize {
        match self {
            QuadratureRule::Simpson => 3,
            QuadratureRule::Trapezoid => 2,
        }
    }

    pub fn integrate(self, values: &[f64], abscissas: &[f64]) -> Result<f64> {
        match self {
            QuadratureRule::Simpson => simpson(values, abscissas),
            QuadratureRule::Trapezoid => trapezoid(values, abscissas),
        }
    }

    /// Fails with `DegenerateQuadrature` when `samples` is below the minimum.
    pub fn check_samples(self, samples: usize) -> Result<()> {
        let minimum = self.min_samples();
        if samples < minimum {
            return Err(GeometryError::DegenerateQuadrature {
                rule: self,
                samples,
                minimum,
            });
        }
        Ok(())
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadratureRule::Simpson => f.write_str("simpson"),
            QuadratureRule::Trapezoid => f.write_str("trapezoid"),
        }
    }
}

impl FromStr for QuadratureRule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simpson" => Ok(QuadratureRule::Simpson),
            "trapezoid" | "trapezoidal" => Ok(QuadratureRule::Trapezoid),
            other => Err(format!("Unknown quadrature rule: {other}")),
        }
    }
}

/// Checks that the two slices pair up and the abscissas strictly increase.
pub(crate) fn validate_samples(values: &[f64], abscissas: &[f64]) -> Result<()> {
    validate_abscissas(values.len(), abscissas)
}

pub(crate) fn validate_abscissas(len: usize, abscissas: &[f64]) -> Result<()> {
    if len != abscissas.len() {
        return Err(GeometryError::SampleMismatch {
            values: len,
            abscissas: abscissas.len(),
        });
    }
    match first_unordered(abscissas) {
        Some(index) => Err(GeometryError::UnorderedAbscissas { index }),
        None => Ok(()),
    }
}

/// Index of the first sample that is not strictly greater than its
/// predecessor. NaN compares unordered and is reported too.
pub(crate) fn first_unordered(abscissas: &[f64]) -> Option<usize> {
    (1..abscissas.len())
        .find(|&i| abscissas[i].partial_cmp(&abscissas[i - 1]) != Some(Ordering::Greater))
}

/// Composite Simpson's rule.
///
/// With an odd sample count every pair of intervals gets a (possibly
/// non-uniform) three-point parabola. With an even count the leading
/// `len - 1` samples are handled that way and the final interval receives a
/// three-point correction that is exact for quadratics, so no sample is
/// dropped.
pub fn simpson(values: &[f64], abscissas: &[f64]) -> Result<f64> {
    QuadratureRule::Simpson.check_samples(values.len())?;
    validate_samples(values, abscissas)?;

    let n = values.len();
    let paired = if n % 2 == 1 { n } else { n - 1 };

    let mut sum = 0.0;
    let mut i = 0;
    while i + 2 < paired {
        let h0 = abscissas[i + 1] - abscissas[i];
        let h1 = abscissas[i + 2] - abscissas[i + 1];
        let span = h0 + h1;
        sum += span / 6.0
            * ((2.0 - h1 / h0) * values[i]
                + (span / h0) * (span / h1) * values[i + 1]
                + (2.0 - h0 / h1) * values[i + 2]);
        i += 2;
    }

    if n % 2 == 0 {
        let h0 = abscissas[n - 2] - abscissas[n - 3];
        let h1 = abscissas[n - 1] - abscissas[n - 2];
        // Weights kept as h1 times spacing ratios so they cannot underflow.
        let alpha = h1 * ((2.0 * h1 + 3.0 * h0) / (h0 + h1)) / 6.0;
        let beta = h1 * (h1 / h0 + 3.0) / 6.0;
        let eta = h1 * (h1 / h0) * (h1 / (h0 + h1)) / 6.0;
        sum += alpha * values[n - 1] + beta * values[n - 2] - eta * values[n - 3];
    }

    Ok(sum)
}

/// Composite trapezoidal rule.
pub fn trapezoid(values: &[f64], abscissas: &[f64]) -> Result<f64> {
    QuadratureRule::Trapezoid.check_samples(values.len())?;
    validate_samples(values, abscissas)?;

    Ok(values
        .windows(2)
        .zip(abscissas.windows(2))
        .map(|(f, x)| 0.5 * (x[1] - x[0]) * (f[0] + f[1]))
        .sum())
}
