use crate::area::{finite_estimate, magnitude};
use crate::differentiation::gradient;
use crate::error::Result;
use crate::quadrature::QuadratureRule;
use crate::sampling::{linspace, mobius_point, MobiusStrip};
use serde::{Deserialize, Serialize};
use nalgebra::Vector3;
use std::f64::consts::TAU;
use tracing::{debug, instrument};

/// Number of boundary curves the single-curve integral is multiplied by.
///
/// `(u, v) -> (2pi - u, -v)` maps the half-twist strip onto itself rotated
/// by pi about the x axis, so the `v = +w/2` and `v = -w/2` curves have equal
/// length and only the first is integrated. A change to `mobius_point` must
/// revisit this.
pub const BOUNDARY_CURVES: f64 = 2.0;

/// A fixed-`v` curve sampled at the strip's `u` resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeCurve {
    pub v: f64,
    pub u: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl EdgeCurve {
    /// Arc-length density `|dr/du|` at every sample.
    pub fn speed(&self) -> Result<Vec<f64>> {
        let dx = gradient(&self.x, &self.u)?;
        let dy = gradient(&self.y, &self.u)?;
        let dz = gradient(&self.z, &self.u)?;
        Ok(dx
            .iter()
            .zip(&dy)
            .zip(&dz)
            .map(|((&dx, &dy), &dz)| magnitude(&Vector3::new(dx, dy, dz)))
            .collect())
    }

    pub fn length_with(&self, rule: QuadratureRule) -> Result<f64> {
        rule.check_samples(self.u.len())?;
        rule.integrate(&self.speed()?, &self.u)
    }
}

impl MobiusStrip {
    /// Resamples `u` over `[0, 2pi]` and evaluates the embedding at fixed `v`.
    /// Independent of the stored coordinate grids.
    pub fn edge_curve(&self, v: f64) -> EdgeCurve {
        let radius = self.params().radius;
        let u = linspace(0.0, TAU, self.resolution());
        let mut x = Vec::with_capacity(u.len());
        let mut y = Vec::with_capacity(u.len());
        let mut z = Vec::with_capacity(u.len());
        for &ui in &u {
            let p = mobius_point(radius, ui, v);
            x.push(p.x);
            y.push(p.y);
            z.push(p.z);
        }
        EdgeCurve { v, u, x, y, z }
    }

    /// Length of the `v = +w/2` boundary curve alone.
    pub fn single_edge_length(&self, rule: QuadratureRule) -> Result<f64> {
        self.edge_curve(self.params().half_width()).length_with(rule)
    }

    /// Total boundary length by composite Simpson quadrature.
    pub fn edge_length(&self) -> Result<f64> {
        self.edge_length_with(QuadratureRule::Simpson)
    }

    #[instrument(level = "debug", skip(self), fields(n = self.resolution()))]
    pub fn edge_length_with(&self, rule: QuadratureRule) -> Result<f64> {
        let single = self.single_edge_length(rule)?;
        let total = BOUNDARY_CURVES * single;
        debug!(single, total, %rule, "integrated edge length");
        finite_estimate("edge length", total)
    }
}
