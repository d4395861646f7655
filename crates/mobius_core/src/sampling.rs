//! Parameter grid and embedding of the half-twist strip.

use crate::error::{GeometryError, Result};
use crate::params::StripParams;
use crate::quadrature::first_unordered;
use nalgebra::{DMatrix, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::{debug, instrument};

/// `n` evenly spaced samples over `[start, end]`, both endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let denom = (n - 1) as f64;
            let mut out: Vec<f64> = (0..n)
                .map(|i| start + (end - start) * i as f64 / denom)
                .collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Embedding map of the strip:
/// `((R + v cos(u/2)) cos u, (R + v cos(u/2)) sin u, v sin(u/2))`.
pub fn mobius_point(radius: f64, u: f64, v: f64) -> Vector3<f64> {
    let (sin_half, cos_half) = (0.5 * u).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let ring = radius + v * cos_half;
    Vector3::new(ring * cos_u, ring * sin_u, v * sin_half)
}

/// Sampled strip geometry.
///
/// Every grid is `n x n`. Row `i` holds the fixed-`u` line `u = u_i` and
/// column `j` the fixed-`v` line `v = v_j`, so `u[(i, j)] = u_i` and
/// `v[(i, j)] = v_j`. All fields are immutable after construction.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: StripParams,
    u_samples: Vec<f64>,
    v_samples: Vec<f64>,
    u: DMatrix<f64>,
    v: DMatrix<f64>,
    x: DMatrix<f64>,
    y: DMatrix<f64>,
    z: DMatrix<f64>,
}

impl MobiusStrip {
    /// Validates `params` and samples the strip. No geometry is produced on
    /// error.
    ///
    /// A width so small that `n` samples of `[-w/2, w/2]` do not strictly
    /// increase in f64 (subnormal widths at high resolution) is rejected as
    /// an invalid `width`.
    #[instrument(level = "debug")]
    pub fn new(params: StripParams) -> Result<Self> {
        params.validate()?;

        let n = params.resolution;
        let half = params.half_width();
        let u_samples = linspace(0.0, TAU, n);
        let v_samples = linspace(-half, half, n);
        if let Some(index) = first_unordered(&v_samples) {
            debug!(index, width = params.width, "v samples collapsed");
            return Err(GeometryError::InvalidParameter {
                name: "width",
                value: params.width,
                reason: "too small to resolve the requested number of samples",
            });
        }

        let u = DMatrix::from_fn(n, n, |i, _| u_samples[i]);
        let v = DMatrix::from_fn(n, n, |_, j| v_samples[j]);

        let mut x = DMatrix::<f64>::zeros(n, n);
        let mut y = DMatrix::<f64>::zeros(n, n);
        let mut z = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let p = mobius_point(params.radius, u_samples[i], v_samples[j]);
                x[(i, j)] = p.x;
                y[(i, j)] = p.y;
                z[(i, j)] = p.z;
            }
        }

        debug!(n, radius = params.radius, width = params.width, "sampled strip grid");
        Ok(Self {
            params,
            u_samples,
            v_samples,
            u,
            v,
            x,
            y,
            z,
        })
    }

    /// Shorthand for `MobiusStrip::new(StripParams::new(radius, width, resolution))`.
    pub fn with_dimensions(radius: f64, width: f64, resolution: usize) -> Result<Self> {
        Self::new(StripParams::new(radius, width, resolution))
    }

    pub fn params(&self) -> &StripParams {
        &self.params
    }

    pub fn resolution(&self) -> usize {
        self.params.resolution
    }

    /// The 1D u abscissas, one per grid row.
    pub fn u_samples(&self) -> &[f64] {
        &self.u_samples
    }

    /// The 1D v abscissas, one per grid column.
    pub fn v_samples(&self) -> &[f64] {
        &self.v_samples
    }

    pub fn u(&self) -> &DMatrix<f64> {
        &self.u
    }

    pub fn v(&self) -> &DMatrix<f64> {
        &self.v
    }

    pub fn x(&self) -> &DMatrix<f64> {
        &self.x
    }

    pub fn y(&self) -> &DMatrix<f64> {
        &self.y
    }

    pub fn z(&self) -> &DMatrix<f64> {
        &self.z
    }

    /// Row-major copy of the coordinate grids for display.
    pub fn coordinate_grids(&self) -> CoordinateGrids {
        CoordinateGrids {
            rows: self.x.nrows(),
            cols: self.x.ncols(),
            x: row_major(&self.x),
            y: row_major(&self.y),
            z: row_major(&self.z),
        }
    }
}

/// Renderer-facing snapshot of the coordinate field. Entry `(i, j)` of each
/// grid lives at index `i * cols + j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateGrids {
    pub rows: usize,
    pub cols: usize,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

/// Entries of `matrix` in row order, `(i, j)` at `i * ncols + j`.
pub fn row_major(matrix: &DMatrix<f64>) -> Vec<f64> {
    // nalgebra stores column-major; the transpose's storage is our row order.
    matrix.transpose().as_slice().to_vec()
}
