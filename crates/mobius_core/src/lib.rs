//! The `mobius_core` crate samples a half-twist ruled strip on a uniform
//! `(u, v)` grid and estimates its surface area and boundary length by
//! numerical integration.
//!
//! Key components:
//! - **Sampling**: `MobiusStrip`, the `n x n` parameter and coordinate grids.
//! - **Differentiation**: centered finite differences with one-sided ends.
//! - **Quadrature**: composite Simpson and trapezoidal rules over ordered samples.
//! - **Area / Edge**: the two estimators built on top of the grids.

pub mod area;
pub mod differentiation;
pub mod edge;
pub mod error;
pub mod measurements;
pub mod params;
pub mod quadrature;
pub mod sampling;

pub use edge::{EdgeCurve, BOUNDARY_CURVES};
pub use error::{GeometryError, Result};
pub use measurements::{measure, Measurements};
pub use params::StripParams;
pub use quadrature::QuadratureRule;
pub use sampling::{CoordinateGrids, MobiusStrip};
