use crate::error::{GeometryError, Result};
use serde::{Deserialize, Serialize};

/// Shape and sampling parameters of a strip.
///
/// `radius` is the centerline radius R, `width` the strip width w and
/// `resolution` the number of samples n taken along each parameter axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripParams {
    pub radius: f64,
    pub width: f64,
    pub resolution: usize,
}

impl Default for StripParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width: 0.2,
            resolution: 200,
        }
    }
}

impl StripParams {
    pub fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                name: "radius",
                value: self.radius,
                reason: "must be finite and positive",
            });
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                name: "width",
                value: self.width,
                reason: "must be finite and positive",
            });
        }
        // Coordinate differences across the grid reach 2 (R + w/2).
        let reach = self.radius + self.width;
        if !(2.0 * reach).is_finite() {
            return Err(GeometryError::InvalidParameter {
                name: "radius + width",
                value: reach,
                reason: "too large for finite coordinate differences",
            });
        }
        if self.resolution < 2 {
            return Err(GeometryError::InvalidParameter {
                name: "resolution",
                value: self.resolution as f64,
                reason: "needs at least 2 samples per axis",
            });
        }
        Ok(())
    }

    /// Half the strip width, i.e. the |v| of both boundary curves.
    pub fn half_width(&self) -> f64 {
        0.5 * self.width
    }
}
