use crate::error::Result;
use crate::params::StripParams;
use crate::quadrature::QuadratureRule;
use crate::sampling::MobiusStrip;
use serde::{Deserialize, Serialize};

/// Both scalar measurements of one strip, with the inputs that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub params: StripParams,
    pub rule: QuadratureRule,
    pub surface_area: f64,
    pub edge_length: f64,
}

impl MobiusStrip {
    pub fn measure(&self, rule: QuadratureRule) -> Result<Measurements> {
        Ok(Measurements {
            params: *self.params(),
            rule,
            surface_area: self.surface_area_with(rule)?,
            edge_length: self.edge_length_with(rule)?,
        })
    }
}

/// Builds the strip for `params` and measures it.
pub fn measure(params: StripParams, rule: QuadratureRule) -> Result<Measurements> {
    MobiusStrip::new(params)?.measure(rule)
}
