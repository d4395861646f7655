use crate::quadrature::QuadratureRule;

/// Errors raised while building a strip or integrating its sampled fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{rule} quadrature needs at least {minimum} samples, got {samples}")]
    DegenerateQuadrature {
        rule: QuadratureRule,
        samples: usize,
        minimum: usize,
    },

    #[error("{operation} needs at least {minimum} samples, got {samples}")]
    InsufficientSamples {
        operation: &'static str,
        samples: usize,
        minimum: usize,
    },

    #[error("sample length mismatch: {values} values against {abscissas} abscissas")]
    SampleMismatch { values: usize, abscissas: usize },

    #[error("abscissas must be strictly increasing (violated at index {index})")]
    UnorderedAbscissas { index: usize },

    #[error("{quantity} estimate is not representable as a finite f64 (got {value})")]
    NonFiniteEstimate { quantity: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
