use crate::quadrature::reference_shape::ReferenceShape;
use std::fmt;

/// Error types of rule construction, lookup and integration
#[derive(Debug, Clone, PartialEq)]
pub enum QuadError {
    /// no construction strategy for the requested (shape, order) combination
    LookupError {
        shape: ReferenceShape,
        order: usize,
        reason: String,
    },
    /// degenerate input handed to the integrator (e.g. a rule without points)
    PreconditionError(String),
    /// malformed table data or weights/points of different length
    DataIntegrityError(String),
    /// order 0 has no rule
    InvalidOrder(usize),
    /// the 1-D node/weight generator rejected the order
    GeneratorFailure(String),
    /// bad configuration value
    ConfigError(String),
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadError::LookupError {
                shape,
                order,
                reason,
            } => write!(f, "No {} rule of order {}: {}", shape, order, reason),
            QuadError::PreconditionError(msg) => write!(f, "Precondition violated: {}", msg),
            QuadError::DataIntegrityError(msg) => write!(f, "Malformed rule data: {}", msg),
            QuadError::InvalidOrder(order) => {
                write!(f, "Invalid quadrature order {} (must be at least 1)", order)
            }
            QuadError::GeneratorFailure(msg) => {
                write!(f, "Gauss-Legendre generator failed: {}", msg)
            }
            QuadError::ConfigError(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for QuadError {}

pub type QuadResult<T> = std::result::Result<T, QuadError>;

impl QuadError {
    pub(crate) fn lookup(shape: ReferenceShape, order: usize, reason: impl Into<String>) -> Self {
        QuadError::LookupError {
            shape,
            order,
            reason: reason.into(),
        }
    }
}
