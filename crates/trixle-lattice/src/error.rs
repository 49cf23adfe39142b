//! Error types for lattice construction.

use std::fmt;

/// Errors arising from lattice construction.
#[derive(Clone, Debug, PartialEq)]
pub enum LatticeError {
    /// The geometry scale factor is zero, negative, or not finite.
    InvalidScale {
        /// The rejected scale.
        value: f64,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { value } => {
                write!(f, "grid scale must be finite and positive, got {value}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}

/// Check a scale factor, returning it unchanged when valid.
pub(crate) fn check_scale(scale: f64) -> Result<f64, LatticeError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(LatticeError::InvalidScale { value: scale })
    }
}
