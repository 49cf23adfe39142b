//! Error types for running a walk.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Errors returned before a simulation starts.
///
/// Kernels have no recoverable runtime failures: once a run has been
/// accepted it always completes.
#[derive(Clone, Debug, PartialEq)]
pub enum WalkError {
    /// The requested step count exceeds the configured upper bound.
    InvalidStepCount {
        /// The rejected step count.
        requested: u32,
        /// The largest accepted step count.
        max: u32,
    },
    /// The walk configuration failed validation.
    InvalidConfig(ConfigError),
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepCount { requested, max } => {
                write!(f, "step count {requested} exceeds maximum of {max}")
            }
            Self::InvalidConfig(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::InvalidStepCount { .. } => None,
        }
    }
}

impl From<ConfigError> for WalkError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trixle_lattice::LatticeError;

    #[test]
    fn display_step_count() {
        let e = WalkError::InvalidStepCount {
            requested: 10,
            max: 5,
        };
        assert_eq!(e.to_string(), "step count 10 exceeds maximum of 5");
        assert!(e.source().is_none());
    }

    #[test]
    fn config_error_chains_source() {
        let e: WalkError = ConfigError::from(LatticeError::InvalidScale { value: -1.0 }).into();
        assert!(e.to_string().starts_with("invalid config: "));
        let source = e.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("lattice: grid scale must be finite and positive, got -1")
        );
    }
}
