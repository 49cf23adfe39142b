//! Walk configuration, validation, and error types.
//!
//! [`WalkConfig`] replaces the fixed constants of a one-off script with an
//! explicit value passed to the simulation entry points.
//! [`validate()`](WalkConfig::validate) checks every scalar before any
//! simulation state is created.

use std::error::Error;
use std::fmt;

use trixle_core::Vec3;
use trixle_lattice::LatticeError;

use crate::observer::Rounding;

/// Step count used by the planar walk when none is given.
pub const DEFAULT_STEPS_2D: u32 = 50;

/// Step count used by the spatial walk when none is given.
pub const DEFAULT_STEPS_3D: u32 = 100;

/// Largest step count accepted by default (2^24).
///
/// A spatial run records about 88 bytes per step (hidden point, observed
/// point, decision), so a run at this limit holds roughly 1.5 GB.
pub const DEFAULT_MAX_STEPS: u32 = 1 << 24;

// ── FrustrationNoise ───────────────────────────────────────────────

/// Distribution of the per-step frustration noise in the 3D scoring rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrustrationNoise {
    /// Zero-mean Gaussian per axis; `noise_std` is the standard deviation.
    #[default]
    Gaussian,
    /// Uniform on `[-noise_std, noise_std)` per axis.
    Uniform,
    /// No noise and no random draws.
    Off,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WalkConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The lattice could not be built from `grid_scale`.
    Lattice(LatticeError),
    /// `noise_std` is NaN, infinite, or negative.
    InvalidNoiseStd {
        /// The invalid value.
        value: f64,
    },
    /// `noise_scale` is NaN, infinite, or negative.
    InvalidNoiseScale {
        /// The invalid value.
        value: f64,
    },
    /// The 3D target direction is zero or not finite.
    InvalidTarget {
        /// The invalid direction.
        target: Vec3,
    },
    /// `max_steps` is zero, so no run could ever be accepted.
    StepLimitZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::InvalidNoiseStd { value } => {
                write!(f, "noise_std must be finite and >= 0, got {value}")
            }
            Self::InvalidNoiseScale { value } => {
                write!(f, "noise_scale must be finite and >= 0, got {value}")
            }
            Self::InvalidTarget { target } => {
                write!(f, "target direction must be finite and non-zero, got {target:?}")
            }
            Self::StepLimitZero => write!(f, "max_steps must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

// ── WalkConfig ─────────────────────────────────────────────────────

/// Configuration for a planar or spatial walk.
///
/// The 2D walk reads `steps`, `grid_scale`, `rounding`, and `max_steps`.
/// The 3D walk reads all fields.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkConfig {
    /// Number of steps to take. Default: 50.
    pub steps: u32,
    /// Multiplier applied to every lattice move. Default: 1.0.
    pub grid_scale: f64,
    /// Distribution family of the 3D frustration noise. Default: Gaussian.
    pub noise: FrustrationNoise,
    /// Spread of the 3D frustration noise. Default: 0.1.
    pub noise_std: f64,
    /// Factor applied to each noise draw before scoring. Default: 0.05.
    pub noise_scale: f64,
    /// Intended direction of net travel for the 3D walk. Default: +x.
    /// Normalized to unit length before use.
    pub target: Vec3,
    /// Tie rule of the observer. Default: half away from zero.
    pub rounding: Rounding,
    /// Largest accepted step count. Default: 2^24.
    pub max_steps: u32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS_2D,
            grid_scale: 1.0,
            noise: FrustrationNoise::Gaussian,
            noise_std: 0.1,
            noise_scale: 0.05,
            target: Vec3::X,
            rounding: Rounding::HalfAwayFromZero,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl WalkConfig {
    /// Defaults for the planar walk (50 steps).
    pub fn planar() -> Self {
        Self::default()
    }

    /// Defaults for the spatial walk (100 steps).
    pub fn spatial() -> Self {
        Self {
            steps: DEFAULT_STEPS_3D,
            ..Self::default()
        }
    }

    /// The same configuration with a different step count.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Validate every scalar parameter.
    ///
    /// The step count itself is checked when a run starts, against
    /// `max_steps`, and reported as
    /// [`WalkError::InvalidStepCount`](crate::WalkError::InvalidStepCount).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grid_scale.is_finite() || self.grid_scale <= 0.0 {
            return Err(LatticeError::InvalidScale {
                value: self.grid_scale,
            }
            .into());
        }
        check_noise(self.noise_std, self.noise_scale)?;
        self.unit_target()?;
        if self.max_steps == 0 {
            return Err(ConfigError::StepLimitZero);
        }
        Ok(())
    }

    /// The target direction scaled to unit length.
    pub fn unit_target(&self) -> Result<Vec3, ConfigError> {
        unit_direction(self.target)
    }
}

/// Both noise parameters must be finite and non-negative.
pub(crate) fn check_noise(noise_std: f64, noise_scale: f64) -> Result<(), ConfigError> {
    if !noise_std.is_finite() || noise_std < 0.0 {
        return Err(ConfigError::InvalidNoiseStd { value: noise_std });
    }
    if !noise_scale.is_finite() || noise_scale < 0.0 {
        return Err(ConfigError::InvalidNoiseScale { value: noise_scale });
    }
    Ok(())
}

pub(crate) fn unit_direction(target: Vec3) -> Result<Vec3, ConfigError> {
    target
        .normalized()
        .ok_or(ConfigError::InvalidTarget { target })
}
