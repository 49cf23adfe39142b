//! Argument parsing for the `walk_table` demo.
//!
//! Both arguments are positional and optional: `[STEPS] [SEED]`. A value
//! that is present but does not parse is an error, never a silent
//! fallback to the default.

use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Parsed `walk_table` arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableArgs {
    /// Step count for both walks, or `None` to keep each profile's default.
    pub steps: Option<u32>,
    /// Seed for both walks.
    pub seed: u64,
}

/// A positional argument that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgError {
    /// STEPS is not a `u32`.
    InvalidSteps {
        /// The argument as given.
        value: String,
        /// Why it failed to parse.
        source: ParseIntError,
    },
    /// SEED is not a `u64`.
    InvalidSeed {
        /// The argument as given.
        value: String,
        /// Why it failed to parse.
        source: ParseIntError,
    },
    /// More than two positional arguments.
    Unexpected {
        /// The first extra argument.
        value: String,
    },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSteps { value, source } => {
                write!(f, "invalid STEPS {value:?}: {source}")
            }
            Self::InvalidSeed { value, source } => {
                write!(f, "invalid SEED {value:?}: {source}")
            }
            Self::Unexpected { value } => {
                write!(f, "unexpected argument {value:?} (usage: [STEPS] [SEED])")
            }
        }
    }
}

impl Error for ArgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSteps { source, .. } | Self::InvalidSeed { source, .. } => Some(source),
            Self::Unexpected { .. } => None,
        }
    }
}

/// Parse `[STEPS] [SEED]` from the arguments after the program name.
pub fn parse_table_args<I>(args: I) -> Result<TableArgs, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let steps = match args.next() {
        Some(value) => Some(
            value
                .parse::<u32>()
                .map_err(|source| ArgError::InvalidSteps { value, source })?,
        ),
        None => None,
    };
    let seed = match args.next() {
        Some(value) => value
            .parse::<u64>()
            .map_err(|source| ArgError::InvalidSeed { value, source })?,
        None => DEFAULT_SEED,
    };
    if let Some(value) = args.next() {
        return Err(ArgError::Unexpected { value });
    }
    Ok(TableArgs { steps, seed })
}
