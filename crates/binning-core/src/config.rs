//! Configuration for binning strategy selection

use crate::error::{Error, Result};
use crate::grid::{GridTolerance, DEFAULT_GRID_ATOL, DEFAULT_GRID_RTOL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`BinningConfig::from_env`]
pub const STRATEGY_ENV_VAR: &str = "KDE_BINNING_STRATEGY";

/// Which binning implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sort-based bulk aggregation
    Vectorized,
    /// Single pass per-sample loop
    Accelerated,
    /// Accelerated when available, vectorized otherwise
    #[default]
    Auto,
}

impl Strategy {
    /// Get the name of this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vectorized => "vectorized",
            Self::Accelerated => "accelerated",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vectorized" => Ok(Self::Vectorized),
            "accelerated" => Ok(Self::Accelerated),
            "auto" => Ok(Self::Auto),
            other => Err(Error::InvalidConfig(format!(
                "unknown strategy '{other}', expected one of vectorized, accelerated, auto"
            ))),
        }
    }
}

/// Settings for a binner
///
/// Missing fields take their defaults when deserializing, so
/// `{"strategy": "vectorized"}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningConfig {
    /// Requested strategy
    pub strategy: Strategy,
    /// Relative tolerance for the equidistant-grid check
    pub grid_rtol: f64,
    /// Absolute tolerance for the equidistant-grid check
    pub grid_atol: f64,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            grid_rtol: DEFAULT_GRID_RTOL,
            grid_atol: DEFAULT_GRID_ATOL,
        }
    }
}

impl BinningConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the grid tolerances
    pub fn with_grid_tolerance(mut self, rtol: f64, atol: f64) -> Self {
        self.grid_rtol = rtol;
        self.grid_atol = atol;
        self
    }

    /// Grid tolerance as used by the validator
    pub fn grid_tolerance(&self) -> GridTolerance {
        GridTolerance::new(self.grid_rtol, self.grid_atol)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        self.grid_tolerance().validate()
    }

    /// Default configuration with the strategy taken from `KDE_BINNING_STRATEGY`
    ///
    /// An unset variable keeps [`Strategy::Auto`]; an unrecognized value is an
    /// error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(STRATEGY_ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self> {
        let config = Self::default();
        match value {
            Some(value) if !value.trim().is_empty() => Ok(config.with_strategy(value.parse()?)),
            _ => Ok(config),
        }
    }
}
