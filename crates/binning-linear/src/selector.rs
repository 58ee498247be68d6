//! Strategy selection
//!
//! The active strategy is resolved once, when a [`Binner`] is constructed,
//! from an explicit [`BinningConfig`] and an injected [`Capabilities`] value.
//! Nothing is probed at call time, so the same binner always runs the same
//! code.

use crate::accelerated::AcceleratedBinner;
use crate::traits::LinearBinner;
use crate::vectorized::VectorizedBinner;
use binning_core::{BinFloat, BinningConfig, Error, GridTolerance, PreparedInput, Result, Strategy};
use tracing::{debug, instrument};

/// What the current deployment can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether the accelerated strategy may be used
    pub accelerated: bool,
}

impl Capabilities {
    /// Capabilities of this build
    pub fn detect() -> Self {
        Self {
            accelerated: AcceleratedBinner::is_available(),
        }
    }

    /// Only the vectorized strategy is usable
    pub fn vectorized_only() -> Self {
        Self { accelerated: false }
    }

    /// Every strategy is usable
    pub fn all() -> Self {
        Self { accelerated: true }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

#[derive(Debug, Clone, Copy)]
enum ActiveBinner {
    Vectorized(VectorizedBinner),
    Accelerated(AcceleratedBinner),
}

/// Linear binner that delegates to the strategy chosen at construction
#[derive(Debug, Clone)]
pub struct Binner {
    active: ActiveBinner,
    config: BinningConfig,
}

impl Binner {
    /// Resolve the configured strategy against the given capabilities
    ///
    /// `Auto` picks the accelerated strategy when it is available. An explicit
    /// `Accelerated` request that cannot be met fails instead of falling back.
    pub fn new(config: BinningConfig, capabilities: Capabilities) -> Result<Self> {
        config.validate()?;

        let resolved = match config.strategy {
            Strategy::Vectorized => Strategy::Vectorized,
            Strategy::Accelerated if capabilities.accelerated => Strategy::Accelerated,
            Strategy::Accelerated => {
                return Err(Error::FeatureNotAvailable(
                    "accelerated binning is not available in this build".to_string(),
                ))
            }
            Strategy::Auto if capabilities.accelerated => Strategy::Accelerated,
            Strategy::Auto => Strategy::Vectorized,
        };

        debug!(
            requested = %config.strategy,
            resolved = %resolved,
            "binning strategy selected"
        );

        Ok(Self::resolved(resolved, config))
    }

    /// Binner with default configuration and detected capabilities
    pub fn auto() -> Self {
        let strategy = if Capabilities::detect().accelerated {
            Strategy::Accelerated
        } else {
            Strategy::Vectorized
        };
        Self::resolved(strategy, BinningConfig::default())
    }

    /// Binner configured from the `KDE_BINNING_STRATEGY` environment variable
    pub fn from_env() -> Result<Self> {
        Self::new(BinningConfig::from_env()?, Capabilities::detect())
    }

    /// Always use the vectorized strategy
    pub fn vectorized() -> Self {
        Self::resolved(Strategy::Vectorized, BinningConfig::default())
    }

    fn resolved(strategy: Strategy, config: BinningConfig) -> Self {
        let tolerance = config.grid_tolerance();
        let active = match strategy {
            Strategy::Accelerated => {
                ActiveBinner::Accelerated(AcceleratedBinner::with_tolerance(tolerance))
            }
            _ => ActiveBinner::Vectorized(VectorizedBinner::with_tolerance(tolerance)),
        };
        Self { active, config }
    }

    /// The strategy actually in use (never `Auto`)
    pub fn active_strategy(&self) -> Strategy {
        match self.active {
            ActiveBinner::Vectorized(_) => Strategy::Vectorized,
            ActiveBinner::Accelerated(_) => Strategy::Accelerated,
        }
    }

    /// The configuration this binner was built from
    pub fn config(&self) -> &BinningConfig {
        &self.config
    }

    /// Linear binning of `data` onto `grid_points`
    ///
    /// Returns one mass value per grid point. Samples outside the grid range
    /// contribute nothing.
    #[instrument(skip_all, fields(n = data.len(), m = grid_points.len(), strategy = %self.active_strategy()))]
    pub fn bin<T: BinFloat>(
        &self,
        data: &[T],
        grid_points: &[T],
        weights: Option<&[T]>,
    ) -> Result<Vec<T>> {
        LinearBinner::bin(self, data, grid_points, weights)
    }
}

impl Default for Binner {
    fn default() -> Self {
        Self::auto()
    }
}

impl<T: BinFloat> LinearBinner<T> for Binner {
    fn name(&self) -> &'static str {
        match &self.active {
            ActiveBinner::Vectorized(b) => LinearBinner::<T>::name(b),
            ActiveBinner::Accelerated(b) => LinearBinner::<T>::name(b),
        }
    }

    fn strategy(&self) -> Strategy {
        self.active_strategy()
    }

    fn tolerance(&self) -> GridTolerance {
        self.config.grid_tolerance()
    }

    fn bin_prepared(&self, input: &PreparedInput<'_, T>) -> Vec<T> {
        match &self.active {
            ActiveBinner::Vectorized(b) => b.bin_prepared(input),
            ActiveBinner::Accelerated(b) => b.bin_prepared(input),
        }
    }
}

/// Linear binning with the best strategy this build offers
///
/// Weights, when given, are used as-is.
pub fn linear_binning<T: BinFloat>(
    data: &[T],
    grid_points: &[T],
    weights: Option<&[T]>,
) -> Result<Vec<T>> {
    Binner::auto().bin(data, grid_points, weights)
}
