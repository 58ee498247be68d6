//! Shared building blocks for linear binning
//!
//! This crate holds everything the binning strategies agree on: the error
//! type, input validation, grid handling, weight normalization, the
//! coordinate transform and configuration. The strategies themselves live in
//! `binning-linear`.
//!
//! # Example
//!
//! ```rust
//! use binning_core::{GridSpec, PreparedInput};
//!
//! let data = [1.0, 1.5, 2.8];
//! let input = PreparedInput::new(&data, &[1.0, 2.0, 3.0], None).unwrap();
//!
//! assert_eq!(input.grid().num_points(), 3);
//! assert_eq!(input.samples().count(), 3);
//! assert!(GridSpec::from_points(&[0.0, 1.0, 3.0]).is_err());
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod numeric;
pub mod transform;
pub mod weights;

// Re-export core types
pub use config::{BinningConfig, Strategy, STRATEGY_ENV_VAR};
pub use error::{Error, Result};
pub use grid::{GridSpec, GridTolerance, DEFAULT_GRID_ATOL, DEFAULT_GRID_RTOL};
pub use input::PreparedInput;
pub use numeric::BinFloat;
pub use transform::{BinnedSample, CoordinateTransform};
pub use weights::normalize_weights;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
