//! Linear binning strategies
//!
//! Linear binning spreads every sample's weight over its two neighbouring
//! grid points, in proportion to how close it lies to each. The resulting
//! mass vector is the usual input for convolution-based kernel density
//! estimation.
//!
//! Two interchangeable strategies implement [`LinearBinner`]:
//!
//! - [`VectorizedBinner`] sorts the samples by grid bucket and sums each run
//!   of equal buckets once.
//! - [`AcceleratedBinner`] makes a single pass and scatters each sample
//!   directly. Available when the `accelerated` feature is enabled.
//!
//! [`Binner`] picks one of them at construction time from a
//! [`BinningConfig`](binning_core::BinningConfig) and injected
//! [`Capabilities`].
//!
//! Both strategies normalize weights before binning, explicit weights
//! included, so the output sums to one whenever all samples fall inside the
//! grid range.
//!
//! # Example
//!
//! ```rust
//! use binning_linear::{AcceleratedBinner, LinearBinner, VectorizedBinner};
//!
//! let data: [f64; 6] = [1.0, 1.5, 1.5, 2.0, 2.8, 3.0];
//! let grid = [1.0, 2.0, 3.0];
//!
//! let sorted = VectorizedBinner::new().bin(&data, &grid, None).unwrap();
//! let looped = AcceleratedBinner::new().bin(&data, &grid, None).unwrap();
//!
//! for (a, b) in sorted.iter().zip(looped.iter()) {
//!     assert!((a - b).abs() < 1e-12);
//! }
//! assert!((sorted[1] - 0.36667).abs() < 1e-5);
//! ```

pub mod accelerated;
pub mod selector;
pub mod traits;
pub mod vectorized;

pub use accelerated::AcceleratedBinner;
pub use selector::{linear_binning, Binner, Capabilities};
pub use traits::LinearBinner;
pub use vectorized::VectorizedBinner;

pub use binning_core::Result;
