//! # lloyd
//!
//! Lloyd's k-means over a fixed point set, starting from centroids the caller
//! supplies. Each pass assigns every point to its nearest centroid (Euclidean
//! distance) and moves every centroid to the mean of its points, until all
//! centroids move less than epsilon or the iteration budget runs out.
//!
//! ```rust
//! use lloyd::{Kmeans, Matrix};
//!
//! let points = Matrix::from_rows(
//!     &[vec![0.0, 0.0], vec![0.0, 2.0], vec![10.0, 0.0], vec![10.0, 2.0]],
//!     "points",
//! )
//! .unwrap();
//! let init = Matrix::from_rows(&[vec![0.0, 0.0], vec![10.0, 0.0]], "centroids").unwrap();
//!
//! let fit = Kmeans::new()
//!     .with_max_iter(10)
//!     .with_epsilon(0.001)
//!     .fit(&points, init)
//!     .unwrap();
//!
//! assert!(fit.converged());
//! assert_eq!(fit.labels, vec![0, 0, 1, 1]);
//! assert_eq!(fit.centroids.to_rows(), vec![vec![0.0, 1.0], vec![10.0, 1.0]]);
//! ```
//!
//! Logging goes through the `log` facade; install any logger to see run
//! summaries (`debug`) and per-iteration shifts (`trace`).

pub mod assign;
pub mod config;
pub mod distance;
/// Error types used across `lloyd`.
pub mod error;
pub mod kmeans;
pub mod matrix;
pub mod membership;
pub mod metrics;
pub mod update;


pub use config::{EmptyClusterPolicy, RunConfig, RunShape};
pub use error::{Error, ErrorKind, Result};
pub use kmeans::{fit_rows, Fit, Kmeans, Termination};
pub use matrix::Matrix;
pub use membership::ClusterMembership;
pub use metrics::{cluster_sizes, inertia};
