//! Lloyd's k-means from caller-supplied centroids.
//!
//! # Lloyd's Algorithm
//!
//! 1. **Assign**: each point goes to its nearest centroid ([`crate::assign`])
//! 2. **Update**: each centroid moves to the mean of its points ([`crate::update`])
//! 3. Repeat until every centroid moved less than epsilon, or the iteration
//!    budget runs out
//!
//! There is no initialisation here: the starting centroids are an input.
//!
//! # Termination
//!
//! The driver starts out running. After each pass it stops as
//! [`Termination::Converged`] if the update step reports convergence, or as
//! [`Termination::Exhausted`] once `max_iter` passes have run. Both terminal states return
//! the current centroids. Running out of iterations is not an error.
//!
//! # Failure Modes
//!
//! - **Malformed input**: empty or ragged matrices, more centroids than points,
//!   bad parameters. Rejected before the loop starts.
//! - **Allocation**: the snapshot or membership buffers could not be reserved.
//! - **Empty cluster**: a centroid captured no points, so its mean is
//!   undefined. Fatal unless [`EmptyClusterPolicy::Propagate`] is selected.
//!
//! Every error aborts the run; scratch buffers are released on the way out.

use crate::assign::assign;
use crate::config::{EmptyClusterPolicy, RunConfig, RunShape};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::membership::ClusterMembership;
use crate::metrics;
use crate::update::update;
use log::{debug, trace};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every centroid moved less than epsilon in the last pass.
    Converged,
    /// `max_iter` passes ran without converging.
    Exhausted,
}

/// Outcome of a clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    /// Final centroids, same shape as the initial ones.
    pub centroids: Matrix,
    /// Cluster of each point from the last assignment pass.
    pub labels: Vec<usize>,
    /// Number of assign/update passes that ran.
    pub iterations: usize,
    /// Terminal state.
    pub termination: Termination,
    /// Largest centroid movement in the last pass.
    pub max_shift: f64,
}

impl Fit {
    /// True if the run converged rather than running out of iterations.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Within-cluster sum of squared distances for `points`.
    pub fn inertia(&self, points: &Matrix) -> f64 {
        metrics::inertia(points, &self.centroids, &self.labels)
    }
}

/// K-means driver.
#[derive(Debug, Clone, Default)]
pub struct Kmeans {
    config: RunConfig,
}

impl Kmeans {
    /// Create a driver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver from an explicit configuration.
    pub fn with_config(config: RunConfig) -> Self {
        Self { config }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iter = max_iter;
        self
    }

    /// Set the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Set the empty-cluster policy.
    pub fn with_empty_clusters(mut self, policy: EmptyClusterPolicy) -> Self {
        self.config.empty_clusters = policy;
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run to a terminal state, starting from `centroids`.
    ///
    /// `points` is only read. `centroids` is updated in place and handed back
    /// in [`Fit::centroids`].
    pub fn fit(&self, points: &Matrix, mut centroids: Matrix) -> Result<Fit> {
        self.config.validate()?;
        let shape = self.shape(points, &centroids)?;
        debug!(
            "k-means start: n={} k={} d={} max_iter={} epsilon={}",
            shape.n_points, shape.n_clusters, shape.dim, self.config.max_iter, self.config.epsilon
        );

        let mut previous = Matrix::zeros(shape.n_clusters, shape.dim)?;
        let mut membership = ClusterMembership::new(shape.n_clusters)?;

        let mut iterations = 0;
        let mut max_shift;
        let termination = loop {
            assign(points, &centroids, &mut membership)?;
            let outcome = update(
                points,
                &mut centroids,
                &mut previous,
                &membership,
                &self.config,
                iterations,
            )?;
            iterations += 1;
            max_shift = outcome.max_shift;
            trace!("iteration {iterations}: max centroid shift {max_shift}");

            if outcome.converged {
                break Termination::Converged;
            }
            if iterations == self.config.max_iter {
                break Termination::Exhausted;
            }
        };
        debug!("k-means {termination:?} after {iterations} iterations (max shift {max_shift})");

        Ok(Fit {
            labels: membership.labels(shape.n_points),
            centroids,
            iterations,
            termination,
            max_shift,
        })
    }

    fn shape(&self, points: &Matrix, centroids: &Matrix) -> Result<RunShape> {
        let (n, d) = points.shape();
        let k = centroids.nrows();
        if centroids.ncols() != d {
            return Err(Error::DimensionMismatch {
                row: 0,
                expected: d,
                found: centroids.ncols(),
            });
        }
        if k > n {
            return Err(Error::InvalidClusterCount {
                requested: k,
                n_items: n,
            });
        }
        Ok(RunShape {
            n_points: n,
            n_clusters: k,
            dim: d,
        })
    }
}

/// Cluster nested-vector input and return the final centroids.
///
/// All rows of `points` and `centroids` must share one positive length, and
/// there must be at least one centroid and no more centroids than points.
pub fn fit_rows(
    points: &[Vec<f64>],
    centroids: &[Vec<f64>],
    max_iter: usize,
    epsilon: f64,
) -> Result<Vec<Vec<f64>>> {
    if points.is_empty() {
        return Err(Error::EmptyInput { what: "points" });
    }
    if centroids.is_empty() {
        return Err(Error::EmptyInput { what: "centroids" });
    }
    let kmeans = Kmeans::new().with_max_iter(max_iter).with_epsilon(epsilon);
    kmeans.config.validate()?;

    let points = Matrix::from_rows(points, "points")?;
    let centroids = Matrix::from_rows(centroids, "centroids")?;
    let fit = kmeans.fit(&points, centroids)?;
    Ok(fit.centroids.to_rows())
}
