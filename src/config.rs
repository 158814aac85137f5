//! Run configuration.

use crate::error::{Error, Result};

/// Default iteration budget.
pub const DEFAULT_MAX_ITER: usize = 300;

/// Default convergence threshold on centroid movement.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// What to do when a cluster captures no points.
///
/// The mean of an empty cluster is undefined. By default this stops the run;
/// `Propagate` reproduces the legacy behaviour of dividing by zero, leaving
/// NaN coordinates in that centroid for the rest of the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyClusterPolicy {
    /// Abort with [`Error::EmptyCluster`].
    #[default]
    Error,
    /// Divide by zero anyway and keep going.
    Propagate,
}

/// Parameters of one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Maximum number of assign/update passes. At least 1.
    pub max_iter: usize,
    /// A run converges once every centroid moved strictly less than this.
    pub epsilon: f64,
    /// Handling of clusters that capture no points.
    pub empty_clusters: EmptyClusterPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            epsilon: DEFAULT_EPSILON,
            empty_clusters: EmptyClusterPolicy::Error,
        }
    }
}

impl RunConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the empty-cluster policy.
    pub fn with_empty_clusters(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_clusters = policy;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be finite and non-negative",
            });
        }
        Ok(())
    }
}

/// Sizes fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunShape {
    /// N, number of points.
    pub n_points: usize,
    /// K, number of clusters.
    pub n_clusters: usize,
    /// d, dimension of every vector.
    pub dim: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = RunConfig::default();
        assert_eq!(c.max_iter, 300);
        assert_eq!(c.empty_clusters, EmptyClusterPolicy::Error);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = RunConfig::new()
            .with_max_iter(10)
            .with_epsilon(0.0)
            .with_empty_clusters(EmptyClusterPolicy::Propagate);
        assert_eq!(c.max_iter, 10);
        assert_eq!(c.epsilon, 0.0);
        assert_eq!(c.empty_clusters, EmptyClusterPolicy::Propagate);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(RunConfig::new().with_max_iter(0).validate().is_err());
        assert!(RunConfig::new().with_epsilon(-1e-3).validate().is_err());
        assert!(RunConfig::new().with_epsilon(f64::NAN).validate().is_err());
        assert!(RunConfig::new()
            .with_epsilon(f64::INFINITY)
            .validate()
            .is_err());
    }
}
