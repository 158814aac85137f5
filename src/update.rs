//! Update step: move every centroid to the mean of its members.
//!
//! The previous centroids are snapshotted first so that movement can be
//! measured. The run has converged when every centroid moved strictly less
//! than epsilon.

use crate::config::{EmptyClusterPolicy, RunConfig};
use crate::distance::euclidean;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::membership::ClusterMembership;
use log::warn;

/// Result of one update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateOutcome {
    /// Every centroid moved strictly less than epsilon.
    pub converged: bool,
    /// Largest movement of any centroid. NaN movements are skipped.
    pub max_shift: f64,
}

/// Recompute `centroids` in place from `membership`.
///
/// `previous` receives a copy of the centroids as they were on entry.
/// `iteration` is only used to label [`Error::EmptyCluster`].
pub fn update(
    points: &Matrix,
    centroids: &mut Matrix,
    previous: &mut Matrix,
    membership: &ClusterMembership,
    config: &RunConfig,
    iteration: usize,
) -> Result<UpdateOutcome> {
    let k = centroids.nrows();
    if membership.n_clusters() != k {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: membership.n_clusters(),
        });
    }
    if points.ncols() != centroids.ncols() {
        return Err(Error::DimensionMismatch {
            row: 0,
            expected: points.ncols(),
            found: centroids.ncols(),
        });
    }

    // Checked before any centroid is touched, so an error leaves them intact.
    if let Some(cluster) = membership.first_empty() {
        match config.empty_clusters {
            EmptyClusterPolicy::Error => {
                return Err(Error::EmptyCluster { cluster, iteration });
            }
            EmptyClusterPolicy::Propagate => {
                warn!("cluster {cluster} is empty in iteration {iteration}; its centroid becomes NaN");
            }
        }
    }

    previous.copy_first_rows_from(centroids, k)?;

    for (c, members) in membership.iter() {
        let mut centroid = centroids.row_mut(c);
        centroid.fill(0.0);
        for &p in members {
            centroid += &points.row(p);
        }
        // 0 / 0 for an empty cluster under `Propagate`.
        centroid /= members.len() as f64;
    }

    let mut converged = true;
    let mut max_shift = 0.0f64;
    for c in 0..k {
        let shift = euclidean(previous.row(c), centroids.row(c));
        if shift >= config.epsilon {
            converged = false;
        }
        max_shift = max_shift.max(shift);
    }

    Ok(UpdateOutcome {
        converged,
        max_shift,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::assign;
    use ndarray::array;

    fn square() -> Matrix {
        Matrix::from_array(array![[0.0, 0.0], [0.0, 2.0], [10.0, 0.0], [10.0, 2.0]]).unwrap()
    }

    fn step(points: &Matrix, centroids: &mut Matrix, config: &RunConfig) -> Result<UpdateOutcome> {
        let mut previous = Matrix::zeros(centroids.nrows(), centroids.ncols())?;
        let mut m = ClusterMembership::new(centroids.nrows())?;
        assign(points, centroids, &mut m)?;
        update(points, centroids, &mut previous, &m, config, 0)
    }

    #[test]
    fn test_update_moves_to_means() {
        let points = square();
        let mut centroids = Matrix::from_array(array![[0.0, 0.0], [10.0, 0.0]]).unwrap();
        let config = RunConfig::new().with_epsilon(0.001);

        let out = step(&points, &mut centroids, &config).unwrap();
        assert_eq!(centroids.to_rows(), vec![vec![0.0, 1.0], vec![10.0, 1.0]]);
        assert!(!out.converged);
        assert!((out.max_shift - 1.0).abs() < 1e-12);

        let out = step(&points, &mut centroids, &config).unwrap();
        assert!(out.converged);
        assert_eq!(out.max_shift, 0.0);
    }

    #[test]
    fn test_snapshot_holds_previous_centroids() {
        let points = square();
        let mut centroids = Matrix::from_array(array![[0.0, 0.0], [10.0, 0.0]]).unwrap();
        let mut previous = Matrix::zeros(2, 2).unwrap();
        let mut m = ClusterMembership::new(2).unwrap();
        assign(&points, &centroids, &mut m).unwrap();
        update(&points, &mut centroids, &mut previous, &m, &RunConfig::new(), 0).unwrap();
        assert_eq!(previous.to_rows(), vec![vec![0.0, 0.0], vec![10.0, 0.0]]);
    }

    #[test]
    fn test_shift_equal_to_epsilon_is_not_converged() {
        let points = square();
        let mut centroids = Matrix::from_array(array![[0.0, 0.0], [10.0, 0.0]]).unwrap();
        // Both centroids move by exactly 1.0.
        let config = RunConfig::new().with_epsilon(1.0);
        let out = step(&points, &mut centroids, &config).unwrap();
        assert!(!out.converged);
    }

    #[test]
    fn test_zero_epsilon_never_converges_on_movement() {
        let points = Matrix::from_array(array![[1.0], [3.0]]).unwrap();
        let mut centroids = Matrix::from_array(array![[2.0]]).unwrap();
        let config = RunConfig::new().with_epsilon(0.0);
        // Already at the mean: zero movement is still not < 0.
        let out = step(&points, &mut centroids, &config).unwrap();
        assert!(!out.converged);
        assert_eq!(centroids[(0, 0)], 2.0);
    }

    #[test]
    fn test_empty_cluster_is_an_error() {
        let points = square();
        let original = Matrix::from_array(array![[5.0, 1.0], [100.0, 100.0]]).unwrap();
        let mut centroids = original.clone();
        let err = step(&points, &mut centroids, &RunConfig::new()).unwrap_err();
        assert_eq!(
            err,
            Error::EmptyCluster {
                cluster: 1,
                iteration: 0
            }
        );
        assert_eq!(centroids, original);
    }

    #[test]
    fn test_empty_cluster_propagates_nan() {
        let points = square();
        let mut centroids = Matrix::from_array(array![[5.0, 1.0], [100.0, 100.0]]).unwrap();
        let config = RunConfig::new().with_empty_clusters(EmptyClusterPolicy::Propagate);
        let out = step(&points, &mut centroids, &config).unwrap();
        assert!(centroids.row(1).iter().all(|v| v.is_nan()));
        assert_eq!(centroids.row(0).to_vec(), vec![5.0, 1.0]);
        // NaN movement never compares >= epsilon.
        assert!(out.converged);
    }
}
