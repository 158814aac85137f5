//! Assignment step: each point goes to its nearest centroid.
//!
//! The scan keeps a running minimum and replaces it only on a strictly
//! smaller distance, so ties go to the lowest cluster index. The result is a
//! deterministic function of the centroid values and the point order.

use crate::distance::euclidean;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::membership::ClusterMembership;
use ndarray::ArrayView1;

/// Index of the nearest centroid to `point`, and its distance.
pub fn nearest(point: ArrayView1<'_, f64>, centroids: &Matrix) -> (usize, f64) {
    let mut best_cluster = 0;
    let mut best_dist = f64::INFINITY;
    for (k, centroid) in centroids.rows().enumerate() {
        let dist = euclidean(point, centroid);
        // The first centroid is always taken, even when its distance is NaN.
        if k == 0 || dist < best_dist {
            best_dist = dist;
            best_cluster = k;
        }
    }
    (best_cluster, best_dist)
}

/// Rebuild `membership` from scratch for the current `centroids`.
///
/// Previous contents are discarded. Centroids are not touched.
pub fn assign(
    points: &Matrix,
    centroids: &Matrix,
    membership: &mut ClusterMembership,
) -> Result<()> {
    if points.ncols() != centroids.ncols() {
        return Err(Error::DimensionMismatch {
            row: 0,
            expected: points.ncols(),
            found: centroids.ncols(),
        });
    }
    if membership.n_clusters() != centroids.nrows() {
        return Err(Error::InvalidClusterCount {
            requested: centroids.nrows(),
            n_items: membership.n_clusters(),
        });
    }

    membership.clear();
    for (v, point) in points.rows().enumerate() {
        let (k, _) = nearest(point, centroids);
        membership.push(k, v)?;
    }
    Ok(())
}
