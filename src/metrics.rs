//! Clustering quality measures.
//!
//! # Inertia
//!
//! Within-cluster sum of squares, the objective Lloyd's algorithm decreases:
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! Plotting inertia against k and looking for the bend ("elbow") is the usual
//! way to choose k when it is not known in advance.
//!
//! # Example
//!
//! ```rust
//! use lloyd::{Kmeans, Matrix};
//! use lloyd::metrics::cluster_sizes;
//!
//! let points = Matrix::from_rows(&[vec![0.0], vec![2.0], vec![10.0]], "points").unwrap();
//! let init = Matrix::from_rows(&[vec![0.0], vec![10.0]], "centroids").unwrap();
//! let fit = Kmeans::new().fit(&points, init).unwrap();
//!
//! assert_eq!(cluster_sizes(&fit.labels, 2), vec![2, 1]);
//! assert!((fit.inertia(&points) - 2.0).abs() < 1e-12);
//! ```

use crate::distance::squared_euclidean;
use crate::matrix::Matrix;

/// Sum of squared distances from each point to its assigned centroid.
///
/// `labels[i]` is the cluster of `points.row(i)`. Labels that are out of range
/// for `centroids` are skipped.
pub fn inertia(points: &Matrix, centroids: &Matrix, labels: &[usize]) -> f64 {
    points
        .rows()
        .zip(labels)
        .filter(|(_, k)| **k < centroids.nrows())
        .map(|(p, &k)| squared_euclidean(p, centroids.row(k)))
        .sum()
}

/// Number of points carrying each label in `0..k`.
pub fn cluster_sizes(labels: &[usize], k: usize) -> Vec<usize> {
    let mut sizes = vec![0usize; k];
    for &l in labels {
        if let Some(s) = sizes.get_mut(l) {
            *s += 1;
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_inertia_zero_at_points() {
        let points = Matrix::from_array(array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(inertia(&points, &points, &[0, 1]), 0.0);
    }

    #[test]
    fn test_inertia_sums_squares() {
        let points = Matrix::from_array(array![[0.0, 0.0], [0.0, 2.0], [10.0, 0.0]]).unwrap();
        let centroids = Matrix::from_array(array![[0.0, 1.0], [10.0, 1.0]]).unwrap();
        // 1 + 1 + 1
        assert!((inertia(&points, &centroids, &[0, 0, 1]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_inertia_skips_out_of_range_labels() {
        let points = Matrix::from_array(array![[0.0], [5.0]]).unwrap();
        let centroids = Matrix::from_array(array![[1.0]]).unwrap();
        assert!((inertia(&points, &centroids, &[0, usize::MAX]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cluster_sizes() {
        assert_eq!(cluster_sizes(&[0, 2, 2, 1, 2], 3), vec![1, 1, 3]);
        assert_eq!(cluster_sizes(&[0, 5], 2), vec![1, 0]);
        assert_eq!(cluster_sizes(&[], 2), vec![0, 0]);
    }
}
