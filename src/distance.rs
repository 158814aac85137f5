//! Euclidean distance between two rows.
//!
//! Both views must have the same, non-zero length. The engine fixes the
//! dimension once per run, so the check is only a debug assertion.

use ndarray::ArrayView1;

/// Squared Euclidean distance.
#[inline]
pub fn squared_euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| (y - x).powi(2)).sum()
}

/// Euclidean distance: square root of the summed squared differences.
#[inline]
pub fn euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    squared_euclidean(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_euclidean_pythagorean() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        assert!((euclidean(a.view(), b.view()) - 5.0).abs() < 1e-12);
        assert!((squared_euclidean(a.view(), b.view()) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_symmetric_and_zero_on_self() {
        let a = array![1.5, -2.0, 7.25];
        let b = array![-0.5, 4.0, 1.0];
        assert_eq!(euclidean(a.view(), b.view()), euclidean(b.view(), a.view()));
        assert_eq!(euclidean(a.view(), a.view()), 0.0);
    }

    #[test]
    fn test_euclidean_single_dimension() {
        let a = array![-2.0];
        let b = array![3.0];
        assert!((euclidean(a.view(), b.view()) - 5.0).abs() < 1e-12);
    }
}
