use core::fmt;

/// Result alias for `lloyd`.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`].
///
/// Every error is fatal to the run that raised it; the kind only says which
/// stage gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, detected before the main loop starts.
    Shape,
    /// A matrix or membership buffer could not be allocated.
    Allocation,
    /// A cluster received no points, so its mean is undefined.
    EmptyCluster,
}

/// Errors returned by the clustering engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput {
        /// Which input was empty ("points", "centroids", ...).
        what: &'static str,
    },

    /// A row had a different length than the first row.
    DimensionMismatch {
        /// Offending row.
        row: usize,
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of points.
        n_items: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Memory for a `rows x cols` buffer could not be reserved.
    Allocation {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Cluster `cluster` captured zero points during `iteration`.
    EmptyCluster {
        /// Cluster index.
        cluster: usize,
        /// Zero-based iteration in which it happened.
        iteration: usize,
    },
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput { .. }
            | Error::DimensionMismatch { .. }
            | Error::InvalidClusterCount { .. }
            | Error::InvalidParameter { .. } => ErrorKind::Shape,
            Error::Allocation { .. } => ErrorKind::Allocation,
            Error::EmptyCluster { .. } => ErrorKind::EmptyCluster,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput { what } => write!(f, "empty input provided: no {what}"),
            Error::DimensionMismatch {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "dimension mismatch at row {row}: expected {expected}, found {found}"
                )
            }
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} items")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::Allocation { rows, cols } => {
                write!(f, "failed to allocate a {rows}x{cols} buffer")
            }
            Error::EmptyCluster { cluster, iteration } => {
                write!(
                    f,
                    "cluster {cluster} received no points in iteration {iteration}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_taxonomy() {
        assert_eq!(Error::EmptyInput { what: "points" }.kind(), ErrorKind::Shape);
        assert_eq!(
            Error::DimensionMismatch {
                row: 1,
                expected: 2,
                found: 3
            }
            .kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            Error::Allocation { rows: 1, cols: 1 }.kind(),
            ErrorKind::Allocation
        );
        assert_eq!(
            Error::EmptyCluster {
                cluster: 0,
                iteration: 0
            }
            .kind(),
            ErrorKind::EmptyCluster
        );
    }

    #[test]
    fn test_display_mentions_fields() {
        let s = Error::EmptyCluster {
            cluster: 3,
            iteration: 7,
        }
        .to_string();
        assert!(s.contains("cluster 3"));
        assert!(s.contains("iteration 7"));

        let s = Error::InvalidClusterCount {
            requested: 5,
            n_items: 2,
        }
        .to_string();
        assert_eq!(s, "cannot create 5 clusters from 2 items");
    }
}
