//! Per-cluster point index lists.
//!
//! One growable `Vec<usize>` per cluster. The table is rebuilt every
//! iteration by [`ClusterMembership::clear`] followed by appends; clearing
//! keeps each list's capacity, so after the first pass the rebuild normally
//! allocates nothing.

use crate::error::{Error, Result};

/// For each of `k` clusters, the ordered indices of the points assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterMembership {
    clusters: Vec<Vec<usize>>,
}

impl ClusterMembership {
    /// `k` empty clusters.
    pub fn new(k: usize) -> Result<Self> {
        let mut clusters = Vec::new();
        clusters
            .try_reserve_exact(k)
            .map_err(|_| Error::Allocation { rows: k, cols: 0 })?;
        clusters.resize_with(k, Vec::new);
        Ok(Self { clusters })
    }

    /// Number of clusters.
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Empty every cluster, keeping the allocations.
    pub fn clear(&mut self) {
        for c in &mut self.clusters {
            c.clear();
        }
    }

    /// Append `point` to the end of `cluster`'s list.
    ///
    /// # Panics
    ///
    /// If `cluster >= n_clusters()`.
    pub fn push(&mut self, cluster: usize, point: usize) -> Result<()> {
        let list = &mut self.clusters[cluster];
        list.try_reserve(1).map_err(|_| Error::Allocation {
            rows: 1,
            cols: list.len() + 1,
        })?;
        list.push(point);
        Ok(())
    }

    /// Number of points in `cluster`.
    pub fn len(&self, cluster: usize) -> usize {
        self.clusters[cluster].len()
    }

    /// Point indices of `cluster`, in insertion order.
    pub fn members(&self, cluster: usize) -> &[usize] {
        &self.clusters[cluster]
    }

    /// Total number of points across all clusters.
    pub fn total(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }

    /// `(cluster, members)` pairs in cluster order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.clusters.iter().map(Vec::as_slice).enumerate()
    }

    /// Lowest-indexed cluster with no members, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.clusters.iter().position(Vec::is_empty)
    }

    /// True if the lists partition `0..n`: every index appears exactly once.
    pub fn is_partition(&self, n: usize) -> bool {
        if self.total() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for (_, members) in self.iter() {
            for &p in members {
                if p >= n || seen[p] {
                    return false;
                }
                seen[p] = true;
            }
        }
        true
    }

    /// Per-point cluster labels for `n` points.
    ///
    /// Points absent from every list keep label `usize::MAX`; after a full
    /// assignment pass there are none.
    pub fn labels(&self, n: usize) -> Vec<usize> {
        let mut labels = vec![usize::MAX; n];
        for (k, members) in self.iter() {
            for &p in members {
                if p < n {
                    labels[p] = k;
                }
            }
        }
        labels
    }
}
