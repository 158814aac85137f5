//! Owned, fixed-shape dense matrix.
//!
//! Rows are vectors (points or centroids), columns are coordinates. Storage is
//! a single contiguous `ndarray::Array2<f64>`; dropping the matrix releases it
//! in one piece, so there is no partially-allocated state to clean up.
//!
//! Allocation goes through `Vec::try_reserve_exact`: running out of memory is
//! reported as [`Error::Allocation`] rather than aborting the process.

use crate::error::{Error, Result};
use ndarray::{s, Array2, ArrayView1, ArrayView2, ArrayViewMut1};
use std::fmt::Write as _;
use std::ops::{Index, IndexMut};

/// A `rows x cols` grid of `f64`.
///
/// Both dimensions are always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

/// Reserve an `f64` buffer of exactly `rows * cols` elements.
fn reserve(rows: usize, cols: usize) -> Result<Vec<f64>> {
    let len = rows
        .checked_mul(cols)
        .ok_or(Error::Allocation { rows, cols })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::Allocation { rows, cols })?;
    Ok(buf)
}

impl Matrix {
    /// Allocate a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidParameter {
                name: "shape",
                message: "rows and cols must be positive",
            });
        }
        let mut buf = reserve(rows, cols)?;
        buf.resize(rows * cols, 0.0);
        let data =
            Array2::from_shape_vec((rows, cols), buf).map_err(|_| Error::Allocation { rows, cols })?;
        Ok(Self { data })
    }

    /// Build from nested rows, checking that the input is non-empty and
    /// rectangular.
    ///
    /// `what` names the input in [`Error::EmptyInput`] ("points", "centroids").
    pub fn from_rows(rows: &[Vec<f64>], what: &'static str) -> Result<Self> {
        let first = rows.first().ok_or(Error::EmptyInput { what })?;
        let d = first.len();
        if d == 0 {
            return Err(Error::InvalidParameter {
                name: "dim",
                message: "vectors must have at least one component",
            });
        }
        for (row, v) in rows.iter().enumerate() {
            if v.len() != d {
                return Err(Error::DimensionMismatch {
                    row,
                    expected: d,
                    found: v.len(),
                });
            }
        }

        let n = rows.len();
        let mut flat = reserve(n, d)?;
        for v in rows {
            flat.extend_from_slice(v);
        }
        let data =
            Array2::from_shape_vec((n, d), flat).map_err(|_| Error::Allocation { rows: n, cols: d })?;
        Ok(Self { data })
    }

    /// Wrap an existing array. Fails if either dimension is zero.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        if data.nrows() == 0 {
            return Err(Error::EmptyInput { what: "rows" });
        }
        if data.ncols() == 0 {
            return Err(Error::InvalidParameter {
                name: "dim",
                message: "vectors must have at least one component",
            });
        }
        Ok(Self { data })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Row `i`.
    ///
    /// # Panics
    ///
    /// If `i >= nrows()`.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    /// Mutable row `i`.
    ///
    /// # Panics
    ///
    /// If `i >= nrows()`.
    pub fn row_mut(&mut self, i: usize) -> ArrayViewMut1<'_, f64> {
        self.data.row_mut(i)
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> + '_ {
        self.data.rows().into_iter()
    }

    /// Borrow the underlying array.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Unwrap into the underlying array.
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Overwrite the first `k` rows of `self` with the first `k` rows of `src`.
    ///
    /// Both matrices need at least `k` rows and the same column count.
    pub fn copy_first_rows_from(&mut self, src: &Matrix, k: usize) -> Result<()> {
        if src.ncols() != self.ncols() {
            return Err(Error::DimensionMismatch {
                row: 0,
                expected: self.ncols(),
                found: src.ncols(),
            });
        }
        if k > self.nrows() || k > src.nrows() {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "cannot copy more rows than either matrix holds",
            });
        }
        self.data
            .slice_mut(s![..k, ..])
            .assign(&src.data.slice(s![..k, ..]));
        Ok(())
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Render one line per row, values comma-separated with `precision`
    /// decimals.
    pub fn format_rows(&self, precision: usize) -> String {
        let mut out = String::new();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                // Writing to a String cannot fail.
                let _ = write!(out, "{v:.precision$}");
            }
        }
        out
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.data[[r, c]]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        &mut self.data[[r, c]]
    }
}
