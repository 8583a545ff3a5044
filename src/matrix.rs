//! Owned column-major matrices.
//!
//! [`DynMatrix`] stores its elements in the layout LAPACK expects and lends
//! them out as [`MatRef`]/[`MatMut`] views, so it can be passed straight to
//! the [`Lapack`](crate::Lapack) facade.

use core::ops::{Index, IndexMut, Mul};

use crate::error::Result;
use crate::traits::Element;
use crate::view::{MatMut, MatRef};

/// Dynamically-sized heap-allocated matrix.
///
/// Column-major `Vec<T>` storage with `ld == nrows`.
///
/// # Examples
///
/// ```
/// use numeris_lapack::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
///
/// let b = DynMatrix::eye(3, 0.0_f64);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Element> DynMatrix<T> {
    /// Create an `nrows x ncols` zero matrix.
    ///
    /// The `_zero` parameter is only used for type inference.
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create a matrix filled with `value`.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// The `_zero` parameter is only used for type inference.
    pub fn eye(n: usize, _zero: T) -> Self {
        let mut m = Self::zeros(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in column-major order.
    ///
    /// Panics if `slice.len() != nrows * ncols`.
    ///
    /// ```
    /// use numeris_lapack::DynMatrix;
    /// // Column-major: col0=[1,3], col1=[2,4]
    /// let m = DynMatrix::from_slice(2, 2, &[1.0, 3.0, 2.0, 4.0]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// ```
    pub fn from_slice(nrows: usize, ncols: usize, slice: &[T]) -> Self {
        Self::from_vec(nrows, ncols, slice.to_vec())
    }

    /// Create a matrix from an owned `Vec<T>` in column-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Transposes the data to column-major internal storage.
    ///
    /// ```
    /// use numeris_lapack::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self::from_fn(nrows, ncols, |i, j| row_major[i * ncols + j])
    }

    /// Conjugate transpose (plain transpose for real elements).
    ///
    /// ```
    /// use num_complex::Complex;
    /// use numeris_lapack::DynMatrix;
    ///
    /// let m = DynMatrix::from_rows(1, 2, &[Complex::new(1.0, 2.0), Complex::new(3.0, -1.0)]);
    /// let h = m.adjoint();
    /// assert_eq!(h.nrows(), 2);
    /// assert_eq!(h[(0, 0)], Complex::new(1.0, -2.0));
    /// ```
    pub fn adjoint(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)].conj())
    }

    /// Largest `|a_ij - b_ij|`; `None` if the shapes differ.
    pub fn max_abs_diff(&self, other: &Self) -> Option<T::Real> {
        if self.shape() != other.shape() {
            return None;
        }
        let mut worst = <T::Real as num_traits::Zero>::zero();
        for (&a, &b) in self.data.iter().zip(&other.data) {
            let d = (a - b).modulus();
            if d > worst {
                worst = d;
            }
        }
        Some(worst)
    }
}

impl<T> DynMatrix<T> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use numeris_lapack::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Column-major element storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Column `j` as a contiguous slice.
    pub fn col(&self, j: usize) -> &[T] {
        assert!(j < self.ncols, "column {} out of bounds for {} columns", j, self.ncols);
        &self.data[j * self.nrows..(j + 1) * self.nrows]
    }
}

// ── Views ───────────────────────────────────────────────────────────

impl<T: Copy> DynMatrix<T> {
    /// Borrow as a read-only LAPACK view.
    ///
    /// Fails only if a dimension exceeds `i32::MAX`.
    pub fn view(&self) -> Result<MatRef<'_, T>> {
        MatRef::new(&self.data, self.nrows, self.ncols)
    }

    /// Borrow as a mutable LAPACK view.
    ///
    /// ```
    /// use numeris_lapack::DynMatrix;
    ///
    /// let mut m = DynMatrix::zeros(2, 2, 0.0_f64);
    /// m.view_mut().unwrap().set(1, 0, 5.0);
    /// assert_eq!(m[(1, 0)], 5.0);
    /// ```
    pub fn view_mut(&mut self) -> Result<MatMut<'_, T>> {
        MatMut::new(&mut self.data, self.nrows, self.ncols)
    }
}

// ── Indexing ────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.nrows && j < self.ncols, "index ({}, {}) out of bounds", i, j);
        &self.data[j * self.nrows + i]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.nrows && j < self.ncols, "index ({}, {}) out of bounds", i, j);
        &mut self.data[j * self.nrows + i]
    }
}

// ── Multiplication ──────────────────────────────────────────────────

impl<T: Element> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let m = self.nrows;
        let mut data = vec![T::zero(); m * rhs.ncols];
        for j in 0..rhs.ncols {
            for k in 0..self.ncols {
                let b_kj = rhs.data[j * rhs.nrows + k];
                for i in 0..m {
                    data[j * m + i] = data[j * m + i] + self.data[k * m + i] * b_kj;
                }
            }
        }
        DynMatrix {
            data,
            nrows: m,
            ncols: rhs.ncols,
        }
    }
}

impl<T: Element> Mul for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}
