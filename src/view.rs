//! Borrowed column-major matrix views.
//!
//! A view is a slice plus `(nrows, ncols, ld)`: element `(i, j)` lives at
//! `data[i + j * ld]`. Construction checks everything a LAPACK routine
//! assumes about the layout, so a validated view can be handed to a kernel
//! without it ever addressing memory outside the slice.

use crate::error::{LapackError, Result};

/// Minimum slice length for an `nrows x ncols` layout with leading dimension `ld`.
fn required_len(nrows: usize, ncols: usize, ld: usize) -> Option<usize> {
    if ncols == 0 {
        return Some(0);
    }
    ld.checked_mul(ncols - 1)?.checked_add(nrows)
}

fn validate(len: usize, nrows: usize, ncols: usize, ld: usize) -> Result<()> {
    let err = LapackError::InvalidView { nrows, ncols, ld, len };
    let max = i32::MAX as usize;
    if nrows > max || ncols > max || ld > max || ld < nrows.max(1) {
        return Err(err);
    }
    match required_len(nrows, ncols, ld) {
        Some(needed) if needed <= len => Ok(()),
        _ => Err(err),
    }
}

#[inline]
fn to_i32(v: usize) -> i32 {
    // Dimensions are checked against i32::MAX on construction.
    v as i32
}

/// Read-only view of a column-major matrix.
///
/// ```
/// use numeris_lapack::MatRef;
///
/// // 2x2 matrix [[1, 3], [2, 4]] stored by columns
/// let data = [1.0, 2.0, 3.0, 4.0];
/// let a = MatRef::new(&data, 2, 2).unwrap();
/// assert_eq!(a.get(0, 1), 3.0);
/// assert!(MatRef::with_ld(&data, 2, 2, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatRef<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    ld: usize,
}

impl<'a, T: Copy> MatRef<'a, T> {
    /// Tightly packed view, `ld = max(1, nrows)`.
    pub fn new(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self> {
        Self::with_ld(data, nrows, ncols, nrows.max(1))
    }

    /// View with an explicit leading dimension.
    pub fn with_ld(data: &'a [T], nrows: usize, ncols: usize, ld: usize) -> Result<Self> {
        validate(data.len(), nrows, ncols, ld)?;
        Ok(Self { data, nrows, ncols, ld })
    }

    /// A single column over `data`.
    pub fn column(data: &'a [T]) -> Result<Self> {
        Self::new(data, data.len(), 1)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn ld(&self) -> usize {
        self.ld
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Element `(i, j)`. Panics if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.nrows && j < self.ncols, "index ({}, {}) out of bounds", i, j);
        self.data[i + j * self.ld]
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub(crate) fn m(&self) -> i32 {
        to_i32(self.nrows)
    }

    pub(crate) fn n(&self) -> i32 {
        to_i32(self.ncols)
    }

    pub(crate) fn lda(&self) -> i32 {
        to_i32(self.ld)
    }
}

/// Mutable view of a column-major matrix.
///
/// Holds an exclusive borrow, so two views that could alias for writing
/// cannot exist at the same time.
#[derive(Debug)]
pub struct MatMut<'a, T> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
    ld: usize,
}

impl<'a, T: Copy> MatMut<'a, T> {
    /// Tightly packed view, `ld = max(1, nrows)`.
    pub fn new(data: &'a mut [T], nrows: usize, ncols: usize) -> Result<Self> {
        let ld = nrows.max(1);
        Self::with_ld(data, nrows, ncols, ld)
    }

    /// View with an explicit leading dimension.
    pub fn with_ld(data: &'a mut [T], nrows: usize, ncols: usize, ld: usize) -> Result<Self> {
        validate(data.len(), nrows, ncols, ld)?;
        Ok(Self { data, nrows, ncols, ld })
    }

    /// A single column over `data`.
    pub fn column(data: &'a mut [T]) -> Result<Self> {
        let n = data.len();
        Self::new(data, n, 1)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn ld(&self) -> usize {
        self.ld
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Element `(i, j)`. Panics if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.nrows && j < self.ncols, "index ({}, {}) out of bounds", i, j);
        self.data[i + j * self.ld]
    }

    /// Overwrite element `(i, j)`. Panics if out of bounds.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.nrows && j < self.ncols, "index ({}, {}) out of bounds", i, j);
        self.data[i + j * self.ld] = value;
    }

    /// Reborrow as a read-only view.
    pub fn rb(&self) -> MatRef<'_, T> {
        MatRef {
            data: &*self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            ld: self.ld,
        }
    }

    /// Reborrow mutably for a shorter lifetime.
    pub fn rb_mut(&mut self) -> MatMut<'_, T> {
        MatMut {
            data: &mut *self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            ld: self.ld,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub(crate) fn m(&self) -> i32 {
        to_i32(self.nrows)
    }

    pub(crate) fn n(&self) -> i32 {
        to_i32(self.ncols)
    }

    pub(crate) fn lda(&self) -> i32 {
        to_i32(self.ld)
    }
}
