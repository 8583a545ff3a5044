//! Reassembly of real `xgeev` output into complex form.
//!
//! For a real matrix, `xgeev` returns eigenvalues as separate real and
//! imaginary arrays, and eigenvectors packed in a real matrix: a real
//! eigenvalue at `j` owns column `j`, while a conjugate pair at `j, j + 1`
//! shares columns `j` (real part) and `j + 1` (imaginary part). These
//! functions expand that layout into one complex column per eigenvalue.

use num_complex::Complex;

use crate::traits::RealElement;
use crate::view::{MatMut, MatRef};

/// Default threshold below which `|Im(lambda)|` counts as zero.
pub const DEFAULT_CONJUGATE_THRESHOLD: f64 = 1e-6;

/// `w[j] = wr[j] + i * wi[j]` for every `j < w.len()`.
pub fn assemble_eigenvalues<R: RealElement>(wr: &[R], wi: &[R], w: &mut [Complex<R>]) {
    for ((w, &re), &im) in w.iter_mut().zip(wr).zip(wi) {
        *w = Complex::new(re, im);
    }
}

/// Expand packed real eigenvectors into complex columns.
///
/// Walks the columns of `packed`: where `|wi[j]| < threshold` (or `j` is
/// the last column, which has no partner) column `j` is copied as real;
/// otherwise columns `j` and `j + 1` become `v_j + i v_{j+1}` and
/// `v_j - i v_{j+1}` and the walk advances by two. `out` must be at least
/// the shape of `packed` and `wi` at least `packed.ncols()` entries long.
///
/// ```
/// use num_complex::Complex;
/// use numeris_lapack::eigen::repack_eigenvectors;
/// use numeris_lapack::{MatMut, MatRef};
///
/// // one conjugate pair, packed as (re, im) columns
/// let packed = [1.0, 0.0, 0.0, 1.0];
/// let wi = [2.0, -2.0];
/// let mut out = [Complex::new(0.0, 0.0); 4];
/// repack_eigenvectors(
///     &wi,
///     MatRef::new(&packed, 2, 2).unwrap(),
///     MatMut::new(&mut out, 2, 2).unwrap(),
///     1e-6,
/// );
/// assert_eq!(out[1], Complex::new(0.0, 1.0));
/// assert_eq!(out[3], Complex::new(0.0, -1.0));
/// ```
pub fn repack_eigenvectors<R: RealElement>(
    wi: &[R],
    packed: MatRef<'_, R>,
    mut out: MatMut<'_, Complex<R>>,
    threshold: R,
) {
    let (rows, cols) = packed.shape();
    debug_assert!(out.nrows() >= rows && out.ncols() >= cols);
    debug_assert!(wi.len() >= cols);

    let mut j = 0;
    while j < cols {
        if wi[j].abs() < threshold || j + 1 == cols {
            for i in 0..rows {
                out.set(i, j, Complex::new(packed.get(i, j), R::zero()));
            }
            j += 1;
        } else {
            for i in 0..rows {
                let re = packed.get(i, j);
                let im = packed.get(i, j + 1);
                out.set(i, j, Complex::new(re, im));
                out.set(i, j + 1, Complex::new(re, -im));
            }
            j += 2;
        }
    }
}
