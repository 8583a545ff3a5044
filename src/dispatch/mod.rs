//! Per-kind routing of each operation to its routine.
//!
//! [`Dispatch`] has one method per operation and exactly four impls, one
//! per element kind, generated by `impl_real_dispatch!` and
//! `impl_complex_dispatch!`. An impl knows its kind's quirks: which routine
//! name to call (`hetrf` for a complex `sytrf`), which auxiliary scratch
//! arrays to allocate and how large, and how to reshape output (real
//! `geev`). Callers go through [`crate::Lapack`], which validates shapes
//! and lengths first; the methods here assume that has happened.

mod complex;
mod real;

use num_complex::Complex;

use crate::error::Result;
use crate::flags::{ConditionJob, Diag, EigenJob, EigenRange, Norm, ScaleKind, Side, SvdJob, Transpose, Uplo};
use crate::kernels::Kernels;
use crate::status::{EigenSelection, LeastSquares, Status};
use crate::traits::Element;
use crate::view::{MatMut, MatRef};

/// Output of an incremental condition estimate step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionEstimate<T: Element> {
    /// Updated estimate of the extreme singular value.
    pub sestpr: T::Real,
    /// Sine of the rotation combining the old estimate with the new column.
    pub s: T,
    /// Cosine of that rotation.
    pub c: T,
}

/// Operations with one implementation per element kind.
///
/// Implemented for `f32`, `f64`, `Complex<f32>` and `Complex<f64>`. Every
/// method expects arguments already validated by [`crate::Lapack`].
#[allow(clippy::too_many_arguments)]
pub trait Dispatch: Element {
    fn gelss<K: Kernels>(
        kernels: &K,
        a: MatMut<'_, Self>,
        b: MatMut<'_, Self>,
        s: &mut [Self::Real],
        rcond: Self::Real,
    ) -> Result<LeastSquares>;

    fn potrf<K: Kernels>(kernels: &K, uplo: Uplo, a: MatMut<'_, Self>) -> Result<Status>;

    fn potrs<K: Kernels>(kernels: &K, uplo: Uplo, a: MatRef<'_, Self>, b: MatMut<'_, Self>) -> Result<()>;

    fn getrf<K: Kernels>(kernels: &K, a: MatMut<'_, Self>, ipiv: &mut [i32]) -> Result<Status>;

    fn getrs<K: Kernels>(
        kernels: &K,
        trans: Transpose,
        a: MatRef<'_, Self>,
        ipiv: &[i32],
        b: MatMut<'_, Self>,
    ) -> Result<()>;

    fn sytrf<K: Kernels>(kernels: &K, uplo: Uplo, a: MatMut<'_, Self>, ipiv: &mut [i32]) -> Result<Status>;

    fn sytrs<K: Kernels>(
        kernels: &K,
        uplo: Uplo,
        a: MatRef<'_, Self>,
        ipiv: &[i32],
        b: MatMut<'_, Self>,
    ) -> Result<()>;

    fn syev<K: Kernels>(
        kernels: &K,
        job: EigenJob,
        uplo: Uplo,
        a: MatMut<'_, Self>,
        w: &mut [Self::Real],
    ) -> Result<Status>;

    fn syevx<K: Kernels>(
        kernels: &K,
        job: EigenJob,
        range: EigenRange<Self::Real>,
        uplo: Uplo,
        a: MatMut<'_, Self>,
        abstol: Self::Real,
        w: &mut [Self::Real],
        z: MatMut<'_, Self>,
    ) -> Result<EigenSelection>;

    fn gesdd<K: Kernels>(
        kernels: &K,
        job: SvdJob,
        a: MatMut<'_, Self>,
        s: &mut [Self::Real],
        u: MatMut<'_, Self>,
        vt: MatMut<'_, Self>,
    ) -> Result<Status>;

    fn geev<K: Kernels>(
        kernels: &K,
        left: EigenJob,
        right: EigenJob,
        a: MatMut<'_, Self>,
        w: &mut [Complex<Self::Real>],
        vl: MatMut<'_, Complex<Self::Real>>,
        vr: MatMut<'_, Complex<Self::Real>>,
        threshold: Self::Real,
    ) -> Result<Status>;

    fn geqp3<K: Kernels>(kernels: &K, a: MatMut<'_, Self>, jpvt: &mut [i32], tau: &mut [Self]) -> Result<()>;

    fn tzrzf<K: Kernels>(kernels: &K, a: MatMut<'_, Self>, tau: &mut [Self]) -> Result<()>;

    fn ormqr<K: Kernels>(
        kernels: &K,
        side: Side,
        trans: Transpose,
        a: MatRef<'_, Self>,
        tau: &[Self],
        c: MatMut<'_, Self>,
    ) -> Result<()>;

    fn ormrz<K: Kernels>(
        kernels: &K,
        side: Side,
        trans: Transpose,
        l: usize,
        a: MatRef<'_, Self>,
        tau: &[Self],
        c: MatMut<'_, Self>,
    ) -> Result<()>;

    fn trsm<K: Kernels>(
        kernels: &K,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        alpha: Self,
        a: MatRef<'_, Self>,
        b: MatMut<'_, Self>,
    );

    fn lascl<K: Kernels>(
        kernels: &K,
        kind: ScaleKind,
        kl: usize,
        ku: usize,
        cfrom: Self::Real,
        cto: Self::Real,
        a: MatMut<'_, Self>,
    ) -> Result<()>;

    fn lange<K: Kernels>(kernels: &K, norm: Norm, a: MatRef<'_, Self>) -> Self::Real;

    fn copy<K: Kernels>(kernels: &K, n: usize, x: &[Self], incx: i32, y: &mut [Self], incy: i32);

    fn laic1<K: Kernels>(
        kernels: &K,
        job: ConditionJob,
        x: &[Self],
        sest: Self::Real,
        w: &[Self],
        gamma: Self,
    ) -> ConditionEstimate<Self>;
}

/// `(vl, vu, il, iu)` arguments of `xsyevx`/`xheevx`.
///
/// Index bounds become one-based; unused arguments get values LAPACK
/// accepts and ignores.
pub(crate) fn range_args<R: crate::traits::RealElement>(range: &EigenRange<R>) -> (R, R, i32, i32) {
    match *range {
        EigenRange::All => (R::zero(), R::zero(), 1, 1),
        EigenRange::Values { lower, upper } => (lower, upper, 1, 1),
        EigenRange::Indices { first, last } => (R::zero(), R::zero(), first as i32 + 1, last as i32 + 1),
    }
}

/// Zero-based indices of the eigenvectors `ifail` reports as unconverged.
pub(crate) fn unconverged(status: Status, ifail: &[i32]) -> Vec<usize> {
    match status {
        Status::Success => Vec::new(),
        Status::Degenerate(count) => ifail
            .iter()
            .take(count)
            .filter(|&&i| i > 0)
            .map(|&i| i as usize - 1)
            .collect(),
    }
}

/// Real scratch of complex `xgesdd`.
///
/// Without vectors `max(5 mn, 7 mn)`; with vectors the larger of
/// `5 mn^2 + 7 mn` and `2 mx mn + 2 mn^2 + mn`, the documented minimum of
/// current LAPACK releases.
///
/// The classic sizes are `5 mn` without vectors and `5 mn^2 + 7 mn` with
/// them. Both are lower bounds of what this returns.
pub(crate) fn gesdd_rwork_len(job: SvdJob, m: usize, n: usize) -> usize {
    let mn = m.min(n);
    let mx = m.max(n);
    match job {
        SvdJob::None => (5 * mn).max(7 * mn),
        _ => {
            let sq = mn.saturating_mul(mn);
            let classic = sq.saturating_mul(5).saturating_add(7 * mn);
            let current = mx
                .saturating_mul(mn)
                .saturating_mul(2)
                .saturating_add(sq.saturating_mul(2))
                .saturating_add(mn);
            classic.max(current)
        }
    }
}

/// Integer scratch of `xgesdd`, all kinds.
pub(crate) fn gesdd_iwork_len(m: usize, n: usize) -> usize {
    8 * m.min(n)
}
