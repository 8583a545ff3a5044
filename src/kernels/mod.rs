//! The low-level routine set the dispatch layer drives.
//!
//! Every method mirrors one Fortran routine: column-major storage, one-based
//! pivots, flag bytes, 32-bit integers, and the `info` code returned rather
//! than written through a pointer. The real family ([`RealKernels`]) and
//! complex family ([`ComplexKernels`]) are separate traits because their
//! calling conventions differ: complex routines take an auxiliary real
//! `rwork`, Hermitian rather than symmetric variants, and real-valued
//! eigenvalues and singular values.
//!
//! # Safety
//!
//! All routine methods are `unsafe`. Implementations may hand the slices to
//! foreign code that indexes them using only the integer arguments, so the
//! caller must ensure every dimension, leading dimension and increment
//! describes memory inside the corresponding slice. The facade in
//! [`crate::Lapack`] validates this before every call.

#[cfg(feature = "lapack")]
pub mod native;

use num_complex::Complex;

use crate::traits::RealElement;

#[cfg(feature = "lapack")]
pub use native::Native;

/// Real-family routines (`s` and `d` prefixes) for precision `R`.
#[allow(clippy::too_many_arguments)]
pub trait RealKernels<R: RealElement> {
    unsafe fn gelss(
        &self, m: i32, n: i32, nrhs: i32, a: &mut [R], lda: i32, b: &mut [R], ldb: i32,
        s: &mut [R], rcond: R, rank: &mut i32, work: &mut [R], lwork: i32,
    ) -> i32;

    unsafe fn potrf(&self, uplo: u8, n: i32, a: &mut [R], lda: i32) -> i32;

    unsafe fn potrs(
        &self, uplo: u8, n: i32, nrhs: i32, a: &[R], lda: i32, b: &mut [R], ldb: i32,
    ) -> i32;

    unsafe fn getrf(&self, m: i32, n: i32, a: &mut [R], lda: i32, ipiv: &mut [i32]) -> i32;

    unsafe fn getrs(
        &self, trans: u8, n: i32, nrhs: i32, a: &[R], lda: i32, ipiv: &[i32], b: &mut [R],
        ldb: i32,
    ) -> i32;

    unsafe fn sytrf(
        &self, uplo: u8, n: i32, a: &mut [R], lda: i32, ipiv: &mut [i32], work: &mut [R],
        lwork: i32,
    ) -> i32;

    unsafe fn sytrs(
        &self, uplo: u8, n: i32, nrhs: i32, a: &[R], lda: i32, ipiv: &[i32], b: &mut [R],
        ldb: i32,
    ) -> i32;

    unsafe fn syev(
        &self, jobz: u8, uplo: u8, n: i32, a: &mut [R], lda: i32, w: &mut [R], work: &mut [R],
        lwork: i32,
    ) -> i32;

    unsafe fn syevx(
        &self, jobz: u8, range: u8, uplo: u8, n: i32, a: &mut [R], lda: i32, vl: R, vu: R,
        il: i32, iu: i32, abstol: R, m: &mut i32, w: &mut [R], z: &mut [R], ldz: i32,
        work: &mut [R], lwork: i32, iwork: &mut [i32], ifail: &mut [i32],
    ) -> i32;

    unsafe fn gesdd(
        &self, jobz: u8, m: i32, n: i32, a: &mut [R], lda: i32, s: &mut [R], u: &mut [R],
        ldu: i32, vt: &mut [R], ldvt: i32, work: &mut [R], lwork: i32, iwork: &mut [i32],
    ) -> i32;

    unsafe fn geev(
        &self, jobvl: u8, jobvr: u8, n: i32, a: &mut [R], lda: i32, wr: &mut [R], wi: &mut [R],
        vl: &mut [R], ldvl: i32, vr: &mut [R], ldvr: i32, work: &mut [R], lwork: i32,
    ) -> i32;

    unsafe fn geqp3(
        &self, m: i32, n: i32, a: &mut [R], lda: i32, jpvt: &mut [i32], tau: &mut [R],
        work: &mut [R], lwork: i32,
    ) -> i32;

    unsafe fn tzrzf(
        &self, m: i32, n: i32, a: &mut [R], lda: i32, tau: &mut [R], work: &mut [R], lwork: i32,
    ) -> i32;

    unsafe fn ormqr(
        &self, side: u8, trans: u8, m: i32, n: i32, k: i32, a: &[R], lda: i32, tau: &[R],
        c: &mut [R], ldc: i32, work: &mut [R], lwork: i32,
    ) -> i32;

    unsafe fn ormrz(
        &self, side: u8, trans: u8, m: i32, n: i32, k: i32, l: i32, a: &[R], lda: i32,
        tau: &[R], c: &mut [R], ldc: i32, work: &mut [R], lwork: i32,
    ) -> i32;

    unsafe fn trsm(
        &self, side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: R, a: &[R],
        lda: i32, b: &mut [R], ldb: i32,
    );

    unsafe fn lascl(
        &self, kind: u8, kl: i32, ku: i32, cfrom: R, cto: R, m: i32, n: i32, a: &mut [R],
        lda: i32,
    ) -> i32;

    unsafe fn lange(&self, norm: u8, m: i32, n: i32, a: &[R], lda: i32, work: &mut [R]) -> R;

    unsafe fn copy(&self, n: i32, x: &[R], incx: i32, y: &mut [R], incy: i32);

    unsafe fn laic1(
        &self, job: i32, j: i32, x: &[R], sest: R, w: &[R], gamma: R, sestpr: &mut R,
        s: &mut R, c: &mut R,
    );

    /// `xlamch`: machine parameter `cmach` (`b'S'`, `b'P'`, `b'E'`, ...).
    fn lamch(&self, cmach: u8) -> R;
}

/// Complex-family routines (`c` and `z` prefixes) over `Complex<R>`.
#[allow(clippy::too_many_arguments)]
pub trait ComplexKernels<R: RealElement> {
    unsafe fn gelss(
        &self, m: i32, n: i32, nrhs: i32, a: &mut [Complex<R>], lda: i32, b: &mut [Complex<R>],
        ldb: i32, s: &mut [R], rcond: R, rank: &mut i32, work: &mut [Complex<R>], lwork: i32,
        rwork: &mut [R],
    ) -> i32;

    unsafe fn potrf(&self, uplo: u8, n: i32, a: &mut [Complex<R>], lda: i32) -> i32;

    unsafe fn potrs(
        &self, uplo: u8, n: i32, nrhs: i32, a: &[Complex<R>], lda: i32, b: &mut [Complex<R>],
        ldb: i32,
    ) -> i32;

    unsafe fn getrf(
        &self, m: i32, n: i32, a: &mut [Complex<R>], lda: i32, ipiv: &mut [i32],
    ) -> i32;

    unsafe fn getrs(
        &self, trans: u8, n: i32, nrhs: i32, a: &[Complex<R>], lda: i32, ipiv: &[i32],
        b: &mut [Complex<R>], ldb: i32,
    ) -> i32;

    unsafe fn hetrf(
        &self, uplo: u8, n: i32, a: &mut [Complex<R>], lda: i32, ipiv: &mut [i32],
        work: &mut [Complex<R>], lwork: i32,
    ) -> i32;

    unsafe fn hetrs(
        &self, uplo: u8, n: i32, nrhs: i32, a: &[Complex<R>], lda: i32, ipiv: &[i32],
        b: &mut [Complex<R>], ldb: i32,
    ) -> i32;

    unsafe fn heev(
        &self, jobz: u8, uplo: u8, n: i32, a: &mut [Complex<R>], lda: i32, w: &mut [R],
        work: &mut [Complex<R>], lwork: i32, rwork: &mut [R],
    ) -> i32;

    unsafe fn heevx(
        &self, jobz: u8, range: u8, uplo: u8, n: i32, a: &mut [Complex<R>], lda: i32, vl: R,
        vu: R, il: i32, iu: i32, abstol: R, m: &mut i32, w: &mut [R], z: &mut [Complex<R>],
        ldz: i32, work: &mut [Complex<R>], lwork: i32, rwork: &mut [R], iwork: &mut [i32],
        ifail: &mut [i32],
    ) -> i32;

    unsafe fn gesdd(
        &self, jobz: u8, m: i32, n: i32, a: &mut [Complex<R>], lda: i32, s: &mut [R],
        u: &mut [Complex<R>], ldu: i32, vt: &mut [Complex<R>], ldvt: i32,
        work: &mut [Complex<R>], lwork: i32, rwork: &mut [R], iwork: &mut [i32],
    ) -> i32;

    unsafe fn geev(
        &self, jobvl: u8, jobvr: u8, n: i32, a: &mut [Complex<R>], lda: i32,
        w: &mut [Complex<R>], vl: &mut [Complex<R>], ldvl: i32, vr: &mut [Complex<R>],
        ldvr: i32, work: &mut [Complex<R>], lwork: i32, rwork: &mut [R],
    ) -> i32;

    unsafe fn geqp3(
        &self, m: i32, n: i32, a: &mut [Complex<R>], lda: i32, jpvt: &mut [i32],
        tau: &mut [Complex<R>], work: &mut [Complex<R>], lwork: i32, rwork: &mut [R],
    ) -> i32;

    unsafe fn tzrzf(
        &self, m: i32, n: i32, a: &mut [Complex<R>], lda: i32, tau: &mut [Complex<R>],
        work: &mut [Complex<R>], lwork: i32,
    ) -> i32;

    unsafe fn unmqr(
        &self, side: u8, trans: u8, m: i32, n: i32, k: i32, a: &[Complex<R>], lda: i32,
        tau: &[Complex<R>], c: &mut [Complex<R>], ldc: i32, work: &mut [Complex<R>],
        lwork: i32,
    ) -> i32;

    unsafe fn unmrz(
        &self, side: u8, trans: u8, m: i32, n: i32, k: i32, l: i32, a: &[Complex<R>],
        lda: i32, tau: &[Complex<R>], c: &mut [Complex<R>], ldc: i32, work: &mut [Complex<R>],
        lwork: i32,
    ) -> i32;

    unsafe fn trsm(
        &self, side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: Complex<R>,
        a: &[Complex<R>], lda: i32, b: &mut [Complex<R>], ldb: i32,
    );

    unsafe fn lascl(
        &self, kind: u8, kl: i32, ku: i32, cfrom: R, cto: R, m: i32, n: i32,
        a: &mut [Complex<R>], lda: i32,
    ) -> i32;

    unsafe fn lange(
        &self, norm: u8, m: i32, n: i32, a: &[Complex<R>], lda: i32, work: &mut [R],
    ) -> R;

    unsafe fn copy(&self, n: i32, x: &[Complex<R>], incx: i32, y: &mut [Complex<R>], incy: i32);

    unsafe fn laic1(
        &self, job: i32, j: i32, x: &[Complex<R>], sest: R, w: &[Complex<R>], gamma: Complex<R>,
        sestpr: &mut R, s: &mut Complex<R>, c: &mut Complex<R>,
    );
}

/// A complete routine set: both families at both precisions.
pub trait Kernels:
    RealKernels<f32> + RealKernels<f64> + ComplexKernels<f32> + ComplexKernels<f64>
{
    /// `ilaenv`: tuning parameter `ispec` for the fully prefixed routine
    /// `name` (e.g. `DGETRF`) with option letters `opts`.
    fn ilaenv(&self, ispec: i32, name: &str, opts: &str, n1: i32, n2: i32, n3: i32, n4: i32)
        -> i32;
}

/// The routine set of a build without a LAPACK backend.
///
/// Uninhabited: no value exists, so a `Backend<NoKernels>` can only be
/// [`Backend::Unavailable`](crate::Backend::Unavailable) and none of these
/// methods can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoKernels {}

#[allow(unused_variables)]
impl<R: RealElement> RealKernels<R> for NoKernels {
    unsafe fn gelss(
        &self, m: i32, n: i32, nrhs: i32, a: &mut [R], lda: i32, b: &mut [R], ldb: i32,
        s: &mut [R], rcond: R, rank: &mut i32, work: &mut [R], lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn potrf(&self, uplo: u8, n: i32, a: &mut [R], lda: i32) -> i32 {
        match *self {}
    }

    unsafe fn potrs(
        &self, uplo: u8, n: i32, nrhs: i32, a: &[R], lda: i32, b: &mut [R], ldb: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn getrf(&self, m: i32, n: i32, a: &mut [R], lda: i32, ipiv: &mut [i32]) -> i32 {
        match *self {}
    }

    unsafe fn getrs(
        &self, trans: u8, n: i32, nrhs: i32, a: &[R], lda: i32, ipiv: &[i32], b: &mut [R],
        ldb: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn sytrf(
        &self, uplo: u8, n: i32, a: &mut [R], lda: i32, ipiv: &mut [i32], work: &mut [R],
        lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn sytrs(
        &self, uplo: u8, n: i32, nrhs: i32, a: &[R], lda: i32, ipiv: &[i32], b: &mut [R],
        ldb: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn syev(
        &self, jobz: u8, uplo: u8, n: i32, a: &mut [R], lda: i32, w: &mut [R], work: &mut [R],
        lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn syevx(
        &self, jobz: u8, range: u8, uplo: u8, n: i32, a: &mut [R], lda: i32, vl: R, vu: R,
        il: i32, iu: i32, abstol: R, m: &mut i32, w: &mut [R], z: &mut [R], ldz: i32,
        work: &mut [R], lwork: i32, iwork: &mut [i32], ifail: &mut [i32],
    ) -> i32 {
        match *self {}
    }

    unsafe fn gesdd(
        &self, jobz: u8, m: i32, n: i32, a: &mut [R], lda: i32, s: &mut [R], u: &mut [R],
        ldu: i32, vt: &mut [R], ldvt: i32, work: &mut [R], lwork: i32, iwork: &mut [i32],
    ) -> i32 {
        match *self {}
    }

    unsafe fn geev(
        &self, jobvl: u8, jobvr: u8, n: i32, a: &mut [R], lda: i32, wr: &mut [R], wi: &mut [R],
        vl: &mut [R], ldvl: i32, vr: &mut [R], ldvr: i32, work: &mut [R], lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn geqp3(
        &self, m: i32, n: i32, a: &mut [R], lda: i32, jpvt: &mut [i32], tau: &mut [R],
        work: &mut [R], lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn tzrzf(
        &self, m: i32, n: i32, a: &mut [R], lda: i32, tau: &mut [R], work: &mut [R], lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn ormqr(
        &self, side: u8, trans: u8, m: i32, n: i32, k: i32, a: &[R], lda: i32, tau: &[R],
        c: &mut [R], ldc: i32, work: &mut [R], lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn ormrz(
        &self, side: u8, trans: u8, m: i32, n: i32, k: i32, l: i32, a: &[R], lda: i32,
        tau: &[R], c: &mut [R], ldc: i32, work: &mut [R], lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn trsm(
        &self, side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: R, a: &[R],
        lda: i32, b: &mut [R], ldb: i32,
    ) {
        match *self {}
    }

    unsafe fn lascl(
        &self, kind: u8, kl: i32, ku: i32, cfrom: R, cto: R, m: i32, n: i32, a: &mut [R],
        lda: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn lange(&self, norm: u8, m: i32, n: i32, a: &[R], lda: i32, work: &mut [R]) -> R {
        match *self {}
    }

    unsafe fn copy(&self, n: i32, x: &[R], incx: i32, y: &mut [R], incy: i32) {
        match *self {}
    }

    unsafe fn laic1(
        &self, job: i32, j: i32, x: &[R], sest: R, w: &[R], gamma: R, sestpr: &mut R,
        s: &mut R, c: &mut R,
    ) {
        match *self {}
    }

    fn lamch(&self, cmach: u8) -> R {
        match *self {}
    }
}

#[allow(unused_variables)]
impl<R: RealElement> ComplexKernels<R> for NoKernels {
    unsafe fn gelss(
        &self, m: i32, n: i32, nrhs: i32, a: &mut [Complex<R>], lda: i32, b: &mut [Complex<R>],
        ldb: i32, s: &mut [R], rcond: R, rank: &mut i32, work: &mut [Complex<R>], lwork: i32,
        rwork: &mut [R],
    ) -> i32 {
        match *self {}
    }

    unsafe fn potrf(&self, uplo: u8, n: i32, a: &mut [Complex<R>], lda: i32) -> i32 {
        match *self {}
    }

    unsafe fn potrs(
        &self, uplo: u8, n: i32, nrhs: i32, a: &[Complex<R>], lda: i32, b: &mut [Complex<R>],
        ldb: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn getrf(
        &self, m: i32, n: i32, a: &mut [Complex<R>], lda: i32, ipiv: &mut [i32],
    ) -> i32 {
        match *self {}
    }

    unsafe fn getrs(
        &self, trans: u8, n: i32, nrhs: i32, a: &[Complex<R>], lda: i32, ipiv: &[i32],
        b: &mut [Complex<R>], ldb: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn hetrf(
        &self, uplo: u8, n: i32, a: &mut [Complex<R>], lda: i32, ipiv: &mut [i32],
        work: &mut [Complex<R>], lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn hetrs(
        &self, uplo: u8, n: i32, nrhs: i32, a: &[Complex<R>], lda: i32, ipiv: &[i32],
        b: &mut [Complex<R>], ldb: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn heev(
        &self, jobz: u8, uplo: u8, n: i32, a: &mut [Complex<R>], lda: i32, w: &mut [R],
        work: &mut [Complex<R>], lwork: i32, rwork: &mut [R],
    ) -> i32 {
        match *self {}
    }

    unsafe fn heevx(
        &self, jobz: u8, range: u8, uplo: u8, n: i32, a: &mut [Complex<R>], lda: i32, vl: R,
        vu: R, il: i32, iu: i32, abstol: R, m: &mut i32, w: &mut [R], z: &mut [Complex<R>],
        ldz: i32, work: &mut [Complex<R>], lwork: i32, rwork: &mut [R], iwork: &mut [i32],
        ifail: &mut [i32],
    ) -> i32 {
        match *self {}
    }

    unsafe fn gesdd(
        &self, jobz: u8, m: i32, n: i32, a: &mut [Complex<R>], lda: i32, s: &mut [R],
        u: &mut [Complex<R>], ldu: i32, vt: &mut [Complex<R>], ldvt: i32,
        work: &mut [Complex<R>], lwork: i32, rwork: &mut [R], iwork: &mut [i32],
    ) -> i32 {
        match *self {}
    }

    unsafe fn geev(
        &self, jobvl: u8, jobvr: u8, n: i32, a: &mut [Complex<R>], lda: i32,
        w: &mut [Complex<R>], vl: &mut [Complex<R>], ldvl: i32, vr: &mut [Complex<R>],
        ldvr: i32, work: &mut [Complex<R>], lwork: i32, rwork: &mut [R],
    ) -> i32 {
        match *self {}
    }

    unsafe fn geqp3(
        &self, m: i32, n: i32, a: &mut [Complex<R>], lda: i32, jpvt: &mut [i32],
        tau: &mut [Complex<R>], work: &mut [Complex<R>], lwork: i32, rwork: &mut [R],
    ) -> i32 {
        match *self {}
    }

    unsafe fn tzrzf(
        &self, m: i32, n: i32, a: &mut [Complex<R>], lda: i32, tau: &mut [Complex<R>],
        work: &mut [Complex<R>], lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn unmqr(
        &self, side: u8, trans: u8, m: i32, n: i32, k: i32, a: &[Complex<R>], lda: i32,
        tau: &[Complex<R>], c: &mut [Complex<R>], ldc: i32, work: &mut [Complex<R>],
        lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn unmrz(
        &self, side: u8, trans: u8, m: i32, n: i32, k: i32, l: i32, a: &[Complex<R>],
        lda: i32, tau: &[Complex<R>], c: &mut [Complex<R>], ldc: i32, work: &mut [Complex<R>],
        lwork: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn trsm(
        &self, side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: Complex<R>,
        a: &[Complex<R>], lda: i32, b: &mut [Complex<R>], ldb: i32,
    ) {
        match *self {}
    }

    unsafe fn lascl(
        &self, kind: u8, kl: i32, ku: i32, cfrom: R, cto: R, m: i32, n: i32,
        a: &mut [Complex<R>], lda: i32,
    ) -> i32 {
        match *self {}
    }

    unsafe fn lange(
        &self, norm: u8, m: i32, n: i32, a: &[Complex<R>], lda: i32, work: &mut [R],
    ) -> R {
        match *self {}
    }

    unsafe fn copy(&self, n: i32, x: &[Complex<R>], incx: i32, y: &mut [Complex<R>], incy: i32) {
        match *self {}
    }

    unsafe fn laic1(
        &self, job: i32, j: i32, x: &[Complex<R>], sest: R, w: &[Complex<R>], gamma: Complex<R>,
        sestpr: &mut R, s: &mut Complex<R>, c: &mut Complex<R>,
    ) {
        match *self {}
    }
}

impl Kernels for NoKernels {
    fn ilaenv(
        &self, _ispec: i32, _name: &str, _opts: &str, _n1: i32, _n2: i32, _n3: i32, _n4: i32,
    ) -> i32 {
        match *self {}
    }
}
