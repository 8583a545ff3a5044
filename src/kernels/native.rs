//! The kernel contract bound to the system LAPACK and BLAS.
//!
//! Routines come from the `lapack` and `blas` crates. `xlaic1` and `ilaenv`
//! are not wrapped there and are declared against the Fortran symbols
//! directly.

use std::os::raw::c_char;

use lapack::{c32, c64};

use super::{ComplexKernels, Kernels, RealKernels};

extern "C" {
    fn slaic1_(
        job: *const i32, j: *const i32, x: *const f32, sest: *const f32, w: *const f32,
        gamma: *const f32, sestpr: *mut f32, s: *mut f32, c: *mut f32,
    );
    fn dlaic1_(
        job: *const i32, j: *const i32, x: *const f64, sest: *const f64, w: *const f64,
        gamma: *const f64, sestpr: *mut f64, s: *mut f64, c: *mut f64,
    );
    fn claic1_(
        job: *const i32, j: *const i32, x: *const c32, sest: *const f32, w: *const c32,
        gamma: *const c32, sestpr: *mut f32, s: *mut c32, c: *mut c32,
    );
    fn zlaic1_(
        job: *const i32, j: *const i32, x: *const c64, sest: *const f64, w: *const c64,
        gamma: *const c64, sestpr: *mut f64, s: *mut c64, c: *mut c64,
    );
    // Trailing arguments are the hidden Fortran lengths of `name` and `opts`.
    fn ilaenv_(
        ispec: *const i32, name: *const c_char, opts: *const c_char, n1: *const i32,
        n2: *const i32, n3: *const i32, n4: *const i32, name_len: usize, opts_len: usize,
    ) -> i32;
}

/// The system LAPACK/BLAS.
///
/// Stateless; every method forwards to the matching Fortran routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Native;

macro_rules! impl_real_kernels {
    (
        $t:ty, gelss = $gelss:ident, potrf = $potrf:ident, potrs = $potrs:ident,
        getrf = $getrf:ident, getrs = $getrs:ident, sytrf = $sytrf:ident, sytrs = $sytrs:ident,
        syev = $syev:ident, syevx = $syevx:ident, gesdd = $gesdd:ident, geev = $geev:ident,
        geqp3 = $geqp3:ident, tzrzf = $tzrzf:ident, ormqr = $ormqr:ident, ormrz = $ormrz:ident,
        trsm = $trsm:ident, lascl = $lascl:ident, lange = $lange:ident, copy = $copy:ident,
        laic1 = $laic1:ident, lamch = $lamch:ident
    ) => {
        impl RealKernels<$t> for Native {
            unsafe fn gelss(
                &self, m: i32, n: i32, nrhs: i32, a: &mut [$t], lda: i32, b: &mut [$t], ldb: i32,
                s: &mut [$t], rcond: $t, rank: &mut i32, work: &mut [$t], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$gelss(m, n, nrhs, a, lda, b, ldb, s, rcond, rank, work, lwork, &mut info);
                info
            }

            unsafe fn potrf(&self, uplo: u8, n: i32, a: &mut [$t], lda: i32) -> i32 {
                let mut info = 0;
                lapack::$potrf(uplo, n, a, lda, &mut info);
                info
            }

            unsafe fn potrs(
                &self, uplo: u8, n: i32, nrhs: i32, a: &[$t], lda: i32, b: &mut [$t], ldb: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$potrs(uplo, n, nrhs, a, lda, b, ldb, &mut info);
                info
            }

            unsafe fn getrf(
                &self, m: i32, n: i32, a: &mut [$t], lda: i32, ipiv: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                lapack::$getrf(m, n, a, lda, ipiv, &mut info);
                info
            }

            unsafe fn getrs(
                &self, trans: u8, n: i32, nrhs: i32, a: &[$t], lda: i32, ipiv: &[i32],
                b: &mut [$t], ldb: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$getrs(trans, n, nrhs, a, lda, ipiv, b, ldb, &mut info);
                info
            }

            unsafe fn sytrf(
                &self, uplo: u8, n: i32, a: &mut [$t], lda: i32, ipiv: &mut [i32],
                work: &mut [$t], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$sytrf(uplo, n, a, lda, ipiv, work, lwork, &mut info);
                info
            }

            unsafe fn sytrs(
                &self, uplo: u8, n: i32, nrhs: i32, a: &[$t], lda: i32, ipiv: &[i32],
                b: &mut [$t], ldb: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$sytrs(uplo, n, nrhs, a, lda, ipiv, b, ldb, &mut info);
                info
            }

            unsafe fn syev(
                &self, jobz: u8, uplo: u8, n: i32, a: &mut [$t], lda: i32, w: &mut [$t],
                work: &mut [$t], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$syev(jobz, uplo, n, a, lda, w, work, lwork, &mut info);
                info
            }

            unsafe fn syevx(
                &self, jobz: u8, range: u8, uplo: u8, n: i32, a: &mut [$t], lda: i32, vl: $t,
                vu: $t, il: i32, iu: i32, abstol: $t, m: &mut i32, w: &mut [$t], z: &mut [$t],
                ldz: i32, work: &mut [$t], lwork: i32, iwork: &mut [i32], ifail: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                lapack::$syevx(
                    jobz, range, uplo, n, a, lda, vl, vu, il, iu, abstol, m, w, z, ldz, work,
                    lwork, iwork, ifail, &mut info,
                );
                info
            }

            unsafe fn gesdd(
                &self, jobz: u8, m: i32, n: i32, a: &mut [$t], lda: i32, s: &mut [$t],
                u: &mut [$t], ldu: i32, vt: &mut [$t], ldvt: i32, work: &mut [$t], lwork: i32,
                iwork: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                lapack::$gesdd(
                    jobz, m, n, a, lda, s, u, ldu, vt, ldvt, work, lwork, iwork, &mut info,
                );
                info
            }

            unsafe fn geev(
                &self, jobvl: u8, jobvr: u8, n: i32, a: &mut [$t], lda: i32, wr: &mut [$t],
                wi: &mut [$t], vl: &mut [$t], ldvl: i32, vr: &mut [$t], ldvr: i32,
                work: &mut [$t], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$geev(
                    jobvl, jobvr, n, a, lda, wr, wi, vl, ldvl, vr, ldvr, work, lwork, &mut info,
                );
                info
            }

            unsafe fn geqp3(
                &self, m: i32, n: i32, a: &mut [$t], lda: i32, jpvt: &mut [i32], tau: &mut [$t],
                work: &mut [$t], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$geqp3(m, n, a, lda, jpvt, tau, work, lwork, &mut info);
                info
            }

            unsafe fn tzrzf(
                &self, m: i32, n: i32, a: &mut [$t], lda: i32, tau: &mut [$t], work: &mut [$t],
                lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$tzrzf(m, n, a, lda, tau, work, lwork, &mut info);
                info
            }

            unsafe fn ormqr(
                &self, side: u8, trans: u8, m: i32, n: i32, k: i32, a: &[$t], lda: i32,
                tau: &[$t], c: &mut [$t], ldc: i32, work: &mut [$t], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$ormqr(side, trans, m, n, k, a, lda, tau, c, ldc, work, lwork, &mut info);
                info
            }

            unsafe fn ormrz(
                &self, side: u8, trans: u8, m: i32, n: i32, k: i32, l: i32, a: &[$t], lda: i32,
                tau: &[$t], c: &mut [$t], ldc: i32, work: &mut [$t], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$ormrz(
                    side, trans, m, n, k, l, a, lda, tau, c, ldc, work, lwork, &mut info,
                );
                info
            }

            unsafe fn trsm(
                &self, side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: $t,
                a: &[$t], lda: i32, b: &mut [$t], ldb: i32,
            ) {
                blas::$trsm(side, uplo, transa, diag, m, n, alpha, a, lda, b, ldb);
            }

            unsafe fn lascl(
                &self, kind: u8, kl: i32, ku: i32, cfrom: $t, cto: $t, m: i32, n: i32,
                a: &mut [$t], lda: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$lascl(kind, kl, ku, &[cfrom], &[cto], m, n, a, lda, &mut info);
                info
            }

            unsafe fn lange(
                &self, norm: u8, m: i32, n: i32, a: &[$t], lda: i32, work: &mut [$t],
            ) -> $t {
                lapack::$lange(norm, m, n, a, lda, work)
            }

            unsafe fn copy(&self, n: i32, x: &[$t], incx: i32, y: &mut [$t], incy: i32) {
                blas::$copy(n, x, incx, y, incy);
            }

            unsafe fn laic1(
                &self, job: i32, j: i32, x: &[$t], sest: $t, w: &[$t], gamma: $t,
                sestpr: &mut $t, s: &mut $t, c: &mut $t,
            ) {
                $laic1(&job, &j, x.as_ptr(), &sest, w.as_ptr(), &gamma, sestpr, s, c);
            }

            fn lamch(&self, cmach: u8) -> $t {
                // SAFETY: xlamch only inspects its flag argument.
                unsafe { lapack::$lamch(cmach) }
            }
        }
    };
}

macro_rules! impl_complex_kernels {
    (
        $r:ty, $c:ty, gelss = $gelss:ident, potrf = $potrf:ident, potrs = $potrs:ident,
        getrf = $getrf:ident, getrs = $getrs:ident, hetrf = $hetrf:ident, hetrs = $hetrs:ident,
        heev = $heev:ident, heevx = $heevx:ident, gesdd = $gesdd:ident, geev = $geev:ident,
        geqp3 = $geqp3:ident, tzrzf = $tzrzf:ident, unmqr = $unmqr:ident, unmrz = $unmrz:ident,
        trsm = $trsm:ident, lascl = $lascl:ident, lange = $lange:ident, copy = $copy:ident,
        laic1 = $laic1:ident
    ) => {
        impl ComplexKernels<$r> for Native {
            unsafe fn gelss(
                &self, m: i32, n: i32, nrhs: i32, a: &mut [$c], lda: i32, b: &mut [$c], ldb: i32,
                s: &mut [$r], rcond: $r, rank: &mut i32, work: &mut [$c], lwork: i32,
                rwork: &mut [$r],
            ) -> i32 {
                let mut info = 0;
                lapack::$gelss(
                    m, n, nrhs, a, lda, b, ldb, s, rcond, rank, work, lwork, rwork, &mut info,
                );
                info
            }

            unsafe fn potrf(&self, uplo: u8, n: i32, a: &mut [$c], lda: i32) -> i32 {
                let mut info = 0;
                lapack::$potrf(uplo, n, a, lda, &mut info);
                info
            }

            unsafe fn potrs(
                &self, uplo: u8, n: i32, nrhs: i32, a: &[$c], lda: i32, b: &mut [$c], ldb: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$potrs(uplo, n, nrhs, a, lda, b, ldb, &mut info);
                info
            }

            unsafe fn getrf(
                &self, m: i32, n: i32, a: &mut [$c], lda: i32, ipiv: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                lapack::$getrf(m, n, a, lda, ipiv, &mut info);
                info
            }

            unsafe fn getrs(
                &self, trans: u8, n: i32, nrhs: i32, a: &[$c], lda: i32, ipiv: &[i32],
                b: &mut [$c], ldb: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$getrs(trans, n, nrhs, a, lda, ipiv, b, ldb, &mut info);
                info
            }

            unsafe fn hetrf(
                &self, uplo: u8, n: i32, a: &mut [$c], lda: i32, ipiv: &mut [i32],
                work: &mut [$c], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$hetrf(uplo, n, a, lda, ipiv, work, lwork, &mut info);
                info
            }

            unsafe fn hetrs(
                &self, uplo: u8, n: i32, nrhs: i32, a: &[$c], lda: i32, ipiv: &[i32],
                b: &mut [$c], ldb: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$hetrs(uplo, n, nrhs, a, lda, ipiv, b, ldb, &mut info);
                info
            }

            unsafe fn heev(
                &self, jobz: u8, uplo: u8, n: i32, a: &mut [$c], lda: i32, w: &mut [$r],
                work: &mut [$c], lwork: i32, rwork: &mut [$r],
            ) -> i32 {
                let mut info = 0;
                lapack::$heev(jobz, uplo, n, a, lda, w, work, lwork, rwork, &mut info);
                info
            }

            unsafe fn heevx(
                &self, jobz: u8, range: u8, uplo: u8, n: i32, a: &mut [$c], lda: i32, vl: $r,
                vu: $r, il: i32, iu: i32, abstol: $r, m: &mut i32, w: &mut [$r], z: &mut [$c],
                ldz: i32, work: &mut [$c], lwork: i32, rwork: &mut [$r], iwork: &mut [i32],
                ifail: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                lapack::$heevx(
                    jobz, range, uplo, n, a, lda, vl, vu, il, iu, abstol, m, w, z, ldz, work,
                    lwork, rwork, iwork, ifail, &mut info,
                );
                info
            }

            unsafe fn gesdd(
                &self, jobz: u8, m: i32, n: i32, a: &mut [$c], lda: i32, s: &mut [$r],
                u: &mut [$c], ldu: i32, vt: &mut [$c], ldvt: i32, work: &mut [$c], lwork: i32,
                rwork: &mut [$r], iwork: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                lapack::$gesdd(
                    jobz, m, n, a, lda, s, u, ldu, vt, ldvt, work, lwork, rwork, iwork, &mut info,
                );
                info
            }

            unsafe fn geev(
                &self, jobvl: u8, jobvr: u8, n: i32, a: &mut [$c], lda: i32, w: &mut [$c],
                vl: &mut [$c], ldvl: i32, vr: &mut [$c], ldvr: i32, work: &mut [$c], lwork: i32,
                rwork: &mut [$r],
            ) -> i32 {
                let mut info = 0;
                lapack::$geev(
                    jobvl, jobvr, n, a, lda, w, vl, ldvl, vr, ldvr, work, lwork, rwork, &mut info,
                );
                info
            }

            unsafe fn geqp3(
                &self, m: i32, n: i32, a: &mut [$c], lda: i32, jpvt: &mut [i32], tau: &mut [$c],
                work: &mut [$c], lwork: i32, rwork: &mut [$r],
            ) -> i32 {
                let mut info = 0;
                lapack::$geqp3(m, n, a, lda, jpvt, tau, work, lwork, rwork, &mut info);
                info
            }

            unsafe fn tzrzf(
                &self, m: i32, n: i32, a: &mut [$c], lda: i32, tau: &mut [$c], work: &mut [$c],
                lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$tzrzf(m, n, a, lda, tau, work, lwork, &mut info);
                info
            }

            unsafe fn unmqr(
                &self, side: u8, trans: u8, m: i32, n: i32, k: i32, a: &[$c], lda: i32,
                tau: &[$c], c: &mut [$c], ldc: i32, work: &mut [$c], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$unmqr(side, trans, m, n, k, a, lda, tau, c, ldc, work, lwork, &mut info);
                info
            }

            unsafe fn unmrz(
                &self, side: u8, trans: u8, m: i32, n: i32, k: i32, l: i32, a: &[$c], lda: i32,
                tau: &[$c], c: &mut [$c], ldc: i32, work: &mut [$c], lwork: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$unmrz(
                    side, trans, m, n, k, l, a, lda, tau, c, ldc, work, lwork, &mut info,
                );
                info
            }

            unsafe fn trsm(
                &self, side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: $c,
                a: &[$c], lda: i32, b: &mut [$c], ldb: i32,
            ) {
                blas::$trsm(side, uplo, transa, diag, m, n, alpha, a, lda, b, ldb);
            }

            unsafe fn lascl(
                &self, kind: u8, kl: i32, ku: i32, cfrom: $r, cto: $r, m: i32, n: i32,
                a: &mut [$c], lda: i32,
            ) -> i32 {
                let mut info = 0;
                lapack::$lascl(kind, kl, ku, &[cfrom], &[cto], m, n, a, lda, &mut info);
                info
            }

            unsafe fn lange(
                &self, norm: u8, m: i32, n: i32, a: &[$c], lda: i32, work: &mut [$r],
            ) -> $r {
                lapack::$lange(norm, m, n, a, lda, work)
            }

            unsafe fn copy(&self, n: i32, x: &[$c], incx: i32, y: &mut [$c], incy: i32) {
                blas::$copy(n, x, incx, y, incy);
            }

            unsafe fn laic1(
                &self, job: i32, j: i32, x: &[$c], sest: $r, w: &[$c], gamma: $c,
                sestpr: &mut $r, s: &mut $c, c: &mut $c,
            ) {
                $laic1(&job, &j, x.as_ptr(), &sest, w.as_ptr(), &gamma, sestpr, s, c);
            }
        }
    };
}

impl_real_kernels!(
    f32, gelss = sgelss, potrf = spotrf, potrs = spotrs, getrf = sgetrf, getrs = sgetrs,
    sytrf = ssytrf, sytrs = ssytrs, syev = ssyev, syevx = ssyevx, gesdd = sgesdd, geev = sgeev,
    geqp3 = sgeqp3, tzrzf = stzrzf, ormqr = sormqr, ormrz = sormrz, trsm = strsm,
    lascl = slascl, lange = slange, copy = scopy, laic1 = slaic1_, lamch = slamch
);

impl_real_kernels!(
    f64, gelss = dgelss, potrf = dpotrf, potrs = dpotrs, getrf = dgetrf, getrs = dgetrs,
    sytrf = dsytrf, sytrs = dsytrs, syev = dsyev, syevx = dsyevx, gesdd = dgesdd, geev = dgeev,
    geqp3 = dgeqp3, tzrzf = dtzrzf, ormqr = dormqr, ormrz = dormrz, trsm = dtrsm,
    lascl = dlascl, lange = dlange, copy = dcopy, laic1 = dlaic1_, lamch = dlamch
);

impl_complex_kernels!(
    f32, c32, gelss = cgelss, potrf = cpotrf, potrs = cpotrs, getrf = cgetrf, getrs = cgetrs,
    hetrf = chetrf, hetrs = chetrs, heev = cheev, heevx = cheevx, gesdd = cgesdd, geev = cgeev,
    geqp3 = cgeqp3, tzrzf = ctzrzf, unmqr = cunmqr, unmrz = cunmrz, trsm = ctrsm,
    lascl = clascl, lange = clange, copy = ccopy, laic1 = claic1_
);

impl_complex_kernels!(
    f64, c64, gelss = zgelss, potrf = zpotrf, potrs = zpotrs, getrf = zgetrf, getrs = zgetrs,
    hetrf = zhetrf, hetrs = zhetrs, heev = zheev, heevx = zheevx, gesdd = zgesdd, geev = zgeev,
    geqp3 = zgeqp3, tzrzf = ztzrzf, unmqr = zunmqr, unmrz = zunmrz, trsm = ztrsm,
    lascl = zlascl, lange = zlange, copy = zcopy, laic1 = zlaic1_
);

impl Kernels for Native {
    fn ilaenv(
        &self, ispec: i32, name: &str, opts: &str, n1: i32, n2: i32, n3: i32, n4: i32,
    ) -> i32 {
        // SAFETY: the lengths passed match the buffers; ilaenv reads no further.
        unsafe {
            ilaenv_(
                &ispec,
                name.as_ptr().cast::<c_char>(),
                opts.as_ptr().cast::<c_char>(),
                &n1,
                &n2,
                &n3,
                &n4,
                name.len(),
                opts.len(),
            )
        }
    }
}
