//! `Dispatch` for `Complex<f32>` and `Complex<f64>`: the `c`/`z` routine
//! families.
//!
//! Differences from the real families: symmetric-indefinite and symmetric
//! eigen routines are the Hermitian ones, orthogonal multiplies are the
//! unitary ones, and several routines take an extra real scratch array
//! sized here.

use num_complex::Complex;
use num_traits::Zero;

use super::{
    gesdd_iwork_len, gesdd_rwork_len, range_args, unconverged, ConditionEstimate, Dispatch,
};
use crate::error::{Result, Routine};
use crate::flags::{ConditionJob, Diag, EigenJob, EigenRange, Norm, ScaleKind, Side, SvdJob, Transpose, Uplo};
use crate::kernels::{ComplexKernels, Kernels};
use crate::oracle;
use crate::status::{check, EigenSelection, LeastSquares, Status};
use crate::traits::Element;
use crate::view::{MatMut, MatRef};
use crate::workspace::Workspace;

macro_rules! impl_complex_dispatch {
    ($r:ty) => {
        impl Dispatch for Complex<$r> {
            fn gelss<K: Kernels>(
                kernels: &K,
                mut a: MatMut<'_, Complex<$r>>,
                mut b: MatMut<'_, Complex<$r>>,
                s: &mut [$r],
                rcond: $r,
            ) -> Result<LeastSquares> {
                let routine = Routine::of::<Complex<$r>>("gelss");
                let (m, n, nrhs) = (a.m(), a.n(), b.n());
                let (lda, ldb) = (a.lda(), b.lda());
                let mut rank = 0;
                let mut rwork = Workspace::<$r>::new(5 * a.nrows().min(a.ncols()));
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::gelss(
                        kernels, m, n, nrhs, a.as_mut_slice(), lda, b.as_mut_slice(), ldb, s,
                        rcond, &mut rank, work, lwork, rwork.as_mut_slice(),
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::gelss(
                        kernels, m, n, nrhs, a.as_mut_slice(), lda, b.as_mut_slice(), ldb, s,
                        rcond, &mut rank, work.as_mut_slice(), lwork, rwork.as_mut_slice(),
                    )
                };
                let status = check(routine, info)?;
                Ok(LeastSquares { rank: rank.max(0) as usize, status })
            }

            fn potrf<K: Kernels>(
                kernels: &K,
                uplo: Uplo,
                mut a: MatMut<'_, Complex<$r>>,
            ) -> Result<Status> {
                let routine = Routine::of::<Complex<$r>>("potrf");
                let (n, lda) = (a.n(), a.lda());
                let info = unsafe {
                    <K as ComplexKernels<$r>>::potrf(kernels, uplo.as_u8(), n, a.as_mut_slice(), lda)
                };
                check(routine, info)
            }

            fn potrs<K: Kernels>(
                kernels: &K,
                uplo: Uplo,
                a: MatRef<'_, Complex<$r>>,
                mut b: MatMut<'_, Complex<$r>>,
            ) -> Result<()> {
                let routine = Routine::of::<Complex<$r>>("potrs");
                let (nrhs, ldb) = (b.n(), b.lda());
                let info = unsafe {
                    <K as ComplexKernels<$r>>::potrs(
                        kernels, uplo.as_u8(), a.n(), nrhs, a.as_slice(), a.lda(), b.as_mut_slice(), ldb,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn getrf<K: Kernels>(
                kernels: &K,
                mut a: MatMut<'_, Complex<$r>>,
                ipiv: &mut [i32],
            ) -> Result<Status> {
                let routine = Routine::of::<Complex<$r>>("getrf");
                let (m, n, lda) = (a.m(), a.n(), a.lda());
                let info = unsafe {
                    <K as ComplexKernels<$r>>::getrf(kernels, m, n, a.as_mut_slice(), lda, ipiv)
                };
                check(routine, info)
            }

            fn getrs<K: Kernels>(
                kernels: &K,
                trans: Transpose,
                a: MatRef<'_, Complex<$r>>,
                ipiv: &[i32],
                mut b: MatMut<'_, Complex<$r>>,
            ) -> Result<()> {
                let routine = Routine::of::<Complex<$r>>("getrs");
                let (nrhs, ldb) = (b.n(), b.lda());
                let info = unsafe {
                    <K as ComplexKernels<$r>>::getrs(
                        kernels, trans.as_u8(), a.n(), nrhs, a.as_slice(), a.lda(), ipiv,
                        b.as_mut_slice(), ldb,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn sytrf<K: Kernels>(
                kernels: &K,
                uplo: Uplo,
                mut a: MatMut<'_, Complex<$r>>,
                ipiv: &mut [i32],
            ) -> Result<Status> {
                let routine = Routine::of::<Complex<$r>>("hetrf");
                let (n, lda) = (a.n(), a.lda());
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::hetrf(
                        kernels, uplo.as_u8(), n, a.as_mut_slice(), lda, ipiv, work, lwork,
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::hetrf(
                        kernels, uplo.as_u8(), n, a.as_mut_slice(), lda, ipiv, work.as_mut_slice(), lwork,
                    )
                };
                check(routine, info)
            }

            fn sytrs<K: Kernels>(
                kernels: &K,
                uplo: Uplo,
                a: MatRef<'_, Complex<$r>>,
                ipiv: &[i32],
                mut b: MatMut<'_, Complex<$r>>,
            ) -> Result<()> {
                let routine = Routine::of::<Complex<$r>>("hetrs");
                let (nrhs, ldb) = (b.n(), b.lda());
                let info = unsafe {
                    <K as ComplexKernels<$r>>::hetrs(
                        kernels, uplo.as_u8(), a.n(), nrhs, a.as_slice(), a.lda(), ipiv,
                        b.as_mut_slice(), ldb,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn syev<K: Kernels>(
                kernels: &K,
                job: EigenJob,
                uplo: Uplo,
                mut a: MatMut<'_, Complex<$r>>,
                w: &mut [$r],
            ) -> Result<Status> {
                let routine = Routine::of::<Complex<$r>>("heev");
                let (n, lda) = (a.n(), a.lda());
                let mut rwork = Workspace::<$r>::new((3 * a.ncols()).saturating_sub(2).max(1));
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::heev(
                        kernels, job.as_u8(), uplo.as_u8(), n, a.as_mut_slice(), lda, w, work, lwork,
                        rwork.as_mut_slice(),
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::heev(
                        kernels, job.as_u8(), uplo.as_u8(), n, a.as_mut_slice(), lda, w,
                        work.as_mut_slice(), lwork, rwork.as_mut_slice(),
                    )
                };
                check(routine, info)
            }

            fn syevx<K: Kernels>(
                kernels: &K,
                job: EigenJob,
                range: EigenRange<$r>,
                uplo: Uplo,
                mut a: MatMut<'_, Complex<$r>>,
                abstol: $r,
                w: &mut [$r],
                mut z: MatMut<'_, Complex<$r>>,
            ) -> Result<EigenSelection> {
                let routine = Routine::of::<Complex<$r>>("heevx");
                let order = a.ncols();
                let (n, lda, ldz) = (a.n(), a.lda(), z.lda());
                let (vl, vu, il, iu) = range_args(&range);
                let mut found = 0;
                let mut rwork = Workspace::<$r>::new(7 * order);
                let mut iwork = Workspace::<i32>::new(5 * order);
                let mut ifail = Workspace::<i32>::new(order);
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::heevx(
                        kernels, job.as_u8(), range.as_u8(), uplo.as_u8(), n, a.as_mut_slice(), lda,
                        vl, vu, il, iu, abstol, &mut found, w, z.as_mut_slice(), ldz, work, lwork,
                        rwork.as_mut_slice(), iwork.as_mut_slice(), ifail.as_mut_slice(),
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::heevx(
                        kernels, job.as_u8(), range.as_u8(), uplo.as_u8(), n, a.as_mut_slice(), lda,
                        vl, vu, il, iu, abstol, &mut found, w, z.as_mut_slice(), ldz,
                        work.as_mut_slice(), lwork, rwork.as_mut_slice(), iwork.as_mut_slice(),
                        ifail.as_mut_slice(),
                    )
                };
                let status = check(routine, info)?;
                Ok(EigenSelection {
                    found: found.max(0) as usize,
                    unconverged: unconverged(status, ifail.as_slice()),
                    status,
                })
            }

            fn gesdd<K: Kernels>(
                kernels: &K,
                job: SvdJob,
                mut a: MatMut<'_, Complex<$r>>,
                s: &mut [$r],
                mut u: MatMut<'_, Complex<$r>>,
                mut vt: MatMut<'_, Complex<$r>>,
            ) -> Result<Status> {
                let routine = Routine::of::<Complex<$r>>("gesdd");
                let (m, n, lda) = (a.m(), a.n(), a.lda());
                let (ldu, ldvt) = (u.lda(), vt.lda());
                let (rows, cols) = a.shape();
                let mut rwork = Workspace::<$r>::new(gesdd_rwork_len(job, rows, cols));
                let mut iwork = Workspace::<i32>::new(gesdd_iwork_len(rows, cols));
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::gesdd(
                        kernels, job.as_u8(), m, n, a.as_mut_slice(), lda, s, u.as_mut_slice(), ldu,
                        vt.as_mut_slice(), ldvt, work, lwork, rwork.as_mut_slice(), iwork.as_mut_slice(),
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::gesdd(
                        kernels, job.as_u8(), m, n, a.as_mut_slice(), lda, s, u.as_mut_slice(), ldu,
                        vt.as_mut_slice(), ldvt, work.as_mut_slice(), lwork, rwork.as_mut_slice(),
                        iwork.as_mut_slice(),
                    )
                };
                check(routine, info)
            }

            fn geev<K: Kernels>(
                kernels: &K,
                left: EigenJob,
                right: EigenJob,
                mut a: MatMut<'_, Complex<$r>>,
                w: &mut [Complex<$r>],
                mut vl: MatMut<'_, Complex<$r>>,
                mut vr: MatMut<'_, Complex<$r>>,
                _threshold: $r,
            ) -> Result<Status> {
                let routine = Routine::of::<Complex<$r>>("geev");
                let (n, lda) = (a.n(), a.lda());
                let (ldvl, ldvr) = (vl.lda(), vr.lda());
                let mut rwork = Workspace::<$r>::new(2 * a.ncols());
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::geev(
                        kernels, left.as_u8(), right.as_u8(), n, a.as_mut_slice(), lda, w,
                        vl.as_mut_slice(), ldvl, vr.as_mut_slice(), ldvr, work, lwork,
                        rwork.as_mut_slice(),
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::geev(
                        kernels, left.as_u8(), right.as_u8(), n, a.as_mut_slice(), lda, w,
                        vl.as_mut_slice(), ldvl, vr.as_mut_slice(), ldvr, work.as_mut_slice(), lwork,
                        rwork.as_mut_slice(),
                    )
                };
                check(routine, info)
            }

            fn geqp3<K: Kernels>(
                kernels: &K,
                mut a: MatMut<'_, Complex<$r>>,
                jpvt: &mut [i32],
                tau: &mut [Complex<$r>],
            ) -> Result<()> {
                let routine = Routine::of::<Complex<$r>>("geqp3");
                let (m, n, lda) = (a.m(), a.n(), a.lda());
                let mut rwork = Workspace::<$r>::new(2 * a.ncols());
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::geqp3(
                        kernels, m, n, a.as_mut_slice(), lda, jpvt, tau, work, lwork, rwork.as_mut_slice(),
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::geqp3(
                        kernels, m, n, a.as_mut_slice(), lda, jpvt, tau, work.as_mut_slice(), lwork,
                        rwork.as_mut_slice(),
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn tzrzf<K: Kernels>(
                kernels: &K,
                mut a: MatMut<'_, Complex<$r>>,
                tau: &mut [Complex<$r>],
            ) -> Result<()> {
                let routine = Routine::of::<Complex<$r>>("tzrzf");
                let (m, n, lda) = (a.m(), a.n(), a.lda());
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::tzrzf(kernels, m, n, a.as_mut_slice(), lda, tau, work, lwork)
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::tzrzf(
                        kernels, m, n, a.as_mut_slice(), lda, tau, work.as_mut_slice(), lwork,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn ormqr<K: Kernels>(
                kernels: &K,
                side: Side,
                trans: Transpose,
                a: MatRef<'_, Complex<$r>>,
                tau: &[Complex<$r>],
                mut c: MatMut<'_, Complex<$r>>,
            ) -> Result<()> {
                let routine = Routine::of::<Complex<$r>>("unmqr");
                let trans = trans.for_kind(<Complex<$r> as Element>::KIND);
                let (m, n, ldc) = (c.m(), c.n(), c.lda());
                let k = tau.len() as i32;
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::unmqr(
                        kernels, side.as_u8(), trans, m, n, k, a.as_slice(), a.lda(), tau,
                        c.as_mut_slice(), ldc, work, lwork,
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::unmqr(
                        kernels, side.as_u8(), trans, m, n, k, a.as_slice(), a.lda(), tau,
                        c.as_mut_slice(), ldc, work.as_mut_slice(), lwork,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn ormrz<K: Kernels>(
                kernels: &K,
                side: Side,
                trans: Transpose,
                l: usize,
                a: MatRef<'_, Complex<$r>>,
                tau: &[Complex<$r>],
                mut c: MatMut<'_, Complex<$r>>,
            ) -> Result<()> {
                let routine = Routine::of::<Complex<$r>>("unmrz");
                let trans = trans.for_kind(<Complex<$r> as Element>::KIND);
                let (m, n, ldc) = (c.m(), c.n(), c.lda());
                let (k, l) = (tau.len() as i32, l as i32);
                let mut work = oracle::allocate::<Complex<$r>>(routine, |work, lwork| unsafe {
                    <K as ComplexKernels<$r>>::unmrz(
                        kernels, side.as_u8(), trans, m, n, k, l, a.as_slice(), a.lda(), tau,
                        c.as_mut_slice(), ldc, work, lwork,
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as ComplexKernels<$r>>::unmrz(
                        kernels, side.as_u8(), trans, m, n, k, l, a.as_slice(), a.lda(), tau,
                        c.as_mut_slice(), ldc, work.as_mut_slice(), lwork,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn trsm<K: Kernels>(
                kernels: &K,
                side: Side,
                uplo: Uplo,
                trans: Transpose,
                diag: Diag,
                alpha: Complex<$r>,
                a: MatRef<'_, Complex<$r>>,
                mut b: MatMut<'_, Complex<$r>>,
            ) {
                let (m, n, ldb) = (b.m(), b.n(), b.lda());
                unsafe {
                    <K as ComplexKernels<$r>>::trsm(
                        kernels, side.as_u8(), uplo.as_u8(), trans.as_u8(), diag.as_u8(), m, n, alpha,
                        a.as_slice(), a.lda(), b.as_mut_slice(), ldb,
                    )
                }
            }

            fn lascl<K: Kernels>(
                kernels: &K,
                kind: ScaleKind,
                kl: usize,
                ku: usize,
                cfrom: $r,
                cto: $r,
                mut a: MatMut<'_, Complex<$r>>,
            ) -> Result<()> {
                let routine = Routine::of::<Complex<$r>>("lascl");
                let (n, lda) = (a.n(), a.lda());
                // band storage kinds describe a square matrix of order n
                let m = if kind.is_band() { n } else { a.m() };
                let info = unsafe {
                    <K as ComplexKernels<$r>>::lascl(
                        kernels, kind.as_u8(), kl as i32, ku as i32, cfrom, cto, m, n,
                        a.as_mut_slice(), lda,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn lange<K: Kernels>(kernels: &K, norm: Norm, a: MatRef<'_, Complex<$r>>) -> $r {
                let mut work = Workspace::<$r>::new(a.nrows());
                unsafe {
                    <K as ComplexKernels<$r>>::lange(
                        kernels, norm.as_u8(), a.m(), a.n(), a.as_slice(), a.lda(), work.as_mut_slice(),
                    )
                }
            }

            fn copy<K: Kernels>(
                kernels: &K,
                n: usize,
                x: &[Complex<$r>],
                incx: i32,
                y: &mut [Complex<$r>],
                incy: i32,
            ) {
                unsafe { <K as ComplexKernels<$r>>::copy(kernels, n as i32, x, incx, y, incy) }
            }

            fn laic1<K: Kernels>(
                kernels: &K,
                job: ConditionJob,
                x: &[Complex<$r>],
                sest: $r,
                w: &[Complex<$r>],
                gamma: Complex<$r>,
            ) -> ConditionEstimate<Complex<$r>> {
                let mut est = ConditionEstimate { sestpr: Zero::zero(), s: Zero::zero(), c: Zero::zero() };
                unsafe {
                    <K as ComplexKernels<$r>>::laic1(
                        kernels, job.as_i32(), x.len() as i32, x, sest, w, gamma, &mut est.sestpr,
                        &mut est.s, &mut est.c,
                    )
                }
                est
            }
        }
    };
}

impl_complex_dispatch!(f32);
impl_complex_dispatch!(f64);
