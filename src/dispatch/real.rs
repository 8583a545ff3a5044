//! `Dispatch` for `f32` and `f64`: the `s`/`d` routine families.
//!
//! Every kernel call below receives dimensions read from views and slices
//! that [`crate::Lapack`] has already checked against each other.

use num_complex::Complex;
use num_traits::Zero;

use super::{gesdd_iwork_len, range_args, unconverged, ConditionEstimate, Dispatch};
use crate::eigen::{assemble_eigenvalues, repack_eigenvectors};
use crate::error::{Result, Routine};
use crate::flags::{ConditionJob, Diag, EigenJob, EigenRange, Norm, ScaleKind, Side, SvdJob, Transpose, Uplo};
use crate::kernels::{Kernels, RealKernels};
use crate::oracle;
use crate::status::{check, EigenSelection, LeastSquares, Status};
use crate::traits::{Element, RealElement};
use crate::view::{MatMut, MatRef};
use crate::workspace::Workspace;

/// Real scratch for `xgeev` eigenvectors in packed form, and its leading
/// dimension. A one-element stand-in when the vectors are not computed.
fn packed_vectors<R: RealElement>(job: EigenJob, n: usize) -> (Workspace<R>, i32) {
    if job.wants_vectors() {
        (Workspace::new(n * n), n.max(1) as i32)
    } else {
        (Workspace::probe(), 1)
    }
}

macro_rules! impl_real_dispatch {
    ($t:ty) => {
        impl Dispatch for $t {
            fn gelss<K: Kernels>(
                kernels: &K,
                mut a: MatMut<'_, $t>,
                mut b: MatMut<'_, $t>,
                s: &mut [$t],
                rcond: $t,
            ) -> Result<LeastSquares> {
                let routine = Routine::of::<$t>("gelss");
                let (m, n, nrhs) = (a.m(), a.n(), b.n());
                let (lda, ldb) = (a.lda(), b.lda());
                let mut rank = 0;
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::gelss(
                        kernels, m, n, nrhs, a.as_mut_slice(), lda, b.as_mut_slice(), ldb, s,
                        rcond, &mut rank, work, lwork,
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::gelss(
                        kernels, m, n, nrhs, a.as_mut_slice(), lda, b.as_mut_slice(), ldb, s,
                        rcond, &mut rank, work.as_mut_slice(), lwork,
                    )
                };
                let status = check(routine, info)?;
                Ok(LeastSquares { rank: rank.max(0) as usize, status })
            }

            fn potrf<K: Kernels>(kernels: &K, uplo: Uplo, mut a: MatMut<'_, $t>) -> Result<Status> {
                let routine = Routine::of::<$t>("potrf");
                let (n, lda) = (a.n(), a.lda());
                let info = unsafe {
                    <K as RealKernels<$t>>::potrf(kernels, uplo.as_u8(), n, a.as_mut_slice(), lda)
                };
                check(routine, info)
            }

            fn potrs<K: Kernels>(
                kernels: &K,
                uplo: Uplo,
                a: MatRef<'_, $t>,
                mut b: MatMut<'_, $t>,
            ) -> Result<()> {
                let routine = Routine::of::<$t>("potrs");
                let (nrhs, ldb) = (b.n(), b.lda());
                let info = unsafe {
                    <K as RealKernels<$t>>::potrs(
                        kernels, uplo.as_u8(), a.n(), nrhs, a.as_slice(), a.lda(), b.as_mut_slice(), ldb,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn getrf<K: Kernels>(kernels: &K, mut a: MatMut<'_, $t>, ipiv: &mut [i32]) -> Result<Status> {
                let routine = Routine::of::<$t>("getrf");
                let (m, n, lda) = (a.m(), a.n(), a.lda());
                let info = unsafe {
                    <K as RealKernels<$t>>::getrf(kernels, m, n, a.as_mut_slice(), lda, ipiv)
                };
                check(routine, info)
            }

            fn getrs<K: Kernels>(
                kernels: &K,
                trans: Transpose,
                a: MatRef<'_, $t>,
                ipiv: &[i32],
                mut b: MatMut<'_, $t>,
            ) -> Result<()> {
                let routine = Routine::of::<$t>("getrs");
                let (nrhs, ldb) = (b.n(), b.lda());
                let info = unsafe {
                    <K as RealKernels<$t>>::getrs(
                        kernels, trans.as_u8(), a.n(), nrhs, a.as_slice(), a.lda(), ipiv,
                        b.as_mut_slice(), ldb,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn sytrf<K: Kernels>(
                kernels: &K,
                uplo: Uplo,
                mut a: MatMut<'_, $t>,
                ipiv: &mut [i32],
            ) -> Result<Status> {
                let routine = Routine::of::<$t>("sytrf");
                let (n, lda) = (a.n(), a.lda());
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::sytrf(
                        kernels, uplo.as_u8(), n, a.as_mut_slice(), lda, ipiv, work, lwork,
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::sytrf(
                        kernels, uplo.as_u8(), n, a.as_mut_slice(), lda, ipiv, work.as_mut_slice(), lwork,
                    )
                };
                check(routine, info)
            }

            fn sytrs<K: Kernels>(
                kernels: &K,
                uplo: Uplo,
                a: MatRef<'_, $t>,
                ipiv: &[i32],
                mut b: MatMut<'_, $t>,
            ) -> Result<()> {
                let routine = Routine::of::<$t>("sytrs");
                let (nrhs, ldb) = (b.n(), b.lda());
                let info = unsafe {
                    <K as RealKernels<$t>>::sytrs(
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
                mut a: MatMut<'_, $t>,
                w: &mut [$t],
            ) -> Result<Status> {
                let routine = Routine::of::<$t>("syev");
                let (n, lda) = (a.n(), a.lda());
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::syev(
                        kernels, job.as_u8(), uplo.as_u8(), n, a.as_mut_slice(), lda, w, work, lwork,
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::syev(
                        kernels, job.as_u8(), uplo.as_u8(), n, a.as_mut_slice(), lda, w,
                        work.as_mut_slice(), lwork,
                    )
                };
                check(routine, info)
            }

            fn syevx<K: Kernels>(
                kernels: &K,
                job: EigenJob,
                range: EigenRange<$t>,
                uplo: Uplo,
                mut a: MatMut<'_, $t>,
                abstol: $t,
                w: &mut [$t],
                mut z: MatMut<'_, $t>,
            ) -> Result<EigenSelection> {
                let routine = Routine::of::<$t>("syevx");
                let order = a.ncols();
                let (n, lda, ldz) = (a.n(), a.lda(), z.lda());
                let (vl, vu, il, iu) = range_args(&range);
                let mut found = 0;
                let mut iwork = Workspace::<i32>::new(5 * order);
                let mut ifail = Workspace::<i32>::new(order);
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::syevx(
                        kernels, job.as_u8(), range.as_u8(), uplo.as_u8(), n, a.as_mut_slice(), lda,
                        vl, vu, il, iu, abstol, &mut found, w, z.as_mut_slice(), ldz, work, lwork,
                        iwork.as_mut_slice(), ifail.as_mut_slice(),
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::syevx(
                        kernels, job.as_u8(), range.as_u8(), uplo.as_u8(), n, a.as_mut_slice(), lda,
                        vl, vu, il, iu, abstol, &mut found, w, z.as_mut_slice(), ldz,
                        work.as_mut_slice(), lwork, iwork.as_mut_slice(), ifail.as_mut_slice(),
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
                mut a: MatMut<'_, $t>,
                s: &mut [$t],
                mut u: MatMut<'_, $t>,
                mut vt: MatMut<'_, $t>,
            ) -> Result<Status> {
                let routine = Routine::of::<$t>("gesdd");
                let (m, n, lda) = (a.m(), a.n(), a.lda());
                let (ldu, ldvt) = (u.lda(), vt.lda());
                let mut iwork = Workspace::<i32>::new(gesdd_iwork_len(a.nrows(), a.ncols()));
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::gesdd(
                        kernels, job.as_u8(), m, n, a.as_mut_slice(), lda, s, u.as_mut_slice(), ldu,
                        vt.as_mut_slice(), ldvt, work, lwork, iwork.as_mut_slice(),
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::gesdd(
                        kernels, job.as_u8(), m, n, a.as_mut_slice(), lda, s, u.as_mut_slice(), ldu,
                        vt.as_mut_slice(), ldvt, work.as_mut_slice(), lwork, iwork.as_mut_slice(),
                    )
                };
                check(routine, info)
            }

            fn geev<K: Kernels>(
                kernels: &K,
                left: EigenJob,
                right: EigenJob,
                mut a: MatMut<'_, $t>,
                w: &mut [Complex<$t>],
                vl: MatMut<'_, Complex<$t>>,
                vr: MatMut<'_, Complex<$t>>,
                threshold: $t,
            ) -> Result<Status> {
                let routine = Routine::of::<$t>("geev");
                let order = a.ncols();
                let (n, lda) = (a.n(), a.lda());
                let mut wr = Workspace::<$t>::new(order);
                let mut wi = Workspace::<$t>::new(order);
                let (mut pl, ldvl) = packed_vectors::<$t>(left, order);
                let (mut pr, ldvr) = packed_vectors::<$t>(right, order);
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::geev(
                        kernels, left.as_u8(), right.as_u8(), n, a.as_mut_slice(), lda,
                        wr.as_mut_slice(), wi.as_mut_slice(), pl.as_mut_slice(), ldvl,
                        pr.as_mut_slice(), ldvr, work, lwork,
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::geev(
                        kernels, left.as_u8(), right.as_u8(), n, a.as_mut_slice(), lda,
                        wr.as_mut_slice(), wi.as_mut_slice(), pl.as_mut_slice(), ldvl,
                        pr.as_mut_slice(), ldvr, work.as_mut_slice(), lwork,
                    )
                };
                let status = check(routine, info)?;

                assemble_eigenvalues(wr.as_slice(), wi.as_slice(), w);
                if status.is_success() {
                    if left.wants_vectors() {
                        let packed = MatRef::with_ld(pl.as_slice(), order, order, ldvl as usize)?;
                        repack_eigenvectors(wi.as_slice(), packed, vl, threshold);
                    }
                    if right.wants_vectors() {
                        let packed = MatRef::with_ld(pr.as_slice(), order, order, ldvr as usize)?;
                        repack_eigenvectors(wi.as_slice(), packed, vr, threshold);
                    }
                }
                Ok(status)
            }

            fn geqp3<K: Kernels>(
                kernels: &K,
                mut a: MatMut<'_, $t>,
                jpvt: &mut [i32],
                tau: &mut [$t],
            ) -> Result<()> {
                let routine = Routine::of::<$t>("geqp3");
                let (m, n, lda) = (a.m(), a.n(), a.lda());
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::geqp3(kernels, m, n, a.as_mut_slice(), lda, jpvt, tau, work, lwork)
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::geqp3(
                        kernels, m, n, a.as_mut_slice(), lda, jpvt, tau, work.as_mut_slice(), lwork,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn tzrzf<K: Kernels>(kernels: &K, mut a: MatMut<'_, $t>, tau: &mut [$t]) -> Result<()> {
                let routine = Routine::of::<$t>("tzrzf");
                let (m, n, lda) = (a.m(), a.n(), a.lda());
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::tzrzf(kernels, m, n, a.as_mut_slice(), lda, tau, work, lwork)
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::tzrzf(kernels, m, n, a.as_mut_slice(), lda, tau, work.as_mut_slice(), lwork)
                };
                check(routine, info).map(|_| ())
            }

            fn ormqr<K: Kernels>(
                kernels: &K,
                side: Side,
                trans: Transpose,
                a: MatRef<'_, $t>,
                tau: &[$t],
                mut c: MatMut<'_, $t>,
            ) -> Result<()> {
                let routine = Routine::of::<$t>("ormqr");
                let trans = trans.for_kind(<$t as Element>::KIND);
                let (m, n, ldc) = (c.m(), c.n(), c.lda());
                let k = tau.len() as i32;
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::ormqr(
                        kernels, side.as_u8(), trans, m, n, k, a.as_slice(), a.lda(), tau,
                        c.as_mut_slice(), ldc, work, lwork,
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::ormqr(
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
                a: MatRef<'_, $t>,
                tau: &[$t],
                mut c: MatMut<'_, $t>,
            ) -> Result<()> {
                let routine = Routine::of::<$t>("ormrz");
                let trans = trans.for_kind(<$t as Element>::KIND);
                let (m, n, ldc) = (c.m(), c.n(), c.lda());
                let (k, l) = (tau.len() as i32, l as i32);
                let mut work = oracle::allocate::<$t>(routine, |work, lwork| unsafe {
                    <K as RealKernels<$t>>::ormrz(
                        kernels, side.as_u8(), trans, m, n, k, l, a.as_slice(), a.lda(), tau,
                        c.as_mut_slice(), ldc, work, lwork,
                    )
                })?;
                let lwork = work.lwork();
                let info = unsafe {
                    <K as RealKernels<$t>>::ormrz(
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
                alpha: $t,
                a: MatRef<'_, $t>,
                mut b: MatMut<'_, $t>,
            ) {
                let (m, n, ldb) = (b.m(), b.n(), b.lda());
                unsafe {
                    <K as RealKernels<$t>>::trsm(
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
                cfrom: $t,
                cto: $t,
                mut a: MatMut<'_, $t>,
            ) -> Result<()> {
                let routine = Routine::of::<$t>("lascl");
                let (n, lda) = (a.n(), a.lda());
                // band storage kinds describe a square matrix of order n
                let m = if kind.is_band() { n } else { a.m() };
                let info = unsafe {
                    <K as RealKernels<$t>>::lascl(
                        kernels, kind.as_u8(), kl as i32, ku as i32, cfrom, cto, m, n,
                        a.as_mut_slice(), lda,
                    )
                };
                check(routine, info).map(|_| ())
            }

            fn lange<K: Kernels>(kernels: &K, norm: Norm, a: MatRef<'_, $t>) -> $t {
                let mut work = Workspace::<$t>::new(a.nrows());
                unsafe {
                    <K as RealKernels<$t>>::lange(
                        kernels, norm.as_u8(), a.m(), a.n(), a.as_slice(), a.lda(), work.as_mut_slice(),
                    )
                }
            }

            fn copy<K: Kernels>(kernels: &K, n: usize, x: &[$t], incx: i32, y: &mut [$t], incy: i32) {
                unsafe { <K as RealKernels<$t>>::copy(kernels, n as i32, x, incx, y, incy) }
            }

            fn laic1<K: Kernels>(
                kernels: &K,
                job: ConditionJob,
                x: &[$t],
                sest: $t,
                w: &[$t],
                gamma: $t,
            ) -> ConditionEstimate<$t> {
                let mut est = ConditionEstimate { sestpr: Zero::zero(), s: Zero::zero(), c: Zero::zero() };
                unsafe {
                    <K as RealKernels<$t>>::laic1(
                        kernels, job.as_i32(), x.len() as i32, x, sest, w, gamma, &mut est.sestpr,
                        &mut est.s, &mut est.c,
                    )
                }
                est
            }
        }
    };
}

impl_real_dispatch!(f32);
impl_real_dispatch!(f64);
