//! The [`Lapack`] facade.

use std::sync::OnceLock;

use num_complex::Complex;

use crate::backend::{Backend, DefaultKernels};
use crate::dispatch::{ConditionEstimate, Dispatch};
use crate::eigen::DEFAULT_CONJUGATE_THRESHOLD;
use crate::error::{LapackError, Result, Routine};
use crate::flags::{ConditionJob, Diag, EigenJob, EigenRange, Norm, ScaleKind, Side, SvdJob, Transpose, Uplo};
use crate::kernels::Kernels;
use crate::machine::{MachineCache, MachineConstants};
use crate::status::{check, EigenSelection, LeastSquares, Status};
use crate::traits::{Element, RealElement};
use crate::view::{MatMut, MatRef};

/// Runtime tunables of a [`Lapack`] facade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// `|Im(lambda)|` below which a real `geev` eigenvalue counts as real
    /// when repacking eigenvectors. Absolute, independent of matrix scale
    /// and precision.
    pub conjugate_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            conjugate_threshold: DEFAULT_CONJUGATE_THRESHOLD,
        }
    }
}

/// Routine name by family: `real` for `s`/`d`, `complex` for `c`/`z`.
fn routine_for<T: Element>(real: &'static str, complex: &'static str) -> Routine {
    if T::KIND.is_complex() {
        Routine::of::<T>(complex)
    } else {
        Routine::of::<T>(real)
    }
}

fn square(routine: Routine, what: &'static str, shape: (usize, usize)) -> Result<usize> {
    if shape.0 != shape.1 {
        return Err(LapackError::DimensionMismatch {
            routine,
            what,
            expected: (shape.0, shape.0),
            got: shape,
        });
    }
    Ok(shape.0)
}

fn rows_eq(routine: Routine, what: &'static str, shape: (usize, usize), rows: usize) -> Result<()> {
    if shape.0 != rows {
        return Err(LapackError::DimensionMismatch {
            routine,
            what,
            expected: (rows, shape.1),
            got: shape,
        });
    }
    Ok(())
}

fn at_least(routine: Routine, what: &'static str, shape: (usize, usize), min: (usize, usize)) -> Result<()> {
    if shape.0 < min.0 || shape.1 < min.1 {
        return Err(LapackError::DimensionMismatch {
            routine,
            what,
            expected: min,
            got: shape,
        });
    }
    Ok(())
}

fn min_len(routine: Routine, what: &'static str, got: usize, needed: usize) -> Result<()> {
    if got < needed {
        return Err(LapackError::BufferTooSmall { routine, what, needed, got });
    }
    Ok(())
}

fn fits_i32(routine: Routine, value: usize, reason: &'static str) -> Result<i32> {
    i32::try_from(value).map_err(|_| LapackError::InvalidParameter { routine, reason })
}

/// Elements a strided BLAS vector of `n` entries spans.
fn strided_len(n: usize, inc: i32) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    (n - 1).checked_mul(inc.unsigned_abs() as usize)?.checked_add(1)
}

/// Type-generic front end to LAPACK and BLAS.
///
/// Every method is generic over the element type `T` (`f32`, `f64`,
/// `Complex<f32>`, `Complex<f64>`) and routes to that kind's routine.
/// Before any kernel runs, operand shapes and slice lengths are checked;
/// routines with a workspace query are then queried and given exactly the
/// reported scratch.
///
/// Negative `info` codes become [`LapackError::InvalidArgument`]; positive
/// ones come back as [`Status::Degenerate`] inside the `Ok` value.
///
/// ```
/// use numeris_lapack::{Lapack, LapackError};
/// use numeris_lapack::kernels::NoKernels;
/// use numeris_lapack::{MatMut, Uplo};
///
/// let lapack = Lapack::<NoKernels>::unavailable();
/// let mut a = [4.0_f64];
/// let err = lapack.potrf(Uplo::Lower, MatMut::new(&mut a, 1, 1).unwrap()).unwrap_err();
/// assert!(matches!(err, LapackError::BackendUnavailable { .. }));
/// ```
#[derive(Debug)]
pub struct Lapack<K = DefaultKernels> {
    backend: Backend<K>,
    settings: Settings,
    machine: MachineCache,
}

impl Lapack<DefaultKernels> {
    /// Facade over the backend this build was compiled with.
    pub fn detect() -> Self {
        Self::new(Backend::detect())
    }

    /// Process-wide facade over the default backend, created on first use.
    pub fn global() -> &'static Lapack<DefaultKernels> {
        static GLOBAL: OnceLock<Lapack<DefaultKernels>> = OnceLock::new();
        GLOBAL.get_or_init(Lapack::detect)
    }
}

impl<K: Kernels> Lapack<K> {
    pub fn new(backend: Backend<K>) -> Self {
        Self::with_settings(backend, Settings::default())
    }

    pub fn with_settings(backend: Backend<K>, settings: Settings) -> Self {
        Self {
            backend,
            settings,
            machine: MachineCache::new(),
        }
    }

    /// Facade running every routine on `kernels`.
    pub fn native(kernels: K) -> Self {
        Self::new(Backend::Native(kernels))
    }

    /// Facade on which every routine reports `BackendUnavailable`.
    pub fn unavailable() -> Self {
        Self::new(Backend::Unavailable)
    }

    pub fn backend(&self) -> &Backend<K> {
        &self.backend
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    // ── Least squares and linear solves ─────────────────────────────

    /// Minimum-norm least-squares solution of `A X = B` via SVD (`xgelss`).
    ///
    /// `a` is `m x n` and is overwritten by its right singular vectors. `b`
    /// must have `max(m, n)` rows; on return its first `n` rows hold `X`.
    /// `s` receives the `min(m, n)` singular values in decreasing order.
    /// Singular values at or below `rcond * s[0]` are treated as zero;
    /// a negative `rcond` means machine precision.
    pub fn gelss<T: Dispatch>(
        &self,
        a: MatMut<'_, T>,
        b: MatMut<'_, T>,
        s: &mut [T::Real],
        rcond: T::Real,
    ) -> Result<LeastSquares> {
        let routine = Routine::of::<T>("gelss");
        let kernels = self.backend.kernels(routine)?;
        let (m, n) = a.shape();
        rows_eq(routine, "b", b.shape(), m.max(n))?;
        min_len(routine, "s", s.len(), m.min(n))?;
        T::gelss(kernels, a, b, s, rcond)
    }

    /// Cholesky factorization of a symmetric/Hermitian positive-definite
    /// matrix (`xpotrf`). Only the `uplo` triangle is referenced and
    /// overwritten.
    ///
    /// `Degenerate(k)`: the leading minor of order `k` is not positive
    /// definite.
    pub fn potrf<T: Dispatch>(&self, uplo: Uplo, a: MatMut<'_, T>) -> Result<Status> {
        let routine = Routine::of::<T>("potrf");
        let kernels = self.backend.kernels(routine)?;
        square(routine, "a", a.shape())?;
        T::potrf(kernels, uplo, a)
    }

    /// Solve `A X = B` with the factor from [`potrf`](Self::potrf) (`xpotrs`).
    pub fn potrs<T: Dispatch>(&self, uplo: Uplo, a: MatRef<'_, T>, b: MatMut<'_, T>) -> Result<()> {
        let routine = Routine::of::<T>("potrs");
        let kernels = self.backend.kernels(routine)?;
        let n = square(routine, "a", a.shape())?;
        rows_eq(routine, "b", b.shape(), n)?;
        T::potrs(kernels, uplo, a, b)
    }

    /// LU factorization with partial pivoting (`xgetrf`).
    ///
    /// `ipiv` receives `min(m, n)` one-based row interchanges.
    /// `Degenerate(k)`: `U[k-1][k-1]` is exactly zero.
    pub fn getrf<T: Dispatch>(&self, a: MatMut<'_, T>, ipiv: &mut [i32]) -> Result<Status> {
        let routine = Routine::of::<T>("getrf");
        let kernels = self.backend.kernels(routine)?;
        let (m, n) = a.shape();
        min_len(routine, "ipiv", ipiv.len(), m.min(n))?;
        T::getrf(kernels, a, ipiv)
    }

    /// Solve `op(A) X = B` with the factor from [`getrf`](Self::getrf) (`xgetrs`).
    pub fn getrs<T: Dispatch>(
        &self,
        trans: Transpose,
        a: MatRef<'_, T>,
        ipiv: &[i32],
        b: MatMut<'_, T>,
    ) -> Result<()> {
        let routine = Routine::of::<T>("getrs");
        let kernels = self.backend.kernels(routine)?;
        let n = square(routine, "a", a.shape())?;
        min_len(routine, "ipiv", ipiv.len(), n)?;
        rows_eq(routine, "b", b.shape(), n)?;
        T::getrs(kernels, trans, a, ipiv, b)
    }

    /// Bunch-Kaufman factorization of a symmetric (real) or Hermitian
    /// (complex) indefinite matrix: `xsytrf` or `xhetrf`.
    ///
    /// `Degenerate(k)`: `D[k-1][k-1]` is exactly zero.
    pub fn sytrf<T: Dispatch>(&self, uplo: Uplo, a: MatMut<'_, T>, ipiv: &mut [i32]) -> Result<Status> {
        let routine = routine_for::<T>("sytrf", "hetrf");
        let kernels = self.backend.kernels(routine)?;
        let n = square(routine, "a", a.shape())?;
        min_len(routine, "ipiv", ipiv.len(), n)?;
        T::sytrf(kernels, uplo, a, ipiv)
    }

    /// Solve with the factor from [`sytrf`](Self::sytrf): `xsytrs` or `xhetrs`.
    pub fn sytrs<T: Dispatch>(
        &self,
        uplo: Uplo,
        a: MatRef<'_, T>,
        ipiv: &[i32],
        b: MatMut<'_, T>,
    ) -> Result<()> {
        let routine = routine_for::<T>("sytrs", "hetrs");
        let kernels = self.backend.kernels(routine)?;
        let n = square(routine, "a", a.shape())?;
        min_len(routine, "ipiv", ipiv.len(), n)?;
        rows_eq(routine, "b", b.shape(), n)?;
        T::sytrs(kernels, uplo, a, ipiv, b)
    }

    // ── Eigen and singular value decompositions ─────────────────────

    /// All eigenvalues (and optionally eigenvectors) of a symmetric or
    /// Hermitian matrix: `xsyev` or `xheev`.
    ///
    /// `w` receives the eigenvalues in ascending order; with
    /// [`EigenJob::ValuesAndVectors`] `a` is overwritten by the orthonormal
    /// eigenvectors. `Degenerate(k)`: `k` off-diagonal elements of the
    /// tridiagonal form did not converge.
    pub fn syev<T: Dispatch>(
        &self,
        job: EigenJob,
        uplo: Uplo,
        a: MatMut<'_, T>,
        w: &mut [T::Real],
    ) -> Result<Status> {
        let routine = routine_for::<T>("syev", "heev");
        let kernels = self.backend.kernels(routine)?;
        let n = square(routine, "a", a.shape())?;
        min_len(routine, "w", w.len(), n)?;
        T::syev(kernels, job, uplo, a, w)
    }

    /// Selected eigenvalues (and optionally eigenvectors) of a symmetric or
    /// Hermitian matrix: `xsyevx` or `xheevx`.
    ///
    /// With vectors, `z` needs `n` rows and a column per requested
    /// eigenvalue (`n` for [`EigenRange::All`] and [`EigenRange::Values`]);
    /// without, it is not referenced and may be empty.
    #[allow(clippy::too_many_arguments)]
    pub fn syevx<T: Dispatch>(
        &self,
        job: EigenJob,
        range: EigenRange<T::Real>,
        uplo: Uplo,
        a: MatMut<'_, T>,
        abstol: T::Real,
        w: &mut [T::Real],
        z: MatMut<'_, T>,
    ) -> Result<EigenSelection> {
        let routine = routine_for::<T>("syevx", "heevx");
        let kernels = self.backend.kernels(routine)?;
        let n = square(routine, "a", a.shape())?;
        min_len(routine, "w", w.len(), n)?;
        let columns = match range {
            EigenRange::All => n,
            EigenRange::Values { lower, upper } => {
                if !(lower < upper) {
                    return Err(LapackError::InvalidParameter {
                        routine,
                        reason: "eigenvalue interval is empty",
                    });
                }
                n
            }
            EigenRange::Indices { first, last } => {
                if first > last || last >= n {
                    return Err(LapackError::InvalidParameter {
                        routine,
                        reason: "eigenvalue index range is empty or out of bounds",
                    });
                }
                last - first + 1
            }
        };
        if job.wants_vectors() {
            at_least(routine, "z", z.shape(), (n, columns))?;
        }
        T::syevx(kernels, job, range, uplo, a, abstol, w, z)
    }

    /// Singular value decomposition by divide and conquer (`xgesdd`).
    ///
    /// Required shapes of `u` and `vt` for an `m x n` `a`, with
    /// `k = min(m, n)`:
    ///
    /// | job | `u` | `vt` |
    /// |---|---|---|
    /// | `All` | `m x m` | `n x n` |
    /// | `Thin` | `m x k` | `k x n` |
    /// | `Overwrite`, `m >= n` | unused | `n x n` |
    /// | `Overwrite`, `m < n` | `m x m` | unused |
    /// | `None` | unused | unused |
    ///
    /// Unused outputs may be empty views.
    pub fn gesdd<T: Dispatch>(
        &self,
        job: SvdJob,
        a: MatMut<'_, T>,
        s: &mut [T::Real],
        u: MatMut<'_, T>,
        vt: MatMut<'_, T>,
    ) -> Result<Status> {
        let routine = Routine::of::<T>("gesdd");
        let kernels = self.backend.kernels(routine)?;
        let (m, n) = a.shape();
        let k = m.min(n);
        min_len(routine, "s", s.len(), k)?;
        let (u_shape, vt_shape) = match job {
            SvdJob::All => (Some((m, m)), Some((n, n))),
            SvdJob::Thin => (Some((m, k)), Some((k, n))),
            SvdJob::Overwrite if m >= n => (None, Some((n, n))),
            SvdJob::Overwrite => (Some((m, m)), None),
            SvdJob::None => (None, None),
        };
        if let Some(min) = u_shape {
            at_least(routine, "u", u.shape(), min)?;
        }
        if let Some(min) = vt_shape {
            at_least(routine, "vt", vt.shape(), min)?;
        }
        T::gesdd(kernels, job, a, s, u, vt)
    }

    /// Eigenvalues and optionally left/right eigenvectors of a general
    /// square matrix (`xgeev`).
    ///
    /// Results are complex for every element kind. For real input, complex
    /// conjugate eigenvector pairs are expanded from LAPACK's packed real
    /// form using [`Settings::conjugate_threshold`]. `vl`/`vr` need `n x n`
    /// when requested and may be empty otherwise.
    ///
    /// `Degenerate(k)`: the QR algorithm failed; eigenvalues `k..n` have
    /// converged, and no eigenvectors were computed.
    #[allow(clippy::too_many_arguments)]
    pub fn geev<T: Dispatch>(
        &self,
        left: EigenJob,
        right: EigenJob,
        a: MatMut<'_, T>,
        w: &mut [Complex<T::Real>],
        vl: MatMut<'_, Complex<T::Real>>,
        vr: MatMut<'_, Complex<T::Real>>,
    ) -> Result<Status> {
        let routine = Routine::of::<T>("geev");
        let kernels = self.backend.kernels(routine)?;
        let n = square(routine, "a", a.shape())?;
        min_len(routine, "w", w.len(), n)?;
        if left.wants_vectors() {
            at_least(routine, "vl", vl.shape(), (n, n))?;
        }
        if right.wants_vectors() {
            at_least(routine, "vr", vr.shape(), (n, n))?;
        }
        let threshold = T::Real::from_f64(self.settings.conjugate_threshold);
        T::geev(kernels, left, right, a, w, vl, vr, threshold)
    }

    // ── Orthogonal factorizations ───────────────────────────────────

    /// QR factorization with column pivoting, `A P = Q R` (`xgeqp3`).
    ///
    /// On entry a nonzero `jpvt[j]` moves column `j` to the front; on exit
    /// `jpvt[j] = k` means column `j` of `A P` was column `k` (one-based)
    /// of `A`. `tau` receives `min(m, n)` reflector scales.
    pub fn geqp3<T: Dispatch>(&self, a: MatMut<'_, T>, jpvt: &mut [i32], tau: &mut [T]) -> Result<()> {
        let routine = Routine::of::<T>("geqp3");
        let kernels = self.backend.kernels(routine)?;
        let (m, n) = a.shape();
        min_len(routine, "jpvt", jpvt.len(), n)?;
        min_len(routine, "tau", tau.len(), m.min(n))?;
        T::geqp3(kernels, a, jpvt, tau)
    }

    /// Reduce an upper trapezoidal `m x n` (`m <= n`) matrix to upper
    /// triangular form by orthogonal/unitary transformations (`xtzrzf`).
    pub fn tzrzf<T: Dispatch>(&self, a: MatMut<'_, T>, tau: &mut [T]) -> Result<()> {
        let routine = Routine::of::<T>("tzrzf");
        let kernels = self.backend.kernels(routine)?;
        min_len(routine, "tau", tau.len(), a.nrows())?;
        T::tzrzf(kernels, a, tau)
    }

    /// Overwrite `C` with `op(Q) C` or `C op(Q)` where `Q` is the product
    /// of the `tau.len()` reflectors stored in the columns of `a`
    /// (`xormqr` or `xunmqr`).
    pub fn ormqr<T: Dispatch>(
        &self,
        side: Side,
        trans: Transpose,
        a: MatRef<'_, T>,
        tau: &[T],
        c: MatMut<'_, T>,
    ) -> Result<()> {
        let routine = routine_for::<T>("ormqr", "unmqr");
        let kernels = self.backend.kernels(routine)?;
        let order = match side {
            Side::Left => c.nrows(),
            Side::Right => c.ncols(),
        };
        at_least(routine, "a", a.shape(), (order, tau.len()))?;
        fits_i32(routine, tau.len(), "too many reflectors")?;
        T::ormqr(kernels, side, trans, a, tau, c)
    }

    /// Overwrite `C` with `op(Z) C` or `C op(Z)` where `Z` comes from
    /// [`tzrzf`](Self::tzrzf): `tau.len()` reflectors stored in the rows
    /// of `a`, each with `l` meaningful trailing entries (`xormrz` or
    /// `xunmrz`).
    #[allow(clippy::too_many_arguments)]
    pub fn ormrz<T: Dispatch>(
        &self,
        side: Side,
        trans: Transpose,
        l: usize,
        a: MatRef<'_, T>,
        tau: &[T],
        c: MatMut<'_, T>,
    ) -> Result<()> {
        let routine = routine_for::<T>("ormrz", "unmrz");
        let kernels = self.backend.kernels(routine)?;
        let order = match side {
            Side::Left => c.nrows(),
            Side::Right => c.ncols(),
        };
        at_least(routine, "a", a.shape(), (tau.len(), order))?;
        fits_i32(routine, tau.len(), "too many reflectors")?;
        if l > order {
            return Err(LapackError::InvalidParameter {
                routine,
                reason: "reflector length exceeds the order of Z",
            });
        }
        T::ormrz(kernels, side, trans, l, a, tau, c)
    }

    // ── BLAS and auxiliaries ────────────────────────────────────────

    /// Solve `op(A) X = alpha B` (left) or `X op(A) = alpha B` (right) for
    /// triangular `A`, overwriting `B` (`xtrsm`).
    #[allow(clippy::too_many_arguments)]
    pub fn trsm<T: Dispatch>(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        alpha: T,
        a: MatRef<'_, T>,
        b: MatMut<'_, T>,
    ) -> Result<()> {
        let routine = Routine::of::<T>("trsm");
        let kernels = self.backend.kernels(routine)?;
        let order = match side {
            Side::Left => b.nrows(),
            Side::Right => b.ncols(),
        };
        at_least(routine, "a", a.shape(), (order, order))?;
        T::trsm(kernels, side, uplo, trans, diag, alpha, a, b);
        Ok(())
    }

    /// Multiply `a` by `cto / cfrom` without over- or underflow (`xlascl`).
    ///
    /// For the band kinds `a` holds band storage of a square matrix of
    /// order `a.ncols()` and needs the storage rows the bandwidths imply.
    pub fn lascl<T: Dispatch>(
        &self,
        kind: ScaleKind,
        kl: usize,
        ku: usize,
        cfrom: T::Real,
        cto: T::Real,
        a: MatMut<'_, T>,
    ) -> Result<()> {
        let routine = Routine::of::<T>("lascl");
        let kernels = self.backend.kernels(routine)?;
        fits_i32(routine, kl, "lower bandwidth out of range")?;
        fits_i32(routine, ku, "upper bandwidth out of range")?;
        if kind.is_band() {
            let rows = kind.band_rows(kl, ku).ok_or(LapackError::InvalidParameter {
                routine,
                reason: "bandwidth out of range",
            })?;
            at_least(routine, "a", a.shape(), (rows, a.ncols()))?;
        }
        T::lascl(kernels, kind, kl, ku, cfrom, cto, a)
    }

    /// One-norm, infinity-norm, Frobenius norm or largest absolute entry
    /// of `a` (`xlange`).
    pub fn lange<T: Dispatch>(&self, norm: Norm, a: MatRef<'_, T>) -> Result<T::Real> {
        let routine = Routine::of::<T>("lange");
        let kernels = self.backend.kernels(routine)?;
        Ok(T::lange(kernels, norm, a))
    }

    /// Copy `n` strided entries of `x` into `y` (`xcopy`).
    ///
    /// Increments may be negative (the vector is then walked from its end)
    /// but not zero.
    pub fn copy<T: Dispatch>(&self, n: usize, x: &[T], incx: i32, y: &mut [T], incy: i32) -> Result<()> {
        let routine = Routine::of::<T>("copy");
        let kernels = self.backend.kernels(routine)?;
        fits_i32(routine, n, "vector length out of range")?;
        if incx == 0 || incy == 0 {
            return Err(LapackError::InvalidParameter {
                routine,
                reason: "increment must be nonzero",
            });
        }
        let too_long = LapackError::InvalidParameter {
            routine,
            reason: "strided vector length out of range",
        };
        let x_len = strided_len(n, incx).ok_or(too_long.clone())?;
        let y_len = strided_len(n, incy).ok_or(too_long)?;
        min_len(routine, "x", x.len(), x_len)?;
        min_len(routine, "y", y.len(), y_len)?;
        T::copy(kernels, n, x, incx, y, incy);
        Ok(())
    }

    /// One step of incremental condition estimation (`xlaic1`).
    ///
    /// Given the estimate `sest` of the extreme singular value of a
    /// triangular `L` with solution vector `x`, estimates it for `L`
    /// extended by the column `(w, gamma)`. `w` must be at least as long as
    /// `x`.
    pub fn laic1<T: Dispatch>(
        &self,
        job: ConditionJob,
        x: &[T],
        sest: T::Real,
        w: &[T],
        gamma: T,
    ) -> Result<ConditionEstimate<T>> {
        let routine = Routine::of::<T>("laic1");
        let kernels = self.backend.kernels(routine)?;
        fits_i32(routine, x.len(), "vector length out of range")?;
        min_len(routine, "w", w.len(), x.len())?;
        Ok(T::laic1(kernels, job, x, sest, w, gamma))
    }

    // ── Machine constants and tuning ────────────────────────────────

    /// Safe minimum of `T`'s precision: `lamch('S')`.
    pub fn machine_underflow<T: Element>(&self) -> Result<T::Real> {
        Ok(self.machine_constants::<T>()?.underflow)
    }

    /// `(small, big)` scaling thresholds of `T`'s precision.
    pub fn machine_precision<T: Element>(&self) -> Result<(T::Real, T::Real)> {
        Ok(self.machine_constants::<T>()?.precision())
    }

    /// All constants of `T`'s precision, computed on first request.
    pub fn machine_constants<T: Element>(&self) -> Result<MachineConstants<T::Real>> {
        let routine = Routine::of::<T::Real>("lamch");
        let kernels = self.backend.kernels(routine)?;
        Ok(self.machine.get::<T::Real, K>(kernels))
    }

    /// Block size or other tuning parameter `ispec` LAPACK would use for
    /// routine `name` (without kind prefix, e.g. `"getrf"`) in `T`'s family.
    #[allow(clippy::too_many_arguments)]
    pub fn ilaenv<T: Element>(
        &self,
        ispec: i32,
        name: &str,
        opts: &str,
        n1: i32,
        n2: i32,
        n3: i32,
        n4: i32,
    ) -> Result<usize> {
        let routine = Routine::of::<T>("ilaenv");
        let kernels = self.backend.kernels(routine)?;
        let full = format!("{}{}", T::KIND.prefix(), name).to_ascii_uppercase();
        let value = kernels.ilaenv(ispec, &full, opts, n1, n2, n3, n4);
        check(routine, value)?;
        Ok(value.max(0) as usize)
    }
}
