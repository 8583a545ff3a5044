//! A pure-Rust routine set that records how the dispatch layer drives it.
//!
//! Factorizations that tests check numerically (`getrf`, `getrs`, `potrf`,
//! `potrs`, `copy`, 2x2 real `geev`) compute real answers; the rest fill
//! their outputs with simple, predictable values. Every routine with a
//! `work`/`lwork` pair follows the size-query protocol: `lwork = -1`
//! reports `query_size` in `work[0]` and is recorded as a query, and an
//! execution call with less scratch than that reports the `lwork` argument
//! as illegal.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use num_complex::Complex;
use num_traits::{Float, One, Zero};
use numeris_lapack::kernels::{ComplexKernels, Kernels, RealKernels};
use numeris_lapack::{Element, ElementKind, Routine};

/// One call as seen by the kernels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Call {
    pub routine: String,
    /// `lwork = -1` size query rather than an execution.
    pub query: bool,
    /// Flags, dimensions and leading dimensions, in argument order.
    /// Recorded by the routines that take a `work`/`lwork` pair.
    pub args: Vec<i32>,
    pub m: i32,
    pub n: i32,
    pub lwork: i32,
    pub work: usize,
    pub rwork: usize,
    pub iwork: usize,
    pub ifail: usize,
    /// `trans` for the multiply and solve routines, `kind` for `lascl`.
    pub flag: u8,
}

pub struct Fake {
    /// Workspace length reported by size queries.
    pub query_size: usize,
    /// `info` returned by every execution call instead of the computed one.
    pub info: Option<i32>,
    /// `info` returned by size queries.
    pub query_info: Option<i32>,
    calls: Mutex<Vec<Call>>,
    lamch_calls: AtomicUsize,
}

impl Default for Fake {
    fn default() -> Self {
        Self {
            query_size: 37,
            info: None,
            query_info: None,
            calls: Mutex::new(Vec::new()),
            lamch_calls: AtomicUsize::new(0),
        }
    }
}

impl Fake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info(info: i32) -> Self {
        Self { info: Some(info), ..Self::default() }
    }

    pub fn with_query_size(query_size: usize) -> Self {
        Self { query_size, ..Self::default() }
    }

    pub fn with_query_info(info: i32) -> Self {
        Self { query_info: Some(info), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent execution of `routine` (fully prefixed, e.g. `zhetrf`).
    pub fn last(&self, routine: &str) -> Option<Call> {
        self.calls().into_iter().rev().find(|c| c.routine == routine && !c.query)
    }

    /// The most recent size query for `routine`.
    pub fn query(&self, routine: &str) -> Option<Call> {
        self.calls().into_iter().rev().find(|c| c.routine == routine && c.query)
    }

    pub fn lamch_calls(&self) -> usize {
        self.lamch_calls.load(Ordering::SeqCst)
    }

    /// Answer and record a size query, or reject short scratch.
    ///
    /// `None` means the call should go ahead.
    fn workspace<T: Element>(
        &self,
        call: &Call,
        work: &mut [T],
        lwork: i32,
        position: i32,
    ) -> Option<i32> {
        if lwork == -1 {
            let size = <T::Real as numeris_lapack::RealElement>::from_f64(self.query_size as f64);
            work[0] = T::from_real(size);
            self.calls.lock().unwrap().push(Call { query: true, ..call.clone() });
            return Some(self.query_info.unwrap_or(0));
        }
        if lwork < self.query_size as i32 || work.len() < lwork as usize {
            return Some(-position);
        }
        None
    }

    fn finish(&self, call: Call, computed: i32) -> i32 {
        self.calls.lock().unwrap().push(call);
        self.info.unwrap_or(computed)
    }
}

fn real_name<R: Element>(stem: &'static str) -> String {
    Routine::of::<R>(stem).to_string()
}

fn complex_name<R: Element>(stem: &'static str) -> String {
    let kind = match R::KIND {
        ElementKind::Real32 => ElementKind::Complex32,
        _ => ElementKind::Complex64,
    };
    Routine::new(kind, stem).to_string()
}

// ── Pure-Rust numerics ──────────────────────────────────────────────

pub fn lu<T: Element>(m: usize, n: usize, a: &mut [T], lda: usize, ipiv: &mut [i32]) -> i32 {
    let mut info = 0;
    for k in 0..m.min(n) {
        let mut p = k;
        let mut best = a[k + k * lda].modulus();
        for i in k + 1..m {
            let v = a[i + k * lda].modulus();
            if v > best {
                best = v;
                p = i;
            }
        }
        ipiv[k] = p as i32 + 1;
        if best == T::Real::zero() {
            if info == 0 {
                info = k as i32 + 1;
            }
            continue;
        }
        if p != k {
            for j in 0..n {
                a.swap(k + j * lda, p + j * lda);
            }
        }
        let pivot = a[k + k * lda];
        for i in k + 1..m {
            a[i + k * lda] = a[i + k * lda] / pivot;
        }
        for j in k + 1..n {
            let akj = a[k + j * lda];
            for i in k + 1..m {
                a[i + j * lda] = a[i + j * lda] - a[i + k * lda] * akj;
            }
        }
    }
    info
}

pub fn lu_solve<T: Element>(
    n: usize,
    nrhs: usize,
    a: &[T],
    lda: usize,
    ipiv: &[i32],
    b: &mut [T],
    ldb: usize,
) {
    for c in 0..nrhs {
        let col = &mut b[c * ldb..c * ldb + n];
        for k in 0..n {
            col.swap(k, ipiv[k] as usize - 1);
        }
        for i in 0..n {
            for k in 0..i {
                col[i] = col[i] - a[i + k * lda] * col[k];
            }
        }
        for i in (0..n).rev() {
            for k in i + 1..n {
                col[i] = col[i] - a[i + k * lda] * col[k];
            }
            col[i] = col[i] / a[i + i * lda];
        }
    }
}

/// Cholesky factor entry `L[i][j]` (`i >= j`) of either stored triangle.
fn chol_l<T: Element>(lower: bool, a: &[T], lda: usize, i: usize, j: usize) -> T {
    if lower {
        a[i + j * lda]
    } else {
        a[j + i * lda].conj()
    }
}

fn chol_set<T: Element>(lower: bool, a: &mut [T], lda: usize, i: usize, j: usize, v: T) {
    if lower {
        a[i + j * lda] = v;
    } else {
        a[j + i * lda] = v.conj();
    }
}

pub fn cholesky<T: Element>(uplo: u8, n: usize, a: &mut [T], lda: usize) -> i32 {
    let lower = uplo == b'L';
    for j in 0..n {
        let mut d = a[j + j * lda].re();
        for k in 0..j {
            let l = chol_l(lower, a, lda, j, k).modulus();
            d = d - l * l;
        }
        if !(d > T::Real::zero()) {
            return j as i32 + 1;
        }
        let ljj = d.sqrt();
        chol_set(lower, a, lda, j, j, T::from_real(ljj));
        for i in j + 1..n {
            let mut s = chol_l(lower, a, lda, i, j);
            for k in 0..j {
                s = s - chol_l(lower, a, lda, i, k) * chol_l(lower, a, lda, j, k).conj();
            }
            chol_set(lower, a, lda, i, j, s / T::from_real(ljj));
        }
    }
    0
}

pub fn cholesky_solve<T: Element>(
    uplo: u8,
    n: usize,
    nrhs: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    let lower = uplo == b'L';
    for c in 0..nrhs {
        let col = &mut b[c * ldb..c * ldb + n];
        for i in 0..n {
            for k in 0..i {
                col[i] = col[i] - chol_l(lower, a, lda, i, k) * col[k];
            }
            col[i] = col[i] / chol_l(lower, a, lda, i, i);
        }
        for i in (0..n).rev() {
            for k in i + 1..n {
                col[i] = col[i] - chol_l(lower, a, lda, k, i).conj() * col[k];
            }
            col[i] = col[i] / chol_l(lower, a, lda, i, i).conj();
        }
    }
}

fn strided_copy<T: Copy>(n: usize, x: &[T], incx: i32, y: &mut [T], incy: i32) {
    if n == 0 {
        return;
    }
    let start = |inc: i32| if inc < 0 { (n - 1) * inc.unsigned_abs() as usize } else { 0 };
    let (mut ix, mut iy) = (start(incx) as isize, start(incy) as isize);
    for _ in 0..n {
        y[iy as usize] = x[ix as usize];
        ix += incx as isize;
        iy += incy as isize;
    }
}

/// Eigenvector of the 2x2 `[[a, b], [_, _]]` for `lambda = p + i q` as
/// `(re, im)` columns, unit length.
fn pair_vector<R: Float>(a: R, b: R, p: R, q: R) -> ([R; 2], [R; 2]) {
    let re = [b, p - a];
    let im = [R::zero(), q];
    let norm = (re[0] * re[0] + re[1] * re[1] + im[1] * im[1]).sqrt();
    ([re[0] / norm, re[1] / norm], [im[0] / norm, im[1] / norm])
}

/// Real 2x2 eigen-decomposition in LAPACK's packed form.
fn geev2<R: Float>(a: &[R], lda: usize, wr: &mut [R], wi: &mut [R], vl: &mut [R], vr: &mut [R]) {
    let (a00, a10, a01, a11) = (a[0], a[1], a[lda], a[1 + lda]);
    let two = R::one() + R::one();
    let p = (a00 + a11) / two;
    let disc = p * p - (a00 * a11 - a01 * a10);
    if disc < R::zero() {
        let q = (-disc).sqrt();
        wr[0] = p;
        wr[1] = p;
        wi[0] = q;
        wi[1] = -q;
        let (re, im) = pair_vector(a00, a01, p, q);
        if vr.len() >= 4 {
            vr[..4].copy_from_slice(&[re[0], re[1], im[0], im[1]]);
        }
        let (re, im) = pair_vector(a00, a10, p, q);
        if vl.len() >= 4 {
            vl[..4].copy_from_slice(&[re[0], re[1], -im[0], -im[1]]);
        }
    } else {
        let s = disc.sqrt();
        wr[0] = p + s;
        wr[1] = p - s;
        wi[0] = R::zero();
        wi[1] = R::zero();
        for out in [vl, vr] {
            if out.len() >= 4 {
                out[..4].copy_from_slice(&[R::one(), R::zero(), R::zero(), R::one()]);
            }
        }
    }
}

fn identity<T: Element>(n: usize, ld: usize, out: &mut [T]) {
    if out.len() < ld * n {
        return;
    }
    for j in 0..n {
        for i in 0..n {
            out[i + j * ld] = if i == j { T::one() } else { T::zero() };
        }
    }
}

fn sorted_diagonal<T: Element>(n: usize, a: &[T], lda: usize, w: &mut [T::Real]) {
    for i in 0..n {
        w[i] = a[i + i * lda].re();
    }
    w[..n].sort_by(|x, y| x.partial_cmp(y).unwrap());
}

// ── Kernel contract ─────────────────────────────────────────────────

macro_rules! fake_kernels {
    ($r:ty) => {
        #[allow(clippy::too_many_arguments)]
        impl RealKernels<$r> for Fake {
            unsafe fn gelss(
                &self, m: i32, n: i32, nrhs: i32, _a: &mut [$r], lda: i32, _b: &mut [$r],
                ldb: i32, s: &mut [$r], _rcond: $r, rank: &mut i32, work: &mut [$r], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("gelss"),
                    args: vec![m, n, nrhs, lda, ldb],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 12) {
                    return info;
                }
                let k = m.min(n);
                s[..k as usize].fill(1.0);
                *rank = k;
                self.finish(call, 0)
            }

            unsafe fn potrf(&self, uplo: u8, n: i32, a: &mut [$r], lda: i32) -> i32 {
                let info = cholesky(uplo, n as usize, a, lda as usize);
                self.finish(Call { routine: real_name::<$r>("potrf"), n, ..Call::default() }, info)
            }

            unsafe fn potrs(
                &self, uplo: u8, n: i32, nrhs: i32, a: &[$r], lda: i32, b: &mut [$r], ldb: i32,
            ) -> i32 {
                cholesky_solve(uplo, n as usize, nrhs as usize, a, lda as usize, b, ldb as usize);
                self.finish(Call { routine: real_name::<$r>("potrs"), n, ..Call::default() }, 0)
            }

            unsafe fn getrf(&self, m: i32, n: i32, a: &mut [$r], lda: i32, ipiv: &mut [i32]) -> i32 {
                let info = lu(m as usize, n as usize, a, lda as usize, ipiv);
                self.finish(Call { routine: real_name::<$r>("getrf"), m, n, ..Call::default() }, info)
            }

            unsafe fn getrs(
                &self, trans: u8, n: i32, nrhs: i32, a: &[$r], lda: i32, ipiv: &[i32], b: &mut [$r],
                ldb: i32,
            ) -> i32 {
                lu_solve(n as usize, nrhs as usize, a, lda as usize, ipiv, b, ldb as usize);
                let call = Call { routine: real_name::<$r>("getrs"), n, flag: trans, ..Call::default() };
                self.finish(call, 0)
            }

            unsafe fn sytrf(
                &self, uplo: u8, n: i32, _a: &mut [$r], lda: i32, ipiv: &mut [i32],
                work: &mut [$r], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("sytrf"),
                    args: vec![uplo as i32, n, lda],
                    n,
                    lwork,
                    work: work.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 7) {
                    return info;
                }
                for (i, p) in ipiv.iter_mut().take(n as usize).enumerate() {
                    *p = i as i32 + 1;
                }
                self.finish(call, 0)
            }

            unsafe fn sytrs(
                &self, _uplo: u8, n: i32, _nrhs: i32, _a: &[$r], _lda: i32, _ipiv: &[i32],
                _b: &mut [$r], _ldb: i32,
            ) -> i32 {
                self.finish(Call { routine: real_name::<$r>("sytrs"), n, ..Call::default() }, 0)
            }

            unsafe fn syev(
                &self, jobz: u8, uplo: u8, n: i32, a: &mut [$r], lda: i32, w: &mut [$r],
                work: &mut [$r], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("syev"),
                    args: vec![jobz as i32, uplo as i32, n, lda],
                    n,
                    lwork,
                    work: work.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 8) {
                    return info;
                }
                sorted_diagonal(n as usize, a, lda as usize, w);
                self.finish(call, 0)
            }

            unsafe fn syevx(
                &self, jobz: u8, range: u8, uplo: u8, n: i32, a: &mut [$r], lda: i32, _vl: $r,
                _vu: $r, il: i32, iu: i32, _abstol: $r, m: &mut i32, w: &mut [$r], z: &mut [$r],
                ldz: i32, work: &mut [$r], lwork: i32, iwork: &mut [i32], ifail: &mut [i32],
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("syevx"),
                    args: vec![jobz as i32, range as i32, uplo as i32, n, lda, il, iu, ldz],
                    n,
                    lwork,
                    work: work.len(),
                    iwork: iwork.len(),
                    ifail: ifail.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 17) {
                    return info;
                }
                sorted_diagonal(n as usize, a, lda as usize, w);
                *m = if range == b'I' { iu - il + 1 } else { n };
                if jobz == b'V' {
                    identity(*m as usize, ldz as usize, z);
                }
                ifail.fill(0);
                if matches!(self.info, Some(k) if k > 0) {
                    ifail[0] = 2;
                }
                self.finish(call, 0)
            }

            unsafe fn gesdd(
                &self, jobz: u8, m: i32, n: i32, _a: &mut [$r], lda: i32, s: &mut [$r],
                _u: &mut [$r], ldu: i32, _vt: &mut [$r], ldvt: i32, work: &mut [$r], lwork: i32,
                iwork: &mut [i32],
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("gesdd"),
                    args: vec![jobz as i32, m, n, lda, ldu, ldvt],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    iwork: iwork.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 12) {
                    return info;
                }
                s[..m.min(n) as usize].fill(1.0);
                self.finish(call, 0)
            }

            unsafe fn geev(
                &self, jobvl: u8, jobvr: u8, n: i32, a: &mut [$r], lda: i32, wr: &mut [$r],
                wi: &mut [$r], vl: &mut [$r], ldvl: i32, vr: &mut [$r], ldvr: i32,
                work: &mut [$r], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("geev"),
                    args: vec![jobvl as i32, jobvr as i32, n, lda, ldvl, ldvr],
                    n,
                    lwork,
                    work: work.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 13) {
                    return info;
                }
                if n == 2 {
                    geev2(a, lda as usize, wr, wi, vl, vr);
                } else {
                    sorted_diagonal(n as usize, a, lda as usize, wr);
                    wi[..n as usize].fill(0.0);
                    identity(n as usize, ldvl as usize, vl);
                    identity(n as usize, ldvr as usize, vr);
                }
                self.finish(call, 0)
            }

            unsafe fn geqp3(
                &self, m: i32, n: i32, _a: &mut [$r], lda: i32, jpvt: &mut [i32], _tau: &mut [$r],
                work: &mut [$r], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("geqp3"),
                    args: vec![m, n, lda],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 8) {
                    return info;
                }
                for (j, p) in jpvt.iter_mut().take(n as usize).enumerate() {
                    *p = j as i32 + 1;
                }
                self.finish(call, 0)
            }

            unsafe fn tzrzf(
                &self, m: i32, n: i32, _a: &mut [$r], lda: i32, _tau: &mut [$r], work: &mut [$r],
                lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("tzrzf"),
                    args: vec![m, n, lda],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 7) {
                    return info;
                }
                self.finish(call, if m > n { -2 } else { 0 })
            }

            unsafe fn ormqr(
                &self, side: u8, trans: u8, m: i32, n: i32, k: i32, _a: &[$r], lda: i32,
                _tau: &[$r], _c: &mut [$r], ldc: i32, work: &mut [$r], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("ormqr"),
                    args: vec![side as i32, trans as i32, m, n, k, lda, ldc],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    flag: trans,
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 12) {
                    return info;
                }
                self.finish(call, 0)
            }

            unsafe fn ormrz(
                &self, side: u8, trans: u8, m: i32, n: i32, k: i32, l: i32, _a: &[$r], lda: i32,
                _tau: &[$r], _c: &mut [$r], ldc: i32, work: &mut [$r], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: real_name::<$r>("ormrz"),
                    args: vec![side as i32, trans as i32, m, n, k, l, lda, ldc],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    flag: trans,
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 13) {
                    return info;
                }
                self.finish(call, 0)
            }

            unsafe fn trsm(
                &self, _side: u8, _uplo: u8, transa: u8, _diag: u8, m: i32, n: i32, _alpha: $r,
                _a: &[$r], _lda: i32, _b: &mut [$r], _ldb: i32,
            ) {
                let call = Call { routine: real_name::<$r>("trsm"), m, n, flag: transa, ..Call::default() };
                self.calls.lock().unwrap().push(call);
            }

            unsafe fn lascl(
                &self, kind: u8, _kl: i32, _ku: i32, cfrom: $r, cto: $r, m: i32, n: i32,
                a: &mut [$r], lda: i32,
            ) -> i32 {
                if kind == b'G' {
                    for j in 0..n as usize {
                        for i in 0..m as usize {
                            a[i + j * lda as usize] *= cto / cfrom;
                        }
                    }
                }
                self.finish(Call { routine: real_name::<$r>("lascl"), m, n, flag: kind, ..Call::default() }, 0)
            }

            unsafe fn lange(&self, norm: u8, m: i32, n: i32, a: &[$r], lda: i32, work: &mut [$r]) -> $r {
                let mut max: $r = 0.0;
                for j in 0..n as usize {
                    for i in 0..m as usize {
                        max = max.max(a[i + j * lda as usize].abs());
                    }
                }
                let call = Call { routine: real_name::<$r>("lange"), m, n, work: work.len(), flag: norm, ..Call::default() };
                self.calls.lock().unwrap().push(call);
                max
            }

            unsafe fn copy(&self, n: i32, x: &[$r], incx: i32, y: &mut [$r], incy: i32) {
                strided_copy(n as usize, x, incx, y, incy);
                self.calls.lock().unwrap().push(Call { routine: real_name::<$r>("copy"), n, ..Call::default() });
            }

            unsafe fn laic1(
                &self, _job: i32, j: i32, _x: &[$r], sest: $r, _w: &[$r], _gamma: $r,
                sestpr: &mut $r, s: &mut $r, c: &mut $r,
            ) {
                *sestpr = 2.0 * sest;
                *s = 1.0;
                *c = 0.0;
                self.calls.lock().unwrap().push(Call { routine: real_name::<$r>("laic1"), n: j, ..Call::default() });
            }

            fn lamch(&self, cmach: u8) -> $r {
                self.lamch_calls.fetch_add(1, Ordering::SeqCst);
                match cmach {
                    b'S' => <$r>::MIN_POSITIVE,
                    _ => <$r>::EPSILON,
                }
            }
        }

        #[allow(clippy::too_many_arguments)]
        impl ComplexKernels<$r> for Fake {
            unsafe fn gelss(
                &self, m: i32, n: i32, nrhs: i32, _a: &mut [Complex<$r>], lda: i32,
                _b: &mut [Complex<$r>], ldb: i32, s: &mut [$r], _rcond: $r, rank: &mut i32,
                work: &mut [Complex<$r>], lwork: i32, rwork: &mut [$r],
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("gelss"),
                    args: vec![m, n, nrhs, lda, ldb],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    rwork: rwork.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 12) {
                    return info;
                }
                let k = m.min(n);
                s[..k as usize].fill(1.0);
                *rank = k;
                self.finish(call, 0)
            }

            unsafe fn potrf(&self, uplo: u8, n: i32, a: &mut [Complex<$r>], lda: i32) -> i32 {
                let info = cholesky(uplo, n as usize, a, lda as usize);
                self.finish(Call { routine: complex_name::<$r>("potrf"), n, ..Call::default() }, info)
            }

            unsafe fn potrs(
                &self, uplo: u8, n: i32, nrhs: i32, a: &[Complex<$r>], lda: i32,
                b: &mut [Complex<$r>], ldb: i32,
            ) -> i32 {
                cholesky_solve(uplo, n as usize, nrhs as usize, a, lda as usize, b, ldb as usize);
                self.finish(Call { routine: complex_name::<$r>("potrs"), n, ..Call::default() }, 0)
            }

            unsafe fn getrf(
                &self, m: i32, n: i32, a: &mut [Complex<$r>], lda: i32, ipiv: &mut [i32],
            ) -> i32 {
                let info = lu(m as usize, n as usize, a, lda as usize, ipiv);
                self.finish(Call { routine: complex_name::<$r>("getrf"), m, n, ..Call::default() }, info)
            }

            unsafe fn getrs(
                &self, trans: u8, n: i32, nrhs: i32, a: &[Complex<$r>], lda: i32, ipiv: &[i32],
                b: &mut [Complex<$r>], ldb: i32,
            ) -> i32 {
                lu_solve(n as usize, nrhs as usize, a, lda as usize, ipiv, b, ldb as usize);
                let call = Call { routine: complex_name::<$r>("getrs"), n, flag: trans, ..Call::default() };
                self.finish(call, 0)
            }

            unsafe fn hetrf(
                &self, uplo: u8, n: i32, _a: &mut [Complex<$r>], lda: i32, ipiv: &mut [i32],
                work: &mut [Complex<$r>], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("hetrf"),
                    args: vec![uplo as i32, n, lda],
                    n,
                    lwork,
                    work: work.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 7) {
                    return info;
                }
                for (i, p) in ipiv.iter_mut().take(n as usize).enumerate() {
                    *p = i as i32 + 1;
                }
                self.finish(call, 0)
            }

            unsafe fn hetrs(
                &self, _uplo: u8, n: i32, _nrhs: i32, _a: &[Complex<$r>], _lda: i32, _ipiv: &[i32],
                _b: &mut [Complex<$r>], _ldb: i32,
            ) -> i32 {
                self.finish(Call { routine: complex_name::<$r>("hetrs"), n, ..Call::default() }, 0)
            }

            unsafe fn heev(
                &self, jobz: u8, uplo: u8, n: i32, a: &mut [Complex<$r>], lda: i32, w: &mut [$r],
                work: &mut [Complex<$r>], lwork: i32, rwork: &mut [$r],
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("heev"),
                    args: vec![jobz as i32, uplo as i32, n, lda],
                    n,
                    lwork,
                    work: work.len(),
                    rwork: rwork.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 8) {
                    return info;
                }
                sorted_diagonal(n as usize, a, lda as usize, w);
                self.finish(call, 0)
            }

            unsafe fn heevx(
                &self, jobz: u8, range: u8, uplo: u8, n: i32, a: &mut [Complex<$r>], lda: i32,
                _vl: $r, _vu: $r, il: i32, iu: i32, _abstol: $r, m: &mut i32, w: &mut [$r],
                z: &mut [Complex<$r>], ldz: i32, work: &mut [Complex<$r>], lwork: i32,
                rwork: &mut [$r], iwork: &mut [i32], ifail: &mut [i32],
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("heevx"),
                    args: vec![jobz as i32, range as i32, uplo as i32, n, lda, il, iu, ldz],
                    n,
                    lwork,
                    work: work.len(),
                    rwork: rwork.len(),
                    iwork: iwork.len(),
                    ifail: ifail.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 17) {
                    return info;
                }
                sorted_diagonal(n as usize, a, lda as usize, w);
                *m = if range == b'I' { iu - il + 1 } else { n };
                if jobz == b'V' {
                    identity(*m as usize, ldz as usize, z);
                }
                ifail.fill(0);
                if matches!(self.info, Some(k) if k > 0) {
                    ifail[0] = 2;
                }
                self.finish(call, 0)
            }

            unsafe fn gesdd(
                &self, jobz: u8, m: i32, n: i32, _a: &mut [Complex<$r>], lda: i32, s: &mut [$r],
                _u: &mut [Complex<$r>], ldu: i32, _vt: &mut [Complex<$r>], ldvt: i32,
                work: &mut [Complex<$r>], lwork: i32, rwork: &mut [$r], iwork: &mut [i32],
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("gesdd"),
                    args: vec![jobz as i32, m, n, lda, ldu, ldvt],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    rwork: rwork.len(),
                    iwork: iwork.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 12) {
                    return info;
                }
                s[..m.min(n) as usize].fill(1.0);
                self.finish(call, 0)
            }

            unsafe fn geev(
                &self, jobvl: u8, jobvr: u8, n: i32, a: &mut [Complex<$r>], lda: i32,
                w: &mut [Complex<$r>], vl: &mut [Complex<$r>], ldvl: i32, vr: &mut [Complex<$r>],
                ldvr: i32, work: &mut [Complex<$r>], lwork: i32, rwork: &mut [$r],
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("geev"),
                    args: vec![jobvl as i32, jobvr as i32, n, lda, ldvl, ldvr],
                    n,
                    lwork,
                    work: work.len(),
                    rwork: rwork.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 12) {
                    return info;
                }
                for i in 0..n as usize {
                    w[i] = a[i + i * lda as usize];
                }
                identity(n as usize, ldvl as usize, vl);
                identity(n as usize, ldvr as usize, vr);
                self.finish(call, 0)
            }

            unsafe fn geqp3(
                &self, m: i32, n: i32, _a: &mut [Complex<$r>], lda: i32, jpvt: &mut [i32],
                _tau: &mut [Complex<$r>], work: &mut [Complex<$r>], lwork: i32, rwork: &mut [$r],
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("geqp3"),
                    args: vec![m, n, lda],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    rwork: rwork.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 8) {
                    return info;
                }
                for (j, p) in jpvt.iter_mut().take(n as usize).enumerate() {
                    *p = j as i32 + 1;
                }
                self.finish(call, 0)
            }

            unsafe fn tzrzf(
                &self, m: i32, n: i32, _a: &mut [Complex<$r>], lda: i32, _tau: &mut [Complex<$r>],
                work: &mut [Complex<$r>], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("tzrzf"),
                    args: vec![m, n, lda],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 7) {
                    return info;
                }
                self.finish(call, if m > n { -2 } else { 0 })
            }

            unsafe fn unmqr(
                &self, side: u8, trans: u8, m: i32, n: i32, k: i32, _a: &[Complex<$r>], lda: i32,
                _tau: &[Complex<$r>], _c: &mut [Complex<$r>], ldc: i32, work: &mut [Complex<$r>],
                lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("unmqr"),
                    args: vec![side as i32, trans as i32, m, n, k, lda, ldc],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    flag: trans,
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 12) {
                    return info;
                }
                self.finish(call, 0)
            }

            unsafe fn unmrz(
                &self, side: u8, trans: u8, m: i32, n: i32, k: i32, l: i32, _a: &[Complex<$r>],
                lda: i32, _tau: &[Complex<$r>], _c: &mut [Complex<$r>], ldc: i32,
                work: &mut [Complex<$r>], lwork: i32,
            ) -> i32 {
                let call = Call {
                    routine: complex_name::<$r>("unmrz"),
                    args: vec![side as i32, trans as i32, m, n, k, l, lda, ldc],
                    m,
                    n,
                    lwork,
                    work: work.len(),
                    flag: trans,
                    ..Call::default()
                };
                if let Some(info) = self.workspace(&call, work, lwork, 13) {
                    return info;
                }
                self.finish(call, 0)
            }

            unsafe fn trsm(
                &self, _side: u8, _uplo: u8, transa: u8, _diag: u8, m: i32, n: i32,
                _alpha: Complex<$r>, _a: &[Complex<$r>], _lda: i32, _b: &mut [Complex<$r>],
                _ldb: i32,
            ) {
                let call = Call { routine: complex_name::<$r>("trsm"), m, n, flag: transa, ..Call::default() };
                self.calls.lock().unwrap().push(call);
            }

            unsafe fn lascl(
                &self, kind: u8, _kl: i32, _ku: i32, cfrom: $r, cto: $r, m: i32, n: i32,
                a: &mut [Complex<$r>], lda: i32,
            ) -> i32 {
                if kind == b'G' {
                    for j in 0..n as usize {
                        for i in 0..m as usize {
                            a[i + j * lda as usize] *= cto / cfrom;
                        }
                    }
                }
                self.finish(Call { routine: complex_name::<$r>("lascl"), m, n, flag: kind, ..Call::default() }, 0)
            }

            unsafe fn lange(
                &self, norm: u8, m: i32, n: i32, a: &[Complex<$r>], lda: i32, work: &mut [$r],
            ) -> $r {
                let mut max: $r = 0.0;
                for j in 0..n as usize {
                    for i in 0..m as usize {
                        max = max.max(a[i + j * lda as usize].norm());
                    }
                }
                let call = Call { routine: complex_name::<$r>("lange"), m, n, work: work.len(), flag: norm, ..Call::default() };
                self.calls.lock().unwrap().push(call);
                max
            }

            unsafe fn copy(&self, n: i32, x: &[Complex<$r>], incx: i32, y: &mut [Complex<$r>], incy: i32) {
                strided_copy(n as usize, x, incx, y, incy);
                self.calls.lock().unwrap().push(Call { routine: complex_name::<$r>("copy"), n, ..Call::default() });
            }

            unsafe fn laic1(
                &self, _job: i32, j: i32, _x: &[Complex<$r>], sest: $r, _w: &[Complex<$r>],
                _gamma: Complex<$r>, sestpr: &mut $r, s: &mut Complex<$r>, c: &mut Complex<$r>,
            ) {
                *sestpr = 2.0 * sest;
                *s = Complex::one();
                *c = Complex::zero();
                self.calls.lock().unwrap().push(Call { routine: complex_name::<$r>("laic1"), n: j, ..Call::default() });
            }
        }
    };
}

fake_kernels!(f32);
fake_kernels!(f64);

impl Kernels for Fake {
    fn ilaenv(&self, ispec: i32, name: &str, _opts: &str, n1: i32, _n2: i32, _n3: i32, _n4: i32) -> i32 {
        let call = Call { routine: name.to_string(), m: ispec, n: n1, ..Call::default() };
        self.finish(call, 32)
    }
}
