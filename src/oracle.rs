//! Workspace size queries.
//!
//! LAPACK routines that take a `work`/`lwork` pair answer `lwork = -1` by
//! writing the optimal workspace length into `work[0]` and returning
//! without touching anything else. [`query`] wraps that convention as its
//! own operation so that execution calls always pass a real length.

use crate::error::{LapackError, Result, Routine};
use crate::status::check;
use crate::traits::{Element, RealElement};
use crate::workspace::Workspace;

/// Run the size-query variant of `routine` and return the element count.
///
/// `call` receives the one-element probe and `lwork = -1`, and must pass
/// the same non-scratch arguments as the real call: a negative `info` from
/// the query is an argument error, exactly as it would be from the real
/// call.
pub fn query<T: Element>(routine: Routine, call: impl FnOnce(&mut [T], i32) -> i32) -> Result<usize> {
    let mut probe = Workspace::<T>::probe();
    let info = call(probe.as_mut_slice(), -1);
    check(routine, info)?;
    let reported = probe.first().copied().unwrap_or_else(T::zero).re();
    let len = work_len(routine, reported)?;
    tracing::trace!(%routine, len, "workspace query");
    Ok(len)
}

/// Query, then allocate exactly the reported length.
pub fn allocate<T: Element>(
    routine: Routine,
    call: impl FnOnce(&mut [T], i32) -> i32,
) -> Result<Workspace<T>> {
    let len = query(routine, call)?;
    Ok(Workspace::new(len))
}

/// Convert the reported `work[0]` into an element count.
///
/// Single-precision routines report sizes as `f32`; rounding up keeps a
/// large size that is not exactly representable from being truncated below
/// what the routine needs.
fn work_len<R: RealElement>(routine: Routine, reported: R) -> Result<usize> {
    let value = reported.as_f64();
    if !value.is_finite() || value < 0.0 || value.ceil() > i32::MAX as f64 {
        return Err(LapackError::WorkspaceQuery { routine, reported: value });
    }
    Ok(value.ceil() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn reads_first_slot() {
        let routine = Routine::of::<f64>("gelss");
        let len = query::<f64>(routine, |work, lwork| {
            assert_eq!(lwork, -1);
            assert_eq!(work.len(), 1);
            work[0] = 96.0;
            0
        })
        .unwrap();
        assert_eq!(len, 96);
    }

    #[test]
    fn complex_reads_real_part() {
        let routine = Routine::of::<Complex<f32>>("gelss");
        let len = query::<Complex<f32>>(routine, |work, _| {
            work[0] = Complex::new(33.0, 0.0);
            0
        })
        .unwrap();
        assert_eq!(len, 33);
    }

    #[test]
    fn negative_info_is_argument_error() {
        let routine = Routine::of::<f32>("syev");
        let err = query::<f32>(routine, |_, _| -5).unwrap_err();
        assert_eq!(err, LapackError::InvalidArgument { routine, position: 5 });
    }

    #[test]
    fn fractional_sizes_round_up() {
        let routine = Routine::of::<f32>("gesdd");
        let len = query::<f32>(routine, |work, _| {
            work[0] = 100.25;
            0
        })
        .unwrap();
        assert_eq!(len, 101);
    }

    #[test]
    fn unusable_sizes_are_rejected() {
        let routine = Routine::of::<f64>("geev");
        for bad in [-1.0, f64::NAN, f64::INFINITY, 1e12] {
            let err = query::<f64>(routine, |work, _| {
                work[0] = bad;
                0
            })
            .unwrap_err();
            assert!(matches!(err, LapackError::WorkspaceQuery { .. }));
        }
    }

    #[test]
    fn allocate_matches_report() {
        let routine = Routine::of::<Complex<f64>>("geqp3");
        let w = allocate::<Complex<f64>>(routine, |work, _| {
            work[0] = Complex::new(12.0, 0.0);
            0
        })
        .unwrap();
        assert_eq!(w.len(), 12);
    }
}
