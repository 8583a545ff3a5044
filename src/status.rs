//! Interpretation of LAPACK `info` codes.

use crate::error::{LapackError, Result, Routine};

/// Outcome of a routine that completed without an argument error.
///
/// A positive `info` is data, not failure: the index of the first zero
/// pivot of a factorization, the order of the leading minor that is not
/// positive definite, the number of eigenvalues that failed to converge.
/// What it means is specific to the routine; the caller decides whether to
/// retry with different parameters.
///
/// ```
/// use numeris_lapack::Status;
///
/// let s = Status::Degenerate(3);
/// assert!(!s.is_success());
/// assert_eq!(s.degenerate(), Some(3));
/// assert_eq!(Status::Success.degenerate(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// `info == 0`.
    Success,
    /// `info > 0`, carried verbatim.
    Degenerate(usize),
}

impl Status {
    /// `true` for [`Status::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }

    /// The positive `info` of a degenerate result.
    pub fn degenerate(&self) -> Option<usize> {
        match self {
            Status::Success => None,
            Status::Degenerate(info) => Some(*info),
        }
    }
}

/// Map a raw `info` code onto the error model.
///
/// Negative values name the offending argument (`-info`, one-based) and end
/// the call; zero and positive values come back as a [`Status`].
pub fn check(routine: Routine, info: i32) -> Result<Status> {
    if info < 0 {
        let position = info.unsigned_abs() as usize;
        tracing::warn!(%routine, position, "illegal LAPACK argument");
        return Err(LapackError::InvalidArgument { routine, position });
    }
    if info > 0 {
        tracing::debug!(%routine, info, "degenerate LAPACK result");
        return Ok(Status::Degenerate(info as usize));
    }
    Ok(Status::Success)
}

/// Solution summary of a least-squares solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeastSquares {
    /// Effective rank: singular values above `rcond * s[0]`.
    pub rank: usize,
    /// `Degenerate(i)`: the SVD failed to converge, `i` off-diagonal
    /// elements did not reach zero.
    pub status: Status,
}

/// Result of a selected-eigenvalue computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EigenSelection {
    /// Number of eigenvalues found; the first `found` entries of the
    /// eigenvalue slice (and eigenvector columns) are valid.
    pub found: usize,
    /// Zero-based indices of eigenvectors that failed to converge.
    pub unconverged: Vec<usize>,
    /// `Degenerate(i)`: `i` eigenvectors failed to converge.
    pub status: Status,
}
