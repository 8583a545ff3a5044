//! Error types for numeris-lapack.

use core::fmt;

use thiserror::Error;

use crate::traits::{Element, ElementKind};

/// Result type alias using [`LapackError`].
pub type Result<T> = core::result::Result<T, LapackError>;

/// A concrete LAPACK/BLAS routine: element-kind prefix plus routine stem.
///
/// Displays as the Fortran name, e.g. `dgelss` or `zhetrs`.
///
/// ```
/// use numeris_lapack::Routine;
/// use num_complex::Complex;
///
/// assert_eq!(Routine::of::<f64>("getrf").to_string(), "dgetrf");
/// assert_eq!(Routine::of::<Complex<f64>>("hetrs").to_string(), "zhetrs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Routine {
    kind: ElementKind,
    stem: &'static str,
}

impl Routine {
    /// Routine `stem` in the family of element type `T`.
    pub fn of<T: Element>(stem: &'static str) -> Self {
        Self::new(T::KIND, stem)
    }

    /// Routine `stem` in the family of `kind`.
    pub const fn new(kind: ElementKind, stem: &'static str) -> Self {
        Self { kind, stem }
    }

    /// The element kind the routine was instantiated for.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The routine name without its kind prefix.
    pub fn stem(&self) -> &'static str {
        self.stem
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.stem)
    }
}

/// Errors that terminate a dispatch call.
///
/// Data-dependent outcomes (singular pivots, non-converged eigenvalues) are
/// not errors; they come back as [`Status::Degenerate`](crate::Status).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LapackError {
    /// The routine rejected argument `position` (one-based, Fortran order).
    ///
    /// Always a bug in the caller; never retried.
    #[error("illegal value for argument {position} of {routine}")]
    InvalidArgument {
        /// The routine that reported the problem
        routine: Routine,
        /// One-based argument index, `-info`
        position: usize,
    },

    /// No LAPACK backend was compiled in or selected.
    #[error("{routine} called but no LAPACK backend is available")]
    BackendUnavailable {
        /// The requested routine
        routine: Routine,
    },

    /// A matrix view does not describe a valid column-major layout.
    #[error("invalid {nrows}x{ncols} view with leading dimension {ld} over {len} elements")]
    InvalidView {
        /// Requested rows
        nrows: usize,
        /// Requested columns
        ncols: usize,
        /// Requested leading dimension
        ld: usize,
        /// Length of the backing slice
        len: usize,
    },

    /// Operand shapes disagree.
    #[error("{routine}: {what} must be {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    DimensionMismatch {
        /// The routine being prepared
        routine: Routine,
        /// Which operand
        what: &'static str,
        /// Required `(rows, cols)`
        expected: (usize, usize),
        /// Supplied `(rows, cols)`
        got: (usize, usize),
    },

    /// An output or auxiliary slice is shorter than the routine writes.
    #[error("{routine}: {what} holds {got} elements, {needed} required")]
    BufferTooSmall {
        /// The routine being prepared
        routine: Routine,
        /// Which slice
        what: &'static str,
        /// Minimum length
        needed: usize,
        /// Supplied length
        got: usize,
    },

    /// A scalar argument was rejected before reaching the kernel.
    #[error("{routine}: {reason}")]
    InvalidParameter {
        /// The routine being prepared
        routine: Routine,
        /// What was wrong
        reason: &'static str,
    },

    /// A workspace query reported a size that cannot be allocated.
    #[error("{routine}: workspace query reported unusable size {reported}")]
    WorkspaceQuery {
        /// The queried routine
        routine: Routine,
        /// The raw reported value
        reported: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn routine_names_carry_prefix() {
        assert_eq!(Routine::of::<f32>("gelss").to_string(), "sgelss");
        assert_eq!(Routine::of::<Complex<f32>>("unmqr").to_string(), "cunmqr");
        assert_eq!(Routine::of::<Complex<f64>>("potrf").stem(), "potrf");
    }

    #[test]
    fn invalid_argument_message() {
        let err = LapackError::InvalidArgument {
            routine: Routine::of::<f64>("getrs"),
            position: 5,
        };
        assert_eq!(err.to_string(), "illegal value for argument 5 of dgetrs");
    }

    #[test]
    fn dimension_mismatch_message() {
        let err = LapackError::DimensionMismatch {
            routine: Routine::of::<f64>("potrs"),
            what: "b",
            expected: (3, 1),
            got: (2, 1),
        };
        assert_eq!(err.to_string(), "dpotrs: b must be 3x1, got 2x1");
    }
}
