//! Typed forms of the single-character LAPACK/BLAS flag arguments.
//!
//! Each enum converts to the byte the Fortran routine expects with
//! `as_u8`. Values pass through unchanged except where a routine family
//! needs a kind-specific spelling (see [`Transpose::for_kind`]).

use crate::traits::ElementKind;

/// Which triangle of a symmetric/Hermitian or triangular matrix is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Uplo {
    #[default]
    Upper,
    Lower,
}

impl Uplo {
    pub const fn as_u8(self) -> u8 {
        match self {
            Uplo::Upper => b'U',
            Uplo::Lower => b'L',
        }
    }
}

/// Operation applied to a matrix operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transpose {
    /// `op(A) = A`
    #[default]
    No,
    /// `op(A) = A^T`
    Trans,
    /// `op(A) = A^H`
    ConjTrans,
}

impl Transpose {
    pub const fn as_u8(self) -> u8 {
        match self {
            Transpose::No => b'N',
            Transpose::Trans => b'T',
            Transpose::ConjTrans => b'C',
        }
    }

    /// Spelling accepted by the orthogonal/unitary multiply routines.
    ///
    /// `xormqr`/`xormrz` accept only `N` and `T`, `xunmqr`/`xunmrz` only `N`
    /// and `C`. For real data the two transposes coincide; for complex data
    /// the adjoint is the only transpose the routine offers.
    ///
    /// ```
    /// use numeris_lapack::{ElementKind, Transpose};
    ///
    /// assert_eq!(Transpose::ConjTrans.for_kind(ElementKind::Real64), b'T');
    /// assert_eq!(Transpose::Trans.for_kind(ElementKind::Complex32), b'C');
    /// assert_eq!(Transpose::No.for_kind(ElementKind::Complex64), b'N');
    /// ```
    pub const fn for_kind(self, kind: ElementKind) -> u8 {
        match self {
            Transpose::No => b'N',
            Transpose::Trans | Transpose::ConjTrans => {
                if kind.is_complex() {
                    b'C'
                } else {
                    b'T'
                }
            }
        }
    }
}

/// Side an operator is applied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub const fn as_u8(self) -> u8 {
        match self {
            Side::Left => b'L',
            Side::Right => b'R',
        }
    }
}

/// Whether a triangular matrix has an implicit unit diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Diag {
    #[default]
    NonUnit,
    Unit,
}

impl Diag {
    pub const fn as_u8(self) -> u8 {
        match self {
            Diag::NonUnit => b'N',
            Diag::Unit => b'U',
        }
    }
}

/// What an eigen-solver computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EigenJob {
    #[default]
    ValuesOnly,
    ValuesAndVectors,
}

impl EigenJob {
    pub const fn as_u8(self) -> u8 {
        match self {
            EigenJob::ValuesOnly => b'N',
            EigenJob::ValuesAndVectors => b'V',
        }
    }

    pub const fn wants_vectors(self) -> bool {
        matches!(self, EigenJob::ValuesAndVectors)
    }
}

/// Subset of eigenvalues requested from a selective solver.
///
/// Index bounds are zero-based and inclusive, in ascending eigenvalue
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EigenRange<R> {
    /// Every eigenvalue.
    All,
    /// Eigenvalues in the half-open interval `(lower, upper]`.
    Values { lower: R, upper: R },
    /// Eigenvalues `first..=last`.
    Indices { first: usize, last: usize },
}

impl<R> EigenRange<R> {
    pub const fn as_u8(&self) -> u8 {
        match self {
            EigenRange::All => b'A',
            EigenRange::Values { .. } => b'V',
            EigenRange::Indices { .. } => b'I',
        }
    }
}

/// How many singular vectors an SVD computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SvdJob {
    /// Full `U` (m x m) and `V^T` (n x n).
    All,
    /// Leading `min(m, n)` columns of `U` and rows of `V^T`.
    Thin,
    /// Thin vectors, one set written over `A`.
    Overwrite,
    /// Singular values only.
    #[default]
    None,
}

impl SvdJob {
    pub const fn as_u8(self) -> u8 {
        match self {
            SvdJob::All => b'A',
            SvdJob::Thin => b'S',
            SvdJob::Overwrite => b'O',
            SvdJob::None => b'N',
        }
    }
}

/// Matrix norm computed by `xlange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Norm {
    /// Largest absolute element (not a consistent matrix norm).
    Max,
    /// Maximum column sum.
    One,
    /// Maximum row sum.
    Infinity,
    #[default]
    Frobenius,
}

impl Norm {
    pub const fn as_u8(self) -> u8 {
        match self {
            Norm::Max => b'M',
            Norm::One => b'1',
            Norm::Infinity => b'I',
            Norm::Frobenius => b'F',
        }
    }
}

/// Storage shape of the matrix scaled by `xlascl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleKind {
    #[default]
    General,
    LowerTriangular,
    UpperTriangular,
    UpperHessenberg,
    /// Symmetric band, lower half stored; uses `kl`.
    SymmetricBandLower,
    /// Symmetric band, upper half stored; uses `ku`.
    SymmetricBandUpper,
    /// General band; uses `kl` and `ku`.
    Band,
}

impl ScaleKind {
    pub const fn as_u8(self) -> u8 {
        match self {
            ScaleKind::General => b'G',
            ScaleKind::LowerTriangular => b'L',
            ScaleKind::UpperTriangular => b'U',
            ScaleKind::UpperHessenberg => b'H',
            ScaleKind::SymmetricBandLower => b'B',
            ScaleKind::SymmetricBandUpper => b'Q',
            ScaleKind::Band => b'Z',
        }
    }

    /// Rows of band storage for bandwidths `kl`, `ku`; `None` for the
    /// full-storage kinds.
    pub fn band_rows(self, kl: usize, ku: usize) -> Option<usize> {
        match self {
            ScaleKind::SymmetricBandLower => kl.checked_add(1),
            ScaleKind::SymmetricBandUpper => ku.checked_add(1),
            ScaleKind::Band => kl.checked_mul(2)?.checked_add(ku)?.checked_add(1),
            _ => None,
        }
    }

    pub fn is_band(self) -> bool {
        matches!(
            self,
            ScaleKind::SymmetricBandLower | ScaleKind::SymmetricBandUpper | ScaleKind::Band
        )
    }
}

/// Which extreme singular value `xlaic1` tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionJob {
    Largest,
    Smallest,
}

impl ConditionJob {
    pub const fn as_i32(self) -> i32 {
        match self {
            ConditionJob::Largest => 1,
            ConditionJob::Smallest => 2,
        }
    }
}
