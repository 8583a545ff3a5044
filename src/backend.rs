//! Selection between a native routine set and no backend at all.

use crate::error::{LapackError, Result, Routine};
use crate::kernels::Kernels;

/// The routine set a build links by default.
#[cfg(feature = "lapack")]
pub type DefaultKernels = crate::kernels::Native;

/// The routine set a build links by default.
#[cfg(not(feature = "lapack"))]
pub type DefaultKernels = crate::kernels::NoKernels;

/// Strategy chosen once per facade: run routines on `K`, or fail every
/// call uniformly with [`LapackError::BackendUnavailable`].
///
/// ```
/// use numeris_lapack::{Backend, LapackError, Routine};
/// use numeris_lapack::kernels::NoKernels;
///
/// let b: Backend<NoKernels> = Backend::Unavailable;
/// assert!(!b.is_available());
/// let err = b.kernels(Routine::of::<f64>("getrf")).unwrap_err();
/// assert!(matches!(err, LapackError::BackendUnavailable { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend<K> {
    Native(K),
    Unavailable,
}

impl<K: Kernels> Backend<K> {
    pub fn is_available(&self) -> bool {
        matches!(self, Backend::Native(_))
    }

    /// The routine set, or `BackendUnavailable` naming `routine`.
    pub fn kernels(&self, routine: Routine) -> Result<&K> {
        match self {
            Backend::Native(k) => Ok(k),
            Backend::Unavailable => Err(LapackError::BackendUnavailable { routine }),
        }
    }
}

impl Backend<DefaultKernels> {
    /// The backend this build was compiled with.
    pub fn detect() -> Self {
        #[cfg(feature = "lapack")]
        {
            tracing::info!("using system LAPACK backend");
            Backend::Native(crate::kernels::Native)
        }
        #[cfg(not(feature = "lapack"))]
        {
            tracing::info!("built without a LAPACK backend; all routines unavailable");
            Backend::Unavailable
        }
    }
}
