//! Floating-point machine constants as reported by `xlamch`.

use std::sync::OnceLock;

use crate::kernels::Kernels;
use crate::traits::RealElement;

/// Thresholds for one real precision.
///
/// `underflow` is the safe minimum `lamch('S')`: the smallest positive
/// value whose reciprocal does not overflow. `small` and `big` bound the
/// range in which scaling keeps full relative precision, as used by rank
/// and tolerance decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineConstants<R> {
    pub underflow: R,
    /// `lamch('S') / lamch('P')`
    pub small: R,
    /// `1 / small`
    pub big: R,
}

impl<R: RealElement> MachineConstants<R> {
    /// Build from the safe minimum `sfmin` and the precision `eps * base`.
    ///
    /// ```
    /// use numeris_lapack::MachineConstants;
    ///
    /// let c = MachineConstants::from_lamch(1e-300_f64, 1e-16);
    /// assert_eq!(c.underflow, 1e-300);
    /// assert!((c.small - 1e-284).abs() < 1e-290);
    /// assert!((c.big * c.small - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_lamch(sfmin: R, precision: R) -> Self {
        let small = sfmin / precision;
        Self {
            underflow: sfmin,
            small,
            big: R::one() / small,
        }
    }

    /// Query `kernels` for this precision's constants.
    pub fn query<K: Kernels + ?Sized>(kernels: &K) -> Self {
        Self::from_lamch(R::lamch(kernels, b'S'), R::lamch(kernels, b'P'))
    }

    /// The `(small, big)` pair.
    pub fn precision(&self) -> (R, R) {
        (self.small, self.big)
    }
}

/// Lazily filled constants for both precisions.
///
/// Each precision is computed on first request and reused for the lifetime
/// of the owning facade.
#[derive(Debug, Default)]
pub struct MachineCache {
    pub(crate) single: OnceLock<MachineConstants<f32>>,
    pub(crate) double: OnceLock<MachineConstants<f64>>,
}

impl MachineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constants for precision `R`, querying `kernels` at most once.
    pub fn get<R: RealElement, K: Kernels + ?Sized>(&self, kernels: &K) -> MachineConstants<R> {
        *R::machine_slot(self).get_or_init(|| {
            let constants = MachineConstants::<R>::query(kernels);
            tracing::debug!(
                underflow = constants.underflow.as_f64(),
                small = constants.small.as_f64(),
                "machine constants computed"
            );
            constants
        })
    }
}
