use core::fmt::Debug;
use std::sync::OnceLock;

use num_complex::Complex;
use num_traits::{Float, Num, One, Zero};

use crate::kernels::Kernels;
use crate::machine::{MachineCache, MachineConstants};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for num_complex::Complex<f32> {}
    impl Sealed for num_complex::Complex<f64> {}
}

/// The four element kinds a LAPACK routine family is instantiated for.
///
/// ```
/// use numeris_lapack::{Element, ElementKind};
/// use num_complex::Complex;
///
/// assert_eq!(<f64 as Element>::KIND, ElementKind::Real64);
/// assert_eq!(<Complex<f32> as Element>::KIND.prefix(), 'c');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `f32`, routines prefixed `s`.
    Real32,
    /// `f64`, routines prefixed `d`.
    Real64,
    /// `Complex<f32>`, routines prefixed `c`.
    Complex32,
    /// `Complex<f64>`, routines prefixed `z`.
    Complex64,
}

impl ElementKind {
    /// The single-letter LAPACK routine prefix for this kind.
    pub const fn prefix(self) -> char {
        match self {
            ElementKind::Real32 => 's',
            ElementKind::Real64 => 'd',
            ElementKind::Complex32 => 'c',
            ElementKind::Complex64 => 'z',
        }
    }

    /// Whether elements of this kind carry an imaginary part.
    pub const fn is_complex(self) -> bool {
        matches!(self, ElementKind::Complex32 | ElementKind::Complex64)
    }
}

impl core::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ElementKind::Real32 => "real32",
            ElementKind::Real64 => "real64",
            ElementKind::Complex32 => "complex32",
            ElementKind::Complex64 => "complex64",
        };
        f.write_str(name)
    }
}

/// Trait for matrix elements LAPACK can operate on.
///
/// Sealed: implemented for `f32`, `f64`, `Complex<f32>` and `Complex<f64>`
/// only, so a call with any other element type fails to compile.
pub trait Element:
    Copy + PartialEq + Debug + Default + Zero + One + Num + Send + Sync + 'static + sealed::Sealed
{
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: RealElement;

    /// Which routine family this type maps to.
    const KIND: ElementKind;

    /// Absolute value / modulus.
    fn modulus(self) -> Self::Real;

    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;
}

/// Real floating-point elements: `f32` and `f64`.
///
/// Besides the numeric bounds this carries the per-precision hooks that
/// generic code cannot express through trait bounds on the kernel set.
pub trait RealElement: Element<Real = Self> + Float {
    /// Convert an `f64` constant into this precision.
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64`.
    fn as_f64(self) -> f64;

    /// Call this precision's `xlamch`.
    #[doc(hidden)]
    fn lamch<K: Kernels + ?Sized>(kernels: &K, cmach: u8) -> Self;

    /// This precision's slot in a facade's machine-constant cache.
    #[doc(hidden)]
    fn machine_slot(cache: &MachineCache) -> &OnceLock<MachineConstants<Self>>;
}

macro_rules! impl_element_real {
    ($t:ty, $kind:expr, $slot:ident) => {
        impl Element for $t {
            type Real = $t;
            const KIND: ElementKind = $kind;

            #[inline] fn modulus(self) -> $t { Float::abs(self) }
            #[inline] fn conj(self) -> $t { self }
            #[inline] fn re(self) -> $t { self }
            #[inline] fn from_real(r: $t) -> $t { r }
        }

        impl RealElement for $t {
            #[inline]
            fn from_f64(v: f64) -> $t {
                v as $t
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            fn lamch<K: Kernels + ?Sized>(kernels: &K, cmach: u8) -> $t {
                <K as crate::kernels::RealKernels<$t>>::lamch(kernels, cmach)
            }

            fn machine_slot(cache: &MachineCache) -> &OnceLock<MachineConstants<$t>> {
                &cache.$slot
            }
        }
    };
}

impl_element_real!(f32, ElementKind::Real32, single);
impl_element_real!(f64, ElementKind::Real64, double);

macro_rules! impl_element_complex {
    ($t:ty, $kind:expr) => {
        impl Element for Complex<$t> {
            type Real = $t;
            const KIND: ElementKind = $kind;

            #[inline]
            fn modulus(self) -> $t {
                self.norm()
            }

            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }

            #[inline]
            fn re(self) -> $t {
                self.re
            }

            #[inline]
            fn from_real(r: $t) -> Self {
                Complex::new(r, 0.0)
            }
        }
    };
}

impl_element_complex!(f32, ElementKind::Complex32);
impl_element_complex!(f64, ElementKind::Complex64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_follow_lapack_naming() {
        assert_eq!(<f32 as Element>::KIND.prefix(), 's');
        assert_eq!(<f64 as Element>::KIND.prefix(), 'd');
        assert_eq!(<Complex<f32> as Element>::KIND.prefix(), 'c');
        assert_eq!(<Complex<f64> as Element>::KIND.prefix(), 'z');
    }

    #[test]
    fn complex_kinds_report_complex() {
        assert!(!ElementKind::Real32.is_complex());
        assert!(!ElementKind::Real64.is_complex());
        assert!(ElementKind::Complex32.is_complex());
        assert!(ElementKind::Complex64.is_complex());
    }

    #[test]
    fn complex_element_helpers() {
        let z = Complex::new(3.0_f64, -4.0);
        assert_eq!(z.modulus(), 5.0);
        assert_eq!(z.re(), 3.0);
        assert_eq!(Element::conj(z), Complex::new(3.0, 4.0));
        assert_eq!(<Complex<f64> as Element>::from_real(2.0), Complex::new(2.0, 0.0));
    }

    #[test]
    fn real_element_helpers() {
        assert_eq!((-2.5_f32).modulus(), 2.5);
        assert_eq!(Element::conj(1.5_f64), 1.5);
        assert_eq!(<f32 as RealElement>::from_f64(0.25), 0.25_f32);
        assert_eq!(0.5_f32.as_f64(), 0.5);
    }
}
