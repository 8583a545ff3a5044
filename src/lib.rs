//! # numeris-lapack
//!
//! Type-generic dispatch onto LAPACK and BLAS. One call site,
//! `lapack.getrf::<T>(...)`, reaches `sgetrf`, `dgetrf`, `cgetrf` or
//! `zgetrf` depending on whether `T` is `f32`, `f64`, `Complex<f32>` or
//! `Complex<f64>`, and any other element type fails to compile.
//!
//! ## Quick start
//!
//! ```
//! use numeris_lapack::{DynMatrix, Lapack, LapackError, Uplo};
//!
//! let lapack = Lapack::detect();
//! let mut a = DynMatrix::from_rows(2, 2, &[4.0_f64, 2.0, 2.0, 3.0]);
//! match lapack.potrf(Uplo::Lower, a.view_mut().unwrap()) {
//!     Ok(status) => assert!(status.is_success()),
//!     // built without the `lapack` feature
//!     Err(err) => assert!(matches!(err, LapackError::BackendUnavailable { .. })),
//! }
//! ```
//!
//! ## What the facade does for every call
//!
//! - Checks operand shapes and slice lengths before any foreign code runs.
//! - Runs the `lwork = -1` workspace query where the routine has one and
//!   allocates exactly the reported scratch ([`oracle`], [`Workspace`]).
//! - Sizes auxiliary real and integer scratch from the routine's documented
//!   formulas.
//! - Turns `info < 0` into [`LapackError::InvalidArgument`] and `info > 0`
//!   into [`Status::Degenerate`] ([`status`]).
//! - Expands the packed eigenvectors of real `xgeev` into complex columns
//!   ([`eigen`]).
//!
//! ## Modules
//!
//! - [`facade`]: the [`Lapack`] facade and its [`Settings`].
//! - [`dispatch`]: the per-element-type routing trait [`Dispatch`].
//! - [`kernels`]: the raw routine contract, the `lapack`/`blas` binding and
//!   the uninhabited [`kernels::NoKernels`].
//! - [`backend`]: whether kernels are present ([`Backend`]).
//! - [`view`] and [`matrix`]: borrowed column-major views and an owned
//!   [`DynMatrix`].
//! - [`flags`]: typed LAPACK character arguments.
//! - [`machine`]: cached `xlamch` constants.
//!
//! ## Cargo features
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `lapack`   | no      | Bind to the system LAPACK/BLAS via the `lapack` and `blas` crates |
//! | `openblas` | no      | `lapack` plus linking OpenBLAS through `openblas-src` |
//!
//! Without `lapack` every routine returns [`LapackError::BackendUnavailable`].

#[cfg(feature = "openblas")]
extern crate openblas_src;

pub mod backend;
pub mod dispatch;
pub mod eigen;
pub mod error;
pub mod flags;
pub mod kernels;
pub mod facade;
pub mod machine;
pub mod matrix;
pub mod oracle;
pub mod status;
pub mod traits;
pub mod view;
pub mod workspace;

pub use backend::{Backend, DefaultKernels};
pub use dispatch::{ConditionEstimate, Dispatch};
pub use error::{LapackError, Result, Routine};
pub use flags::{
    ConditionJob, Diag, EigenJob, EigenRange, Norm, ScaleKind, Side, SvdJob, Transpose, Uplo,
};
pub use facade::{Lapack, Settings};
pub use machine::{MachineCache, MachineConstants};
pub use matrix::DynMatrix;
pub use status::{EigenSelection, LeastSquares, Status};
pub use traits::{Element, ElementKind, RealElement};
pub use view::{MatMut, MatRef};
pub use workspace::Workspace;

pub use num_complex::Complex;
