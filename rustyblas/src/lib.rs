// BLAS functions match CBLAS signatures; many parameters are inherent to the API.
// Numeric kernels use index loops on strided arrays where iterators hurt readability.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! # RustyBLAS
//!
//! Pure Rust double-precision reference BLAS. Column-major, no FFI, no
//! unsafe, no allocation: every routine works in place on caller-owned
//! slices.
//!
//! ## BLAS Levels
//!
//! - **Level 1** (vector-vector): `dasum`, `daxpy`, `daxpby`, `dcopy`, `ddot`,
//!   `dnrm2`, `drot`, `drotg`, `drotm`, `drotmg`, `dscal`, `dswap`, `idamax`
//! - **Level 2** (matrix-vector): `dgemv`, `dgbmv`, `dger`, `dsymv`, `dsbmv`,
//!   `dspmv`, `dsyr`, `dsyr2`, `dspr`, `dspr2`, `dtrmv`, `dtrsv`, `dtbmv`,
//!   `dtbsv`, `dtpmv`, `dtpsv`
//! - **Level 3** (matrix-matrix): `dgemm`, `dgemmtr`, `dsymm`, `dsyrk`,
//!   `dsyr2k`, `dtrmm`, `dtrsm`
//!
//! ## Conventions
//!
//! Dimensions and leading dimensions are `usize`; vector increments are
//! `isize` and may be negative, in which case traversal starts at the far
//! end of the slice. Output scaling follows one rule everywhere: `beta == 0`
//! overwrites with exact zeros, `alpha == 0` skips the product entirely.
//!
//! ```
//! use rustyblas::{level3, Transpose};
//!
//! // C = A * B with A = [[1, 2], [3, 4]], B = I
//! let a = [1.0, 3.0, 2.0, 4.0];
//! let b = [1.0, 0.0, 0.0, 1.0];
//! let mut c = [0.0; 4];
//! level3::dgemm(Transpose::NoTrans, Transpose::NoTrans,
//!               2, 2, 2, 1.0, &a, 2, &b, 2, 0.0, &mut c, 2);
//! assert_eq!(c, a);
//! ```

mod beta;
pub mod level1;
pub mod level2;
pub mod level3;
pub mod norm;
pub mod rotation;

// Re-export selector and error types for convenience
pub use rustyblas_core::{BlasError, Diag, Side, Stride, Transpose, Uplo};

pub use level1::{dasum, daxpby, daxpy, dcopy, ddot, drot, drotm, dscal, dswap, idamax};
pub use level2::{
    dgbmv, dgemv, dger, dsbmv, dspmv, dspr, dspr2, dsymv, dsyr, dsyr2, dtbmv, dtbsv, dtpmv,
    dtpsv, dtrmv, dtrsv,
};
pub use level3::{dgemm, dgemmtr, dsymm, dsyr2k, dsyrk, dtrmm, dtrsm};
pub use norm::dnrm2;
pub use rotation::{drotg, drotmg, RotmParam};
