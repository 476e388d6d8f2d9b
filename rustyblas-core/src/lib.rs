//! # RustyBLAS Core
//!
//! Shared conventions for the RustyBLAS kernels.
//!
//! This crate provides:
//! - **Mode selectors**: closed `Transpose` / `Uplo` / `Diag` / `Side` enums with
//!   checked parsing from Fortran character codes and CBLAS integer codes.
//! - **Addressing model**: signed-increment vector views (`Stride`).
//! - **Storage index maps**: dense, packed-triangular and banded offsets.
//! - **Machine constants**: exact power-of-two scaling thresholds for
//!   overflow-safe norms and rotations.

pub mod error;
pub mod layout;
pub mod machine;
pub mod packed;
pub mod stride;

pub use error::{BlasError, Result};
pub use layout::{Diag, Side, Transpose, Uplo};
pub use stride::Stride;
