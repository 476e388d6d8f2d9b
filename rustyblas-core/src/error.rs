//! Error type for the checked conversion layer.
//!
//! Kernels themselves never fail: malformed dimensions are caller contract
//! violations. Only the parsing of mode selectors and modified-rotation
//! descriptors from their raw encodings can be rejected.

/// Errors from converting raw BLAS encodings into typed values.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum BlasError {
    /// A mode selector code outside the legal set for `param`.
    #[error("invalid value {value} for BLAS selector '{param}'")]
    InvalidSelector { param: &'static str, value: u32 },

    /// A modified-Givens flag other than -2, -1, 0 or 1.
    #[error("invalid modified Givens flag {0}: expected -2, -1, 0 or 1")]
    InvalidRotmFlag(f64),
}

pub type Result<T> = std::result::Result<T, BlasError>;
