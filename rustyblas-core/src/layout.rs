//! BLAS mode selectors: transpose, triangle, diagonal and side.
//!
//! Each selector is a closed enumeration carrying its CBLAS numeric code.
//! Selectors can be parsed from the classic single-character Fortran codes
//! (`b'N'`, `b'T'`, `b'U'`, ...) or from the CBLAS integer codes; any other
//! value is rejected with [`BlasError::InvalidSelector`].

use crate::error::BlasError;

/// Transpose operation for matrices.
///
/// Data is real-valued, so `Trans` and `ConjTrans` select the same traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Transpose {
    /// No transpose.
    #[default]
    NoTrans = 111,
    /// Transpose.
    Trans = 112,
    /// Conjugate transpose (identical to `Trans` for real data).
    ConjTrans = 113,
}

impl Transpose {
    /// `true` for `Trans` and `ConjTrans`.
    #[inline(always)]
    pub fn is_trans(self) -> bool {
        !matches!(self, Transpose::NoTrans)
    }
}

/// BLAS triangle specifier (upper/lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Uplo {
    #[default]
    Upper = 121,
    Lower = 122,
}

/// BLAS diagonal specifier (unit/non-unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Diag {
    #[default]
    NonUnit = 131,
    /// Diagonal is implicitly 1.0 and never read from the matrix buffer.
    Unit = 132,
}

impl Diag {
    #[inline(always)]
    pub fn is_unit(self) -> bool {
        matches!(self, Diag::Unit)
    }
}

/// BLAS side specifier (left/right multiplication).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Side {
    #[default]
    Left = 141,
    Right = 142,
}

macro_rules! selector_conversions {
    ($ty:ident, $param:literal, chars: [$($ch:literal => $chv:ident),+ $(,)?], codes: [$($code:ident),+ $(,)?]) => {
        impl TryFrom<u8> for $ty {
            type Error = BlasError;

            fn try_from(c: u8) -> Result<Self, Self::Error> {
                match c.to_ascii_uppercase() {
                    $($ch => Ok($ty::$chv),)+
                    _ => Err(BlasError::InvalidSelector {
                        param: $param,
                        value: u32::from(c),
                    }),
                }
            }
        }

        impl TryFrom<u32> for $ty {
            type Error = BlasError;

            fn try_from(code: u32) -> Result<Self, Self::Error> {
                $(if code == $ty::$code as u32 {
                    return Ok($ty::$code);
                })+
                Err(BlasError::InvalidSelector { param: $param, value: code })
            }
        }
    };
}

selector_conversions!(Transpose, "trans",
    chars: [b'N' => NoTrans, b'T' => Trans, b'C' => ConjTrans],
    codes: [NoTrans, Trans, ConjTrans]);
selector_conversions!(Uplo, "uplo",
    chars: [b'U' => Upper, b'L' => Lower],
    codes: [Upper, Lower]);
selector_conversions!(Diag, "diag",
    chars: [b'N' => NonUnit, b'U' => Unit],
    codes: [NonUnit, Unit]);
selector_conversions!(Side, "side",
    chars: [b'L' => Left, b'R' => Right],
    codes: [Left, Right]);
