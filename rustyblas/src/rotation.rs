//! Plane (Givens) and modified-Givens rotation generation.
//!
//! - [`drotg`] builds `(c, s)` so that `[c s; -s c] * [a; b] = [r; 0]`, computing
//!   the hypotenuse at a clamped scale so it never overflows or underflows
//!   spuriously.
//! - [`drotmg`] builds the square-root-free modified transform `H` that zeros
//!   the second component of `(sqrt(d1)*x1, sqrt(d2)*y1)`, and keeps the
//!   scale factors `d1`, `d2` inside a safe band by repeated rescaling.

use rustyblas_core::machine::{SAFMAX, SAFMIN};
use rustyblas_core::{BlasError, Result};

// ============================================================================
// ROTG: Givens rotation
// ============================================================================

/// Double-precision Givens rotation generation.
///
/// On return `a` holds `r = ±sqrt(a² + b²)` and `b` holds the reconstruction
/// value `z` (`s` if `|a| > |b|`, `1/c` if `c != 0`, otherwise 1). Returns `(c, s)`.
///
/// The sign of `r` follows whichever input has the larger magnitude (`b` on a
/// tie). `b == 0` gives the identity rotation; `a == 0` gives the swap rotation
/// `c = 0, s = 1` with `a := b`.
pub fn drotg(a: &mut f64, b: &mut f64) -> (f64, f64) {
    let anorm = a.abs();
    let bnorm = b.abs();

    if bnorm == 0.0 {
        *b = 0.0;
        return (1.0, 0.0);
    }
    if anorm == 0.0 {
        *a = *b;
        *b = 1.0;
        return (0.0, 1.0);
    }

    let scl = anorm.max(bnorm).max(SAFMIN).min(SAFMAX);
    let dominant = if anorm > bnorm { *a } else { *b };
    let sigma = if dominant >= 0.0 { 1.0 } else { -1.0 };
    let (sa, sb) = (*a / scl, *b / scl);
    let r = sigma * (scl * (sa * sa + sb * sb).sqrt());
    let c = *a / r;
    let s = *b / r;

    let z = if anorm > bnorm {
        s
    } else if c != 0.0 {
        1.0 / c
    } else {
        1.0
    };

    *a = r;
    *b = z;
    (c, s)
}

// ============================================================================
// ROTMG: modified Givens transform
// ============================================================================

/// A modified-Givens transform `H`, tagged by its classical flag value.
///
/// Entries not stored in a variant are implied: the off-diagonal form has a
/// unit diagonal, the diagonal form has `h21 = -1`, `h12 = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotmParam {
    /// flag = -1: `H = [h11 h12; h21 h22]`.
    Full { h11: f64, h21: f64, h12: f64, h22: f64 },
    /// flag = 0: `H = [1 h12; h21 1]`.
    OffDiagonal { h21: f64, h12: f64 },
    /// flag = 1: `H = [h11 1; -1 h22]`.
    Diagonal { h11: f64, h22: f64 },
    /// flag = -2: `H = I`.
    Identity,
}

impl RotmParam {
    /// The classical flag encoding of this form.
    pub fn flag(&self) -> f64 {
        match self {
            RotmParam::Full { .. } => -1.0,
            RotmParam::OffDiagonal { .. } => 0.0,
            RotmParam::Diagonal { .. } => 1.0,
            RotmParam::Identity => -2.0,
        }
    }

    /// The full 2×2 matrix `[[h11, h12], [h21, h22]]`, implied entries filled in.
    pub fn matrix(&self) -> [[f64; 2]; 2] {
        match *self {
            RotmParam::Full { h11, h21, h12, h22 } => [[h11, h12], [h21, h22]],
            RotmParam::OffDiagonal { h21, h12 } => [[1.0, h12], [h21, 1.0]],
            RotmParam::Diagonal { h11, h22 } => [[h11, 1.0], [-1.0, h22]],
            RotmParam::Identity => [[1.0, 0.0], [0.0, 1.0]],
        }
    }

    /// Apply `H` to the pair `(w, z)`: returns `H * [w; z]`.
    #[inline(always)]
    pub fn apply(&self, w: f64, z: f64) -> (f64, f64) {
        match *self {
            RotmParam::Full { h11, h21, h12, h22 } => (w * h11 + z * h12, w * h21 + z * h22),
            RotmParam::OffDiagonal { h21, h12 } => (w + z * h12, w * h21 + z),
            RotmParam::Diagonal { h11, h22 } => (w * h11 + z, -w + h22 * z),
            RotmParam::Identity => (w, z),
        }
    }

    /// Write into the classical `[flag, h11, h21, h12, h22]` array.
    ///
    /// Only the flag and the entries stored by this form are written; the
    /// remaining slots keep their previous contents.
    pub fn write_to(&self, param: &mut [f64; 5]) {
        param[0] = self.flag();
        match *self {
            RotmParam::Full { h11, h21, h12, h22 } => {
                param[1] = h11;
                param[2] = h21;
                param[3] = h12;
                param[4] = h22;
            }
            RotmParam::OffDiagonal { h21, h12 } => {
                param[2] = h21;
                param[3] = h12;
            }
            RotmParam::Diagonal { h11, h22 } => {
                param[1] = h11;
                param[4] = h22;
            }
            RotmParam::Identity => {}
        }
    }
}

impl TryFrom<[f64; 5]> for RotmParam {
    type Error = BlasError;

    fn try_from(param: [f64; 5]) -> Result<Self> {
        let [flag, h11, h21, h12, h22] = param;
        if flag == -1.0 {
            Ok(RotmParam::Full { h11, h21, h12, h22 })
        } else if flag == 0.0 {
            Ok(RotmParam::OffDiagonal { h21, h12 })
        } else if flag == 1.0 {
            Ok(RotmParam::Diagonal { h11, h22 })
        } else if flag == -2.0 {
            Ok(RotmParam::Identity)
        } else {
            Err(BlasError::InvalidRotmFlag(flag))
        }
    }
}

impl From<RotmParam> for [f64; 5] {
    /// Classical array with unused entries set to zero.
    fn from(p: RotmParam) -> Self {
        let mut param = [0.0; 5];
        p.write_to(&mut param);
        param
    }
}

const GAM: f64 = 4096.0;
const GAMSQ: f64 = 16_777_216.0;
const RGAMSQ: f64 = 5.9604645e-8;

/// Working state of the transform while `drotmg` rescales it.
#[derive(Clone, Copy, PartialEq)]
enum Form {
    OffDiagonal,
    Diagonal,
    Full,
}

struct Transform {
    form: Form,
    h11: f64,
    h21: f64,
    h12: f64,
    h22: f64,
}

impl Transform {
    /// Promote to the full form, materialising the implied entries once.
    fn make_full(&mut self) {
        match self.form {
            Form::OffDiagonal => {
                self.h11 = 1.0;
                self.h22 = 1.0;
            }
            Form::Diagonal => {
                self.h21 = -1.0;
                self.h12 = 1.0;
            }
            Form::Full => {}
        }
        self.form = Form::Full;
    }

    fn into_param(self) -> RotmParam {
        match self.form {
            Form::Full => RotmParam::Full {
                h11: self.h11,
                h21: self.h21,
                h12: self.h12,
                h22: self.h22,
            },
            Form::OffDiagonal => RotmParam::OffDiagonal {
                h21: self.h21,
                h12: self.h12,
            },
            Form::Diagonal => RotmParam::Diagonal {
                h11: self.h11,
                h22: self.h22,
            },
        }
    }
}

/// Degenerate result: zero transform, scale factors and `x1`.
fn zero_transform(d1: &mut f64, d2: &mut f64, x1: &mut f64) -> RotmParam {
    *d1 = 0.0;
    *d2 = 0.0;
    *x1 = 0.0;
    RotmParam::Full {
        h11: 0.0,
        h21: 0.0,
        h12: 0.0,
        h22: 0.0,
    }
}

/// Double-precision modified Givens transform generation.
///
/// Builds `H` such that `H * [x1; y1]` has a zero second component when the
/// rows are weighted by `sqrt(d1)` and `sqrt(d2)`. On return `d1`, `d2` and
/// `x1` hold the updated scale factors and first component.
///
/// A negative `d1` forces the zero transform (flag -1, all outputs zero).
/// `d2 * y1 == 0` returns [`RotmParam::Identity`] and leaves the inputs
/// untouched. Whenever a finite scale factor leaves `(RGAMSQ, GAMSQ)` it is
/// rescaled by `GAMSQ` (and the matching row of `H` by `GAM`) until it is back
/// inside; there is no cap on the number of passes.
pub fn drotmg(d1: &mut f64, d2: &mut f64, x1: &mut f64, y1: f64) -> RotmParam {
    if *d1 < 0.0 {
        return zero_transform(d1, d2, x1);
    }

    let p2 = *d2 * y1;
    if p2 == 0.0 {
        return RotmParam::Identity;
    }

    let p1 = *d1 * *x1;
    let q2 = p2 * y1;
    let q1 = p1 * *x1;

    let mut h = Transform {
        form: Form::Full,
        h11: 0.0,
        h21: 0.0,
        h12: 0.0,
        h22: 0.0,
    };

    if q1.abs() > q2.abs() {
        h.h21 = -y1 / *x1;
        h.h12 = p2 / p1;
        let u = 1.0 - h.h12 * h.h21;
        if !(u > 0.0) {
            return zero_transform(d1, d2, x1);
        }
        h.form = Form::OffDiagonal;
        *d1 /= u;
        *d2 /= u;
        *x1 *= u;
    } else {
        if q2 < 0.0 {
            return zero_transform(d1, d2, x1);
        }
        h.form = Form::Diagonal;
        h.h11 = p1 / p2;
        h.h22 = *x1 / y1;
        let u = 1.0 + h.h11 * h.h22;
        let temp = *d2 / u;
        *d2 = *d1 / u;
        *d1 = temp;
        *x1 = y1 * u;
    }

    let mut passes = 0usize;

    if *d1 != 0.0 {
        while d1.is_finite() && (*d1 <= RGAMSQ || *d1 >= GAMSQ) {
            h.make_full();
            if *d1 <= RGAMSQ {
                *d1 *= GAMSQ;
                *x1 /= GAM;
                h.h11 /= GAM;
                h.h12 /= GAM;
            } else {
                *d1 /= GAMSQ;
                *x1 *= GAM;
                h.h11 *= GAM;
                h.h12 *= GAM;
            }
            passes += 1;
        }
    }

    if *d2 != 0.0 {
        while d2.is_finite() && (d2.abs() <= RGAMSQ || d2.abs() >= GAMSQ) {
            h.make_full();
            if d2.abs() <= RGAMSQ {
                *d2 *= GAMSQ;
                h.h21 /= GAM;
                h.h22 /= GAM;
            } else {
                *d2 /= GAMSQ;
                h.h21 *= GAM;
                h.h22 *= GAM;
            }
            passes += 1;
        }
    }

    if passes > 0 {
        log::trace!("drotmg: {passes} rescaling passes, d1 = {d1}, d2 = {d2}");
    }

    h.into_param()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn check_rotg(a0: f64, b0: f64, eps: f64) {
        let (mut a, mut b) = (a0, b0);
        let (c, s) = drotg(&mut a, &mut b);
        let r = c * a0 + s * b0;
        let z = -s * a0 + c * b0;
        let scale = a0.abs().max(b0.abs());
        assert_abs_diff_eq!(r / scale, a / scale, epsilon = eps);
        assert_abs_diff_eq!(z / scale, 0.0, epsilon = eps);
        assert_abs_diff_eq!(c * c + s * s, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_drotg_3_4() {
        let (mut a, mut b) = (3.0, 4.0);
        let (c, s) = drotg(&mut a, &mut b);
        assert_abs_diff_eq!(a, 5.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c, 0.6, epsilon = 1e-15);
        assert_abs_diff_eq!(s, 0.8, epsilon = 1e-15);
        // |a| <= |b|: z = 1/c
        assert_abs_diff_eq!(b, 1.0 / 0.6, epsilon = 1e-14);
        check_rotg(3.0, 4.0, 1e-15);
    }

    #[test]
    fn test_drotg_degenerate() {
        let (mut a, mut b) = (5.0, 0.0);
        assert_eq!(drotg(&mut a, &mut b), (1.0, 0.0));
        assert_eq!((a, b), (5.0, 0.0));

        let (mut a, mut b) = (0.0, 5.0);
        assert_eq!(drotg(&mut a, &mut b), (0.0, 1.0));
        assert_eq!((a, b), (5.0, 1.0));
    }

    #[test]
    fn test_drotg_huge_inputs_do_not_overflow() {
        let (mut a, mut b) = (-1e308, 1e308);
        let (c, s) = drotg(&mut a, &mut b);
        assert!(a.is_finite());
        assert!(a > 0.0, "tie takes the sign of b");
        assert_abs_diff_eq!(a / 1e308, std::f64::consts::SQRT_2, epsilon = 1e-14);
        assert!(c < 0.0 && s > 0.0);
        check_rotg(-1e308, 1e308, 1e-14);
    }

    #[test]
    fn test_drotg_sign_follows_larger_input() {
        let (mut a, mut b) = (-4.0, 3.0);
        drotg(&mut a, &mut b);
        assert_abs_diff_eq!(a, -5.0, epsilon = 1e-15);
        // |a| > |b|: z = s
        assert_abs_diff_eq!(b, -0.6, epsilon = 1e-15);
    }

    #[test]
    fn test_drotg_subnormal_inputs() {
        // subnormal products lose relative precision
        check_rotg(1e-310, 3e-310, 1e-10);
    }

    #[test]
    fn test_drotmg_negative_d1_zeroes_everything() {
        let (mut d1, mut d2, mut x1) = (-1.0, 2.0, 3.0);
        let p = drotmg(&mut d1, &mut d2, &mut x1, 4.0);
        assert_eq!(p.flag(), -1.0);
        assert_eq!(p.matrix(), [[0.0, 0.0], [0.0, 0.0]]);
        assert_eq!((d1, d2, x1), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_drotmg_zero_p2_is_identity() {
        let (mut d1, mut d2, mut x1) = (2.0, 0.0, 3.0);
        let p = drotmg(&mut d1, &mut d2, &mut x1, 4.0);
        assert_eq!(p, RotmParam::Identity);
        assert_eq!((d1, d2, x1), (2.0, 0.0, 3.0));
    }

    #[test]
    fn test_drotmg_off_diagonal_form_zeros_y() {
        let (d1_0, d2_0, x1_0, y1) = (1.0, 1.0, 4.0, 1.0);
        let (mut d1, mut d2, mut x1) = (d1_0, d2_0, x1_0);
        let p = drotmg(&mut d1, &mut d2, &mut x1, y1);
        assert_eq!(p.flag(), 0.0);
        let (_, z) = p.apply(x1_0, y1);
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-15);
        // d1' * x1'^2 preserves d1*x1^2 + d2*y1^2
        assert_abs_diff_eq!(d1 * x1 * x1, d1_0 * x1_0 * x1_0 + d2_0 * y1 * y1, epsilon = 1e-12);
    }

    #[test]
    fn test_drotmg_diagonal_form_zeros_y() {
        let (d1_0, d2_0, x1_0, y1) = (1.0, 1.0, 1.0, 4.0);
        let (mut d1, mut d2, mut x1) = (d1_0, d2_0, x1_0);
        let p = drotmg(&mut d1, &mut d2, &mut x1, y1);
        assert_eq!(p.flag(), 1.0);
        let (_, z) = p.apply(x1_0, y1);
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(d1 * x1 * x1, d1_0 * x1_0 * x1_0 + d2_0 * y1 * y1, epsilon = 1e-12);
    }

    #[test]
    fn test_drotmg_rescales_into_band() {
        let (mut d1, mut d2, mut x1) = (1e-20, 1e-20, 1.0);
        let p = drotmg(&mut d1, &mut d2, &mut x1, 0.5);
        assert_eq!(p.flag(), -1.0, "rescaling promotes to the full form");
        assert!(d1 > RGAMSQ && d1 < GAMSQ);
        assert!(d2.abs() > RGAMSQ && d2.abs() < GAMSQ);
        let (_, z) = p.apply(1.0, 0.5);
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rescale_constants() {
        assert_eq!(GAMSQ, GAM * GAM);
        // rounded decimal of 2^-24, slightly above it
        assert_eq!(RGAMSQ, 5.9604645e-8);
        assert!(RGAMSQ * GAMSQ > 1.0);
        assert!(RGAMSQ * GAMSQ - 1.0 < 1e-7);
    }

    #[test]
    fn test_drotmg_many_rescaling_passes() {
        // 1e-200 needs roughly 27 passes of GAMSQ = 2^24
        let (mut d1, mut d2, mut x1) = (1e-200, 1e-200, 2.0);
        let p = drotmg(&mut d1, &mut d2, &mut x1, 1.0);
        assert!(d1 > RGAMSQ && d1 < GAMSQ);
        assert!(d2.abs() > RGAMSQ && d2.abs() < GAMSQ);
        let (_, z) = p.apply(2.0, 1.0);
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotm_param_array_conversions() {
        let p = RotmParam::try_from([0.0, 9.0, 0.5, -0.25, 9.0]).unwrap();
        assert_eq!(p, RotmParam::OffDiagonal { h21: 0.5, h12: -0.25 });

        let mut arr = [7.0; 5];
        RotmParam::Diagonal { h11: 2.0, h22: 3.0 }.write_to(&mut arr);
        assert_eq!(arr, [1.0, 2.0, 7.0, 7.0, 3.0]);

        let arr: [f64; 5] = RotmParam::Identity.into();
        assert_eq!(arr[0], -2.0);

        assert_eq!(
            RotmParam::try_from([0.5, 0.0, 0.0, 0.0, 0.0]),
            Err(BlasError::InvalidRotmFlag(0.5))
        );
    }
}
