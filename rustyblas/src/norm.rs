//! Euclidean norm with Blue's three-accumulator scaling.
//!
//! Each `|x_i|` is classified against `TSML` / `TBIG`:
//! - big values are scaled down by `SBIG` before squaring,
//! - small values are scaled up by `SSML` before squaring (only while no big
//!   value has been seen, since they can no longer affect the result),
//! - everything else is squared as is.
//!
//! No intermediate sum overflows or underflows unless the norm itself does.

use rustyblas_core::machine::{SBIG, SSML, TBIG, TSML};
use rustyblas_core::Stride;

// ============================================================================
// NRM2: Euclidean norm
// ============================================================================

/// Double-precision nrm2: `||x||_2 = sqrt(x^T * x)`.
///
/// A NaN anywhere in `x` propagates to the result. `n == 0` returns 0.0.
pub fn dnrm2(n: usize, x: &[f64], incx: isize) -> f64 {
    if n == 0 {
        return 0.0;
    }

    let mut notbig = true;
    let mut asml = 0.0f64;
    let mut amed = 0.0f64;
    let mut abig = 0.0f64;

    for ix in Stride::new(n, incx).iter(n) {
        let ax = x[ix].abs();
        if ax > TBIG {
            abig += (ax * SBIG) * (ax * SBIG);
            notbig = false;
        } else if ax < TSML {
            if notbig {
                asml += (ax * SSML) * (ax * SSML);
            }
        } else {
            amed += ax * ax;
        }
    }

    let (scl, sumsq) = if abig > 0.0 {
        // Fold the mid-range sum into the big one; a NaN in amed must survive.
        if amed > 0.0 || amed.is_nan() {
            abig += (amed * SBIG) * SBIG;
        }
        (1.0 / SBIG, abig)
    } else if asml > 0.0 {
        if amed > 0.0 || amed.is_nan() {
            let amed = amed.sqrt();
            let asml = asml.sqrt() / SSML;
            let (ymin, ymax) = if asml > amed { (amed, asml) } else { (asml, amed) };
            let ratio = ymin / ymax;
            (1.0, ymax * ymax * (1.0 + ratio * ratio))
        } else {
            (1.0 / SSML, asml)
        }
    } else {
        (1.0, amed)
    };

    scl * sumsq.sqrt()
}
