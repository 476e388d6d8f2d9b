//! Output scaling shared by every kernel with an alpha/beta pair.
//!
//! `beta == 1` leaves the output alone, `beta == 0` writes exact zeros (old
//! NaN/Inf values are discarded, not multiplied), anything else scales.

use rustyblas_core::Stride;

/// `y := beta * y` over `n` elements of a strided view.
#[inline]
pub(crate) fn scale_vector(n: usize, beta: f64, y: &mut [f64], sy: Stride) {
    if beta == 1.0 {
        return;
    }
    if beta == 0.0 {
        for iy in sy.iter(n) {
            y[iy] = 0.0;
        }
    } else {
        for iy in sy.iter(n) {
            y[iy] *= beta;
        }
    }
}

/// `c := beta * c` over a contiguous run, typically one column segment.
#[inline]
pub(crate) fn scale_slice(beta: f64, c: &mut [f64]) {
    if beta == 1.0 {
        return;
    }
    if beta == 0.0 {
        c.fill(0.0);
    } else {
        for v in c {
            *v *= beta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta_zero_discards_nan() {
        let mut y = vec![f64::NAN, f64::INFINITY, 3.0];
        scale_vector(3, 0.0, &mut y, Stride::new(3, 1));
        assert_eq!(y, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_beta_one_untouched() {
        let mut y = vec![f64::NAN];
        scale_slice(1.0, &mut y);
        assert!(y[0].is_nan());
    }

    #[test]
    fn test_beta_scales_strided() {
        let mut y = vec![1.0, 7.0, 2.0];
        scale_vector(2, 3.0, &mut y, Stride::new(2, -2));
        assert_eq!(y, vec![3.0, 7.0, 6.0]);
    }
}
