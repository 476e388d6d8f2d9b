//! BLAS Level 1: Vector-vector operations.
//!
//! Every routine addresses its vectors through [`Stride`], so negative
//! increments walk the slice backward starting at its last logical element.
//! Contiguous views (`inc == 1`) take an unrolled path: the `n mod U`
//! remainder is processed first, then blocks of `U`. Reductions keep a fixed
//! left-to-right grouping within each path so results are reproducible.
//!
//! The Euclidean norm lives in [`crate::norm`], rotation generation in
//! [`crate::rotation`].

use rustyblas_core::stride::required_len;
use rustyblas_core::Stride;

use crate::rotation::RotmParam;

// ============================================================================
// ASUM: sum of absolute values
// ============================================================================

/// Double-precision asum: `sum(|x_i|)`.
pub fn dasum(n: usize, x: &[f64], incx: isize) -> f64 {
    let mut dtemp = 0.0f64;
    if n == 0 {
        return dtemp;
    }

    let sx = Stride::new(n, incx);
    debug_assert!(x.len() >= required_len(n, incx));
    if sx.is_unit() {
        let m = n % 6;
        for xi in &x[..m] {
            dtemp += xi.abs();
        }
        for c in x[m..n].chunks_exact(6) {
            dtemp = dtemp
                + c[0].abs()
                + c[1].abs()
                + c[2].abs()
                + c[3].abs()
                + c[4].abs()
                + c[5].abs();
        }
    } else {
        for ix in sx.iter(n) {
            dtemp += x[ix].abs();
        }
    }
    dtemp
}

// ============================================================================
// AXPY: y = alpha * x + y
// ============================================================================

/// Double-precision axpy: `y := alpha * x + y`.
pub fn daxpy(n: usize, alpha: f64, x: &[f64], incx: isize, y: &mut [f64], incy: isize) {
    if n == 0 || alpha == 0.0 {
        return;
    }

    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    debug_assert!(x.len() >= required_len(n, incx) && y.len() >= required_len(n, incy));
    if sx.is_unit() && sy.is_unit() {
        let m = n % 4;
        for (yi, xi) in y[..m].iter_mut().zip(&x[..m]) {
            *yi += alpha * xi;
        }
        for (yc, xc) in y[m..n].chunks_exact_mut(4).zip(x[m..n].chunks_exact(4)) {
            yc[0] += alpha * xc[0];
            yc[1] += alpha * xc[1];
            yc[2] += alpha * xc[2];
            yc[3] += alpha * xc[3];
        }
    } else {
        for (ix, iy) in sx.iter(n).zip(sy.iter(n)) {
            y[iy] += alpha * x[ix];
        }
    }
}

// ============================================================================
// AXPBY: y = alpha * x + beta * y
// ============================================================================

/// Double-precision axpby: `y := alpha * x + beta * y`.
///
/// `beta == 0` overwrites `y` without reading it; `alpha == 0` never reads `x`.
pub fn daxpby(
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    if n == 0 || (alpha == 0.0 && beta == 1.0) {
        return;
    }

    let sy = Stride::new(n, incy);
    if alpha == 0.0 {
        for iy in sy.iter(n) {
            y[iy] = if beta == 0.0 { 0.0 } else { beta * y[iy] };
        }
        return;
    }

    let sx = Stride::new(n, incx);
    for (ix, iy) in sx.iter(n).zip(sy.iter(n)) {
        y[iy] = if beta == 0.0 {
            alpha * x[ix]
        } else if beta == 1.0 {
            y[iy] + alpha * x[ix]
        } else {
            beta * y[iy] + alpha * x[ix]
        };
    }
}

// ============================================================================
// COPY: x -> y
// ============================================================================

/// Double-precision copy: `y := x`.
pub fn dcopy(n: usize, x: &[f64], incx: isize, y: &mut [f64], incy: isize) {
    if n == 0 {
        return;
    }

    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    debug_assert!(x.len() >= required_len(n, incx) && y.len() >= required_len(n, incy));
    if sx.is_unit() && sy.is_unit() {
        y[..n].copy_from_slice(&x[..n]);
    } else {
        for (ix, iy) in sx.iter(n).zip(sy.iter(n)) {
            y[iy] = x[ix];
        }
    }
}

// ============================================================================
// DOT: inner product
// ============================================================================

/// Double-precision dot product: `x^T * y`.
pub fn ddot(n: usize, x: &[f64], incx: isize, y: &[f64], incy: isize) -> f64 {
    let mut dtemp = 0.0f64;
    if n == 0 {
        return dtemp;
    }

    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    debug_assert!(x.len() >= required_len(n, incx) && y.len() >= required_len(n, incy));
    if sx.is_unit() && sy.is_unit() {
        let m = n % 5;
        for (xi, yi) in x[..m].iter().zip(&y[..m]) {
            dtemp += xi * yi;
        }
        for (xc, yc) in x[m..n].chunks_exact(5).zip(y[m..n].chunks_exact(5)) {
            dtemp = dtemp
                + xc[0] * yc[0]
                + xc[1] * yc[1]
                + xc[2] * yc[2]
                + xc[3] * yc[3]
                + xc[4] * yc[4];
        }
    } else {
        for (ix, iy) in sx.iter(n).zip(sy.iter(n)) {
            dtemp += x[ix] * y[iy];
        }
    }
    dtemp
}

// ============================================================================
// SCAL: x = alpha * x
// ============================================================================

/// Double-precision scal: `x := alpha * x`.
///
/// `alpha == 1` returns without touching `x`.
pub fn dscal(n: usize, alpha: f64, x: &mut [f64], incx: isize) {
    if n == 0 || alpha == 1.0 {
        return;
    }

    let sx = Stride::new(n, incx);
    debug_assert!(x.len() >= required_len(n, incx));
    if sx.is_unit() {
        let m = n % 5;
        for xi in &mut x[..m] {
            *xi *= alpha;
        }
        for c in x[m..n].chunks_exact_mut(5) {
            c[0] *= alpha;
            c[1] *= alpha;
            c[2] *= alpha;
            c[3] *= alpha;
            c[4] *= alpha;
        }
    } else {
        for ix in sx.iter(n) {
            x[ix] *= alpha;
        }
    }
}

// ============================================================================
// SWAP: x <-> y
// ============================================================================

/// Double-precision swap: `x <-> y`.
pub fn dswap(n: usize, x: &mut [f64], incx: isize, y: &mut [f64], incy: isize) {
    if n == 0 {
        return;
    }

    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    debug_assert!(x.len() >= required_len(n, incx) && y.len() >= required_len(n, incy));
    if sx.is_unit() && sy.is_unit() {
        x[..n].swap_with_slice(&mut y[..n]);
    } else {
        for (ix, iy) in sx.iter(n).zip(sy.iter(n)) {
            std::mem::swap(&mut x[ix], &mut y[iy]);
        }
    }
}

// ============================================================================
// IAMAX: index of max absolute value
// ============================================================================

/// Double-precision iamax: logical index of the first element of largest `|x_i|`.
///
/// Indices are 0-based and count logical elements, so with a negative
/// increment index 0 is the element at the highest physical slot.
/// Returns 0 for `n == 0`.
pub fn idamax(n: usize, x: &[f64], incx: isize) -> usize {
    if n == 0 {
        return 0;
    }

    let mut max_idx = 0;
    let mut max_val = f64::NEG_INFINITY;
    for (k, ix) in Stride::new(n, incx).iter(n).enumerate() {
        let v = x[ix].abs();
        if k == 0 || v > max_val {
            max_val = v;
            max_idx = k;
        }
    }
    max_idx
}

// ============================================================================
// ROT / ROTM: apply plane and modified rotations
// ============================================================================

/// Double-precision rot: apply the plane rotation `[c s; -s c]` to pairs `(x_i, y_i)`.
pub fn drot(n: usize, x: &mut [f64], incx: isize, y: &mut [f64], incy: isize, c: f64, s: f64) {
    if n == 0 {
        return;
    }

    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    for (ix, iy) in sx.iter(n).zip(sy.iter(n)) {
        let dtemp = c * x[ix] + s * y[iy];
        y[iy] = c * y[iy] - s * x[ix];
        x[ix] = dtemp;
    }
}

/// Double-precision rotm: apply a modified-Givens transform `H` to pairs `(x_i, y_i)`.
///
/// [`RotmParam::Identity`] returns without touching either vector.
pub fn drotm(
    n: usize,
    x: &mut [f64],
    incx: isize,
    y: &mut [f64],
    incy: isize,
    param: &RotmParam,
) {
    if n == 0 || matches!(param, RotmParam::Identity) {
        return;
    }

    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    for (ix, iy) in sx.iter(n).zip(sy.iter(n)) {
        let (w, z) = param.apply(x[ix], y[iy]);
        x[ix] = w;
        y[iy] = z;
    }
}
