//! Symmetric matrix-vector products and rank-1/rank-2 updates.
//!
//! Only the `uplo` triangle is read or written. Full (`dsy*`), band (`dsb*`)
//! and packed (`dsp*`) variants share one kernel per operation.

use rustyblas_core::{Stride, Uplo};

use super::{Band, Full, Packed, TriangleStorage};
use crate::beta::scale_vector;

// ============================================================================
// Shared kernels
// ============================================================================

/// y := alpha * A * x + beta * y for symmetric `A` held in `s`.
pub(crate) fn symmetric_mv<S: TriangleStorage>(
    s: &S,
    n: usize,
    alpha: f64,
    a: &[f64],
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    if n == 0 || (alpha == 0.0 && beta == 1.0) {
        return;
    }

    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);

    scale_vector(n, beta, y, sy);
    if alpha == 0.0 {
        return;
    }

    // Each stored off-diagonal a(i, j) contributes twice: to y_i through
    // column j and to y_j through the mirrored row.
    for j in 0..n {
        let temp1 = alpha * x[sx.at(j)];
        let mut temp2 = 0.0;
        let diag = temp1 * a[s.index(j, j)];
        if s.uplo() == Uplo::Lower {
            y[sy.at(j)] += diag;
        }
        for i in s.off_diagonal_rows(j) {
            let aij = a[s.index(i, j)];
            y[sy.at(i)] += temp1 * aij;
            temp2 += aij * x[sx.at(i)];
        }
        match s.uplo() {
            Uplo::Upper => y[sy.at(j)] += diag + alpha * temp2,
            Uplo::Lower => y[sy.at(j)] += alpha * temp2,
        }
    }
}

/// A := alpha * x * x^T + A on the stored triangle.
fn rank1_update<S: TriangleStorage>(
    s: &S,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    a: &mut [f64],
) {
    if n == 0 || alpha == 0.0 {
        return;
    }

    let sx = Stride::new(n, incx);
    for j in 0..n {
        let xj = x[sx.at(j)];
        if xj != 0.0 {
            let temp = alpha * xj;
            for i in s.rows(j) {
                a[s.index(i, j)] += x[sx.at(i)] * temp;
            }
        }
    }
}

/// A := alpha * x * y^T + alpha * y * x^T + A on the stored triangle.
fn rank2_update<S: TriangleStorage>(
    s: &S,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
) {
    if n == 0 || alpha == 0.0 {
        return;
    }

    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    for j in 0..n {
        let xj = x[sx.at(j)];
        let yj = y[sy.at(j)];
        if xj != 0.0 || yj != 0.0 {
            let temp1 = alpha * yj;
            let temp2 = alpha * xj;
            for i in s.rows(j) {
                a[s.index(i, j)] += x[sx.at(i)] * temp1 + y[sy.at(i)] * temp2;
            }
        }
    }
}

// ============================================================================
// SYMV / SBMV / SPMV: y := alpha * A * x + beta * y
// ============================================================================

/// Double-precision SYMV: y := alpha * A * x + beta * y, `A` symmetric `n x n`.
pub fn dsymv(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    debug_assert!(lda >= n.max(1));
    let s = Full { uplo, n, lda };
    symmetric_mv(&s, n, alpha, a, x, incx, beta, y, incy);
}

/// Double-precision SBMV: y := alpha * A * x + beta * y, `A` a symmetric band
/// with `k` off-diagonals stored in a `(k + 1) x n` array.
pub fn dsbmv(
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    debug_assert!(lda > k);
    let s = Band { uplo, n, k, lda };
    symmetric_mv(&s, n, alpha, a, x, incx, beta, y, incy);
}

/// Double-precision SPMV: y := alpha * A * x + beta * y, `A` packed.
pub fn dspmv(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    ap: &[f64],
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    let s = Packed { uplo, n };
    symmetric_mv(&s, n, alpha, ap, x, incx, beta, y, incy);
}

// ============================================================================
// SYR / SPR: A := alpha * x * x^T + A
// ============================================================================

/// Double-precision SYR: A := alpha * x * x^T + A
pub fn dsyr(uplo: Uplo, n: usize, alpha: f64, x: &[f64], incx: isize, a: &mut [f64], lda: usize) {
    debug_assert!(lda >= n.max(1));
    rank1_update(&Full { uplo, n, lda }, n, alpha, x, incx, a);
}

/// Double-precision SPR: A := alpha * x * x^T + A, `A` packed.
pub fn dspr(uplo: Uplo, n: usize, alpha: f64, x: &[f64], incx: isize, ap: &mut [f64]) {
    rank1_update(&Packed { uplo, n }, n, alpha, x, incx, ap);
}

// ============================================================================
// SYR2 / SPR2: A := alpha * x * y^T + alpha * y * x^T + A
// ============================================================================

/// Double-precision SYR2: A := alpha * x * y^T + alpha * y * x^T + A
pub fn dsyr2(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
    lda: usize,
) {
    debug_assert!(lda >= n.max(1));
    rank2_update(&Full { uplo, n, lda }, n, alpha, x, incx, y, incy, a);
}

/// Double-precision SPR2: packed form of [`dsyr2`].
pub fn dspr2(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    ap: &mut [f64],
) {
    rank2_update(&Packed { uplo, n }, n, alpha, x, incx, y, incy, ap);
}

#[cfg(test)]
mod tests {
    use super::*;

    // S = [2 1 3]
    //     [1 4 5]
    //     [3 5 6]
    // S * [1, 2, 3] = [13, 24, 31]
    const X: [f64; 3] = [1.0, 2.0, 3.0];
    const SX: [f64; 3] = [13.0, 24.0, 31.0];

    #[test]
    fn test_dsymv_upper_ignores_lower_triangle() {
        let a = vec![2.0, f64::NAN, f64::NAN, 1.0, 4.0, f64::NAN, 3.0, 5.0, 6.0];
        let mut y = vec![0.0; 3];
        dsymv(Uplo::Upper, 3, 1.0, &a, 3, &X, 1, 0.0, &mut y, 1);
        assert_eq!(y, SX.to_vec());
    }

    #[test]
    fn test_dsymv_lower_ignores_upper_triangle() {
        let a = vec![2.0, 1.0, 3.0, f64::NAN, 4.0, 5.0, f64::NAN, f64::NAN, 6.0];
        let mut y = vec![1.0; 3];
        dsymv(Uplo::Lower, 3, 2.0, &a, 3, &X, 1, -1.0, &mut y, 1);
        assert_eq!(y, vec![25.0, 47.0, 61.0]);
    }

    #[test]
    fn test_dspmv_upper_and_lower() {
        let upper = vec![2.0, 1.0, 4.0, 3.0, 5.0, 6.0];
        let lower = vec![2.0, 1.0, 3.0, 4.0, 5.0, 6.0];
        let mut yu = vec![0.0; 3];
        let mut yl = vec![0.0; 3];
        dspmv(Uplo::Upper, 3, 1.0, &upper, &X, 1, 0.0, &mut yu, 1);
        dspmv(Uplo::Lower, 3, 1.0, &lower, &X, 1, 0.0, &mut yl, 1);
        assert_eq!(yu, SX.to_vec());
        assert_eq!(yl, SX.to_vec());
    }

    #[test]
    fn test_dspmv_negative_increments() {
        let upper = vec![2.0, 1.0, 4.0, 3.0, 5.0, 6.0];
        let x_rev = vec![3.0, 2.0, 1.0];
        let mut y = vec![0.0; 3];
        dspmv(Uplo::Upper, 3, 1.0, &upper, &x_rev, -1, 0.0, &mut y, -1);
        assert_eq!(y, vec![31.0, 24.0, 13.0]);
    }

    // T = [2 1 0]
    //     [1 4 5]
    //     [0 5 6]
    // T * [1, 2, 3] = [4, 24, 28]

    #[test]
    fn test_dsbmv_upper() {
        // row 0 = super-diagonal, row 1 = diagonal
        let a = vec![f64::NAN, 2.0, 1.0, 4.0, 5.0, 6.0];
        let mut y = vec![0.0; 3];
        dsbmv(Uplo::Upper, 3, 1, 1.0, &a, 2, &X, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![4.0, 24.0, 28.0]);
    }

    #[test]
    fn test_dsbmv_lower() {
        // row 0 = diagonal, row 1 = sub-diagonal
        let a = vec![2.0, 1.0, 4.0, 5.0, 6.0, f64::NAN];
        let mut y = vec![0.0; 3];
        dsbmv(Uplo::Lower, 3, 1, 1.0, &a, 2, &X, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![4.0, 24.0, 28.0]);
    }

    #[test]
    fn test_dsymv_alpha_zero_scales_only() {
        let a = vec![f64::NAN; 9];
        let mut y = vec![1.0, 2.0, 3.0];
        dsymv(Uplo::Upper, 3, 0.0, &a, 3, &X, 1, 2.0, &mut y, 1);
        assert_eq!(y, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_dsyr_upper() {
        let x = vec![1.0, 2.0];
        let mut a = vec![0.0, -7.0, 0.0, 0.0];
        dsyr(Uplo::Upper, 2, 1.0, &x, 1, &mut a, 2);
        assert_eq!(a, vec![1.0, -7.0, 2.0, 4.0]);
    }

    #[test]
    fn test_dspr_lower() {
        let mut ap = vec![0.0; 6];
        dspr(Uplo::Lower, 3, 1.0, &X, 1, &mut ap);
        assert_eq!(ap, vec![1.0, 2.0, 3.0, 4.0, 6.0, 9.0]);
    }

    #[test]
    fn test_dsyr2_lower() {
        let x = vec![1.0, 2.0];
        let y = vec![3.0, 1.0];
        let mut a = vec![0.0, 0.0, -7.0, 0.0];
        dsyr2(Uplo::Lower, 2, 1.0, &x, 1, &y, 1, &mut a, 2);
        assert_eq!(a, vec![6.0, 7.0, -7.0, 4.0]);
    }

    #[test]
    fn test_dspr2_upper() {
        let x = vec![1.0, 2.0];
        let y = vec![3.0, 1.0];
        let mut ap = vec![1.0; 3];
        dspr2(Uplo::Upper, 2, 1.0, &x, 1, &y, 1, &mut ap);
        assert_eq!(ap, vec![7.0, 8.0, 5.0]);
    }

    #[test]
    fn test_rank_updates_alpha_zero() {
        let x = vec![f64::NAN; 2];
        let mut ap = vec![1.0; 3];
        dspr(Uplo::Upper, 2, 0.0, &x, 1, &mut ap);
        dspr2(Uplo::Upper, 2, 0.0, &x, 1, &x, 1, &mut ap);
        assert_eq!(ap, vec![1.0; 3]);
    }
}
