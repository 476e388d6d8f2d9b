//! General dense and banded matrix-vector kernels.

use rustyblas_core::packed::{band_index, band_rows, dense_index};
use rustyblas_core::{Stride, Transpose};

use crate::beta::scale_vector;

// ============================================================================
// GEMV: General matrix-vector multiply
// y := alpha * op(A) * x + beta * y
// ============================================================================

/// Double-precision GEMV: y := alpha * op(A) * x + beta * y
///
/// `A` is `m x n` with leading dimension `lda`. With `NoTrans`, `x` has `n`
/// elements and `y` has `m`; with `Trans`/`ConjTrans` the lengths swap.
pub fn dgemv(
    trans: Transpose,
    m: usize,
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
    if m == 0 || n == 0 || (alpha == 0.0 && beta == 1.0) {
        return;
    }
    debug_assert!(lda >= m.max(1));

    let (lenx, leny) = if trans.is_trans() { (m, n) } else { (n, m) };
    let sx = Stride::new(lenx, incx);
    let sy = Stride::new(leny, incy);

    scale_vector(leny, beta, y, sy);
    if alpha == 0.0 {
        return;
    }

    if trans.is_trans() {
        // y_j += alpha * A(:, j) . x
        for j in 0..n {
            let col = &a[j * lda..j * lda + m];
            let mut temp = 0.0;
            for (i, &aij) in col.iter().enumerate() {
                temp += aij * x[sx.at(i)];
            }
            y[sy.at(j)] += alpha * temp;
        }
    } else {
        // y += (alpha * x_j) * A(:, j)
        for j in 0..n {
            let temp = alpha * x[sx.at(j)];
            let col = &a[j * lda..j * lda + m];
            for (i, &aij) in col.iter().enumerate() {
                y[sy.at(i)] += temp * aij;
            }
        }
    }
}

// ============================================================================
// GBMV: General band matrix-vector multiply
// y := alpha * op(A) * x + beta * y, A with kl sub- and ku super-diagonals
// ============================================================================

/// Double-precision GBMV: y := alpha * op(A) * x + beta * y for a band `A`.
///
/// `A` is `m x n` stored in a `(kl + ku + 1) x n` band array; element
/// `(i, j)` lives at row `ku + i - j` of column `j`.
pub fn dgbmv(
    trans: Transpose,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    if m == 0 || n == 0 || (alpha == 0.0 && beta == 1.0) {
        return;
    }
    debug_assert!(lda > kl + ku);

    let (lenx, leny) = if trans.is_trans() { (m, n) } else { (n, m) };
    let sx = Stride::new(lenx, incx);
    let sy = Stride::new(leny, incy);

    scale_vector(leny, beta, y, sy);
    if alpha == 0.0 {
        return;
    }

    if trans.is_trans() {
        for j in 0..n {
            let mut temp = 0.0;
            for i in band_rows(m, kl, ku, j) {
                temp += a[band_index(ku, i, j, lda)] * x[sx.at(i)];
            }
            y[sy.at(j)] += alpha * temp;
        }
    } else {
        for j in 0..n {
            let temp = alpha * x[sx.at(j)];
            for i in band_rows(m, kl, ku, j) {
                y[sy.at(i)] += temp * a[band_index(ku, i, j, lda)];
            }
        }
    }
}

// ============================================================================
// GER: General rank-1 update
// A := alpha * x * y^T + A
// ============================================================================

/// Double-precision GER: A := alpha * x * y^T + A
pub fn dger(
    m: usize,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
    lda: usize,
) {
    if m == 0 || n == 0 || alpha == 0.0 {
        return;
    }
    debug_assert!(lda >= m.max(1));

    let sx = Stride::new(m, incx);
    let sy = Stride::new(n, incy);

    for j in 0..n {
        let yj = y[sy.at(j)];
        if yj != 0.0 {
            let temp = alpha * yj;
            for i in 0..m {
                a[dense_index(i, j, lda)] += x[sx.at(i)] * temp;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A = [1 3 5]
    //     [2 4 6]
    const A23: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    #[test]
    fn test_dgemv_notrans() {
        let x = vec![1.0, 1.0, 1.0];
        let mut y = vec![0.0; 2];
        dgemv(
            Transpose::NoTrans,
            2,
            3,
            1.0,
            &A23,
            2,
            &x,
            1,
            0.0,
            &mut y,
            1,
        );
        assert_eq!(y, vec![9.0, 12.0]);
    }

    #[test]
    fn test_dgemv_with_alpha_beta() {
        let x = vec![1.0, 0.0, 1.0];
        let mut y = vec![10.0, 20.0];
        dgemv(
            Transpose::NoTrans,
            2,
            3,
            2.0,
            &A23,
            2,
            &x,
            1,
            3.0,
            &mut y,
            1,
        );
        // 2 * [6, 8] + 3 * [10, 20]
        assert_eq!(y, vec![42.0, 76.0]);
    }

    #[test]
    fn test_dgemv_trans() {
        let x = vec![1.0, 2.0];
        let mut y = vec![0.0; 3];
        dgemv(
            Transpose::Trans,
            2,
            3,
            1.0,
            &A23,
            2,
            &x,
            1,
            0.0,
            &mut y,
            1,
        );
        assert_eq!(y, vec![5.0, 11.0, 17.0]);
    }

    #[test]
    fn test_dgemv_negative_increments() {
        let x = vec![1.0, 2.0];
        let mut y = vec![0.0; 3];
        dgemv(
            Transpose::Trans,
            2,
            3,
            1.0,
            &A23,
            2,
            &x,
            -1,
            0.0,
            &mut y,
            -1,
        );
        // logical x = [2, 1], results land back to front
        assert_eq!(y, vec![16.0, 10.0, 4.0]);
    }

    #[test]
    fn test_dgemv_beta_zero_clears_nan() {
        let x = vec![1.0, 1.0, 1.0];
        let mut y = vec![f64::NAN, f64::NAN];
        dgemv(
            Transpose::NoTrans,
            2,
            3,
            0.0,
            &A23,
            2,
            &x,
            1,
            0.0,
            &mut y,
            1,
        );
        assert_eq!(y, vec![0.0, 0.0]);
    }

    #[test]
    fn test_dgemv_alpha_zero_beta_one_is_noop() {
        let x = vec![f64::NAN; 3];
        let mut y = vec![1.0, 2.0];
        dgemv(
            Transpose::NoTrans,
            2,
            3,
            0.0,
            &A23,
            2,
            &x,
            1,
            1.0,
            &mut y,
            1,
        );
        assert_eq!(y, vec![1.0, 2.0]);
    }

    #[test]
    fn test_dgemv_respects_lda() {
        // 2x2 block of a 3-row array
        let a = vec![1.0, 2.0, 99.0, 3.0, 4.0, 99.0];
        let x = vec![1.0, 1.0];
        let mut y = vec![0.0; 2];
        dgemv(
            Transpose::NoTrans,
            2,
            2,
            1.0,
            &a,
            3,
            &x,
            1,
            0.0,
            &mut y,
            1,
        );
        assert_eq!(y, vec![4.0, 6.0]);
    }

    // Tridiagonal 3x3:
    // [1 4 0]
    // [2 5 7]
    // [0 3 6]
    // band array (kl = ku = 1, lda = 3), row 0 = super, 1 = diag, 2 = sub
    const TRI_BAND: [f64; 9] = [0.0, 1.0, 2.0, 4.0, 5.0, 3.0, 7.0, 6.0, 0.0];

    #[test]
    fn test_dgbmv_notrans() {
        let x = vec![1.0, 2.0, 3.0];
        let mut y = vec![0.0; 3];
        dgbmv(
            Transpose::NoTrans,
            3,
            3,
            1,
            1,
            1.0,
            &TRI_BAND,
            3,
            &x,
            1,
            0.0,
            &mut y,
            1,
        );
        assert_eq!(y, vec![9.0, 33.0, 24.0]);
    }

    #[test]
    fn test_dgbmv_trans() {
        let x = vec![1.0, 2.0, 3.0];
        let mut y = vec![1.0; 3];
        dgbmv(
            Transpose::Trans,
            3,
            3,
            1,
            1,
            1.0,
            &TRI_BAND,
            3,
            &x,
            1,
            2.0,
            &mut y,
            1,
        );
        // A^T x = [5, 23, 32]
        assert_eq!(y, vec![7.0, 25.0, 34.0]);
    }

    #[test]
    fn test_dgbmv_matches_dgemv() {
        let dense = vec![1.0, 2.0, 0.0, 4.0, 5.0, 3.0, 0.0, 7.0, 6.0];
        let x = vec![0.5, -1.0, 2.0];
        let mut y_band = vec![0.0; 3];
        let mut y_dense = vec![0.0; 3];
        dgbmv(
            Transpose::NoTrans,
            3,
            3,
            1,
            1,
            1.5,
            &TRI_BAND,
            3,
            &x,
            1,
            0.0,
            &mut y_band,
            1,
        );
        dgemv(
            Transpose::NoTrans,
            3,
            3,
            1.5,
            &dense,
            3,
            &x,
            1,
            0.0,
            &mut y_dense,
            1,
        );
        assert_eq!(y_band, y_dense);
    }

    #[test]
    fn test_dgbmv_rectangular() {
        // 2x3 with kl = 0, ku = 1:
        // [1 2 0]
        // [0 3 4]
        let a = vec![0.0, 1.0, 2.0, 3.0, 4.0, 0.0];
        let x = vec![1.0, 1.0, 1.0];
        let mut y = vec![0.0; 2];
        dgbmv(
            Transpose::NoTrans,
            2,
            3,
            0,
            1,
            1.0,
            &a,
            2,
            &x,
            1,
            0.0,
            &mut y,
            1,
        );
        assert_eq!(y, vec![3.0, 7.0]);
    }

    #[test]
    fn test_dger() {
        let x = vec![1.0, 2.0];
        let y = vec![3.0, 0.0, 4.0];
        let mut a = vec![1.0; 6];
        dger(2, 3, 2.0, &x, 1, &y, 1, &mut a, 2);
        assert_eq!(a, vec![7.0, 13.0, 1.0, 1.0, 9.0, 17.0]);
    }

    #[test]
    fn test_dger_alpha_zero_untouched() {
        let x = vec![f64::NAN; 2];
        let y = vec![1.0; 2];
        let mut a = vec![5.0; 4];
        dger(2, 2, 0.0, &x, 1, &y, 1, &mut a, 2);
        assert_eq!(a, vec![5.0; 4]);
    }
}
