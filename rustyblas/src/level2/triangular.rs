//! Triangular matrix-vector products and solves, in place on `x`.
//!
//! `dtr*` take a full array, `dtb*` a band with `k` off-diagonals and `dtp*`
//! a packed triangle. With `Diag::Unit` the diagonal is assumed to be one and
//! never read.

use rustyblas_core::{Diag, Stride, Transpose, Uplo};

use super::{Band, Full, Packed, TriangleStorage};

/// `v / d` for a diagonal entry of column `j`. A zero `d` is reported and
/// divided anyway, leaving Inf/NaN in the result.
#[inline]
pub(crate) fn divide_by_diagonal(v: f64, d: f64, j: usize) -> f64 {
    if d == 0.0 {
        log::debug!(
            target: "rustyblas::singular",
            "zero diagonal entry in column {j} of a triangular solve"
        );
    }
    v / d
}

// ============================================================================
// Shared kernels
// ============================================================================

/// x := op(A) * x
fn triangular_mv<S: TriangleStorage>(
    s: &S,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[f64],
    x: &mut [f64],
    incx: isize,
) {
    if n == 0 {
        return;
    }
    let nounit = !diag.is_unit();
    let sx = Stride::new(n, incx);

    match (trans.is_trans(), s.uplo()) {
        (false, Uplo::Upper) => {
            for j in 0..n {
                let temp = x[sx.at(j)];
                if temp != 0.0 {
                    for i in s.off_diagonal_rows(j) {
                        x[sx.at(i)] += temp * a[s.index(i, j)];
                    }
                    if nounit {
                        x[sx.at(j)] *= a[s.index(j, j)];
                    }
                }
            }
        }
        (false, Uplo::Lower) => {
            for j in (0..n).rev() {
                let temp = x[sx.at(j)];
                if temp != 0.0 {
                    for i in s.off_diagonal_rows(j).rev() {
                        x[sx.at(i)] += temp * a[s.index(i, j)];
                    }
                    if nounit {
                        x[sx.at(j)] *= a[s.index(j, j)];
                    }
                }
            }
        }
        (true, Uplo::Upper) => {
            for j in (0..n).rev() {
                let mut temp = x[sx.at(j)];
                if nounit {
                    temp *= a[s.index(j, j)];
                }
                for i in s.off_diagonal_rows(j).rev() {
                    temp += a[s.index(i, j)] * x[sx.at(i)];
                }
                x[sx.at(j)] = temp;
            }
        }
        (true, Uplo::Lower) => {
            for j in 0..n {
                let mut temp = x[sx.at(j)];
                if nounit {
                    temp *= a[s.index(j, j)];
                }
                for i in s.off_diagonal_rows(j) {
                    temp += a[s.index(i, j)] * x[sx.at(i)];
                }
                x[sx.at(j)] = temp;
            }
        }
    }
}

/// x := op(A)^-1 * x
fn triangular_sv<S: TriangleStorage>(
    s: &S,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[f64],
    x: &mut [f64],
    incx: isize,
) {
    if n == 0 {
        return;
    }
    let nounit = !diag.is_unit();
    let sx = Stride::new(n, incx);

    match (trans.is_trans(), s.uplo()) {
        // Back substitution, column oriented.
        (false, Uplo::Upper) => {
            for j in (0..n).rev() {
                if x[sx.at(j)] != 0.0 {
                    if nounit {
                        x[sx.at(j)] = divide_by_diagonal(x[sx.at(j)], a[s.index(j, j)], j);
                    }
                    let temp = x[sx.at(j)];
                    for i in s.off_diagonal_rows(j).rev() {
                        x[sx.at(i)] -= temp * a[s.index(i, j)];
                    }
                }
            }
        }
        // Forward substitution, column oriented.
        (false, Uplo::Lower) => {
            for j in 0..n {
                if x[sx.at(j)] != 0.0 {
                    if nounit {
                        x[sx.at(j)] = divide_by_diagonal(x[sx.at(j)], a[s.index(j, j)], j);
                    }
                    let temp = x[sx.at(j)];
                    for i in s.off_diagonal_rows(j) {
                        x[sx.at(i)] -= temp * a[s.index(i, j)];
                    }
                }
            }
        }
        // Transposed solves are dot-product oriented.
        (true, Uplo::Upper) => {
            for j in 0..n {
                let mut temp = x[sx.at(j)];
                for i in s.off_diagonal_rows(j) {
                    temp -= a[s.index(i, j)] * x[sx.at(i)];
                }
                if nounit {
                    temp = divide_by_diagonal(temp, a[s.index(j, j)], j);
                }
                x[sx.at(j)] = temp;
            }
        }
        (true, Uplo::Lower) => {
            for j in (0..n).rev() {
                let mut temp = x[sx.at(j)];
                for i in s.off_diagonal_rows(j).rev() {
                    temp -= a[s.index(i, j)] * x[sx.at(i)];
                }
                if nounit {
                    temp = divide_by_diagonal(temp, a[s.index(j, j)], j);
                }
                x[sx.at(j)] = temp;
            }
        }
    }
}

// ============================================================================
// TRMV / TBMV / TPMV: x := op(A) * x
// ============================================================================

/// Double-precision TRMV: x := op(A) * x, `A` triangular `n x n`.
pub fn dtrmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) {
    debug_assert!(lda >= n.max(1));
    triangular_mv(&Full { uplo, n, lda }, trans, diag, n, a, x, incx);
}

/// Double-precision TBMV: x := op(A) * x, `A` a triangular band with `k`
/// off-diagonals.
pub fn dtbmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) {
    debug_assert!(lda > k);
    triangular_mv(&Band { uplo, n, k, lda }, trans, diag, n, a, x, incx);
}

/// Double-precision TPMV: x := op(A) * x, `A` packed triangular.
pub fn dtpmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[f64],
    x: &mut [f64],
    incx: isize,
) {
    triangular_mv(&Packed { uplo, n }, trans, diag, n, ap, x, incx);
}

// ============================================================================
// TRSV / TBSV / TPSV: x := op(A)^-1 * x
// ============================================================================

/// Double-precision TRSV: solves op(A) * x = b, overwriting `b` with `x`.
///
/// No singularity test is made; a zero non-unit diagonal yields Inf/NaN.
pub fn dtrsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) {
    debug_assert!(lda >= n.max(1));
    triangular_sv(&Full { uplo, n, lda }, trans, diag, n, a, x, incx);
}

/// Double-precision TBSV: band form of [`dtrsv`].
pub fn dtbsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) {
    debug_assert!(lda > k);
    triangular_sv(&Band { uplo, n, k, lda }, trans, diag, n, a, x, incx);
}

/// Double-precision TPSV: packed form of [`dtrsv`].
pub fn dtpsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[f64],
    x: &mut [f64],
    incx: isize,
) {
    triangular_sv(&Packed { uplo, n }, trans, diag, n, ap, x, incx);
}
