//! BLAS Level 3: Matrix-matrix operations.
//!
//! Straight column-oriented loops over column-major storage, one routine per
//! classical operation. `dgemm`, `dgemmtr` and `dsyrk` share one update
//! kernel that walks a per-column row range, so the triangular variants only
//! differ in which rows of `C` they touch.

use std::ops::Range;

use rustyblas_core::packed::triangle_rows;
use rustyblas_core::{Diag, Side, Transpose, Uplo};

use crate::beta::scale_slice;
use crate::level2::symmetric::symmetric_mv;
use crate::level2::triangular::divide_by_diagonal;
use crate::level2::Full;

// ============================================================================
// Column helpers
// ============================================================================

/// `b(:, dst) += temp * b(:, src)` over the first `m` rows.
#[inline]
fn axpy_column(b: &mut [f64], ldb: usize, m: usize, temp: f64, src: usize, dst: usize) {
    debug_assert_ne!(src, dst);
    for i in 0..m {
        b[i + dst * ldb] += temp * b[i + src * ldb];
    }
}

/// `b(:, j) *= f` over the first `m` rows.
#[inline]
fn scale_column(b: &mut [f64], ldb: usize, m: usize, f: f64, j: usize) {
    for v in &mut b[j * ldb..j * ldb + m] {
        *v *= f;
    }
}

/// C(rows(j), j) := alpha * op(A) * op(B) + beta * C(rows(j), j)
///
/// `rows` selects the rows of each column that are updated; everything else
/// in `C` is left alone. With `skip_zero_b`, a column of `A` facing a zero
/// `op(B)(l, j)` is skipped, so non-finite values in it do not reach `C`.
fn gemm_update(
    rows: impl Fn(usize) -> Range<usize>,
    skip_zero_b: bool,
    transa: bool,
    transb: bool,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    for j in 0..n {
        let r = rows(j);
        scale_slice(beta, &mut c[j * ldc + r.start..j * ldc + r.end]);
    }
    if alpha == 0.0 || k == 0 {
        return;
    }

    let op_b = |l: usize, j: usize| {
        if transb {
            b[j + l * ldb]
        } else {
            b[l + j * ldb]
        }
    };

    if transa {
        // C(i, j) += alpha * A(:, i) . op(B)(:, j)
        for j in 0..n {
            for i in rows(j) {
                let mut temp = 0.0;
                for l in 0..k {
                    temp += a[l + i * lda] * op_b(l, j);
                }
                c[i + j * ldc] += alpha * temp;
            }
        }
    } else {
        // C(:, j) += (alpha * op(B)(l, j)) * A(:, l)
        for j in 0..n {
            for l in 0..k {
                let blj = op_b(l, j);
                if !skip_zero_b || blj != 0.0 {
                    let temp = alpha * blj;
                    for i in rows(j) {
                        c[i + j * ldc] += temp * a[i + l * lda];
                    }
                }
            }
        }
    }
}

// ============================================================================
// DGEMM: Double-precision General Matrix Multiply
// C := alpha * op(A) * op(B) + beta * C
// ============================================================================

/// Double-precision GEMM: C := alpha * op(A) * op(B) + beta * C
///
/// `op(A)` is `m x k`, `op(B)` is `k x n`, `C` is `m x n`.
pub fn dgemm(
    transa: Transpose,
    transb: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    if m == 0 || n == 0 || ((alpha == 0.0 || k == 0) && beta == 1.0) {
        return;
    }
    debug_assert!(ldc >= m.max(1));

    gemm_update(
        |_| 0..m,
        false,
        transa.is_trans(),
        transb.is_trans(),
        n,
        k,
        alpha,
        a,
        lda,
        b,
        ldb,
        beta,
        c,
        ldc,
    );
}

// ============================================================================
// DGEMMTR: GEMM restricted to one triangle of a square C
// ============================================================================

/// Double-precision GEMMTR: the `uplo` triangle of
/// C := alpha * op(A) * op(B) + beta * C, with `C` `n x n`.
///
/// The other triangle of `C` is neither read nor written.
pub fn dgemmtr(
    uplo: Uplo,
    transa: Transpose,
    transb: Transpose,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    if n == 0 || ((alpha == 0.0 || k == 0) && beta == 1.0) {
        return;
    }
    debug_assert!(ldc >= n.max(1));

    gemm_update(
        |j| triangle_rows(uplo, n, j),
        false,
        transa.is_trans(),
        transb.is_trans(),
        n,
        k,
        alpha,
        a,
        lda,
        b,
        ldb,
        beta,
        c,
        ldc,
    );
}

// ============================================================================
// DSYMM: Symmetric matrix multiply
// C := alpha * A * B + beta * C   (Left)
// C := alpha * B * A + beta * C   (Right)
// ============================================================================

/// Double-precision SYMM with `A` symmetric, only its `uplo` triangle read.
///
/// `C` and `B` are `m x n`; `A` is `m x m` for `Side::Left` and `n x n` for
/// `Side::Right`.
pub fn dsymm(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    if m == 0 || n == 0 || (alpha == 0.0 && beta == 1.0) {
        return;
    }
    debug_assert!(ldc >= m.max(1));

    match side {
        Side::Left => {
            // Each column of C is a symmetric matrix-vector product.
            let s = Full { uplo, n: m, lda };
            for j in 0..n {
                symmetric_mv(
                    &s,
                    m,
                    alpha,
                    a,
                    &b[j * ldb..],
                    1,
                    beta,
                    &mut c[j * ldc..j * ldc + m],
                    1,
                );
            }
        }
        Side::Right => {
            for j in 0..n {
                scale_slice(beta, &mut c[j * ldc..j * ldc + m]);
            }
            if alpha == 0.0 {
                return;
            }
            let sym = |i: usize, j: usize| match uplo {
                Uplo::Upper if i <= j => a[i + j * lda],
                Uplo::Lower if i >= j => a[i + j * lda],
                _ => a[j + i * lda],
            };
            for j in 0..n {
                for l in 0..n {
                    let temp = alpha * sym(l, j);
                    for i in 0..m {
                        c[i + j * ldc] += temp * b[i + l * ldb];
                    }
                }
            }
        }
    }
}

// ============================================================================
// DSYRK: Symmetric rank-k update
// C := alpha * A * A^T + beta * C   (NoTrans, A is n x k)
// C := alpha * A^T * A + beta * C   (Trans,   A is k x n)
// ============================================================================

/// Double-precision SYRK: updates only the `uplo` triangle of `C`.
pub fn dsyrk(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    if n == 0 || ((alpha == 0.0 || k == 0) && beta == 1.0) {
        return;
    }
    debug_assert!(ldc >= n.max(1));

    // A * A^T is GEMMTR with B = A and the opposite transpose.
    let t = trans.is_trans();
    gemm_update(
        |j| triangle_rows(uplo, n, j),
        true,
        t,
        !t,
        n,
        k,
        alpha,
        a,
        lda,
        a,
        lda,
        beta,
        c,
        ldc,
    );
}

// ============================================================================
// DSYR2K: Symmetric rank-2k update
// C := alpha * A * B^T + alpha * B * A^T + beta * C   (NoTrans)
// C := alpha * A^T * B + alpha * B^T * A + beta * C   (Trans)
// ============================================================================

/// Double-precision SYR2K: updates only the `uplo` triangle of `C`.
pub fn dsyr2k(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    if n == 0 || ((alpha == 0.0 || k == 0) && beta == 1.0) {
        return;
    }
    debug_assert!(ldc >= n.max(1));

    for j in 0..n {
        let r = triangle_rows(uplo, n, j);
        scale_slice(beta, &mut c[j * ldc + r.start..j * ldc + r.end]);
    }
    if alpha == 0.0 || k == 0 {
        return;
    }

    if trans.is_trans() {
        for j in 0..n {
            for i in triangle_rows(uplo, n, j) {
                let mut temp1 = 0.0;
                let mut temp2 = 0.0;
                for l in 0..k {
                    temp1 += a[l + i * lda] * b[l + j * ldb];
                    temp2 += b[l + i * ldb] * a[l + j * lda];
                }
                c[i + j * ldc] += alpha * temp1 + alpha * temp2;
            }
        }
    } else {
        for j in 0..n {
            for l in 0..k {
                let ajl = a[j + l * lda];
                let bjl = b[j + l * ldb];
                if ajl != 0.0 || bjl != 0.0 {
                    let temp1 = alpha * bjl;
                    let temp2 = alpha * ajl;
                    for i in triangle_rows(uplo, n, j) {
                        c[i + j * ldc] += a[i + l * lda] * temp1 + b[i + l * ldb] * temp2;
                    }
                }
            }
        }
    }
}

// ============================================================================
// DTRMM: Triangular matrix multiply
// B := alpha * op(A) * B   (Left)
// B := alpha * B * op(A)   (Right)
// ============================================================================

/// Double-precision TRMM, in place on the `m x n` matrix `B`.
///
/// `alpha == 0` zero-fills `B` without reading `A`.
pub fn dtrmm(
    side: Side,
    uplo: Uplo,
    transa: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) {
    if m == 0 || n == 0 {
        return;
    }
    debug_assert!(ldb >= m.max(1));

    if alpha == 0.0 {
        for j in 0..n {
            b[j * ldb..j * ldb + m].fill(0.0);
        }
        return;
    }

    let nounit = !diag.is_unit();
    let at = |i: usize, j: usize| a[i + j * lda];

    match (side, transa.is_trans(), uplo) {
        (Side::Left, false, Uplo::Upper) => {
            for j in 0..n {
                for k in 0..m {
                    let bkj = b[k + j * ldb];
                    if bkj != 0.0 {
                        let mut temp = alpha * bkj;
                        for i in 0..k {
                            b[i + j * ldb] += temp * at(i, k);
                        }
                        if nounit {
                            temp *= at(k, k);
                        }
                        b[k + j * ldb] = temp;
                    }
                }
            }
        }
        (Side::Left, false, Uplo::Lower) => {
            for j in 0..n {
                for k in (0..m).rev() {
                    let bkj = b[k + j * ldb];
                    if bkj != 0.0 {
                        let temp = alpha * bkj;
                        b[k + j * ldb] = if nounit { temp * at(k, k) } else { temp };
                        for i in k + 1..m {
                            b[i + j * ldb] += temp * at(i, k);
                        }
                    }
                }
            }
        }
        (Side::Left, true, Uplo::Upper) => {
            for j in 0..n {
                for i in (0..m).rev() {
                    let mut temp = b[i + j * ldb];
                    if nounit {
                        temp *= at(i, i);
                    }
                    for k in 0..i {
                        temp += at(k, i) * b[k + j * ldb];
                    }
                    b[i + j * ldb] = alpha * temp;
                }
            }
        }
        (Side::Left, true, Uplo::Lower) => {
            for j in 0..n {
                for i in 0..m {
                    let mut temp = b[i + j * ldb];
                    if nounit {
                        temp *= at(i, i);
                    }
                    for k in i + 1..m {
                        temp += at(k, i) * b[k + j * ldb];
                    }
                    b[i + j * ldb] = alpha * temp;
                }
            }
        }
        (Side::Right, false, Uplo::Upper) => {
            for j in (0..n).rev() {
                let temp = if nounit { alpha * at(j, j) } else { alpha };
                scale_column(b, ldb, m, temp, j);
                for k in 0..j {
                    let akj = at(k, j);
                    if akj != 0.0 {
                        axpy_column(b, ldb, m, alpha * akj, k, j);
                    }
                }
            }
        }
        (Side::Right, false, Uplo::Lower) => {
            for j in 0..n {
                let temp = if nounit { alpha * at(j, j) } else { alpha };
                scale_column(b, ldb, m, temp, j);
                for k in j + 1..n {
                    let akj = at(k, j);
                    if akj != 0.0 {
                        axpy_column(b, ldb, m, alpha * akj, k, j);
                    }
                }
            }
        }
        (Side::Right, true, Uplo::Upper) => {
            for k in 0..n {
                for j in 0..k {
                    let ajk = at(j, k);
                    if ajk != 0.0 {
                        axpy_column(b, ldb, m, alpha * ajk, k, j);
                    }
                }
                let temp = if nounit { alpha * at(k, k) } else { alpha };
                if temp != 1.0 {
                    scale_column(b, ldb, m, temp, k);
                }
            }
        }
        (Side::Right, true, Uplo::Lower) => {
            for k in (0..n).rev() {
                for j in k + 1..n {
                    let ajk = at(j, k);
                    if ajk != 0.0 {
                        axpy_column(b, ldb, m, alpha * ajk, k, j);
                    }
                }
                let temp = if nounit { alpha * at(k, k) } else { alpha };
                if temp != 1.0 {
                    scale_column(b, ldb, m, temp, k);
                }
            }
        }
    }
}

// ============================================================================
// DTRSM: Triangular solve with multiple right-hand sides
// op(A) * X = alpha * B   (Left)
// X * op(A) = alpha * B   (Right)
// ============================================================================

/// Double-precision TRSM, overwriting the `m x n` matrix `B` with `X`.
///
/// No singularity test is made; a zero non-unit diagonal yields Inf/NaN.
/// `alpha == 0` zero-fills `B` without reading `A`.
pub fn dtrsm(
    side: Side,
    uplo: Uplo,
    transa: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) {
    if m == 0 || n == 0 {
        return;
    }
    debug_assert!(ldb >= m.max(1));

    if alpha == 0.0 {
        for j in 0..n {
            b[j * ldb..j * ldb + m].fill(0.0);
        }
        return;
    }

    let nounit = !diag.is_unit();
    let at = |i: usize, j: usize| a[i + j * lda];

    match (side, transa.is_trans(), uplo) {
        (Side::Left, false, Uplo::Upper) => {
            for j in 0..n {
                if alpha != 1.0 {
                    scale_column(b, ldb, m, alpha, j);
                }
                for k in (0..m).rev() {
                    if b[k + j * ldb] != 0.0 {
                        if nounit {
                            b[k + j * ldb] = divide_by_diagonal(b[k + j * ldb], at(k, k), k);
                        }
                        let bkj = b[k + j * ldb];
                        for i in 0..k {
                            b[i + j * ldb] -= bkj * at(i, k);
                        }
                    }
                }
            }
        }
        (Side::Left, false, Uplo::Lower) => {
            for j in 0..n {
                if alpha != 1.0 {
                    scale_column(b, ldb, m, alpha, j);
                }
                for k in 0..m {
                    if b[k + j * ldb] != 0.0 {
                        if nounit {
                            b[k + j * ldb] = divide_by_diagonal(b[k + j * ldb], at(k, k), k);
                        }
                        let bkj = b[k + j * ldb];
                        for i in k + 1..m {
                            b[i + j * ldb] -= bkj * at(i, k);
                        }
                    }
                }
            }
        }
        (Side::Left, true, Uplo::Upper) => {
            for j in 0..n {
                for i in 0..m {
                    let mut temp = alpha * b[i + j * ldb];
                    for k in 0..i {
                        temp -= at(k, i) * b[k + j * ldb];
                    }
                    if nounit {
                        temp = divide_by_diagonal(temp, at(i, i), i);
                    }
                    b[i + j * ldb] = temp;
                }
            }
        }
        (Side::Left, true, Uplo::Lower) => {
            for j in 0..n {
                for i in (0..m).rev() {
                    let mut temp = alpha * b[i + j * ldb];
                    for k in i + 1..m {
                        temp -= at(k, i) * b[k + j * ldb];
                    }
                    if nounit {
                        temp = divide_by_diagonal(temp, at(i, i), i);
                    }
                    b[i + j * ldb] = temp;
                }
            }
        }
        (Side::Right, false, Uplo::Upper) => {
            for j in 0..n {
                if alpha != 1.0 {
                    scale_column(b, ldb, m, alpha, j);
                }
                for k in 0..j {
                    let akj = at(k, j);
                    if akj != 0.0 {
                        axpy_column(b, ldb, m, -akj, k, j);
                    }
                }
                if nounit {
                    scale_column(b, ldb, m, divide_by_diagonal(1.0, at(j, j), j), j);
                }
            }
        }
        (Side::Right, false, Uplo::Lower) => {
            for j in (0..n).rev() {
                if alpha != 1.0 {
                    scale_column(b, ldb, m, alpha, j);
                }
                for k in j + 1..n {
                    let akj = at(k, j);
                    if akj != 0.0 {
                        axpy_column(b, ldb, m, -akj, k, j);
                    }
                }
                if nounit {
                    scale_column(b, ldb, m, divide_by_diagonal(1.0, at(j, j), j), j);
                }
            }
        }
        (Side::Right, true, Uplo::Upper) => {
            for k in (0..n).rev() {
                if nounit {
                    scale_column(b, ldb, m, divide_by_diagonal(1.0, at(k, k), k), k);
                }
                for j in 0..k {
                    let ajk = at(j, k);
                    if ajk != 0.0 {
                        axpy_column(b, ldb, m, -ajk, k, j);
                    }
                }
                if alpha != 1.0 {
                    scale_column(b, ldb, m, alpha, k);
                }
            }
        }
        (Side::Right, true, Uplo::Lower) => {
            for k in 0..n {
                if nounit {
                    scale_column(b, ldb, m, divide_by_diagonal(1.0, at(k, k), k), k);
                }
                for j in k + 1..n {
                    let ajk = at(j, k);
                    if ajk != 0.0 {
                        axpy_column(b, ldb, m, -ajk, k, j);
                    }
                }
                if alpha != 1.0 {
                    scale_column(b, ldb, m, alpha, k);
                }
            }
        }
    }
}
