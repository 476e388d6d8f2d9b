//! Index maps for dense, packed and banded column-major storage.
//!
//! Every function here is a pure `(row, col) -> offset` mapping or a
//! row-range query. Kernels call these instead of carrying running
//! offsets, so the storage conventions live in exactly one place.
//!
//! Preconditions are the caller's: `(i, j)` must lie inside the stored
//! triangle or band. They are checked with `debug_assert!` only.

use std::ops::Range;

use crate::layout::Uplo;

/// Column-major offset of `(i, j)` with leading dimension `ld`.
#[inline(always)]
pub fn dense_index(i: usize, j: usize, ld: usize) -> usize {
    i + j * ld
}

// ============================================================================
// Packed triangular / symmetric storage
// ============================================================================

/// Number of stored elements of one triangle of an `n x n` matrix.
#[inline]
pub fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Offset of the first stored element of column `j`.
///
/// Upper: column `j` holds rows `0..=j`. Lower: column `j` holds rows `j..n`.
#[inline(always)]
pub fn packed_col_start(uplo: Uplo, n: usize, j: usize) -> usize {
    match uplo {
        Uplo::Upper => j * (j + 1) / 2,
        Uplo::Lower => j * n - j * j.saturating_sub(1) / 2,
    }
}

/// Packed offset of element `(i, j)` of the stored triangle.
#[inline(always)]
pub fn packed_index(uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
    match uplo {
        Uplo::Upper => {
            debug_assert!(i <= j, "({i}, {j}) is outside the upper triangle");
            packed_col_start(uplo, n, j) + i
        }
        Uplo::Lower => {
            debug_assert!(i >= j && i < n, "({i}, {j}) is outside the lower triangle");
            packed_col_start(uplo, n, j) + (i - j)
        }
    }
}

/// Rows of column `j` stored in a packed or full triangle, diagonal included.
#[inline(always)]
pub fn triangle_rows(uplo: Uplo, n: usize, j: usize) -> Range<usize> {
    match uplo {
        Uplo::Upper => 0..j + 1,
        Uplo::Lower => j..n,
    }
}

// ============================================================================
// General band storage: kl sub-diagonals, ku super-diagonals
// ============================================================================

/// Band-array row holding matrix element `(i, j)`.
#[inline(always)]
pub fn band_row(ku: usize, i: usize, j: usize) -> usize {
    debug_assert!(i + ku >= j, "({i}, {j}) is above the band");
    ku + i - j
}

/// Offset of matrix element `(i, j)` in a general band array.
#[inline(always)]
pub fn band_index(ku: usize, i: usize, j: usize, lda: usize) -> usize {
    band_row(ku, i, j) + j * lda
}

/// Valid matrix rows of column `j`: `max(0, j-ku) ..= min(m-1, j+kl)`.
#[inline(always)]
pub fn band_rows(m: usize, kl: usize, ku: usize, j: usize) -> Range<usize> {
    let lo = j.saturating_sub(ku);
    let hi = m.min(j + kl + 1);
    lo..hi.max(lo)
}

// ============================================================================
// Symmetric / triangular band storage: k off-diagonals in one triangle
// ============================================================================

/// Band-array row holding element `(i, j)` of the stored triangle.
///
/// Upper: the diagonal sits in row `k`. Lower: the diagonal sits in row 0.
#[inline(always)]
pub fn sym_band_row(uplo: Uplo, k: usize, i: usize, j: usize) -> usize {
    match uplo {
        Uplo::Upper => {
            debug_assert!(i <= j && j - i <= k, "({i}, {j}) is outside the upper band");
            k + i - j
        }
        Uplo::Lower => {
            debug_assert!(i >= j && i - j <= k, "({i}, {j}) is outside the lower band");
            i - j
        }
    }
}

/// Offset of element `(i, j)` of the stored triangle of a symmetric band.
#[inline(always)]
pub fn sym_band_index(uplo: Uplo, k: usize, i: usize, j: usize, lda: usize) -> usize {
    sym_band_row(uplo, k, i, j) + j * lda
}

/// Rows of column `j` stored in the selected triangle of an `n x n` band
/// with `k` off-diagonals, diagonal included.
#[inline(always)]
pub fn sym_band_rows(uplo: Uplo, n: usize, k: usize, j: usize) -> Range<usize> {
    match uplo {
        Uplo::Upper => j.saturating_sub(k)..j + 1,
        Uplo::Lower => j..n.min(j + k + 1),
    }
}
