//! BLAS Level 2: Matrix-vector operations.
//!
//! All matrices are column-major. Routines fall into three groups:
//! - [`general`]: `dgemv`, `dgbmv`, `dger`
//! - [`symmetric`]: `dsymv`, `dsbmv`, `dspmv`, `dsyr`, `dsyr2`, `dspr`, `dspr2`
//! - [`triangular`]: `dtrmv`, `dtrsv`, `dtbmv`, `dtbsv`, `dtpmv`, `dtpsv`
//!
//! Symmetric and triangular routines are written once against
//! `TriangleStorage`, which maps `(i, j)` of the stored triangle to a buffer
//! offset for full, banded and packed layouts. The unstored triangle is
//! never addressed.

use std::ops::Range;

use rustyblas_core::packed::{
    dense_index, packed_index, sym_band_index, sym_band_rows, triangle_rows,
};
use rustyblas_core::Uplo;

pub mod general;
pub mod symmetric;
pub mod triangular;

pub use general::{dgbmv, dgemv, dger};
pub use symmetric::{dsbmv, dspmv, dspr, dspr2, dsymv, dsyr, dsyr2};
pub use triangular::{dtbmv, dtbsv, dtpmv, dtpsv, dtrmv, dtrsv};

/// Addressing of one stored triangle of an `n x n` matrix.
pub(crate) trait TriangleStorage {
    fn uplo(&self) -> Uplo;

    /// Buffer offset of `(i, j)`; `(i, j)` must lie in the stored triangle.
    fn index(&self, i: usize, j: usize) -> usize;

    /// Stored rows of column `j`, diagonal included.
    fn rows(&self, j: usize) -> Range<usize>;

    /// Stored rows of column `j` strictly off the diagonal.
    #[inline(always)]
    fn off_diagonal_rows(&self, j: usize) -> Range<usize> {
        let rows = self.rows(j);
        match self.uplo() {
            Uplo::Upper => rows.start..j,
            Uplo::Lower => j + 1..rows.end,
        }
    }
}

/// Triangle of a full column-major array with leading dimension `lda`.
pub(crate) struct Full {
    pub uplo: Uplo,
    pub n: usize,
    pub lda: usize,
}

impl TriangleStorage for Full {
    #[inline(always)]
    fn uplo(&self) -> Uplo {
        self.uplo
    }

    #[inline(always)]
    fn index(&self, i: usize, j: usize) -> usize {
        dense_index(i, j, self.lda)
    }

    #[inline(always)]
    fn rows(&self, j: usize) -> Range<usize> {
        triangle_rows(self.uplo, self.n, j)
    }
}

/// Triangle of a band with `k` off-diagonals, stored in a `(k+1) x n` array.
pub(crate) struct Band {
    pub uplo: Uplo,
    pub n: usize,
    pub k: usize,
    pub lda: usize,
}

impl TriangleStorage for Band {
    #[inline(always)]
    fn uplo(&self) -> Uplo {
        self.uplo
    }

    #[inline(always)]
    fn index(&self, i: usize, j: usize) -> usize {
        sym_band_index(self.uplo, self.k, i, j, self.lda)
    }

    #[inline(always)]
    fn rows(&self, j: usize) -> Range<usize> {
        sym_band_rows(self.uplo, self.n, self.k, j)
    }
}

/// Packed triangle of `n(n+1)/2` contiguous elements.
pub(crate) struct Packed {
    pub uplo: Uplo,
    pub n: usize,
}

impl TriangleStorage for Packed {
    #[inline(always)]
    fn uplo(&self) -> Uplo {
        self.uplo
    }

    #[inline(always)]
    fn index(&self, i: usize, j: usize) -> usize {
        packed_index(self.uplo, self.n, i, j)
    }

    #[inline(always)]
    fn rows(&self, j: usize) -> Range<usize> {
        triangle_rows(self.uplo, self.n, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_diagonal_rows() {
        let full = Full { uplo: Uplo::Upper, n: 4, lda: 4 };
        assert_eq!(full.off_diagonal_rows(2), 0..2);
        let band = Band { uplo: Uplo::Lower, n: 5, k: 1, lda: 2 };
        assert_eq!(band.off_diagonal_rows(2), 3..4);
        assert!(band.off_diagonal_rows(4).is_empty());
        let packed = Packed { uplo: Uplo::Upper, n: 3 };
        assert_eq!(packed.index(1, 2), 4);
    }
}
