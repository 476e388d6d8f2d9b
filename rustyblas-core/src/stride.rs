//! Strided addressing model for BLAS vector views.
//!
//! A vector view is `n` logical elements read from a slice with a signed
//! increment. For a positive increment logical element `k` lives at
//! `k * inc`; for a negative increment traversal starts at the highest
//! physical slot, `(n - 1) * |inc|`, and walks backward. Either way logical
//! element 0 is the first one processed, so a routine's result is defined
//! independent of traversal direction.
//!
//! An increment of zero has no defined meaning and is a caller contract
//! violation.

/// Physical offset of logical element 0 for a view of `n` elements.
#[inline(always)]
pub fn start_offset(n: usize, inc: isize) -> usize {
    if inc < 0 && n > 0 {
        (n - 1) * inc.unsigned_abs()
    } else {
        0
    }
}

/// Minimum slice length that holds a view of `n` elements.
#[inline]
pub fn required_len(n: usize, inc: isize) -> usize {
    if n == 0 {
        0
    } else {
        1 + (n - 1) * inc.unsigned_abs()
    }
}

/// Start offset and increment of one strided vector view.
///
/// Each operand of a routine builds its own `Stride` from its own length
/// and increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stride {
    start: usize,
    inc: isize,
}

impl Stride {
    #[inline(always)]
    pub fn new(n: usize, inc: isize) -> Self {
        debug_assert!(inc != 0 || n <= 1, "BLAS increment must be non-zero");
        Self {
            start: start_offset(n, inc),
            inc,
        }
    }

    /// Physical slice index of logical element `k`.
    #[inline(always)]
    pub fn at(self, k: usize) -> usize {
        (self.start as isize + k as isize * self.inc) as usize
    }

    /// Physical index of logical element 0.
    #[inline(always)]
    pub fn start(self) -> usize {
        self.start
    }

    #[inline(always)]
    pub fn inc(self) -> isize {
        self.inc
    }

    /// `true` when the view is a plain contiguous run (`inc == 1`).
    #[inline(always)]
    pub fn is_unit(self) -> bool {
        self.inc == 1
    }

    /// Physical indices of logical elements `0..n`, in logical order.
    #[inline]
    pub fn iter(self, n: usize) -> StridedIndices {
        StridedIndices {
            pos: self.start as isize,
            inc: self.inc,
            remaining: n,
        }
    }
}

/// Iterator over the physical indices of a strided view.
#[derive(Debug, Clone)]
pub struct StridedIndices {
    pos: isize,
    inc: isize,
    remaining: usize,
}

impl Iterator for StridedIndices {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.pos as usize;
        self.pos += self.inc;
        self.remaining -= 1;
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StridedIndices {}

/// Physical indices of a view of `n` elements with increment `inc`.
#[inline]
pub fn indices(n: usize, inc: isize) -> StridedIndices {
    Stride::new(n, inc).iter(n)
}
