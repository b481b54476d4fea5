//! Enumeration of unordered index pairs.

use rayon::prelude::*;

/// Iterator over every `(i, j)` with `i < j < len`, in combinatorial order:
/// `(0, 1), (0, 2), …, (0, len-1), (1, 2), …`.
#[derive(Clone, Debug)]
pub struct PairIndices {
    len: usize,
    i: usize,
    j: usize,
}

impl PairIndices {
    /// Create an iterator over the pairs of a sequence of `len` items.
    pub fn new(len: usize) -> Self {
        PairIndices { len, i: 0, j: 1 }
    }
}

impl Iterator for PairIndices {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i + 1 < self.len {
            if self.j < self.len {
                let pair = (self.i, self.j);
                self.j += 1;
                return Some(pair);
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = remaining_pairs(self.len, self.i, self.j);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PairIndices {}

/// Number of unordered pairs drawn from `len` items.
pub fn pair_count(len: usize) -> usize {
    len * len.saturating_sub(1) / 2
}

fn remaining_pairs(len: usize, i: usize, j: usize) -> usize {
    if i + 1 >= len {
        return 0;
    }
    // Rest of the current row plus every full row after it.
    len.saturating_sub(j) + pair_count(len - i - 1)
}

/// Parallel counterpart of [`PairIndices`].
///
/// Rows are split across rayon workers and each row is generated lazily, so
/// memory does not grow with the number of pairs. Collecting into a `Vec`
/// yields the same order as [`PairIndices`].
pub fn par_pair_indices(len: usize) -> impl ParallelIterator<Item = (usize, usize)> {
    (0..len)
        .into_par_iter()
        .flat_map_iter(move |i| (i + 1..len).map(move |j| (i, j)))
}
