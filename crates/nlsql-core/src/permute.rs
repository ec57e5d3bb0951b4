//! Single-edit neighbors of a token sequence
//!
//! An edit removes one token and reinserts it elsewhere. Every ordered
//! (source, destination) pair with source != destination is produced, so a
//! sequence of length n has exactly n * (n - 1) neighbors. Some of them are
//! identical (moving i to i+1 equals moving i+1 to i); deduplication is the
//! search's job.

use crate::token::ParseSequence;
use std::iter::FusedIterator;

/// Iterate over every single-edit neighbor of `sequence`.
///
/// Order: source-major, then destination ascending.
pub fn neighbors(sequence: &ParseSequence) -> Neighbors<'_> {
    Neighbors {
        source: sequence,
        from: 0,
        to: 0,
    }
}

/// Number of neighbors a sequence of length `len` has
pub fn neighbor_count(len: usize) -> usize {
    len * len.saturating_sub(1)
}

/// Lazy iterator returned by [`neighbors`]
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    source: &'a ParseSequence,
    from: usize,
    to: usize,
}

impl Neighbors<'_> {
    fn advance(&mut self) {
        self.to += 1;
        if self.to == self.source.len() {
            self.to = 0;
            self.from += 1;
        }
    }

    fn remaining(&self) -> usize {
        let n = self.source.len();
        if n < 2 || self.from >= n {
            return 0;
        }
        // pairs left in the current row, skipping the diagonal
        let row = (n - self.to) - usize::from(self.to <= self.from);
        row + (n - self.from - 1) * (n - 1)
    }
}

impl Iterator for Neighbors<'_> {
    type Item = ParseSequence;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.source.len();
        if n < 2 {
            return None;
        }
        while self.from < n {
            let (from, to) = (self.from, self.to);
            self.advance();
            if from != to {
                return Some(self.source.with_move(from, to));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}
