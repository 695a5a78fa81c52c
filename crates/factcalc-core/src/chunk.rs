//! Partitioning of `[1, n]` into contiguous chunks.

use num_bigint::BigUint;
use num_traits::One;

/// Inclusive integer range `[start, end]` assigned to one parallel task.
///
/// A chunk with `start > end` is empty and has product 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// First factor.
    pub start: u64,
    /// Last factor (inclusive).
    pub end: u64,
}

impl Chunk {
    /// Create a chunk covering `[start, end]`.
    #[must_use]
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Whether the chunk contains no factors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of factors in the chunk.
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Sequential product of every integer in the chunk, seeded at 1.
    #[must_use]
    pub fn product(&self) -> BigUint {
        if self.is_empty() {
            return BigUint::one();
        }
        (self.start..=self.end).fold(BigUint::one(), |acc, i| acc * i)
    }
}

/// Split `[1, n]` into `workers` chunks of `ceil(n / workers)` factors.
///
/// Chunks are ordered by `start`; trailing chunks that fall past `n` are
/// empty. The worker count is clamped to `[1, max(n, 1)]`, so at most
/// `max(n, 1)` chunks are allocated whatever `workers` asks for.
#[must_use]
pub fn partition(n: u64, workers: usize) -> Vec<Chunk> {
    let workers = (workers.max(1) as u64).min(n.max(1));
    let chunk_size = n.div_ceil(workers).max(1);

    (0..workers)
        .map(|i| {
            let start = i.saturating_mul(chunk_size).saturating_add(1);
            let end = (i + 1).saturating_mul(chunk_size).min(n);
            Chunk::new(start, end)
        })
        .collect()
}
