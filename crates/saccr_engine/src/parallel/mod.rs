//! Rayon-based parallelisation for per-trade work.
//!
//! Per-trade metrics have no cross-row dependency, so large netting sets
//! are mapped in parallel. Small ones stay sequential; thread hand-off
//! costs more than the arithmetic.

use rayon::prelude::*;

/// Minimum number of trades handed to one rayon task.
pub const DEFAULT_MIN_CHUNK_LEN: usize = 64;

/// Trade count at which per-trade work switches to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelConfig {
    /// Minimum items per rayon task
    pub min_chunk_len: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(min_chunk_len: usize, parallel_threshold: usize) -> Self {
        Self {
            min_chunk_len: min_chunk_len.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never uses rayon.
    pub fn sequential() -> Self {
        Self::new(DEFAULT_MIN_CHUNK_LEN, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Maps every item through a fallible function, keeping input order.
///
/// Runs on rayon when `config` says the slice is large enough. The first
/// error (in rayon's reduction order) aborts the map.
pub fn try_map_ordered<T, R, E, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items
            .par_iter()
            .with_min_len(config.min_chunk_len)
            .map(mapper)
            .collect()
    } else {
        items.iter().map(mapper).collect()
    }
}
