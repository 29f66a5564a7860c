//! # Parallel Lookup

use rayon::prelude::*;

use crate::{
    errors::WTResult,
    vectors::VectorTable,
    vocab::Vocabulary,
};

/// Batch-Level Parallel Lookup Wrapper.
///
/// Runs each sequence of a batch on the ``rayon`` pool.
/// Holds shared borrows, so no mutation can be in flight while it is alive.
#[derive(Debug, Clone)]
pub struct ParallelRayonLookup<'a, T> {
    /// Wrapped table.
    pub inner: &'a T,
}

impl<'a, T: Sync> ParallelRayonLookup<'a, T> {
    /// Wrap a table.
    pub fn new(inner: &'a T) -> Self {
        Self { inner }
    }
}

impl ParallelRayonLookup<'_, Vocabulary> {
    /// Look up indices for each sequence; unknown tokens map to the unk index.
    pub fn lookup_index_batches<S: AsRef<str> + Sync>(
        &self,
        batch: &[Vec<S>],
    ) -> Vec<Vec<usize>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.lookup_indices(tokens))
            .collect()
    }

    /// Look up tokens for each sequence.
    ///
    /// ## Returns
    /// The token sequences, or the first out-of-range error encountered.
    pub fn try_lookup_token_batches(
        &self,
        batch: &[Vec<usize>],
    ) -> WTResult<Vec<Vec<String>>> {
        batch
            .par_iter()
            .map(|indices| self.inner.lookup_tokens(indices))
            .collect()
    }
}

impl ParallelRayonLookup<'_, VectorTable> {
    /// Look up row-major vectors for each sequence; unknown tokens get the unk vector.
    pub fn lookup_vector_batches<S: AsRef<str> + Sync>(
        &self,
        batch: &[Vec<S>],
    ) -> Vec<Vec<f32>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.lookup_vectors(tokens))
            .collect()
    }
}
