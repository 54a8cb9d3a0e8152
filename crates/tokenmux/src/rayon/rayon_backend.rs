//! # Parallel Backend

use crate::{
    TMResult,
    TokenizerOptions,
    backends::{TokenSequence, TokenizerBackend},
    registry::BackendFamily,
    types::TokenType,
};

/// Batch-Level Parallel Backend Wrapper.
///
/// Single calls go straight to the inner backend;
/// batches fan out over the ``rayon`` pool.
/// Output order matches input order, and the first error wins.
#[derive(Clone)]
pub struct ParallelRayonBackend<T: TokenType, B: TokenizerBackend<T>> {
    /// Wrapped backend.
    pub inner: B,

    _marker: core::marker::PhantomData<fn() -> T>,
}

impl<T, B> ParallelRayonBackend<T, B>
where
    T: TokenType,
    B: TokenizerBackend<T>,
{
    /// Create a new parallel backend.
    ///
    /// ## Arguments
    /// * `inner` - The backend to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonBackend` instance.
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T, B> TokenizerBackend<T> for ParallelRayonBackend<T, B>
where
    T: TokenType,
    B: TokenizerBackend<T>,
{
    fn family(&self) -> BackendFamily {
        self.inner.family()
    }

    fn options(&self) -> &TokenizerOptions {
        self.inner.options()
    }

    fn encode(
        &self,
        text: &str,
    ) -> TMResult<TokenSequence<T>> {
        self.inner.encode(text)
    }

    fn decode(
        &self,
        tokens: &[T],
    ) -> TMResult<String> {
        self.inner.decode(tokens)
    }

    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> TMResult<Vec<TokenSequence<T>>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.inner.encode(text)).collect()
    }

    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> TMResult<Vec<String>> {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|tokens| self.inner.decode(tokens))
            .collect()
    }
}
