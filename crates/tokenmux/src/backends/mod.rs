//! # Backend Adapters
//!
//! Each adapter wraps one tokenization engine behind [`TokenizerBackend`]:
//! * [`openai::OpenAIHandler`] - `tiktoken-rs` schemes;
//! * [`huggingface::HuggingfaceHandler`] - `tokenizers` definitions.
//!
//! Adapters normalize engine token ids to the caller's [`TokenType`],
//! and surface engine failures as [`TokenmuxError`](crate::TokenmuxError)s.

pub mod huggingface;
pub mod openai;
mod token_sequence;

#[doc(inline)]
pub use token_sequence::*;

use crate::{TMResult, TokenizerOptions, registry::BackendFamily, types::TokenType};

/// The uniform encode/decode contract.
///
/// Implementations are deterministic, and never mutate shared state;
/// so a backend may be called concurrently through `&self`.
pub trait TokenizerBackend<T: TokenType>: Send + Sync {
    /// The family of this backend.
    fn family(&self) -> BackendFamily;

    /// The options this backend was built with.
    fn options(&self) -> &TokenizerOptions;

    /// Encode text into tokens.
    ///
    /// ## Returns
    /// * `Ok(tokens)` - the complete token sequence.
    /// * `Err(TokenmuxError::UninitializedBackend)` - if there is no engine.
    /// * `Err(e)` - on any other error; never a partial sequence.
    fn encode(
        &self,
        text: &str,
    ) -> TMResult<TokenSequence<T>>;

    /// Decode tokens into text.
    ///
    /// ## Returns
    /// * `Ok(text)` - the complete text.
    /// * `Err(TokenmuxError::UninitializedBackend)` - if there is no engine.
    /// * `Err(e)` - on any other error.
    fn decode(
        &self,
        tokens: &[T],
    ) -> TMResult<String>;

    /// Encode a batch of texts; all-or-nothing.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> TMResult<Vec<TokenSequence<T>>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }

    /// Decode a batch of token sequences; all-or-nothing.
    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> TMResult<Vec<String>> {
        batch.iter().map(|tokens| self.decode(tokens)).collect()
    }
}
