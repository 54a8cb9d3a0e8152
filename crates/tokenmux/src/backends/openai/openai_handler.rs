//! # `OpenAI` Handler

use core::marker::PhantomData;
use std::sync::Arc;

use tiktoken_rs::CoreBPE;

use crate::{
    TMResult,
    TokenizerOptions,
    TokenmuxError,
    backends::{TokenSequence, TokenizerBackend, openai::EncodingScheme},
    registry::{BackendFamily, SchemeTag},
    types::{TokenType, tokens_from_ranks, tokens_to_ranks},
};

/// [`TokenizerBackend`] over a `tiktoken-rs` [`CoreBPE`].
///
/// ## Decode policy
/// An id outside the scheme's vocabulary fails the whole call with
/// [`TokenmuxError::Decode`], as does output that is not valid UTF-8
/// (a sequence cut inside a multibyte character).
/// Encoding is lossless: decoding the ids of any text reproduces it.
///
/// ## Token texts
/// Each token's bytes, decoded lossily; a token holding part of a
/// multibyte character renders as `U+FFFD`.
///
/// ## Concurrency
/// [`CoreBPE`] is `Send + Sync`, and encodes through `&self`;
/// clones share the table.
pub struct OpenAIHandler<T: TokenType = u32> {
    scheme: Option<EncodingScheme>,
    bpe: Option<Arc<CoreBPE>>,
    options: TokenizerOptions,
    _marker: PhantomData<fn() -> T>,
}

impl<T: TokenType> Clone for OpenAIHandler<T> {
    fn clone(&self) -> Self {
        Self {
            scheme: self.scheme,
            bpe: self.bpe.clone(),
            options: self.options,
            _marker: PhantomData,
        }
    }
}

impl<T: TokenType> Default for OpenAIHandler<T> {
    /// A handler with no engine; every call fails with
    /// [`TokenmuxError::UninitializedBackend`].
    fn default() -> Self {
        Self {
            scheme: None,
            bpe: None,
            options: TokenizerOptions::default(),
            _marker: PhantomData,
        }
    }
}

impl<T: TokenType> OpenAIHandler<T> {
    /// Wrap an existing engine.
    pub fn new(
        scheme: EncodingScheme,
        bpe: Arc<CoreBPE>,
        options: TokenizerOptions,
    ) -> Self {
        Self {
            scheme: Some(scheme),
            bpe: Some(bpe),
            options,
            _marker: PhantomData,
        }
    }

    /// Build a handler for a scheme.
    ///
    /// ## Returns
    /// * `Ok(handler)` - on success.
    /// * `Err(TokenmuxError::InvalidModelData)` - if the scheme table fails to parse.
    pub fn from_scheme(
        scheme: EncodingScheme,
        options: TokenizerOptions,
    ) -> TMResult<Self> {
        log::debug!("building tiktoken scheme {scheme}");
        let bpe = scheme.load_bpe()?;
        Ok(Self::new(scheme, Arc::new(bpe), options))
    }

    /// Build a handler for a symbolic tag.
    ///
    /// ## Returns
    /// * `Ok(handler)` - on success.
    /// * `Err(TokenmuxError::UnsupportedScheme)` - if the tag names no scheme.
    /// * `Err(TokenmuxError::InvalidModelData)` - if the scheme table fails to parse.
    pub fn from_tag(
        tag: &SchemeTag,
        options: TokenizerOptions,
    ) -> TMResult<Self> {
        Self::from_scheme(EncodingScheme::from_tag(tag)?, options)
    }

    /// The scheme, if initialized.
    pub fn scheme(&self) -> Option<EncodingScheme> {
        self.scheme
    }

    /// The engine, if initialized.
    pub fn bpe(&self) -> Option<&Arc<CoreBPE>> {
        self.bpe.as_ref()
    }

    fn engine(&self) -> TMResult<&CoreBPE> {
        self.bpe
            .as_deref()
            .ok_or(TokenmuxError::UninitializedBackend)
    }
}

impl<T: TokenType> TokenizerBackend<T> for OpenAIHandler<T> {
    fn family(&self) -> BackendFamily {
        BackendFamily::OpenAI
    }

    fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn encode(
        &self,
        text: &str,
    ) -> TMResult<TokenSequence<T>> {
        let bpe = self.engine()?;

        let ranks = if self.options.add_special_tokens {
            bpe.encode_with_special_tokens(text)
        } else {
            bpe.encode_ordinary(text)
        };

        // Ranks fresh from the encoder are always in the table.
        let texts = bpe
            ._decode_native_and_split(ranks.clone())
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .collect();

        Ok(TokenSequence::new(tokens_from_ranks(&ranks)?, Some(texts)))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn decode(
        &self,
        tokens: &[T],
    ) -> TMResult<String> {
        let bpe = self.engine()?;
        let ranks = tokens_to_ranks(tokens)?;
        bpe.decode(ranks)
            .map_err(|e| TokenmuxError::Decode(e.to_string()))
    }
}
