//! # `OpenAI` Encoding Schemes

use core::str::FromStr;

use tiktoken_rs::CoreBPE;

use crate::{TMResult, TokenmuxError, registry::SchemeTag};

/// The built-in `tiktoken` encoding tables.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[non_exhaustive]
pub enum EncodingScheme {
    /// GPT-2 "`r50k_base`" encoding.
    #[strum(serialize = "r50k_base")]
    R50kBase,

    /// Codex "`p50k_base`" encoding.
    #[strum(serialize = "p50k_base")]
    P50kBase,

    /// Edit-model "`p50k_edit`" encoding.
    #[strum(serialize = "p50k_edit")]
    P50kEdit,

    /// GPT-3.5 / GPT-4 "`cl100k_base`" encoding.
    #[strum(serialize = "cl100k_base")]
    Cl100kBase,

    /// GPT-4o "`o200k_base`" encoding.
    #[strum(serialize = "o200k_base")]
    O200kBase,

    /// gpt-oss "`o200k_harmony`" encoding.
    #[strum(serialize = "o200k_harmony")]
    O200kHarmony,
}

impl EncodingScheme {
    /// Resolve a symbolic tag.
    ///
    /// ## Returns
    /// * `Ok(scheme)` - on success.
    /// * `Err(TokenmuxError::UnsupportedScheme)` - if the tag names no scheme.
    pub fn from_tag(tag: &SchemeTag) -> TMResult<Self> {
        Self::from_str(tag.as_str())
            .map_err(|_| TokenmuxError::UnsupportedScheme(tag.to_string()))
    }

    /// Build the engine's encoding table.
    ///
    /// The tables ship with `tiktoken-rs`; this parses them, and is not cheap.
    ///
    /// ## Returns
    /// * `Ok(bpe)` - on success.
    /// * `Err(TokenmuxError::InvalidModelData)` - if the table fails to parse.
    #[cfg_attr(feature = "tracing", tracing::instrument)]
    pub fn load_bpe(&self) -> TMResult<CoreBPE> {
        use EncodingScheme::*;
        let bpe = match self {
            R50kBase => tiktoken_rs::r50k_base(),
            P50kBase => tiktoken_rs::p50k_base(),
            P50kEdit => tiktoken_rs::p50k_edit(),
            Cl100kBase => tiktoken_rs::cl100k_base(),
            O200kBase => tiktoken_rs::o200k_base(),
            O200kHarmony => tiktoken_rs::o200k_harmony(),
        };
        bpe.map_err(|e| TokenmuxError::invalid_model_data(self.to_string(), e))
    }
}
