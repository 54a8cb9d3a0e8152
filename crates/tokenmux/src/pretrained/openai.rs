//! `OpenAI` model names and their encoding schemes.

use crate::backends::openai::EncodingScheme;

/// A model served by a built-in `tiktoken` scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstSchemeModel {
    /// The model identifier.
    pub name: &'static str,

    /// The encoding scheme.
    pub scheme: EncodingScheme,
}

const fn model(
    name: &'static str,
    scheme: EncodingScheme,
) -> ConstSchemeModel {
    ConstSchemeModel { name, scheme }
}

/// The `OpenAI` models known to the default [`SchemeRegistry`](crate::SchemeRegistry).
pub const OPENAI_MODELS: &[ConstSchemeModel] = &[
    // reasoning
    model("o1-preview", EncodingScheme::O200kBase),
    model("o1-mini", EncodingScheme::O200kBase),
    model("o1", EncodingScheme::O200kBase),
    model("o3-mini", EncodingScheme::O200kBase),
    // chat
    model("gpt-4.1", EncodingScheme::O200kBase),
    model("gpt-4o", EncodingScheme::O200kBase),
    model("gpt-4o-mini", EncodingScheme::O200kBase),
    model("gpt-4", EncodingScheme::Cl100kBase),
    model("gpt-4-turbo", EncodingScheme::Cl100kBase),
    model("gpt-3.5-turbo", EncodingScheme::Cl100kBase),
    model("gpt-3.5", EncodingScheme::Cl100kBase),
    // open weights
    model("gpt-oss-20b", EncodingScheme::O200kHarmony),
    model("gpt-oss-120b", EncodingScheme::O200kHarmony),
    // embeddings
    model("text-embedding-ada-002", EncodingScheme::Cl100kBase),
    model("text-embedding-3-small", EncodingScheme::Cl100kBase),
    model("text-embedding-3-large", EncodingScheme::Cl100kBase),
    // legacy completions
    model("text-davinci-003", EncodingScheme::P50kBase),
    model("text-davinci-002", EncodingScheme::P50kBase),
    model("code-davinci-002", EncodingScheme::P50kBase),
    model("text-davinci-edit-001", EncodingScheme::P50kEdit),
    model("code-davinci-edit-001", EncodingScheme::P50kEdit),
    model("davinci", EncodingScheme::R50kBase),
    model("curie", EncodingScheme::R50kBase),
    model("babbage", EncodingScheme::R50kBase),
    model("ada", EncodingScheme::R50kBase),
    model("gpt2", EncodingScheme::R50kBase),
];

/// Find the scheme of a pretrained `OpenAI` model.
pub fn scheme_for_model(name: &str) -> Option<EncodingScheme> {
    OPENAI_MODELS
        .iter()
        .find(|m| m.name == name)
        .map(|m| m.scheme)
}

/// Is `name` a pretrained `OpenAI` model?
pub fn model_exists(name: &str) -> bool {
    scheme_for_model(name).is_some()
}
