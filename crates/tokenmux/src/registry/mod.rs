//! # Backend Registries
//!
//! A registry maps a model identifier to the data needed to construct
//! one backend family's adapter. Registries are plain values: build them,
//! hand them to a [`TokenizerServiceBuilder`](crate::TokenizerServiceBuilder),
//! and they stay read-only from then on.
//!
//! Two families exist, with independent registries:
//! * [`SchemeRegistry`] - model name to a symbolic [`SchemeTag`];
//! * [`VocabRegistry`] - model name to a [`VocabPayload`].

mod scheme_registry;
mod vocab_registry;

#[doc(inline)]
pub use scheme_registry::*;
#[doc(inline)]
pub use vocab_registry::*;

/// A backend family.
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
#[strum(ascii_case_insensitive)]
pub enum BackendFamily {
    /// Symbolic-scheme family: `OpenAI` encodings through `tiktoken-rs`.
    #[strum(serialize = "openai")]
    OpenAI,

    /// Vocabulary-file family: `tokenizer.json` definitions through `tokenizers`.
    #[strum(to_string = "huggingface", serialize = "hf")]
    Huggingface,
}

impl BackendFamily {
    /// Resolution priority; the first family holding a model wins.
    pub const PRIORITY: [BackendFamily; 2] = [BackendFamily::OpenAI, BackendFamily::Huggingface];
}

/// A static, read-only map from model identifier to backend init payload.
pub trait BackendRegistry: Send + Sync {
    /// The backend-specific initialization payload.
    type Payload;

    /// The family served by this registry.
    fn family(&self) -> BackendFamily;

    /// Look up the payload for `model`.
    fn lookup(
        &self,
        model: &str,
    ) -> Option<&Self::Payload>;

    /// Pure membership test.
    fn exists(
        &self,
        model: &str,
    ) -> bool {
        self.lookup(model).is_some()
    }

    /// The registered model identifiers, sorted.
    fn models(&self) -> Vec<String>;
}

/// The pair of registries consulted by the service.
#[derive(Debug, Clone, Default)]
pub struct BackendRegistries {
    /// Symbolic-scheme registry; consulted first.
    pub schemes: SchemeRegistry,

    /// Vocabulary-file registry; consulted second.
    pub vocabs: VocabRegistry,
}

impl BackendRegistries {
    /// Create a new registry pair.
    pub fn new(
        schemes: SchemeRegistry,
        vocabs: VocabRegistry,
    ) -> Self {
        Self { schemes, vocabs }
    }

    /// Create a registry pair with nothing registered.
    pub fn empty() -> Self {
        Self::new(SchemeRegistry::empty(), VocabRegistry::empty())
    }

    /// Does the `family` registry hold `model`?
    pub fn model_exists(
        &self,
        family: BackendFamily,
        model: &str,
    ) -> bool {
        match family {
            BackendFamily::OpenAI => self.schemes.exists(model),
            BackendFamily::Huggingface => self.vocabs.exists(model),
        }
    }

    /// The family that would serve `model`, following [`BackendFamily::PRIORITY`].
    pub fn find_family(
        &self,
        model: &str,
    ) -> Option<BackendFamily> {
        BackendFamily::PRIORITY
            .into_iter()
            .find(|&family| self.model_exists(family, model))
    }

    /// The models registered for `family`, sorted.
    pub fn models(
        &self,
        family: BackendFamily,
    ) -> Vec<String> {
        match family {
            BackendFamily::OpenAI => self.schemes.models(),
            BackendFamily::Huggingface => self.vocabs.models(),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn test_backend_family() {
        assert_eq!(BackendFamily::OpenAI.to_string(), "openai");
        assert_eq!(BackendFamily::Huggingface.to_string(), "huggingface");
        assert_eq!(
            BackendFamily::from_str("HF").unwrap(),
            BackendFamily::Huggingface
        );
        assert_eq!(
            BackendFamily::from_str("OpenAI").unwrap(),
            BackendFamily::OpenAI
        );
        assert!(BackendFamily::from_str("sentencepiece").is_err());
    }

    #[test]
    fn test_default_registries_are_disjoint() {
        let registries = BackendRegistries::default();

        for model in registries.models(BackendFamily::OpenAI) {
            assert!(!registries.vocabs.exists(&model), "{model}");
        }
        for model in registries.models(BackendFamily::Huggingface) {
            assert!(!registries.schemes.exists(&model), "{model}");
        }
    }

    #[test]
    fn test_find_family() {
        let registries = BackendRegistries::default();

        assert_eq!(registries.find_family("gpt-4"), Some(BackendFamily::OpenAI));
        assert_eq!(
            registries.find_family("Llama-3.2-1B"),
            Some(BackendFamily::Huggingface)
        );
        assert_eq!(registries.find_family("unknown-model-xyz"), None);

        assert!(registries.model_exists(BackendFamily::OpenAI, "gpt-4"));
        assert!(!registries.model_exists(BackendFamily::Huggingface, "gpt-4"));
        assert!(!registries.model_exists(BackendFamily::OpenAI, "Llama-3.2-1B"));
        assert!(registries.model_exists(BackendFamily::Huggingface, "Llama-3.2-1B"));
    }

    #[test]
    fn test_find_family_priority() {
        let registries = BackendRegistries::new(
            SchemeRegistry::empty().with_model("shared", SchemeTag::from_static("cl100k_base")),
            VocabRegistry::empty().with_model("shared", VocabPayload::Embedded(b"{}")),
        );

        assert_eq!(registries.find_family("shared"), Some(BackendFamily::OpenAI));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registries = BackendRegistries::default();
        assert!(registries.find_family("GPT-4").is_none());
        assert!(registries.find_family("llama-3.2-1b").is_none());
    }
}
