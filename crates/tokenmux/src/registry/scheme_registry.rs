//! # Symbolic-Scheme Registry

use std::{borrow::Cow, fmt};

use crate::{
    backends::openai::EncodingScheme,
    pretrained::openai::OPENAI_MODELS,
    registry::{BackendFamily, BackendRegistry},
    types::{TMHashMap, hash_map_new},
};

/// A symbolic tag naming a well-known encoding scheme.
///
/// Tags are resolved to an [`EncodingScheme`] when the adapter is built,
/// not when the registry is; so an unknown tag is an adapter construction
/// error rather than a registry error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemeTag(Cow<'static, str>);

impl SchemeTag {
    /// A tag from a static string.
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// The tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EncodingScheme> for SchemeTag {
    fn from(scheme: EncodingScheme) -> Self {
        Self(Cow::Owned(scheme.to_string()))
    }
}

impl From<String> for SchemeTag {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl fmt::Display for SchemeTag {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model name to [`SchemeTag`] registry.
#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    entries: TMHashMap<String, SchemeTag>,
}

impl Default for SchemeRegistry {
    /// The pretrained `OpenAI` models; see [`OPENAI_MODELS`].
    fn default() -> Self {
        let mut registry = Self::empty();
        for model in OPENAI_MODELS {
            registry.insert(model.name, model.scheme);
        }
        registry
    }
}

impl SchemeRegistry {
    /// A registry with no models.
    pub fn empty() -> Self {
        Self {
            entries: hash_map_new(),
        }
    }

    /// Register `model`, replacing any previous entry.
    ///
    /// ## Returns
    /// The replaced tag, if any.
    pub fn insert(
        &mut self,
        model: impl Into<String>,
        tag: impl Into<SchemeTag>,
    ) -> Option<SchemeTag> {
        self.entries.insert(model.into(), tag.into())
    }

    /// Builder form of [`Self::insert`].
    pub fn with_model(
        mut self,
        model: impl Into<String>,
        tag: impl Into<SchemeTag>,
    ) -> Self {
        self.insert(model, tag);
        self
    }

    /// The number of registered models.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BackendRegistry for SchemeRegistry {
    type Payload = SchemeTag;

    fn family(&self) -> BackendFamily {
        BackendFamily::OpenAI
    }

    fn lookup(
        &self,
        model: &str,
    ) -> Option<&SchemeTag> {
        self.entries.get(model)
    }

    fn models(&self) -> Vec<String> {
        let mut models: Vec<String> = self.entries.keys().cloned().collect();
        models.sort();
        models
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let registry = SchemeRegistry::default();
        assert_eq!(registry.family(), BackendFamily::OpenAI);

        assert_eq!(
            registry.lookup("gpt-4").map(SchemeTag::as_str),
            Some("cl100k_base")
        );
        assert_eq!(
            registry.lookup("gpt-3.5-turbo").map(SchemeTag::as_str),
            Some("cl100k_base")
        );
        assert_eq!(
            registry.lookup("gpt-4o").map(SchemeTag::as_str),
            Some("o200k_base")
        );
        assert_eq!(
            registry.lookup("o1-mini").map(SchemeTag::as_str),
            Some("o200k_base")
        );
        assert!(registry.exists("o1-preview"));
        assert!(registry.exists("gpt-3.5"));

        assert!(!registry.exists("cl100k_base"));
        assert!(!registry.exists("Llama-3.2-1B"));
        assert_eq!(registry.len(), OPENAI_MODELS.len());
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = SchemeRegistry::empty();
        assert!(registry.is_empty());

        assert!(registry.insert("my-model", EncodingScheme::P50kBase).is_none());
        let replaced = registry.insert("my-model", SchemeTag::from_static("r50k_base"));
        assert_eq!(replaced, Some(SchemeTag::from_static("p50k_base")));

        let registry = registry.with_model("another", String::from("not_a_scheme"));
        assert_eq!(registry.models(), vec!["another", "my-model"]);
        assert_eq!(
            registry.lookup("another").map(SchemeTag::to_string),
            Some("not_a_scheme".to_string())
        );
    }
}
