//! # Vocabulary-File Registry

use std::{path::PathBuf, sync::Arc};

use crate::{
    pretrained::huggingface::HUGGINGFACE_MODELS,
    registry::{BackendFamily, BackendRegistry},
    resources::ConstKeyedResource,
    types::{TMHashMap, hash_map_new},
};

/// The source of a `tokenizer.json` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabPayload {
    /// Data embedded at build time; typically `include_bytes!`.
    Embedded(&'static [u8]),

    /// Data already in memory.
    Bytes(Arc<[u8]>),

    /// A local file.
    File(PathBuf),

    /// A cached / downloadable artifact; see [`ResourceLoader`](crate::resources::ResourceLoader).
    Resource(ConstKeyedResource),
}

impl From<&'static [u8]> for VocabPayload {
    fn from(data: &'static [u8]) -> Self {
        Self::Embedded(data)
    }
}

impl From<Vec<u8>> for VocabPayload {
    fn from(data: Vec<u8>) -> Self {
        Self::Bytes(data.into())
    }
}

impl From<PathBuf> for VocabPayload {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<ConstKeyedResource> for VocabPayload {
    fn from(resource: ConstKeyedResource) -> Self {
        Self::Resource(resource)
    }
}

/// Model name to [`VocabPayload`] registry.
#[derive(Debug, Clone)]
pub struct VocabRegistry {
    entries: TMHashMap<String, VocabPayload>,
}

impl Default for VocabRegistry {
    /// The pretrained Hugging Face models; see [`HUGGINGFACE_MODELS`].
    fn default() -> Self {
        let mut registry = Self::empty();
        for model in HUGGINGFACE_MODELS {
            registry.insert(model.name, model.resource);
        }
        registry
    }
}

impl VocabRegistry {
    /// A registry with no models.
    pub fn empty() -> Self {
        Self {
            entries: hash_map_new(),
        }
    }

    /// Register `model`, replacing any previous entry.
    ///
    /// ## Returns
    /// The replaced payload, if any.
    pub fn insert(
        &mut self,
        model: impl Into<String>,
        payload: impl Into<VocabPayload>,
    ) -> Option<VocabPayload> {
        self.entries.insert(model.into(), payload.into())
    }

    /// Builder form of [`Self::insert`].
    pub fn with_model(
        mut self,
        model: impl Into<String>,
        payload: impl Into<VocabPayload>,
    ) -> Self {
        self.insert(model, payload);
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

impl BackendRegistry for VocabRegistry {
    type Payload = VocabPayload;

    fn family(&self) -> BackendFamily {
        BackendFamily::Huggingface
    }

    fn lookup(
        &self,
        model: &str,
    ) -> Option<&VocabPayload> {
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
        let registry = VocabRegistry::default();
        assert_eq!(registry.family(), BackendFamily::Huggingface);

        assert_eq!(
            registry.models(),
            vec![
                "Llama-3.1-8B",
                "Llama-3.2-1B",
                "Llama-3.2-3B",
                "Ministral-8B-Instruct-2410",
                "Mistral-Small-24B-Instruct-2501",
            ]
        );

        match registry.lookup("Llama-3.2-1B") {
            Some(VocabPayload::Resource(resource)) => {
                assert_eq!(resource.key, &["huggingface", "Llama-3.2-1B"]);
                assert!(resource.resource.urls[0].ends_with("/tokenizer.json"));
            }
            other => panic!("unexpected payload: {other:?}"),
        }

        assert!(!registry.exists("gpt-4"));
    }

    #[test]
    fn test_custom_registry() {
        let registry = VocabRegistry::empty()
            .with_model("embedded", &b"{}"[..])
            .with_model("owned", b"{}".to_vec())
            .with_model("file", PathBuf::from("/models/tokenizer.json"));

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.lookup("embedded"),
            Some(&VocabPayload::Embedded(b"{}"))
        );
        assert!(matches!(
            registry.lookup("owned"),
            Some(VocabPayload::Bytes(data)) if &data[..] == b"{}"
        ));
        assert_eq!(
            registry.lookup("file"),
            Some(&VocabPayload::File(PathBuf::from("/models/tokenizer.json")))
        );
    }
}
