//! Hugging Face model names and their `tokenizer.json` artifacts.
//!
//! Artifacts are resolved through a [`ResourceLoader`](crate::resources::ResourceLoader);
//! with the disk cache, a file placed at
//! `$TOKENMUX_DATA_DIR/huggingface/<model>/tokenizer.json` is used as-is,
//! and anything else is fetched once into the cache directory.
//!
//! The `meta-llama` and `mistralai` repositories are gated, and downloads
//! send no credentials; each artifact lists an ungated mirror first,
//! and the upstream repository last.

use crate::resources::{ConstKeyedResource, ConstUrlResource};

/// A model served by a `tokenizer.json` artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstVocabModel {
    /// The model identifier.
    pub name: &'static str,

    /// The upstream repository.
    pub repo: &'static str,

    /// The artifact.
    pub resource: ConstKeyedResource,
}

/// Shared download context key.
const HF_KEY: &str = "huggingface";

/// `meta-llama/Llama-3.1-8B`.
pub const LLAMA_3_1_8B: ConstVocabModel = ConstVocabModel {
    name: "Llama-3.1-8B",
    repo: "meta-llama/Llama-3.1-8B",
    resource: ConstKeyedResource {
        key: &[HF_KEY, "Llama-3.1-8B"],
        resource: ConstUrlResource::new(&[
            "https://huggingface.co/unsloth/Meta-Llama-3.1-8B/resolve/main/tokenizer.json",
            "https://huggingface.co/meta-llama/Llama-3.1-8B/resolve/main/tokenizer.json",
        ]),
    },
};

/// `meta-llama/Llama-3.2-1B`.
pub const LLAMA_3_2_1B: ConstVocabModel = ConstVocabModel {
    name: "Llama-3.2-1B",
    repo: "meta-llama/Llama-3.2-1B",
    resource: ConstKeyedResource {
        key: &[HF_KEY, "Llama-3.2-1B"],
        resource: ConstUrlResource::new(&[
            "https://huggingface.co/unsloth/Llama-3.2-1B/resolve/main/tokenizer.json",
            "https://huggingface.co/meta-llama/Llama-3.2-1B/resolve/main/tokenizer.json",
        ]),
    },
};

/// `meta-llama/Llama-3.2-3B`.
pub const LLAMA_3_2_3B: ConstVocabModel = ConstVocabModel {
    name: "Llama-3.2-3B",
    repo: "meta-llama/Llama-3.2-3B",
    resource: ConstKeyedResource {
        key: &[HF_KEY, "Llama-3.2-3B"],
        resource: ConstUrlResource::new(&[
            "https://huggingface.co/unsloth/Llama-3.2-3B/resolve/main/tokenizer.json",
            "https://huggingface.co/meta-llama/Llama-3.2-3B/resolve/main/tokenizer.json",
        ]),
    },
};

/// `mistralai/Ministral-8B-Instruct-2410`.
pub const MINISTRAL_8B: ConstVocabModel = ConstVocabModel {
    name: "Ministral-8B-Instruct-2410",
    repo: "mistralai/Ministral-8B-Instruct-2410",
    resource: ConstKeyedResource {
        key: &[HF_KEY, "Ministral-8B-Instruct-2410"],
        resource: ConstUrlResource::new(&[
            "https://huggingface.co/unsloth/Ministral-8B-Instruct-2410/resolve/main/tokenizer.json",
            "https://huggingface.co/mistralai/Ministral-8B-Instruct-2410/resolve/main/tokenizer.json",
        ]),
    },
};

/// `mistralai/Mistral-Small-24B-Instruct-2501`.
pub const MISTRAL_SMALL_24B: ConstVocabModel = ConstVocabModel {
    name: "Mistral-Small-24B-Instruct-2501",
    repo: "mistralai/Mistral-Small-24B-Instruct-2501",
    resource: ConstKeyedResource {
        key: &[HF_KEY, "Mistral-Small-24B-Instruct-2501"],
        resource: ConstUrlResource::new(&[
            "https://huggingface.co/unsloth/Mistral-Small-24B-Instruct-2501/resolve/main/tokenizer.json",
            "https://huggingface.co/mistralai/Mistral-Small-24B-Instruct-2501/resolve/main/tokenizer.json",
        ]),
    },
};

/// The Hugging Face models known to the default [`VocabRegistry`](crate::VocabRegistry).
pub const HUGGINGFACE_MODELS: &[ConstVocabModel] = &[
    LLAMA_3_1_8B,
    LLAMA_3_2_1B,
    LLAMA_3_2_3B,
    MINISTRAL_8B,
    MISTRAL_SMALL_24B,
];

/// Find a pretrained Hugging Face model.
pub fn find_model(name: &str) -> Option<&'static ConstVocabModel> {
    HUGGINGFACE_MODELS.iter().find(|m| m.name == name)
}

/// Is `name` a pretrained Hugging Face model?
pub fn model_exists(name: &str) -> bool {
    find_model(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_exists() {
        assert!(model_exists("Llama-3.2-1B"));
        assert!(model_exists("Mistral-Small-24B-Instruct-2501"));
        assert!(!model_exists("gpt-4"));
        assert!(!model_exists("Llama-3.2-1b"));
    }

    #[test]
    fn test_resources_are_consistent() {
        for model in HUGGINGFACE_MODELS {
            assert_eq!(model.resource.key, &[HF_KEY, model.name]);
            assert_eq!(model.repo.rsplit('/').next(), Some(model.name));
            let urls = model.resource.resource.urls;
            assert!(urls.len() >= 2, "{}", model.name);
            assert!(urls[urls.len() - 1].contains(model.repo));
            for url in urls {
                assert!(url.contains(model.name), "{url}");
                assert!(url.ends_with("/resolve/main/tokenizer.json"), "{url}");
            }
        }
    }
}
