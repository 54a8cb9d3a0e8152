//! Hugging Face vocabulary-file backend, through `tokenizers`.

use core::marker::PhantomData;
use std::{fs, path::Path, sync::Arc};

use tokenizers::Tokenizer;

use crate::{
    TMResult,
    TokenizerOptions,
    TokenmuxError,
    backends::{TokenSequence, TokenizerBackend},
    registry::{BackendFamily, VocabPayload},
    resources::ResourceLoader,
    types::{TokenType, tokens_from_ranks, tokens_to_ranks},
};

/// [`TokenizerBackend`] over a `tokenizers` [`Tokenizer`].
///
/// ## Decode policy
/// Ids absent from the vocabulary are dropped by the engine, not reported;
/// special tokens are dropped when [`TokenizerOptions::skip_special_tokens`] is set.
/// Round-trips are exact for byte-level vocabularies (Llama 3, Mistral Tekken);
/// definitions with a normalizer decode to the normalized form.
///
/// ## Token texts
/// The engine's token strings, in vocabulary form (e.g. `"Ġworld"`).
///
/// ## Concurrency
/// [`Tokenizer`] is `Send + Sync`, and encodes through `&self`;
/// clones share the engine.
pub struct HuggingfaceHandler<T: TokenType = u32> {
    tokenizer: Option<Arc<Tokenizer>>,
    options: TokenizerOptions,
    _marker: PhantomData<fn() -> T>,
}

impl<T: TokenType> Clone for HuggingfaceHandler<T> {
    fn clone(&self) -> Self {
        Self {
            tokenizer: self.tokenizer.clone(),
            options: self.options,
            _marker: PhantomData,
        }
    }
}

impl<T: TokenType> Default for HuggingfaceHandler<T> {
    /// A handler with no engine; every call fails with
    /// [`TokenmuxError::UninitializedBackend`].
    fn default() -> Self {
        Self {
            tokenizer: None,
            options: TokenizerOptions::default(),
            _marker: PhantomData,
        }
    }
}

impl<T: TokenType> HuggingfaceHandler<T> {
    /// Wrap an existing engine.
    pub fn new(
        tokenizer: Arc<Tokenizer>,
        options: TokenizerOptions,
    ) -> Self {
        Self {
            tokenizer: Some(tokenizer),
            options,
            _marker: PhantomData,
        }
    }

    /// Parse a `tokenizer.json` definition.
    ///
    /// ## Arguments
    /// * `model` - the model name, for error reporting.
    /// * `data` - the definition.
    ///
    /// ## Returns
    /// * `Ok(handler)` - on success.
    /// * `Err(TokenmuxError::InvalidModelData)` - if the data is empty or unparseable.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(data)))]
    pub fn from_bytes(
        model: &str,
        data: &[u8],
        options: TokenizerOptions,
    ) -> TMResult<Self> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Err(TokenmuxError::invalid_model_data(model, "empty payload"));
        }

        let tokenizer =
            Tokenizer::from_bytes(data).map_err(|e| TokenmuxError::invalid_model_data(model, e))?;

        log::debug!(
            "parsed tokenizer for {model}: {} tokens",
            tokenizer.get_vocab_size(true)
        );
        Ok(Self::new(Arc::new(tokenizer), options))
    }

    /// Read and parse a `tokenizer.json` file.
    ///
    /// ## Returns
    /// * `Ok(handler)` - on success.
    /// * `Err(TokenmuxError::Io)` - if the file cannot be read.
    /// * `Err(TokenmuxError::InvalidModelData)` - if the data is empty or unparseable.
    pub fn from_file(
        model: &str,
        path: impl AsRef<Path>,
        options: TokenizerOptions,
    ) -> TMResult<Self> {
        let path = path.as_ref();
        log::debug!("reading tokenizer for {model} from {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes(model, &data, options)
    }

    /// Materialize and parse a registry payload.
    ///
    /// Load failures are always propagated.
    ///
    /// ## Returns
    /// * `Ok(handler)` - on success.
    /// * `Err(TokenmuxError::ResourceLoad)` - if a `Resource` payload cannot be loaded.
    /// * `Err(TokenmuxError::Io)` - if a `File` payload cannot be read.
    /// * `Err(TokenmuxError::InvalidModelData)` - if the data is empty or unparseable.
    pub fn from_payload(
        model: &str,
        payload: &VocabPayload,
        loader: &mut dyn ResourceLoader,
        options: TokenizerOptions,
    ) -> TMResult<Self> {
        match payload {
            VocabPayload::Embedded(data) => Self::from_bytes(model, data, options),
            VocabPayload::Bytes(data) => Self::from_bytes(model, data, options),
            VocabPayload::File(path) => Self::from_file(model, path, options),
            VocabPayload::Resource(resource) => {
                let path = loader.load_resource_path(resource)?;
                Self::from_file(model, path, options)
            }
        }
    }

    /// The engine, if initialized.
    pub fn tokenizer(&self) -> Option<&Arc<Tokenizer>> {
        self.tokenizer.as_ref()
    }

    fn engine(&self) -> TMResult<&Tokenizer> {
        self.tokenizer
            .as_deref()
            .ok_or(TokenmuxError::UninitializedBackend)
    }
}

impl<T: TokenType> TokenizerBackend<T> for HuggingfaceHandler<T> {
    fn family(&self) -> BackendFamily {
        BackendFamily::Huggingface
    }

    fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn encode(
        &self,
        text: &str,
    ) -> TMResult<TokenSequence<T>> {
        let tokenizer = self.engine()?;

        let encoding = tokenizer
            .encode(text, self.options.add_special_tokens)
            .map_err(|e| TokenmuxError::Encode(e.to_string()))?;

        let ids = tokens_from_ranks(encoding.get_ids())?;
        let texts = encoding.get_tokens().to_vec();

        Ok(TokenSequence::new(ids, Some(texts)))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn decode(
        &self,
        tokens: &[T],
    ) -> TMResult<String> {
        let tokenizer = self.engine()?;
        let ranks = tokens_to_ranks(tokens)?;
        tokenizer
            .decode(&ranks, self.options.skip_special_tokens)
            .map_err(|e| TokenmuxError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempdir::TempDir;

    use super::*;
    use crate::{
        backends::testing::{TINY_BYTE_BPE, check_is_send, check_is_sync},
        resources::ConstKeyedResource,
    };

    /// Serves every resource from one file.
    struct FixedLoader(TMResult<PathBuf>);

    impl ResourceLoader for FixedLoader {
        fn load_resource_path(
            &mut self,
            resource: &ConstKeyedResource,
        ) -> TMResult<PathBuf> {
            match &self.0 {
                Ok(path) => Ok(path.clone()),
                Err(_) => Err(TokenmuxError::ResourceLoad {
                    key: resource.key_string(),
                    reason: "offline".to_string(),
                }),
            }
        }
    }

    fn tiny() -> HuggingfaceHandler<u32> {
        HuggingfaceHandler::from_bytes("tiny", TINY_BYTE_BPE, TokenizerOptions::default()).unwrap()
    }

    #[test]
    fn test_uninitialized() {
        let handler: HuggingfaceHandler = HuggingfaceHandler::default();
        assert!(handler.tokenizer().is_none());
        assert!(matches!(
            handler.encode("hello"),
            Err(TokenmuxError::UninitializedBackend)
        ));
        assert!(matches!(
            handler.decode(&[1]),
            Err(TokenmuxError::UninitializedBackend)
        ));
    }

    #[test]
    fn test_invalid_data() {
        for data in [&b""[..], b"  \n", b"not json", b"{\"model\": 7}"] {
            let res = HuggingfaceHandler::<u32>::from_bytes("bad", data, Default::default());
            assert!(
                matches!(res, Err(TokenmuxError::InvalidModelData { ref model, .. }) if model == "bad"),
                "{data:?}"
            );
        }
    }

    #[test]
    fn test_encode_decode() {
        let handler = tiny();
        check_is_send(&handler);
        check_is_sync(&handler);
        assert_eq!(handler.family(), BackendFamily::Huggingface);

        let seq = handler.encode("hello world").unwrap();
        assert_eq!(seq.ids, vec![259, 264]);
        assert_eq!(
            seq.texts,
            Some(vec!["hello".to_string(), "\u{120}world".to_string()])
        );
        assert_eq!(handler.decode(&seq.ids).unwrap(), "hello world");

        let empty = handler.encode("").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.texts, Some(vec![]));
    }

    #[test]
    fn test_unmerged_text_round_trips() {
        let handler = tiny();
        for text in ["quick brown fox", "caf\u{e9}", "  spaced  out  ", "\u{1f600}!"] {
            let seq = handler.encode(text).unwrap();
            assert_eq!(handler.decode(&seq.ids).unwrap(), text);
        }
    }

    #[test]
    fn test_decode_policy() {
        let handler = tiny();

        // Out-of-vocabulary ids are dropped.
        assert_eq!(handler.decode(&[259, 9_999, 264]).unwrap(), "hello world");

        // Special tokens are skipped by default.
        assert_eq!(handler.decode(&[265, 259]).unwrap(), "hello");

        let keep: HuggingfaceHandler<u32> = HuggingfaceHandler::from_bytes(
            "tiny",
            TINY_BYTE_BPE,
            TokenizerOptions::default().with_skip_special_tokens(false),
        )
        .unwrap();
        assert_eq!(
            keep.decode(&[265, 259]).unwrap(),
            "<|begin_of_text|>hello"
        );
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new("tokenmux_hf").unwrap();
        let path = dir.path().join("tokenizer.json");
        fs::write(&path, TINY_BYTE_BPE).unwrap();

        let handler: HuggingfaceHandler<u64> =
            HuggingfaceHandler::from_file("tiny", &path, Default::default()).unwrap();
        assert_eq!(handler.encode("hello").unwrap().ids, vec![259u64]);

        let missing = HuggingfaceHandler::<u32>::from_file(
            "tiny",
            dir.path().join("missing.json"),
            Default::default(),
        );
        assert!(matches!(missing, Err(TokenmuxError::Io(_))));
    }

    #[test]
    fn test_from_payload() {
        let dir = TempDir::new("tokenmux_payload").unwrap();
        let path = dir.path().join("tokenizer.json");
        fs::write(&path, TINY_BYTE_BPE).unwrap();

        let resource = VocabPayload::Resource(crate::pretrained::huggingface::LLAMA_3_2_1B.resource);
        let options = TokenizerOptions::default();

        let mut loader = FixedLoader(Ok(path.clone()));
        for payload in [
            VocabPayload::Embedded(TINY_BYTE_BPE),
            VocabPayload::Bytes(TINY_BYTE_BPE.into()),
            VocabPayload::File(path.clone()),
            resource.clone(),
        ] {
            let handler: HuggingfaceHandler<u32> =
                HuggingfaceHandler::from_payload("tiny", &payload, &mut loader, options).unwrap();
            assert_eq!(handler.encode("hello").unwrap().ids, vec![259]);
        }

        let mut offline = FixedLoader(Err(TokenmuxError::UninitializedBackend));
        match HuggingfaceHandler::<u32>::from_payload("Llama-3.2-1B", &resource, &mut offline, options)
        {
            Err(TokenmuxError::ResourceLoad { key, .. }) => {
                assert_eq!(key, "huggingface/Llama-3.2-1B")
            }
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("load failure was swallowed"),
        }
    }
}
