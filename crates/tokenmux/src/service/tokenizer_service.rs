//! # Service and Builder

use core::fmt;
use std::sync::Arc;

use crate::{
    TMResult,
    TokenizerOptions,
    TokenmuxError,
    backends::{
        TokenSequence,
        TokenizerBackend,
        huggingface::HuggingfaceHandler,
        openai::OpenAIHandler,
    },
    registry::{BackendFamily, BackendRegistries, BackendRegistry},
    resources::{DefaultResourceLoader, ResourceLoader},
    types::TokenType,
};

/// A resolved tokenizer for one model.
///
/// Cheap to clone; clones share the backend.
/// `Send + Sync`, so one service may serve many threads.
///
/// ## Example
/// ```rust,no_run
/// use tokenmux::TokenizerService;
///
/// let service: TokenizerService = TokenizerService::new("gpt-4")?;
/// let tokens = service.encode("hello world")?;
/// assert_eq!(service.decode(&tokens.ids)?, "hello world");
/// # Ok::<(), tokenmux::TokenmuxError>(())
/// ```
pub struct TokenizerService<T: TokenType = u32> {
    model: String,
    backend: Arc<dyn TokenizerBackend<T>>,
}

impl<T: TokenType> Clone for TokenizerService<T> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            backend: self.backend.clone(),
        }
    }
}

impl<T: TokenType> fmt::Debug for TokenizerService<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("TokenizerService")
            .field("model", &self.model)
            .field("family", &self.family())
            .finish()
    }
}

impl TokenizerService {
    /// A builder for injecting registries, a loader, or options.
    ///
    /// The token type is chosen at [`TokenizerServiceBuilder::build`].
    pub fn builder() -> TokenizerServiceBuilder {
        TokenizerServiceBuilder::default()
    }

    /// Does the default `family` registry hold `model`?
    ///
    /// A pre-flight check; nothing is loaded or downloaded.
    /// See [`BackendRegistries::model_exists`] for custom registries.
    pub fn model_exists(
        family: BackendFamily,
        model: &str,
    ) -> bool {
        BackendRegistries::default().model_exists(family, model)
    }
}

impl<T: TokenType> TokenizerService<T> {
    /// Resolve `model` against the default registries.
    ///
    /// Vocabulary artifacts come from a default disk cache,
    /// opened only if the model needs one.
    ///
    /// ## Returns
    /// * `Ok(service)` - on success.
    /// * `Err(TokenmuxError::ModelNotFound)` - if no registry holds `model`.
    /// * `Err(e)` - the backend's construction error.
    pub fn new(model: &str) -> TMResult<Self> {
        TokenizerServiceBuilder::default().build(model)
    }

    /// Resolve `model` against `registries`.
    ///
    /// ## Arguments
    /// * `model` - the model identifier; matched exactly.
    /// * `registries` - the registries, consulted in priority order.
    /// * `loader` - source for `Resource` vocabulary payloads.
    /// * `options` - passed to the backend.
    ///
    /// ## Returns
    /// * `Ok(service)` - on success.
    /// * `Err(TokenmuxError::ModelNotFound)` - if no registry holds `model`.
    /// * `Err(e)` - the first matching backend's construction error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(registries, loader, options))
    )]
    pub fn resolve(
        model: &str,
        registries: &BackendRegistries,
        loader: &mut dyn ResourceLoader,
        options: TokenizerOptions,
    ) -> TMResult<Self> {
        for family in BackendFamily::PRIORITY {
            let backend = match family {
                BackendFamily::OpenAI => match registries.schemes.lookup(model) {
                    Some(tag) => {
                        log::debug!("resolving {model} to {family} scheme {tag}");
                        erase(OpenAIHandler::<T>::from_tag(tag, options)?)
                    }
                    None => continue,
                },
                BackendFamily::Huggingface => match registries.vocabs.lookup(model) {
                    Some(payload) => {
                        log::debug!("resolving {model} to {family} vocabulary");
                        erase(HuggingfaceHandler::<T>::from_payload(
                            model, payload, loader, options,
                        )?)
                    }
                    None => continue,
                },
            };

            return Ok(Self {
                model: model.to_string(),
                backend,
            });
        }

        log::debug!("no registry holds {model}");
        Err(TokenmuxError::ModelNotFound(model.to_string()))
    }

    /// Wrap an already-built backend.
    pub fn from_backend(
        model: &str,
        backend: Arc<dyn TokenizerBackend<T>>,
    ) -> Self {
        Self {
            model: model.to_string(),
            backend,
        }
    }

    /// The resolved model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The family serving this model.
    pub fn family(&self) -> BackendFamily {
        self.backend.family()
    }

    /// The options the backend was built with.
    pub fn options(&self) -> &TokenizerOptions {
        self.backend.options()
    }

    /// The backend.
    pub fn backend(&self) -> &Arc<dyn TokenizerBackend<T>> {
        &self.backend
    }

    /// Encode text into tokens; see [`TokenizerBackend::encode`].
    pub fn encode(
        &self,
        text: &str,
    ) -> TMResult<TokenSequence<T>> {
        self.backend.encode(text)
    }

    /// Decode tokens into text; see [`TokenizerBackend::decode`].
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> TMResult<String> {
        self.backend.decode(tokens)
    }

    /// Encode a batch of texts; all-or-nothing.
    pub fn encode_batch(
        &self,
        batch: &[&str],
    ) -> TMResult<Vec<TokenSequence<T>>> {
        self.backend.encode_batch(batch)
    }

    /// Decode a batch of token sequences; all-or-nothing.
    pub fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> TMResult<Vec<String>> {
        self.backend.decode_batch(batch)
    }
}

/// Box a backend, wrapping it for parallel batches when requested.
fn erase<T, B>(backend: B) -> Arc<dyn TokenizerBackend<T>>
where
    T: TokenType,
    B: TokenizerBackend<T> + 'static,
{
    #[cfg(feature = "rayon")]
    {
        if backend.options().parallel {
            return Arc::new(crate::rayon::ParallelRayonBackend::new(backend));
        }
    }
    Arc::new(backend)
}

/// Builder for [`TokenizerService`].
///
/// Unset fields fall back to [`BackendRegistries::default`],
/// [`DefaultResourceLoader`], and [`TokenizerOptions::default`].
#[derive(Default)]
pub struct TokenizerServiceBuilder {
    registries: Option<BackendRegistries>,
    loader: Option<Box<dyn ResourceLoader>>,
    options: TokenizerOptions,
}

impl TokenizerServiceBuilder {
    /// Set the registries.
    pub fn with_registries(
        mut self,
        registries: BackendRegistries,
    ) -> Self {
        self.registries = Some(registries);
        self
    }

    /// Set the resource loader.
    pub fn with_loader<L: ResourceLoader + 'static>(
        mut self,
        loader: L,
    ) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Set the backend options.
    pub fn with_options(
        mut self,
        options: TokenizerOptions,
    ) -> Self {
        self.options = options;
        self
    }

    /// Resolve `model`; see [`TokenizerService::resolve`].
    pub fn build<T: TokenType>(
        self,
        model: &str,
    ) -> TMResult<TokenizerService<T>> {
        let registries = self.registries.unwrap_or_default();
        let mut loader = self
            .loader
            .unwrap_or_else(|| Box::new(DefaultResourceLoader::default()));
        TokenizerService::resolve(model, &registries, loader.as_mut(), self.options)
    }
}
