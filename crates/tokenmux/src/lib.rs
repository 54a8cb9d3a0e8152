//! # `tokenmux` Tokenizer Façade
//!
//! One encode/decode contract over two tokenizer families:
//! * `OpenAI` symbolic schemes (`cl100k_base`, `o200k_base`, ...), through `tiktoken-rs`;
//! * Hugging Face `tokenizer.json` definitions, through `tokenizers`.
//!
//! A [`TokenizerService`] is resolved from a model identifier; callers never
//! choose a family. The symbolic-scheme registry is consulted first,
//! then the vocabulary-file registry; an identifier in neither is
//! [`TokenmuxError::ModelNotFound`].
//!
//! See:
//! * [`service`] to resolve and use tokenizers.
//! * [`registry`] to inspect or replace the model registries.
//! * [`backends`] for the per-family adapters.
//! * [`pretrained`] for the default model tables.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``download``
//! * ``rayon``
//!
//! #### feature: ``download``
//!
//! * ``tokenmux-disk-cache``
//!
//! The download feature enables fetching `tokenizer.json` artifacts
//! for the Hugging Face models, and caching them on disk.
//! Without it, only embedded or file payloads can be loaded.
//!
//! #### feature: ``ahash`` / ``foldhash``
//!
//! This swaps the registry HashMap implementation;
//! see [`types::TMHashMap`].
//!
//! #### feature: ``rayon``
//!
//! This enables [`TokenizerOptions::parallel`] batch calls,
//! through the [`rayon`] wrappers.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tokenmux::{BackendFamily, TokenizerService};
//!
//! let service: TokenizerService = TokenizerService::new("gpt-4o")?;
//! assert_eq!(service.family(), BackendFamily::OpenAI);
//!
//! let tokens = service.encode("hello world")?;
//! for (id, text) in tokens.iter() {
//!     println!("{id}: {text:?}");
//! }
//! assert_eq!(service.decode(&tokens.ids)?, "hello world");
//! # Ok::<(), tokenmux::TokenmuxError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(feature = "download")]
#[doc(inline)]
pub use tokenmux_disk_cache as disk_cache;

pub mod backends;
pub mod errors;
pub mod pretrained;
pub mod registry;
pub mod resources;
pub mod service;
pub mod types;

#[doc(inline)]
pub use backends::{TokenSequence, TokenizerBackend};
#[doc(inline)]
pub use errors::{TMResult, TokenmuxError};
#[doc(inline)]
pub use registry::{
    BackendFamily,
    BackendRegistries,
    BackendRegistry,
    SchemeRegistry,
    SchemeTag,
    VocabPayload,
    VocabRegistry,
};
#[doc(inline)]
pub use service::{TokenizerOptions, TokenizerService, TokenizerServiceBuilder};
#[doc(inline)]
pub use types::TokenType;
