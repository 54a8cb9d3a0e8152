//! # Tokenizer Service
//!
//! [`TokenizerService`] resolves a model identifier to one backend,
//! then forwards encode/decode calls to it.
//!
//! Resolution consults the registries in [`BackendFamily::PRIORITY`](crate::BackendFamily::PRIORITY)
//! order: the symbolic-scheme family first, then the vocabulary-file family.
//! The first registry holding the model builds the backend; its
//! construction errors are returned as-is, and the next family is
//! not tried.

mod tokenizer_options;
mod tokenizer_service;

#[doc(inline)]
pub use tokenizer_options::*;
#[doc(inline)]
pub use tokenizer_service::*;
