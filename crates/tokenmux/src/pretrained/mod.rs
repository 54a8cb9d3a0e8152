//! # Pretrained Model Tables
//!
//! The model identifiers known to the default registries.
//!
//! * [`openai::OPENAI_MODELS`] - model names mapped to `tiktoken` schemes.
//! * [`huggingface::HUGGINGFACE_MODELS`] - model names mapped to `tokenizer.json` artifacts.
//!
//! ```rust,no_run
//! use tokenmux::{BackendFamily, TokenizerService, pretrained};
//!
//! fn example() -> tokenmux::TMResult<()> {
//!     assert!(pretrained::openai::model_exists("gpt-4o"));
//!     assert!(pretrained::huggingface::model_exists("Llama-3.2-1B"));
//!
//!     let service: TokenizerService = TokenizerService::new("gpt-4o")?;
//!     assert_eq!(service.family(), BackendFamily::OpenAI);
//!     Ok(())
//! }
//! ```

pub mod huggingface;
pub mod openai;
