//! `OpenAI` symbolic-scheme backend, through `tiktoken-rs`.

mod encoding_scheme;
mod openai_handler;

#[doc(inline)]
pub use encoding_scheme::*;
#[doc(inline)]
pub use openai_handler::*;
