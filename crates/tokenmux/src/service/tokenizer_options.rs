/// Options for configuring a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Encode special-token text (and template tokens) as special tokens.
    ///
    /// * `OpenAI`: `true` recognizes `<|endoftext|>`-style text; `false` encodes it as plain text.
    /// * Hugging Face: passed as the engine's `add_special_tokens`.
    pub add_special_tokens: bool,

    /// Drop special tokens when decoding.
    ///
    /// Only the Hugging Face backend supports this; `OpenAI` decoding
    /// always renders special tokens.
    pub skip_special_tokens: bool,

    /// Use ``rayon`` for batch calls (requires the "rayon" feature).
    pub parallel: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            add_special_tokens: false,
            skip_special_tokens: true,
            parallel: false,
        }
    }
}

impl TokenizerOptions {
    /// Sets the configured `add_special_tokens` value.
    pub fn with_add_special_tokens(
        mut self,
        add_special_tokens: bool,
    ) -> Self {
        self.add_special_tokens = add_special_tokens;
        self
    }

    /// Sets the configured `skip_special_tokens` value.
    pub fn with_skip_special_tokens(
        mut self,
        skip_special_tokens: bool,
    ) -> Self {
        self.skip_special_tokens = skip_special_tokens;
        self
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded batch implementations;
    /// without the "rayon" feature, it has no effect.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.parallel = parallel;
        self
    }
}
