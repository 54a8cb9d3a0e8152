use tokenmux::{TokenizerOptions, TokenizerService, disk_cache::TokenmuxDiskCache};

/// Model selector arg group.
#[derive(clap::Args, Debug)]
pub struct ModelSelectorArgs {
    /// Model to use; see `tokenmux models`.
    #[arg(long, short)]
    model: String,

    /// Recognize special-token text (e.g. `<|endoftext|>`) when encoding.
    #[arg(long)]
    add_special_tokens: bool,

    /// Render special tokens when decoding.
    #[arg(long)]
    keep_special_tokens: bool,

    /// Use a parallel backend for batch calls.
    #[arg(long)]
    parallel: bool,
}

impl ModelSelectorArgs {
    /// Get the model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The tokenizer options selected by the flags.
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions::default()
            .with_add_special_tokens(self.add_special_tokens)
            .with_skip_special_tokens(!self.keep_special_tokens)
            .with_parallel(self.parallel)
    }

    /// Resolve the tokenizer service.
    pub fn load_service(
        &self,
        disk_cache: TokenmuxDiskCache,
    ) -> Result<TokenizerService, Box<dyn std::error::Error>> {
        let service: TokenizerService = TokenizerService::builder()
            .with_loader(disk_cache)
            .with_options(self.options())
            .build(self.model())?;
        log::info!("loaded {} ({})", service.model(), service.family());
        Ok(service)
    }
}
