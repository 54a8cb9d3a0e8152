mod decode;
mod encode;
mod models;

/// Subcommands for tokenmux.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text, one line at a time, into token ids.
    Encode(encode::EncodeArgs),

    /// Decode lines of whitespace-separated token ids into text.
    Decode(decode::DecodeArgs),

    /// List the registered models.
    #[clap(visible_alias = "ls")]
    Models(models::ModelsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Models(cmd) => cmd.run(),
        }
    }
}
