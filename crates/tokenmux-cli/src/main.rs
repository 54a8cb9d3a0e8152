mod commands;
mod disk_cache;
mod input_output;
mod logging;
mod model_selector;

use clap::Parser;
use commands::Commands;

/// tokenmux: one tokenizer CLI for `OpenAI` and Hugging Face models.
#[derive(clap::Parser, Debug)]
#[command(name = "tokenmux", version)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
