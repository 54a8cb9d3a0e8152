use std::io::{BufRead, Write};

use tokenmux::TokenizerService;

use crate::{
    disk_cache::DiskCacheArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    model_selector::ModelSelectorArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    model_selector: ModelSelectorArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    disk_cache: DiskCacheArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let disk_cache = self.disk_cache.init_disk_cache()?;
        let service = self.model_selector.load_service(disk_cache)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        decode_lines(&service, &mut reader, &mut writer)
    }
}

fn decode_lines(
    service: &TokenizerService,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for (lineno, line) in reader.lines().enumerate() {
        let tokens = line?
            .split_whitespace()
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|e| format!("line {}: bad token id {s:?}: {e}", lineno + 1))
            })
            .collect::<Result<Vec<u32>, _>>()?;

        let text = service.decode(&tokens)?;

        writeln!(writer, "{text}")?;
        writer.flush()?;
    }
    Ok(())
}
