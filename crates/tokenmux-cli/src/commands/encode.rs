use std::io::{BufRead, Write};

use tokenmux::{TokenSequence, TokenizerService};

use crate::{
    disk_cache::DiskCacheArgs,
    input_output::{InputArgs, OutputArgs, trim_line_ending},
    logging::LogArgs,
    model_selector::ModelSelectorArgs,
};

/// Output format for encoded lines.
#[derive(clap::Args, Debug)]
#[group(required = false, multiple = false)]
pub struct EncodeFormatArgs {
    /// Write `id:"text"` pairs instead of bare ids.
    #[arg(long)]
    texts: bool,

    /// Write one JSON object (`{"ids": [...], "texts": [...]}`) per line.
    #[arg(long)]
    json: bool,
}

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    model_selector: ModelSelectorArgs,

    #[command(flatten)]
    format: EncodeFormatArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    disk_cache: DiskCacheArgs,

    #[command(flatten)]
    logging: LogArgs,
}

#[derive(serde::Serialize)]
struct JsonLine<'a> {
    ids: &'a [u32],
    texts: Option<&'a [String]>,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let disk_cache = self.disk_cache.init_disk_cache()?;
        let service = self.model_selector.load_service(disk_cache)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        encode_lines(&service, &mut reader, &mut writer, |writer, tokens| {
            if self.format.json {
                write_json(writer, tokens)
            } else if self.format.texts {
                write_texts(writer, tokens)
            } else {
                write_ids(writer, tokens)
            }
        })
    }
}

fn encode_lines<F>(
    service: &TokenizerService,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    write_line: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Fn(&mut dyn Write, &TokenSequence<u32>) -> Result<(), Box<dyn std::error::Error>>,
{
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let tokens = service.encode(trim_line_ending(&line))?;
        write_line(&mut *writer, &tokens)?;
        writeln!(writer)?;
        writer.flush()?;
        line.clear();
    }
    Ok(())
}

fn write_ids(
    writer: &mut dyn Write,
    tokens: &TokenSequence<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for (idx, token) in tokens.ids.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
    }
    Ok(())
}

fn write_texts(
    writer: &mut dyn Write,
    tokens: &TokenSequence<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for (idx, (token, text)) in tokens.iter().enumerate() {
        let sep = if idx == 0 { "" } else { " " };
        match text {
            Some(text) => write!(writer, "{sep}{token}:{text:?}")?,
            None => write!(writer, "{sep}{token}")?,
        }
    }
    Ok(())
}

fn write_json(
    writer: &mut dyn Write,
    tokens: &TokenSequence<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let line = JsonLine {
        ids: &tokens.ids,
        texts: tokens.texts.as_deref(),
    };
    serde_json::to_writer(&mut *writer, &line)?;
    Ok(())
}
