use anyhow::Context;
use clap::Parser;
use itemset::config::{CliConfig, Mode};
use itemset::core::transcode;
use itemset::utils::logger;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting itemset transcode");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(count) => {
            let verb = match config.mode {
                Mode::Encode => "encoded",
                Mode::Decode => "decoded",
            };
            tracing::info!("{} {} item sets", verb, count);
        }
        Err(e) => {
            tracing::error!("Transcode failed: {:#}", e);
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(config: &CliConfig) -> anyhow::Result<usize> {
    let mut input = open_input(&config.input)?;
    let mut output = open_output(&config.output)?;

    let count = match config.mode {
        Mode::Encode => transcode::encode_transactions(&mut input, &mut output, config.sort)?,
        Mode::Decode => transcode::decode_transactions(&mut input, &mut output, config.json)?,
    };

    output.flush()?;
    Ok(count)
}

fn open_input(path: &Option<PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    })
}

fn open_output(path: &Option<PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    })
}
