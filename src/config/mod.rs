use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Text transaction lines to wire format
    Encode,
    /// Wire format back to text or JSON lines
    Decode,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "itemset")]
#[command(about = "Transcode transaction files to and from the item set wire format")]
pub struct CliConfig {
    #[arg(value_enum)]
    pub mode: Mode,

    #[arg(long, help = "Input file; stdin when omitted")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Output file; stdout when omitted")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Sort each item set before encoding")]
    pub sort: bool,

    #[arg(long, help = "Emit one JSON array per item set when decoding")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
