use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_OPEN_DELAY_MS, MAX_CHUNK_SIZE};
use crate::output::Format;
use crate::split::Rewrite;
use clap::{Parser, builder::TypedValueParser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "player-id-splitter", version)]
#[command(
    about = "Split an export URL's playerIDs list into chunk-sized URLs, so each batch can be \
             exported on its own."
)]
pub struct Cli {
    /// Export URL containing a playerIDs= parameter. Read from stdin when omitted or "-".
    #[arg(conflicts_with = "input")]
    pub url: Option<String>,

    /// Read the export URL from a file.
    #[arg(short = 'f', long = "input")]
    pub input: Option<PathBuf>,

    /// Maximum number of ids per URL.
    #[arg(
        short = 'c',
        long = "chunk-size",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = clap::value_parser!(u64).range(1..=MAX_CHUNK_SIZE as u64)
            .map(|n| n as usize)
    )]
    pub chunk_size: usize,

    /// How the playerIDs value is replaced in each URL.
    #[arg(long = "rewrite", value_enum, default_value_t = Rewrite::Structured)]
    pub rewrite: Rewrite,

    /// Layout of the printed URL list.
    #[arg(long = "format", value_enum, default_value_t = Format::Numbered)]
    pub format: Format,

    /// Open every URL in the browser.
    #[arg(short = 'O', long = "open")]
    pub open: bool,

    /// Milliseconds to wait between opening consecutive URLs.
    #[arg(long = "delay-ms", default_value_t = DEFAULT_OPEN_DELAY_MS)]
    pub delay_ms: u64,

    /// Do not copy to clipboard.
    #[arg(short = 'n', long = "no-clipboard")]
    pub no_clipboard: bool,

    /// Print the URL list to stdout.
    #[arg(short = 'o', long = "stdout")]
    pub stdout: bool,

    /// Prompt for URLs and chunk sizes until 'q'.
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with_all = ["url", "input", "pick"]
    )]
    pub interactive: bool,

    /// Browse the chunk URLs in a terminal picker.
    #[arg(short = 'p', long = "pick")]
    pub pick: bool,

    /// Debug logging (overridden by RUST_LOG).
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
