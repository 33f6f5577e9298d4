use crate::cli::Cli;
use crate::output::Format;
use crate::split::Rewrite;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Where the export URL comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Arg(String),
    File(PathBuf),
    Stdin,
}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub chunk_size: usize,
    pub rewrite: Rewrite,
    pub format: Format,
    pub open: bool,
    pub open_delay: Duration,
    pub no_clipboard: bool,
    /// Print to stdout; forced on when the clipboard is disabled.
    pub stdout: bool,
    pub interactive: bool,
    pub pick: bool,
    pub verbose: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Self {
        Cli::parse().into()
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match (cli.url, cli.input) {
            (_, Some(path)) => Source::File(path),
            (Some(url), None) if url != "-" => Source::Arg(url),
            _ => Source::Stdin,
        };
        Config {
            source,
            chunk_size: cli.chunk_size,
            rewrite: cli.rewrite,
            format: cli.format,
            open: cli.open,
            open_delay: Duration::from_millis(cli.delay_ms),
            no_clipboard: cli.no_clipboard,
            stdout: cli.stdout || cli.no_clipboard,
            interactive: cli.interactive,
            pick: cli.pick,
            verbose: cli.verbose,
        }
    }
}
