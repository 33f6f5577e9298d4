use crate::config::{Config, Source};
use crate::io::browser::{Opener, SystemOpener, open_staggered};
use crate::io::clipboard;
use crate::output;
use crate::split::{Split, split_with};
use crate::ui;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};

/// Read the export URL from wherever the config points, trimmed.
pub fn read_source(source: &Source) -> Result<String> {
    let raw = match source {
        Source::Arg(url) => url.clone(),
        Source::File(path) => fs::read_to_string(path)
            .with_context(|| format!("reading URL from {}", path.display()))?,
        Source::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading URL from stdin")?;
            buf
        }
    };
    Ok(raw.trim().to_owned())
}

/// Print and/or copy the URL list, then report the totals on stderr.
pub fn deliver(
    split: &Split,
    config: &Config,
) -> Result<()> {
    if config.stdout {
        print!("{}", output::render(split, config.format));
    }
    if !config.no_clipboard {
        clipboard::copy_to_clipboard(&output::format_plain(split), false)?;
    }
    eprintln!("OK {}", output::format_summary(split));
    Ok(())
}

/// Open every chunk URL with the configured stagger.
pub fn open_all(
    split: &Split,
    opener: &dyn Opener,
    config: &Config,
) -> usize {
    let urls = split.urls();
    let opened = open_staggered(opener, &urls, config.open_delay, std::thread::sleep).len();
    if opened < urls.len() {
        warn!("opened {} of {} URLs", opened, urls.len());
    }
    opened
}

pub fn run(config: &Config) -> Result<()> {
    let opener = SystemOpener::from_env();

    if config.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        return ui::form::run_form(stdin.lock(), stdout.lock(), config, &opener);
    }

    let url = read_source(&config.source)?;
    let split = split_with(&url, config.chunk_size, config.rewrite).context("processing URL")?;
    info!(
        total = split.total,
        urls = split.len(),
        chunk_size = config.chunk_size,
        "split playerIDs"
    );

    if config.pick {
        return ui::pick_urls(&split, config, &opener);
    }

    deliver(&split, config)?;
    if config.open {
        open_all(&split, &opener, config);
    }
    Ok(())
}
