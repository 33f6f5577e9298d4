use crate::config::Config;
use crate::constants::MAX_CHUNK_SIZE;
use crate::io::browser::Opener;
use crate::io::clipboard;
use crate::output;
use crate::pipeline::open_all;
use crate::split::{extract_ids, split_with};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Form mode: prompt for an export URL and a chunk size, show the chunk URLs,
/// repeat until 'q' or end of input.
pub fn run_form<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    config: &Config,
    opener: &dyn Opener,
) -> Result<()> {
    loop {
        write!(out, "Export URL (or 'q' to quit): ")?;
        out.flush()?;
        let Some(url) = read_trimmed(&mut input)? else {
            break;
        };
        if url.eq_ignore_ascii_case("q") {
            break;
        }
        if url.is_empty() {
            continue;
        }
        // Missing marker is rejected before asking for a chunk size; other
        // problems surface as processing errors after it
        if let Err(e) = extract_ids(&url)
            && e.is_missing_parameter()
        {
            writeln!(out, "{e}")?;
            continue;
        }

        let Some(chunk_size) = prompt_chunk_size(&mut input, &mut out, config.chunk_size)? else {
            break;
        };

        let split = match split_with(&url, chunk_size, config.rewrite) {
            Ok(split) => split,
            Err(e) => {
                writeln!(out, "Error processing URL: {e}")?;
                continue;
            }
        };
        writeln!(out, "{}", output::format_summary(&split))?;
        write!(out, "{}", output::format_numbered(&split))?;
        out.flush()?;

        if !config.no_clipboard {
            clipboard::copy_to_clipboard(&output::format_plain(&split), false)?;
        }
        if config.open {
            open_all(&split, opener, config);
        }
    }
    Ok(())
}

// Re-prompts until the answer is blank (keep default) or within 1..=MAX_CHUNK_SIZE.
fn prompt_chunk_size<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default: usize,
) -> Result<Option<usize>> {
    loop {
        write!(out, "Ids per URL [{default}]: ")?;
        out.flush()?;
        let Some(answer) = read_trimmed(input)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(default));
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=MAX_CHUNK_SIZE).contains(&n) => return Ok(Some(n)),
            _ => writeln!(out, "Chunk size must be between 1 and {MAX_CHUNK_SIZE}")?,
        }
    }
}

fn read_trimmed<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::cell::RefCell;

    struct Recorder(RefCell<Vec<String>>);

    impl Opener for Recorder {
        fn open(
            &self,
            url: &str,
        ) -> Result<()> {
            self.0.borrow_mut().push(url.to_owned());
            Ok(())
        }
    }

    fn run(
        args: &[&str],
        stdin: &str,
    ) -> (String, Vec<String>) {
        let mut argv = vec!["player-id-splitter", "-i", "-n"];
        argv.extend_from_slice(args);
        let config: Config = Cli::try_parse_from(argv).unwrap().into();
        let rec = Recorder(RefCell::new(Vec::new()));
        let mut out = Vec::new();
        run_form(stdin.as_bytes(), &mut out, &config, &rec).unwrap();
        (String::from_utf8(out).unwrap(), rec.0.into_inner())
    }

    #[test]
    fn splits_with_entered_chunk_size() {
        let (out, opened) = run(&[], "https://ex.com/d?playerIDs=a%2Cb%2Cc&x=1\n2\nq\n");
        assert!(out.contains("Found 3 ids and created 2 export URLs (up to 2 each)"));
        assert!(out.contains("CSV 2 (1 ids): https://ex.com/d?playerIDs=c&x=1"));
        assert!(opened.is_empty());
    }

    #[test]
    fn blank_chunk_size_keeps_default() {
        let (out, _) = run(&["-c", "7"], "https://ex.com/d?playerIDs=a%2Cb\n\n");
        assert!(out.contains("Ids per URL [7]: "));
        assert!(out.contains("(up to 7 each)"));
    }

    #[test]
    fn rejects_url_without_marker_and_prompts_again() {
        let (out, _) = run(&[], "https://x.com/a?foo=bar\nq\n");
        assert!(out.contains("URL must contain 'playerIDs=' parameter"));
        assert_eq!(out.matches("Export URL").count(), 2);
        assert!(!out.contains("Ids per URL"));
    }

    #[test]
    fn invalid_chunk_size_is_asked_again() {
        let (out, _) = run(&[], "https://ex.com/d?playerIDs=a\n0\nabc\n1\nq\n");
        assert_eq!(out.matches("Chunk size must be between 1 and 2000").count(), 2);
        assert!(out.contains("created 1 export URLs"));
    }

    #[test]
    fn processing_errors_are_reported() {
        let (out, _) = run(&[], "https://ex.com/d?playerIDs=&x=1\n\nq\n");
        // only a missing parameter is turned away before the chunk size prompt
        assert!(out.contains("Ids per URL [500]: "));
        assert!(out.contains("Error processing URL: the playerIDs parameter is empty"));
    }

    #[test]
    fn open_flag_opens_each_url() {
        let (_, opened) = run(
            &["-O", "--delay-ms", "0"],
            "https://ex.com/d?playerIDs=a%2Cb%2Cc\n1\n",
        );
        assert_eq!(
            opened,
            vec![
                "https://ex.com/d?playerIDs=a",
                "https://ex.com/d?playerIDs=b",
                "https://ex.com/d?playerIDs=c",
            ]
        );
    }
}
