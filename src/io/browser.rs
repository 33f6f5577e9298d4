use crate::constants::OPENER_ENV;
use anyhow::{Context, Result, bail};
use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::{debug, warn};

/// Something that can show a URL to the user.
pub trait Opener {
    fn open(
        &self,
        url: &str,
    ) -> Result<()>;
}

/// Launches the platform's URL handler as a child process.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    /// Platform default, unless `PLAYER_ID_SPLITTER_OPENER` names another command.
    pub fn from_env() -> Self {
        match std::env::var(OPENER_ENV) {
            Ok(cmd) if !cmd.trim().is_empty() => Self::from_command_line(&cmd),
            _ => Self::platform_default(),
        }
    }

    /// Program and leading arguments separated by whitespace; the URL is appended.
    /// Single or double quotes group a word, so `"/Applications/My Browser" --new`
    /// names a program whose path contains spaces.
    pub fn from_command_line(cmd: &str) -> Self {
        let mut parts = split_words(cmd).into_iter();
        let program = parts.next().unwrap_or_default();
        SystemOpener {
            program,
            args: parts.collect(),
        }
    }

    fn platform_default() -> Self {
        #[cfg(target_os = "macos")]
        let (program, args) = ("open", vec![]);
        // `start` would treat `&` in the query as a command separator
        #[cfg(target_os = "windows")]
        let (program, args) = ("rundll32", vec!["url.dll,FileProtocolHandler".to_owned()]);
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let (program, args) = ("xdg-open", vec![]);
        SystemOpener {
            program: program.to_owned(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Opener for SystemOpener {
    fn open(
        &self,
        url: &str,
    ) -> Result<()> {
        debug!(program = %self.program, url, "opening");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("failed to launch {}", self.program))?;
        if !status.success() {
            bail!("{} exited with {}", self.program, status);
        }
        Ok(())
    }
}

// Whitespace splitting with quote grouping; no escapes, an unclosed quote runs to the end.
fn split_words(cmd: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    for c in cmd.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => word.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            None => {
                word.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(word);
    }
    words
}

/// Open `urls` in order, waiting `delay` between consecutive openings so the
/// browser does not treat the burst as pop-up spam.
///
/// Failures are logged and skipped. Returns the indices of the URLs that opened.
pub fn open_staggered<O, S>(
    opener: &O,
    urls: &[&str],
    delay: Duration,
    mut sleep: S,
) -> Vec<usize>
where
    O: Opener + ?Sized,
    S: FnMut(Duration),
{
    let mut opened = Vec::with_capacity(urls.len());
    for (i, url) in urls.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            sleep(delay);
        }
        match opener.open(url) {
            Ok(()) => opened.push(i),
            Err(e) => warn!("could not open URL {}: {:#}", i + 1, e),
        }
    }
    opened
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl Opener for Recorder {
        fn open(
            &self,
            url: &str,
        ) -> Result<()> {
            if self.fail_on == Some(url) {
                bail!("refused");
            }
            self.seen.borrow_mut().push(url.to_owned());
            Ok(())
        }
    }

    #[test]
    fn opens_in_order_with_delay_between() {
        let rec = Recorder::default();
        let mut sleeps = Vec::new();
        let opened = open_staggered(&rec, &["a", "b", "c"], Duration::from_millis(800), |d| {
            sleeps.push(d)
        });
        assert_eq!(opened, vec![0, 1, 2]);
        assert_eq!(*rec.seen.borrow(), vec!["a", "b", "c"]);
        assert_eq!(sleeps, vec![Duration::from_millis(800); 2]);
    }

    #[test]
    fn zero_delay_never_sleeps() {
        let rec = Recorder::default();
        let mut slept = false;
        open_staggered(&rec, &["a", "b"], Duration::ZERO, |_| slept = true);
        assert!(!slept);
    }

    #[test]
    fn failure_is_skipped() {
        let rec = Recorder {
            fail_on: Some("b"),
            ..Default::default()
        };
        let opened = open_staggered(&rec, &["a", "b", "c"], Duration::ZERO, |_| {});
        assert_eq!(opened, vec![0, 2]);
        assert_eq!(*rec.seen.borrow(), vec!["a", "c"]);
    }

    #[test]
    fn command_line_override_splits_args() {
        let opener = SystemOpener::from_command_line("firefox --new-tab");
        assert_eq!(opener.program(), "firefox");
        assert_eq!(opener.args, vec!["--new-tab"]);
    }

    #[test]
    fn quoted_program_keeps_spaces() {
        let opener =
            SystemOpener::from_command_line(r#""/Applications/My Browser.app/run" --new-tab 'a b'"#);
        assert_eq!(opener.program(), "/Applications/My Browser.app/run");
        assert_eq!(opener.args, vec!["--new-tab", "a b"]);
    }

    #[test]
    fn empty_quotes_are_a_word() {
        assert_eq!(split_words(r#"cmd /C start "" "#), vec!["cmd", "/C", "start", ""]);
        assert!(split_words("   ").is_empty());
    }
}
