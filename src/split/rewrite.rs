use crate::error::SplitError;
use crate::split::extract::{MARKER, extract_ids, parse_value, query_value_range};
use crate::split::types::IdList;
use std::ops::Range;

/// How chunk URLs are produced from the source URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Rewrite {
    /// Replace the `playerIDs` query value by key; the rest of the URL is copied verbatim.
    #[default]
    Structured,
    /// Textually replace every `playerIDs=<value>` occurrence, wherever it appears.
    Literal,
}

/// Where the identifier list sits in the source URL.
#[derive(Debug)]
pub(crate) enum Target<'a> {
    Text(&'a str),
    Span(Range<usize>),
}

impl Rewrite {
    pub(crate) fn locate(self, url: &str) -> Result<(Target<'_>, IdList<'_>), SplitError> {
        match self {
            Rewrite::Literal => {
                let list = extract_ids(url)?;
                Ok((Target::Text(list.value), list))
            }
            Rewrite::Structured => {
                let range = query_value_range(url)?;
                let list = parse_value(&url[range.clone()])?;
                Ok((Target::Span(range), list))
            }
        }
    }
}

impl Target<'_> {
    /// Build a copy of `url` whose identifier list is `joined`.
    pub(crate) fn substitute(
        &self,
        url: &str,
        joined: &str,
    ) -> String {
        match self {
            Target::Text(value) => url.replace(
                &format!("{MARKER}{value}"),
                &format!("{MARKER}{joined}"),
            ),
            Target::Span(range) => {
                let mut out = String::with_capacity(url.len() - range.len() + joined.len());
                out.push_str(&url[..range.start]);
                out.push_str(joined);
                out.push_str(&url[range.end..]);
                out
            }
        }
    }
}
