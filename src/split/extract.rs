use crate::error::SplitError;
use crate::split::types::IdList;
use std::ops::Range;
use url::Url;

/// Marker that introduces the identifier list.
pub const MARKER: &str = "playerIDs=";
/// Percent-encoded comma separating identifiers.
pub const DELIMITER: &str = "%2C";

/// Pull the identifier list out of `url`.
///
/// Takes whatever follows the first `playerIDs=` up to the next `&` (or the end
/// of the string) and splits it on `%2C`. No URL parsing is involved, so the
/// marker may sit anywhere in the string.
pub fn extract_ids(url: &str) -> Result<IdList<'_>, SplitError> {
    let start = url.find(MARKER).ok_or(SplitError::MissingParameter)? + MARKER.len();
    let rest = &url[start..];
    let value = match rest.find('&') {
        Some(end) => &rest[..end],
        None => rest,
    };
    parse_value(value)
}

/// Split a raw parameter value into identifiers.
///
/// An empty value and empty tokens (doubled, leading or trailing delimiters)
/// are rejected rather than passed on as empty identifiers.
pub fn parse_value(value: &str) -> Result<IdList<'_>, SplitError> {
    if value.is_empty() {
        return Err(SplitError::EmptyIdentifierList);
    }
    let ids: Vec<&str> = value.split(DELIMITER).collect();
    if let Some(position) = ids.iter().position(|id| id.is_empty()) {
        return Err(SplitError::EmptyIdentifier { position });
    }
    Ok(IdList { value, ids })
}

/// Byte range of the `playerIDs` value inside the query of `url`.
///
/// The URL has to parse as an absolute URL. Only the query is searched, pair by
/// pair, so a marker in the path, in the fragment or embedded in another key
/// does not count.
pub fn query_value_range(url: &str) -> Result<Range<usize>, SplitError> {
    Url::parse(url)?;

    let query_end = url.find('#').unwrap_or(url.len());
    let query_start = url[..query_end]
        .find('?')
        .map(|i| i + 1)
        .ok_or(SplitError::MissingParameter)?;

    let mut offset = query_start;
    for pair in url[query_start..query_end].split('&') {
        if let Some(value) = pair.strip_prefix(MARKER) {
            let start = offset + MARKER.len();
            return Ok(start..start + value.len());
        }
        offset += pair.len() + 1;
    }
    Err(SplitError::MissingParameter)
}
