// Chunker: partitions the playerIDs list and emits one URL per chunk
use crate::error::SplitError;
use crate::split::extract::DELIMITER;
use crate::split::rewrite::Rewrite;
use crate::split::types::{ChunkUrl, Split};
use tracing::debug;

/// Split `url` into URLs of at most `chunk_size` identifiers each, using the
/// default rewrite strategy.
pub fn split(
    url: &str,
    chunk_size: usize,
) -> Result<Split, SplitError> {
    split_with(url, chunk_size, Rewrite::default())
}

/// Split `url` into URLs of at most `chunk_size` identifiers each.
///
/// Identifiers keep their original order; the last chunk may be shorter.
/// Concatenating the chunks' identifier lists gives back the source list.
pub fn split_with(
    url: &str,
    chunk_size: usize,
    rewrite: Rewrite,
) -> Result<Split, SplitError> {
    if chunk_size == 0 {
        return Err(SplitError::InvalidChunkSize);
    }
    let (target, list) = rewrite.locate(url)?;
    let total = list.ids.len();
    debug!(total, chunk_size, ?rewrite, "splitting playerIDs");

    let chunks = list
        .ids
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, group)| ChunkUrl {
            index,
            url: target.substitute(url, &group.join(DELIMITER)),
            ids: group.len(),
        })
        .collect();

    Ok(Split {
        chunks,
        total,
        chunk_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: &str = "https://ex.com/d?playerIDs=a%2Cb%2Cc%2Cd%2Ce&x=1";

    #[test]
    fn five_ids_in_pairs() {
        for rewrite in [Rewrite::Structured, Rewrite::Literal] {
            let out = split_with(FIVE, 2, rewrite).unwrap();
            assert_eq!(out.total, 5);
            assert_eq!(
                out.urls(),
                vec![
                    "https://ex.com/d?playerIDs=a%2Cb&x=1",
                    "https://ex.com/d?playerIDs=c%2Cd&x=1",
                    "https://ex.com/d?playerIDs=e&x=1",
                ]
            );
            let counts: Vec<usize> = out.chunks.iter().map(|c| c.ids).collect();
            assert_eq!(counts, vec![2, 2, 1]);
        }
    }

    #[test]
    fn exact_fit_returns_input() {
        let out = split(FIVE, 5).unwrap();
        assert_eq!(out.urls(), vec![FIVE]);
    }

    #[test]
    fn oversized_chunk_returns_input() {
        let out = split(FIVE, 500).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.chunks[0].url, FIVE);
        assert_eq!(out.chunks[0].ids, 5);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(matches!(
            split(FIVE, 0).unwrap_err(),
            SplitError::InvalidChunkSize
        ));
    }

    #[test]
    fn missing_marker_fails() {
        let err = split("https://x.com/a?foo=bar", 100).unwrap_err();
        assert!(err.is_missing_parameter());
        let err = split_with("https://x.com/a?foo=bar", 100, Rewrite::Literal).unwrap_err();
        assert!(err.is_missing_parameter());
    }

    #[test]
    fn literal_rewrites_every_identical_occurrence() {
        let url = "https://ex.com/d?playerIDs=a%2Cb&back=/d?playerIDs=a%2Cb";
        let out = split_with(url, 1, Rewrite::Literal).unwrap();
        assert_eq!(out.total, 2);
        assert_eq!(
            out.chunks[0].url,
            "https://ex.com/d?playerIDs=a&back=/d?playerIDs=a"
        );
    }

    #[test]
    fn structured_rewrites_only_the_parameter() {
        let url = "https://ex.com/d?playerIDs=a%2Cb&back=/d?playerIDs=a%2Cb";
        let out = split_with(url, 1, Rewrite::Structured).unwrap();
        assert_eq!(
            out.urls(),
            vec![
                "https://ex.com/d?playerIDs=a&back=/d?playerIDs=a%2Cb",
                "https://ex.com/d?playerIDs=b&back=/d?playerIDs=a%2Cb",
            ]
        );
    }

    #[test]
    fn structured_keeps_fragment_and_other_params() {
        let url = "https://ex.com/webinterface/ExportService?from=1&playerIDs=1%2C2%2C3&to=9#x";
        let out = split(url, 2).unwrap();
        assert_eq!(
            out.chunks[1].url,
            "https://ex.com/webinterface/ExportService?from=1&playerIDs=3&to=9#x"
        );
    }

    #[test]
    fn literal_accepts_non_url_text() {
        let out = split_with("playerIDs=a%2Cb%2Cc", 2, Rewrite::Literal).unwrap();
        assert_eq!(out.urls(), vec!["playerIDs=a%2Cb", "playerIDs=c"]);
        assert!(split("playerIDs=a%2Cb%2Cc", 2).is_err());
    }

    #[test]
    fn empty_list_is_rejected() {
        for rewrite in [Rewrite::Structured, Rewrite::Literal] {
            let err = split_with("https://ex.com/d?playerIDs=&x=1", 2, rewrite).unwrap_err();
            assert!(matches!(err, SplitError::EmptyIdentifierList));
        }
    }
}
