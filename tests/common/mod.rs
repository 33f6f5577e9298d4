#![allow(dead_code)]
use player_id_url_splitter::split::DELIMITER;

/// Export URL with the given ids between two other parameters.
pub fn export_url(ids: &[&str]) -> String {
    format!(
        "https://ex.com/webinterface/ExportService?from=1&playerIDs={}&to=9",
        ids.join(DELIMITER)
    )
}

/// Ids of `url` as the first playerIDs value, split on the delimiter.
pub fn ids_of(url: &str) -> Vec<String> {
    player_id_url_splitter::split::extract_ids(url)
        .unwrap()
        .ids
        .into_iter()
        .map(str::to_owned)
        .collect()
}
