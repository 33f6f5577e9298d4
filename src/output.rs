use crate::split::Split;

/// Output layout for the chunk URL list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One URL per line.
    Plain,
    /// `CSV <n> (<ids> ids): <url>` per line.
    #[default]
    Numbered,
    /// Summary line followed by the numbered list.
    Summary,
}

pub fn format_plain(split: &Split) -> String {
    let mut s = String::new();
    for chunk in &split.chunks {
        s.push_str(&chunk.url);
        s.push('\n');
    }
    s
}

pub fn format_numbered(split: &Split) -> String {
    split
        .chunks
        .iter()
        .map(|c| format!("CSV {} ({} ids): {}\n", c.index + 1, c.ids, c.url))
        .collect()
}

pub fn format_summary(split: &Split) -> String {
    format!(
        "Found {} ids and created {} export URLs (up to {} each)",
        split.total,
        split.len(),
        split.chunk_size
    )
}

pub fn render(
    split: &Split,
    format: Format,
) -> String {
    match format {
        Format::Plain => format_plain(split),
        Format::Numbered => format_numbered(split),
        Format::Summary => format!("{}\n{}", format_summary(split), format_numbered(split)),
    }
}
