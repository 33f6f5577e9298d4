/// Identifier list as found in a source URL, borrowed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdList<'a> {
    /// The raw parameter value, delimiters included.
    pub value: &'a str,
    pub ids: Vec<&'a str>,
}

/// One rewritten URL carrying a single chunk of identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkUrl {
    pub index: usize,
    pub url: String,
    pub ids: usize,
}

/// Result of splitting a source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub chunks: Vec<ChunkUrl>,
    /// Identifier count of the source URL, not of any single chunk.
    pub total: usize,
    pub chunk_size: usize,
}

impl Split {
    pub fn urls(&self) -> Vec<&str> {
        self.chunks.iter().map(|c| c.url.as_str()).collect()
    }

    pub fn into_urls(self) -> Vec<String> {
        self.chunks.into_iter().map(|c| c.url).collect()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
