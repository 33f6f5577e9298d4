pub mod chunker;
pub mod extract;
pub mod rewrite;
pub mod types;

pub use chunker::{split, split_with};
pub use extract::{DELIMITER, MARKER, extract_ids};
pub use rewrite::Rewrite;
pub use types::{ChunkUrl, IdList, Split};
