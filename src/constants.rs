// Centralized magic numbers & default values
pub const DEFAULT_CHUNK_SIZE: usize = 500;
pub const MAX_CHUNK_SIZE: usize = 2000;
pub const DEFAULT_OPEN_DELAY_MS: u64 = 800;
pub const OPENER_ENV: &str = "PLAYER_ID_SPLITTER_OPENER";
