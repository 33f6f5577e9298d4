pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod output;
pub mod pipeline;
pub mod split;
pub mod ui;

pub use error::SplitError;
pub use split::{Rewrite, Split, split, split_with};
