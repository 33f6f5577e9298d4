pub mod browser;
pub mod clipboard;
