pub mod clipboard;
pub mod config;
pub mod error;
pub mod workbench;
