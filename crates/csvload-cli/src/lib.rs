//! CLI library components for the CSV loader.

pub mod config;
pub mod logging;
pub mod pipeline;
