//! CLI library components for typescore.

pub mod config;
pub mod logging;
pub mod render;
