//! Configuration system for keywatch.
//!
//! This crate provides the serde-backed configuration types shared across
//! the keywatch crates, plus loading and validation of YAML config files.
//! It includes:
//!
//! - Keybinding entries (filter string → action name)
//! - Filter evaluation options
//! - The keyboard event kind a binding subscribes to

pub mod config;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{FilterOptions, KeyBinding, KeyEventKind};
