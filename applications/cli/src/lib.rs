//! Songdeck CLI Library
//!
//! Headless driver for the Songdeck catalog and playback session.
//!
//! This library exposes the command implementations for testing purposes.

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use commands::{WalkOptions, WalkReport};
pub use config::AppConfig;
pub use error::{CliError, Result};
