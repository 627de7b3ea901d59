//! Core functionality for the pattern catalogue.
//!
//! This crate provides the configuration, logging and error types shared
//! by the pattern crates.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AirstripConfig, Config, EpisodeMode, LoggingConfig};
pub use error::{CoreError, Result};
