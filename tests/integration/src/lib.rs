//! Integration tests across the pattern catalogue
//!
//! This test suite validates:
//! - Airstrip episodes driven from TOML configuration files
//! - Coordinator behavior observed through several handles at once
//! - The behavioral and structural patterns used together

pub mod test_utils;

#[cfg(test)]
mod airstrip_episode_tests;

#[cfg(test)]
mod catalogue_tests;
