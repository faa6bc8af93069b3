//! Configuration module for face2face-utils.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig};
pub use validation::validate_config;
