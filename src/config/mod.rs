//! Configuration module for vetta
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::Settings;
