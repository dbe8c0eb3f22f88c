//! Error types for color parsing, request handling and presets

use thiserror::Error;

/// A color string that is not 3 or 6 hex digits
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color '{0}': expected 3 or 6 hex digits")]
    InvalidColor(String),
}

/// Errors raised while turning query parameters into render parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid value '{value}' for '{key}': expected a number")]
    InvalidNumber { key: String, value: String },
}

/// Errors that can occur when loading a preset file
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Failed to read preset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse preset TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
