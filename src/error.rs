//! Error types shared by the chart core, the input form and configuration.

use std::path::PathBuf;
use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("max amount must be finite and > 0, got {0}")]
    InvalidMaxAmount(f64),

    #[error("invalid hex color: {0}")]
    InvalidColor(String),

    #[error("no usable font found (tried {tried} locations)")]
    FontNotFound { tried: usize },

    #[error("failed to load font {path}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {0} is not a valid TrueType/OpenType font")]
    InvalidFont(PathBuf),

    #[error("failed to encode PNG: {0}")]
    PngEncode(#[from] image::ImageError),
}

/// Rejected expense form submission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input for amount: {field} = {value:?}")]
    InvalidAmount { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Invalid(String),
}
