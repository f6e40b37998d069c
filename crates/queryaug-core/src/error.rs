//! Error types for queryaug

use crate::query::VariantType;
use thiserror::Error;

/// Result type alias using AugmentError
pub type Result<T> = std::result::Result<T, AugmentError>;

/// Error type alias for convenience
pub type Error = AugmentError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const VALIDATION_FAILED: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for queryaug
#[derive(Debug, Error)]
pub enum AugmentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown variant kind: {0}")]
    UnknownVariantKind(String),

    #[error("Unknown augmentation backend: {0}")]
    UnknownBackend(String),

    #[error("Unsupported variant kinds for this backend: {}", format_kinds(.0))]
    UnsupportedVariantKind(Vec<VariantType>),

    #[error("Failed to load pipeline for language '{lang}': {reason}")]
    PipelineLoad { lang: String, reason: String },

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AugmentError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownVariantKind(_)
            | Self::UnknownBackend(_)
            | Self::UnsupportedVariantKind(_)
            | Self::InvalidInput(_)
            | Self::Config(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}

fn format_kinds(kinds: &[VariantType]) -> String {
    kinds
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}
