//! Error types
//!
//! Only startup can fail: reading or decoding the résumé document and
//! resolving the colour theme. Layout and scrolling clamp instead of failing.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the résumé document
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("failed to read résumé from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse résumé: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to build a palette from configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown palette '{0}' (expected 'default' or 'simple')")]
    UnknownPalette(String),

    #[error("invalid color '{value}' for {field}: expected #rrggbb, 0-255 or a color name")]
    InvalidColor { field: &'static str, value: String },
}
