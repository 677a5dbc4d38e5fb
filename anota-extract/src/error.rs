//! Error types for the extractor

use thiserror::Error;

/// Raised only while building an [`Extractor`](crate::Extractor); extraction
/// itself never fails.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
