//! Asset pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, processing or writing asset files.
///
/// Command glue wraps these in `anyhow::Error`; the variant tells the
/// caller which part of the taxonomy a failure belongs to.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("source file not found: `{0}`")]
    MissingInput(PathBuf),

    #[error("failed to decode `{0}`")]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("failed to write `{0}`")]
    Encode(PathBuf, #[source] image::ImageError),

    #[error("IO error at `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` not found in PATH")]
    ToolNotFound(String),
}

impl AssetError {
    /// True for failures caused by absent inputs rather than bad data.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput(_))
    }
}
