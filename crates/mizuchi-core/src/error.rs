use thiserror::Error;

#[derive(Debug, Error)]
pub enum MizuchiError {
    /// Extracted metadata could not be coerced into a Torrent record
    /// (e.g., a non-integer season token). Never silently defaulted.
    #[error("validation failed: {0}")]
    Validation(String),
}
