//! Error types for building a gesture controller and parsing its inputs.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing controller inputs.
///
/// Frame processing itself never fails; these only surface at the
/// construction and parsing edges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A presentation needs at least one slide.
    #[error("Presentation must contain at least one slide")]
    NoSlides,

    /// A finger vector was not exactly five 0/1 values.
    #[error("Invalid finger vector: {0}")]
    InvalidFingerVector(String),
}
