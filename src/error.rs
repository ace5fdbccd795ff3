//! Error types for the transport engine

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is selected and the catalog is empty
    #[error("No track selected")]
    NoTrackSelected,

    /// Media source failure (load, seek, play, pause)
    #[error("Media source error: {0}")]
    Media(String),
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
