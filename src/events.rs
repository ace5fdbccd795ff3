//! Playback notifications
//!
//! The engine publishes to a pending-event queue; the host drains it after
//! each command or tick ([`TransportController::drain_events`]). The engine
//! has no upward dependency on how the events are rendered.
//!
//! [`TransportController::drain_events`]: crate::transport::TransportController::drain_events

use crate::types::{PlayheadSnapshot, RepeatMode, Track, TransportState};
use serde::{Deserialize, Serialize};

/// Events emitted by the transport engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A track was appended to the catalog
    TrackAdded {
        /// The added track
        track: Track,
        /// Catalog contents after the addition
        all_tracks: Vec<Track>,
        /// Natural index of the new track
        index: usize,
    },

    /// A removal by source locator was processed
    ///
    /// Fires even when no track matched: `track` and `index` are `None`
    /// and the catalog is unchanged. Hosts treat that as "no-op, ignore".
    TrackRemoved {
        /// The removed track, if one matched
        track: Option<Track>,
        /// Catalog contents after the removal
        all_tracks: Vec<Track>,
        /// Former natural index of the removed track
        index: Option<usize>,
    },

    /// The catalog was emptied
    TracksCleared,

    /// A track's metadata was loaded into the media source
    TrackLoaded {
        /// Natural index of the track
        index: usize,
        /// The loaded track's display metadata
        track: Track,
    },

    /// Transport state changed
    StateChanged {
        /// The new state
        state: TransportState,
    },

    /// Derived playhead view, recomputed on a tick or preview update
    PlayheadUpdated {
        /// The fresh snapshot
        snapshot: PlayheadSnapshot,
    },

    /// Repeat mode changed
    RepeatChanged {
        /// The new mode
        mode: RepeatMode,
    },

    /// Shuffle flag changed
    ShuffleChanged {
        /// Whether shuffle is now enabled
        enabled: bool,
    },

    /// A media-source error was reported
    Error {
        /// Error description from the media source
        message: String,
    },
}
