//! Core types for the transport engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Track information for the catalog
///
/// Immutable once added; all fields are display/loading metadata.
/// Duration is kept as the display string the host supplied ("3:45"),
/// never parsed — the authoritative duration comes from the media source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Source locator handed to the media source on load
    pub source: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name (optional)
    pub album: Option<String>,

    /// Artwork locator (optional)
    pub artwork: Option<String>,

    /// Duration display string supplied by the host
    pub duration_label: String,
}

/// Transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// No playback; playhead at zero
    Stopped,

    /// Media source playing, playhead monitor running
    Playing,

    /// Paused mid-track, monitor halted
    Paused,
}

/// Repeat mode
///
/// Toggling cycles `Off -> One -> All -> Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop at the end of the effective order
    Off,

    /// Repeat the current track
    One,

    /// Wrap around at the ends of the effective order
    All,
}

impl RepeatMode {
    /// Next mode in the toggle cycle
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::One,
            RepeatMode::One => RepeatMode::All,
            RepeatMode::All => RepeatMode::Off,
        }
    }
}

/// Derived playhead view, recomputed on each sampling tick or preview update
///
/// Never stored by the engine; consumed by the host through
/// [`PlaybackEvent::PlayheadUpdated`](crate::events::PlaybackEvent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayheadSnapshot {
    /// Played portion of the track, 0.0..=100.0
    pub played_percent: f64,

    /// Buffered portion of the track, 0.0..=100.0
    pub buffered_percent: f64,

    /// Formatted current time ("M:SS")
    pub display_current_time: String,

    /// Formatted total time ("M:SS")
    pub display_total_time: String,
}

impl PlayheadSnapshot {
    /// Snapshot for a freshly loaded track (everything at zero)
    pub(crate) fn zeroed() -> Self {
        Self {
            played_percent: 0.0,
            buffered_percent: 0.0,
            display_current_time: "0:00".to_string(),
            display_total_time: "0:00".to_string(),
        }
    }
}

/// Configuration for the transport controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,

    /// `previous` restarts the current track past this elapsed time
    /// (default: 5 s)
    pub restart_threshold: Duration,

    /// Start playback from the top of the new order when shuffle is
    /// toggled (default: true)
    pub auto_play_on_shuffle: bool,

    /// Commit seeks continuously while the scrub slider is dragged
    /// (default: false)
    pub live_scrub: bool,

    /// Playhead sampling period (default: 200 ms)
    pub monitor_interval: Duration,

    /// Respond to symbolic remote-control commands (default: true)
    pub handle_remote_commands: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            repeat: RepeatMode::Off,
            shuffle: false,
            restart_threshold: Duration::from_secs(5),
            auto_play_on_shuffle: true,
            live_scrub: false,
            monitor_interval: Duration::from_millis(200),
            handle_remote_commands: true,
        }
    }
}
