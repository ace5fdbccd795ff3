//! # playdeck
//!
//! Platform-agnostic audio playback transport engine.
//!
//! Playdeck implements the control plane of an audio player: a track
//! catalog, a transport state machine (stopped / playing / paused), repeat
//! and shuffle handling, periodic playhead sampling, and a display-only
//! scrub preview. It performs no audio I/O itself; the host supplies a
//! [`MediaSource`] implementation for the platform's actual playback
//! capability and drives the engine with commands, timer ticks, and
//! media notifications. State updates come back out as a drained stream of
//! [`PlaybackEvent`]s.
//!
//! ## Usage
//!
//! ```rust
//! use playdeck::{
//!     BufferedRange, MediaSource, PlaybackConfig, Result, Track, TransportController,
//!     TransportState,
//! };
//!
//! // Host-side media capability (a real one would wrap the platform player).
//! struct NullSource;
//!
//! impl MediaSource for NullSource {
//!     fn load(&mut self, _locator: &str) -> Result<()> {
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn seek_to(&mut self, _seconds: f64) -> Result<()> {
//!         Ok(())
//!     }
//!     fn current_time(&self) -> f64 {
//!         0.0
//!     }
//!     fn duration(&self) -> f64 {
//!         f64::NAN
//!     }
//!     fn buffered_ranges(&self) -> Vec<BufferedRange> {
//!         Vec::new()
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let mut transport = TransportController::new(Box::new(NullSource), PlaybackConfig::default());
//!
//! transport.add_track(Track {
//!     source: "file:///music/one.mp3".to_string(),
//!     title: "One".to_string(),
//!     artist: "Example".to_string(),
//!     album: None,
//!     artwork: None,
//!     duration_label: "3:42".to_string(),
//! })?;
//!
//! transport.play()?;
//! assert_eq!(transport.state(), TransportState::Playing);
//!
//! // The host forwards drained events to its UI layer.
//! for event in transport.drain_events() {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The host is also expected to call [`TransportController::tick`] every
//! [`TransportController::monitor_interval`] while the playhead monitor is
//! running, and to forward end-of-track, load-completion, and error
//! notifications from its media source.

pub mod catalog;
pub mod command;
pub mod error;
pub mod events;
pub mod monitor;
pub mod order;
pub mod scrub;
pub mod source;
pub mod timefmt;
pub mod transport;
pub mod types;

pub use catalog::TrackCatalog;
pub use command::Command;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use monitor::PlayheadMonitor;
pub use order::PlayOrder;
pub use scrub::ScrubSession;
pub use source::{BufferedRange, MediaSource};
pub use timefmt::format_time;
pub use transport::TransportController;
pub use types::{PlaybackConfig, PlayheadSnapshot, RepeatMode, Track, TransportState};
