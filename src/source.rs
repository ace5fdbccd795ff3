//! Platform-agnostic media source trait
//!
//! Abstracts the actual audio element/device driving playback. The engine
//! issues commands and polls positions; decoding, output, and buffering all
//! live behind this seam. Completion of asynchronous operations and
//! end-of-track/error conditions are reported back to the controller by the
//! host (`on_load_complete`, `on_track_ended`, `on_media_error`).

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A contiguous buffered span of the current track, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BufferedRange {
    /// Start of the span
    pub start: f64,
    /// End of the span
    pub end: f64,
}

/// External media capability consumed by the transport controller
///
/// All mutating calls may complete asynchronously on the platform side; the
/// engine tolerates a new operation being issued before a previous one
/// finishes (see the load generation handling in the controller).
pub trait MediaSource: Send {
    /// Begin loading a track by source locator
    fn load(&mut self, locator: &str) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Seek to an absolute position in seconds
    fn seek_to(&mut self, seconds: f64) -> Result<()>;

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Total duration in seconds
    ///
    /// May be `NaN` while metadata is still unknown; the engine degrades
    /// all derived percentages to `0` in that case.
    fn duration(&self) -> f64;

    /// Buffered spans of the current track
    fn buffered_ranges(&self) -> Vec<BufferedRange>;
}

#[cfg(test)]
pub(crate) mod spy {
    //! Scripted spy media source for controller tests
    //!
    //! Records every command the engine issues so tests can assert on the
    //! exact sequence (e.g. the forced seek-to-0 on shuffle toggle).

    use super::{BufferedRange, MediaSource};
    use crate::error::Result;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    pub struct SpyState {
        pub loads: Vec<String>,
        pub play_calls: u32,
        pub pause_calls: u32,
        pub seeks: Vec<f64>,
        pub current_time: f64,
        pub duration: f64,
        pub buffered: Vec<BufferedRange>,
    }

    impl SpyState {
        pub fn new() -> Self {
            Self {
                duration: f64::NAN,
                ..Self::default()
            }
        }
    }

    /// Spy handle shared between the test and the boxed source
    pub type SpyHandle = Arc<Mutex<SpyState>>;

    pub struct SpyMediaSource {
        state: SpyHandle,
    }

    impl SpyMediaSource {
        /// Create a spy source plus the handle a test keeps
        pub fn new() -> (Box<dyn MediaSource>, SpyHandle) {
            let state: SpyHandle = Arc::new(Mutex::new(SpyState::new()));
            (Box::new(Self { state: state.clone() }), state)
        }
    }

    impl MediaSource for SpyMediaSource {
        fn load(&mut self, locator: &str) -> Result<()> {
            self.state.lock().unwrap().loads.push(locator.to_string());
            Ok(())
        }

        fn play(&mut self) -> Result<()> {
            self.state.lock().unwrap().play_calls += 1;
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            self.state.lock().unwrap().pause_calls += 1;
            Ok(())
        }

        fn seek_to(&mut self, seconds: f64) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            state.seeks.push(seconds);
            state.current_time = seconds;
            Ok(())
        }

        fn current_time(&self) -> f64 {
            self.state.lock().unwrap().current_time
        }

        fn duration(&self) -> f64 {
            self.state.lock().unwrap().duration
        }

        fn buffered_ranges(&self) -> Vec<BufferedRange> {
            self.state.lock().unwrap().buffered.clone()
        }
    }
}
