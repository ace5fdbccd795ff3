//! Playhead monitor
//!
//! Periodic sampler of the media source while the transport is playing.
//! The engine is sans-IO: the monitor owns the running flag and sampling
//! interval, and the host drives [`TransportController::tick`] at that
//! interval whenever `is_running` reports true. Start is idempotent, so
//! two concurrent sampling loops can never be scheduled.
//!
//! [`TransportController::tick`]: crate::transport::TransportController::tick

use crate::scrub::ScrubSession;
use crate::source::MediaSource;
use crate::timefmt::format_time;
use crate::types::PlayheadSnapshot;
use std::time::Duration;

/// Idempotent start/stop handle for playhead sampling
#[derive(Debug, Clone)]
pub struct PlayheadMonitor {
    running: bool,
    interval: Duration,
}

impl PlayheadMonitor {
    /// Create a stopped monitor with the given sampling period
    pub fn new(interval: Duration) -> Self {
        Self {
            running: false,
            interval,
        }
    }

    /// Start sampling
    ///
    /// Returns `false` (no-op) when already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop sampling, allowing a later `play()` to restart it
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the host should be driving ticks
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Sampling period
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the sampling period
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}

/// Furthest buffered extent of the current track, in seconds
///
/// Scans every buffered span and takes the highest end point. Returns `0`
/// for a zero or unknown (`NaN`) duration.
pub(crate) fn buffered_time(source: &dyn MediaSource) -> f64 {
    let duration = source.duration();
    if !duration.is_finite() || duration == 0.0 {
        return 0.0;
    }
    source
        .buffered_ranges()
        .iter()
        .map(|range| range.end)
        .fold(0.0, f64::max)
}

/// Compute the derived playhead view from the media source
///
/// An active scrub session overrides the displayed current time and played
/// percent with the preview position; the buffered percent and the real
/// media position are untouched.
pub(crate) fn compute_snapshot(
    source: &dyn MediaSource,
    scrub: &ScrubSession,
) -> PlayheadSnapshot {
    let duration = source.duration();
    let total = if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    };

    let mut current = source.current_time();
    let mut played_percent = percent_of(current, total);
    let buffered_percent = percent_of(buffered_time(source), total);

    if scrub.is_active() {
        played_percent = scrub.preview_percent();
        current = (played_percent / 100.0) * total;
    }

    PlayheadSnapshot {
        played_percent,
        buffered_percent,
        display_current_time: format_time(current),
        display_total_time: format_time(total),
    }
}

fn percent_of(value: f64, total: f64) -> f64 {
    if total <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    ((value / total) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::spy::SpyMediaSource;
    use crate::source::BufferedRange;

    #[test]
    fn start_is_idempotent() {
        let mut monitor = PlayheadMonitor::new(Duration::from_millis(200));
        assert!(monitor.start());
        assert!(!monitor.start());
        assert!(monitor.is_running());

        monitor.stop();
        assert!(!monitor.is_running());
        assert!(monitor.start());
    }

    #[test]
    fn snapshot_guards_unknown_duration() {
        let (source, handle) = SpyMediaSource::new();
        // duration stays NaN
        handle.lock().unwrap().current_time = 30.0;

        let snapshot = compute_snapshot(source.as_ref(), &ScrubSession::new());
        assert_eq!(snapshot.played_percent, 0.0);
        assert_eq!(snapshot.buffered_percent, 0.0);
        assert_eq!(snapshot.display_total_time, "0:00");
    }

    #[test]
    fn snapshot_computes_percentages() {
        let (source, handle) = SpyMediaSource::new();
        {
            let mut state = handle.lock().unwrap();
            state.duration = 200.0;
            state.current_time = 50.0;
            state.buffered = vec![
                BufferedRange { start: 0.0, end: 80.0 },
                BufferedRange { start: 90.0, end: 120.0 },
            ];
        }

        let snapshot = compute_snapshot(source.as_ref(), &ScrubSession::new());
        assert_eq!(snapshot.played_percent, 25.0);
        // Furthest range end wins.
        assert_eq!(snapshot.buffered_percent, 60.0);
        assert_eq!(snapshot.display_current_time, "0:50");
        assert_eq!(snapshot.display_total_time, "3:20");
    }

    #[test]
    fn active_scrub_overrides_display_only() {
        let (source, handle) = SpyMediaSource::new();
        {
            let mut state = handle.lock().unwrap();
            state.duration = 100.0;
            state.current_time = 10.0;
            state.buffered = vec![BufferedRange { start: 0.0, end: 40.0 }];
        }

        let mut scrub = ScrubSession::new();
        scrub.start();
        scrub.update(75.0);

        let snapshot = compute_snapshot(source.as_ref(), &scrub);
        assert_eq!(snapshot.played_percent, 75.0);
        assert_eq!(snapshot.display_current_time, "1:15");
        // Buffered percent still reflects the real media state.
        assert_eq!(snapshot.buffered_percent, 40.0);
        // No seek was issued.
        assert!(handle.lock().unwrap().seeks.is_empty());
    }
}
