//! Scrub preview session
//!
//! Transient state for slider hover/drag interactions. While a session is
//! active the displayed playhead is overridden by the preview percent; the
//! actual media position never moves through this type (seeks are committed
//! separately by the controller).

/// Per-interaction preview state
#[derive(Debug, Clone, Default)]
pub struct ScrubSession {
    active: bool,
    preview_percent: f64,
}

impl ScrubSession {
    /// Create an inactive session
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter preview mode
    ///
    /// Idempotent; called on pointer-enter or on the first drag move.
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Record the preview percent (clamped to 0..=100)
    pub fn update(&mut self, percent: f64) {
        self.preview_percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
    }

    /// Leave preview mode
    ///
    /// The display snaps back to the real media time on the next
    /// recomputation.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Whether a preview is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last recorded preview percent
    pub fn preview_percent(&self) -> f64 {
        self.preview_percent
    }
}
