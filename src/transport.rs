//! Transport controller - core orchestration
//!
//! The state machine that owns the catalog, play order, scrub session, and
//! playhead monitor, and drives the external media source. All mutation
//! happens through discrete host callbacks (commands, ticks, media-source
//! notifications) on one logical thread; asynchronous media operations are
//! fenced with a load generation so completions of superseded loads are
//! discarded instead of applied.

use crate::{
    catalog::TrackCatalog,
    command::Command,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    monitor::{compute_snapshot, PlayheadMonitor},
    order::PlayOrder,
    scrub::ScrubSession,
    source::MediaSource,
    types::{PlaybackConfig, PlayheadSnapshot, RepeatMode, Track, TransportState},
};

use std::time::Duration;
use tracing::{debug, warn};

/// Central transport state machine
///
/// Owns all playback-control state and the boxed [`MediaSource`]; exposes
/// the command/notification surface the host UI binds to. Has no dependency
/// on any UI type.
pub struct TransportController {
    source: Box<dyn MediaSource>,

    // Track list and ordering
    catalog: TrackCatalog,
    order: PlayOrder,

    // Cursor into the effective order (natural order, or the shuffled
    // permutation when shuffle is on). None = no track selected.
    position: Option<usize>,

    // Transient preview + sampling
    scrub: ScrubSession,
    monitor: PlayheadMonitor,

    state: TransportState,
    repeat: RepeatMode,
    shuffle: bool,

    // Configuration
    restart_threshold: Duration,
    auto_play_on_shuffle: bool,
    live_scrub: bool,
    handle_remote_commands: bool,

    // Fence for asynchronous media-source loads
    load_generation: u64,

    // Event queue for host synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl TransportController {
    /// Create a controller driving the given media source
    pub fn new(source: Box<dyn MediaSource>, config: PlaybackConfig) -> Self {
        Self {
            source,
            catalog: TrackCatalog::new(),
            order: PlayOrder::new(),
            position: None,
            scrub: ScrubSession::new(),
            monitor: PlayheadMonitor::new(config.monitor_interval),
            state: TransportState::Stopped,
            repeat: config.repeat,
            shuffle: config.shuffle,
            restart_threshold: config.restart_threshold,
            auto_play_on_shuffle: config.auto_play_on_shuffle,
            live_scrub: config.live_scrub,
            handle_remote_commands: config.handle_remote_commands,
            load_generation: 0,
            pending_events: Vec::new(),
        }
    }

    // ===== Catalog =====

    /// Append a track to the catalog, returning its natural index
    ///
    /// The first track added is auto-selected (and loaded) without
    /// starting playback.
    pub fn add_track(&mut self, track: Track) -> Result<usize> {
        let current_natural = self.current_natural_index();
        let index = self.catalog.add(track.clone());

        if self.shuffle {
            self.order.regenerate(self.catalog.len());
            if let Some(natural) = current_natural {
                self.position = self.order.slot_of(natural);
            }
        }

        self.pending_events.push(PlaybackEvent::TrackAdded {
            track,
            all_tracks: self.catalog.tracks().to_vec(),
            index,
        });

        if self.catalog.len() == 1 {
            self.load_slot(0)?;
        }

        Ok(index)
    }

    /// Remove the first track whose source locator matches
    ///
    /// A miss is a no-op mutation but still emits a `TrackRemoved`
    /// notification with `index: None`, which hosts must ignore.
    pub fn remove_by_source(&mut self, locator: &str) {
        let current_natural = self.current_natural_index();

        let Some((removed_index, track)) = self.catalog.remove_by_source(locator) else {
            self.pending_events.push(PlaybackEvent::TrackRemoved {
                track: None,
                all_tracks: self.catalog.tracks().to_vec(),
                index: None,
            });
            return;
        };

        let len = self.catalog.len();

        // Keep the cursor on the same track where one survives.
        let surviving_natural = current_natural.and_then(|natural| {
            use std::cmp::Ordering;
            match removed_index.cmp(&natural) {
                Ordering::Less => Some(natural - 1),
                Ordering::Equal => None,
                Ordering::Greater => Some(natural),
            }
        });

        if self.shuffle {
            self.order.regenerate(len);
        }

        self.position = match surviving_natural {
            Some(natural) if self.shuffle => self.order.slot_of(natural),
            Some(natural) => Some(natural),
            None if len == 0 => None,
            None => self.position.map(|slot| slot.min(len - 1)),
        };

        self.pending_events.push(PlaybackEvent::TrackRemoved {
            track: Some(track),
            all_tracks: self.catalog.tracks().to_vec(),
            index: Some(removed_index),
        });
    }

    /// Empty the catalog
    ///
    /// Does not change the transport state; callers are expected to stop
    /// playback separately.
    pub fn clear_tracks(&mut self) {
        self.catalog.clear();
        self.order.reset();
        self.position = None;
        self.load_generation += 1;
        self.pending_events.push(PlaybackEvent::TracksCleared);
    }

    // ===== Transport =====

    /// Start or resume playback
    ///
    /// Selects the first track when nothing is selected yet. Starts the
    /// playhead monitor if it is not already running.
    pub fn play(&mut self) -> Result<()> {
        if self.position.is_none() {
            if self.catalog.is_empty() {
                return Err(PlaybackError::NoTrackSelected);
            }
            self.load_slot(0)?;
        }
        self.source.play()?;
        self.monitor.start();
        self.set_state(TransportState::Playing);
        Ok(())
    }

    /// Pause playback
    ///
    /// Only meaningful while playing; otherwise a no-op.
    pub fn pause(&mut self) -> Result<()> {
        if self.state != TransportState::Playing {
            return Ok(());
        }
        self.source.pause()?;
        self.monitor.stop();
        self.set_state(TransportState::Paused);
        Ok(())
    }

    /// Stop playback from any state
    ///
    /// Pauses the media source, rewinds it to zero, halts the monitor, and
    /// forces one immediate playhead recomputation so the displayed time
    /// resets while the monitor is down.
    pub fn stop(&mut self) -> Result<()> {
        self.source.pause()?;
        self.source.seek_to(0.0)?;
        self.monitor.stop();
        self.load_generation += 1;
        self.set_state(TransportState::Stopped);
        self.emit_playhead();
        Ok(())
    }

    /// Toggle between playing and paused
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        match self.state {
            TransportState::Playing => self.pause(),
            TransportState::Stopped | TransportState::Paused => self.play(),
        }
    }

    /// Advance to the next track in the effective order
    ///
    /// Repeat-one restarts the current track without advancing. At the end
    /// of the order, repeat-all wraps to the first slot; repeat-off leaves
    /// the position unchanged and does not touch the media source.
    pub fn play_next(&mut self) -> Result<()> {
        if self.repeat == RepeatMode::One {
            self.source.seek_to(0.0)?;
            return Ok(());
        }

        let len = self.catalog.len();
        if len == 0 {
            return Ok(());
        }

        let next = match self.position {
            Some(slot) if slot + 1 < len => slot + 1,
            Some(_) if self.repeat == RepeatMode::All => 0,
            Some(_) => return Ok(()),
            None => 0,
        };

        self.load_slot(next)?;
        self.play()
    }

    /// Go back in the effective order, or restart the current track
    ///
    /// Restarts (seek to zero, position unchanged) when more than the
    /// restart threshold has elapsed, when repeat-one is set, or when
    /// repeat is off and the cursor is already at the first slot.
    pub fn play_previous(&mut self) -> Result<()> {
        let elapsed = self.source.current_time();
        if elapsed > self.restart_threshold.as_secs_f64()
            || self.repeat == RepeatMode::One
            || (self.repeat == RepeatMode::Off && self.position == Some(0))
        {
            self.source.seek_to(0.0)?;
            return Ok(());
        }

        let len = self.catalog.len();
        if len == 0 {
            return Ok(());
        }

        let prev = match self.position {
            Some(slot) if slot > 0 => slot - 1,
            Some(_) if self.repeat == RepeatMode::All => len - 1,
            Some(slot) => slot,
            None => 0,
        };

        self.load_slot(prev)?;
        self.play()
    }

    /// Select and play the track at a natural catalog index
    ///
    /// Out-of-range indices are clamped to `0`, never rejected. With
    /// shuffle on, the cursor is placed at the play-order slot holding the
    /// requested natural index so subsequent navigation stays consistent
    /// with the effective order.
    pub fn play_at_index(&mut self, natural: usize) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(PlaybackError::NoTrackSelected);
        }
        let natural = if natural < self.catalog.len() {
            natural
        } else {
            0
        };
        let slot = if self.shuffle {
            self.order.slot_of(natural).unwrap_or(0)
        } else {
            natural
        };
        self.load_slot(slot)?;
        self.play()
    }

    // ===== Shuffle / repeat =====

    /// Flip the shuffle flag
    ///
    /// Turning shuffle on regenerates the play order; turning it off
    /// restores natural-order navigation. With `auto_play_on_shuffle` set,
    /// playback restarts from the top of the new order, explicitly seeking
    /// to zero even when the first slot resolves to the track already
    /// playing.
    pub fn toggle_shuffle(&mut self) -> Result<()> {
        self.shuffle = !self.shuffle;
        self.pending_events.push(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle,
        });

        if self.catalog.is_empty() {
            return Ok(());
        }

        if self.shuffle {
            self.order.regenerate(self.catalog.len());
        } else {
            self.order.reset();
        }

        if self.auto_play_on_shuffle {
            self.load_slot(0)?;
            self.play()?;
            // Force restart even when the track identity is unchanged; an
            // equality check here would skip the required rewind.
            self.source.seek_to(0.0)?;
        }

        Ok(())
    }

    /// Cycle the repeat mode (`Off -> One -> All -> Off`)
    pub fn toggle_repeat(&mut self) {
        self.set_repeat(self.repeat.cycled());
    }

    /// Set the repeat mode directly
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        if self.repeat != mode {
            self.repeat = mode;
            self.pending_events
                .push(PlaybackEvent::RepeatChanged { mode });
        }
    }

    // ===== Media-source notifications =====

    /// The media source reached the end of the current track
    pub fn on_track_ended(&mut self) -> Result<()> {
        let at_last = self
            .position
            .is_some_and(|slot| slot + 1 == self.catalog.len());
        if at_last && self.repeat == RepeatMode::Off {
            self.stop()
        } else {
            self.play_next()
        }
    }

    /// The media source reported a load/playback failure
    ///
    /// Policy: report the error, halt the monitor, and leave the
    /// controller stopped. Completions of the failed load are fenced off.
    pub fn on_media_error(&mut self, message: &str) {
        warn!(message, "media source error");
        self.monitor.stop();
        self.load_generation += 1;
        self.set_state(TransportState::Stopped);
        self.pending_events.push(PlaybackEvent::Error {
            message: message.to_string(),
        });
    }

    /// A media-source load finished
    ///
    /// `generation` is the value of [`load_generation`](Self::load_generation)
    /// captured when the load was issued. Completions for superseded loads
    /// are discarded rather than applied.
    pub fn on_load_complete(&mut self, generation: u64) {
        if generation != self.load_generation {
            debug!(
                generation,
                current = self.load_generation,
                "discarding completion for superseded load"
            );
            return;
        }
        // Metadata (total duration) may only now be known.
        self.emit_playhead();
    }

    // ===== Playhead sampling =====

    /// Sampling-timer callback
    ///
    /// The host calls this on [`monitor_interval`](Self::monitor_interval)
    /// while [`monitor`](Self::monitor) reports running. Emits a fresh
    /// playhead snapshot; inert unless actually playing.
    pub fn tick(&mut self) {
        if !self.monitor.is_running() || self.state != TransportState::Playing {
            return;
        }
        self.emit_playhead();
    }

    // ===== Scrub preview =====

    /// Pointer entered the interactive scrub region
    pub fn start_scrub(&mut self) {
        self.scrub.start();
    }

    /// Drag/hover moved to a new percent position
    ///
    /// Display-only: overrides the playhead view without seeking. Starts a
    /// session implicitly when a drag-move arrives first.
    pub fn update_scrub(&mut self, percent: f64) {
        self.scrub.start();
        self.scrub.update(percent);
        self.emit_playhead();
    }

    /// Pointer left the scrub region
    ///
    /// The display snaps back to the real media time.
    pub fn end_scrub(&mut self) {
        self.scrub.end();
        self.emit_playhead();
    }

    /// Interaction mode switched between pointer and directional input
    ///
    /// A preview interrupted mid-drag (e.g. by 5-way navigation) is force
    /// ended here, since the pointer-leave event may never be delivered.
    pub fn interaction_mode_changed(&mut self, pointer_mode: bool) {
        if self.scrub.is_active() && !pointer_mode {
            self.end_scrub();
        }
    }

    /// Slider reported a value change
    ///
    /// Commits an actual seek only on a final change, or continuously when
    /// live scrubbing is enabled.
    pub fn scrub_changed(&mut self, percent: f64, is_final: bool) -> Result<()> {
        if !is_final && !self.live_scrub {
            return Ok(());
        }
        let duration = self.source.duration();
        let total = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        let target = (total / 100.0) * percent.clamp(0.0, 100.0);
        self.source.seek_to(target)?;
        self.emit_playhead();
        Ok(())
    }

    // ===== Commands =====

    /// Dispatch a transport command
    pub fn handle_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Stop => self.stop(),
            Command::TogglePlayPause => self.toggle_play_pause(),
            Command::PlayPrevious => self.play_previous(),
            Command::PlayNext => self.play_next(),
        }
    }

    /// Dispatch a symbolic remote-control command
    ///
    /// Unrecognized symbols are ignored. Inert when remote handling is
    /// disabled in the configuration.
    pub fn handle_remote_command(&mut self, symbol: &str) -> Result<()> {
        if !self.handle_remote_commands {
            return Ok(());
        }
        match Command::from_symbol(symbol) {
            Some(command) => self.handle_command(command),
            None => {
                debug!(symbol, "ignoring unrecognized command symbol");
                Ok(())
            }
        }
    }

    // ===== State queries =====

    /// Current transport state
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Cursor into the effective order (`None` = no track selected)
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_natural_index()
            .and_then(|natural| self.catalog.get(natural))
    }

    /// All tracks in natural order
    pub fn tracks(&self) -> &[Track] {
        self.catalog.tracks()
    }

    /// The shuffle permutation (empty while shuffle is off)
    pub fn play_order(&self) -> &[usize] {
        self.order.as_slice()
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Whether shuffle is enabled
    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle
    }

    /// Playhead monitor handle (running flag + interval)
    pub fn monitor(&self) -> &PlayheadMonitor {
        &self.monitor
    }

    /// Sampling period the host should drive [`tick`](Self::tick) at
    pub fn monitor_interval(&self) -> Duration {
        self.monitor.interval()
    }

    /// Change the sampling period
    pub fn set_monitor_interval(&mut self, interval: Duration) {
        self.monitor.set_interval(interval);
    }

    /// Elapsed time past which `play_previous` restarts instead
    pub fn restart_threshold(&self) -> Duration {
        self.restart_threshold
    }

    /// Change the restart threshold
    pub fn set_restart_threshold(&mut self, threshold: Duration) {
        self.restart_threshold = threshold;
    }

    /// Change the auto-play-on-shuffle flag
    pub fn set_auto_play_on_shuffle(&mut self, enabled: bool) {
        self.auto_play_on_shuffle = enabled;
    }

    /// Change the live-scrub flag
    pub fn set_live_scrub(&mut self, enabled: bool) {
        self.live_scrub = enabled;
    }

    /// Change whether symbolic remote commands are handled
    pub fn set_handle_remote_commands(&mut self, enabled: bool) {
        self.handle_remote_commands = enabled;
    }

    /// Generation fence of the most recent load
    ///
    /// Captured by the host when a load is issued and passed back through
    /// [`on_load_complete`](Self::on_load_complete).
    pub fn load_generation(&self) -> u64 {
        self.load_generation
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns everything emitted since the last drain; the host calls
    /// this after each command, notification, or tick.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are undrained events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Natural index the cursor currently resolves to
    fn current_natural_index(&self) -> Option<usize> {
        let slot = self.position?;
        if self.shuffle {
            self.order.resolve(slot)
        } else if slot < self.catalog.len() {
            Some(slot)
        } else {
            None
        }
    }

    /// Move the cursor and load the resolved track into the media source
    ///
    /// Bumps the load generation first so an in-flight completion for the
    /// previous load is discarded within this callback turn.
    fn load_slot(&mut self, slot: usize) -> Result<()> {
        self.position = Some(slot);
        let natural = self
            .current_natural_index()
            .ok_or(PlaybackError::NoTrackSelected)?;
        let track = self
            .catalog
            .get(natural)
            .cloned()
            .ok_or(PlaybackError::NoTrackSelected)?;

        self.load_generation += 1;
        debug!(
            natural,
            generation = self.load_generation,
            source = %track.source,
            "loading track"
        );
        self.source.load(&track.source)?;

        self.pending_events.push(PlaybackEvent::TrackLoaded {
            index: natural,
            track,
        });
        // Displayed times reset until the monitor (or the load completion)
        // reports real values for the new track.
        self.pending_events.push(PlaybackEvent::PlayheadUpdated {
            snapshot: PlayheadSnapshot::zeroed(),
        });
        Ok(())
    }

    fn set_state(&mut self, state: TransportState) {
        if self.state != state {
            debug!(from = ?self.state, to = ?state, "transport state change");
            self.state = state;
            self.pending_events
                .push(PlaybackEvent::StateChanged { state });
        }
    }

    fn emit_playhead(&mut self) {
        let snapshot = compute_snapshot(self.source.as_ref(), &self.scrub);
        self.pending_events
            .push(PlaybackEvent::PlayheadUpdated { snapshot });
    }
}
