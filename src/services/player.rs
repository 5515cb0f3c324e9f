/// How far the relative rewind/forward controls jump, in seconds.
pub const SKIP_SECONDS: f64 = 10.0;

/// Audio transport lifecycle. `Ready` carries whether playback is
/// running; pausing is not a separate top-level state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransportState {
    NoSource,
    SourceLoading,
    Ready { playing: bool },
}

/// Per-reader-page playback model, derived from the media element's
/// events. Never persisted; dropped with the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    state: TransportState,
    current_time: f64,
    duration: f64,
}

impl PlaybackState {
    /// No resolvable audio source; all controls render disabled.
    pub fn no_source() -> Self {
        Self {
            state: TransportState::NoSource,
            current_time: 0.0,
            duration: 0.0,
        }
    }

    /// A source was assigned; metadata is not available yet.
    pub fn with_source() -> Self {
        Self {
            state: TransportState::SourceLoading,
            current_time: 0.0,
            duration: 0.0,
        }
    }

    /// Assigning a (new) source resets the transport to loading.
    pub fn set_source(&mut self) {
        *self = Self::with_source();
    }

    /// The metadata-loaded event: duration is known, transport becomes
    /// ready (paused at the start).
    pub fn metadata_loaded(&mut self, duration: f64) {
        if self.state == TransportState::NoSource {
            return;
        }
        self.state = TransportState::Ready { playing: false };
        self.duration = duration.max(0.0);
        self.current_time = self.current_time.clamp(0.0, self.duration);
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, TransportState::Ready { .. })
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, TransportState::Ready { playing: true })
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Play/pause toggle; a no-op while not ready.
    pub fn toggle_play(&mut self) {
        if let TransportState::Ready { playing } = self.state {
            self.state = TransportState::Ready { playing: !playing };
        }
    }

    /// End of media: back to paused, positioned at the end.
    pub fn ended(&mut self) {
        if self.is_ready() {
            self.state = TransportState::Ready { playing: false };
            self.current_time = self.duration;
        }
    }

    /// Absolute seek, clamped to `[0, duration]`; a no-op while not
    /// ready.
    pub fn seek(&mut self, time: f64) {
        if self.is_ready() {
            self.current_time = time.clamp(0.0, self.duration);
        }
    }

    pub fn rewind(&mut self) {
        self.seek(self.current_time - SKIP_SECONDS);
    }

    pub fn forward(&mut self) {
        self.seek(self.current_time + SKIP_SECONDS);
    }

    /// Click-to-seek on the progress bar: `fraction` is the click's
    /// horizontal position over the bar width.
    pub fn seek_fraction(&mut self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.seek(fraction * self.duration);
    }

    /// Played share of the bar, in `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        if self.duration > 0.0 {
            self.current_time / self.duration
        } else {
            0.0
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::no_source()
    }
}
