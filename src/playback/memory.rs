//! In-memory playback clock.

use super::{PlaybackAdapter, TimeUpdateHandler};
use std::cell::{Cell, RefCell};

/// A simulated media element.
///
/// Mirrors the observable behavior of an HTML video element closely enough for
/// the controller: seeks are clamped to the media bounds, every position change
/// notifies time-update subscribers, and loading a source rewinds to zero and
/// pauses. Time only advances when [`MemoryPlayback::advance`] is called.
#[derive(Default)]
pub struct MemoryPlayback {
    current_time: Cell<f64>,
    duration: Cell<Option<f64>>,
    playing: Cell<bool>,
    source: RefCell<Option<String>>,
    load_count: Cell<u32>,
    handlers: RefCell<Vec<TimeUpdateHandler>>,
}

impl MemoryPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a player whose media has a known duration in seconds.
    pub fn with_duration(duration: f64) -> Self {
        let playback = Self::default();
        playback.duration.set(Some(duration));
        playback
    }

    /// The currently loaded source URL, if any.
    pub fn source(&self) -> Option<String> {
        self.source.borrow().clone()
    }

    /// Number of times a source has been loaded.
    pub fn load_count(&self) -> u32 {
        self.load_count.get()
    }

    /// Advances the clock by `seconds` if playing.
    ///
    /// Reaching the end of the media pauses playback, like the `ended` state
    /// of a real element.
    pub fn advance(&self, seconds: f64) {
        if !self.playing.get() {
            return;
        }
        let next = self.clamp(self.current_time.get() + seconds);
        self.current_time.set(next);
        if let Some(duration) = self.duration.get() {
            if next >= duration {
                self.playing.set(false);
            }
        }
        self.notify();
    }

    fn clamp(&self, seconds: f64) -> f64 {
        let lower = seconds.max(0.0);
        match self.duration.get() {
            Some(duration) => lower.min(duration),
            None => lower,
        }
    }

    /// Runs every handler with the list released, so a handler may seek or
    /// subscribe. Handlers added during the run are kept after the existing
    /// ones.
    fn notify(&self) {
        let mut handlers = std::mem::take(&mut *self.handlers.borrow_mut());
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut registered = self.handlers.borrow_mut();
        handlers.append(&mut registered);
        *registered = handlers;
    }
}

impl PlaybackAdapter for MemoryPlayback {
    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.current_time.set(self.clamp(seconds));
        self.notify();
    }

    fn play(&self) {
        self.playing.set(true);
    }

    fn pause(&self) {
        self.playing.set(false);
    }

    fn is_paused(&self) -> bool {
        !self.playing.get()
    }

    fn load(&self, url: &str) {
        *self.source.borrow_mut() = Some(url.to_string());
        self.load_count.set(self.load_count.get() + 1);
        self.playing.set(false);
        self.duration.set(None);
        self.current_time.set(0.0);
        self.notify();
    }

    fn on_time_update(&self, handler: TimeUpdateHandler) {
        self.handlers.borrow_mut().push(handler);
    }
}
