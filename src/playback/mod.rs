//! Playback abstraction over the host media element.
//!
//! This module defines the capability set the review controller needs from a
//! video player. On WASM targets it is backed by the page's `<video>` element.
//! An in-memory implementation is provided for native builds and tests.
//!
//! All operations are direct delegations: there is no retry logic, and media
//! failures (unplayable sources, decode errors) surface as host-level events
//! rather than through this interface.

#[cfg(not(target_arch = "wasm32"))]
mod memory;
#[cfg(target_arch = "wasm32")]
mod video_element;

#[cfg(not(target_arch = "wasm32"))]
pub use memory::MemoryPlayback;
#[cfg(target_arch = "wasm32")]
pub use video_element::VideoElementPlayback;

/// Callback invoked whenever the playback position changes.
pub type TimeUpdateHandler = Box<dyn FnMut()>;

/// Capability wrapper around a media player.
///
/// Note: This trait does not require `Send` bounds since WASM is single-threaded
/// and JS types cannot be sent between threads.
pub trait PlaybackAdapter {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position. The host clamps to `[0, duration]`.
    fn set_current_time(&self, seconds: f64);

    /// Starts or resumes playback.
    fn play(&self);

    /// Pauses playback, keeping the current position.
    fn pause(&self);

    /// Whether playback is currently paused.
    fn is_paused(&self) -> bool;

    /// Replaces the media source and starts loading it.
    fn load(&self, url: &str);

    /// Registers a handler for position-change notifications.
    ///
    /// Handlers live as long as the adapter; there is no unsubscribe.
    fn on_time_update(&self, handler: TimeUpdateHandler);
}
