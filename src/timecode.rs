//! Time and frame conversions.
//!
//! Every piece of frame-rate dependent arithmetic in the application goes
//! through these functions so that rounding stays identical between the live
//! frame counter, manual frame stepping, and table-row seeking.

/// Milliseconds per minute.
const MS_PER_MINUTE: f64 = 60_000.0;

/// Milliseconds per second.
const MS_PER_SECOND: f64 = 1_000.0;

/// Formats a millisecond timestamp as `MM:SS.mmm`.
///
/// Minutes are at least two digits wide but are never wrapped into hours,
/// so one hour renders as `60:00.000`. Each component is floored.
pub fn format_clock_time(ms: f64) -> String {
    let minutes = (ms / MS_PER_MINUTE).floor() as u64;
    let seconds = ((ms % MS_PER_MINUTE) / MS_PER_SECOND).floor() as u64;
    let millis = (ms % MS_PER_SECOND).floor() as u64;
    format!("{:02}:{:02}.{:03}", minutes, seconds, millis)
}

/// Converts a frame index to its presentation time in seconds.
pub fn frame_index_to_seconds(frame_index: u64, frame_rate: f64) -> f64 {
    frame_index as f64 / frame_rate
}

/// Converts a playback time in seconds to the index of the frame on screen.
pub fn seconds_to_frame_index(seconds: f64, frame_rate: f64) -> u64 {
    (seconds * frame_rate).floor() as u64
}

/// Duration of a single frame in seconds.
pub fn frame_duration(frame_rate: f64) -> f64 {
    frame_index_to_seconds(1, frame_rate)
}

/// Converts a millisecond timestamp to media-element seconds.
pub fn ms_to_seconds(ms: f64) -> f64 {
    ms / MS_PER_SECOND
}

/// Formats a millisecond quantity as a label, e.g. `41.6ms`.
///
/// Uses the shortest representation that round-trips, so whole values
/// render without a fractional part (`40ms`).
pub fn format_ms_label(ms: f64) -> String {
    format!("{}ms", ms)
}
