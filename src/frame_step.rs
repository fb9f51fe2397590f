//! Frame stepping, seeking and the live frame counter.
//!
//! All frame math reads the session's frame rate at call time, so stepping
//! and counting switch to a new video's rate as soon as its analysis commits.

use crate::playback::PlaybackAdapter;
use crate::state::SharedSession;
use crate::timecode::{frame_duration, ms_to_seconds, seconds_to_frame_index};
use crate::ui::{RowAction, UiSurface};
use std::rc::Rc;

/// Direction of a single-frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Backward,
}

impl StepDirection {
    fn sign(self) -> f64 {
        match self {
            StepDirection::Forward => 1.0,
            StepDirection::Backward => -1.0,
        }
    }
}

/// Formats the frame counter label.
pub fn frame_counter_label(frame: u64) -> String {
    format!("Frame: {}", frame)
}

/// Drives playback position from user controls and mirrors it to the
/// frame counter.
pub struct FrameStepper<P, U> {
    playback: Rc<P>,
    surface: Rc<U>,
    session: SharedSession,
}

impl<P, U> Clone for FrameStepper<P, U> {
    fn clone(&self) -> Self {
        Self {
            playback: self.playback.clone(),
            surface: self.surface.clone(),
            session: self.session.clone(),
        }
    }
}

impl<P: PlaybackAdapter + 'static, U: UiSurface + 'static> FrameStepper<P, U> {
    pub fn new(playback: Rc<P>, surface: Rc<U>, session: SharedSession) -> Self {
        Self {
            playback,
            surface,
            session,
        }
    }

    /// Registers the live counter on the adapter's time-update notifications.
    ///
    /// Call once at start-up.
    pub fn subscribe(&self) {
        let stepper = self.clone();
        self.playback
            .on_time_update(Box::new(move || stepper.refresh_counter()));
        self.refresh_counter();
    }

    /// Moves exactly one frame, pausing playback first.
    ///
    /// No clamping is done here; the media element bounds the position.
    pub fn step_frame(&self, direction: StepDirection) {
        self.playback.pause();

        let frame_rate = self.session.borrow().frame_rate();
        let step = direction.sign() * frame_duration(frame_rate);
        let target = self.playback.current_time() + step;
        log::debug!(
            "Step {:?} to {:.4}s at {} fps",
            direction,
            target,
            frame_rate
        );
        self.playback.set_current_time(target);
    }

    /// Seeks to a millisecond timestamp and resumes playback.
    pub fn seek_to(&self, timestamp_ms: f64) {
        self.playback.set_current_time(ms_to_seconds(timestamp_ms));
        self.playback.play();
    }

    /// Runs a results-row action.
    pub fn activate(&self, action: RowAction) {
        match action {
            RowAction::SeekTo { timestamp_ms } => self.seek_to(timestamp_ms),
        }
    }

    /// Plays when paused, pauses otherwise.
    pub fn toggle_play(&self) {
        if self.playback.is_paused() {
            self.playback.play();
        } else {
            self.playback.pause();
        }
    }

    /// Index of the frame at the current playback position.
    pub fn current_frame(&self) -> u64 {
        let frame_rate = self.session.borrow().frame_rate();
        seconds_to_frame_index(self.playback.current_time(), frame_rate)
    }

    /// Publishes the current frame to the counter label.
    pub fn refresh_counter(&self) {
        self.surface
            .set_frame_counter(&frame_counter_label(self.current_frame()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResult, AnalysisSummary};
    use crate::playback::MemoryPlayback;
    use crate::state::AnalysisSession;
    use crate::ui::recording::RecordingSurface;

    fn stepper_at(
        frame_rate: f64,
    ) -> (
        FrameStepper<MemoryPlayback, RecordingSurface>,
        Rc<MemoryPlayback>,
        Rc<RecordingSurface>,
    ) {
        let playback = Rc::new(MemoryPlayback::with_duration(60.0));
        let surface = Rc::new(RecordingSurface::new());
        let session = AnalysisSession::new(frame_rate).shared();
        let stepper = FrameStepper::new(playback.clone(), surface.clone(), session);
        (stepper, playback, surface)
    }

    #[test]
    fn test_step_forward_then_back_returns_within_one_frame() {
        for &rate in &[23.976, 24.0, 29.97, 30.0, 60.0] {
            let (stepper, playback, _) = stepper_at(rate);
            playback.set_current_time(2.0);

            stepper.step_frame(StepDirection::Forward);
            assert!((playback.current_time() - (2.0 + 1.0 / rate)).abs() < 1e-9);
            stepper.step_frame(StepDirection::Backward);

            assert!((playback.current_time() - 2.0).abs() < 1.0 / rate);
        }
    }

    #[test]
    fn test_step_pauses_playback() {
        let (stepper, playback, _) = stepper_at(30.0);
        playback.play();

        stepper.step_frame(StepDirection::Forward);

        assert!(playback.is_paused());
    }

    #[test]
    fn test_step_back_at_start_is_bounded_by_media() {
        let (stepper, playback, _) = stepper_at(30.0);

        stepper.step_frame(StepDirection::Backward);

        assert_eq!(playback.current_time(), 0.0);
    }

    #[test]
    fn test_row_activation_seeks_and_plays() {
        let (stepper, playback, _) = stepper_at(30.0);

        stepper.activate(RowAction::SeekTo {
            timestamp_ms: 5_230.0,
        });

        assert!((playback.current_time() - 5.23).abs() < 1e-12);
        assert!(!playback.is_paused());
    }

    #[test]
    fn test_toggle_play() {
        let (stepper, playback, _) = stepper_at(30.0);

        stepper.toggle_play();
        assert!(!playback.is_paused());
        stepper.toggle_play();
        assert!(playback.is_paused());
    }

    #[test]
    fn test_live_counter_follows_playback() {
        let (stepper, playback, surface) = stepper_at(24.0);
        stepper.subscribe();
        assert_eq!(*surface.frame_counter.borrow(), "Frame: 0");

        playback.set_current_time(2.5);
        assert_eq!(*surface.frame_counter.borrow(), "Frame: 60");

        playback.play();
        playback.advance(0.5);
        assert_eq!(*surface.frame_counter.borrow(), "Frame: 72");

        // Paused position stays fixed
        playback.pause();
        playback.advance(1.0);
        assert_eq!(*surface.frame_counter.borrow(), "Frame: 72");
    }

    #[test]
    fn test_counter_uses_committed_frame_rate() {
        let playback = Rc::new(MemoryPlayback::with_duration(60.0));
        let surface = Rc::new(RecordingSurface::new());
        let session = AnalysisSession::new(30.0).shared();
        let stepper = FrameStepper::new(playback.clone(), surface.clone(), session.clone());
        stepper.subscribe();

        session.borrow_mut().commit(AnalysisResult {
            summary: AnalysisSummary {
                frame_rate: 25.0,
                total_frames: 250,
                issues_found: 0,
                average_gap_ms: 40.0,
            },
            records: Vec::new(),
            video_url: "/v.mp4".to_string(),
        });
        playback.set_current_time(4.0);

        assert_eq!(stepper.current_frame(), 100);
        assert_eq!(*surface.frame_counter.borrow(), "Frame: 100");
    }
}
