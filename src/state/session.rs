//! Analysis session state.

use crate::analysis::AnalysisResult;
use std::cell::RefCell;
use std::rc::Rc;

/// Session handle shared between the orchestrator, the frame stepper and
/// the DOM bindings.
///
/// The page runs on a single-threaded event loop, so `Rc<RefCell<_>>` is
/// sufficient. Borrows must never be held across an `.await`.
pub type SharedSession = Rc<RefCell<AnalysisSession>>;

/// The most recently completed analysis and the frame rate derived from it.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    /// Frame rate used for stepping and frame counting
    frame_rate: f64,

    /// Last successful analysis, if any
    result: Option<AnalysisResult>,
}

impl AnalysisSession {
    /// Creates an empty session using `default_frame_rate` until the first
    /// analysis completes.
    ///
    /// A non-positive default is replaced with 30 fps.
    pub fn new(default_frame_rate: f64) -> Self {
        let frame_rate = if default_frame_rate > 0.0 && default_frame_rate.is_finite() {
            default_frame_rate
        } else {
            log::warn!(
                "Ignoring invalid default frame rate {}, using 30",
                default_frame_rate
            );
            30.0
        };
        Self {
            frame_rate,
            result: None,
        }
    }

    /// Wraps the session for sharing.
    pub fn shared(self) -> SharedSession {
        Rc::new(RefCell::new(self))
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Replaces the frame rate and result together.
    ///
    /// If the result carries no usable frame rate, the current one is kept and
    /// written back into the stored summary so the two never disagree.
    pub fn commit(&mut self, mut result: AnalysisResult) {
        let reported = result.summary.frame_rate;
        if reported > 0.0 && reported.is_finite() {
            self.frame_rate = reported;
        } else {
            log::warn!(
                "Server reported frame rate {}, keeping {} fps",
                reported,
                self.frame_rate
            );
            result.summary.frame_rate = self.frame_rate;
        }

        log::info!(
            "Committed analysis: {} records at {} fps",
            result.records.len(),
            self.frame_rate
        );
        self.result = Some(result);
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(30.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisSummary;

    fn result_with_rate(frame_rate: f64) -> AnalysisResult {
        AnalysisResult {
            summary: AnalysisSummary {
                frame_rate,
                total_frames: 10,
                issues_found: 1,
                average_gap_ms: 40.0,
            },
            records: Vec::new(),
            video_url: "/static/uploads/out.mp4".to_string(),
        }
    }

    #[test]
    fn test_defaults() {
        let session = AnalysisSession::default();
        assert_eq!(session.frame_rate(), 30.0);
        assert!(session.result().is_none());

        assert_eq!(AnalysisSession::new(0.0).frame_rate(), 30.0);
    }

    #[test]
    fn test_commit_replaces_rate_and_result() {
        let mut session = AnalysisSession::new(30.0);
        session.commit(result_with_rate(24.0));

        assert_eq!(session.frame_rate(), 24.0);
        let result = session.result().expect("committed");
        assert_eq!(result.summary.frame_rate, session.frame_rate());
    }

    #[test]
    fn test_commit_keeps_prior_rate_when_missing() {
        let mut session = AnalysisSession::new(30.0);
        session.commit(result_with_rate(25.0));
        session.commit(result_with_rate(0.0));

        assert_eq!(session.frame_rate(), 25.0);
        let result = session.result().expect("committed");
        assert_eq!(result.summary.frame_rate, 25.0);
    }
}
