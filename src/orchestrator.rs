//! Upload/analysis request lifecycle.
//!
//! The orchestrator owns the only write path into the analysis session. A
//! single analysis may be in flight at a time; while it runs, the trigger is
//! disabled, the loader is shown and stale stats are hidden. Whatever the
//! outcome, the interactive state is restored exactly once when the request
//! finishes.

use crate::analysis::{AnalysisClient, AnalysisError, AnalysisResult, UploadResponse};
use crate::playback::PlaybackAdapter;
use crate::state::SharedSession;
use crate::ui::{render_rows, StatsDisplay, UiSurface};
use std::cell::Cell;
use std::rc::Rc;

/// Coordinates the upload, the session commit and the dependent views.
pub struct Orchestrator<C, P, U> {
    client: C,
    playback: Rc<P>,
    surface: Rc<U>,
    session: SharedSession,

    /// Set while a request is outstanding
    in_flight: Cell<bool>,
}

impl<C, P, U> Orchestrator<C, P, U>
where
    C: AnalysisClient,
    P: PlaybackAdapter,
    U: UiSurface,
{
    pub fn new(client: C, playback: Rc<P>, surface: Rc<U>, session: SharedSession) -> Self {
        Self {
            client,
            playback,
            surface,
            session,
            in_flight: Cell::new(false),
        }
    }

    /// Returns true if an analysis is currently running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Uploads `file` for analysis and applies the result.
    ///
    /// Failures are reported to the user here; the returned error is for
    /// logging and tests. The session is only modified on success.
    pub async fn analyze(&self, file: Option<C::File>) -> Result<(), AnalysisError> {
        if self.in_flight.get() {
            log::debug!("Analysis already in flight, ignoring request");
            return Err(AnalysisError::Busy);
        }

        let Some(file) = file else {
            return Err(self.report(AnalysisError::NoFileSelected));
        };

        let _guard = InFlightGuard::enter(&self.in_flight, self.surface.as_ref());
        let started = web_time::Instant::now();

        let outcome = self
            .client
            .upload(&file)
            .await
            .and_then(UploadResponse::into_result);

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        match outcome {
            Ok(result) => {
                log::info!("Analysis completed in {:.0}ms", elapsed_ms);
                self.apply(result);
                Ok(())
            }
            Err(e) => {
                log::error!("Analysis failed after {:.0}ms: {}", elapsed_ms, e);
                Err(self.report(e))
            }
        }
    }

    /// Commits a successful result and refreshes every dependent view.
    fn apply(&self, result: AnalysisResult) {
        let stats = StatsDisplay::from_summary(&result.summary);
        let rows = render_rows(&result.records);
        let video_url = result.video_url.clone();

        self.session.borrow_mut().commit(result);

        self.surface.show_stats(&stats);
        self.playback.load(&video_url);
        self.surface.render_rows(&rows);
        self.surface.set_stats_visible(true);
    }

    fn report(&self, error: AnalysisError) -> AnalysisError {
        if let Some(notice) = error.user_notice() {
            self.surface.notify(&notice);
        }
        error
    }
}

/// Marks an analysis as running for as long as it is alive.
///
/// Entering disables the trigger, shows the loader and hides the stats panel;
/// dropping restores the trigger and hides the loader.
struct InFlightGuard<'a, U: UiSurface> {
    in_flight: &'a Cell<bool>,
    surface: &'a U,
}

impl<'a, U: UiSurface> InFlightGuard<'a, U> {
    fn enter(in_flight: &'a Cell<bool>, surface: &'a U) -> Self {
        in_flight.set(true);
        surface.set_trigger_enabled(false);
        surface.set_loading_visible(true);
        surface.set_stats_visible(false);
        Self { in_flight, surface }
    }
}

impl<U: UiSurface> Drop for InFlightGuard<'_, U> {
    fn drop(&mut self) {
        self.in_flight.set(false);
        self.surface.set_trigger_enabled(true);
        self.surface.set_loading_visible(false);
    }
}
