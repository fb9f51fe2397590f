//! Recording UI surface for tests.

use super::{ResultRow, StatsDisplay, UiSurface};
use std::cell::{Cell, RefCell};

/// A [`UiSurface`] that records every write.
pub struct RecordingSurface {
    pub trigger_enabled: Cell<bool>,
    pub loading_visible: Cell<bool>,
    pub stats_visible: Cell<bool>,
    /// Set if the trigger was ever disabled
    pub trigger_was_disabled: Cell<bool>,
    pub stats: RefCell<Option<StatsDisplay>>,
    pub rows: RefCell<Vec<ResultRow>>,
    pub frame_counter: RefCell<String>,
    pub notices: RefCell<Vec<String>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            trigger_enabled: Cell::new(true),
            loading_visible: Cell::new(false),
            stats_visible: Cell::new(false),
            trigger_was_disabled: Cell::new(false),
            stats: RefCell::new(None),
            rows: RefCell::new(Vec::new()),
            frame_counter: RefCell::new(String::new()),
            notices: RefCell::new(Vec::new()),
        }
    }
}

impl UiSurface for RecordingSurface {
    fn set_trigger_enabled(&self, enabled: bool) {
        if !enabled {
            self.trigger_was_disabled.set(true);
        }
        self.trigger_enabled.set(enabled);
    }

    fn set_loading_visible(&self, visible: bool) {
        self.loading_visible.set(visible);
    }

    fn set_stats_visible(&self, visible: bool) {
        self.stats_visible.set(visible);
    }

    fn show_stats(&self, stats: &StatsDisplay) {
        *self.stats.borrow_mut() = Some(stats.clone());
    }

    fn render_rows(&self, rows: &[ResultRow]) {
        *self.rows.borrow_mut() = rows.to_vec();
    }

    fn set_frame_counter(&self, label: &str) {
        *self.frame_counter.borrow_mut() = label.to_string();
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}
