//! UI surface of the review page.
//!
//! The page markup is fixed; the controller only reads and writes a known set
//! of slots:
//! - Trigger button and loading indicator for the upload
//! - Stats panel: total frames, anomaly count, average gap
//! - Frame counter label under the video
//! - Results table body
//!
//! [`UiSurface`] abstracts those slots so the controller can be exercised
//! without a DOM.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(test)]
pub mod recording;
mod results_table;
mod stats_panel;

#[cfg(target_arch = "wasm32")]
pub use dom::{element_by_id, DomSurface};
pub use results_table::{render_rows, ResultRow, RowAction};
pub use stats_panel::StatsDisplay;

/// Addressable UI slots written by the controller.
pub trait UiSurface {
    /// Enables or disables the analyze trigger.
    fn set_trigger_enabled(&self, enabled: bool);

    /// Shows or hides the loading indicator.
    fn set_loading_visible(&self, visible: bool);

    /// Shows or hides the stats panel.
    fn set_stats_visible(&self, visible: bool);

    /// Writes the stats panel values.
    fn show_stats(&self, stats: &StatsDisplay);

    /// Replaces the results table contents.
    fn render_rows(&self, rows: &[ResultRow]);

    /// Writes the live frame counter label.
    fn set_frame_counter(&self, label: &str);

    /// Shows a blocking notice to the user.
    fn notify(&self, message: &str);
}
