//! Results table rendering.
//!
//! Converts analysis records into row descriptors. Rows keep server order and
//! every row seeks the video to its frame when activated.

use crate::analysis::{AnomalyRecord, AnomalyStatus};
use crate::timecode::{format_clock_time, format_ms_label};

/// Visual category of a results row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    /// Dropped frame or timing lag
    Warning,
    /// Frozen or merged frame
    Merge,
}

impl RowClass {
    /// CSS class applied to the table row.
    pub fn css_class(&self) -> &'static str {
        match self {
            RowClass::Warning => "warning-row",
            RowClass::Merge => "merge-row",
        }
    }

    fn for_status(status: &AnomalyStatus) -> Option<Self> {
        match status {
            AnomalyStatus::FrameDropOrLag => Some(RowClass::Warning),
            AnomalyStatus::FrozenOrMerge => Some(RowClass::Merge),
            AnomalyStatus::Normal | AnomalyStatus::Other(_) => None,
        }
    }
}

/// What activating a row does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowAction {
    /// Seek to the timestamp (milliseconds) and resume playback
    SeekTo { timestamp_ms: f64 },
}

impl RowAction {
    /// Data attribute carrying the action on a rendered row.
    pub const ATTRIBUTE: &'static str = "data-seek-ms";

    /// Encodes the action as the row's attribute value.
    pub fn to_attribute(&self) -> String {
        match self {
            RowAction::SeekTo { timestamp_ms } => timestamp_ms.to_string(),
        }
    }

    /// Decodes an attribute value written by [`RowAction::to_attribute`].
    pub fn from_attribute(value: &str) -> Option<Self> {
        let timestamp_ms: f64 = value.parse().ok()?;
        if !timestamp_ms.is_finite() || timestamp_ms < 0.0 {
            return None;
        }
        Some(RowAction::SeekTo { timestamp_ms })
    }
}

/// A rendered results table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub frame_index: u64,
    pub clock_label: String,
    pub gap_label: String,
    pub status_label: String,
    pub visual_class: Option<RowClass>,
    pub action: RowAction,
}

impl ResultRow {
    fn from_record(record: &AnomalyRecord) -> Self {
        Self {
            frame_index: record.frame_index,
            clock_label: format_clock_time(record.timestamp_ms),
            gap_label: format_ms_label(record.gap_ms),
            status_label: record.status.label().to_string(),
            visual_class: RowClass::for_status(&record.status),
            action: RowAction::SeekTo {
                timestamp_ms: record.timestamp_ms,
            },
        }
    }
}

/// Renders records into table rows, preserving order.
pub fn render_rows(records: &[AnomalyRecord]) -> Vec<ResultRow> {
    records.iter().map(ResultRow::from_record).collect()
}

/// Hands each row to `append` in order and returns how many were appended.
///
/// A row that fails is logged and skipped; the rows after it are still
/// appended.
pub fn append_rows<E: std::fmt::Debug>(
    rows: &[ResultRow],
    mut append: impl FnMut(&ResultRow) -> Result<(), E>,
) -> usize {
    let mut appended = 0;
    for row in rows {
        match append(row) {
            Ok(()) => appended += 1,
            Err(e) => log::error!("Failed to render frame {}: {:?}", row.frame_index, e),
        }
    }
    appended
}
