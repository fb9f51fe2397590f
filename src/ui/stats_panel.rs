//! Stats panel formatting.

use crate::analysis::AnalysisSummary;
use crate::timecode::format_ms_label;

/// Display strings for the stats panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDisplay {
    pub total_frames: String,
    pub issues_found: String,
    /// Average gap with its `ms` suffix
    pub average_gap: String,
}

impl StatsDisplay {
    pub fn from_summary(summary: &AnalysisSummary) -> Self {
        Self {
            total_frames: summary.total_frames.to_string(),
            issues_found: summary.issues_found.to_string(),
            average_gap: format_ms_label(summary.average_gap_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_summary() {
        let stats = StatsDisplay::from_summary(&AnalysisSummary {
            frame_rate: 24.0,
            total_frames: 480,
            issues_found: 3,
            average_gap_ms: 41.6,
        });

        assert_eq!(stats.total_frames, "480");
        assert_eq!(stats.issues_found, "3");
        assert_eq!(stats.average_gap, "41.6ms");
    }
}
