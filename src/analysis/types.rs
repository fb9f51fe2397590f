//! Analysis result model and wire format.
//!
//! The upload endpoint answers with a loosely shaped JSON object. This module
//! decodes it into [`UploadResponse`] and converts that into a validated
//! [`AnalysisResult`] the rest of the application can rely on.

use super::AnalysisError;
use serde::Deserialize;

/// Aggregate figures for one analyzed video.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    /// Frames per second reported by the server
    pub frame_rate: f64,
    /// Number of frames decoded
    pub total_frames: u64,
    /// Number of frames whose status is not normal
    pub issues_found: u64,
    /// Mean gap between consecutive frame timestamps, in milliseconds
    pub average_gap_ms: f64,
}

/// Classification of a single frame's timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyStatus {
    Normal,
    /// Timestamp gap exceeded the jitter threshold
    FrameDropOrLag,
    /// Frame is near-identical to its predecessor
    FrozenOrMerge,
    /// Any other server-defined category, passed through as-is
    Other(String),
}

impl AnomalyStatus {
    const NORMAL: &'static str = "Normal";
    const FRAME_DROP_OR_LAG: &'static str = "Frame Drop/Lag";
    const FROZEN_OR_MERGE: &'static str = "Frozen/Merge";

    /// Server-facing label for this status.
    pub fn label(&self) -> &str {
        match self {
            AnomalyStatus::Normal => Self::NORMAL,
            AnomalyStatus::FrameDropOrLag => Self::FRAME_DROP_OR_LAG,
            AnomalyStatus::FrozenOrMerge => Self::FROZEN_OR_MERGE,
            AnomalyStatus::Other(label) => label,
        }
    }
}

impl From<String> for AnomalyStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            Self::NORMAL => AnomalyStatus::Normal,
            Self::FRAME_DROP_OR_LAG => AnomalyStatus::FrameDropOrLag,
            Self::FROZEN_OR_MERGE => AnomalyStatus::FrozenOrMerge,
            _ => AnomalyStatus::Other(label),
        }
    }
}

/// Timing information for a single decoded frame.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnomalyRecord {
    #[serde(rename = "frame")]
    pub frame_index: u64,
    /// Presentation timestamp in milliseconds
    #[serde(rename = "timestamp")]
    pub timestamp_ms: f64,
    /// Distance to the previous frame's timestamp in milliseconds
    #[serde(rename = "gap")]
    pub gap_ms: f64,
    #[serde(with = "status_label")]
    pub status: AnomalyStatus,
}

/// A complete, successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub summary: AnalysisSummary,
    /// Per-frame records in server order
    pub records: Vec<AnomalyRecord>,
    /// Playable URL of the annotated output video
    pub video_url: String,
}

/// Summary object as sent by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct WireSummary {
    #[serde(default)]
    pub fps: Option<f64>,
    pub total_frames: u64,
    pub issues_found: u64,
    pub avg_gap: f64,
}

/// Raw upload endpoint response.
///
/// Every field is optional on the wire. A present `error` takes precedence
/// over everything else.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub summary: Option<WireSummary>,
    #[serde(default)]
    pub results: Option<Vec<AnomalyRecord>>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl UploadResponse {
    /// Decodes a response body.
    pub fn from_json(body: &str) -> Result<Self, AnalysisError> {
        serde_json::from_str(body).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
    }

    /// Validates the response into an [`AnalysisResult`].
    ///
    /// A missing or non-positive `fps` is carried as `0.0`; the session
    /// substitutes its current frame rate when committing.
    pub fn into_result(self) -> Result<AnalysisResult, AnalysisError> {
        if let Some(message) = self.error {
            return Err(AnalysisError::Server(message));
        }

        let summary = self
            .summary
            .ok_or_else(|| AnalysisError::MalformedResponse("Missing summary".to_string()))?;
        let records = self
            .results
            .ok_or_else(|| AnalysisError::MalformedResponse("Missing results".to_string()))?;
        let video_url = self
            .video_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AnalysisError::MalformedResponse("Missing video URL".to_string()))?;

        Ok(AnalysisResult {
            summary: AnalysisSummary {
                frame_rate: summary.fps.filter(|fps| *fps > 0.0).unwrap_or(0.0),
                total_frames: summary.total_frames,
                issues_found: summary.issues_found,
                average_gap_ms: summary.avg_gap,
            },
            records,
            video_url,
        })
    }
}

/// Serde helper module mapping status labels to [`AnomalyStatus`].
mod status_label {
    use super::AnomalyStatus;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<AnomalyStatus, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(AnomalyStatus::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {"frame": 0, "timestamp": 0.0, "gap": 0, "status": "Normal"},
            {"frame": 1, "timestamp": 41.67, "gap": 41.67, "status": "Normal"},
            {"frame": 2, "timestamp": 125.0, "gap": 83.33, "status": "Frame Drop/Lag"},
            {"frame": 3, "timestamp": 166.67, "gap": 41.67, "status": "Frozen/Merge"}
        ],
        "summary": {"total_frames": 4, "issues_found": 2, "avg_gap": 41.67, "fps": 24.0},
        "video_url": "/static/uploads/out_1700000000.mp4"
    }"#;

    #[test]
    fn test_decode_success_response() {
        let result = UploadResponse::from_json(SAMPLE)
            .and_then(UploadResponse::into_result)
            .expect("valid response");

        assert_eq!(result.summary.frame_rate, 24.0);
        assert_eq!(result.summary.total_frames, 4);
        assert_eq!(result.summary.issues_found, 2);
        assert_eq!(result.records.len(), 4);
        assert_eq!(result.records[2].status, AnomalyStatus::FrameDropOrLag);
        assert_eq!(result.records[3].status, AnomalyStatus::FrozenOrMerge);
        assert_eq!(result.video_url, "/static/uploads/out_1700000000.mp4");
    }

    #[test]
    fn test_error_field_wins() {
        let body = r#"{"error": "corrupt file", "video_url": "/x.mp4"}"#;
        let err = UploadResponse::from_json(body)
            .and_then(UploadResponse::into_result)
            .unwrap_err();

        assert_eq!(err, AnalysisError::Server("corrupt file".to_string()));
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let body = r#"{"summary": {"total_frames": 1, "issues_found": 0, "avg_gap": 0, "fps": 30}}"#;
        let err = UploadResponse::from_json(body)
            .and_then(UploadResponse::into_result)
            .unwrap_err();

        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = UploadResponse::from_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn test_unknown_status_passes_through() {
        let body = r#"{"frame": 7, "timestamp": 291.67, "gap": 41.67, "status": "Duplicate"}"#;
        let record: AnomalyRecord = serde_json::from_str(body).expect("valid record");

        assert_eq!(record.status, AnomalyStatus::Other("Duplicate".to_string()));
        assert_eq!(record.status.label(), "Duplicate");
    }

    #[test]
    fn test_missing_fps_is_left_for_session() {
        let body = r#"{
            "results": [],
            "summary": {"total_frames": 0, "issues_found": 0, "avg_gap": 0},
            "video_url": "/v.mp4"
        }"#;
        let result = UploadResponse::from_json(body)
            .and_then(UploadResponse::into_result)
            .expect("valid response");

        assert_eq!(result.summary.frame_rate, 0.0);
    }
}
