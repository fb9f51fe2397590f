//! Controller configuration.
//!
//! Defaults match the stock review page. A page may embed overrides as JSON
//! in a `<script id="review-config" type="application/json">` element, and
//! the URL query string can override individual values:
//!
//! - `endpoint`: upload URL
//! - `fps`: frame rate used before the first analysis completes
//! - `log`: log level (`error`, `warn`, `info`, `debug`, `trace`)

use serde::Deserialize;
use std::str::FromStr;

/// Id of the optional inline JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "review-config";

/// Element ids (or selectors) of the page slots the controller drives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlotIds {
    pub video_input: String,
    pub analyze_button: String,
    pub loader: String,
    pub stats_bar: String,
    pub total_frames: String,
    pub anomaly_count: String,
    pub avg_gap: String,
    pub video: String,
    pub frame_counter: String,
    /// CSS selector of the results table body
    pub results_body: String,
    pub play_pause_button: String,
    pub prev_frame_button: String,
    pub next_frame_button: String,
}

impl Default for SlotIds {
    fn default() -> Self {
        Self {
            video_input: "videoInput".to_string(),
            analyze_button: "analyzeBtn".to_string(),
            loader: "loader".to_string(),
            stats_bar: "statsBar".to_string(),
            total_frames: "totalFrames".to_string(),
            anomaly_count: "anomalyCount".to_string(),
            avg_gap: "avgGap".to_string(),
            video: "outputVideo".to_string(),
            frame_counter: "currentFrameDisplay".to_string(),
            results_body: "#resultsTable tbody".to_string(),
            play_pause_button: "playPauseBtn".to_string(),
            prev_frame_button: "prevFrameBtn".to_string(),
            next_frame_button: "nextFrameBtn".to_string(),
        }
    }
}

/// Review controller configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// URL the video is POSTed to
    pub upload_endpoint: String,

    /// Frame rate assumed until an analysis reports the real one
    pub default_frame_rate: f64,

    /// Log level name
    pub log_level: String,

    /// Page slot ids
    pub slots: SlotIds,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            upload_endpoint: "/upload".to_string(),
            default_frame_rate: 30.0,
            log_level: "info".to_string(),
            slots: SlotIds::default(),
        }
    }
}

impl ReviewConfig {
    /// Parses an inline JSON configuration; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Applies `key=value` overrides from a URL query string.
    ///
    /// Unknown keys and unparsable values are ignored.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return;
        }

        for pair in query.split('&') {
            let mut kv = pair.splitn(2, '=');
            let key = kv.next().unwrap_or("");
            let value = kv.next().unwrap_or("");
            match key {
                "endpoint" if !value.is_empty() => self.upload_endpoint = value.to_string(),
                "fps" => match value.parse::<f64>() {
                    Ok(fps) if fps > 0.0 && fps.is_finite() => self.default_frame_rate = fps,
                    _ => log::warn!("Ignoring invalid fps override: {:?}", value),
                },
                "log" if log::LevelFilter::from_str(value).is_ok() => {
                    self.log_level = value.to_string()
                }
                _ => {}
            }
        }
    }

    /// Parsed log level, falling back to `Info`.
    pub fn log_level(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }

    /// Loads configuration from the current page.
    #[cfg(target_arch = "wasm32")]
    pub fn from_page() -> Self {
        let mut config = Self::default();

        let Some(window) = web_sys::window() else {
            return config;
        };

        if let Some(json) = window
            .document()
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|e| e.text_content())
        {
            match Self::from_json(&json) {
                Ok(parsed) => config = parsed,
                Err(e) => log::warn!("Failed to parse #{}: {}", CONFIG_ELEMENT_ID, e),
            }
        }

        if let Ok(search) = window.location().search() {
            config.apply_query(&search);
        }

        config
    }

    /// Defaults only on native builds.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_page() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = ReviewConfig::default();
        assert_eq!(config.upload_endpoint, "/upload");
        assert_eq!(config.default_frame_rate, 30.0);
        assert_eq!(config.slots.video, "outputVideo");
        assert_eq!(config.slots.results_body, "#resultsTable tbody");
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_apply_query_overrides() {
        let mut config = ReviewConfig::default();
        config.apply_query("?endpoint=/api/upload&fps=25&log=debug&other=1");

        assert_eq!(config.upload_endpoint, "/api/upload");
        assert_eq!(config.default_frame_rate, 25.0);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_apply_query_ignores_bad_values() {
        let mut config = ReviewConfig::default();
        config.apply_query("fps=-3&log=loud&endpoint=");

        assert_eq!(config, ReviewConfig::default());
    }

    #[test]
    fn test_from_json_partial() {
        let config = ReviewConfig::from_json(
            r#"{"upload_endpoint": "/analyze", "slots": {"video": "player"}}"#,
        )
        .expect("valid config");

        assert_eq!(config.upload_endpoint, "/analyze");
        assert_eq!(config.slots.video, "player");
        assert_eq!(config.slots.loader, "loader");
        assert_eq!(config.default_frame_rate, 30.0);
    }
}
