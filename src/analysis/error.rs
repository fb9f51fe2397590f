//! Errors surfaced by the upload/analysis workflow.

/// Errors that can occur while requesting an analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// No video file was selected.
    NoFileSelected,
    /// Another analysis is already in flight.
    Busy,
    /// The server answered with an `error` field.
    Server(String),
    /// The request could not be completed.
    Transport(String),
    /// The response could not be decoded or lacked required fields.
    MalformedResponse(String),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::NoFileSelected => write!(f, "Please select a video file!"),
            AnalysisError::Busy => write!(f, "An analysis is already in progress"),
            AnalysisError::Server(msg) => write!(f, "{}", msg),
            AnalysisError::Transport(msg) => write!(f, "Request failed: {}", msg),
            AnalysisError::MalformedResponse(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl AnalysisError {
    /// Text of the blocking notice shown to the user, if any.
    ///
    /// Validation failures show the bare message; request failures are
    /// prefixed. A busy rejection is silent.
    pub fn user_notice(&self) -> Option<String> {
        match self {
            AnalysisError::Busy => None,
            AnalysisError::NoFileSelected => Some(self.to_string()),
            _ => Some(format!("System Error: {}", self)),
        }
    }
}
