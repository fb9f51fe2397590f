//! Frame-gap analysis service integration.
//!
//! This module provides:
//! - The analysis result model and its JSON wire format
//! - The [`AnalysisClient`] seam used by the orchestrator
//! - A `fetch`-based client for WASM targets

mod client;
mod error;
mod types;

pub use client::AnalysisClient;
#[cfg(target_arch = "wasm32")]
pub use client::FetchClient;
pub use error::AnalysisError;
pub use types::{AnalysisResult, AnalysisSummary, AnomalyRecord, AnomalyStatus, UploadResponse};
