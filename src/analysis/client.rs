//! Upload transport for the analysis service.

use super::{AnalysisError, UploadResponse};
use std::future::Future;

/// Sends a video to the analysis service.
///
/// Exactly one request is made per call; there is no retry, backoff or
/// timeout. The response body is decoded whatever the HTTP status, because
/// the service reports failures as JSON with an `error` field.
pub trait AnalysisClient {
    /// Handle to the file being uploaded.
    type File;

    fn upload(
        &self,
        file: &Self::File,
    ) -> impl Future<Output = Result<UploadResponse, AnalysisError>>;
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use super::{AnalysisClient, AnalysisError, UploadResponse};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{FormData, Request, RequestInit, Response};

    /// Multipart form field carrying the video.
    const VIDEO_FIELD: &str = "video";

    /// Analysis client using the browser `fetch` API.
    #[derive(Clone)]
    pub struct FetchClient {
        endpoint: String,
    }

    impl FetchClient {
        pub fn new(endpoint: impl Into<String>) -> Self {
            Self {
                endpoint: endpoint.into(),
            }
        }

        async fn post(&self, file: &web_sys::File) -> Result<String, JsValue> {
            let form = FormData::new()?;
            form.append_with_blob_and_filename(VIDEO_FIELD, file, &file.name())?;

            let init = RequestInit::new();
            init.set_method("POST");
            init.set_body(&form);

            let request = Request::new_with_str_and_init(&self.endpoint, &init)?;
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
            let response: Response = JsFuture::from(window.fetch_with_request(&request))
                .await?
                .dyn_into()?;

            log::debug!("Upload answered with HTTP {}", response.status());

            let text = JsFuture::from(response.text()?).await?;
            text.as_string()
                .ok_or_else(|| JsValue::from_str("Response body was not text"))
        }
    }

    impl AnalysisClient for FetchClient {
        type File = web_sys::File;

        async fn upload(&self, file: &web_sys::File) -> Result<UploadResponse, AnalysisError> {
            log::info!(
                "Uploading {} ({} bytes) to {}",
                file.name(),
                file.size(),
                self.endpoint
            );

            let body = self
                .post(file)
                .await
                .map_err(|e| AnalysisError::Transport(js_error_message(&e)))?;

            UploadResponse::from_json(&body)
        }
    }

    /// Extracts a readable message from a thrown JS value.
    fn js_error_message(value: &JsValue) -> String {
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return String::from(error.message());
        }
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchClient;
