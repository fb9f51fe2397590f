//! `<video>` element backed playback for WASM targets.

use super::{PlaybackAdapter, TimeUpdateHandler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlVideoElement;

/// Playback adapter delegating to an `HtmlVideoElement`.
#[derive(Clone)]
pub struct VideoElementPlayback {
    video: HtmlVideoElement,
}

impl VideoElementPlayback {
    pub fn new(video: HtmlVideoElement) -> Self {
        Self { video }
    }

    /// Looks up the video element by id in the given document.
    pub fn from_document(document: &web_sys::Document, id: &str) -> Result<Self, JsValue> {
        let video = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("Missing video element #{}", id)))?
            .dyn_into::<HtmlVideoElement>()
            .map_err(|_| JsValue::from_str(&format!("#{} is not a video element", id)))?;
        Ok(Self::new(video))
    }
}

impl PlaybackAdapter for VideoElementPlayback {
    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.video.set_current_time(seconds);
    }

    fn play(&self) {
        // The returned promise rejects on autoplay policy or unplayable media;
        // both are host-level events the controller does not handle.
        match self.video.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        log::debug!("Video play() rejected: {:?}", e);
                    }
                });
            }
            Err(e) => log::debug!("Video play() threw: {:?}", e),
        }
    }

    fn pause(&self) {
        if let Err(e) = self.video.pause() {
            log::debug!("Video pause() threw: {:?}", e);
        }
    }

    fn is_paused(&self) -> bool {
        self.video.paused()
    }

    fn load(&self, url: &str) {
        self.video.set_src(url);
        self.video.load();
        log::info!("Loading video source: {}", url);
    }

    fn on_time_update(&self, mut handler: TimeUpdateHandler) {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            handler();
        }) as Box<dyn FnMut(_)>);

        if let Err(e) = self
            .video
            .add_event_listener_with_callback("timeupdate", closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to subscribe to timeupdate: {:?}", e);
        }
        closure.forget(); // Listener lives for the page lifetime
    }
}
