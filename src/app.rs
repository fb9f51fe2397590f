//! Review page wiring.
//!
//! Resolves the page slots, builds the controller components around one shared
//! session, and binds DOM events to them. Event listeners live for the page
//! lifetime.

use crate::analysis::FetchClient;
use crate::config::ReviewConfig;
use crate::frame_step::{FrameStepper, StepDirection};
use crate::orchestrator::Orchestrator;
use crate::playback::VideoElementPlayback;
use crate::state::AnalysisSession;
use crate::ui::{element_by_id, DomSurface, RowAction};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

type ReviewOrchestrator = Orchestrator<FetchClient, VideoElementPlayback, DomSurface>;
type ReviewStepper = FrameStepper<VideoElementPlayback, DomSurface>;

/// Builds the controller and attaches it to the current page.
pub fn mount(config: &ReviewConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let surface = DomSurface::from_document(window, document.clone(), &config.slots)?;
    let surface = Rc::new(surface);
    let playback = VideoElementPlayback::from_document(&document, &config.slots.video)?;
    let playback = Rc::new(playback);
    let session = AnalysisSession::new(config.default_frame_rate).shared();

    let stepper = FrameStepper::new(playback.clone(), surface.clone(), session.clone());
    stepper.subscribe();

    let client = FetchClient::new(config.upload_endpoint.clone());
    let orchestrator = Orchestrator::new(client, playback, surface.clone(), session);
    let orchestrator = Rc::new(orchestrator);

    bind_analyze(&surface, &orchestrator)?;
    bind_rows(&surface, &stepper)?;
    bind_controls(&document, config, &stepper)?;

    log::info!(
        "Review controller mounted (endpoint {}, default {} fps)",
        config.upload_endpoint,
        config.default_frame_rate
    );
    Ok(())
}

fn bind_analyze(
    surface: &Rc<DomSurface>,
    orchestrator: &Rc<ReviewOrchestrator>,
) -> Result<(), JsValue> {
    let handler_surface = surface.clone();
    let orchestrator = orchestrator.clone();
    on_click(surface.trigger(), move |_event| {
        let file = handler_surface.selected_file();
        let orchestrator = orchestrator.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = orchestrator.analyze(file).await {
                log::debug!("Analyze request ended without a result: {}", e);
            }
        });
    })
}

/// Delegates row clicks from the table body to the stepper.
///
/// A single listener survives every re-render of the rows.
fn bind_rows(surface: &Rc<DomSurface>, stepper: &ReviewStepper) -> Result<(), JsValue> {
    let stepper = stepper.clone();
    on_click(surface.results_body(), move |event| {
        let action = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("tr").ok().flatten())
            .and_then(|row| row.get_attribute(RowAction::ATTRIBUTE))
            .and_then(|value| RowAction::from_attribute(&value));

        if let Some(action) = action {
            stepper.activate(action);
        }
    })
}

/// Binds play/pause and frame-step buttons. Missing buttons are skipped.
fn bind_controls(
    document: &Document,
    config: &ReviewConfig,
    stepper: &ReviewStepper,
) -> Result<(), JsValue> {
    let controls: [(&str, Box<dyn Fn(&ReviewStepper)>); 3] = [
        (
            config.slots.play_pause_button.as_str(),
            Box::new(|s: &ReviewStepper| s.toggle_play()),
        ),
        (
            config.slots.prev_frame_button.as_str(),
            Box::new(|s: &ReviewStepper| s.step_frame(StepDirection::Backward)),
        ),
        (
            config.slots.next_frame_button.as_str(),
            Box::new(|s: &ReviewStepper| s.step_frame(StepDirection::Forward)),
        ),
    ];

    for (id, action) in controls {
        let button = match element_by_id::<Element>(document, id) {
            Ok(button) => button,
            Err(_) => {
                log::warn!("Control #{} not found, skipping", id);
                continue;
            }
        };
        let stepper = stepper.clone();
        on_click(&button, move |_event| action(&stepper))?;
    }

    Ok(())
}

/// Attaches a click listener that lives for the page lifetime.
fn on_click(
    target: &EventTarget,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
