//! DOM-backed UI surface for WASM targets.

use super::results_table::append_rows;
use super::{ResultRow, RowAction, StatsDisplay, UiSurface};
use crate::config::SlotIds;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, Window};

/// The review page's addressable slots.
pub struct DomSurface {
    window: Window,
    document: Document,
    file_input: HtmlInputElement,
    trigger: HtmlButtonElement,
    loader: HtmlElement,
    stats_bar: HtmlElement,
    total_frames: Element,
    anomaly_count: Element,
    avg_gap: Element,
    frame_counter: Element,
    results_body: HtmlElement,
}

impl DomSurface {
    /// Resolves every slot, failing if a required element is missing.
    pub fn from_document(
        window: Window,
        document: Document,
        ids: &SlotIds,
    ) -> Result<Self, JsValue> {
        let results_body = document
            .query_selector(&ids.results_body)?
            .ok_or_else(|| missing_element(&ids.results_body))?
            .dyn_into::<HtmlElement>()?;

        Ok(Self {
            file_input: element_by_id(&document, &ids.video_input)?,
            trigger: element_by_id(&document, &ids.analyze_button)?,
            loader: element_by_id(&document, &ids.loader)?,
            stats_bar: element_by_id(&document, &ids.stats_bar)?,
            total_frames: element_by_id(&document, &ids.total_frames)?,
            anomaly_count: element_by_id(&document, &ids.anomaly_count)?,
            avg_gap: element_by_id(&document, &ids.avg_gap)?,
            frame_counter: element_by_id(&document, &ids.frame_counter)?,
            results_body,
            window,
            document,
        })
    }

    pub fn trigger(&self) -> &HtmlButtonElement {
        &self.trigger
    }

    pub fn results_body(&self) -> &HtmlElement {
        &self.results_body
    }

    /// First file chosen in the file input, if any.
    pub fn selected_file(&self) -> Option<web_sys::File> {
        self.file_input.files().and_then(|files| files.get(0))
    }

    fn build_row(&self, row: &ResultRow) -> Result<Element, JsValue> {
        let tr = self.document.create_element("tr")?;
        if let Some(class) = row.visual_class {
            tr.set_class_name(class.css_class());
        }
        tr.set_attribute("style", "cursor:pointer")?;
        let action = row.action.to_attribute();
        tr.set_attribute(RowAction::ATTRIBUTE, &action)?;

        let cells = [
            (row.frame_index.to_string(), None),
            (row.clock_label.clone(), Some("font-family:monospace")),
            (row.gap_label.clone(), None),
            (row.status_label.clone(), None),
        ];
        for (text, style) in cells {
            let td = self.document.create_element("td")?;
            td.set_text_content(Some(&text));
            if let Some(style) = style {
                td.set_attribute("style", style)?;
            }
            tr.append_child(&td)?;
        }

        Ok(tr)
    }

    fn append_row(&self, row: &ResultRow) -> Result<(), JsValue> {
        let tr = self.build_row(row)?;
        self.results_body.append_child(&tr)?;
        Ok(())
    }
}

impl UiSurface for DomSurface {
    fn set_trigger_enabled(&self, enabled: bool) {
        self.trigger.set_disabled(!enabled);
    }

    fn set_loading_visible(&self, visible: bool) {
        set_display(&self.loader, if visible { "block" } else { "none" });
    }

    fn set_stats_visible(&self, visible: bool) {
        set_display(&self.stats_bar, if visible { "flex" } else { "none" });
    }

    fn show_stats(&self, stats: &StatsDisplay) {
        self.total_frames
            .set_text_content(Some(&stats.total_frames));
        self.anomaly_count
            .set_text_content(Some(&stats.issues_found));
        self.avg_gap.set_text_content(Some(&stats.average_gap));
    }

    fn render_rows(&self, rows: &[ResultRow]) {
        self.results_body.set_inner_html("");
        let rendered = append_rows(rows, |row| self.append_row(row));
        log::debug!("Rendered {} of {} result rows", rendered, rows.len());
    }

    fn set_frame_counter(&self, label: &str) {
        self.frame_counter.set_text_content(Some(label));
    }

    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("Failed to show notice {:?}: {:?}", message, e);
        }
    }
}

/// Looks up an element by id and casts it to the expected type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| missing_element(&format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has an unexpected type", id)))
}

fn missing_element(selector: &str) -> JsValue {
    JsValue::from_str(&format!("Missing element {}", selector))
}

fn set_display(element: &HtmlElement, display: &str) {
    if let Err(e) = element.style().set_property("display", display) {
        log::warn!("Failed to set display on {}: {:?}", element.id(), e);
    }
}
