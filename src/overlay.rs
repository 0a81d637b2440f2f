use crate::constants::{HINT_ID, PERF_ID};
use crate::core::{FrameStats, PostEffect, SceneKind};
use web_sys as web;

#[inline]
fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
fn is_hidden(document: &web::Document, id: &str) -> bool {
    if let Some(el) = document.get_element_by_id(id) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
fn toggle(document: &web::Document, id: &str) -> bool {
    if is_hidden(document, id) {
        show(document, id);
        true
    } else {
        hide(document, id);
        false
    }
}

pub fn toggle_hint(document: &web::Document) {
    toggle(document, HINT_ID);
}

/// Returns whether the perf readout is now visible.
pub fn toggle_perf(document: &web::Document) -> bool {
    toggle(document, PERF_ID)
}

/// Update the hint overlay with the active scene and effect.
pub fn update_hint(document: &web::Document, scene: SceneKind, effect: PostEffect) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let hint_html = format!(
            "<div style='color: #1d2330; font: 13px system-ui; background: rgba(255, 255, 255, 0.82); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(40, 50, 70, 0.25);'>{} • Effect: {} • 1/2/N scene • P effect • F perf • H hide</div>",
            scene.name(),
            effect.name()
        );
        el.set_inner_html(&hint_html);
    }
}

pub fn update_perf(document: &web::Document, stats: &FrameStats) {
    if let Some(el) = document.get_element_by_id(PERF_ID) {
        el.set_text_content(Some(&format!(
            "{:.0} fps • {:.1} ms",
            stats.fps(),
            stats.frame_ms()
        )));
    }
}
