use crate::constants::LABEL_LAYER_ID;
use crate::core::{Camera, TextLabel, LABEL_FONT};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM text labels pinned to world-space anchors.
pub struct LabelLayer {
    entries: Vec<(web::HtmlElement, TextLabel)>,
}

impl LabelLayer {
    /// Replace the contents of `#label-layer` with one element per label.
    pub fn build(document: &web::Document, labels: &[TextLabel]) -> Self {
        let mut entries = Vec::with_capacity(labels.len());
        let Some(layer) = dom::html_element_by_id(document, LABEL_LAYER_ID) else {
            log::warn!("[labels] missing #{}", LABEL_LAYER_ID);
            return Self { entries };
        };
        layer.set_inner_html("");
        for label in labels {
            let el = match document
                .create_element("div")
                .ok()
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            {
                Some(el) => el,
                None => continue,
            };
            el.set_class_name("scene-label");
            el.set_text_content(Some(label.text));
            let style = el.style();
            _ = style.set_property("position", "absolute");
            _ = style.set_property("left", "0");
            _ = style.set_property("top", "0");
            _ = style.set_property("color", label.color);
            _ = style.set_property("font-family", &format!("'{}', monospace", LABEL_FONT));
            _ = style.set_property("text-align", "center");
            _ = style.set_property("pointer-events", "none");
            _ = style.set_property("white-space", if label.max_width.is_some() { "normal" } else { "nowrap" });
            _ = style.set_property("text-shadow", "0 1px 3px rgba(0, 0, 0, 0.45)");
            if layer.append_child(&el).is_ok() {
                entries.push((el, *label));
            }
        }
        Self { entries }
    }

    /// Reposition every label for the current camera; sizes are in CSS pixels.
    pub fn update(&self, camera: &Camera, css_width: f32, css_height: f32) {
        for (el, label) in &self.entries {
            let style = el.style();
            let Some(screen) = camera.project_to_screen(label.position, css_width, css_height)
            else {
                _ = style.set_property("display", "none");
                continue;
            };
            let distance = camera.eye.distance(label.position);
            let view_h = camera.viewport_at(distance).height.max(1e-4);
            let px_per_unit = css_height / view_h;
            let squash = label.foreshortening(camera.eye);
            _ = style.set_property("display", "block");
            _ = style.set_property("font-size", &format!("{:.2}px", label.font_size * px_per_unit));
            if let Some(w) = label.max_width {
                _ = style.set_property("width", &format!("{:.1}px", w * px_per_unit));
            }
            _ = style.set_property(
                "transform",
                &format!(
                    "translate({:.1}px, {:.1}px) translate(-50%, -50%) scaleY({:.3})",
                    screen.x, screen.y, squash
                ),
            );
        }
    }
}
