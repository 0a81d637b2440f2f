use crate::core::{action_for_key, KeyAction, PostEffect, SceneKind};
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct KeyWiring {
    pub current_scene: Rc<RefCell<SceneKind>>,
    pub queued_scene: Rc<RefCell<Option<SceneKind>>>,
    pub post_effect: Rc<RefCell<PostEffect>>,
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &KeyWiring) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    let Some(document) = dom::window_document() else {
        return;
    };
    match action {
        KeyAction::SelectScene(kind) => {
            *w.queued_scene.borrow_mut() = Some(kind);
        }
        KeyAction::NextScene => {
            let next = w.current_scene.borrow().next();
            *w.queued_scene.borrow_mut() = Some(next);
        }
        KeyAction::CyclePostEffect => {
            let effect = {
                let mut e = w.post_effect.borrow_mut();
                *e = e.next();
                *e
            };
            log::info!("[keys] post effect -> {}", effect.name());
            overlay::update_hint(&document, *w.current_scene.borrow(), effect);
        }
        KeyAction::ToggleHint => overlay::toggle_hint(&document),
        KeyAction::TogglePerf => {
            let visible = overlay::toggle_perf(&document);
            log::info!("[keys] perf readout {}", if visible { "on" } else { "off" });
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(w: KeyWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Follow manual edits of the URL fragment (`#gameboy`, `#diorama`).
pub fn wire_hash_change(queued_scene: Rc<RefCell<Option<SceneKind>>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let kind = SceneKind::from_hash(&dom::location_hash());
        *queued_scene.borrow_mut() = Some(kind);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
