use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(canvas: &web::HtmlCanvasElement, mouse: &Rc<RefCell<input::MouseState>>) {
    wire_pointermove(canvas, mouse);
    wire_pointerleave(canvas, mouse);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, mouse: &Rc<RefCell<input::MouseState>>) {
    let canvas = canvas.clone();
    let mouse = mouse.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        let mut ms = mouse.borrow_mut();
        ms.x = pos.x;
        ms.y = pos.y;
        ms.inside = input::within_canvas(
            pos.x,
            pos.y,
            canvas.width() as f32,
            canvas.height() as f32,
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerleave(canvas: &web::HtmlCanvasElement, mouse: &Rc<RefCell<input::MouseState>>) {
    let mouse = mouse.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        mouse.borrow_mut().inside = false;
    }) as Box<dyn FnMut(_)>);

    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
