#![cfg(target_arch = "wasm32")]
use crate::core::{FrameStats, SceneKind};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let kind = SceneKind::from_hash(&dom::location_hash());
    let scene = frame::ActiveScene::load(&document, kind)?;
    let camera = frame::initial_camera(&scene.descriptor, &canvas);
    let effect = scene.descriptor.post_effect;
    log::info!(
        "[scene] {} ({} props, {} labels)",
        kind.slug(),
        scene.descriptor.props.len(),
        scene.descriptor.labels.len()
    );

    let current_scene = Rc::new(RefCell::new(kind));
    let queued_scene: Rc<RefCell<Option<SceneKind>>> = Rc::new(RefCell::new(None));
    let post_effect = Rc::new(RefCell::new(effect));
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));

    overlay::update_hint(&document, kind, effect);

    // Initialize WebGPU; without it the page still tracks input and labels
    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    events::wire_input_handlers(&canvas, &mouse);
    events::wire_global_keydown(events::KeyWiring {
        current_scene: current_scene.clone(),
        queued_scene: queued_scene.clone(),
        post_effect: post_effect.clone(),
    });
    events::wire_hash_change(queued_scene.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document: document.clone(),
        canvas: canvas.clone(),
        mouse,
        current_scene,
        queued_scene,
        post_effect,
        scene,
        camera,
        hovered: false,
        gpu,
        last_instant: Instant::now(),
        stats: FrameStats::default(),
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
