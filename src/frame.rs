use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, MAX_FRAME_DT_SEC, PERF_REFRESH_FRAMES,
};
use crate::core::{
    Camera, CameraFollowController, FrameStats, HoverSpin, PointerState, PostEffect,
    SceneDescriptor, SceneKind,
};
use crate::{dom, input, labels, overlay, render};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one scene needs at frame time. Swapped wholesale on scene change
/// so no controller or spin state leaks between scenes.
pub struct ActiveScene {
    pub descriptor: SceneDescriptor,
    pub controller: CameraFollowController,
    pub spin: Option<HoverSpin>,
    pub labels: labels::LabelLayer,
}

impl ActiveScene {
    pub fn load(document: &web::Document, kind: SceneKind) -> anyhow::Result<Self> {
        let descriptor = kind.descriptor();
        let controller = descriptor
            .build_controller()
            .map_err(|e| anyhow::anyhow!("scene '{}': {}", kind.slug(), e))?;
        let spin = descriptor.model.hover_spin();
        let labels = labels::LabelLayer::build(document, &descriptor.labels);
        Ok(Self {
            descriptor,
            controller,
            spin,
            labels,
        })
    }

    pub fn model_yaw(&self) -> f32 {
        self.spin
            .map(|s| s.yaw())
            .unwrap_or_else(|| self.descriptor.model.initial_yaw())
    }
}

pub fn initial_camera(scene: &SceneDescriptor, canvas: &web::HtmlCanvasElement) -> Camera {
    let mut camera = Camera {
        eye: scene.follow.base_position,
        target: scene.follow.look_at,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: CAMERA_FOVY_DEG.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    };
    camera.set_aspect(canvas.width(), canvas.height());
    camera
}

pub struct FrameContext<'a> {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,

    pub current_scene: Rc<RefCell<SceneKind>>,
    pub queued_scene: Rc<RefCell<Option<SceneKind>>>,
    pub post_effect: Rc<RefCell<PostEffect>>,

    pub scene: ActiveScene,
    pub camera: Camera,
    pub hovered: bool,

    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    pub stats: FrameStats,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        let queued = self.queued_scene.borrow_mut().take();
        if let Some(kind) = queued {
            self.switch_scene(kind);
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_aspect(w, h);

        // Camera follow
        let ms = *self.mouse.borrow();
        let pointer = PointerState::from(input::mouse_ndc(&self.canvas, &ms));
        let viewport = self
            .camera
            .viewport_toward(self.scene.descriptor.follow.look_at);
        self.scene
            .controller
            .update(pointer, viewport, dt_sec, &mut self.camera);

        // Hover pick + spin
        self.hovered = match self.scene.descriptor.model.spin {
            Some(params) if ms.inside => {
                let (ro, rd) = self.camera.screen_ray(ms.x, ms.y, w as f32, h as f32);
                input::ray_sphere(ro, rd, self.scene.descriptor.model_center(), params.pick_radius)
                    .is_some()
            }
            _ => false,
        };
        if let Some(spin) = &mut self.scene.spin {
            spin.update(self.hovered, dt_sec);
        }

        // Labels follow the camera in CSS pixels
        let css_w = self.canvas.client_width() as f32;
        let css_h = self.canvas.client_height() as f32;
        self.scene.labels.update(&self.camera, css_w, css_h);

        let effect = *self.post_effect.borrow();
        let model_yaw = self.scene.model_yaw();
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            let inputs = render::FrameInputs {
                camera: &self.camera,
                scene: &self.scene.descriptor,
                model_yaw,
                hovered: self.hovered,
                effect,
                dt_sec,
            };
            match g.render(&inputs) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }

        self.stats.record(dt_sec);
        if self.stats.frames() % PERF_REFRESH_FRAMES == 0 {
            overlay::update_perf(&self.document, &self.stats);
        }
    }

    fn switch_scene(&mut self, kind: SceneKind) {
        if *self.current_scene.borrow() == kind {
            return;
        }
        match ActiveScene::load(&self.document, kind) {
            Ok(scene) => {
                // camera keeps its position and glides to the new base
                self.scene = scene;
                self.hovered = false;
                *self.current_scene.borrow_mut() = kind;
                let effect = self.scene.descriptor.post_effect;
                *self.post_effect.borrow_mut() = effect;
                dom::set_location_hash(kind.slug());
                overlay::update_hint(&self.document, kind, effect);
                log::info!("[scene] switched to {}", kind.slug());
            }
            Err(e) => log::error!("[scene] {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
