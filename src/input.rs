use glam::{Vec2, Vec3};
use web_sys as web;

/// Last known pointer position in canvas backing-store pixels.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = -b - sq;
    if t0 >= 0.0 {
        return Some(t0);
    }
    // origin inside the sphere: report the exit point
    let t1 = -b + sq;
    (t1 >= 0.0).then_some(t1)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Pixel position to normalized device coordinates: x grows right, y grows
/// up, both clamped to [-1, 1]. Degenerate sizes map to the center.
#[inline]
pub fn px_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if !(width > 0.0 && height > 0.0) {
        return Vec2::ZERO;
    }
    let nx = (2.0 * x / width) - 1.0;
    let ny = 1.0 - (2.0 * y / height);
    Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

#[inline]
pub fn within_canvas(x: f32, y: f32, width: f32, height: f32) -> bool {
    x >= 0.0 && y >= 0.0 && x <= width && y <= height
}

#[inline]
pub fn mouse_ndc(canvas: &web::HtmlCanvasElement, mouse: &MouseState) -> Vec2 {
    if !mouse.inside {
        return Vec2::ZERO;
    }
    px_to_ndc(
        mouse.x,
        mouse.y,
        canvas.width().max(1) as f32,
        canvas.height().max(1) as f32,
    )
}
