// Host-side tests for the camera record and its projection helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod showcase {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod damping {
        include!("../src/core/damping.rs");
    }
    pub mod follow {
        include!("../src/core/follow.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use glam::Vec3;
use showcase::camera::Camera;

fn camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 10.0, 12.0),
        target: Vec3::new(0.0, 5.0, 0.0),
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: 75f32.to_radians(),
        znear: 0.1,
        zfar: 1000.0,
    }
}

#[test]
fn viewport_matches_frustum_formula() {
    let mut cam = camera();
    cam.fovy_radians = 90f32.to_radians();
    cam.aspect = 2.0;
    let v = cam.viewport_at(5.0);
    assert!((v.height - 10.0).abs() < 1e-4);
    assert!((v.width - 20.0).abs() < 1e-4);

    let toward = cam.viewport_toward(cam.eye + Vec3::new(0.0, 0.0, -5.0));
    assert!((toward.height - 10.0).abs() < 1e-4);
}

#[test]
fn set_aspect_guards_zero_sizes() {
    let mut cam = camera();
    cam.set_aspect(800, 400);
    assert_eq!(cam.aspect, 2.0);
    cam.set_aspect(0, 0);
    assert_eq!(cam.aspect, 1.0);
}

#[test]
fn look_target_projects_to_screen_center() {
    let cam = camera();
    let p = cam.project_to_screen(cam.target, 1280.0, 720.0).unwrap();
    assert!((p.x - 640.0).abs() < 1e-2, "{p:?}");
    assert!((p.y - 360.0).abs() < 1e-2, "{p:?}");

    // above the target lands higher on screen
    let above = cam
        .project_to_screen(cam.target + Vec3::Y, 1280.0, 720.0)
        .unwrap();
    assert!(above.y < p.y);
}

#[test]
fn points_behind_the_eye_do_not_project() {
    let cam = camera();
    let behind = cam.eye + (cam.eye - cam.target);
    assert!(cam.project_to_screen(behind, 800.0, 600.0).is_none());
}

#[test]
fn center_ray_points_at_target() {
    let cam = camera();
    let (ro, rd) = cam.screen_ray(400.0, 300.0, 800.0, 600.0);
    assert_eq!(ro, cam.eye);
    let expected = (cam.target - cam.eye).normalize();
    assert!(rd.dot(expected) > 0.9999, "{rd:?}");
}
