// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::{Vec2, Vec3};
use input::*;

#[test]
fn ray_sphere_hits_front_surface() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_miss_and_behind() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(5.0, 0.0, 5.0), 1.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
}

#[test]
fn ray_sphere_from_inside_reports_exit() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::ZERO, 3.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn px_to_ndc_corners_and_center() {
    assert_eq!(px_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(px_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(px_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    // outside the canvas saturates
    assert_eq!(px_to_ndc(-50.0, 900.0, 800.0, 600.0), Vec2::new(-1.0, -1.0));
}

#[test]
fn px_to_ndc_degenerate_size_is_center() {
    assert_eq!(px_to_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(px_to_ndc(10.0, 10.0, 800.0, f32::NAN), Vec2::ZERO);
}

#[test]
fn within_canvas_bounds() {
    assert!(within_canvas(0.0, 0.0, 100.0, 50.0));
    assert!(within_canvas(100.0, 50.0, 100.0, 50.0));
    assert!(!within_canvas(-1.0, 10.0, 100.0, 50.0));
    assert!(!within_canvas(10.0, 51.0, 100.0, 50.0));
}
