// Host-side tests for damping primitives and the hover spin.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod showcase {
    pub mod damping {
        include!("../src/core/damping.rs");
    }
    pub mod spin {
        include!("../src/core/spin.rs");
    }
}

use glam::Vec3;
use showcase::damping::*;
use showcase::spin::HoverSpin;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn damp_factor_bounds() {
    assert_eq!(damp_factor(0.0, 0.5), 0.0);
    assert_eq!(damp_factor(-1.0, 0.5), 0.0);
    let one_tau = damp_factor(0.5, 0.5);
    assert!((one_tau - (1.0 - (-1.0f32).exp())).abs() < 1e-6);
    let long = damp_factor(100.0, 0.5);
    assert!(long > 0.999 && long <= 1.0);
}

#[test]
fn damp_composes_across_split_steps() {
    let once = damp(0.0, 10.0, 0.3, 0.2);
    let twice = damp(damp(0.0, 10.0, 0.3, 0.1), 10.0, 0.3, 0.1);
    assert!((once - twice).abs() < 1e-5);
    assert_eq!(damp(4.0, 10.0, 0.3, 0.0), 4.0);
}

#[test]
fn damp3_zero_elapsed_is_noop() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    damp3(&mut v, Vec3::ZERO, 0.5, 0.0);
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    damp3(&mut v, Vec3::ZERO, 0.5, 0.1);
    assert!(v.length() < Vec3::new(1.0, 2.0, 3.0).length());
}

#[test]
fn delta_angle_takes_shortest_arc() {
    assert!((delta_angle(0.0, 1.5 * PI) + FRAC_PI_2).abs() < 1e-5);
    assert!((delta_angle(0.0, FRAC_PI_2) - FRAC_PI_2).abs() < 1e-6);
    assert!(delta_angle(0.2, 0.2 + 3.0 * TAU).abs() < 1e-4);
    assert!((delta_angle(PI, 4.0 * PI).abs() - PI).abs() < 1e-4);
}

#[test]
fn damp_angle_wraps_instead_of_unwinding() {
    let start = 0.1;
    let next = damp_angle(start, TAU - 0.1, 0.5, 0.1);
    assert!(next < start, "expected to move backwards across zero, got {next}");

    let mut e = Vec3::new(0.1, 0.0, -0.1);
    damp_euler(&mut e, Vec3::new(TAU - 0.1, 0.0, 0.1 - TAU), 0.5, 0.1);
    assert!(e.x < 0.1);
    assert_eq!(e.y, 0.0);
    assert!(e.z > -0.1);
}

#[test]
fn hover_spin_eases_to_hover_and_back() {
    let mut spin = HoverSpin::new(PI, 4.0 * PI, 0.5);
    assert_eq!(spin.update(false, 1.0), PI);

    for _ in 0..300 {
        spin.update(true, 1.0 / 60.0);
    }
    assert!(delta_angle(spin.yaw(), 4.0 * PI).abs() < 1e-3, "yaw {}", spin.yaw());

    for _ in 0..300 {
        spin.update(false, 1.0 / 60.0);
    }
    assert!(delta_angle(spin.yaw(), PI).abs() < 1e-3, "yaw {}", spin.yaw());
}

#[test]
fn hover_spin_holds_still_without_time() {
    let mut spin = HoverSpin::new(0.0, FRAC_PI_2, 0.5);
    spin.update(true, 0.0);
    assert_eq!(spin.yaw(), 0.0);
}
