use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Fraction of the remaining distance covered after `elapsed` seconds with
/// time constant `smoothing`: `1 - exp(-elapsed / smoothing)`.
///
/// Zero or negative `elapsed` yields exactly 0. Two steps of `t/2` compose to
/// one step of `t`, so results do not depend on frame rate.
#[inline]
pub fn damp_factor(elapsed: f32, smoothing: f32) -> f32 {
    let dt = elapsed.max(0.0);
    if dt == 0.0 {
        return 0.0;
    }
    1.0 - (-dt / smoothing).exp()
}

#[inline]
pub fn damp(current: f32, target: f32, smoothing: f32, elapsed: f32) -> f32 {
    let a = damp_factor(elapsed, smoothing);
    if a == 0.0 {
        return current;
    }
    current + (target - current) * a
}

/// Damp a vector in place toward `target`.
#[inline]
pub fn damp3(current: &mut Vec3, target: Vec3, smoothing: f32, elapsed: f32) {
    let a = damp_factor(elapsed, smoothing);
    if a == 0.0 {
        return;
    }
    *current = current.lerp(target, a);
}

/// Signed shortest difference `target - current`, wrapped into (-PI, PI].
#[inline]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut d = (target - current).rem_euclid(TAU);
    if d > PI {
        d -= TAU;
    }
    d
}

/// Damp an angle along the shortest arc toward `target`.
#[inline]
pub fn damp_angle(current: f32, target: f32, smoothing: f32, elapsed: f32) -> f32 {
    let a = damp_factor(elapsed, smoothing);
    if a == 0.0 {
        return current;
    }
    current + delta_angle(current, target) * a
}

/// Per-component angle damping for XYZ euler rotations.
#[inline]
pub fn damp_euler(current: &mut Vec3, target: Vec3, smoothing: f32, elapsed: f32) {
    current.x = damp_angle(current.x, target.x, smoothing, elapsed);
    current.y = damp_angle(current.y, target.y, smoothing, elapsed);
    current.z = damp_angle(current.z, target.z, smoothing, elapsed);
}
