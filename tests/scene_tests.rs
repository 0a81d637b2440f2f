// Host-side tests for scene tables, key bindings, post effects and frame stats.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod showcase {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod controls {
        include!("../src/core/controls.rs");
    }
    pub mod damping {
        include!("../src/core/damping.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod follow {
        include!("../src/core/follow.rs");
    }
    pub mod post {
        include!("../src/core/post.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod spin {
        include!("../src/core/spin.rs");
    }
    pub mod stats {
        include!("../src/core/stats.rs");
    }
}

use glam::Vec3;
use showcase::constants::*;
use showcase::controls::{action_for_key, KeyAction};
use showcase::error::ConfigError;
use showcase::follow::{PointerState, VerticalMapping, ViewportSize};
use showcase::post::PostEffect;
use showcase::scene::{SceneDescriptor, SceneKind};
use showcase::stats::FrameStats;
use std::f32::consts::FRAC_PI_2;

#[test]
fn every_scene_builds_a_controller() {
    for kind in SceneKind::ALL {
        let d = kind.descriptor();
        assert_eq!(d.kind, kind);
        assert!(d.props.len() <= MAX_PROPS);
        d.build_controller()
            .unwrap_or_else(|e| panic!("{}: {e}", kind.slug()));
    }
}

#[test]
fn gameboy_follow_parameters() {
    let d = SceneDescriptor::gameboy();
    assert_eq!(d.follow.base_position, Vec3::new(0.0, 10.0, 12.0));
    assert_eq!(d.follow.look_at, Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(d.follow.smoothing, 0.5);
    let clamp = d.follow.horizontal.clamp.unwrap();
    assert_eq!((clamp.min, clamp.max), (-10.0, 10.0));
    assert_eq!(d.post_effect, PostEffect::Outline);
    assert_eq!(d.labels.len(), 4);
    assert_eq!(d.labels[0].text, "Nintendo Gameboy");
    assert!(d.model.hover_spin().is_some());

    let ctl = d.build_controller().unwrap();
    let wide = ViewportSize::new(90.0, 40.0);
    assert_eq!(ctl.target(PointerState::new(1.0, 0.0), wide).x, 10.0);
    assert_eq!(ctl.target(PointerState::CENTER, wide), d.follow.base_position);
}

#[test]
fn diorama_uses_its_own_mapping() {
    let d = SceneDescriptor::diorama();
    assert!(d.follow.horizontal.clamp.is_none());
    assert!(matches!(
        d.follow.vertical,
        VerticalMapping::Averaged { .. }
    ));
    assert!(d.model.hover_spin().is_none());
    assert_eq!(d.model.initial_yaw(), 0.0);
    assert_ne!(
        d.follow.base_position,
        SceneDescriptor::gameboy().follow.base_position
    );
}

#[test]
fn too_many_props_is_rejected() {
    let mut d = SceneDescriptor::diorama();
    let prop = d.props[0];
    while d.props.len() <= MAX_PROPS {
        d.props.push(prop);
    }
    let err = d.build_controller().unwrap_err();
    assert_eq!(
        err,
        ConfigError::TooManyProps {
            scene: "diorama",
            count: MAX_PROPS + 1,
            max: MAX_PROPS,
        }
    );
}

#[test]
fn hash_selects_scene() {
    assert_eq!(SceneKind::from_hash(""), SceneKind::Gameboy);
    assert_eq!(SceneKind::from_hash("#diorama"), SceneKind::Diorama);
    assert_eq!(SceneKind::from_hash("#Computer"), SceneKind::Diorama);
    assert_eq!(SceneKind::from_hash("#nope"), SceneKind::Gameboy);
    for kind in SceneKind::ALL {
        assert_eq!(SceneKind::from_hash(kind.slug()), kind);
        assert_eq!(kind.next().next(), kind);
    }
}

#[test]
fn label_foreshortening() {
    let mut label = SceneDescriptor::gameboy().labels[0];
    label.position = Vec3::ZERO;
    label.tilt_x = 0.0;
    assert!((label.foreshortening(Vec3::new(0.0, 0.0, 10.0)) - 1.0).abs() < 1e-6);
    // edge-on is floored, not zero
    assert_eq!(label.foreshortening(Vec3::new(10.0, 0.0, 0.0)), 0.05);

    label.tilt_x = -FRAC_PI_2;
    assert!((label.foreshortening(Vec3::new(0.0, 10.0, 0.0)) - 1.0).abs() < 1e-5);
}

#[test]
fn key_bindings() {
    assert_eq!(
        action_for_key("1"),
        Some(KeyAction::SelectScene(SceneKind::Gameboy))
    );
    assert_eq!(
        action_for_key("2"),
        Some(KeyAction::SelectScene(SceneKind::Diorama))
    );
    assert_eq!(action_for_key("N"), Some(KeyAction::NextScene));
    assert_eq!(action_for_key("p"), Some(KeyAction::CyclePostEffect));
    assert_eq!(action_for_key("h"), Some(KeyAction::ToggleHint));
    assert_eq!(action_for_key("F"), Some(KeyAction::TogglePerf));
    assert_eq!(action_for_key("x"), None);
    assert_eq!(action_for_key("Enter"), None);
}

#[test]
fn post_effect_cycle_visits_every_mode() {
    let mut e = PostEffect::default();
    let mut modes = Vec::new();
    for _ in 0..PostEffect::ALL.len() {
        modes.push(e.shader_mode());
        e = e.next();
    }
    assert_eq!(e, PostEffect::None);
    modes.sort_unstable();
    assert_eq!(modes, vec![0, 1, 2, 3, 4]);
}

#[test]
fn frame_stats_smooth_and_ignore_bad_samples() {
    let mut s = FrameStats::default();
    assert_eq!(s.fps(), 0.0);
    s.record(0.0);
    s.record(-1.0);
    s.record(f32::NAN);
    assert_eq!(s.frames(), 0);

    s.record(1.0 / 30.0);
    assert!((s.fps() - 30.0).abs() < 1e-3);
    for _ in 0..200 {
        s.record(1.0 / 60.0);
    }
    assert_eq!(s.frames(), 201);
    assert!((s.fps() - 60.0).abs() < 0.1, "fps {}", s.fps());
    assert!((s.frame_ms() - 16.667).abs() < 0.05);
}
