// Static showcase scenes: one follow config plus lights, props and labels
// per scene. The renderer consumes these tables as-is.

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use super::constants::*;
use super::error::ConfigError;
use super::follow::{
    CameraFollowController, ClampRange, FollowConfig, HorizontalMapping, VerticalMapping,
};
use super::post::PostEffect;
use super::spin::HoverSpin;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SceneKind {
    #[default]
    Gameboy,
    Diorama,
}

impl SceneKind {
    pub const ALL: [SceneKind; 2] = [SceneKind::Gameboy, SceneKind::Diorama];

    /// Parse a URL fragment such as `#diorama`. Unknown or empty fragments
    /// fall back to the Game Boy.
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').to_ascii_lowercase().as_str() {
            "diorama" | "computer" | "mailbox" => SceneKind::Diorama,
            _ => SceneKind::Gameboy,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            SceneKind::Gameboy => "gameboy",
            SceneKind::Diorama => "diorama",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Gameboy => "Nintendo Game Boy",
            SceneKind::Diorama => "Computer & mailbox diorama",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SceneKind::Gameboy => SceneKind::Diorama,
            SceneKind::Diorama => SceneKind::Gameboy,
        }
    }

    pub fn descriptor(self) -> SceneDescriptor {
        match self {
            SceneKind::Gameboy => SceneDescriptor::gameboy(),
            SceneKind::Diorama => SceneDescriptor::diorama(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    /// Range cutoff; 0 means unlimited.
    pub distance: f32,
    pub decay: f32,
    pub cast_shadow: bool,
}

/// Axis-aligned box in model space.
#[derive(Clone, Copy, Debug)]
pub struct BoxProp {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub color: Vec3,
}

impl BoxProp {
    const fn new(center: Vec3, half_extents: Vec3, color: Vec3) -> Self {
        Self {
            center,
            half_extents,
            color,
        }
    }
}

/// Room the scene sits in, rendered from the inside.
#[derive(Clone, Copy, Debug)]
pub struct Backdrop {
    pub center: Vec3,
    pub size: Vec3,
    pub color: Vec3,
}

#[derive(Clone, Copy, Debug)]
pub struct SpinParams {
    pub rest_yaw: f32,
    pub hover_yaw: f32,
    pub smoothing: f32,
    pub pick_radius: f32,
}

/// Placement of the prop group: props are expressed relative to `anchor`,
/// scaled by `scale`, and rotated about Y by the current spin yaw.
#[derive(Clone, Copy, Debug)]
pub struct ModelAnchor {
    pub anchor: Vec3,
    pub scale: f32,
    pub spin: Option<SpinParams>,
}

impl ModelAnchor {
    pub fn hover_spin(&self) -> Option<HoverSpin> {
        self.spin
            .map(|s| HoverSpin::new(s.rest_yaw, s.hover_yaw, s.smoothing))
    }

    pub fn initial_yaw(&self) -> f32 {
        self.spin.map(|s| s.rest_yaw).unwrap_or(0.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TextLabel {
    pub text: &'static str,
    pub position: Vec3,
    /// Glyph height in world units.
    pub font_size: f32,
    /// Wrap width in world units.
    pub max_width: Option<f32>,
    pub tilt_x: f32,
    pub color: &'static str,
}

impl TextLabel {
    /// Vertical squash of the label as seen from `eye`: 1 when the tilted
    /// label plane faces the eye, approaching 0 when seen edge-on.
    pub fn foreshortening(&self, eye: Vec3) -> f32 {
        // label normal is +Z rotated about X by the tilt
        let normal = Vec3::new(0.0, -self.tilt_x.sin(), self.tilt_x.cos());
        let to_eye = (eye - self.position).normalize_or_zero();
        normal.dot(to_eye).abs().clamp(0.05, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct SceneDescriptor {
    pub kind: SceneKind,
    pub follow: FollowConfig,
    pub ambient: AmbientLight,
    pub point_light: PointLight,
    pub backdrop: Backdrop,
    pub model: ModelAnchor,
    pub props: Vec<BoxProp>,
    pub labels: Vec<TextLabel>,
    pub post_effect: PostEffect,
    pub clear_color: [f32; 3],
}

const WHITE: Vec3 = Vec3::ONE;

impl SceneDescriptor {
    pub fn gameboy() -> Self {
        let shell = Vec3::new(0.78, 0.78, 0.74);
        let bezel = Vec3::new(0.35, 0.36, 0.42);
        let lcd = Vec3::new(0.55, 0.62, 0.25);
        let ink = Vec3::new(0.08, 0.08, 0.1);
        let button = Vec3::new(0.55, 0.1, 0.3);
        // Model faces -Z; the rest yaw of PI turns it toward the camera,
        // which also mirrors X (d-pad sits on +X locally).
        let props = vec![
            BoxProp::new(Vec3::ZERO, Vec3::new(1.8, 3.0, 0.6), shell),
            BoxProp::new(Vec3::new(0.0, 1.2, -0.62), Vec3::new(1.4, 1.1, 0.05), bezel),
            BoxProp::new(Vec3::new(0.0, 1.25, -0.68), Vec3::new(0.8, 0.75, 0.02), lcd),
            BoxProp::new(Vec3::new(0.9, -1.0, -0.65), Vec3::new(0.45, 0.15, 0.08), ink),
            BoxProp::new(Vec3::new(0.9, -1.0, -0.65), Vec3::new(0.15, 0.45, 0.08), ink),
            BoxProp::new(Vec3::new(-0.7, -0.8, -0.66), Vec3::new(0.22, 0.22, 0.08), button),
            BoxProp::new(Vec3::new(-1.25, -1.1, -0.66), Vec3::new(0.22, 0.22, 0.08), button),
        ];
        let labels = vec![
            TextLabel {
                text: "Nintendo Gameboy",
                position: Vec3::new(0.0, 10.0, -2.0),
                font_size: 1.5,
                max_width: None,
                tilt_x: LABEL_TILT,
                color: "white",
            },
            TextLabel {
                text: "With a dot-matrix screen plus standard controls you'll recognize, the \
                       GAME BOY is capable of playing a wide range of games using \
                       interchangable cartridges.",
                position: Vec3::new(-5.0, 5.0, 0.75),
                font_size: 0.5,
                max_width: Some(5.0),
                tilt_x: LABEL_TILT,
                color: "white",
            },
            TextLabel {
                text: "Including a video link for 2-player competition, stereo headphones, \
                       external speaker and battery, you can take the GAME BOY to the beach, \
                       park or playground.",
                position: Vec3::new(6.0, 5.0, 0.75),
                font_size: 0.5,
                max_width: Some(5.5),
                tilt_x: LABEL_TILT,
                color: "white",
            },
            TextLabel {
                text: "Wherever. Whenever.",
                position: Vec3::new(1.0, 0.1, 3.5),
                font_size: 1.5,
                max_width: None,
                tilt_x: -FRAC_PI_2,
                color: "white",
            },
        ];
        Self {
            kind: SceneKind::Gameboy,
            follow: FollowConfig {
                base_position: GAMEBOY_CAMERA_BASE,
                look_at: GAMEBOY_LOOK_AT,
                smoothing: GAMEBOY_SMOOTHING_SEC,
                horizontal: HorizontalMapping {
                    divisor: GAMEBOY_H_DIVISOR,
                    clamp: Some(ClampRange::new(GAMEBOY_H_CLAMP.0, GAMEBOY_H_CLAMP.1)),
                },
                vertical: VerticalMapping::Direct { scale: 1.0 },
            },
            ambient: AmbientLight {
                color: WHITE,
                intensity: GAMEBOY_AMBIENT_INTENSITY,
            },
            point_light: PointLight {
                position: GAMEBOY_LIGHT_POSITION,
                color: WHITE,
                intensity: GAMEBOY_LIGHT_INTENSITY,
                distance: GAMEBOY_LIGHT_DISTANCE,
                decay: GAMEBOY_LIGHT_DECAY,
                cast_shadow: true,
            },
            backdrop: Backdrop {
                center: BACKDROP_CENTER,
                size: BACKDROP_SIZE,
                color: WHITE,
            },
            model: ModelAnchor {
                anchor: GAMEBOY_MODEL_ANCHOR,
                scale: GAMEBOY_MODEL_SCALE,
                spin: Some(SpinParams {
                    rest_yaw: GAMEBOY_REST_YAW,
                    hover_yaw: GAMEBOY_HOVER_YAW,
                    smoothing: GAMEBOY_SPIN_SMOOTHING_SEC,
                    pick_radius: GAMEBOY_PICK_RADIUS,
                }),
            },
            props,
            labels,
            post_effect: PostEffect::Outline,
            clear_color: [1.0, 1.0, 1.0],
        }
    }

    pub fn diorama() -> Self {
        let beige = Vec3::new(0.86, 0.82, 0.7);
        let screen = Vec3::new(0.12, 0.45, 0.5);
        let keys = Vec3::new(0.7, 0.68, 0.6);
        let wood = Vec3::new(0.45, 0.3, 0.18);
        let mailbox = Vec3::new(0.18, 0.3, 0.65);
        let flag = Vec3::new(0.85, 0.15, 0.12);
        let props = vec![
            // computer: case, monitor, screen, keyboard
            BoxProp::new(Vec3::new(-2.0, 0.6, 0.0), Vec3::new(1.2, 0.6, 1.3), beige),
            BoxProp::new(Vec3::new(-2.0, 2.5, 0.0), Vec3::new(1.6, 1.3, 1.2), beige),
            BoxProp::new(Vec3::new(-2.0, 2.7, 1.22), Vec3::new(1.2, 0.9, 0.02), screen),
            BoxProp::new(Vec3::new(-2.0, 0.15, 2.2), Vec3::new(1.3, 0.15, 0.5), keys),
            // mailbox: post, box, flag
            BoxProp::new(Vec3::new(3.0, 1.5, 0.0), Vec3::new(0.15, 1.5, 0.15), wood),
            BoxProp::new(Vec3::new(3.0, 3.4, 0.0), Vec3::new(0.7, 0.5, 1.1), mailbox),
            BoxProp::new(Vec3::new(3.75, 3.8, 0.6), Vec3::new(0.05, 0.4, 0.1), flag),
        ];
        let labels = vec![
            TextLabel {
                text: "Home Office",
                position: Vec3::new(0.0, 8.0, -2.0),
                font_size: 1.5,
                max_width: None,
                tilt_x: LABEL_TILT,
                color: "#202020",
            },
            TextLabel {
                text: "A beige box, a glowing screen and a keyboard that clacks.",
                position: Vec3::new(-6.0, 4.5, 0.75),
                font_size: 0.5,
                max_width: Some(4.5),
                tilt_x: LABEL_TILT,
                color: "#202020",
            },
            TextLabel {
                text: "You've got mail.",
                position: Vec3::new(6.0, 5.0, 0.75),
                font_size: 0.5,
                max_width: Some(4.0),
                tilt_x: LABEL_TILT,
                color: "#202020",
            },
        ];
        Self {
            kind: SceneKind::Diorama,
            follow: FollowConfig {
                base_position: DIORAMA_CAMERA_BASE,
                look_at: DIORAMA_LOOK_AT,
                smoothing: DIORAMA_SMOOTHING_SEC,
                horizontal: HorizontalMapping {
                    divisor: DIORAMA_H_DIVISOR,
                    clamp: None,
                },
                vertical: VerticalMapping::Averaged {
                    with: DIORAMA_V_AVERAGE_WITH,
                },
            },
            ambient: AmbientLight {
                color: WHITE,
                intensity: DIORAMA_AMBIENT_INTENSITY,
            },
            point_light: PointLight {
                position: DIORAMA_LIGHT_POSITION,
                color: Vec3::new(1.0, 0.95, 0.85),
                intensity: DIORAMA_LIGHT_INTENSITY,
                distance: DIORAMA_LIGHT_DISTANCE,
                decay: DIORAMA_LIGHT_DECAY,
                cast_shadow: true,
            },
            backdrop: Backdrop {
                center: BACKDROP_CENTER,
                size: BACKDROP_SIZE,
                color: Vec3::new(0.93, 0.9, 0.84),
            },
            model: ModelAnchor {
                anchor: Vec3::ZERO,
                scale: 1.0,
                spin: None,
            },
            props,
            labels,
            post_effect: PostEffect::None,
            clear_color: [0.93, 0.9, 0.84],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.follow.validate()?;
        if self.props.len() > MAX_PROPS {
            return Err(ConfigError::TooManyProps {
                scene: self.kind.slug(),
                count: self.props.len(),
                max: MAX_PROPS,
            });
        }
        Ok(())
    }

    /// Validate the whole scene and build its camera controller.
    pub fn build_controller(&self) -> Result<CameraFollowController, ConfigError> {
        self.validate()?;
        CameraFollowController::new(self.follow.clone())
    }

    /// World-space center of the spinning model, used for hover picking.
    pub fn model_center(&self) -> Vec3 {
        self.model.anchor
    }
}
