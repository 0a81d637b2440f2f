// Scene tuning tables.
// Positions are world-space units; colors are linear RGB.
use glam::Vec3;
use std::f32::consts::PI;

// Renderer limit on box props per scene (matches the uniform array length in scene.wgsl)
pub const MAX_PROPS: usize = 8;

// ---------------- Game Boy scene ----------------

// Camera follow
pub const GAMEBOY_CAMERA_BASE: Vec3 = Vec3::new(0.0, 10.0, 12.0);
pub const GAMEBOY_LOOK_AT: Vec3 = Vec3::new(0.0, 5.0, 0.0);
pub const GAMEBOY_SMOOTHING_SEC: f32 = 0.5;
pub const GAMEBOY_H_DIVISOR: f32 = 3.0; // pointer.x * viewport.width / 3
pub const GAMEBOY_H_CLAMP: (f32, f32) = (-10.0, 10.0);

// Lighting
pub const GAMEBOY_AMBIENT_INTENSITY: f32 = 1.0;
pub const GAMEBOY_LIGHT_POSITION: Vec3 = Vec3::new(2.0, 5.0, 3.0);
pub const GAMEBOY_LIGHT_INTENSITY: f32 = 40.0;
pub const GAMEBOY_LIGHT_DISTANCE: f32 = 20.0;
pub const GAMEBOY_LIGHT_DECAY: f32 = 2.0;

// Model placement and hover spin
pub const GAMEBOY_MODEL_ANCHOR: Vec3 = Vec3::new(0.25, 4.0, 1.0);
pub const GAMEBOY_MODEL_SCALE: f32 = 0.5;
pub const GAMEBOY_REST_YAW: f32 = PI;
pub const GAMEBOY_HOVER_YAW: f32 = PI * 4.0;
pub const GAMEBOY_SPIN_SMOOTHING_SEC: f32 = 0.5;
pub const GAMEBOY_PICK_RADIUS: f32 = 1.8;

// ---------------- Computer / mailbox diorama ----------------

pub const DIORAMA_CAMERA_BASE: Vec3 = Vec3::new(0.0, 6.0, 14.0);
pub const DIORAMA_LOOK_AT: Vec3 = Vec3::new(0.0, 2.0, 0.0);
pub const DIORAMA_SMOOTHING_SEC: f32 = 0.8;
pub const DIORAMA_H_DIVISOR: f32 = 4.0;
pub const DIORAMA_V_AVERAGE_WITH: f32 = 1.0; // target.y = base.y + (pointer.y + 1) / 2

pub const DIORAMA_AMBIENT_INTENSITY: f32 = 0.6;
pub const DIORAMA_LIGHT_POSITION: Vec3 = Vec3::new(-3.0, 7.0, 5.0);
pub const DIORAMA_LIGHT_INTENSITY: f32 = 60.0;
pub const DIORAMA_LIGHT_DISTANCE: f32 = 25.0;
pub const DIORAMA_LIGHT_DECAY: f32 = 2.0;

// ---------------- Shared ----------------

// Room box both scenes sit in, seen from the inside
pub const BACKDROP_CENTER: Vec3 = Vec3::new(0.0, 20.0, 0.0);
pub const BACKDROP_SIZE: Vec3 = Vec3::new(100.0, 40.0, 40.0);

pub const LABEL_FONT: &str = "Atkinson Hyperlegible Mono";
pub const LABEL_TILT: f32 = -0.5; // radians about X
