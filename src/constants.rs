// Host-side tuning: camera projection, picking, overlays and output.

// Camera projection (75 degree vertical fov)
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Raymarch cutoff distance (world units); the room is 100 units wide
pub const RAY_FAR: f32 = 200.0;

// Linear exposure applied before tonemapping
pub const EXPOSURE: f32 = 1.25;

// Largest frame step fed to damping; longer gaps (tab hidden) are treated as this
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// Perf readout refresh interval in frames
pub const PERF_REFRESH_FRAMES: u64 = 15;

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const HINT_ID: &str = "hint-overlay";
pub const PERF_ID: &str = "perf-overlay";
pub const LABEL_LAYER_ID: &str = "label-layer";
