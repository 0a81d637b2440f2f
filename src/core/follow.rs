use glam::{Vec2, Vec3};

use super::damping::damp3;
use super::error::ConfigError;

/// Pointer position in normalized device coordinates, +y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp into [-1, 1]; non-finite components collapse to 0.
    #[inline]
    pub fn sanitized(self) -> Self {
        let fix = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        Self {
            x: fix(self.x),
            y: fix(self.y),
        }
    }
}

impl From<Vec2> for PointerState {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// World-space size of the visible area at the camera's focus distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Anything the follow controller can steer. The host keeps ownership; the
/// controller only borrows it for the duration of one update.
pub trait CameraRig {
    fn position(&self) -> Vec3;
    fn position_mut(&mut self) -> &mut Vec3;
    fn look_at(&mut self, point: Vec3);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampRange {
    pub min: f32,
    pub max: f32,
}

impl ClampRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn apply(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }
}

/// Horizontal offset: `pointer.x * viewport.width / divisor`, optionally
/// saturated to `clamp`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalMapping {
    pub divisor: f32,
    pub clamp: Option<ClampRange>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalMapping {
    /// `pointer.y * scale`
    Direct { scale: f32 },
    /// `(pointer.y + with) / 2`
    Averaged { with: f32 },
}

impl VerticalMapping {
    #[inline]
    fn offset(&self, y: f32) -> f32 {
        match *self {
            VerticalMapping::Direct { scale } => y * scale,
            VerticalMapping::Averaged { with } => (y + with) * 0.5,
        }
    }
}

/// Per-scene camera follow parameters, fixed at scene construction.
#[derive(Clone, Debug, PartialEq)]
pub struct FollowConfig {
    pub base_position: Vec3,
    pub look_at: Vec3,
    /// Exponential time constant in seconds.
    pub smoothing: f32,
    pub horizontal: HorizontalMapping,
    pub vertical: VerticalMapping,
}

impl FollowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_vec("base_position", self.base_position)?;
        check_vec("look_at", self.look_at)?;
        if !(self.smoothing.is_finite() && self.smoothing > 0.0) {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }
        let d = self.horizontal.divisor;
        if !d.is_finite() || d == 0.0 {
            return Err(ConfigError::InvalidDivisor(d));
        }
        if let Some(ClampRange { min, max }) = self.horizontal.clamp {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(ConfigError::InvalidClamp { min, max });
            }
        }
        let v = match self.vertical {
            VerticalMapping::Direct { scale } => scale,
            VerticalMapping::Averaged { with } => with,
        };
        if !v.is_finite() {
            return Err(ConfigError::InvalidVertical(v));
        }
        Ok(())
    }
}

fn check_vec(field: &'static str, v: Vec3) -> Result<(), ConfigError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteVector {
            field,
            x: v.x,
            y: v.y,
            z: v.z,
        })
    }
}

/// Steers a host camera toward a pointer-derived target with exponential
/// damping and re-aims it at a fixed point every frame.
///
/// Holds no per-frame state: all continuity lives in the camera position
/// owned by the caller.
#[derive(Clone, Debug)]
pub struct CameraFollowController {
    config: FollowConfig,
}

impl CameraFollowController {
    pub fn new(config: FollowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "camera follow: base=({:.2},{:.2},{:.2}) look_at=({:.2},{:.2},{:.2}) smoothing={:.2}s clamp={:?}",
            config.base_position.x,
            config.base_position.y,
            config.base_position.z,
            config.look_at.x,
            config.look_at.y,
            config.look_at.z,
            config.smoothing,
            config.horizontal.clamp
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    /// Horizontal and vertical offsets added to the base position.
    pub fn offset(&self, pointer: PointerState, viewport: ViewportSize) -> Vec2 {
        let p = pointer.sanitized();
        let h = &self.config.horizontal;
        let mut x = p.x * viewport.width / h.divisor;
        if !x.is_finite() {
            x = 0.0;
        }
        if let Some(c) = h.clamp {
            x = c.apply(x);
        }
        Vec2::new(x, self.config.vertical.offset(p.y))
    }

    pub fn target(&self, pointer: PointerState, viewport: ViewportSize) -> Vec3 {
        let o = self.offset(pointer, viewport);
        self.config.base_position + Vec3::new(o.x, o.y, 0.0)
    }

    /// Advance one frame: damp the camera position toward the target and aim
    /// it at the configured look-at point.
    pub fn update<C: CameraRig + ?Sized>(
        &self,
        pointer: PointerState,
        viewport: ViewportSize,
        elapsed: f32,
        camera: &mut C,
    ) {
        let target = self.target(pointer, viewport);
        damp3(camera.position_mut(), target, self.config.smoothing, elapsed);
        camera.look_at(self.config.look_at);
    }
}
