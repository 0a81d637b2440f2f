use super::damping::damp_angle;

/// Yaw that eases toward one angle while hovered and back to another when
/// released.
#[derive(Clone, Copy, Debug)]
pub struct HoverSpin {
    pub rest_yaw: f32,
    pub hover_yaw: f32,
    pub smoothing: f32,
    yaw: f32,
}

impl HoverSpin {
    pub fn new(rest_yaw: f32, hover_yaw: f32, smoothing: f32) -> Self {
        Self {
            rest_yaw,
            hover_yaw,
            smoothing,
            yaw: rest_yaw,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn update(&mut self, hovered: bool, elapsed: f32) -> f32 {
        let target = if hovered { self.hover_yaw } else { self.rest_yaw };
        self.yaw = damp_angle(self.yaw, target, self.smoothing, elapsed);
        self.yaw
    }
}
