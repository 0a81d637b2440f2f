use thiserror::Error;

/// Scene configuration rejected at construction time.
///
/// Frame-time code never produces these; a scene either builds a valid
/// controller up front or refuses to start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("smoothing time must be finite and > 0, got {0}")]
    InvalidSmoothing(f32),
    #[error("horizontal divisor must be finite and non-zero, got {0}")]
    InvalidDivisor(f32),
    #[error("clamp bounds must be finite with min <= max, got [{min}, {max}]")]
    InvalidClamp { min: f32, max: f32 },
    #[error("{field} must be finite, got ({x}, {y}, {z})")]
    NonFiniteVector {
        field: &'static str,
        x: f32,
        y: f32,
        z: f32,
    },
    #[error("vertical mapping value must be finite, got {0}")]
    InvalidVertical(f32),
    #[error("scene '{scene}' has {count} props, limit is {max}")]
    TooManyProps {
        scene: &'static str,
        count: usize,
        max: usize,
    },
}
