pub mod camera;
pub mod constants;
pub mod controls;
pub mod damping;
pub mod error;
pub mod follow;
pub mod post;
pub mod scene;
pub mod spin;
pub mod stats;

pub use camera::*;
pub use constants::*;
pub use controls::*;
pub use damping::*;
pub use error::*;
pub use follow::*;
pub use post::*;
pub use scene::*;
pub use spin::*;
pub use stats::*;
