//! Occlusion geometry
//!
//! Everything here is a pure function of circle positions and radii:
//! - No state, no I/O
//! - Angles in degrees, 0 = +X, increasing toward +Y (screen space, y down)
//! - Floating-point domain edges are clamped, never reported as errors

pub mod beam;
pub mod circle;
pub mod occlusion;

pub use beam::compute_beam_length;
pub use circle::Circle;
pub use occlusion::{OcclusionRange, angle_in_wrapped_interval, compute_occlusion_range};
