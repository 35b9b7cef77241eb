//! Sunshadow - a sun, a draggable disc, and the shadow between them
//!
//! Core modules:
//! - `geometry`: Pure occlusion and ray/circle math (no state, no I/O)
//! - `scene`: Sun, object and beam state, updated once per frame
//! - `renderer`: Render surface abstraction and the WebGPU implementation
//! - `platform`: Native window / browser canvas wiring

pub mod geometry;
pub mod platform;
pub mod renderer;
pub mod scene;

pub use geometry::{Circle, OcclusionRange, compute_beam_length, compute_occlusion_range};
pub use scene::{Beam, InputEvent, Scene};

use glam::Vec2;

/// Scene configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Ray Tracing";
    /// Scene dimensions in pixels (also the initial window size)
    pub const WINDOW_WIDTH: u32 = 1200;
    pub const WINDOW_HEIGHT: u32 = 800;

    /// Sun disc
    pub const SUN_RADIUS: f32 = 80.0;
    /// Top-left corner of the sun's bounding box
    pub const SUN_CORNER: [f32; 2] = [300.0, 200.0];

    /// Occluding disc
    pub const OBJECT_RADIUS: f32 = 80.0;
    /// Initial top-left corner of the object's bounding box
    pub const OBJECT_CORNER: [f32; 2] = [800.0, 200.0];

    /// Beam fan
    pub const BEAM_COUNT: usize = 360;
    /// Unobstructed beam length, long enough to leave the window
    pub const BEAM_LENGTH: f32 = 1000.0;
    pub const BEAM_THICKNESS: f32 = 1.5;

    /// Multisample count for anti-aliasing
    pub const MSAA_SAMPLES: u32 = 4;
    /// Triangle fan segments per circle
    pub const CIRCLE_SEGMENTS: u32 = 96;
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector for an angle in degrees (0 = +X, increasing toward +Y)
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-9.2) - 350.8).abs() < 1e-3);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-3);
        // Must never produce 360.0 itself
        assert!(normalize_degrees(-1e-6) < 360.0);
    }

    #[test]
    fn test_direction_from_degrees() {
        let right = direction_from_degrees(0.0);
        assert!((right - Vec2::X).length() < 1e-6);

        let down = direction_from_degrees(90.0);
        assert!((down - Vec2::Y).length() < 1e-6);

        let d = direction_from_degrees(123.0);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }
}
