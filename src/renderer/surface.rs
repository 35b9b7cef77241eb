//! Render/display surface abstraction
//!
//! The scene only needs to clear, submit shapes, and present. Anything that
//! can do that (the GPU surface, or a recorder in tests) implements
//! [`RenderSurface`].

use glam::Vec2;

use super::error::RenderError;

/// A drawable primitive in scene pixel coordinates (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled disc
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Thin rectangle starting at `origin`, `length` long along
    /// `rotation_degrees`, `thickness` wide toward the rotated +Y side
    Beam {
        origin: Vec2,
        length: f32,
        thickness: f32,
        rotation_degrees: f32,
        color: [f32; 4],
    },
}

pub trait RenderSurface {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: [f32; 4]);

    /// Queue a shape for the current frame
    fn draw(&mut self, shape: &Shape);

    /// Present everything queued since the last `clear`
    fn display(&mut self) -> Result<(), RenderError>;

    /// Whether the surface can still accept frames
    fn is_open(&self) -> bool;
}
