//! Platform-neutral input events

use glam::Vec2;

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Discrete input the scene reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed; stop the loop
    Close,
    /// Pointer button went down; start dragging the object
    PointerPressed,
    /// Pointer button went up; stop dragging
    PointerReleased,
    /// Pointer moved to a position in scene coordinates
    PointerMoved(Vec2),
}

/// Map a pointer position in window pixels to scene coordinates
///
/// The renderer stretches the fixed-size scene over the whole window, so
/// the pointer is scaled by the same ratio. A zero-sized window (minimized)
/// leaves the position untouched.
pub fn window_to_scene(position: Vec2, window_size: Vec2) -> Vec2 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return position;
    }
    let scene_size = Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
    position * scene_size / window_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_to_scene_identity_at_native_size() {
        let size = Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
        let p = Vec2::new(123.0, 456.0);
        assert_eq!(window_to_scene(p, size), p);
    }

    #[test]
    fn test_window_to_scene_scales_with_window() {
        // HiDPI / enlarged window: twice the pixels per scene unit
        let size = Vec2::new(WINDOW_WIDTH as f32 * 2.0, WINDOW_HEIGHT as f32 * 2.0);
        let p = window_to_scene(Vec2::new(800.0, 400.0), size);
        assert!((p - Vec2::new(400.0, 200.0)).length() < 1e-4);
    }

    #[test]
    fn test_window_to_scene_zero_size() {
        let p = Vec2::new(10.0, 20.0);
        assert_eq!(window_to_scene(p, Vec2::ZERO), p);
    }
}
