//! Circle primitive shared by the sun and the occluding object

use glam::Vec2;

/// A disc given by its true center and radius
///
/// Positions are always centers. Bounding-box corners (the convention of
/// the constants and of pointer placement) are converted once, on entry,
/// by [`Circle::from_corner`] and [`Circle::set_center`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    /// Must be > 0
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive, got {radius}");
        Self { center, radius }
    }

    /// Build from the top-left corner of the circle's bounding box
    pub fn from_corner(corner: Vec2, radius: f32) -> Self {
        Self::new(corner + Vec2::splat(radius), radius)
    }

    /// Top-left corner of the bounding box
    #[inline]
    pub fn corner(&self) -> Vec2 {
        self.center - Vec2::splat(self.radius)
    }

    #[inline]
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Check if a point lies strictly inside the disc
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }

    /// Distance between the two centers
    #[inline]
    pub fn center_distance(&self, other: &Circle) -> f32 {
        self.center.distance(other.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corner_offsets_by_radius() {
        let c = Circle::from_corner(Vec2::new(300.0, 200.0), 80.0);
        assert_eq!(c.center, Vec2::new(380.0, 280.0));
        assert_eq!(c.corner(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_contains_point() {
        let c = Circle::new(Vec2::new(10.0, 10.0), 5.0);
        assert!(c.contains_point(Vec2::new(12.0, 12.0)));
        assert!(!c.contains_point(Vec2::new(15.0, 10.0))); // on the boundary
        assert!(!c.contains_point(Vec2::new(20.0, 20.0)));
    }

    #[test]
    fn test_center_distance() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(3.0, 4.0), 2.0);
        assert!((a.center_distance(&b) - 5.0).abs() < 1e-6);
    }
}
