//! Angular shadow cast by the object, as seen from the sun's center
//!
//! The occluded directions form an interval swept forward (increasing angle)
//! from `start` to `end`. When `start > end` the interval wraps through 0°.

use super::circle::Circle;
use crate::normalize_degrees;

/// Directions (degrees) from the sun's center that the object blocks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OcclusionRange {
    /// The sun's center lies inside the object; every beam is suppressed
    Total,
    /// Tangent-to-tangent interval, both bounds in [0, 360)
    Partial { start: f32, end: f32 },
}

impl OcclusionRange {
    #[inline]
    pub fn is_total(&self) -> bool {
        matches!(self, OcclusionRange::Total)
    }

    /// Whether the interval passes through 0°
    pub fn wraps(&self) -> bool {
        match *self {
            OcclusionRange::Total => false,
            OcclusionRange::Partial { start, end } => start > end,
        }
    }

    /// Check if a direction (degrees, [0, 360)) is blocked
    pub fn contains(&self, angle: f32) -> bool {
        match *self {
            OcclusionRange::Total => true,
            OcclusionRange::Partial { start, end } => angle_in_wrapped_interval(angle, start, end),
        }
    }

    /// Angular width of the blocked interval in degrees
    pub fn angular_span(&self) -> f32 {
        match *self {
            OcclusionRange::Total => 360.0,
            OcclusionRange::Partial { start, end } => {
                let mut span = end - start;
                if span < 0.0 {
                    span += 360.0;
                }
                span
            }
        }
    }

    /// Flat `(start, end)` pair; total occlusion reads as `(0, 360)`
    pub fn as_degrees(&self) -> (f32, f32) {
        match *self {
            OcclusionRange::Total => (0.0, 360.0),
            OcclusionRange::Partial { start, end } => (start, end),
        }
    }
}

/// Check if `angle` lies in the interval swept forward from `start` to `end`
///
/// Without wraparound the bounds are inclusive. A wrapping interval
/// (`start > end`) uses strict bounds on both sides.
#[inline]
pub fn angle_in_wrapped_interval(angle: f32, start: f32, end: f32) -> bool {
    if start > end {
        angle > start || angle < end
    } else {
        angle >= start && angle <= end
    }
}

/// Compute the range of directions from the sun's center blocked by `object`
///
/// Only the object's radius matters for the silhouette; the sun contributes
/// its center. Radii must be positive.
pub fn compute_occlusion_range(sun: &Circle, object: &Circle) -> OcclusionRange {
    let delta = object.center - sun.center;
    let distance = delta.x.hypot(delta.y);

    if distance < object.radius {
        return OcclusionRange::Total;
    }

    // Half-angle between the center line and either tangent.
    // At distance == radius rounding can push the ratio just past 1.
    let offset = (object.radius / distance).clamp(-1.0, 1.0).asin();
    let center_angle = delta.y.atan2(delta.x);

    OcclusionRange::Partial {
        start: normalize_degrees((center_angle - offset).to_degrees()),
        end: normalize_degrees((center_angle + offset).to_degrees()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const TOLERANCE: f32 = 1e-2;

    /// Difference between two angles on the circle, in [0, 180]
    fn angle_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    fn partial(range: OcclusionRange) -> (f32, f32) {
        match range {
            OcclusionRange::Partial { start, end } => (start, end),
            OcclusionRange::Total => panic!("expected a partial range"),
        }
    }

    #[test]
    fn test_object_to_the_right_wraps_through_zero() {
        let sun = Circle::new(Vec2::ZERO, 80.0);
        let object = Circle::new(Vec2::new(500.0, 0.0), 80.0);

        let range = compute_occlusion_range(&sun, &object);
        let (start, end) = partial(range);
        let offset = (80.0_f32 / 500.0).asin().to_degrees();

        assert!((start - (360.0 - offset)).abs() < TOLERANCE);
        assert!((end - offset).abs() < TOLERANCE);
        assert!(range.wraps());
        assert!(range.contains(5.0));
        assert!(range.contains(0.0));
        assert!(range.contains(355.0));
        assert!(!range.contains(180.0));
        assert!(!range.contains(20.0));
    }

    #[test]
    fn test_object_below_does_not_wrap() {
        let sun = Circle::new(Vec2::new(380.0, 280.0), 80.0);
        let object = Circle::new(Vec2::new(380.0, 780.0), 80.0);

        let range = compute_occlusion_range(&sun, &object);
        let (start, end) = partial(range);

        assert!(!range.wraps());
        assert!(start < 90.0 && end > 90.0);
        assert!(range.contains(90.0));
        assert!(!range.contains(270.0));
    }

    #[test]
    fn test_coincident_centers_is_total() {
        let sun = Circle::new(Vec2::new(380.0, 280.0), 80.0);
        let object = Circle::new(Vec2::new(380.0, 280.0), 80.0);

        let range = compute_occlusion_range(&sun, &object);
        assert_eq!(range, OcclusionRange::Total);
        assert_eq!(range.as_degrees(), (0.0, 360.0));
        assert!(range.contains(123.0));
    }

    #[test]
    fn test_touching_center_is_partial_half_circle() {
        // distance == radius: asin argument is exactly 1, offset is 90°
        let sun = Circle::new(Vec2::ZERO, 80.0);
        let object = Circle::new(Vec2::new(80.0, 0.0), 80.0);

        let range = compute_occlusion_range(&sun, &object);
        let (start, end) = partial(range);
        assert!(!start.is_nan() && !end.is_nan());
        assert!((range.angular_span() - 180.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_far_object_has_narrow_range() {
        let sun = Circle::new(Vec2::ZERO, 80.0);
        let object = Circle::new(Vec2::new(0.0, -1.0e6), 80.0);

        let range = compute_occlusion_range(&sun, &object);
        assert!(range.angular_span() < 0.05);
        assert!(range.contains(270.0));
        assert!(!range.contains(269.0));
        assert!(!range.contains(271.0));
    }

    #[test]
    fn test_interval_bounds_inclusive_without_wrap() {
        assert!(angle_in_wrapped_interval(10.0, 10.0, 20.0));
        assert!(angle_in_wrapped_interval(20.0, 10.0, 20.0));
        assert!(angle_in_wrapped_interval(15.0, 10.0, 20.0));
        assert!(!angle_in_wrapped_interval(9.9, 10.0, 20.0));
        assert!(!angle_in_wrapped_interval(20.1, 10.0, 20.0));
    }

    #[test]
    fn test_interval_bounds_strict_with_wrap() {
        assert!(angle_in_wrapped_interval(355.0, 350.0, 10.0));
        assert!(angle_in_wrapped_interval(0.0, 350.0, 10.0));
        assert!(angle_in_wrapped_interval(5.0, 350.0, 10.0));
        assert!(!angle_in_wrapped_interval(350.0, 350.0, 10.0));
        assert!(!angle_in_wrapped_interval(10.0, 350.0, 10.0));
        assert!(!angle_in_wrapped_interval(180.0, 350.0, 10.0));
    }

    #[test]
    fn test_angular_span_wraparound() {
        let range = OcclusionRange::Partial { start: 350.0, end: 10.0 };
        assert!((range.angular_span() - 20.0).abs() < 1e-4);

        let range = OcclusionRange::Partial { start: 10.0, end: 30.0 };
        assert!((range.angular_span() - 20.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_center_inside_object_is_total(
            angle in 0.0f32..360.0,
            fraction in 0.0f32..0.99,
            radius in 1.0f32..200.0,
        ) {
            let sun = Circle::new(Vec2::new(380.0, 280.0), 80.0);
            let offset = crate::direction_from_degrees(angle) * radius * fraction;
            let object = Circle::new(sun.center + offset, radius);

            prop_assert_eq!(compute_occlusion_range(&sun, &object), OcclusionRange::Total);
        }

        #[test]
        fn prop_partial_bounds_in_range(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            radius in 1.0f32..200.0,
        ) {
            let sun = Circle::new(Vec2::ZERO, 80.0);
            let object = Circle::new(Vec2::new(x, y), radius);
            prop_assume!(object.center.length() >= radius);

            if let OcclusionRange::Partial { start, end } = compute_occlusion_range(&sun, &object) {
                prop_assert!((0.0..360.0).contains(&start));
                prop_assert!((0.0..360.0).contains(&end));
            }
        }

        #[test]
        fn prop_reflection_rotates_by_half_turn(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            radius in 1.0f32..200.0,
        ) {
            // Sun at the origin keeps the mirrored offsets exact
            let sun = Circle::new(Vec2::ZERO, 80.0);
            let object = Circle::new(Vec2::new(x, y), radius);
            let mirrored = Circle::new(Vec2::new(-x, -y), radius);
            prop_assume!(Vec2::new(x, y).length() > radius * 1.01);

            let (start, end) = partial(compute_occlusion_range(&sun, &object));
            let (m_start, m_end) = partial(compute_occlusion_range(&sun, &mirrored));

            prop_assert!(angle_distance(m_start, start + 180.0) < TOLERANCE);
            prop_assert!(angle_distance(m_end, end + 180.0) < TOLERANCE);
        }

        #[test]
        fn prop_range_is_deterministic(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
        ) {
            let sun = Circle::new(Vec2::ZERO, 80.0);
            let object = Circle::new(Vec2::new(x, y), 80.0);

            prop_assert_eq!(
                compute_occlusion_range(&sun, &object),
                compute_occlusion_range(&sun, &object)
            );
        }
    }
}
