//! Beam shortening: where a ray from the sun first meets the object

use super::circle::Circle;
use crate::direction_from_degrees;

/// Distance from the sun's center to the object's near boundary along a ray
///
/// Solves `t² + 2(m·d)t + (|m|² - r²) = 0` with `m = sun - object` and unit
/// direction `d`, keeping the nearer root. Callers only ask for directions
/// inside the occlusion range, so a negative discriminant can only come
/// from rounding at a tangent and is clamped to zero.
pub fn compute_beam_length(sun: &Circle, object: &Circle, angle_degrees: f32) -> f32 {
    let direction = direction_from_degrees(angle_degrees);
    let m = sun.center - object.center;

    let md = m.dot(direction);
    let c = m.length_squared() - object.radius * object.radius;
    let discriminant = (md * md - c).max(0.0);

    let t = -md - discriminant.sqrt();
    // `d` is unit length, so `t` is already the hit distance
    t.max(0.0)
}
