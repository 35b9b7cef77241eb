//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::surface::Shape;
use super::vertex::Vertex;
use crate::consts::CIRCLE_SEGMENTS;
use crate::direction_from_degrees;

/// Generate vertices for any [`Shape`]
pub fn shape(shape: &Shape) -> Vec<Vertex> {
    match *shape {
        Shape::Circle {
            center,
            radius,
            color,
        } => circle(center, radius, color, CIRCLE_SEGMENTS),
        Shape::Beam {
            origin,
            length,
            thickness,
            rotation_degrees,
            color,
        } => beam(origin, length, thickness, rotation_degrees, color),
    }
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a rotated beam rectangle
///
/// The long edge runs from `origin` along the rotation; the thickness
/// extends to the rotated +Y side. Zero-length beams produce nothing.
pub fn beam(
    origin: Vec2,
    length: f32,
    thickness: f32,
    rotation_degrees: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    if length <= 0.0 || thickness <= 0.0 {
        return Vec::new();
    }

    let dir = direction_from_degrees(rotation_degrees);
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x);

    let a = origin;
    let b = origin + dir * length;
    let c = b + perp * thickness;
    let d = origin + perp * thickness;

    // Two triangles
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(a.x, a.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count() {
        let vertices = circle(Vec2::new(10.0, 10.0), 5.0, WHITE, 16);
        assert_eq!(vertices.len(), 16 * 3);

        // Every rim vertex is on the circle
        for v in vertices.iter().skip(1).step_by(3) {
            let p = Vec2::from(v.position);
            assert!((p.distance(Vec2::new(10.0, 10.0)) - 5.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_beam_quad_corners() {
        let vertices = beam(Vec2::new(100.0, 100.0), 50.0, 2.0, 90.0, WHITE);
        assert_eq!(vertices.len(), 6);

        // Pointing down the screen, thickness toward -X
        let far = Vec2::from(vertices[1].position);
        assert!((far - Vec2::new(100.0, 150.0)).length() < 1e-3);
        let side = Vec2::from(vertices[5].position);
        assert!((side - Vec2::new(98.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn test_zero_length_beam_is_empty() {
        assert!(beam(Vec2::ZERO, 0.0, 1.5, 45.0, WHITE).is_empty());
    }

    #[test]
    fn test_shape_dispatch() {
        let s = Shape::Beam {
            origin: Vec2::ZERO,
            length: 10.0,
            thickness: 1.0,
            rotation_degrees: 0.0,
            color: WHITE,
        };
        assert_eq!(shape(&s).len(), 6);

        let s = Shape::Circle {
            center: Vec2::ZERO,
            radius: 3.0,
            color: WHITE,
        };
        assert_eq!(shape(&s).len(), (CIRCLE_SEGMENTS * 3) as usize);
    }
}
