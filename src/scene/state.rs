//! Scene state: the sun, the draggable object, and the beam fan

use glam::Vec2;

use super::input::InputEvent;
use crate::consts::*;
use crate::geometry::{Circle, OcclusionRange, compute_beam_length, compute_occlusion_range};
use crate::renderer::{RenderError, RenderSurface, Shape, colors};

/// One ray of light radiating from the sun
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    /// Direction in degrees, fixed at creation
    pub angle: f32,
    /// Length drawn this frame
    pub length: f32,
}

impl Beam {
    pub fn shape(&self, origin: Vec2) -> Shape {
        Shape::Beam {
            origin,
            length: self.length,
            thickness: BEAM_THICKNESS,
            rotation_degrees: self.angle,
            color: colors::BEAM,
        }
    }
}

/// Everything the frame loop owns and mutates
#[derive(Debug, Clone)]
pub struct Scene {
    /// Light source, never moves
    pub sun: Circle,
    /// Occluder, follows the pointer while dragging
    pub object: Circle,
    /// Index `i` always points at `beam_angle(i, beams.len())`
    pub beams: Vec<Beam>,
    /// Whether a pointer button is held
    pub dragging: bool,
    /// Range computed by the last `update`
    pub occlusion: OcclusionRange,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Default scene: sun on the left, object to its right, 360 beams
    pub fn new() -> Self {
        Self::with_circles(
            Circle::from_corner(Vec2::from(SUN_CORNER), SUN_RADIUS),
            Circle::from_corner(Vec2::from(OBJECT_CORNER), OBJECT_RADIUS),
            BEAM_COUNT,
        )
    }

    pub fn with_circles(sun: Circle, object: Circle, beam_count: usize) -> Self {
        let beams = (0..beam_count)
            .map(|i| Beam {
                angle: beam_angle(i, beam_count),
                length: BEAM_LENGTH,
            })
            .collect();

        let mut scene = Self {
            sun,
            object,
            beams,
            dragging: false,
            occlusion: OcclusionRange::Total,
        };
        scene.update();
        scene
    }

    /// Beams radiate from the sun's center
    #[inline]
    pub fn beam_origin(&self) -> Vec2 {
        self.sun.center
    }

    /// Apply one input event. Returns `false` when the loop should stop.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Close => return false,
            InputEvent::PointerPressed => {
                if !self.dragging {
                    log::debug!("Drag started");
                }
                self.dragging = true;
            }
            InputEvent::PointerReleased => {
                if self.dragging {
                    log::debug!("Drag stopped at {:?}", self.object.center);
                }
                self.dragging = false;
            }
            InputEvent::PointerMoved(position) => {
                if self.dragging {
                    // Object is centered under the pointer
                    self.object.set_center(position);
                }
            }
        }
        true
    }

    /// Recompute the occlusion range and every beam length
    pub fn update(&mut self) {
        self.occlusion = compute_occlusion_range(&self.sun, &self.object);

        for beam in &mut self.beams {
            beam.length = BEAM_LENGTH;

            if self.occlusion.is_total() {
                beam.length = 0.0;
                continue;
            }

            if self.occlusion.contains(beam.angle) {
                beam.length = compute_beam_length(&self.sun, &self.object, beam.angle);
            }
        }
    }

    /// Submit the frame: beams, then the object, then the sun on top
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<(), RenderError> {
        surface.clear(colors::BACKGROUND);

        if !self.occlusion.is_total() {
            let origin = self.beam_origin();
            for beam in &self.beams {
                surface.draw(&beam.shape(origin));
            }
        }

        surface.draw(&Shape::Circle {
            center: self.object.center,
            radius: self.object.radius,
            color: colors::OBJECT,
        });
        surface.draw(&Shape::Circle {
            center: self.sun.center,
            radius: self.sun.radius,
            color: colors::SUN,
        });

        surface.display()
    }

    /// Run one loop iteration. Returns `false` once the loop should stop.
    pub fn frame<S, I>(&mut self, events: I, surface: &mut S) -> Result<bool, RenderError>
    where
        S: RenderSurface + ?Sized,
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if !self.handle_event(event) {
                return Ok(false);
            }
        }

        self.update();
        self.render(surface)?;
        Ok(surface.is_open())
    }

    /// Beams shortened by the object this frame
    pub fn blocked_beams(&self) -> impl Iterator<Item = &Beam> {
        self.beams.iter().filter(|b| b.length < BEAM_LENGTH)
    }
}

/// Angle in degrees of beam `index` out of `count` equally spaced beams
#[inline]
pub fn beam_angle(index: usize, count: usize) -> f32 {
    360.0 / count as f32 * index as f32
}
