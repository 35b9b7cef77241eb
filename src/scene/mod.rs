//! Scene state and per-frame orchestration
//!
//! One frame is: drain input, move the object, recompute the occlusion
//! range and beam lengths, then submit shapes to a render surface.

pub mod input;
pub mod state;

pub use input::{InputEvent, window_to_scene};
pub use state::{Beam, Scene};
