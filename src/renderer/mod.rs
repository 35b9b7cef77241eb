//! Rendering module
//!
//! The scene submits [`Shape`]s to any [`RenderSurface`]; `WgpuSurface`
//! tessellates them into a single triangle list per frame.

pub mod error;
pub mod pipeline;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use error::RenderError;
pub use pipeline::WgpuSurface;
pub use surface::{RenderSurface, Shape};
pub use vertex::colors;
