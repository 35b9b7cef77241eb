//! Platform abstraction layer
//!
//! Handles native/browser differences for:
//! - Window or canvas creation
//! - Translating pointer input into [`InputEvent`](crate::scene::InputEvent)
//! - Driving the frame loop (winit redraws / requestAnimationFrame)

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;
