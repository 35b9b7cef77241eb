//! Errors raised while setting up or presenting to a render surface

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("Failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Canvas element not found: {0}")]
    MissingCanvas(String),
}
