//! Native window and event loop (winit + wgpu)

use std::sync::Arc;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::renderer::{RenderError, WgpuSurface};
use crate::scene::{InputEvent, Scene, window_to_scene};

/// Open the window and run the frame loop until it is closed
pub fn run() -> Result<(), RenderError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Window, GPU surface and scene, created once the event loop resumes
struct App {
    scene: Scene,
    window: Option<Arc<Window>>,
    surface: Option<WgpuSurface>,
    /// Input received since the last frame
    pending: Vec<InputEvent>,
    error: Option<RenderError>,
}

impl App {
    fn new() -> Self {
        Self {
            scene: Scene::new(),
            window: None,
            surface: None,
            pending: Vec::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RenderError> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = Arc::new(event_loop.create_window(attributes)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let surface = pollster::block_on(WgpuSurface::new(
            surface,
            &adapter,
            size.width,
            size.height,
        ))?;

        window.request_redraw();
        self.surface = Some(surface);
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RenderError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        match self.scene.frame(self.pending.drain(..), surface) {
            Ok(true) => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Ok(false) => event_loop.exit(),
            Err(e) => self.fail(event_loop, e),
        }
    }

    /// Cursor position in scene coordinates
    fn pointer_position(&self, x: f64, y: f64) -> Vec2 {
        let position = Vec2::new(x as f32, y as f32);
        match &self.window {
            Some(window) => {
                let size = window.inner_size();
                window_to_scene(position, Vec2::new(size.width as f32, size.height as f32))
            }
            None => position,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Creating {}x{} window", WINDOW_WIDTH, WINDOW_HEIGHT);
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if !self.scene.handle_event(InputEvent::Close) {
                    log::info!("Window closed");
                    if let Some(surface) = self.surface.as_mut() {
                        surface.close();
                    }
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.resize(size.width, size.height);
                }
            }
            WindowEvent::MouseInput { state, .. } => {
                self.pending.push(match state {
                    ElementState::Pressed => InputEvent::PointerPressed,
                    ElementState::Released => InputEvent::PointerReleased,
                });
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = self.pointer_position(position.x, position.y);
                self.pending.push(InputEvent::PointerMoved(position));
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
