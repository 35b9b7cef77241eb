//! Browser canvas, DOM input listeners and the requestAnimationFrame loop

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::renderer::{RenderError, WgpuSurface};
use crate::scene::{InputEvent, Scene, window_to_scene};

/// Scene plus the surface it draws to, shared with DOM callbacks
struct WebApp {
    scene: Scene,
    surface: WgpuSurface,
    /// Input received since the last animation frame
    pending: Vec<InputEvent>,
}

/// Attach to `#canvas` and start the animation loop
pub async fn run() -> Result<(), RenderError> {
    let window = web_sys::window().ok_or_else(|| RenderError::MissingCanvas("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| RenderError::MissingCanvas("no document".into()))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| RenderError::MissingCanvas("#canvas".into()))?;
    canvas.set_width(WINDOW_WIDTH);
    canvas.set_height(WINDOW_HEIGHT);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let surface = WgpuSurface::new(surface, &adapter, WINDOW_WIDTH, WINDOW_HEIGHT).await?;

    let app = Rc::new(RefCell::new(WebApp {
        scene: Scene::new(),
        surface,
        pending: Vec::new(),
    }));

    setup_input_handlers(&canvas, app.clone());
    request_animation_frame(app);

    log::info!("Sunshadow running!");
    Ok(())
}

/// Pointer position in scene coordinates
fn canvas_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
    let position = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
    let client = Vec2::new(canvas.client_width() as f32, canvas.client_height() as f32);
    window_to_scene(position, client)
}

fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<WebApp>>) {
    // Mouse down on the canvas starts a drag
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().pending.push(InputEvent::PointerPressed);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Mouse up anywhere ends it, even outside the canvas
    if let Some(window) = web_sys::window() {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().pending.push(InputEvent::PointerReleased);
        });
        let _ = window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Mouse move
    {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let position = canvas_position(&canvas_clone, &event);
            app.borrow_mut().pending.push(InputEvent::PointerMoved(position));
        });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn request_animation_frame(app: Rc<RefCell<WebApp>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        frame_loop(app);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn frame_loop(app: Rc<RefCell<WebApp>>) {
    let keep_going = {
        let mut guard = app.borrow_mut();
        let WebApp {
            scene,
            surface,
            pending,
        } = &mut *guard;

        match scene.frame(pending.drain(..), surface) {
            Ok(keep_going) => keep_going,
            Err(e) => {
                log::error!("{e}");
                false
            }
        }
    };

    if keep_going {
        request_animation_frame(app);
    } else {
        log::info!("Frame loop stopped");
    }
}
