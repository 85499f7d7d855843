//! WASM exports: mount the starfield onto a page canvas.
//!
//! The hosting page calls `field_mount("bg-canvas", "dark")` once the canvas
//! element is live, forwards theme changes through `field_set_color_mode`,
//! and calls `field_unmount` when the component goes away. Between mount and
//! unmount the bridge owns a self-rescheduling `requestAnimationFrame` loop
//! and a window resize listener; unmount cancels the pending frame first,
//! then removes the listener, so a late resize can never tick a dead loop.

mod canvas;
mod runner;

pub use canvas::CanvasSurface;
pub use runner::{FieldRunner, TICK_DT};

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use starfield_engine::{ColorMode, FieldConfig};

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner<CanvasSurface>>> = RefCell::new(None);
    static FRAME: RefCell<Option<Closure<dyn FnMut(f64)>>> = RefCell::new(None);
    static FRAME_HANDLE: Cell<Option<i32>> = Cell::new(None);
    static LAST_TIMESTAMP: Cell<f64> = Cell::new(0.0);
    static RESIZE: RefCell<Option<Closure<dyn FnMut()>>> = RefCell::new(None);
}

fn with_runner(f: impl FnOnce(&mut FieldRunner<CanvasSurface>)) {
    RUNNER.with(|cell| {
        if let Some(runner) = cell.borrow_mut().as_mut() {
            f(runner);
        }
    });
}

fn viewport(window: &web_sys::Window) -> (u32, u32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width.max(0.0) as u32, height.max(0.0) as u32)
}

fn request_next_frame() {
    let Some(window) = web_sys::window() else {
        return;
    };
    FRAME.with(|cell| {
        if let Some(closure) = cell.borrow().as_ref() {
            match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                Ok(handle) => FRAME_HANDLE.with(|c| c.set(Some(handle))),
                Err(err) => log::error!("starfield: requestAnimationFrame failed: {:?}", err),
            }
        }
    });
}

fn start_frame_loop() {
    LAST_TIMESTAMP.with(|c| c.set(0.0));
    let closure = Closure::wrap(Box::new(move |timestamp: f64| {
        let last = LAST_TIMESTAMP.with(|c| c.replace(timestamp));
        // First callback has no previous timestamp; it only paints.
        let dt = if last > 0.0 {
            ((timestamp - last) / 1000.0) as f32
        } else {
            0.0
        };
        with_runner(|runner| runner.tick(dt));
        request_next_frame();
    }) as Box<dyn FnMut(f64)>);
    FRAME.with(|cell| *cell.borrow_mut() = Some(closure));
    request_next_frame();
}

fn install_resize_listener(window: &web_sys::Window) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let (width, height) = viewport(&window);
        with_runner(|runner| runner.resize(width, height));
    }) as Box<dyn FnMut()>);
    if let Err(err) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::error!("starfield: failed to register resize listener: {:?}", err);
    }
    RESIZE.with(|cell| *cell.borrow_mut() = Some(closure));
}

/// Mount the starfield onto the canvas with the given element id.
///
/// A missing window, canvas, or 2D context logs a warning and mounts
/// nothing; the page simply has no animated background until the canvas
/// appears and mount is called again. Mounting over a live instance tears
/// the old one down first so two frame loops never drive the same surface.
#[wasm_bindgen]
pub fn field_mount(canvas_id: &str, mode: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if RUNNER.with(|cell| cell.borrow().is_some()) {
        field_unmount();
    }

    let Some(window) = web_sys::window() else {
        log::warn!("starfield: no window, not mounting");
        return;
    };
    let Some(canvas) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
    else {
        log::warn!("starfield: canvas #{} not found, not mounting", canvas_id);
        return;
    };
    let Some(surface) = CanvasSurface::from_canvas(canvas) else {
        log::warn!("starfield: 2d context unavailable, not mounting");
        return;
    };

    let config = FieldConfig::default().with_seed(js_sys::Date::now() as u64);
    let mut runner = FieldRunner::new(surface, config, ColorMode::from_name(mode));
    let (width, height) = viewport(&window);
    runner.init(width, height);
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

    install_resize_listener(&window);
    start_frame_loop();
}

/// Forward a theme change. The palette is re-derived and the whole pool
/// resets (in-flight trails are discarded); the running frame loop and
/// resize listener are reused.
#[wasm_bindgen]
pub fn field_set_color_mode(mode: &str) {
    let mode = ColorMode::from_name(mode);
    with_runner(|runner| runner.set_color_mode(mode));
}

/// Apply a JSON configuration override. A parse failure is logged and the
/// previous configuration stays in effect.
#[wasm_bindgen]
pub fn field_configure(json: &str) {
    match FieldConfig::from_json(json) {
        Ok(config) => with_runner(|runner| runner.configure(config)),
        Err(err) => log::error!("starfield: bad field config: {}", err),
    }
}

/// Detach and release everything: cancel the pending animation frame, then
/// remove the resize listener, then drop the runner. Safe to call when
/// nothing is mounted.
#[wasm_bindgen]
pub fn field_unmount() {
    if let Some(window) = web_sys::window() {
        if let Some(handle) = FRAME_HANDLE.with(|c| c.take()) {
            if let Err(err) = window.cancel_animation_frame(handle) {
                log::error!("starfield: cancelAnimationFrame failed: {:?}", err);
            }
        }
        if let Some(closure) = RESIZE.with(|cell| cell.borrow_mut().take()) {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
    FRAME.with(|cell| cell.borrow_mut().take());
    with_runner(|runner| runner.teardown());
    RUNNER.with(|cell| cell.borrow_mut().take());
}
