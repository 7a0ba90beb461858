// Browser side: a 2d canvas context as the drawing surface, and the window
// as the host (requestAnimationFrame, matchMedia, resize events).

use crate::color::Color;
use crate::config::Config;
use crate::host::{FrameHandle, Host};
use crate::surface::DrawingSurface;
use crate::utils::Timer;
use std::f64::consts::PI;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, Window};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // None when the canvas can't hand out a 2d context
    pub fn new(canvas: HtmlCanvasElement) -> Result<Option<CanvasSurface>, JsValue> {
        let context = match canvas.get_context("2d")? {
            Some(context) => context.dyn_into::<CanvasRenderingContext2d>()?,
            None => return Ok(None),
        };
        Ok(Some(CanvasSurface { canvas, context }))
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawingSurface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn display_size(&self) -> (u32, u32) {
        (
            self.canvas.offset_width().max(0) as u32,
            self.canvas.offset_height().max(0) as u32,
        )
    }

    fn fit_to_display(&mut self) {
        let (width, height) = self.display_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64) {
        self.context.begin_path();
        if self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0).is_ok() {
            self.context.fill();
        }
    }

    fn stroke_circle(&mut self, center: [f64; 2], radius: f64) {
        self.context.begin_path();
        if self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0).is_ok() {
            self.context.stroke();
        }
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2]) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}

pub struct BrowserHost {
    window: Window,
    canvas_id: String,
    profile_frames: bool,
}

impl BrowserHost {
    pub fn new(config: &Config) -> Result<BrowserHost, JsValue> {
        let window = web_sys::window().ok_or("no global `window` exists")?;
        Ok(BrowserHost {
            window,
            canvas_id: config.canvas_id.clone(),
            profile_frames: config.profile_frames,
        })
    }

    fn lookup_surface(&self) -> Result<Option<CanvasSurface>, JsValue> {
        let document = match self.window.document() {
            Some(document) => document,
            None => return Ok(None),
        };
        let canvas = match document.get_element_by_id(&self.canvas_id) {
            Some(element) => match element.dyn_into::<HtmlCanvasElement>() {
                Ok(canvas) => canvas,
                Err(_) => return Ok(None),
            },
            None => return Ok(None),
        };
        CanvasSurface::new(canvas)
    }

    fn computed_display(&self, surface: &CanvasSurface) -> Result<Option<String>, JsValue> {
        match self.window.get_computed_style(surface.canvas())? {
            Some(style) => Ok(Some(style.get_property_value("display")?)),
            None => Ok(None),
        }
    }
}

impl Host for BrowserHost {
    type Surface = CanvasSurface;

    fn find_surface(&self) -> Option<CanvasSurface> {
        self.lookup_surface().ok().flatten()
    }

    fn is_displayed(&self, surface: &CanvasSurface) -> bool {
        self.computed_display(surface)
            .ok()
            .flatten()
            .map_or(true, |display| display != "none")
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map_or(false, |query| query.matches())
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
        let profile = self.profile_frames;
        let frame = Closure::once_into_js(move || {
            let _timer = if profile {
                Some(Timer::new("NetworkCanvas frame"))
            } else {
                None
            };
            callback();
        });
        self.window.request_animation_frame(frame.unchecked_ref()).ok()
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle);
    }

    fn on_resize(&self, callback: Box<dyn FnMut()>) {
        let listener = Closure::wrap(callback);
        let mut options = AddEventListenerOptions::new();
        options.passive(true);
        if let Err(err) = self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "resize",
                listener.as_ref().unchecked_ref(),
                &options,
            )
        {
            console::error_2(&"NetworkCanvas: failed to listen for resize".into(), &err);
        }
        // Lives as long as the page
        listener.forget();
    }
}
