// Test doubles for the drawing surface and the host.

use crate::color::Color;
use crate::host::{FrameHandle, Host};
use crate::surface::DrawingSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    GlobalAlpha(f64),
    FillRect(f64, f64, f64, f64),
    FillCircle([f64; 2], f64),
    StrokeCircle([f64; 2], f64),
    StrokeLine([f64; 2], [f64; 2]),
}

// Clones share the op log, display size and fit counter, so a test can keep
// one handle while the animation owns another.
#[derive(Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    display: Rc<Cell<(u32, u32)>>,
    fits: Rc<Cell<u32>>,
    ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> RecordingSurface {
        RecordingSurface {
            width,
            height,
            display: Rc::new(Cell::new((width, height))),
            fits: Rc::new(Cell::new(0)),
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set_display_size(&self, width: u32, height: u32) {
        self.display.set((width, height));
    }

    pub fn fit_count(&self) -> u32 {
        self.fits.get()
    }

    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    pub fn clear_ops(&self) {
        self.ops.borrow_mut().clear();
    }

    fn record(&self, op: DrawOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn display_size(&self) -> (u32, u32) {
        self.display.get()
    }

    fn fit_to_display(&mut self) {
        let (width, height) = self.display.get();
        self.width = width;
        self.height = height;
        self.fits.set(self.fits.get() + 1);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.record(DrawOp::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.record(DrawOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(DrawOp::LineWidth(width));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.record(DrawOp::GlobalAlpha(alpha));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(DrawOp::FillRect(x, y, width, height));
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64) {
        self.record(DrawOp::FillCircle(center, radius));
    }

    fn stroke_circle(&mut self, center: [f64; 2], radius: f64) {
        self.record(DrawOp::StrokeCircle(center, radius));
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2]) {
        self.record(DrawOp::StrokeLine(from, to));
    }
}

pub struct StubHost {
    pub surface: RefCell<Option<RecordingSurface>>,
    pub displayed: Cell<bool>,
    pub reduced_motion: Cell<bool>,
    // When false, cancelled frames still fire, like a host that lost the race
    pub honor_cancel: Cell<bool>,
    pending: RefCell<Vec<(FrameHandle, Box<dyn FnOnce()>)>>,
    next_handle: Cell<FrameHandle>,
    cancelled: RefCell<Vec<FrameHandle>>,
    resize_listeners: RefCell<Vec<Box<dyn FnMut()>>>,
}

impl StubHost {
    pub fn with_surface(surface: &RecordingSurface) -> StubHost {
        StubHost {
            surface: RefCell::new(Some(surface.clone())),
            displayed: Cell::new(true),
            reduced_motion: Cell::new(false),
            honor_cancel: Cell::new(true),
            pending: RefCell::new(Vec::new()),
            next_handle: Cell::new(1),
            cancelled: RefCell::new(Vec::new()),
            resize_listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn without_surface() -> StubHost {
        let host = StubHost::with_surface(&RecordingSurface::new(0, 0));
        host.surface.replace(None);
        host
    }

    pub fn pending_frames(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn cancelled_frames(&self) -> Vec<FrameHandle> {
        self.cancelled.borrow().clone()
    }

    pub fn resize_listener_count(&self) -> usize {
        self.resize_listeners.borrow().len()
    }

    // Fires every frame callback that was due before this call
    pub fn run_frame(&self) -> usize {
        let due = self.pending.replace(Vec::new());
        let fired = due.len();
        for (_, callback) in due {
            callback();
        }
        fired
    }

    pub fn resize(&self) {
        let mut listeners = self.resize_listeners.replace(Vec::new());
        for listener in listeners.iter_mut() {
            listener();
        }
        // Listeners added while dispatching go after the existing ones
        let added = self.resize_listeners.replace(Vec::new());
        listeners.extend(added);
        self.resize_listeners.replace(listeners);
    }
}

impl Host for StubHost {
    type Surface = RecordingSurface;

    fn find_surface(&self) -> Option<RecordingSurface> {
        self.surface.borrow().clone()
    }

    fn is_displayed(&self, _surface: &RecordingSurface) -> bool {
        self.displayed.get()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.get()
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        self.pending.borrow_mut().push((handle, callback));
        Some(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.cancelled.borrow_mut().push(handle);
        if self.honor_cancel.get() {
            self.pending.borrow_mut().retain(|(pending, _)| *pending != handle);
        }
    }

    fn on_resize(&self, callback: Box<dyn FnMut()>) {
        self.resize_listeners.borrow_mut().push(callback);
    }
}
