// What the animation needs from its environment. In the browser this is the
// window; tests drive a stub whose frames and resizes are fired by hand.

use crate::surface::DrawingSurface;

/// Cancellable handle for one requested animation frame.
pub type FrameHandle = i32;

pub trait Host {
    type Surface: DrawingSurface + 'static;

    /// Finds the surface to draw on, if the page has one.
    fn find_surface(&self) -> Option<Self::Surface>;

    /// Whether the surface is laid out at all (not `display: none`).
    fn is_displayed(&self, surface: &Self::Surface) -> bool;

    /// The user has asked for non-essential motion to be suppressed.
    fn prefers_reduced_motion(&self) -> bool;

    /// Runs `callback` once, before the next repaint. `None` when the host
    /// refused to schedule it.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle>;

    fn cancel_frame(&self, handle: FrameHandle);

    /// Calls `callback` whenever the viewport may have changed size, for the
    /// rest of the page's lifetime.
    fn on_resize(&self, callback: Box<dyn FnMut()>);
}
