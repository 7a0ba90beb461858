// Lifecycle of the particle network on a host: the precondition checks,
// the single resize listener, and a frame loop that schedules its next
// frame only once the current one has been drawn.

use crate::host::{FrameHandle, Host};
use crate::network::ParticleNetwork;
use crate::surface::DrawingSurface;
use rand::Rng;
use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

struct FrameLoop<S> {
    network: ParticleNetwork,
    surface: Rc<RefCell<S>>,
    handle: Option<FrameHandle>,
    stopped: bool,
}

pub struct NetworkAnimation<H: Host, R> {
    host: Rc<H>,
    rng: R,
    // Bound to the resize listener once the first start succeeds
    surface: Option<Rc<RefCell<H::Surface>>>,
    running: Option<Rc<RefCell<FrameLoop<H::Surface>>>>,
}

impl<H: Host, R> NetworkAnimation<H, R> {
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// True once a start has succeeded, even if the animation was stopped since.
    pub fn has_started(&self) -> bool {
        self.surface.is_some()
    }

    pub fn network(&self) -> Option<Ref<'_, ParticleNetwork>> {
        self.running
            .as_ref()
            .map(|frame_loop| Ref::map(frame_loop.borrow(), |state| &state.network))
    }

    /// Cancels the pending frame. Nothing is drawn after this returns, even if
    /// the host still delivers the cancelled callback.
    pub fn stop(&mut self) {
        if let Some(frame_loop) = self.running.take() {
            let mut state = frame_loop.borrow_mut();
            state.stopped = true;
            if let Some(handle) = state.handle.take() {
                self.host.cancel_frame(handle);
            }
        }
    }
}

impl<H: Host + 'static, R: Rng> NetworkAnimation<H, R> {
    pub fn new(host: Rc<H>, rng: R) -> NetworkAnimation<H, R> {
        NetworkAnimation {
            host,
            rng,
            surface: None,
            running: None,
        }
    }

    /// Starts animating. Returns whether the animation is running afterwards.
    ///
    /// Does nothing (and returns false) when there is no surface, it isn't
    /// displayed or has no size, or the user prefers reduced motion. Calling it
    /// while already running is a no-op. The resize listener is registered by
    /// the first successful call only.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return true;
        }

        let surface = match &self.surface {
            Some(surface) => Rc::clone(surface),
            None => match self.host.find_surface() {
                Some(surface) => Rc::new(RefCell::new(surface)),
                None => return false,
            },
        };

        if !self.host.is_displayed(&surface.borrow()) || self.host.prefers_reduced_motion() {
            return false;
        }
        let (display_width, display_height) = surface.borrow().display_size();
        if display_width == 0 || display_height == 0 {
            return false;
        }

        surface.borrow_mut().fit_to_display();
        let network = {
            let s = surface.borrow();
            ParticleNetwork::new(s.width(), s.height(), &mut self.rng)
        };

        if self.surface.is_none() {
            let resized = Rc::clone(&surface);
            self.host
                .on_resize(Box::new(move || resized.borrow_mut().fit_to_display()));
            self.surface = Some(Rc::clone(&surface));
        }

        let frame_loop = Rc::new(RefCell::new(FrameLoop {
            network,
            surface,
            handle: None,
            stopped: false,
        }));
        schedule_frame(&self.host, &frame_loop);
        self.running = Some(frame_loop);
        true
    }
}

impl<H: Host, R> Drop for NetworkAnimation<H, R> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Keeps retrying `start` on every resize until one succeeds, for surfaces
/// that only become visible once the layout changes.
pub fn retry_start_on_resize<H, R>(animation: &Rc<RefCell<NetworkAnimation<H, R>>>)
where
    H: Host + 'static,
    R: Rng + 'static,
{
    let host = Rc::clone(&animation.borrow().host);
    let animation = Rc::downgrade(animation);
    host.on_resize(Box::new(move || {
        if let Some(animation) = animation.upgrade() {
            let mut animation = animation.borrow_mut();
            if !animation.has_started() {
                animation.start();
            }
        }
    }));
}

fn schedule_frame<H: Host + 'static>(host: &Rc<H>, frame_loop: &Rc<RefCell<FrameLoop<H::Surface>>>) {
    let next_host: Weak<H> = Rc::downgrade(host);
    let next_loop = Rc::clone(frame_loop);
    let handle = host.request_frame(Box::new(move || {
        if let Some(host) = next_host.upgrade() {
            run_frame(&host, &next_loop);
        }
    }));
    frame_loop.borrow_mut().handle = handle;
}

fn run_frame<H: Host + 'static>(host: &Rc<H>, frame_loop: &Rc<RefCell<FrameLoop<H::Surface>>>) {
    {
        let mut state = frame_loop.borrow_mut();
        if state.stopped {
            return;
        }
        state.handle = None;
        let FrameLoop { network, surface, .. } = &mut *state;
        network.step(&mut *surface.borrow_mut());
    }
    schedule_frame(host, frame_loop);
}
