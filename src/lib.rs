mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod host;
pub mod network;
pub mod particle;
pub mod surface;
pub mod web;

#[cfg(test)]
mod testing;

use animation::{retry_start_on_resize, NetworkAnimation};
use config::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web::BrowserHost;
use web_sys::console;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// The animated particle network behind the page header.
///
/// ```js
/// const network = new NetworkCanvas({ canvasId: "network-canvas" });
/// network.start();
/// ```
#[wasm_bindgen]
pub struct NetworkCanvas {
    animation: Rc<RefCell<NetworkAnimation<BrowserHost, StdRng>>>,
}

#[wasm_bindgen]
impl NetworkCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> Result<NetworkCanvas, JsValue> {
        let config = Config::from_js(options);
        let host = Rc::new(BrowserHost::new(&config)?);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let animation = Rc::new(RefCell::new(NetworkAnimation::new(host, rng)));
        if config.retry_on_resize {
            retry_start_on_resize(&animation);
        }
        Ok(NetworkCanvas { animation })
    }

    /// Safe to call repeatedly. Returns false, without doing anything, when
    /// there is nothing to animate: no canvas, a hidden or empty one, or a
    /// reduced-motion preference.
    pub fn start(&self) -> bool {
        let mut animation = self.animation.borrow_mut();
        let was_running = animation.is_running();
        let running = animation.start();
        if running && !was_running {
            if let Some(network) = animation.network() {
                console::log_1(&format!("NetworkCanvas: animating {} particles", network.len()).into());
            }
        }
        running
    }

    pub fn stop(&self) {
        self.animation.borrow_mut().stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animation.borrow().is_running()
    }

    #[wasm_bindgen(getter = particleCount)]
    pub fn particle_count(&self) -> u32 {
        let animation = self.animation.borrow();
        let count = animation.network().map_or(0, |network| network.len() as u32);
        count
    }
}
