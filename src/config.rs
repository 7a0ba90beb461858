// Options for the browser-facing NetworkCanvas, read from a plain JS object:
//
//   new NetworkCanvas({ canvasId: "network-canvas", seed: 7, retryOnResize: true, profileFrames: false })
//
// Missing or mistyped keys keep their defaults.

use wasm_bindgen::JsValue;

pub const DEFAULT_CANVAS_ID: &str = "network-canvas";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub canvas_id: String,
    pub seed: Option<u64>,
    pub retry_on_resize: bool,
    pub profile_frames: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            canvas_id: DEFAULT_CANVAS_ID.to_owned(),
            seed: None,
            retry_on_resize: true,
            profile_frames: false,
        }
    }
}

impl Config {
    pub fn from_js(options: &JsValue) -> Config {
        let mut config = Config::default();
        if !options.is_object() {
            return config;
        }

        if let Some(canvas_id) = property(options, "canvasId").as_string() {
            if !canvas_id.is_empty() {
                config.canvas_id = canvas_id;
            }
        }
        if let Some(seed) = property(options, "seed").as_f64() {
            if seed.is_finite() && seed >= 0.0 {
                config.seed = Some(seed as u64);
            }
        }
        if let Some(retry) = property(options, "retryOnResize").as_bool() {
            config.retry_on_resize = retry;
        }
        if let Some(profile) = property(options, "profileFrames").as_bool() {
            config.profile_frames = profile;
        }
        config
    }
}

fn property(object: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(object, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_network_canvas() {
        let config = Config::default();
        assert_eq!(config.canvas_id, "network-canvas");
        assert_eq!(config.seed, None);
        assert!(config.retry_on_resize);
        assert!(!config.profile_frames);
    }
}
