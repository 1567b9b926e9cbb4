//! Browser bindings
//!
//! The page owns the canvas, the animation frame loop and the input
//! listeners; it forwards `requestAnimationFrame` timestamps to `frame` and
//! every click/tap/key press to `input`.

use wasm_bindgen::prelude::*;

use crate::engine::Engine;
use crate::persistence::LocalStorageStore;
use crate::platform::init_logging;
use crate::settings::Settings;

#[wasm_bindgen]
pub struct WebGame {
    engine: Engine<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let settings = Settings::default();
        init_logging(&settings.log_filter);
        let store = LocalStorageStore::new(settings.storage_key.clone());
        WebGame {
            engine: Engine::new(store, &settings),
        }
    }

    /// Advance one animation frame
    pub fn frame(&mut self, timestamp_ms: f64) {
        self.engine.advance(timestamp_ms);
    }

    /// Flap / start / restart
    pub fn input(&mut self) {
        self.engine.handle_input();
    }

    /// Page hidden: stop ticking
    pub fn pause(&mut self) {
        self.engine.stop();
    }

    /// Page visible again
    pub fn resume(&mut self) {
        self.engine.resume();
    }

    /// Current world as JSON for the page's renderer
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn score(&self) -> u32 {
        self.engine.snapshot().score
    }

    pub fn best_score(&self) -> u32 {
        self.engine.snapshot().best_score
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
