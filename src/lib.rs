//! Heartfall core crate.
//!
//! Renders an animated ASCII-art backdrop onto an HTML canvas: a grid of
//! monochrome glyphs, periodically crossed by falling pink hearts whose
//! outlines are sampled from an implicit curve. `start_background()` attaches
//! the canvas and runs the repaint loop until the page is torn down.

use wasm_bindgen::prelude::*;

pub mod rng;
pub mod scene;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Attach the backdrop canvas to the current document and start the
/// animation loop. Reuses an existing `#heartfall-canvas` element if the
/// host page provides one.
#[wasm_bindgen]
pub fn start_background() -> Result<(), JsValue> {
    scene::start_scene()
}

/// Number of hearts currently falling; 0 before `start_background()` runs.
#[wasm_bindgen]
pub fn active_heart_count() -> usize {
    scene::heart_count()
}
