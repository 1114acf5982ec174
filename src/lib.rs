//! Neural Canvas - decorative particle network animation
//!
//! Drifting particles linked by a static proximity graph, with signals
//! traveling along each link and pointer-driven activation:
//! - `core`: platform-agnostic simulator, renderer and frame loop
//! - `app`: eframe/egui host for native windows and browser canvases

pub mod core;

#[cfg(any(feature = "wasm", feature = "native"))]
pub mod app;
#[cfg(any(feature = "wasm", feature = "native"))]
mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::*;

/// Id of the canvas element the web build mounts on
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
const CANVAS_ID: &str = "neural-network";

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen(start)]
pub fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let config = crate::core::NetworkConfig::default();
    let seed = crate::core::entropy_seed().expect("no entropy source for seeding");
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id(CANVAS_ID)
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::NeuralCanvasApp::new(cc, config, seed)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
