//! Canvas scene driver: owns the one `Simulation`, the backdrop canvas and
//! the repaint loop. Everything browser-facing lives here; the simulation
//! itself is platform-free (see `sim`).

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::rng::MathRandom;

mod grid;
mod heart;
mod raster;
mod sim;

pub use grid::{BASE_COLOR, Cell, GLYPH_RAMP, Grid};
pub use heart::{
    EDGE_MARGIN, Heart, HeartField, SCALE_MAX, SCALE_MIN, SPAWN_RATE, SPEED_MAX, SPEED_MIN,
};
pub use raster::{
    ASPECT_RATIO, OUTLINE_BAND, PINK_PALETTE, heart_equation, is_heart_outline, rasterize,
};
pub use sim::Simulation;

/// Pixel pitch of one grid cell; doubles as the font size glyphs draw at.
pub const CELL_SIZE: f64 = 14.0;

/// Shadow blur radius applied to tinted glyphs so the hearts glow.
const GLOW_BLUR: f64 = 8.0;

const CANVAS_ID: &str = "heartfall-canvas";

/// Runtime scene state: platform handles plus the simulation they drive.
struct SceneState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sim: Simulation,
    rng: MathRandom,
}

thread_local! {
    static SCENE_STATE: std::cell::RefCell<Option<SceneState>> = std::cell::RefCell::new(None);
}

/// Attach the backdrop canvas and start the animation loop. The loop runs
/// until the hosting page is torn down; there is no stop state.
pub fn start_scene() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Reuse the host page's canvas if present, otherwise create a fixed
    // full-viewport backdrop behind the page content.
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        c.set_attribute(
            "style",
            "position:fixed; left:0; top:0; z-index:-1; pointer-events:none; background:#111;",
        )
        .ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas.get_context("2d")?.unwrap().dyn_into()?;

    let (width, height) = viewport_size(&win);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let mut rng = MathRandom;
    let sim = Simulation::new(width, height, CELL_SIZE, &mut rng);
    SCENE_STATE.with(|cell| {
        cell.replace(Some(SceneState {
            canvas,
            ctx,
            sim,
            rng,
        }))
    });

    // Rebuild the grid whenever the viewport changes. Hearts mid-fall keep
    // their absolute pixel positions across the rebuild.
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            SCENE_STATE.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    if let Some(win) = window() {
                        let (width, height) = viewport_size(&win);
                        state.canvas.set_width(width as u32);
                        state.canvas.set_height(height as u32);
                        state.sim.resize(width, height, &mut state.rng);
                    }
                }
            });
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    start_frame_loop();
    Ok(())
}

/// Hearts currently falling; 0 when the scene has not started.
pub fn heart_count() -> usize {
    SCENE_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|state| state.sim.hearts.len())
            .unwrap_or(0)
    })
}

fn viewport_size(win: &web_sys::Window) -> (f64, f64) {
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        SCENE_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                scene_tick(state);
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn scene_tick(state: &mut SceneState) {
    state.sim.step(&mut state.rng);
    render(state);
}

/// Paint the grid. A pure read of the simulation: clears the surface, then
/// draws each glyph in its current color, with a glow on tinted cells.
fn render(state: &SceneState) {
    let ctx = &state.ctx;
    let sim = &state.sim;
    ctx.clear_rect(0.0, 0.0, sim.width(), sim.height());
    if sim.grid.is_empty() {
        return;
    }

    ctx.set_font(&format!("bold {CELL_SIZE}px monospace"));
    ctx.set_text_baseline("middle");

    let cell_size = sim.grid.cell_size();
    for row in 0..sim.grid.rows() {
        for col in 0..sim.grid.cols() {
            let cell = sim.grid.cell(row, col);
            ctx.set_fill_style_str(cell.color);
            if cell.color != BASE_COLOR {
                ctx.set_shadow_blur(GLOW_BLUR);
                ctx.set_shadow_color(cell.color);
            } else {
                ctx.set_shadow_blur(0.0);
            }
            ctx.fill_text(
                cell.glyph,
                col as f64 * cell_size,
                row as f64 * cell_size + cell_size / 2.0,
            )
            .ok();
        }
    }
    ctx.set_shadow_blur(0.0);
}
