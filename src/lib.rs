#![cfg(target_arch = "wasm32")]
use crate::core::{SessionParams, WeldSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod draw;
mod events;
mod frame;
mod hud;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("weld-trainer starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Backing size is fixed by the page; resizing would wipe the bead.
    let ctx = dom::canvas_2d(&canvas)?;
    let surface = Rc::new(draw::Surface::new(ctx, &canvas));

    let session = Rc::new(RefCell::new(WeldSession::new(
        SessionParams::default(),
        surface.width as f32,
        surface.height as f32,
        instant::now(),
    )));
    log::info!(
        "[session] surface={}x{} start=({:.0},{:.0})",
        surface.width,
        surface.height,
        session.borrow().last_sample().pos.x,
        session.borrow().last_sample().pos.y
    );

    let wiring = events::GameWiring {
        document: document.clone(),
        canvas,
        surface,
        session,
    };
    events::restart_session(&wiring);

    events::wire_pointermove(&wiring);
    events::wire_global_keydown(&wiring);
    let restart_wiring = wiring.clone();
    dom::add_click_listener(&document, constants::RESTART_BUTTON_ID, move || {
        events::restart_session(&restart_wiring);
    });

    frame::start_loop();
    Ok(())
}
