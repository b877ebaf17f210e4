pub mod keyboard;
pub mod pointer;

pub use keyboard::*;
pub use pointer::*;

use crate::core::WeldSession;
use crate::draw::Surface;
use crate::hud;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Handles shared by every input closure.
#[derive(Clone)]
pub struct GameWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub surface: Rc<Surface>,
    pub session: Rc<RefCell<WeldSession>>,
}

/// Fresh pass: zero the accumulators, wipe the plate and redraw the guides.
pub fn restart_session(w: &GameWiring) {
    w.session.borrow_mut().restart(instant::now());
    w.surface.clear();
    w.surface.draw_guides();
    hud::reset(&w.document);
    log::info!(
        "[session] started, peak detection {:?}",
        w.session.borrow().params.peak_detection
    );
}
