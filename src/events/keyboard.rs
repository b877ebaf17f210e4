use super::{restart_session, GameWiring};
use crate::core::PeakDetection;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Restart,
    TogglePeakDetection,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::Restart),
        "d" | "D" => Some(KeyAction::TogglePeakDetection),
        _ => None,
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &GameWiring) {
    match action_for_key(&ev.key()) {
        Some(KeyAction::Restart) => {
            restart_session(w);
            ev.prevent_default();
        }
        Some(KeyAction::TogglePeakDetection) => {
            let mut s = w.session.borrow_mut();
            s.params.peak_detection = match s.params.peak_detection {
                PeakDetection::AnyLargeDelta => PeakDetection::DirectionReversal,
                PeakDetection::DirectionReversal => PeakDetection::AnyLargeDelta,
            };
            // takes effect on the next restart; the current pass keeps its history
            log::info!(
                "[keys] peak detection {:?} from next pass",
                s.params.peak_detection
            );
            ev.prevent_default();
        }
        None => {}
    }
}

pub fn wire_global_keydown(w: &GameWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
