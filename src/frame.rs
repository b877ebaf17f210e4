use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Keep-alive loop on `requestAnimationFrame`. Drawing happens in the
/// pointer handler, so the tick itself touches no game state.
pub fn start_loop() {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
