use super::GameWiring;
use crate::core::PointerSample;
use crate::hud;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(w: &GameWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let sample = PointerSample::new(pos.x, pos.y, instant::now());

        let report = match w.session.borrow_mut().process(sample) {
            Some(r) => r,
            None => return,
        };
        log::debug!(
            "[sample] speed={:.1}mm/s freq={:.1}Hz width={} class={:?}",
            report.speed_mm_s,
            report.freq_hz,
            report.bead.width,
            report.bead.class
        );

        w.surface.draw_bead(&report.bead);
        hud::update_metrics(&w.document, &report);
        hud::update_scores(&w.document, report.quality_percent);

        if let Some(score) = report.finished {
            w.surface.draw_final_score(&score);
            log::info!(
                "[session] finished quality={:.1}% verdict={:?}",
                score.quality_percent,
                score.verdict
            );
        }
    }) as Box<dyn FnMut(_)>);

    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
