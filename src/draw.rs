use crate::constants::*;
use crate::core::{Bead, FinalScore};
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct Surface {
    pub ctx: web::CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(ctx: web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) -> Self {
        Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        }
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    /// Flat baseline plus the dashed sine wave the torch should follow.
    pub fn draw_guides(&self) {
        let ctx = &self.ctx;
        let center_y = self.height / 2.0;

        ctx.set_stroke_style_str(BASELINE_COLOR);
        ctx.set_line_width(BASELINE_WIDTH);
        ctx.begin_path();
        ctx.move_to(0.0, center_y);
        ctx.line_to(self.width, center_y);
        ctx.stroke();

        ctx.set_stroke_style_str(GUIDE_COLOR);
        ctx.set_line_width(GUIDE_WIDTH);
        set_dash(ctx, &GUIDE_DASH);
        ctx.begin_path();
        ctx.move_to(0.0, center_y);
        let mut x = 0.0;
        while x < self.width {
            ctx.line_to(x, guide_y(center_y, x));
            x += 1.0;
        }
        ctx.stroke();
        set_dash(ctx, &[]);
    }

    pub fn draw_bead(&self, bead: &Bead) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(bead.class.color());
        ctx.set_line_width(bead.width as f64);
        ctx.set_line_cap("round");
        ctx.begin_path();
        ctx.move_to(bead.from.x as f64, bead.from.y as f64);
        ctx.line_to(bead.to.x as f64, bead.to.y as f64);
        ctx.stroke();
    }

    pub fn draw_final_score(&self, score: &FinalScore) {
        let ctx = &self.ctx;
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;

        ctx.set_fill_style_str(OVERLAY_BG);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        ctx.set_font(OVERLAY_FONT);
        ctx.set_fill_style_str(OVERLAY_TEXT);
        ctx.set_text_align("center");
        _ = ctx.fill_text("--- PASS COMPLETE ---", cx, cy - OVERLAY_LINE_GAP_PX);
        _ = ctx.fill_text(
            &format!("Final quality score: {:.1}%", score.quality_percent),
            cx,
            cy,
        );
        _ = ctx.fill_text(score.verdict.message(), cx, cy + OVERLAY_LINE_GAP_PX);
    }
}

#[inline]
fn guide_y(center_y: f64, x: f64) -> f64 {
    center_y + GUIDE_AMPLITUDE_PX * (x * GUIDE_FREQ_PER_PX).sin()
}

fn set_dash(ctx: &web::CanvasRenderingContext2d, segments: &[f64]) {
    let arr = js_sys::Array::new();
    for s in segments {
        arr.push(&JsValue::from_f64(*s));
    }
    _ = ctx.set_line_dash(&arr);
}
