use glam::Vec2;
use web_sys as web;

/// Map a CSS-space offset inside an element of `css_size` onto a backing
/// store of `px_size`. Degenerate CSS sizes pass the offset through.
#[inline]
pub fn css_to_canvas_px(offset_css: Vec2, css_size: Vec2, px_size: Vec2) -> Vec2 {
    if css_size.x > 0.0 && css_size.y > 0.0 {
        offset_css / css_size * px_size
    } else {
        offset_css
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let offset = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    css_to_canvas_px(
        offset,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
