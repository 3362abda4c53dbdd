//! Rendering: draws stroke segments and image blits on a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives segments and style from
//! the controller and produces pixels — it does not mutate controller state.
//!
//! The fallible `Canvas2D` call (image blitting) propagates its error via
//! `Result<(), JsValue>`; the caller decides how to surface it.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::stroke::{Segment, StrokeStyle};

/// Draw one segment as an open (non-closed) line path with the given stroke
/// style.
pub fn draw_segment(ctx: &CanvasRenderingContext2d, segment: Segment, style: &StrokeStyle) {
    apply_stroke_style(ctx, style);

    ctx.begin_path();
    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    ctx.stroke();
}

/// Erase every pixel on the surface.
pub fn clear_surface(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

/// Paint a decoded image at the surface origin.
///
/// # Errors
///
/// Returns `Err` if the `Canvas2D` draw call fails (e.g. the image is in a
/// broken state).
pub fn blit_image(ctx: &CanvasRenderingContext2d, image: &HtmlImageElement) -> Result<(), JsValue> {
    ctx.draw_image_with_html_image_element(image, 0.0, 0.0)
}

/// Apply stroke color, join, and width from the style.
fn apply_stroke_style(ctx: &CanvasRenderingContext2d, style: &StrokeStyle) {
    ctx.set_stroke_style_str(&style.color);
    ctx.set_line_join(style.join.as_canvas_keyword());
    ctx.set_line_width(style.width);
}
