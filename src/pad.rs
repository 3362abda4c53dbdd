//! The drawing surface controller.
//!
//! [`PadCore`] is the pointer-to-drawing state machine: it decides, for every
//! incoming event, whether the surface reacts and what the host must process
//! next. [`SignaturePad`] wraps the core together with the browser canvas
//! element and is the only fallible layer — coordinate lookup, rendering, and
//! encoding all happen here.

#[cfg(test)]
#[path = "pad_test.rs"]
mod pad_test;

use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{
    DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, EXPORT_MEDIA_TYPE, PNG_MEDIA_TYPE,
};
use crate::render;
use crate::stroke::{Segment, StrokeState, StrokeStyle};
use crate::surface::{Mapping, Point};

/// Whether the surface accepts drawing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Strokes are captured and rendered.
    #[default]
    Editable,
    /// The surface holds a committed signature; pointer input is ignored.
    Finalized,
}

/// Surface size and stroke style, with the component-level defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadConfig {
    /// Surface width in device pixels.
    pub width: u32,
    /// Surface height in device pixels.
    pub height: u32,
    /// Stroke style for drawn segments.
    pub stroke: StrokeStyle,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            stroke: StrokeStyle::default(),
        }
    }
}

/// Actions returned from controller operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing for the host to do.
    None,
    /// A stroke began; the surface is no longer empty.
    StrokeStarted,
    /// A segment was drawn between two consecutive pointer positions.
    SegmentDrawn(Segment),
    /// The active stroke ended.
    StrokeEnded,
    /// The surface was wiped; the host must discard any stored signature
    /// value.
    Cleared,
    /// The surface contents were encoded; the host now owns the value.
    Exported(String),
}

/// Core controller state — everything that doesn't depend on the canvas
/// element.
///
/// Separated from [`SignaturePad`] so the state machine can be tested
/// without WASM/browser dependencies. Invalid calls are silent no-ops
/// (returning [`Action::None`]), never errors.
#[derive(Debug, Clone)]
pub struct PadCore {
    mode: Mode,
    empty: bool,
    stroke: StrokeState,
}

impl Default for PadCore {
    fn default() -> Self {
        Self { mode: Mode::Editable, empty: true, stroke: StrokeState::default() }
    }
}

impl PadCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current Editable/Finalized mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether no stroke has been committed since the last clear or
    /// initialize.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Whether a stroke is currently in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    /// Record that an externally held signature was painted onto the
    /// surface. The surface becomes read-only until cleared.
    pub fn accept_existing_image(&mut self) {
        self.mode = Mode::Finalized;
        self.empty = false;
        self.stroke.end();
    }

    /// Begin a stroke at a surface-space point.
    ///
    /// No segment is produced yet, but the surface counts as non-empty from
    /// this moment.
    pub fn pointer_down(&mut self, point: Point) -> Action {
        if self.mode != Mode::Editable {
            return Action::None;
        }
        self.stroke.begin(point);
        self.empty = false;
        Action::StrokeStarted
    }

    /// Extend the active stroke to a surface-space point.
    ///
    /// Returns the segment to draw, or [`Action::None`] when no stroke is in
    /// progress.
    pub fn pointer_move(&mut self, point: Point) -> Action {
        if self.mode != Mode::Editable {
            return Action::None;
        }
        match self.stroke.extend(point) {
            Some(segment) => Action::SegmentDrawn(segment),
            None => Action::None,
        }
    }

    /// End the active stroke. Idempotent; a second call is a no-op.
    pub fn pointer_up(&mut self) -> Action {
        if !self.stroke.is_drawing() {
            return Action::None;
        }
        self.stroke.end();
        Action::StrokeEnded
    }

    /// Reset to an empty, editable surface. Always succeeds; the host must
    /// discard any previously exported value.
    pub fn clear(&mut self) -> Action {
        self.mode = Mode::Editable;
        self.empty = true;
        self.stroke.end();
        Action::Cleared
    }

    /// Whether an export is currently permitted: the surface must be
    /// editable and non-empty.
    #[must_use]
    pub fn can_export(&self) -> bool {
        self.mode == Mode::Editable && !self.empty
    }

    /// Approve an export: permitted only on an editable, non-empty surface.
    ///
    /// On approval the surface transitions to [`Mode::Finalized`] and stops
    /// capturing strokes.
    pub fn approve_export(&mut self) -> bool {
        if !self.can_export() {
            return false;
        }
        self.stroke.end();
        self.mode = Mode::Finalized;
        true
    }
}

/// Rewrite an exported data URL's media type from the viewable PNG type to
/// the generic octet-stream type handed to the host.
///
/// Only the first occurrence is rewritten; the payload is untouched.
#[must_use]
pub fn retag_for_export(data_url: &str) -> String {
    data_url.replacen(PNG_MEDIA_TYPE, EXPORT_MEDIA_TYPE, 1)
}

/// Rewrite a host-held value's media type back to the viewable PNG type so
/// the browser image decoder will accept it.
#[must_use]
pub fn retag_for_display(data_url: &str) -> String {
    data_url.replacen(EXPORT_MEDIA_TYPE, PNG_MEDIA_TYPE, 1)
}

/// The full widget controller. Wraps [`PadCore`] and owns the browser canvas
/// element.
pub struct SignaturePad {
    canvas: HtmlCanvasElement,
    style: StrokeStyle,
    pub core: PadCore,
}

impl SignaturePad {
    /// Create a controller bound to `canvas`, sizing the surface's pixel
    /// grid per `config`.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: &PadConfig) -> Self {
        canvas.set_width(config.width);
        canvas.set_height(config.height);
        Self { canvas, style: config.stroke.clone(), core: PadCore::new() }
    }

    /// Paint an externally held signature onto the surface and finalize.
    ///
    /// The mode transition is synchronous; the blit itself happens in the
    /// image element's load callback once the browser has decoded the value.
    /// A value that fails to decode is logged and leaves the surface blank.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context or the image element cannot be
    /// created.
    pub fn initialize(&mut self, existing_image: &str) -> Result<(), JsValue> {
        self.core.accept_existing_image();

        let ctx = self.context()?;
        let image = HtmlImageElement::new()?;

        let blit_target = image.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = render::blit_image(&ctx, &blit_target) {
                log::warn!("failed to paint existing signature: {err:?}");
            }
        });
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::<dyn FnMut()>::new(move || {
            log::warn!("existing signature could not be decoded; surface left blank");
        });
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        image.set_src(&retag_for_display(existing_image));
        Ok(())
    }

    /// Forward a pointer-down event at client coordinates.
    pub fn on_pointer_down(&mut self, client: Point) -> Action {
        let point = self.mapping().to_surface(client);
        self.core.pointer_down(point)
    }

    /// Forward a pointer-move event at client coordinates, drawing the
    /// resulting segment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context cannot be acquired.
    pub fn on_pointer_move(&mut self, client: Point) -> Result<Action, JsValue> {
        let point = self.mapping().to_surface(client);
        let action = self.core.pointer_move(point);
        if let Action::SegmentDrawn(segment) = action {
            render::draw_segment(&self.context()?, segment, &self.style);
        }
        Ok(action)
    }

    /// Forward a pointer-up or pointer-leave event.
    pub fn on_pointer_up(&mut self) -> Action {
        self.core.pointer_up()
    }

    /// Wipe the surface and return to editable mode.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context cannot be acquired.
    pub fn clear(&mut self) -> Result<Action, JsValue> {
        render::clear_surface(
            &self.context()?,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        Ok(self.core.clear())
    }

    /// Encode the surface contents and finalize.
    ///
    /// Returns [`Action::None`] when export is not permitted (the surface is
    /// empty or already finalized).
    ///
    /// # Errors
    ///
    /// Returns `Err` if encoding fails.
    pub fn export(&mut self) -> Result<Action, JsValue> {
        if !self.core.can_export() {
            return Ok(Action::None);
        }
        // Encode before committing so a failed encode leaves the surface
        // editable.
        let data_url = self.canvas.to_data_url_with_type(PNG_MEDIA_TYPE)?;
        self.core.approve_export();
        Ok(Action::Exported(retag_for_export(&data_url)))
    }

    /// Screen-to-surface mapping for the canvas's current bounding
    /// rectangle. Recomputed per event so layout changes are picked up.
    fn mapping(&self) -> Mapping {
        let rect = self.canvas.get_bounding_client_rect();
        Mapping::new(
            self.canvas.width(),
            self.canvas.height(),
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        )
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let object = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
        object
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))
    }
}
