//! Stroke model: visual style, segments, and the gesture state tracked
//! between pointer-down and pointer-up.
//!
//! `StrokeState` is the transient state machine instance for one drawing
//! gesture. It carries the anchor point needed to emit a segment on each
//! pointer-move and is reset whenever the stroke ends.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};
use crate::surface::Point;

/// Line-join style applied where consecutive segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Rounded corners (default).
    #[default]
    Round,
    /// Beveled corners.
    Bevel,
    /// Mitered corners.
    Miter,
}

impl LineJoin {
    /// The Canvas2D `lineJoin` keyword for this style.
    #[must_use]
    pub fn as_canvas_keyword(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Bevel => "bevel",
            Self::Miter => "miter",
        }
    }
}

/// Visual style for stroke segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// CSS color for the stroke.
    pub color: String,
    /// Line width in surface pixels.
    pub width: f64,
    /// Join style where segments meet.
    pub join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_STROKE_COLOR.to_owned(),
            width: DEFAULT_STROKE_WIDTH,
            join: LineJoin::Round,
        }
    }
}

/// A straight line segment between two consecutive pointer positions, in
/// surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Gesture state for the stroke currently being drawn.
///
/// `last_point` is `Some` exactly while a stroke is in progress; it anchors
/// the next segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeState {
    is_drawing: bool,
    last_point: Option<Point>,
}

impl StrokeState {
    /// Whether a stroke is currently in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Begin a stroke at `point`. No segment is produced yet.
    pub fn begin(&mut self, point: Point) {
        self.is_drawing = true;
        self.last_point = Some(point);
    }

    /// Extend the stroke to `point`, yielding the segment to draw.
    ///
    /// Returns `None` when no stroke is in progress.
    pub fn extend(&mut self, point: Point) -> Option<Segment> {
        if !self.is_drawing {
            return None;
        }
        let from = self.last_point?;
        self.last_point = Some(point);
        Some(Segment { from, to: point })
    }

    /// End the stroke and drop the anchor point. Idempotent.
    pub fn end(&mut self) {
        self.is_drawing = false;
        self.last_point = None;
    }
}
