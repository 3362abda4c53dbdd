//! Shared default values for the signature pad.

// ── Surface ─────────────────────────────────────────────────────

/// Surface width in device pixels when the host does not override it.
pub const DEFAULT_SURFACE_WIDTH: u32 = 400;

/// Surface height in device pixels when the host does not override it.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 200;

// ── Stroke ──────────────────────────────────────────────────────

/// Stroke line width in surface pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;

/// Stroke color, as a CSS color string.
pub const DEFAULT_STROKE_COLOR: &str = "#000";

// ── Export ──────────────────────────────────────────────────────

/// Media type requested from the canvas encoder.
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// Media type stamped onto exported values before they reach the host.
pub const EXPORT_MEDIA_TYPE: &str = "application/octet-stream";
