//! Default diagram geometry (all in SVG user units).

// ── Canvas ──────────────────────────────────────────────────────────
pub(super) const DEFAULT_CANVAS_WIDTH: f64 = 215.0;
pub(super) const DEFAULT_CANVAS_HEIGHT: f64 = 112.0;
pub(super) const DEFAULT_MARGIN: f64 = 5.0;

// ── Grid ────────────────────────────────────────────────────────────
pub(super) const GRID_START_X: f64 = 25.0;
pub(super) const GRID_START_Y: f64 = 6.0;
pub(super) const GRID_WIDTH: f64 = 180.0;
pub(super) const GRID_HEIGHT: f64 = 100.0;
pub(super) const LINE_WIDTH: f64 = 1.0;
pub(super) const FRET_SPACING: f64 = 60.0; // horizontal distance between fret lines
pub(super) const STRING_SPACING: f64 = 20.0; // vertical distance between strings
pub(super) const MAX_GRID_LINES: usize = 256; // per direction

// ── Glyphs ──────────────────────────────────────────────────────────
pub(super) const STATUS_START_X: f64 = 10.0; // left edge of open/closed markers
pub(super) const STATUS_RADIUS: f64 = 5.0;
pub(super) const CLAMP_RADIUS: f64 = 5.0;

// ── Text ────────────────────────────────────────────────────────────
pub(super) const FONT_FAMILY: &str = "Tahoma";
pub(super) const FONT_SIZE: f64 = 16.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const INK_COLOR: &str = "rgb(0, 0, 0)";
pub(super) const PAPER_COLOR: &str = "rgb(255, 255, 255)";
