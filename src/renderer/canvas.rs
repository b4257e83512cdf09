//! Canvas configuration — every length and color the layout uses.

use serde::{Deserialize, Serialize};

use super::constants::*;

/// Geometry and paint for one diagram.
///
/// The grid is a fixed `grid_width × grid_height` rectangle; strings run
/// horizontally (`string_spacing` apart) and frets vertically
/// (`fret_spacing` apart). Missing keys in JSON keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Canvas size before the fret label / title rows are added
    pub width: f64,
    pub height: f64,
    /// Gap between the title row and the grid
    pub margin: f64,
    pub grid_x: f64,
    pub grid_y: f64,
    pub grid_width: f64,
    pub grid_height: f64,
    pub line_width: f64,
    pub fret_spacing: f64,
    pub string_spacing: f64,
    pub status_x: f64,
    pub status_radius: f64,
    pub clamp_radius: f64,
    pub font_family: String,
    pub font_size: f64,
    pub ink: String,
    pub paper: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            margin: DEFAULT_MARGIN,
            grid_x: GRID_START_X,
            grid_y: GRID_START_Y,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            line_width: LINE_WIDTH,
            fret_spacing: FRET_SPACING,
            string_spacing: STRING_SPACING,
            status_x: STATUS_START_X,
            status_radius: STATUS_RADIUS,
            clamp_radius: CLAMP_RADIUS,
            font_family: FONT_FAMILY.to_string(),
            font_size: FONT_SIZE,
            ink: INK_COLOR.to_string(),
            paper: PAPER_COLOR.to_string(),
        }
    }
}

impl CanvasConfig {
    /// Read a (possibly partial) config; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
