//! Drawing primitives — the renderer's output, consumed by a drawing sink.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Value of the SVG `text-anchor` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// One positioned shape. Colors are CSS color strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawPrimitive {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        stroke: String,
        fill: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        stroke: String,
        fill: String,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: TextAnchor,
    },
}

/// A laid-out chord: final canvas size, shared paint settings and primitives
/// in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    pub font_family: String,
    pub font_size: f64,
    pub text_fill: String,
    pub primitives: Vec<DrawPrimitive>,
}

impl Diagram {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
