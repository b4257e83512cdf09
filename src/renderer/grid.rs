//! Grid and string-status glyphs.

use crate::model::StringStatus;

use super::canvas::CanvasConfig;
use super::constants::MAX_GRID_LINES;
use super::primitives::DrawPrimitive;
use super::Frame;

// ═══════════════════════════════════════════════════════════════════════
// Grid
// ═══════════════════════════════════════════════════════════════════════

/// Outline rectangle, then fret lines, then string lines.
///
/// Line counts follow the grid size and spacing, not the string count or
/// fret window: with the default 180×100 grid that is 3 vertical and 5
/// horizontal lines, the last of each lying on the outline.
pub(super) fn layout_grid(out: &mut Vec<DrawPrimitive>, canvas: &CanvasConfig, frame: &Frame) {
    let right = frame.x + canvas.grid_width;
    let bottom = frame.y + canvas.grid_height;

    out.push(DrawPrimitive::Rect {
        x: frame.x,
        y: frame.y,
        w: canvas.grid_width,
        h: canvas.grid_height,
        stroke: canvas.ink.clone(),
        fill: canvas.paper.clone(),
    });

    for x in steps(frame.x, right, canvas.fret_spacing) {
        out.push(DrawPrimitive::Line {
            x1: x,
            y1: frame.y,
            x2: x,
            y2: bottom,
            stroke: canvas.ink.clone(),
        });
    }

    for y in steps(frame.y, bottom, canvas.string_spacing) {
        out.push(DrawPrimitive::Line {
            x1: frame.x,
            y1: y,
            x2: right,
            y2: y,
            stroke: canvas.ink.clone(),
        });
    }
}

/// `start + spacing * k` for k = 1, 2, … while the value stays `<= end`,
/// at most `MAX_GRID_LINES` values.
fn steps(start: f64, end: f64, spacing: f64) -> impl Iterator<Item = f64> {
    let count = if spacing > 0.0 {
        // NaN casts to 0, infinity saturates and is then capped.
        (((end - start) / spacing).floor().max(0.0) as usize).min(MAX_GRID_LINES)
    } else {
        0
    };
    (1..=count).map(move |k| start + spacing * k as f64)
}

// ═══════════════════════════════════════════════════════════════════════
// String status
// ═══════════════════════════════════════════════════════════════════════

/// One glyph per open or closed string, string 1 at the top.
pub(super) fn layout_string_status(
    out: &mut Vec<DrawPrimitive>,
    canvas: &CanvasConfig,
    frame: &Frame,
    statuses: &[StringStatus],
) {
    let r = canvas.status_radius;
    let left = canvas.status_x;
    let right = canvas.status_x + r * 2.0;

    for (i, status) in statuses.iter().enumerate() {
        let cy = frame.y + canvas.string_spacing * i as f64;
        match status {
            StringStatus::Open => out.push(DrawPrimitive::Circle {
                cx: left + r,
                cy,
                r,
                stroke: canvas.ink.clone(),
                fill: canvas.paper.clone(),
            }),
            StringStatus::Closed => {
                out.push(DrawPrimitive::Line {
                    x1: left,
                    y1: cy - r,
                    x2: right,
                    y2: cy + r,
                    stroke: canvas.ink.clone(),
                });
                out.push(DrawPrimitive::Line {
                    x1: right,
                    y1: cy - r,
                    x2: left,
                    y2: cy + r,
                    stroke: canvas.ink.clone(),
                });
            }
            StringStatus::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_include_the_far_edge() {
        let xs: Vec<f64> = steps(25.0, 205.0, 60.0).collect();
        assert_eq!(xs, vec![85.0, 145.0, 205.0]);

        let ys: Vec<f64> = steps(6.0, 106.0, 20.0).collect();
        assert_eq!(ys, vec![26.0, 46.0, 66.0, 86.0, 106.0]);
    }

    #[test]
    fn steps_with_zero_spacing_are_empty() {
        assert_eq!(steps(0.0, 100.0, 0.0).count(), 0);
        assert_eq!(steps(0.0, 100.0, -20.0).count(), 0);
        assert_eq!(steps(0.0, 100.0, f64::NAN).count(), 0);
    }

    #[test]
    fn tiny_spacing_is_capped() {
        assert_eq!(steps(0.0, 100.0, 1e-300).count(), MAX_GRID_LINES);
        assert_eq!(steps(0.0, f64::INFINITY, 1.0).count(), MAX_GRID_LINES);
    }
}
