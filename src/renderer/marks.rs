//! Fretted marks — clamp dots and barre bars.

use crate::model::Mark;

use super::canvas::CanvasConfig;
use super::primitives::DrawPrimitive;
use super::Frame;

pub(super) fn layout_marks(out: &mut Vec<DrawPrimitive>, canvas: &CanvasConfig, frame: &Frame, marks: &[Mark]) {
    for mark in marks {
        match *mark {
            Mark::Clamp { fret, string } => layout_clamp(out, canvas, frame, fret, string),
            Mark::Barre { fret, from, to } => layout_barre(out, canvas, frame, fret, from, to),
        }
    }
}

/// Center x of the fret cell, counted from the first fret.
fn fret_x(canvas: &CanvasConfig, frame: &Frame, fret: i64) -> f64 {
    frame.x + canvas.fret_spacing / 2.0 + canvas.fret_spacing * (fret - frame.first_fret) as f64
}

fn string_y(canvas: &CanvasConfig, frame: &Frame, string: i64) -> f64 {
    frame.y + canvas.string_spacing * (string - 1) as f64
}

fn layout_clamp(out: &mut Vec<DrawPrimitive>, canvas: &CanvasConfig, frame: &Frame, fret: i64, string: i64) {
    out.push(DrawPrimitive::Circle {
        cx: fret_x(canvas, frame, fret),
        cy: string_y(canvas, frame, string),
        r: canvas.clamp_radius,
        stroke: canvas.ink.clone(),
        fill: canvas.ink.clone(),
    });
}

/// Dots at both ends in the order given, then the bar from the lower to the
/// higher string.
fn layout_barre(
    out: &mut Vec<DrawPrimitive>,
    canvas: &CanvasConfig,
    frame: &Frame,
    fret: i64,
    from: i64,
    to: i64,
) {
    layout_clamp(out, canvas, frame, fret, from);
    layout_clamp(out, canvas, frame, fret, to);

    let (low, high) = if to < from { (to, from) } else { (from, to) };
    out.push(DrawPrimitive::Rect {
        x: fret_x(canvas, frame, fret) - canvas.clamp_radius,
        y: string_y(canvas, frame, low),
        w: canvas.clamp_radius * 2.0,
        h: canvas.string_spacing * (high - low) as f64,
        stroke: canvas.ink.clone(),
        fill: canvas.ink.clone(),
    });
}
