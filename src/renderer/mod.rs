//! Chord renderer — lays a normalized chord out as drawing primitives.
//!
//! Layout is pure: the same chord and canvas always give the same primitive
//! list, in this order: grid, string-status glyphs (string 1 first), marks
//! in caller order, the first-fret label, the title.

mod canvas;
mod constants;
mod grid;
mod marks;
mod primitives;
mod svg_builder;

use crate::model::NormalizedChord;
use grid::{layout_grid, layout_string_status};
use marks::layout_marks;

pub use canvas::CanvasConfig;
pub use primitives::{Diagram, DrawPrimitive, TextAnchor};
pub use svg_builder::render_diagram_to_svg;

/// Grid origin for one diagram, after any shift for the title row.
struct Frame {
    x: f64,
    y: f64,
    /// Fret drawn in the first column
    first_fret: i64,
}

/// Turns normalized chords into diagrams for one canvas configuration.
#[derive(Debug, Clone, Default)]
pub struct ChordRenderer {
    canvas: CanvasConfig,
}

impl ChordRenderer {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Compute the canvas size and every primitive for `chord`.
    pub fn layout(&self, chord: &NormalizedChord) -> Diagram {
        let canvas = &self.canvas;
        let first_fret = chord.first_fret().unwrap_or(1);
        let show_fret_label = first_fret > 1;

        let mut height = canvas.height;
        let mut grid_y = canvas.grid_y;

        if show_fret_label {
            height += canvas.font_size;
        }
        if chord.title().is_some() {
            height += canvas.font_size + canvas.margin;
            grid_y += canvas.font_size + canvas.margin;
        }

        let frame = Frame {
            x: canvas.grid_x,
            y: grid_y,
            first_fret,
        };

        let mut primitives = Vec::new();
        layout_grid(&mut primitives, canvas, &frame);
        layout_string_status(&mut primitives, canvas, &frame, chord.status_per_string());
        layout_marks(&mut primitives, canvas, &frame, chord.marks());

        if show_fret_label {
            primitives.push(DrawPrimitive::Text {
                x: frame.x,
                y: frame.y + chord.string_count() as f64 * canvas.string_spacing,
                content: first_fret.to_string(),
                anchor: TextAnchor::Start,
            });
        }

        if let Some(title) = chord.title() {
            primitives.push(DrawPrimitive::Text {
                x: frame.x + canvas.grid_width / 2.0,
                y: frame.y - canvas.status_radius - canvas.margin,
                content: title.to_string(),
                anchor: TextAnchor::Middle,
            });
        }

        log::debug!(
            "laid out chord {:?}: {} primitives on {}x{}",
            chord.title(),
            primitives.len(),
            canvas.width,
            height
        );

        Diagram {
            width: canvas.width,
            height,
            stroke_width: canvas.line_width,
            font_family: canvas.font_family.clone(),
            font_size: canvas.font_size,
            text_fill: canvas.ink.clone(),
            primitives,
        }
    }
}

/// Lay out and render a chord to SVG in one step.
///
/// Pass `None` to use the default canvas.
pub fn render_chord_to_svg(chord: &NormalizedChord, canvas: Option<&CanvasConfig>) -> String {
    let diagram = match canvas {
        Some(c) => ChordRenderer::new(c.clone()).layout(chord),
        None => ChordRenderer::default().layout(chord),
    };
    render_diagram_to_svg(&diagram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::validate::ChordModel;

    fn layout(description: ChordDescription) -> Diagram {
        let chord = ChordModel::default().validate(description).unwrap();
        ChordRenderer::default().layout(&chord)
    }

    #[test]
    fn clamp_position_is_relative_to_first_fret() {
        let diagram = layout(
            ChordDescription::new()
                .with_mark(Mark::Clamp { fret: 3, string: 1 })
                .with_mark(Mark::Clamp { fret: 4, string: 6 }),
        );
        let circles: Vec<(f64, f64)> = diagram
            .primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Circle { cx, cy, .. } => Some((*cx, *cy)),
                _ => None,
            })
            .collect();
        assert_eq!(circles, vec![(55.0, 6.0), (115.0, 106.0)]);
    }

    #[test]
    fn fret_label_below_grid_when_above_first_fret() {
        let diagram = layout(ChordDescription::new().with_mark(Mark::Clamp { fret: 5, string: 2 }));
        assert_eq!(diagram.height, 128.0);
        assert_eq!(
            diagram.primitives.last(),
            Some(&DrawPrimitive::Text {
                x: 25.0,
                y: 126.0,
                content: "5".into(),
                anchor: TextAnchor::Start,
            })
        );
    }

    #[test]
    fn no_fret_label_at_first_fret() {
        let diagram = layout(ChordDescription::new().with_mark(Mark::Clamp { fret: 1, string: 2 }));
        assert_eq!(diagram.height, 112.0);
        assert!(!diagram
            .primitives
            .iter()
            .any(|p| matches!(p, DrawPrimitive::Text { .. })));
    }

    #[test]
    fn closed_string_draws_a_cross() {
        let mut statuses = vec![StringStatus::None; 6];
        statuses[1] = StringStatus::Closed;
        let diagram = layout(ChordDescription::new().with_statuses(statuses));
        let grid_len = 1 + 3 + 5;
        assert_eq!(
            &diagram.primitives[grid_len..],
            &[
                DrawPrimitive::Line {
                    x1: 10.0,
                    y1: 21.0,
                    x2: 20.0,
                    y2: 31.0,
                    stroke: "rgb(0, 0, 0)".into(),
                },
                DrawPrimitive::Line {
                    x1: 20.0,
                    y1: 21.0,
                    x2: 10.0,
                    y2: 31.0,
                    stroke: "rgb(0, 0, 0)".into(),
                },
            ]
        );
    }
}
