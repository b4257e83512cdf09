//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! This is the bundled drawing sink: it turns a `Diagram` into a
//! self-contained `<svg>` document, one element per primitive.

use super::primitives::{Diagram, DrawPrimitive, TextAnchor};

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
    stroke_width: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64, stroke_width: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            stroke_width,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, escape(stroke), self.stroke_width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, stroke: &str, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" stroke="{}" stroke-width="{:.1}" fill="{}"/>"#,
            x, y, w, h, escape(stroke), self.stroke_width, escape(fill)
        ));
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" stroke="{}" stroke-width="{:.1}" fill="{}"/>"#,
            cx, cy, r, escape(stroke), self.stroke_width, escape(fill)
        ));
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, font_family: &str, size: f64, fill: &str, anchor: TextAnchor) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.0}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, escape(font_family), size, escape(fill), anchor.as_str(), escape(content)
        ));
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ═══════════════════════════════════════════════════════════════════════
// Diagram → SVG
// ═══════════════════════════════════════════════════════════════════════

/// Render a laid-out diagram as an SVG document.
pub fn render_diagram_to_svg(diagram: &Diagram) -> String {
    let mut svg = SvgBuilder::new(diagram.width, diagram.height, diagram.stroke_width);

    for primitive in &diagram.primitives {
        match primitive {
            DrawPrimitive::Rect { x, y, w, h, stroke, fill } => svg.rect(*x, *y, *w, *h, stroke, fill),
            DrawPrimitive::Line { x1, y1, x2, y2, stroke } => svg.line(*x1, *y1, *x2, *y2, stroke),
            DrawPrimitive::Circle { cx, cy, r, stroke, fill } => svg.circle(*cx, *cy, *r, stroke, fill),
            DrawPrimitive::Text { x, y, content, anchor } => svg.text(
                *x,
                *y,
                content,
                &diagram.font_family,
                diagram.font_size,
                &diagram.text_fill,
                *anchor,
            ),
        }
    }

    svg.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_is_escaped() {
        let diagram = Diagram {
            width: 100.0,
            height: 50.0,
            stroke_width: 1.0,
            font_family: "Tahoma".into(),
            font_size: 16.0,
            text_fill: "black".into(),
            primitives: vec![DrawPrimitive::Text {
                x: 10.0,
                y: 20.0,
                content: "A<7>&\"sus\"".into(),
                anchor: TextAnchor::Middle,
            }],
        };
        let svg = render_diagram_to_svg(&diagram);
        assert!(svg.contains("A&lt;7&gt;&amp;&quot;sus&quot;"));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
