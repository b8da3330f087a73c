use crate::element::{Element, Primitive, Style, TextAlign};
use foundation::math::Vec2;

/// Serializes retained elements into a standalone SVG document.
///
/// Elements render in slice order, which matches the surface's z-order:
/// later elements paint on top.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn render(&self, elements: &[Element]) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            self.width, self.height, self.width, self.height
        ));
        for element in elements {
            out.push_str("  ");
            out.push_str(&element_markup(element));
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn element_markup(element: &Element) -> String {
    let style = style_attrs(&element.style);
    match &element.primitive {
        Primitive::Polygon { rings } => {
            format!("<path d=\"{}\"{}/>", path_data(rings), style)
        }
        Primitive::Rect { origin, size } => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
            origin.x, origin.y, size.x, size.y, style
        ),
        Primitive::Circle { center, radius } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            center.x, center.y, radius, style
        ),
        Primitive::Line { from, to } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
            from.x, from.y, to.x, to.y, style
        ),
        Primitive::Text {
            anchor,
            content,
            align,
        } => format!(
            "<text x=\"{}\" y=\"{}\"{}{}>{}</text>",
            anchor.x,
            anchor.y,
            anchor_attr(*align),
            style,
            escape_text(content)
        ),
    }
}

fn path_data(rings: &[Vec<Vec2>]) -> String {
    let mut d = String::new();
    for ring in rings {
        let mut points = ring.iter();
        let Some(first) = points.next() else {
            continue;
        };
        d.push_str(&format!("M{} {}", first.x, first.y));
        for point in points {
            d.push_str(&format!("L{} {}", point.x, point.y));
        }
        d.push('Z');
    }
    d
}

fn style_attrs(style: &Style) -> String {
    let mut out = String::new();
    match style.fill {
        Some(color) => out.push_str(&format!(" fill=\"{}\"", color.to_hex())),
        None => out.push_str(" fill=\"none\""),
    }
    if let Some(color) = style.stroke {
        out.push_str(&format!(
            " stroke=\"{}\" stroke-width=\"{}\"",
            color.to_hex(),
            style.stroke_width
        ));
    }
    if style.opacity != 1.0 {
        out.push_str(&format!(" opacity=\"{}\"", style.opacity));
    }
    out
}

fn anchor_attr(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Start => "",
        TextAlign::Center => " text-anchor=\"middle\"",
        TextAlign::End => " text-anchor=\"end\"",
    }
}

fn escape_text(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
