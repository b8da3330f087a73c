use foundation::math::Vec2;

/// Stable identity of a drawn element, used for keyed upserts and removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(String);

impl ElementKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// sRGB color with 8-bit channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill and stroke styling for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            opacity: 1.0,
        }
    }
}

impl Style {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn stroked(color: Color) -> Self {
        Self {
            stroke: Some(color),
            ..Self::default()
        }
    }

    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Horizontal anchoring of a text primitive relative to its position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Pixel-space shapes a surface knows how to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Closed outline; several rings draw as one shape with holes.
    Polygon { rings: Vec<Vec<Vec2>> },
    Rect { origin: Vec2, size: Vec2 },
    Circle { center: Vec2, radius: f64 },
    Line { from: Vec2, to: Vec2 },
    Text {
        anchor: Vec2,
        content: String,
        align: TextAlign,
    },
}

/// What an interactive element stands for, reported back by the surface in
/// pointer events.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    AirlineBar { airline_id: String },
}

/// A keyed drawable handed to the surface: geometry, style, and an optional
/// hover registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub key: ElementKey,
    pub primitive: Primitive,
    pub style: Style,
    pub hover: Option<HoverTarget>,
}

impl Element {
    pub fn new(key: ElementKey, primitive: Primitive, style: Style) -> Self {
        Self {
            key,
            primitive,
            style,
            hover: None,
        }
    }

    pub fn with_hover(mut self, target: HoverTarget) -> Self {
        self.hover = Some(target);
        self
    }
}
