use crate::math::Vec2;

/// Pixel margins reserved around a chart body.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Fixed layout of the airline bar chart.
///
/// Bars live in the body rectangle inside the margins; the category axis is
/// drawn in the left margin strip and the count axis in the bottom one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartLayout {
    pub fn body_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn body_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 350.0,
            height: 400.0,
            margin: Margin {
                top: 10.0,
                right: 10.0,
                bottom: 50.0,
                left: 130.0,
            },
        }
    }
}

/// Fixed layout of the route map viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapLayout {
    /// Top-left corner of the viewport on the shared canvas.
    pub origin: Vec2,
    pub width: f64,
    pub height: f64,
}

impl MapLayout {
    pub fn at(origin: Vec2) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            origin: Vec2::new(0.0, 0.0),
            width: 600.0,
            height: 400.0,
        }
    }
}
