use compute::AirlineSummary;
use foundation::math::Vec2;
use foundation::scale::{BandScale, EmptyInputError, LinearScale};
use foundation::ChartLayout;

/// Inner/outer padding ratio of the airline bands.
pub const BAND_PADDING: f64 = 0.2;
/// Requested tick count on the count axis.
pub const X_AXIS_TICK_COUNT: usize = 5;

const TICK_MARK_PX: f64 = 6.0;
const X_TICK_LABEL_DROP_PX: f64 = 16.0;
const Y_TICK_LABEL_GAP_PX: f64 = 9.0;

/// The two chart scales: route count to bar width, airline name to band.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub count: LinearScale,
    pub category: BandScale,
}

impl ChartScales {
    /// Derives both scales from the summaries and the layout.
    ///
    /// Fails with `EmptyInputError` when there are no summaries: a chart
    /// without a maximum count has no usable domain.
    pub fn build(
        airlines: &[AirlineSummary],
        layout: &ChartLayout,
    ) -> Result<Self, EmptyInputError> {
        let max_count = airlines
            .iter()
            .map(|airline| airline.count)
            .max()
            .ok_or(EmptyInputError)?;
        let count = LinearScale::new(max_count as f64, layout.body_width())?;
        let category = BandScale::new(
            airlines.iter().map(|airline| airline.airline_name.clone()),
            layout.body_height(),
            BAND_PADDING,
        )?;
        Ok(Self { count, category })
    }
}

/// One bar in absolute pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub airline_id: String,
    pub airline_name: String,
    pub origin: Vec2,
    pub size: Vec2,
}

/// A tick on an axis: the mark segment plus the label and its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub mark: (Vec2, Vec2),
    pub label_at: Vec2,
    pub label: String,
}

/// One axis: a baseline along the chart body edge plus outward ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub baseline: (Vec2, Vec2),
    pub ticks: Vec<AxisTick>,
}

/// Full chart geometry in absolute pixel coordinates: bars, the count axis
/// along the bottom edge, and the category axis along the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSnapshot {
    pub bars: Vec<Bar>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

/// Lays out the whole chart, one bar per airline summary in input order.
pub fn build_chart(
    airlines: &[AirlineSummary],
    layout: &ChartLayout,
) -> Result<ChartSnapshot, EmptyInputError> {
    let scales = ChartScales::build(airlines, layout)?;
    let left = layout.margin.left;
    let top = layout.margin.top;

    let mut bars = Vec::with_capacity(airlines.len());
    for airline in airlines {
        let Some(y) = scales.category.position(&airline.airline_name) else {
            continue;
        };
        bars.push(Bar {
            airline_id: airline.airline_id.clone(),
            airline_name: airline.airline_name.clone(),
            origin: Vec2::new(left, top + y),
            size: Vec2::new(
                scales.count.position(airline.count as f64),
                scales.category.bandwidth(),
            ),
        });
    }

    let axis_y = top + layout.body_height();
    let x_ticks = scales
        .count
        .ticks(X_AXIS_TICK_COUNT)
        .into_iter()
        .map(|value| {
            let x = left + scales.count.position(value);
            AxisTick {
                mark: (Vec2::new(x, axis_y), Vec2::new(x, axis_y + TICK_MARK_PX)),
                label_at: Vec2::new(x, axis_y + X_TICK_LABEL_DROP_PX),
                label: format_tick(value),
            }
        })
        .collect();

    let mut y_ticks = Vec::with_capacity(scales.category.categories().len());
    for name in scales.category.categories() {
        let Some(center) = scales.category.center(name) else {
            continue;
        };
        let y = top + center;
        y_ticks.push(AxisTick {
            mark: (Vec2::new(left - TICK_MARK_PX, y), Vec2::new(left, y)),
            label_at: Vec2::new(left - Y_TICK_LABEL_GAP_PX, y),
            label: name.clone(),
        });
    }

    Ok(ChartSnapshot {
        bars,
        x_axis: Axis {
            baseline: (
                Vec2::new(left, axis_y),
                Vec2::new(left + layout.body_width(), axis_y),
            ),
            ticks: x_ticks,
        },
        y_axis: Axis {
            baseline: (Vec2::new(left, top), Vec2::new(left, axis_y)),
            ticks: y_ticks,
        },
    })
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
