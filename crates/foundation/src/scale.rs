//! Linear and categorical band scales for chart axes.

use std::fmt;

/// Returned when a scale is asked to span an empty domain.
///
/// A zero-extent domain would divide by zero and leak NaN into every
/// downstream pixel, so construction fails instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot build a scale over an empty domain")
    }
}

impl std::error::Error for EmptyInputError {}

/// Linear map from `[0, domain_max]` to `[0, range_max]`.
///
/// The endpoints are exact: `position(0.0)` is `0.0` and
/// `position(domain_max)` is `range_max`, bit for bit. Values outside the
/// domain extrapolate; nothing clamps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearScale {
    domain_max: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain_max: f64, range_max: f64) -> Result<Self, EmptyInputError> {
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(EmptyInputError);
        }
        Ok(Self {
            domain_max,
            range_max,
        })
    }

    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    pub fn range_max(&self) -> f64 {
        self.range_max
    }

    pub fn position(&self, value: f64) -> f64 {
        value / self.domain_max * self.range_max
    }

    /// Round tick values covering `[0, domain_max]`, approximately `count`
    /// of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(0.0, self.domain_max, count)
    }
}

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Tick values on 1, 2 and 5 times a power of ten, covering `[start, stop]`
/// with approximately `count` steps.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let step = tick_increment(start, stop, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    if step > 0.0 {
        let first = (start / step).ceil();
        let last = (stop / step).floor();
        if last < first {
            return Vec::new();
        }
        let n = (last - first) as usize + 1;
        (0..n).map(|i| (first + i as f64) * step).collect()
    } else {
        // Fractional steps carry the inverted increment so each tick is a
        // single division, which keeps values like 0.2 exact.
        let inverse = -step;
        let first = (start * inverse).ceil();
        let last = (stop * inverse).floor();
        if last < first {
            return Vec::new();
        }
        let n = (last - first) as usize + 1;
        (0..n).map(|i| (first + i as f64) / inverse).collect()
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Evenly spaced category bands over `[0, range]`, with the same padding
/// ratio inside and outside the bands and centre alignment.
///
/// Duplicate categories collapse onto their first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(
        categories: impl IntoIterator<Item = String>,
        range: f64,
        padding: f64,
    ) -> Result<Self, EmptyInputError> {
        let mut unique: Vec<String> = Vec::new();
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        if unique.is_empty() {
            return Err(EmptyInputError);
        }

        let n = unique.len() as f64;
        let step = range / (n + padding).max(1.0);
        let start = (range - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);
        Ok(Self {
            categories: unique,
            start,
            step,
            bandwidth,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Leading edge of `category`'s band, or `None` for an unknown category.
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.categories.iter().position(|c| c == category)?;
        Some(self.start + self.step * index as f64)
    }

    /// Centre of `category`'s band; where its axis label goes.
    pub fn center(&self, category: &str) -> Option<f64> {
        Some(self.position(category)? + self.bandwidth / 2.0)
    }
}
