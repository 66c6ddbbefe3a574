//! Geometry for the SVG line charts on the analytics screen.
//!
//! Values map into a fixed `viewBox`; the SVG scales to its container.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Plot area inside a `width x height` view box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Plot {
    fn default() -> Self {
        Self { width: 640.0, height: 260.0, left: 44.0, right: 44.0, top: 12.0, bottom: 28.0 }
    }
}

impl Plot {
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    /// Y of the zero line.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    #[must_use]
    pub fn right_edge(&self) -> f64 {
        self.width - self.right
    }

    /// X of sample `index` out of `count`; a single sample sits centred.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.inner_width() / 2.0;
        }
        self.left + self.inner_width() * index as f64 / (count - 1) as f64
    }

    #[must_use]
    pub fn y_at(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 || !value.is_finite() {
            return self.baseline();
        }
        let ratio = (value / max).clamp(0.0, 1.0);
        self.baseline() - self.inner_height() * ratio
    }

    /// `points` attribute for an SVG `<polyline>`.
    #[must_use]
    pub fn points(&self, values: &[f64], max: f64) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| format!("{:.1},{:.1}", self.x_at(i, values.len()), self.y_at(*value, max)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Round `max` up to 1, 2 or 5 times a power of ten. Empty data scales to 1.
#[must_use]
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0].into_iter().find(|m| m * magnitude >= max).unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced axis values from zero to `max`, inclusive.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ticks(max: f64, steps: usize) -> Vec<f64> {
    let steps = steps.max(1);
    (0..=steps).map(|i| max * i as f64 / steps as f64).collect()
}

/// Show every n-th x label so at most `max_labels` appear.
#[must_use]
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    count.div_ceil(max_labels.max(1)).max(1)
}

/// Axis label without a trailing `.0`.
#[must_use]
pub fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
