use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::ChartResult;

pub const AXIS_BOTTOM_TARGET_SPACING_PX: f64 = 72.0;
pub const AXIS_LEFT_TARGET_SPACING_PX: f64 = 40.0;
pub const AXIS_MIN_TICKS: usize = 2;
pub const AXIS_MAX_TICKS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One tick resolved against a scale: a domain value and its pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub ticks: Vec<AxisTick>,
}

/// Picks a tick count so labels land roughly `target_spacing_px` apart.
#[must_use]
pub fn axis_tick_target_count(axis_span_px: f64, target_spacing_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return AXIS_MIN_TICKS;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return AXIS_MIN_TICKS;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(AXIS_MIN_TICKS, AXIS_MAX_TICKS)
}

/// Evenly spaced tick values across a domain, endpoints included.
#[must_use]
pub fn axis_tick_values(domain: (f64, f64), tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }
    if tick_count == 1 {
        return vec![domain.0];
    }

    let span = domain.1 - domain.0;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            domain.0 + span * ratio
        })
        .collect()
}

/// Resolves an axis for a scale: tick values placed at pixel positions.
pub fn build_axis(scale: LinearScale, orientation: AxisOrientation) -> ChartResult<Axis> {
    let (range_start, range_end) = scale.range();
    let span_px = (range_end - range_start).abs();
    let target_spacing = match orientation {
        AxisOrientation::Bottom => AXIS_BOTTOM_TARGET_SPACING_PX,
        AxisOrientation::Left => AXIS_LEFT_TARGET_SPACING_PX,
    };

    let count = axis_tick_target_count(span_px, target_spacing);
    let mut ticks = Vec::with_capacity(count);
    for value in axis_tick_values(scale.domain(), count) {
        let pixel = scale.value_to_pixel(value)?;
        ticks.push(AxisTick { value, pixel });
    }

    Ok(Axis { orientation, ticks })
}

/// Compact numeric label: at most one decimal, trailing zeros trimmed.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format!("{}", rounded.trunc() as i64)
    } else {
        format!("{rounded:.1}")
    }
}
