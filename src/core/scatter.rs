use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea};
use crate::data::StateRecord;
use crate::error::{ChartError, ChartResult};

/// Extra domain headroom below the smallest poverty value, in domain units.
///
/// Nudges the leftmost marker off the vertical axis.
pub const X_DOMAIN_LOWER_NUDGE: f64 = 1.0;

/// One record projected into plot-area pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    /// Index of the source record in the dataset.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub label: String,
}

impl PlacedMarker {
    /// Whether a plot-area pixel position falls inside the marker circle.
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let dx = px - self.x;
        let dy = py - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Horizontal scale over the poverty column: `[min - 1, max] -> [0, width]`.
pub fn x_scale_from_records(records: &[StateRecord], plot: PlotArea) -> ChartResult<LinearScale> {
    let (min, max) = extent(records, |record| record.poverty)?;
    LinearScale::new(min - X_DOMAIN_LOWER_NUDGE, max, 0.0, plot.width)
}

/// Vertical scale over the healthcare column: `[0, max] -> [height, 0]`.
///
/// The inverted range maps larger values to smaller pixel-y, so the maximum
/// renders at the plot top and zero at the plot bottom.
pub fn y_scale_from_records(records: &[StateRecord], plot: PlotArea) -> ChartResult<LinearScale> {
    let (_, max) = extent(records, |record| record.healthcare)?;
    LinearScale::new(0.0, max, plot.height, 0.0)
}

/// Projects records into circle markers at scaled (poverty, healthcare).
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_markers(
    records: &[StateRecord],
    x_scale: LinearScale,
    y_scale: LinearScale,
    radius: f64,
) -> ChartResult<Vec<PlacedMarker>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ChartError::InvalidData(
            "marker radius must be finite and > 0".to_owned(),
        ));
    }

    let mut markers = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let x = x_scale.value_to_pixel(record.poverty)?;
        let y = y_scale.value_to_pixel(record.healthcare)?;
        markers.push(PlacedMarker {
            index,
            x,
            y,
            radius,
            label: record.abbr.clone(),
        });
    }

    Ok(markers)
}

fn extent<F>(records: &[StateRecord], field: F) -> ChartResult<(f64, f64)>
where
    F: Fn(&StateRecord) -> f64,
{
    if records.is_empty() {
        return Err(ChartError::InvalidData(
            "dataset contains no records".to_owned(),
        ));
    }

    let min = records
        .iter()
        .map(|record| OrderedFloat(field(record)))
        .min()
        .map(|value| value.into_inner());
    let max = records
        .iter()
        .map(|record| OrderedFloat(field(record)))
        .max()
        .map(|value| value.into_inner());

    match (min, max) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(ChartError::InvalidData(
            "dataset contains no records".to_owned(),
        )),
    }
}
