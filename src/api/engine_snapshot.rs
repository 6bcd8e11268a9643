use serde::Serialize;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::Renderer;

use super::ChartEngine;

/// Serializable view of engine state for debugging and host persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub record_count: usize,
    pub marker_count: usize,
    pub x_domain: Option<(f64, f64)>,
    pub y_domain: Option<(f64, f64)>,
    pub hovered_record: Option<usize>,
    pub tooltip: TooltipState,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            viewport: self.viewport(),
            record_count: self.records().len(),
            marker_count: self
                .placed_markers()
                .map(|markers| markers.len())
                .unwrap_or_default(),
            x_domain: self.x_scale().map(|scale| scale.domain()),
            y_domain: self.y_scale().map(|scale| scale.domain()),
            hovered_record: self.hover_state().hovered_record(),
            tooltip: self.tooltip_state().clone(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| ChartError::InvalidData(format!("failed to serialize snapshot: {err}")))
    }
}
