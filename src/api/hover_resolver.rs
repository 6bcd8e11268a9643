use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::interaction::{TooltipContent, TooltipState};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Resolves which marker (if any) the pointer is over and updates the
    /// tooltip accordingly. Overlapping markers resolve to the nearest center.
    pub(super) fn resolve_hover(&mut self, pointer_x: f64, pointer_y: f64) {
        let Some(scene) = self.scene() else {
            self.hover_mut().set_hovered_record(None);
            *self.tooltip_mut() = TooltipState::default();
            return;
        };

        let plot_x = pointer_x - scene.plot.left;
        let plot_y = pointer_y - scene.plot.top;

        let mut hits: SmallVec<[(OrderedFloat<f64>, usize); 4]> = SmallVec::new();
        for marker in &scene.markers {
            if marker.contains(plot_x, plot_y) {
                let dx = plot_x - marker.x;
                let dy = plot_y - marker.y;
                hits.push((OrderedFloat(dx * dx + dy * dy), marker.index));
            }
        }

        let hovered = hits.into_iter().min_by_key(|hit| hit.0).map(|hit| hit.1);
        let tooltip = hovered.and_then(|index| self.tooltip_for_record(index));

        self.hover_mut().set_hovered_record(hovered);
        *self.tooltip_mut() = tooltip.unwrap_or_default();
    }

    fn tooltip_for_record(&self, index: usize) -> Option<TooltipState> {
        let record = self.records().get(index)?;
        let scene = self.scene()?;
        let marker = scene.markers.iter().find(|marker| marker.index == index)?;
        let offset = self.config().tooltip_offset;

        let content = TooltipContent::new(record.state.clone())
            .with_row("Poverty (%)", record.poverty.to_string())
            .with_row("Healthcare (%)", record.healthcare.to_string());

        Some(TooltipState {
            visible: true,
            anchor_x: scene.plot.left + marker.x + offset.dx,
            anchor_y: scene.plot.top + marker.y + offset.dy,
            content: Some(content),
        })
    }
}
