use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::{LinearScale, PlacedMarker, Viewport};
use crate::data::{self, StateRecord};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, TooltipState};
use crate::render::Renderer;

use super::scene_builder::{ChartScene, build_frame, build_scene};
use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates dataset records, scales, hover/tooltip state,
/// and renderer calls. One render pass is a single linear sequence with no
/// internal state machine; a rebuild re-runs it in full.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    records: Vec<StateRecord>,
    scene: Option<ChartScene>,
    hover: HoverState,
    tooltip: TooltipState,
    frame_rendered: bool,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            records: Vec::new(),
            scene: None,
            hover: HoverState::default(),
            tooltip: TooltipState::default(),
            frame_rendered: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the dataset. Geometry is stale until the next `render`.
    pub fn set_records(&mut self, records: Vec<StateRecord>) {
        self.records = records;
        self.scene = None;
        self.clear_hover();
    }

    /// Loads the dataset from any CSV byte source under the configured
    /// coercion policy.
    pub fn load_records_from_reader<S: Read>(&mut self, reader: S) -> ChartResult<()> {
        let loaded = data::read_records(reader, self.config.coercion_policy)?;
        debug!(
            rows_read = loaded.rows_read,
            rows_skipped = loaded.rows_skipped,
            "dataset loaded"
        );
        self.set_records(loaded.records);
        Ok(())
    }

    /// Loads the dataset from a CSV file on disk.
    pub fn load_records_from_path(&mut self, path: impl AsRef<Path>) -> ChartResult<()> {
        let loaded = data::read_records_from_path(path, self.config.coercion_policy)?;
        debug!(
            rows_read = loaded.rows_read,
            rows_skipped = loaded.rows_skipped,
            "dataset loaded"
        );
        self.set_records(loaded.records);
        Ok(())
    }

    /// Applies a new viewport, tearing down the current frame.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        self.clear_frame();
        Ok(())
    }

    /// Builds the scene and hands one frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let scene = build_scene(&self.records, self.config.viewport, &self.config)?;
        let frame = build_frame(&scene, self.config.viewport, &self.config, &self.tooltip)?;
        self.renderer.render(&frame)?;
        self.scene = Some(scene);
        self.frame_rendered = true;
        Ok(())
    }

    /// Drops the current frame and geometry, leaving the chart empty.
    pub fn clear_frame(&mut self) {
        self.scene = None;
        self.frame_rendered = false;
        self.clear_hover();
    }

    #[must_use]
    pub fn has_rendered_frame(&self) -> bool {
        self.frame_rendered
    }

    #[must_use]
    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn placed_markers(&self) -> Option<&[PlacedMarker]> {
        self.scene.as_ref().map(|scene| scene.markers.as_slice())
    }

    #[must_use]
    pub fn x_scale(&self) -> Option<LinearScale> {
        self.scene.as_ref().map(|scene| scene.x_scale)
    }

    #[must_use]
    pub fn y_scale(&self) -> Option<LinearScale> {
        self.scene.as_ref().map(|scene| scene.y_scale)
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Pointer moved over the chart, in viewport pixel coordinates.
    ///
    /// Updates hover and tooltip state only; hosts call `render` to repaint
    /// with the tooltip overlay.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.hover.on_pointer_move(x, y);
        self.resolve_hover(x, y);
    }

    /// Pointer left the chart; hides the tooltip.
    pub fn pointer_leave(&mut self) {
        self.clear_hover();
    }

    pub(super) fn hover_mut(&mut self) -> &mut HoverState {
        &mut self.hover
    }

    pub(super) fn tooltip_mut(&mut self) -> &mut TooltipState {
        &mut self.tooltip
    }

    fn clear_hover(&mut self) {
        self.hover.on_pointer_leave();
        self.tooltip = TooltipState::default();
    }
}
