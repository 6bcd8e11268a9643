use std::path::Path;

use tracing::{debug, warn};

use crate::core::Viewport;
use crate::data::{self, StateRecord};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig};

/// Token identifying one rebuild cycle.
///
/// A dataset load completed against a stale ticket is discarded, so
/// overlapping rebuilds (e.g. rapid resizes) cannot race each other into the
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildTicket {
    generation: u64,
}

/// What happened to a completed rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// Records installed and frame rendered.
    Rendered,
    /// A newer rebuild started first; this result was discarded.
    Superseded,
    /// The dataset load failed; the failure was logged and the chart stays
    /// empty.
    DataRejected,
}

/// Explicit chart lifecycle: `init -> render -> (on resize) teardown + render`.
///
/// Replaces ambient global listener state with a constructed object. Every
/// resize is a full teardown and rebuild; there is no partial update path.
pub struct ChartRuntime<R: Renderer> {
    engine: ChartEngine<R>,
    generation: u64,
}

impl<R: Renderer> ChartRuntime<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        Ok(Self {
            engine: ChartEngine::new(renderer, config)?,
            generation: 0,
        })
    }

    #[must_use]
    pub fn engine(&self) -> &ChartEngine<R> {
        &self.engine
    }

    #[must_use]
    pub fn engine_mut(&mut self) -> &mut ChartEngine<R> {
        &mut self.engine
    }

    /// Tears down the current frame and opens a new rebuild cycle.
    ///
    /// The old chart is removed before the new dataset load starts, so at
    /// most one chart image exists at any point in the lifecycle.
    pub fn begin_rebuild(&mut self, viewport: Viewport) -> ChartResult<RebuildTicket> {
        self.engine.set_viewport(viewport)?;
        self.generation += 1;
        Ok(RebuildTicket {
            generation: self.generation,
        })
    }

    /// Applies a finished dataset load to the chart.
    ///
    /// Stale tickets are discarded; load failures are logged and leave the
    /// chart empty rather than propagating to the host.
    pub fn complete_rebuild(
        &mut self,
        ticket: RebuildTicket,
        loaded: ChartResult<Vec<StateRecord>>,
    ) -> ChartResult<RebuildOutcome> {
        if ticket.generation != self.generation {
            debug!(
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                "discarding superseded rebuild"
            );
            return Ok(RebuildOutcome::Superseded);
        }

        match loaded {
            Ok(records) => {
                self.engine.set_records(records);
                self.engine.render()?;
                Ok(RebuildOutcome::Rendered)
            }
            Err(err) => {
                warn!(error = %err, "dataset load failed; leaving chart empty");
                Ok(RebuildOutcome::DataRejected)
            }
        }
    }

    /// Window resized: derive the new viewport from the sizing fractions and
    /// open a rebuild cycle. No debouncing; every resize rebuilds in full.
    pub fn resize(&mut self, window_width: u32, window_height: u32) -> ChartResult<RebuildTicket> {
        let viewport = self
            .engine
            .config()
            .sizing
            .viewport_for_window(window_width, window_height)?;
        self.begin_rebuild(viewport)
    }

    /// Convenience for hosts with synchronous file access: one full
    /// begin-load-complete cycle against the current viewport.
    pub fn rebuild_from_path(&mut self, path: impl AsRef<Path>) -> ChartResult<RebuildOutcome> {
        let viewport = self.engine.viewport();
        let ticket = self.begin_rebuild(viewport)?;
        let policy = self.engine.config().coercion_policy;
        let loaded = data::read_records_from_path(path, policy).map(|dataset| dataset.records);
        self.complete_rebuild(ticket, loaded)
    }
}
