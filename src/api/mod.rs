mod engine;
mod engine_config;
mod engine_snapshot;
mod hover_resolver;
mod runtime;
mod scene_builder;

pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ChartSizingBehavior, ChartStyle};
pub use engine_snapshot::ChartSnapshot;
pub use runtime::{ChartRuntime, RebuildOutcome, RebuildTicket};
pub use scene_builder::{ChartScene, build_frame, build_scene};
