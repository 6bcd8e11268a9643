//! scatter-rs: scatter-chart engine for tabular percentage datasets.
//!
//! This crate provides a Rust-idiomatic API with a strict split between
//! projection math, scene construction, and renderer backends.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartRuntime};
pub use error::{ChartError, ChartResult};
