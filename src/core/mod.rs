pub mod axis;
mod scale;
mod scatter;
mod types;

pub use axis::{Axis, AxisOrientation, AxisTick, build_axis, format_tick_label};
pub use scale::LinearScale;
pub use scatter::{
    PlacedMarker, X_DOMAIN_LOWER_NUDGE, project_markers, x_scale_from_records,
    y_scale_from_records,
};
pub use types::{Margin, PlotArea, Viewport};
