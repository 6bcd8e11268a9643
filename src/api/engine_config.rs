use serde::{Deserialize, Serialize};

use crate::core::{Margin, Viewport};
use crate::data::CoercionPolicy;
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipOffset;
use crate::render::Color;

/// Window-to-viewport sizing: the chart occupies fixed fractions of the
/// hosting window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSizingBehavior {
    pub width_fraction: f64,
    pub height_fraction: f64,
}

impl Default for ChartSizingBehavior {
    fn default() -> Self {
        Self {
            width_fraction: 2.0 / 3.0,
            height_fraction: 0.5,
        }
    }
}

impl ChartSizingBehavior {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("width_fraction", self.width_fraction),
            ("height_fraction", self.height_fraction),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ChartError::InvalidData(format!(
                    "sizing `{name}` must be finite and in (0, 1]"
                )));
            }
        }
        Ok(self)
    }

    /// Derives the chart viewport from window dimensions.
    pub fn viewport_for_window(self, window_width: u32, window_height: u32) -> ChartResult<Viewport> {
        self.validate()?;

        let width = (f64::from(window_width) * self.width_fraction).round() as u32;
        let height = (f64::from(window_height) * self.height_fraction).round() as u32;
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        Ok(viewport)
    }
}

/// Visual styling knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub marker_fill: Color,
    pub marker_label_color: Color,
    pub marker_label_font_px: f64,
    /// Vertical nudge applied to marker labels so text sits on circle centers.
    pub marker_label_baseline_nudge_px: f64,
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub tick_length_px: f64,
    pub tick_label_font_px: f64,
    pub tick_label_gap_px: f64,
    pub caption_font_px: f64,
    pub caption_color: Color,
    /// Distance from the plot bottom edge to the x caption anchor.
    pub x_caption_offset_px: f64,
    /// Distance from the plot left edge to the rotated y caption anchor.
    pub y_caption_offset_px: f64,
    pub tooltip_fill: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_px: f64,
    pub tooltip_padding_px: f64,
    pub tooltip_row_height_px: f64,
    /// Monospace-ish width estimate used to size the tooltip box.
    pub tooltip_char_width_px: f64,
    pub tooltip_corner_radius_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            marker_fill: Color::rgba(0.35, 0.56, 0.80, 0.9),
            marker_label_color: Color::rgb(1.0, 1.0, 1.0),
            marker_label_font_px: 11.0,
            marker_label_baseline_nudge_px: 4.0,
            axis_color: Color::rgb(0.2, 0.2, 0.2),
            axis_stroke_width: 1.0,
            tick_length_px: 6.0,
            tick_label_font_px: 11.0,
            tick_label_gap_px: 4.0,
            caption_font_px: 14.0,
            caption_color: Color::rgb(0.1, 0.1, 0.1),
            x_caption_offset_px: 50.0,
            y_caption_offset_px: 80.0,
            tooltip_fill: Color::rgba(0.15, 0.15, 0.15, 0.9),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_px: 11.0,
            tooltip_padding_px: 8.0,
            tooltip_row_height_px: 14.0,
            tooltip_char_width_px: 6.5,
            tooltip_corner_radius_px: 4.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("marker_label_font_px", self.marker_label_font_px),
            ("axis_stroke_width", self.axis_stroke_width),
            ("tick_length_px", self.tick_length_px),
            ("tick_label_font_px", self.tick_label_font_px),
            ("caption_font_px", self.caption_font_px),
            ("tooltip_font_px", self.tooltip_font_px),
            ("tooltip_padding_px", self.tooltip_padding_px),
            ("tooltip_row_height_px", self.tooltip_row_height_px),
            ("tooltip_char_width_px", self.tooltip_char_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        self.marker_fill.validate()?;
        self.marker_label_color.validate()?;
        self.axis_color.validate()?;
        self.caption_color.validate()?;
        self.tooltip_fill.validate()?;
        self.tooltip_text_color.validate()?;
        Ok(self)
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default)]
    pub coercion_policy: CoercionPolicy,
    #[serde(default = "default_x_caption")]
    pub x_axis_caption: String,
    #[serde(default = "default_y_caption")]
    pub y_axis_caption: String,
    #[serde(default)]
    pub tooltip_offset: TooltipOffset,
    #[serde(default)]
    pub sizing: ChartSizingBehavior,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartEngineConfig {
    /// Creates a config with default layout and styling for a viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: Margin::default(),
            marker_radius: default_marker_radius(),
            coercion_policy: CoercionPolicy::default(),
            x_axis_caption: default_x_caption(),
            y_axis_caption: default_y_caption(),
            tooltip_offset: TooltipOffset::default(),
            sizing: ChartSizingBehavior::default(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    #[must_use]
    pub fn with_coercion_policy(mut self, policy: CoercionPolicy) -> Self {
        self.coercion_policy = policy;
        self
    }

    #[must_use]
    pub fn with_captions(
        mut self,
        x_caption: impl Into<String>,
        y_caption: impl Into<String>,
    ) -> Self {
        self.x_axis_caption = x_caption.into();
        self.y_axis_caption = y_caption.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margin.validate()?;
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        if self.x_axis_caption.is_empty() || self.y_axis_caption.is_empty() {
            return Err(ChartError::InvalidData(
                "axis captions must not be empty".to_owned(),
            ));
        }
        self.sizing.validate()?;
        self.style.validate()?;
        Ok(())
    }
}

fn default_marker_radius() -> f64 {
    15.0
}

fn default_x_caption() -> String {
    "In Poverty (%)".to_owned()
}

fn default_y_caption() -> String {
    "Lack of Healthcare (%)".to_owned()
}
