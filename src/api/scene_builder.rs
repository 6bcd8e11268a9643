use crate::core::{
    Axis, AxisOrientation, LinearScale, PlacedMarker, PlotArea, Viewport, build_axis,
    format_tick_label, project_markers, x_scale_from_records, y_scale_from_records,
};
use crate::data::StateRecord;
use crate::error::ChartResult;
use crate::interaction::TooltipState;
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartEngineConfig;

/// Resolved geometry for one rebuild: scales, axes, and marker positions.
///
/// Marker coordinates are plot-area relative; the frame builder translates
/// them into viewport space.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub plot: PlotArea,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub markers: Vec<PlacedMarker>,
}

/// Derives scales, axes, and marker geometry from the dataset.
pub fn build_scene(
    records: &[StateRecord],
    viewport: Viewport,
    config: &ChartEngineConfig,
) -> ChartResult<ChartScene> {
    let plot = PlotArea::from_viewport(viewport, config.margin)?;
    let x_scale = x_scale_from_records(records, plot)?;
    let y_scale = y_scale_from_records(records, plot)?;
    let x_axis = build_axis(x_scale, AxisOrientation::Bottom)?;
    let y_axis = build_axis(y_scale, AxisOrientation::Left)?;
    let markers = project_markers(records, x_scale, y_scale, config.marker_radius)?;

    Ok(ChartScene {
        plot,
        x_scale,
        y_scale,
        x_axis,
        y_axis,
        markers,
    })
}

/// Materializes one draw pass: axes, markers, labels, captions, tooltip.
pub fn build_frame(
    scene: &ChartScene,
    viewport: Viewport,
    config: &ChartEngineConfig,
    tooltip: &TooltipState,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);
    let style = config.style;
    let plot = scene.plot;

    // Axis spines.
    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        style.axis_stroke_width,
        style.axis_color,
    ));
    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        style.axis_stroke_width,
        style.axis_color,
    ));

    for tick in &scene.x_axis.ticks {
        let x = plot.left + tick.pixel;
        frame.lines.push(LinePrimitive::new(
            x,
            plot.bottom(),
            x,
            plot.bottom() + style.tick_length_px,
            style.axis_stroke_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick_label(tick.value),
            x,
            plot.bottom() + style.tick_length_px + style.tick_label_gap_px,
            style.tick_label_font_px,
            style.axis_color,
            TextHAlign::Center,
        ));
    }

    for tick in &scene.y_axis.ticks {
        let y = plot.top + tick.pixel;
        frame.lines.push(LinePrimitive::new(
            plot.left - style.tick_length_px,
            y,
            plot.left,
            y,
            style.axis_stroke_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick_label(tick.value),
            plot.left - style.tick_length_px - style.tick_label_gap_px,
            y - style.tick_label_font_px * 0.5,
            style.tick_label_font_px,
            style.axis_color,
            TextHAlign::Right,
        ));
    }

    // Markers and their centered abbreviation labels.
    for marker in &scene.markers {
        let cx = plot.left + marker.x;
        let cy = plot.top + marker.y;
        frame
            .circles
            .push(CirclePrimitive::filled(cx, cy, marker.radius, style.marker_fill));
        frame.texts.push(TextPrimitive::new(
            marker.label.clone(),
            cx,
            cy + style.marker_label_baseline_nudge_px,
            style.marker_label_font_px,
            style.marker_label_color,
            TextHAlign::Center,
        ));
    }

    // Static axis captions.
    frame.texts.push(TextPrimitive::new(
        config.x_axis_caption.clone(),
        plot.left + plot.width * 0.5,
        plot.bottom() + style.x_caption_offset_px,
        style.caption_font_px,
        style.caption_color,
        TextHAlign::Center,
    ));
    frame.texts.push(
        TextPrimitive::new(
            config.y_axis_caption.clone(),
            plot.left - style.y_caption_offset_px,
            plot.top + plot.height * 0.5,
            style.caption_font_px,
            style.caption_color,
            TextHAlign::Center,
        )
        .with_rotation(-90.0),
    );

    if tooltip.visible {
        if let Some(content) = &tooltip.content {
            push_tooltip(&mut frame, tooltip, content, config);
        }
    }

    Ok(frame)
}

fn push_tooltip(
    frame: &mut RenderFrame,
    tooltip: &TooltipState,
    content: &crate::interaction::TooltipContent,
    config: &ChartEngineConfig,
) {
    let style = config.style;

    let mut widest_chars = content.title.chars().count();
    for (label, value) in &content.rows {
        // Rows render as "label: value".
        widest_chars = widest_chars.max(label.chars().count() + value.chars().count() + 2);
    }

    let box_width = widest_chars as f64 * style.tooltip_char_width_px
        + 2.0 * style.tooltip_padding_px;
    let line_count = 1 + content.rows.len();
    let box_height =
        line_count as f64 * style.tooltip_row_height_px + 2.0 * style.tooltip_padding_px;

    let mut rect = RectPrimitive::filled(
        tooltip.anchor_x,
        tooltip.anchor_y,
        box_width,
        box_height,
        style.tooltip_fill,
    );
    rect.corner_radius = style.tooltip_corner_radius_px;
    frame.rects.push(rect);

    let text_x = tooltip.anchor_x + style.tooltip_padding_px;
    let mut text_y = tooltip.anchor_y + style.tooltip_padding_px;
    frame.texts.push(TextPrimitive::new(
        content.title.clone(),
        text_x,
        text_y,
        style.tooltip_font_px,
        style.tooltip_text_color,
        TextHAlign::Left,
    ));
    for (label, value) in &content.rows {
        text_y += style.tooltip_row_height_px;
        frame.texts.push(TextPrimitive::new(
            format!("{label}: {value}"),
            text_x,
            text_y,
            style.tooltip_font_px,
            style.tooltip_text_color,
            TextHAlign::Left,
        ));
    }
}
