//! Canvas drawing for the skills doughnut chart

use web_sys::CanvasRenderingContext2d;

use super::data::SkillSlice;
use super::geometry::{
    ChartLayout, LEGEND_SWATCH_HEIGHT, LEGEND_SWATCH_WIDTH, SliceArc, legend_rows,
};
use crate::config::ChartConfig;
use crate::error::{PortfolioError, Result};

/// Extra outer radius of the emphasised slice, in logical pixels
const EMPHASIS_GROWTH: f64 = 6.0;

const LEGEND_FONT: &str = "12px sans-serif";
const EMPHASIS_FONT: &str = "bold 18px sans-serif";

/// Everything needed to paint one frame of the chart
pub struct ChartFrame<'a> {
    pub layout: &'a ChartLayout,
    pub slices: &'a [SkillSlice],
    pub arcs: &'a [SliceArc],
    pub config: &'a ChartConfig,
    /// Slice under the pointer
    pub highlighted: Option<usize>,
}

/// Paint the whole chart
///
/// # Errors
///
/// Returns `Canvas` if a path or text call throws.
pub fn draw_chart(ctx: &CanvasRenderingContext2d, frame: &ChartFrame<'_>) -> Result<()> {
    ctx.clear_rect(0.0, 0.0, frame.layout.width, frame.layout.height);

    for (index, (slice, arc)) in frame.slices.iter().zip(frame.arcs).enumerate() {
        let outer = if frame.highlighted == Some(index) {
            frame.layout.outer_radius + EMPHASIS_GROWTH
        } else {
            frame.layout.outer_radius
        };
        draw_slice(ctx, frame, slice, arc, outer)?;
    }

    draw_legend(ctx, frame)?;

    if let Some(slice) = frame.highlighted.and_then(|i| frame.slices.get(i)) {
        draw_center_label(ctx, frame.layout, slice)?;
    }

    Ok(())
}

fn draw_slice(
    ctx: &CanvasRenderingContext2d,
    frame: &ChartFrame<'_>,
    slice: &SkillSlice,
    arc: &SliceArc,
    outer_radius: f64,
) -> Result<()> {
    let (start, end) = arc.canvas_angles();
    let layout = frame.layout;

    ctx.begin_path();
    ctx.arc(layout.cx, layout.cy, outer_radius, start, end)
        .map_err(|e| PortfolioError::Canvas(format!("outer arc: {e:?}")))?;
    ctx.arc_with_anticlockwise(layout.cx, layout.cy, layout.inner_radius, end, start, true)
        .map_err(|e| PortfolioError::Canvas(format!("inner arc: {e:?}")))?;
    ctx.close_path();

    ctx.set_fill_style_str(&slice.color);
    ctx.fill();

    ctx.set_stroke_style_str(&frame.config.border_color);
    ctx.set_line_width(frame.config.border_width);
    ctx.stroke();

    Ok(())
}

fn draw_legend(ctx: &CanvasRenderingContext2d, frame: &ChartFrame<'_>) -> Result<()> {
    ctx.set_font(LEGEND_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    for (slice, row) in frame.slices.iter().zip(legend_rows(frame.slices.len())) {
        ctx.set_fill_style_str(&slice.color);
        ctx.fill_rect(row.swatch_x, row.swatch_y, LEGEND_SWATCH_WIDTH, LEGEND_SWATCH_HEIGHT);

        ctx.set_fill_style_str(&frame.config.legend_color);
        ctx.fill_text(&slice.name, row.text_x, row.text_y)
            .map_err(|e| PortfolioError::Canvas(format!("legend text: {e:?}")))?;
    }

    Ok(())
}

fn draw_center_label(
    ctx: &CanvasRenderingContext2d,
    layout: &ChartLayout,
    slice: &SkillSlice,
) -> Result<()> {
    ctx.set_font(EMPHASIS_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(&slice.color);

    ctx.fill_text(&slice.name, layout.cx, layout.cy)
        .map_err(|e| PortfolioError::Canvas(format!("center label: {e:?}")))
}
