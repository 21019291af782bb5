//! Doughnut chart geometry and hit-testing
//!
//! Angles are measured in radians clockwise from 12 o'clock, which matches
//! the canvas y-down coordinate system once offset by a quarter turn.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::data::{SkillSlice, total};
use crate::error::{PortfolioError, Result};

/// Legend swatch width in logical pixels
pub const LEGEND_SWATCH_WIDTH: f64 = 25.0;
/// Legend swatch height in logical pixels
pub const LEGEND_SWATCH_HEIGHT: f64 = 14.0;
/// Vertical gap between legend rows
pub const LEGEND_ITEM_GAP: f64 = 10.0;
/// Padding around the legend block
pub const LEGEND_PADDING: f64 = 5.0;

/// Angular extent of one slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub start: f64,
    pub end: f64,
}

impl SliceArc {
    /// Angular size of the slice
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// Start/end converted to canvas `arc()` angles
    #[must_use]
    pub fn canvas_angles(&self) -> (f64, f64) {
        (self.start - FRAC_PI_2, self.end - FRAC_PI_2)
    }
}

/// Position and radii of the doughnut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Position of one legend row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendRow {
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub text_x: f64,
    /// Vertical centre of the row, for `textBaseline = middle`
    pub text_y: f64,
}

/// Split a full turn between slices proportionally to their values
///
/// Returns no arcs when the total is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn slice_arcs(slices: &[SkillSlice]) -> Vec<SliceArc> {
    let sum = total(slices);
    if sum == 0 {
        return Vec::new();
    }
    let sum = sum as f64;

    slices
        .iter()
        .scan(0.0_f64, |start, slice| {
            let end = *start + f64::from(slice.value) / sum * TAU;
            let arc = SliceArc { start: *start, end };
            *start = end;
            Some(arc)
        })
        .collect()
}

/// Centre the doughnut in a `width × height` box
///
/// Radii are fractions of half the shorter side.
///
/// # Errors
///
/// Returns `Canvas` for a non-positive or non-finite box and `Config` for
/// radius fractions outside `0 <= inner < outer <= 1`.
pub fn layout(width: f64, height: f64, inner_fraction: f64, outer_fraction: f64) -> Result<ChartLayout> {
    if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
        return Err(PortfolioError::Canvas(format!(
            "Invalid chart size: {width}x{height}"
        )));
    }
    if !(0.0..1.0).contains(&inner_fraction)
        || outer_fraction <= inner_fraction
        || outer_fraction > 1.0
    {
        return Err(PortfolioError::Config(format!(
            "Invalid chart radii: inner {inner_fraction}, outer {outer_fraction}"
        )));
    }

    let half = width.min(height) / 2.0;
    Ok(ChartLayout {
        width,
        height,
        cx: width / 2.0,
        cy: height / 2.0,
        inner_radius: half * inner_fraction,
        outer_radius: half * outer_fraction,
    })
}

/// Angle of a point around the chart centre, clockwise from 12 o'clock
#[must_use]
pub fn angle_of(layout: &ChartLayout, x: f64, y: f64) -> f64 {
    let angle = (y - layout.cy).atan2(x - layout.cx) + FRAC_PI_2;
    angle.rem_euclid(TAU)
}

/// Index of the slice under `(x, y)`, if the point lies on the ring
#[must_use]
pub fn hit_test(layout: &ChartLayout, arcs: &[SliceArc], x: f64, y: f64) -> Option<usize> {
    let distance = (x - layout.cx).hypot(y - layout.cy);
    if distance < layout.inner_radius || distance > layout.outer_radius {
        return None;
    }

    let angle = angle_of(layout, x, y);
    arcs.iter()
        .position(|arc| angle >= arc.start && angle < arc.end)
}

/// Vertical legend rows anchored at the top left
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn legend_rows(count: usize) -> Vec<LegendRow> {
    (0..count)
        .map(|i| {
            let swatch_y = LEGEND_PADDING + i as f64 * (LEGEND_SWATCH_HEIGHT + LEGEND_ITEM_GAP);
            LegendRow {
                swatch_x: LEGEND_PADDING,
                swatch_y,
                text_x: LEGEND_PADDING + LEGEND_SWATCH_WIDTH + LEGEND_PADDING,
                text_y: swatch_y + LEGEND_SWATCH_HEIGHT / 2.0,
            }
        })
        .collect()
}
