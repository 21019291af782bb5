//! Behavioral tests for the skills doughnut chart

use std::f64::consts::TAU;

use crate::components::chart::data::{SkillSlice, default_skills, tooltip};
use crate::components::chart::geometry::{hit_test, layout, legend_rows, slice_arcs};
use crate::config::ChartConfig;

// ============================================================================
// DATASET BEHAVIORS
// ============================================================================

#[test]
fn given_stock_dataset_when_split_then_slices_fill_exactly_one_turn() {
    // Given
    let skills = default_skills();

    // When
    let arcs = slice_arcs(&skills);

    // Then
    assert_eq!(arcs.len(), skills.len());
    let end = arcs.last().map_or(0.0, |a| a.end);
    assert!((end - TAU).abs() < 1e-9);
}

#[test]
fn given_stock_dataset_when_split_then_larger_values_get_larger_slices() {
    let skills = default_skills();
    let arcs = slice_arcs(&skills);

    // MERN STACK (95) vs Spring Boot (85)
    let mern = arcs.first().unwrap();
    let spring = arcs.get(4).unwrap();
    assert!(mern.sweep() > spring.sweep());
}

#[test]
fn given_all_zero_values_when_split_then_nothing_is_drawn() {
    let skills = vec![SkillSlice::new("Idle", 0, "#000")];
    assert!(slice_arcs(&skills).is_empty());
}

// ============================================================================
// HOVER BEHAVIORS
// ============================================================================

#[test]
fn given_point_at_twelve_oclock_on_ring_when_hovered_then_first_slice_is_hit() {
    // Given
    let config = ChartConfig::default();
    let layout = layout(400.0, 400.0, config.inner_radius, config.outer_radius).unwrap();
    let arcs = slice_arcs(&config.slices);

    // When: midway through the ring, slightly clockwise of straight up
    let ring = f64::midpoint(layout.inner_radius, layout.outer_radius);
    let hit = hit_test(&layout, &arcs, layout.cx + 1.0, layout.cy - ring);

    // Then
    assert_eq!(hit, Some(0));
    let label = hit
        .and_then(|i| config.slices.get(i))
        .map(|slice| tooltip(&config.series_name, slice));
    assert_eq!(label.as_deref(), Some("Skills\nMERN STACK: 95%"));
}

#[test]
fn given_point_in_doughnut_hole_when_hovered_then_nothing_is_hit() {
    let config = ChartConfig::default();
    let layout = layout(400.0, 400.0, config.inner_radius, config.outer_radius).unwrap();
    let arcs = slice_arcs(&config.slices);

    assert_eq!(hit_test(&layout, &arcs, layout.cx, layout.cy), None);
}

#[test]
fn given_point_outside_ring_when_hovered_then_nothing_is_hit() {
    let config = ChartConfig::default();
    let layout = layout(400.0, 400.0, config.inner_radius, config.outer_radius).unwrap();
    let arcs = slice_arcs(&config.slices);

    assert_eq!(hit_test(&layout, &arcs, 2.0, 2.0), None);
}

#[test]
fn given_point_just_left_of_twelve_oclock_when_hovered_then_last_slice_is_hit() {
    let config = ChartConfig::default();
    let layout = layout(300.0, 300.0, config.inner_radius, config.outer_radius).unwrap();
    let arcs = slice_arcs(&config.slices);
    let ring = f64::midpoint(layout.inner_radius, layout.outer_radius);

    let hit = hit_test(&layout, &arcs, layout.cx - 1.0, layout.cy - ring);

    assert_eq!(hit, config.slices.len().checked_sub(1));
}

// ============================================================================
// LAYOUT BEHAVIORS
// ============================================================================

#[test]
fn given_wide_container_when_laid_out_then_radii_follow_shorter_side() {
    let layout = layout(800.0, 400.0, 0.4, 0.7).unwrap();

    assert!((layout.cx - 400.0).abs() < f64::EPSILON);
    assert!((layout.outer_radius - 140.0).abs() < 1e-9);
    assert!((layout.inner_radius - 80.0).abs() < 1e-9);
}

#[test]
fn given_collapsed_container_when_laid_out_then_layout_is_rejected() {
    assert!(layout(0.0, 400.0, 0.4, 0.7).is_err());
}

#[test]
fn given_six_skills_when_building_legend_then_rows_stack_downwards() {
    let rows = legend_rows(6);

    assert_eq!(rows.len(), 6);
    assert!(rows.iter().zip(rows.iter().skip(1)).all(|(a, b)| b.swatch_y > a.swatch_y));
    assert!(rows.iter().all(|r| r.text_x > r.swatch_x));
}
