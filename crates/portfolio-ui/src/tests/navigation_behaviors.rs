//! Behavioral tests for scroll-aware navigation

use crate::components::navigation::{SectionBounds, active_section, is_scrolled, link_href};
use crate::config::NavigationConfig;

fn page() -> Vec<SectionBounds> {
    [
        ("home", 0.0, 700.0),
        ("about", 700.0, 500.0),
        ("experience", 1200.0, 900.0),
        ("skills", 2100.0, 600.0),
        ("contact", 2700.0, 400.0),
    ]
    .into_iter()
    .map(|(id, top, height)| SectionBounds {
        id: id.to_string(),
        top,
        height,
    })
    .collect()
}

// ============================================================================
// ACTIVE SECTION BEHAVIORS
// ============================================================================

#[test]
fn given_top_of_page_when_offset_applied_then_home_is_active() {
    // Given
    let config = NavigationConfig::default();

    // When
    let sections = page();
    let active = active_section(&sections, 0.0 + config.scroll_offset);

    // Then
    assert_eq!(active, Some("home"));
}

#[test]
fn given_scroll_just_before_section_when_offset_applied_then_next_section_is_active() {
    // Given: 100px above "about" starts
    let config = NavigationConfig::default();

    // When
    let sections = page();
    let active = active_section(&sections, 600.0 + config.scroll_offset);

    // Then
    assert_eq!(active, Some("about"));
}

#[test]
fn given_any_scroll_position_when_matching_then_at_most_one_section_is_active() {
    let sections = page();

    for y in (0..3200).step_by(25) {
        let position = f64::from(y);
        let matching = sections.iter().filter(|s| s.contains(position)).count();
        assert!(matching <= 1, "position {position} matched {matching} sections");
        assert_eq!(active_section(&sections, position).is_some(), matching == 1);
    }
}

#[test]
fn given_position_past_last_section_when_matching_then_nothing_is_active() {
    assert_eq!(active_section(&page(), 5000.0), None);
}

#[test]
fn given_section_id_when_building_href_then_matches_nav_link_format() {
    let sections = page();
    let hrefs: Vec<String> = sections.iter().map(|s| link_href(&s.id)).collect();
    assert!(hrefs.iter().all(|h| h.starts_with('#')));
    assert_eq!(hrefs.first().map(String::as_str), Some("#home"));
}

// ============================================================================
// NAVBAR STYLE BEHAVIORS
// ============================================================================

#[test]
fn given_default_threshold_when_barely_scrolled_then_navbar_is_plain() {
    let config = NavigationConfig::default();
    assert!(!is_scrolled(50.0, config.scrolled_threshold));
}

#[test]
fn given_default_threshold_when_scrolled_past_then_navbar_is_styled() {
    let config = NavigationConfig::default();
    assert!(is_scrolled(51.0, config.scrolled_threshold));
    assert_eq!(config.scrolled_classes, vec!["bg-white/98", "shadow-md"]);
}
