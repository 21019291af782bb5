//! Skill dataset shown in the chart

use serde::{Deserialize, Serialize};

/// One chart slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSlice {
    pub name: String,
    /// Proficiency percentage, displayed as-is
    pub value: u32,
    /// CSS color of the slice and its legend swatch
    pub color: String,
}

impl SkillSlice {
    #[must_use]
    pub fn new(name: &str, value: u32, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

/// The stock six-entry dataset, in display order
#[must_use]
pub fn default_skills() -> Vec<SkillSlice> {
    vec![
        SkillSlice::new("MERN STACK", 95, "#1E3A8A"),
        SkillSlice::new("Database Management", 92, "#065F46"),
        SkillSlice::new("Advanced SQL", 88, "#7C2D12"),
        SkillSlice::new("Rest Api", 94, "#4C1D95"),
        SkillSlice::new("Spring Boot", 85, "#374151"),
        SkillSlice::new("AWS Cloud", 90, "#155E75"),
    ]
}

/// Sum of all slice values
#[must_use]
pub fn total(slices: &[SkillSlice]) -> u64 {
    slices.iter().map(|s| u64::from(s.value)).sum()
}

/// Tooltip text for a hovered slice
///
/// ```
/// use portfolio_ui::components::chart::data::{SkillSlice, tooltip};
///
/// let slice = SkillSlice::new("Rest Api", 94, "#4C1D95");
/// assert_eq!(tooltip("Skills", &slice), "Skills\nRest Api: 94%");
/// ```
#[must_use]
pub fn tooltip(series_name: &str, slice: &SkillSlice) -> String {
    format!("{series_name}\n{}: {}%", slice.name, slice.value)
}
