//! Behavioral tests for page features
//!
//! BDD-style tests using given-when-then naming convention.
//! Tests focus on observable behaviour rather than implementation details.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod chart_behaviors;
pub mod config_behaviors;
pub mod navigation_behaviors;
