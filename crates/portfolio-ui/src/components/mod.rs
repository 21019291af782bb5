//! Page features
//!
//! Each feature exposes an `init(&Document, &PortfolioConfig)` entry point
//! used by [`crate::boot`], plus a lower-level function taking only its own
//! config section.

pub mod certifications;
pub mod chart;
pub mod contact;
pub mod download;
pub mod navigation;
pub mod notification;
pub mod observer;
pub mod particles;
pub mod reveal;
pub mod skill_bars;
pub mod typewriter;

pub use notification::{NotificationKind, show_notification};
