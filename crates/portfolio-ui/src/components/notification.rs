//! Transient toast notifications
//!
//! The toast is mounted as a small Leptos view on `<body>`; dropping its
//! unmount handle when the timer fires removes it again.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::dom;
use crate::error::Result;

/// Classes shared by every toast
pub const BASE_CLASSES: &str = "fixed top-4 right-4 p-4 rounded-lg shadow-lg z-50";

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// Parse a loose type name; anything unrecognised is `Info`
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Color classes for this kind
    #[must_use]
    pub const fn color_classes(self) -> &'static str {
        match self {
            Self::Success => "bg-green-500 text-white",
            Self::Error => "bg-red-500 text-white",
            Self::Info => "bg-blue-500 text-white",
        }
    }
}

/// Full class attribute for a toast of `kind`
#[must_use]
pub fn notification_class(kind: NotificationKind) -> String {
    format!("{BASE_CLASSES} {}", kind.color_classes())
}

/// Show `message` in a toast that removes itself after `duration_ms`
///
/// # Errors
///
/// Returns an error if the document body is unavailable.
pub fn show_notification(message: &str, kind: NotificationKind, duration_ms: u32) -> Result<()> {
    let body = dom::body(&dom::document()?)?;
    let class = notification_class(kind);
    let message = message.to_string();

    let handle = leptos::mount::mount_to(body, move || {
        view! { <div class=class role="status">{message}</div> }
    });

    Timeout::new(duration_ms, move || drop(handle)).forget();
    Ok(())
}
