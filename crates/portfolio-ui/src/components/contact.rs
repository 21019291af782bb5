//! Contact form handler
//!
//! Submissions are intercepted, logged and acknowledged locally. Nothing is
//! sent anywhere.

use std::collections::BTreeMap;

use js_sys::Array;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use super::notification::{NotificationKind, show_notification};
use crate::config::NotificationConfig;
use crate::dom;
use crate::error::{PortfolioError, Result};

/// Message shown after a submission
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

/// Fold `(name, value)` pairs into a map; a repeated name keeps its last value
///
/// Non-text values (file inputs) are skipped.
#[must_use]
pub fn fields_from_pairs<I>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, Option<String>)>,
{
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
}

/// Read every field of `form`
///
/// # Errors
///
/// Returns `Dom` if the form data cannot be built or iterated.
pub fn collect_fields(form: &HtmlFormElement) -> Result<BTreeMap<String, String>> {
    let data = FormData::new_with_form(form).map_err(|e| PortfolioError::dom("read form", &e))?;

    let entries = js_sys::try_iter(&data)
        .map_err(|e| PortfolioError::dom("iterate form", &e))?
        .ok_or_else(|| PortfolioError::Dom("form data is not iterable".to_string()))?;

    let mut pairs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PortfolioError::dom("read form entry", &e))?;
        let Ok(pair) = entry.dyn_into::<Array>() else {
            continue;
        };
        if let Some(name) = pair.get(0).as_string() {
            pairs.push((name, pair.get(1).as_string()));
        }
    }

    Ok(fields_from_pairs(pairs))
}

/// Intercept submissions of `form`
///
/// # Errors
///
/// Returns an error if the submit listener cannot be attached.
pub fn handle_contact_form(form: &HtmlFormElement, notification: &NotificationConfig) -> Result<()> {
    let duration_ms = notification.duration_ms;
    let target = form.clone();

    dom::listen(form, "submit", move |event| {
        event.prevent_default();

        match collect_fields(&target) {
            Ok(fields) => log::info!(
                "Form submitted: {}",
                serde_json::to_string(&fields).unwrap_or_default()
            ),
            Err(e) => log::warn!("contact form: {e}"),
        }

        if let Err(e) = show_notification(THANK_YOU_MESSAGE, NotificationKind::Success, duration_ms) {
            log::warn!("contact form: {e}");
        }

        target.reset();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_from_pairs_keeps_last_value() {
        let fields = fields_from_pairs(vec![
            ("name".to_string(), Some("Ada".to_string())),
            ("topic".to_string(), Some("first".to_string())),
            ("topic".to_string(), Some("second".to_string())),
        ]);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("name").map(String::as_str), Some("Ada"));
        assert_eq!(fields.get("topic").map(String::as_str), Some("second"));
    }

    #[test]
    fn test_fields_from_pairs_skips_non_text() {
        let fields = fields_from_pairs(vec![
            ("attachment".to_string(), None),
            ("email".to_string(), Some("a@b.c".to_string())),
        ]);

        assert!(!fields.contains_key("attachment"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_fields_serialize_for_logging() {
        let fields = fields_from_pairs(vec![("message".to_string(), Some("hi".to_string()))]);
        assert_eq!(serde_json::to_string(&fields).unwrap_or_default(), r#"{"message":"hi"}"#);
    }
}
