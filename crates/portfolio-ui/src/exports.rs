//! Functions callable from page JavaScript
//!
//! Mirrors the helper object the stock page exposed, so inline scripts can
//! animate elements, raise toasts and wire a contact form.

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlFormElement};

use crate::animation::{DEFAULT_DURATION_MS, fade_in, slide_up};
use crate::components::contact::handle_contact_form;
use crate::components::notification::{NotificationKind, show_notification};
use crate::components::particles::init_particle_background;
use crate::config::PortfolioConfig;
use crate::dom;

/// Configuration of the current page, so JS callers see the same overrides
/// as the features started at boot
fn page_config() -> crate::error::Result<PortfolioConfig> {
    Ok(PortfolioConfig::load(&dom::document()?))
}

/// Fade `element` in over `duration` ms (default 600)
///
/// # Errors
///
/// Throws if the element cannot be styled or no animation frame is available.
#[wasm_bindgen(js_name = fadeIn)]
pub fn fade_in_js(element: &HtmlElement, duration: Option<f64>) -> Result<(), JsError> {
    fade_in(element, duration.unwrap_or(DEFAULT_DURATION_MS))?;
    Ok(())
}

/// Slide `element` up into place over `duration` ms (default 600)
///
/// # Errors
///
/// Throws if the element cannot be styled or no animation frame is available.
#[wasm_bindgen(js_name = slideUp)]
pub fn slide_up_js(element: &HtmlElement, duration: Option<f64>) -> Result<(), JsError> {
    slide_up(element, duration.unwrap_or(DEFAULT_DURATION_MS))?;
    Ok(())
}

/// Show a toast; `kind` is `"success"`, `"error"` or anything else for info
///
/// # Errors
///
/// Throws if the document has no body.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification_js(message: &str, kind: Option<String>) -> Result<(), JsError> {
    let kind = kind
        .as_deref()
        .map_or_else(NotificationKind::default, NotificationKind::from_name);
    show_notification(message, kind, page_config()?.notification.duration_ms)?;
    Ok(())
}

/// Intercept submissions of `form`; nothing is sent over the network
///
/// # Errors
///
/// Throws if the submit listener cannot be attached.
#[wasm_bindgen(js_name = handleContactForm)]
pub fn handle_contact_form_js(form: &HtmlFormElement) -> Result<(), JsError> {
    handle_contact_form(form, &page_config()?.notification)?;
    Ok(())
}

/// Start the decorative particle background
///
/// # Errors
///
/// Throws if the canvas cannot be created.
#[wasm_bindgen(js_name = initParticleBackground)]
pub fn init_particle_background_js() -> Result<(), JsError> {
    let document = dom::document()?;
    let config = PortfolioConfig::load(&document);
    init_particle_background(&document, &config.particles)?;
    Ok(())
}
