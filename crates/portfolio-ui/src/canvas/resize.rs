//! Canvas resize handling
//!
//! Sizing math is pure; the window listener debounces bursts of `resize`
//! events so a drag only triggers one redraw.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;
use crate::error::{PortfolioError, Result};

/// Constraints applied when fitting a canvas to its container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeConfig {
    /// Maximum width constraint in logical pixels
    pub max_width: Option<f64>,
    /// Maximum height constraint in logical pixels
    pub max_height: Option<f64>,
    /// Width/height ratio used when the container reports no height
    pub fallback_aspect_ratio: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            max_width: None,
            max_height: None,
            fallback_aspect_ratio: 4.0 / 3.0,
        }
    }
}

/// Calculate canvas dimensions for an available box
///
/// A zero height (an unstyled container) is derived from the width and the
/// fallback aspect ratio.
///
/// # Errors
///
/// Returns an error if:
/// - Width is not finite or non-positive
/// - Height is not finite or negative
///
/// # Example
///
/// ```
/// use portfolio_ui::canvas::resize::{calculate_canvas_size, ResizeConfig};
///
/// let config = ResizeConfig::default();
/// assert_eq!(calculate_canvas_size(640.0, 0.0, &config)?, (640, 480));
/// # Ok::<(), portfolio_ui::error::PortfolioError>(())
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate_canvas_size(width: f64, height: f64, config: &ResizeConfig) -> Result<(u32, u32)> {
    if !width.is_finite() || width <= 0.0 {
        return Err(PortfolioError::Canvas(format!("Invalid width: {width}")));
    }
    if !height.is_finite() || height < 0.0 {
        return Err(PortfolioError::Canvas(format!("Invalid height: {height}")));
    }

    let height = if height > 0.0 {
        height
    } else {
        width / config.fallback_aspect_ratio.max(f64::EPSILON)
    };

    let width = config.max_width.map_or(width, |max_w| width.min(max_w));
    let height = config.max_height.map_or(height, |max_h| height.min(max_h));

    let final_width = width.floor().clamp(1.0, f64::from(u32::MAX)) as u32;
    let final_height = height.floor().clamp(1.0, f64::from(u32::MAX)) as u32;

    Ok((final_width, final_height))
}

/// Get current window inner dimensions
///
/// # Errors
///
/// Returns an error if:
/// - No window object is available (not in browser context)
/// - Window dimensions cannot be read or are not numbers
pub fn get_window_size() -> Result<(f64, f64)> {
    let window = dom::window()?;

    let width = window
        .inner_width()
        .map_err(|e| PortfolioError::dom("read window width", &e))?
        .as_f64()
        .ok_or_else(|| PortfolioError::Dom("Window width is not a number".to_string()))?;

    let height = window
        .inner_height()
        .map_err(|e| PortfolioError::dom("read window height", &e))?
        .as_f64()
        .ok_or_else(|| PortfolioError::Dom("Window height is not a number".to_string()))?;

    Ok((width, height))
}

/// Handle for a window resize listener
pub struct ResizeHandler {
    closure: Closure<dyn FnMut()>,
}

impl ResizeHandler {
    /// Remove the resize event listener from the window
    ///
    /// # Errors
    ///
    /// Returns an error if the window is unavailable or removal fails.
    pub fn remove(self) -> Result<()> {
        dom::window()?
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref())
            .map_err(|e| PortfolioError::dom("remove resize listener", &e))
    }

    /// Keep the listener for the lifetime of the page
    pub fn forget(self) {
        self.closure.forget();
    }
}

/// Attach a debounced window resize listener
///
/// `on_resize` runs once `debounce_ms` have passed without another resize
/// event. A zero debounce still defers to the next timer tick.
///
/// # Errors
///
/// Returns an error if the window is unavailable or the listener cannot be
/// attached.
pub fn on_window_resize<F>(debounce_ms: u32, on_resize: F) -> Result<ResizeHandler>
where
    F: Fn() + 'static,
{
    let window = dom::window()?;

    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let on_resize = Rc::new(on_resize);

    let closure = Closure::wrap(Box::new(move || {
        // Dropping a pending Timeout cancels it
        pending.borrow_mut().take();

        // The fired Timeout stays in `pending` until the next event replaces it;
        // dropping it from inside its own callback would free the running closure.
        let on_resize = Rc::clone(&on_resize);
        let timeout = Timeout::new(debounce_ms, move || on_resize());

        *pending.borrow_mut() = Some(timeout);
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|e| PortfolioError::dom("attach resize listener", &e))?;

    Ok(ResizeHandler { closure })
}
