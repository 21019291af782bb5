//! HiDPI/Retina display scaling for crisp canvas rendering
//!
//! The canvas backing store is sized in physical pixels while CSS keeps it at
//! its logical size; the context is scaled so drawing code works in logical
//! pixels throughout.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::dom;
use crate::error::{PortfolioError, Result};

/// Detects the device pixel ratio from the browser window
///
/// # Errors
///
/// Returns an error if:
/// - No window object is available (not in browser context)
/// - Device pixel ratio is not finite or not positive
pub fn detect_device_pixel_ratio() -> Result<f64> {
    let dpr = dom::window()?.device_pixel_ratio();
    validate_dpr(dpr)?;
    Ok(dpr)
}

fn validate_dpr(dpr: f64) -> Result<()> {
    if !dpr.is_finite() {
        return Err(PortfolioError::Canvas(format!(
            "Invalid device pixel ratio: {dpr}"
        )));
    }
    if dpr <= 0.0 {
        return Err(PortfolioError::Canvas(format!(
            "Device pixel ratio must be positive, got: {dpr}"
        )));
    }
    Ok(())
}

/// Backing store size for a logical size at the given pixel ratio
///
/// # Errors
///
/// Returns an error if the ratio is invalid, a logical dimension is zero,
/// or the physical size does not fit in `u32`.
///
/// # Example
///
/// ```
/// use portfolio_ui::canvas::dpi::physical_size;
///
/// assert_eq!(physical_size(1200, 800, 2.0)?, (2400, 1600));
/// # Ok::<(), portfolio_ui::error::PortfolioError>(())
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn physical_size(logical_width: u32, logical_height: u32, dpr: f64) -> Result<(u32, u32)> {
    validate_dpr(dpr)?;

    if logical_width == 0 || logical_height == 0 {
        return Err(PortfolioError::Canvas(format!(
            "Invalid logical size: {logical_width}x{logical_height}"
        )));
    }

    let physical_width = (f64::from(logical_width) * dpr).round();
    let physical_height = (f64::from(logical_height) * dpr).round();

    if physical_width > f64::from(u32::MAX) || physical_height > f64::from(u32::MAX) {
        return Err(PortfolioError::Canvas(format!(
            "Physical dimensions exceed maximum: {physical_width}x{physical_height} (DPI: {dpr})"
        )));
    }

    Ok((physical_width as u32, physical_height as u32))
}

/// Sizes a canvas for the current display and scales its context
///
/// Setting the backing store size resets the context transform, so this can
/// be called again on every resize without scale accumulating.
///
/// # Errors
///
/// Returns an error if:
/// - Device pixel ratio detection fails
/// - Logical dimensions are zero
/// - CSS style cannot be applied
/// - Context scaling fails
pub fn setup_dpi_aware_canvas(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    logical_width: u32,
    logical_height: u32,
) -> Result<f64> {
    let dpr = detect_device_pixel_ratio()?;
    let (physical_width, physical_height) = physical_size(logical_width, logical_height, dpr)?;

    canvas.set_width(physical_width);
    canvas.set_height(physical_height);

    dom::set_style(canvas, "width", &format!("{logical_width}px"))?;
    dom::set_style(canvas, "height", &format!("{logical_height}px"))?;

    ctx.scale(dpr, dpr)
        .map_err(|e| PortfolioError::Canvas(format!("Failed to scale canvas context: {e:?}")))?;

    Ok(dpr)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_physical_size_scales_by_ratio() {
        assert_eq!(physical_size(1200, 800, 1.0).unwrap(), (1200, 800));
        assert_eq!(physical_size(1200, 800, 2.0).unwrap(), (2400, 1600));
        assert_eq!(physical_size(1920, 1080, 1.5).unwrap(), (2880, 1620));
    }

    #[test]
    fn test_physical_size_rounds() {
        assert_eq!(physical_size(301, 201, 1.25).unwrap(), (376, 251));
    }

    #[test]
    fn test_physical_size_rejects_invalid_ratio() {
        for dpr in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(physical_size(100, 100, dpr).is_err(), "dpr {dpr} accepted");
        }
    }

    #[test]
    fn test_physical_size_rejects_zero_dimension() {
        assert!(physical_size(0, 100, 1.0).is_err());
        assert!(physical_size(100, 0, 1.0).is_err());
    }

    #[test]
    fn test_physical_size_overflow_protection() {
        let result = physical_size(u32::MAX, u32::MAX, 2.0);
        assert!(matches!(result, Err(PortfolioError::Canvas(msg)) if msg.contains("exceed")));
    }
}
