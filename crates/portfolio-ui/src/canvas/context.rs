//! Canvas 2D rendering context acquisition

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{PortfolioError, Result};

/// Get 2D rendering context from canvas element
///
/// # Errors
///
/// Returns an error if:
/// - Getting context from canvas fails (JS error)
/// - Context creation returns None (browser doesn't support 2D context)
/// - Type casting to `CanvasRenderingContext2d` fails
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| PortfolioError::Canvas(format!("Failed to get canvas context: {e:?}")))?
        .ok_or_else(|| PortfolioError::Canvas("Canvas context creation returned None".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| {
            PortfolioError::Canvas("Failed to cast context to CanvasRenderingContext2d".to_string())
        })
}
