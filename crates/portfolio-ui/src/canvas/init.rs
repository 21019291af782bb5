//! Canvas element creation and DOM mounting
//!
//! Provides panic-free canvas creation using web-sys.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

use crate::error::{PortfolioError, Result};

/// Configuration for canvas element creation
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// DOM element ID
    pub id: String,
    /// CSS class
    pub class_name: String,
    /// Accessible description; `None` marks the canvas decorative
    pub aria_label: Option<String>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            id: "skills-chart-canvas".to_string(),
            class_name: "skills-chart-canvas".to_string(),
            aria_label: Some("Skills chart".to_string()),
        }
    }
}

/// Creates a canvas element and appends it to `parent`
///
/// # Errors
///
/// Returns an error if:
/// - Canvas element creation fails
/// - Type casting to `HtmlCanvasElement` fails
/// - Setting accessibility attributes fails
/// - Appending to `parent` fails
///
/// # Example
///
/// ```no_run
/// use portfolio_ui::canvas::init::{CanvasConfig, create_canvas};
/// use portfolio_ui::dom;
///
/// let document = dom::document()?;
/// let body = dom::body(&document)?;
/// let canvas = create_canvas(&document, &body, &CanvasConfig::default())?;
/// # Ok::<(), portfolio_ui::error::PortfolioError>(())
/// ```
pub fn create_canvas(
    document: &Document,
    parent: &Element,
    config: &CanvasConfig,
) -> Result<HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| PortfolioError::Canvas(format!("Failed to create canvas: {e:?}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PortfolioError::Canvas("Failed to cast to HtmlCanvasElement".to_string()))?;

    canvas.set_id(&config.id);
    canvas.set_class_name(&config.class_name);

    match &config.aria_label {
        Some(label) => {
            canvas
                .set_attribute("role", "img")
                .map_err(|e| PortfolioError::dom("set role attribute", &e))?;
            canvas
                .set_attribute("aria-label", label)
                .map_err(|e| PortfolioError::dom("set aria-label attribute", &e))?;
        }
        None => canvas
            .set_attribute("aria-hidden", "true")
            .map_err(|e| PortfolioError::dom("set aria-hidden attribute", &e))?,
    }

    parent
        .append_child(&canvas)
        .map_err(|e| PortfolioError::Canvas(format!("Failed to append canvas: {e:?}")))?;

    Ok(canvas)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::dom;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_canvas_appends_to_parent() {
        let document = dom::document().unwrap();
        let body = dom::body(&document).unwrap();
        let config = CanvasConfig {
            id: "test-canvas-append".to_string(),
            ..CanvasConfig::default()
        };

        let canvas = create_canvas(&document, &body, &config).unwrap();

        assert_eq!(canvas.id(), "test-canvas-append");
        assert!(document.get_element_by_id("test-canvas-append").is_some());
        assert_eq!(canvas.get_attribute("role").as_deref(), Some("img"));
        canvas.remove();
    }

    #[wasm_bindgen_test]
    fn test_decorative_canvas_is_aria_hidden() {
        let document = dom::document().unwrap();
        let body = dom::body(&document).unwrap();
        let config = CanvasConfig {
            id: "test-canvas-decorative".to_string(),
            class_name: "particles".to_string(),
            aria_label: None,
        };

        let canvas = create_canvas(&document, &body, &config).unwrap();

        assert_eq!(canvas.get_attribute("aria-hidden").as_deref(), Some("true"));
        assert!(canvas.get_attribute("role").is_none());
        canvas.remove();
    }
}
