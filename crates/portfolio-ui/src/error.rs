//! Error types for the page interactivity layer
//!
//! Every DOM interaction that can fail returns [`Result`]. Initializers
//! bubble these up to `boot`, which logs them and moves on to the next
//! feature. A missing optional element is not an error.

use thiserror::Error;

/// Errors that can occur while wiring page behaviour
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    /// Not running inside a browser window
    #[error("window is not available")]
    WindowNotAvailable,

    /// Window has no document
    #[error("document is not available")]
    DocumentNotAvailable,

    /// Document has no body element
    #[error("document body is not available")]
    BodyNotAvailable,

    /// A DOM call threw a JS exception
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// `querySelector` rejected the selector
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Canvas or 2D context failure
    #[error("canvas error: {0}")]
    Canvas(String),

    /// IntersectionObserver construction failed
    #[error("intersection observer error: {0}")]
    Observer(String),

    /// Page configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PortfolioError {
    /// Wrap a thrown JS value as a DOM error
    #[must_use]
    pub fn dom(context: &str, value: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{context}: {value:?}"))
    }
}

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, PortfolioError>;
