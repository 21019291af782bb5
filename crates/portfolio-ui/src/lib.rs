//! Client-side interactivity for a static portfolio page
//!
//! Compiled to WASM and loaded by the page, this crate wires DOM observers
//! and listeners onto an existing document: typewriter text, scroll reveals,
//! skill bars, a skills chart, navigation highlighting, certification cards,
//! the resume button and smooth anchors.
//!
//! ## Architecture
//! - Flat, independent initializers run once the document is ready
//! - Pure logic (typewriter steps, chart geometry, tweens, section matching)
//!   kept apart from thin web-sys shells
//! - A missing element disables only its own feature
//!
//! ## Module Structure
//! - `components`: the page features
//! - `animation`: RAF loop and fade/slide animators
//! - `canvas`: canvas creation, HiDPI scaling and resize handling
//! - `config`: tunables, optionally overridden from the page
//! - `dom`: panic-free DOM helpers
//! - `error`: error types
//! - `exports`: functions callable from page JavaScript

#![forbid(unsafe_code)]

pub mod animation;
pub mod canvas;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod exports;
pub mod logging;

#[cfg(test)]
mod tests;

use web_sys::Document;

use crate::components::{
    certifications, chart, download, navigation, particles, reveal, skill_bars, typewriter,
};
use crate::config::{LogLevel, PortfolioConfig};
use crate::error::Result;

/// Signature shared by every feature initializer
pub type Initializer = fn(&Document, &PortfolioConfig) -> Result<()>;

/// Features started by [`boot`], in order
pub const FEATURES: [(&str, Initializer); 9] = [
    ("typewriter", typewriter::init),
    ("scroll reveal", reveal::init),
    ("skill bars", skill_bars::init),
    ("skills chart", chart::init),
    ("navigation", navigation::init),
    ("certifications", certifications::init),
    ("download button", download::init),
    ("smooth anchors", navigation::init_anchors),
    ("particles", particles::init),
];

/// Run every feature initializer against `document`
///
/// Failures are logged per feature and never stop the remaining ones.
/// Returns the number of features that failed.
pub fn run_features(document: &Document, config: &PortfolioConfig) -> usize {
    FEATURES
        .iter()
        .filter(|(name, init)| match init(document, config) {
            Ok(()) => false,
            Err(e) => {
                log::warn!("{name} disabled: {e}");
                true
            }
        })
        .count()
}

/// Load configuration, start logging and run all features
///
/// # Errors
///
/// Returns an error if there is no document to work on.
pub fn start() -> Result<()> {
    logging::init(LogLevel::default());

    let document = dom::document()?;
    let config = PortfolioConfig::load(&document);
    logging::set_level(config.log_level);

    let failed = run_features(&document, &config);
    log::info!(
        "portfolio ui ready ({} of {} features active)",
        FEATURES.len().saturating_sub(failed),
        FEATURES.len()
    );
    Ok(())
}

/// Start everything once the document has parsed
///
/// # Errors
///
/// Returns an error if the document is unavailable or the ready listener
/// cannot be attached.
pub fn boot() -> Result<()> {
    dom::on_ready(|| {
        if let Err(e) = start() {
            log::error!("portfolio ui failed to start: {e}");
        }
    })
}
