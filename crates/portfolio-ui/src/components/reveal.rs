//! Scroll-triggered reveal of page sections and timeline items
//!
//! Elements gain the revealed class the first time they intersect the
//! viewport and are then unobserved, so the class is added exactly once and
//! never removed.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use super::observer::{ObserverOptions, create_observer};
use crate::animation::stagger_delay;
use crate::config::{PortfolioConfig, RevealConfig};
use crate::dom;
use crate::error::Result;

/// Sections revealed as soon as they scroll into view
pub const SECTION_SELECTOR: &str = ".section-reveal";

/// Timeline entries, observed one after another
pub const TIMELINE_SELECTOR: &str = ".timeline-item";

/// Mark `element` revealed
///
/// Returns `false` if it already was.
///
/// # Errors
///
/// Returns `Dom` if the class token is rejected.
pub fn reveal(element: &Element, class: &str) -> Result<bool> {
    if element.class_list().contains(class) {
        return Ok(false);
    }
    dom::add_classes(element, &[class])?;
    Ok(true)
}

/// Wire scroll reveal for sections and staggered timeline items
///
/// # Errors
///
/// Returns an error if the observer cannot be created or a selector fails.
pub fn init_scroll_reveal(document: &Document, config: &RevealConfig) -> Result<()> {
    let class = config.revealed_class.clone();
    let options = ObserverOptions {
        threshold: config.threshold,
        root_margin: Some(config.root_margin.clone()),
    };

    let observer = create_observer(&options, move |target, observer| {
        if let Err(e) = reveal(target, &class) {
            log::warn!("reveal failed: {e}");
        }
        observer.unobserve(target);
    })?;

    let sections = dom::query_all(document, SECTION_SELECTOR)?;
    sections.iter().for_each(|section| observer.observe(section));

    let items = dom::query_all(document, TIMELINE_SELECTOR)?;
    log::debug!(
        "scroll reveal: {} sections, {} timeline items",
        sections.len(),
        items.len()
    );

    for (index, item) in items.into_iter().enumerate() {
        let observer = observer.clone();
        Timeout::new(stagger_delay(index, config.timeline_stagger_ms), move || {
            observer.observe(&item);
        })
        .forget();
    }

    Ok(())
}

/// Boot entry point
///
/// # Errors
///
/// See [`init_scroll_reveal`].
pub fn init(document: &Document, config: &PortfolioConfig) -> Result<()> {
    init_scroll_reveal(document, &config.reveal)
}
