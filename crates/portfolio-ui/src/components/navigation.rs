//! Scroll-aware navigation
//!
//! - highlights the `.nav-link` of the section under the scroll position
//! - styles the navbar once the page has scrolled
//! - smooth-scrolls in-page `#anchor` links

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::config::{NavigationConfig, PortfolioConfig};
use crate::dom;
use crate::error::{PortfolioError, Result};

pub const NAV_SELECTOR: &str = "nav";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Measured vertical extent of a page section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Whether `position` lies in `[top, top + height)`
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Id of the section containing `position`
///
/// When sections overlap, the last one in document order wins.
#[must_use]
pub fn active_section(sections: &[SectionBounds], position: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

/// Whether the navbar should show its scrolled styling
#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// `href` of the nav link pointing at section `id`
#[must_use]
pub fn link_href(id: &str) -> String {
    format!("#{id}")
}

/// Measure every `section[id]` in document order
///
/// # Errors
///
/// Returns an error if the selector query fails.
pub fn measure_sections(document: &Document) -> Result<Vec<SectionBounds>> {
    Ok(dom::query_all(document, SECTION_SELECTOR)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect())
}

/// Make the link whose `href` equals `active_href` the only active link
///
/// # Errors
///
/// Returns `Dom` if a class cannot be toggled.
pub fn highlight_link(links: &[Element], active_href: &str, classes: &[String]) -> Result<()> {
    for link in links {
        dom::remove_classes(link, classes)?;
        if link.get_attribute("href").as_deref() == Some(active_href) {
            dom::add_classes(link, classes)?;
        }
    }
    Ok(())
}

struct ScrollSpy {
    window: Window,
    document: Document,
    nav: Option<Element>,
    links: Vec<Element>,
    config: NavigationConfig,
}

impl ScrollSpy {
    fn on_scroll(&self) -> Result<()> {
        let scroll_y = self
            .window
            .scroll_y()
            .map_err(|e| PortfolioError::dom("read scrollY", &e))?;

        // Sections are re-measured on every event; layout may have shifted.
        let sections = measure_sections(&self.document)?;
        if let Some(id) = active_section(&sections, scroll_y + self.config.scroll_offset) {
            highlight_link(&self.links, &link_href(id), &self.config.active_classes)?;
        }

        if let Some(nav) = &self.nav {
            if is_scrolled(scroll_y, self.config.scrolled_threshold) {
                dom::add_classes(nav, &self.config.scrolled_classes)?;
            } else {
                dom::remove_classes(nav, &self.config.scrolled_classes)?;
            }
        }

        Ok(())
    }
}

/// Attach the scroll listener that drives link highlighting and navbar style
///
/// Runs on every scroll event, unthrottled.
///
/// # Errors
///
/// Returns an error if the window is unavailable or a selector fails.
pub fn init_navigation(document: &Document, config: &NavigationConfig) -> Result<()> {
    let window = dom::window()?;
    let spy = ScrollSpy {
        window: window.clone(),
        document: document.clone(),
        nav: dom::query(document, NAV_SELECTOR)?,
        links: dom::query_all(document, NAV_LINK_SELECTOR)?,
        config: config.clone(),
    };

    if spy.nav.is_none() {
        log::debug!("navigation: no <nav>, only link highlighting is active");
    }

    dom::listen(&window, "scroll", move |_| {
        if let Err(e) = spy.on_scroll() {
            log::warn!("navigation: {e}");
        }
    })
}

/// Scroll `href`'s target into view smoothly
///
/// Returns `false` when no element matches.
///
/// # Errors
///
/// Returns `InvalidSelector` for hrefs that are not valid selectors, like a
/// bare `#`.
pub fn scroll_to_anchor(document: &Document, href: &str) -> Result<bool> {
    let Some(target) = dom::query(document, href)? else {
        return Ok(false);
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    Ok(true)
}

/// Intercept every in-page anchor click and scroll smoothly instead
///
/// # Errors
///
/// Returns an error if the anchor query or a listener fails.
pub fn init_smooth_anchors(document: &Document) -> Result<()> {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;
    log::debug!("navigation: {} in-page anchors", anchors.len());

    for anchor in anchors {
        let document = document.clone();
        let href_source = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            if let Err(e) = scroll_to_anchor(&document, &href) {
                log::debug!("anchor {href}: {e}");
            }
        })?;
    }

    Ok(())
}

/// Boot entry point for highlighting and navbar styling
///
/// # Errors
///
/// See [`init_navigation`].
pub fn init(document: &Document, config: &PortfolioConfig) -> Result<()> {
    init_navigation(document, &config.navigation)
}

/// Boot entry point for smooth anchors
///
/// # Errors
///
/// See [`init_smooth_anchors`].
pub fn init_anchors(document: &Document, _config: &PortfolioConfig) -> Result<()> {
    init_smooth_anchors(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn test_contains_is_half_open() {
        let about = section("about", 100.0, 200.0);
        assert!(about.contains(100.0));
        assert!(about.contains(299.9));
        assert!(!about.contains(300.0));
        assert!(!about.contains(99.9));
    }

    #[test]
    fn test_active_section_picks_containing_section() {
        let sections = vec![
            section("home", 0.0, 500.0),
            section("about", 500.0, 400.0),
            section("skills", 900.0, 600.0),
        ];
        assert_eq!(active_section(&sections, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0), Some("about"));
        assert_eq!(active_section(&sections, 1499.0), Some("skills"));
        assert_eq!(active_section(&sections, 1500.0), None);
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let sections = vec![section("outer", 0.0, 1000.0), section("inner", 200.0, 100.0)];
        assert_eq!(active_section(&sections, 250.0), Some("inner"));
        assert_eq!(active_section(&sections, 50.0), Some("outer"));
    }

    #[test]
    fn test_is_scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }

    #[test]
    fn test_link_href() {
        assert_eq!(link_href("experience"), "#experience");
    }
}
