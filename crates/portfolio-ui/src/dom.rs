//! Thin, panic-free wrappers over the web-sys DOM calls used across the crate
//!
//! Every JS exception is mapped into [`PortfolioError`] so callers can use `?`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{PortfolioError, Result};

/// Get the browser window
///
/// # Errors
///
/// Returns `WindowNotAvailable` outside a browser context.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PortfolioError::WindowNotAvailable)
}

/// Get the current document
///
/// # Errors
///
/// Returns an error if window or document are unavailable.
pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(PortfolioError::DocumentNotAvailable)
}

/// Get the document body
///
/// # Errors
///
/// Returns `BodyNotAvailable` if the document has no `<body>`.
pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(PortfolioError::BodyNotAvailable)
}

/// Collect every element matching `selector`, in document order
///
/// # Errors
///
/// Returns `InvalidSelector` if the selector does not parse.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| invalid_selector(selector, &e))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First element matching `selector`, if any
///
/// # Errors
///
/// Returns `InvalidSelector` if the selector does not parse.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| invalid_selector(selector, &e))
}

fn invalid_selector(selector: &str, e: &JsValue) -> PortfolioError {
    PortfolioError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{e:?}"),
    }
}

/// Cast an element to `HtmlElement` for style access
///
/// # Errors
///
/// Returns `Dom` if the element is not an HTML element (e.g. SVG).
pub fn as_html(element: Element) -> Result<HtmlElement> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| PortfolioError::Dom("element is not an HtmlElement".to_string()))
}

/// Set one inline style property
///
/// # Errors
///
/// Returns `Dom` if the style declaration rejects the write.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| PortfolioError::dom(&format!("set style {property}"), &e))
}

/// Add each class in `classes`
///
/// # Errors
///
/// Returns `Dom` if a class token is rejected (e.g. contains whitespace).
pub fn add_classes<S: AsRef<str>>(element: &Element, classes: &[S]) -> Result<()> {
    let list = element.class_list();
    classes.iter().try_for_each(|class| {
        list.add_1(class.as_ref())
            .map_err(|e| PortfolioError::dom("add class", &e))
    })
}

/// Remove each class in `classes`
///
/// # Errors
///
/// Returns `Dom` if a class token is rejected.
pub fn remove_classes<S: AsRef<str>>(element: &Element, classes: &[S]) -> Result<()> {
    let list = element.class_list();
    classes.iter().try_for_each(|class| {
        list.remove_1(class.as_ref())
            .map_err(|e| PortfolioError::dom("remove class", &e))
    })
}

/// Attach a page-lifetime event listener
///
/// The closure is leaked: listeners registered here live as long as the page.
///
/// # Errors
///
/// Returns `Dom` if the listener cannot be attached.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| PortfolioError::dom(&format!("add {event} listener"), &e))?;

    closure.forget();
    Ok(())
}

/// Run `f` once the document has parsed
///
/// Runs immediately when the document is already interactive or complete.
///
/// # Errors
///
/// Returns an error if the document is unavailable or the listener fails.
pub fn on_ready<F>(f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let document = document()?;

    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let mut f = Some(f);
    listen(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}
