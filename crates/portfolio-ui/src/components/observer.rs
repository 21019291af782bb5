//! IntersectionObserver wiring shared by scroll reveal and skill bars

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{PortfolioError, Result};

/// Visibility trigger options
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `0px 0px -50px 0px`
    pub root_margin: Option<String>,
}

/// Create an observer that calls `on_visible` for each entering target
///
/// Only intersecting entries are forwarded. The callback receives the
/// observer so it can `unobserve` targets it is done with. The JS callback
/// is kept alive for the page lifetime.
///
/// # Errors
///
/// Returns `Observer` if the browser rejects the options (e.g. a malformed
/// root margin) or lacks IntersectionObserver.
pub fn create_observer<F>(options: &ObserverOptions, on_visible: F) -> Result<IntersectionObserver>
where
    F: Fn(&Element, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter(IntersectionObserverEntry::is_intersecting)
            .for_each(|entry| on_visible(&entry.target(), &observer));
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| PortfolioError::Observer(format!("{e:?}")))?;

    callback.forget();
    Ok(observer)
}
