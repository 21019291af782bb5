//! Skill bars that grow to their target width once half visible

use gloo_timers::callback::Timeout;
use web_sys::Document;

use super::observer::{ObserverOptions, create_observer};
use crate::config::{PortfolioConfig, SkillBarConfig};
use crate::dom;
use crate::error::Result;

pub const SKILL_BAR_SELECTOR: &str = ".skill-bar";

/// Attribute holding the bar's final CSS width, e.g. `85%`
pub const WIDTH_ATTRIBUTE: &str = "data-width";

/// Wire the skill bar observer
///
/// Each bar is unobserved on first sight; its `data-width` is applied
/// verbatim to `style.width` after the configured delay. Bars without the
/// attribute are left alone.
///
/// # Errors
///
/// Returns an error if the observer cannot be created or the selector fails.
pub fn init_skill_bars(document: &Document, config: &SkillBarConfig) -> Result<()> {
    let delay_ms = config.delay_ms;
    let options = ObserverOptions {
        threshold: config.threshold,
        root_margin: None,
    };

    let observer = create_observer(&options, move |target, observer| {
        observer.unobserve(target);

        let Some(width) = target.get_attribute(WIDTH_ATTRIBUTE) else {
            return;
        };
        let bar = match dom::as_html(target.clone()) {
            Ok(bar) => bar,
            Err(e) => {
                log::warn!("skill bar: {e}");
                return;
            }
        };

        Timeout::new(delay_ms, move || {
            if let Err(e) = dom::set_style(&bar, "width", &width) {
                log::warn!("skill bar width: {e}");
            }
        })
        .forget();
    })?;

    let bars = dom::query_all(document, SKILL_BAR_SELECTOR)?;
    log::debug!("skill bars: observing {}", bars.len());
    bars.iter().for_each(|bar| observer.observe(bar));

    Ok(())
}

/// Boot entry point
///
/// # Errors
///
/// See [`init_skill_bars`].
pub fn init(document: &Document, config: &PortfolioConfig) -> Result<()> {
    init_skill_bars(document, &config.skill_bars)
}
