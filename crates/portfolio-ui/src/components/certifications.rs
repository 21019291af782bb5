//! Staggered fade-up of certification cards

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::animation::stagger_delay;
use crate::config::{CertificationConfig, PortfolioConfig};
use crate::dom;
use crate::error::Result;

pub const CARD_SELECTOR: &str = ".cert-card";

/// Styles applied immediately to every card
pub const HIDDEN_STYLE: [(&str, &str); 2] = [("opacity", "0"), ("transform", "translateY(20px)")];

/// Styles applied to a card when its turn comes
pub const SHOWN_STYLE: [(&str, &str); 3] = [
    ("transition", "all 0.5s ease"),
    ("opacity", "1"),
    ("transform", "translateY(0)"),
];

fn apply(card: &HtmlElement, styles: &[(&str, &str)]) -> Result<()> {
    styles
        .iter()
        .try_for_each(|(property, value)| dom::set_style(card, property, value))
}

/// Hide every card, then show them one after another
///
/// # Errors
///
/// Returns an error if the query fails or a card's style cannot be set.
pub fn init_certifications(document: &Document, config: &CertificationConfig) -> Result<()> {
    let cards = dom::query_all(document, CARD_SELECTOR)?;
    log::debug!("certifications: {} cards", cards.len());

    for (index, card) in cards.into_iter().enumerate() {
        let card = dom::as_html(card)?;
        apply(&card, &HIDDEN_STYLE)?;

        Timeout::new(stagger_delay(index, config.stagger_ms), move || {
            if let Err(e) = apply(&card, &SHOWN_STYLE) {
                log::warn!("certification card: {e}");
            }
        })
        .forget();
    }

    Ok(())
}

/// Boot entry point
///
/// # Errors
///
/// See [`init_certifications`].
pub fn init(document: &Document, config: &PortfolioConfig) -> Result<()> {
    init_certifications(document, &config.certifications)
}
