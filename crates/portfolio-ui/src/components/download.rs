//! Download-resume button

use web_sys::Document;

use crate::config::{DownloadConfig, PortfolioConfig};
use crate::dom;
use crate::error::{PortfolioError, Result};

pub const BUTTON_ID: &str = "download-resume";

/// Open the resume in a new browsing context
///
/// Returns `false` when the browser blocked the popup.
///
/// # Errors
///
/// Returns an error if the window is unavailable or `open` throws.
pub fn open_resume(config: &DownloadConfig) -> Result<bool> {
    let opened = dom::window()?
        .open_with_url_and_target(&config.resume_path, &config.target)
        .map_err(|e| PortfolioError::dom("open resume", &e))?;
    Ok(opened.is_some())
}

/// Open the resume whenever `#download-resume` is clicked
///
/// Does nothing when the button is absent.
///
/// # Errors
///
/// Returns an error if the click listener cannot be attached.
pub fn init_download_button(document: &Document, config: &DownloadConfig) -> Result<()> {
    let Some(button) = document.get_element_by_id(BUTTON_ID) else {
        log::debug!("download: #{BUTTON_ID} not found, skipping");
        return Ok(());
    };

    let config = config.clone();
    dom::listen(&button, "click", move |_| match open_resume(&config) {
        Ok(true) => log::info!("opened {}", config.resume_path),
        Ok(false) => log::warn!("popup blocked opening {}", config.resume_path),
        Err(e) => log::warn!("download: {e}"),
    })
}

/// Boot entry point
///
/// # Errors
///
/// See [`init_download_button`].
pub fn init(document: &Document, config: &PortfolioConfig) -> Result<()> {
    init_download_button(document, &config.download)
}
