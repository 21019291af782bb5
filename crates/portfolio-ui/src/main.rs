//! WASM entry point
//!
//! Trunk compiles this binary; it installs the panic hook and starts the page
//! features once the document is ready.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    portfolio_ui::logging::init(portfolio_ui::config::LogLevel::default());

    if let Err(e) = portfolio_ui::boot() {
        web_sys::console::error_1(&format!("portfolio ui: {e}").into());
    }
}
