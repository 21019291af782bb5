//! Canvas creation, context acquisition, HiDPI scaling and resize handling
//!
//! Shared by the skills chart and the particle background.

pub mod context;
pub mod dpi;
pub mod init;
pub mod resize;

pub use context::get_2d_context;
pub use dpi::{detect_device_pixel_ratio, physical_size, setup_dpi_aware_canvas};
pub use init::{CanvasConfig, create_canvas};
pub use resize::{ResizeHandler, calculate_canvas_size, get_window_size, on_window_resize};
