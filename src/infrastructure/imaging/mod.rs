//! Scannable image renderers.
//!
//! - [`QrRenderer`] - QR code rendered as raw grayscale pixels

pub mod qr_renderer;

pub use qr_renderer::QrRenderer;
