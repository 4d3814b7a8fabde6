//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`image_renderer`] - Scannable image rendering trait
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod image_renderer;
pub mod repositories;

pub use image_renderer::ImageRenderer;

#[cfg(test)]
pub use image_renderer::MockImageRenderer;
