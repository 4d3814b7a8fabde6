//! # Link Shortener
//!
//! Maps long URLs to short, unique codes, redirects visitors from a code to
//! the original URL, and stores a QR image for every link.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the storage contract and the image renderer trait
//! - **Application Layer** ([`application`]) - Code allocation and link orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage and QR rendering
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Short codes
//!
//! Generated codes are 6 characters drawn from the 62-symbol alphanumeric
//! alphabet and upper-cased before storage; lookups are case-insensitive.
//! Uniqueness is enforced by a unique index, and random codes that lose an
//! insert race are regenerated a bounded number of times.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! export BASE_URL="http://localhost:3000/"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AllocationPolicy, CodeAllocator, LinkService};
    pub use crate::domain::ImageRenderer;
    pub use crate::domain::entities::{Link, LinkSummary, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
