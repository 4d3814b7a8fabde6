//! Core domain entities.
//!
//! - [`Link`] - A stored short link
//! - [`NewLink`] - Input for creating a link
//! - [`LinkSummary`] - The `(short_code, long_url)` pair used for listing

pub mod link;

pub use link::{Link, LinkSummary, NewLink};
