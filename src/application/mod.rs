//! Application layer services implementing business logic.
//!
//! Services consume the repository and renderer traits and expose the
//! operations HTTP handlers and the admin tool call.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Short code generation and collision checks
//! - [`services::link_service::LinkService`] - Shorten, resolve, list and image retrieval

pub mod services;
