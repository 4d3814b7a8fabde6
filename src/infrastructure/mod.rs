//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`imaging`] - Scannable image rendering (QR codes)
//! - [`persistence`] - SQLite repository implementations

pub mod imaging;
pub mod persistence;
