//! Repository trait for short link storage.

use crate::domain::entities::{Link, LinkSummary, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short links.
///
/// The store is the final arbiter of `short_code` uniqueness: [`create`]
/// must perform the uniqueness check and the insert atomically, so callers may
/// probe with [`exists`] first without holding any lock.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// [`create`]: LinkRepository::create
/// [`exists`]: LinkRepository::exists
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Checks whether `short_code` is stored.
    ///
    /// The comparison is exact; callers pass an already-normalized code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already stored at the
    /// moment of insertion.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code, normalizing the code first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Stores the scannable image payload for an existing link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this short code.
    /// Returns [`AppError::Internal`] on database errors.
    async fn attach_image(&self, short_code: &str, payload: Vec<u8>) -> Result<(), AppError>;

    /// Returns every stored `(short_code, long_url)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<LinkSummary>, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
