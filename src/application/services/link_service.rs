//! Link creation and retrieval service.

use std::sync::Arc;

use crate::application::services::code_allocator::{AllocationPolicy, CodeAllocator};
use crate::domain::ImageRenderer;
use crate::domain::entities::{Link, LinkSummary, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, normalize_code};
use serde_json::json;
use url::Url;

/// Service for shortening, resolving and listing links.
///
/// Shortening runs the allocator, inserts the link, and then attaches the
/// rendered image. A generated code that loses an insert race is replaced and
/// the insert retried; a custom code that loses the race is reported as a
/// conflict.
pub struct LinkService<L: LinkRepository, G: CodeGenerator> {
    link_repository: Arc<L>,
    allocator: CodeAllocator<L, G>,
    renderer: Arc<dyn ImageRenderer>,
}

impl<L: LinkRepository, G: CodeGenerator> LinkService<L, G> {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<L>,
        generator: G,
        renderer: Arc<dyn ImageRenderer>,
        policy: AllocationPolicy,
    ) -> Self {
        let allocator = CodeAllocator::new(link_repository.clone(), generator, policy);

        Self {
            link_repository,
            allocator,
            renderer,
        }
    }

    /// Creates a short link for `long_url`.
    ///
    /// `long_url` is stored as given; only emptiness is rejected. A blank
    /// `custom_code` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty.
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::Exhausted`] if no free code was found.
    pub async fn shorten(
        &self,
        long_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "long_url must not be empty",
                json!({ "field": "long_url" }),
            ));
        }

        let custom_code = custom_code.filter(|code| !code.trim().is_empty());
        let max_attempts = self.allocator.policy().max_attempts;

        for attempt in 1..=max_attempts {
            let allocation = self.allocator.allocate(custom_code.as_deref()).await?;
            let retry_on_conflict = allocation.is_generated();

            let new_link = NewLink {
                long_url: long_url.clone(),
                short_code: allocation.into_code(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(short_code = %link.short_code, "Short link created");
                    return Ok(self.attach_rendered_image(link).await);
                }
                Err(err) if err.is_conflict() && retry_on_conflict => {
                    tracing::warn!(attempt, "Generated short code was taken concurrently");
                }
                Err(err) => return Err(err),
            }
        }

        Err(AppError::Exhausted {
            attempts: max_attempts,
        })
    }

    /// Retrieves a link by short code, in any letter case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn resolve(&self, short_code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| AppError::link_not_found(&normalize_code(short_code)))
    }

    /// Returns every `(short_code, long_url)` pair.
    pub async fn list_links(&self) -> Result<Vec<LinkSummary>, AppError> {
        self.link_repository.list_all().await
    }

    /// Returns the scannable image payload for a link.
    ///
    /// A link created without a payload (render failure, or a read racing the
    /// attach) gets one rendered and stored on first fetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Internal`] if the image cannot be rendered.
    pub async fn fetch_image(&self, short_code: &str) -> Result<Vec<u8>, AppError> {
        let link = self.resolve(short_code).await?;

        if let Some(payload) = link.image_payload {
            return Ok(payload);
        }

        tracing::debug!(short_code = %link.short_code, "Rendering missing image payload");
        let payload = self.renderer.render(&link.long_url)?;
        self.link_repository
            .attach_image(&link.short_code, payload.clone())
            .await?;

        Ok(payload)
    }

    /// Counts stored links; used as a storage health probe.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Builds the public short URL for a code.
    ///
    /// The code is appended as a single percent-encoded path segment, so the
    /// result always stays under `base_url`.
    pub fn get_short_url(&self, base_url: &Url, short_code: &str) -> String {
        let mut url = base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(short_code);
        }
        url.into()
    }

    /// Renders and attaches the image after the link is committed.
    ///
    /// Failures are logged and leave the link without a payload.
    async fn attach_rendered_image(&self, mut link: Link) -> Link {
        let payload = match self.renderer.render(&link.long_url) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(short_code = %link.short_code, error = %e, "Failed to render image");
                return link;
            }
        };

        match self
            .link_repository
            .attach_image(&link.short_code, payload.clone())
            .await
        {
            Ok(()) => link.image_payload = Some(payload),
            Err(e) => {
                tracing::warn!(short_code = %link.short_code, error = %e, "Failed to attach image");
            }
        }

        link
    }
}
