//! Shared application state injected into every handler.

use std::sync::Arc;
use url::Url;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::utils::code_generator::RandomCodeGenerator;

/// Link service wired to the production repository and generator.
pub type AppLinkService = LinkService<SqliteLinkRepository, RandomCodeGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Prefix for public short links, ending in `/`.
    pub base_url: Url,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, base_url: Url) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
