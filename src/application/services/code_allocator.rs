//! Short code allocation.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    CodeGenerator, DEFAULT_CODE_LENGTH, normalize_code, validate_custom_code,
};
use serde_json::json;

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Tunables for [`CodeAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPolicy {
    /// Length of generated codes.
    pub code_length: usize,
    /// Upper bound on candidates drawn per allocation, and on create retries.
    pub max_attempts: usize,
    /// When set, custom codes must have the generated alphabet and length.
    pub strict_custom_codes: bool,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            strict_custom_codes: false,
        }
    }
}

/// Outcome of an allocation.
///
/// The origin decides what happens when the final insert loses a race:
/// generated codes are retried, custom codes surface the conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    Custom(String),
    Generated(String),
}

impl Allocation {
    pub fn code(&self) -> &str {
        match self {
            Allocation::Custom(code) | Allocation::Generated(code) => code,
        }
    }

    pub fn into_code(self) -> String {
        match self {
            Allocation::Custom(code) | Allocation::Generated(code) => code,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Allocation::Generated(_))
    }
}

/// Picks the short code for a new link.
///
/// Existence checks are optimistic: no lock is held between the probe here and
/// the later insert, so the repository's unique constraint stays the final
/// arbiter.
pub struct CodeAllocator<L: LinkRepository, G: CodeGenerator> {
    link_repository: Arc<L>,
    generator: G,
    policy: AllocationPolicy,
}

impl<L: LinkRepository, G: CodeGenerator> CodeAllocator<L, G> {
    pub fn new(link_repository: Arc<L>, generator: G, policy: AllocationPolicy) -> Self {
        Self {
            link_repository,
            generator,
            policy,
        }
    }

    pub fn policy(&self) -> &AllocationPolicy {
        &self.policy
    }

    /// Returns a normalized code that was free at the time of the check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the custom code is taken.
    /// Returns [`AppError::Validation`] if strict mode rejects the custom code.
    /// Returns [`AppError::Exhausted`] if every generated candidate collided.
    pub async fn allocate(&self, custom_code: Option<&str>) -> Result<Allocation, AppError> {
        match custom_code {
            Some(custom) => self.allocate_custom(custom).await.map(Allocation::Custom),
            None => self.allocate_generated().await.map(Allocation::Generated),
        }
    }

    async fn allocate_custom(&self, custom: &str) -> Result<String, AppError> {
        if self.policy.strict_custom_codes {
            validate_custom_code(custom, self.policy.code_length)?;
        }

        let code = normalize_code(custom);

        if self.link_repository.exists(&code).await? {
            return Err(AppError::conflict(
                "Custom code already exists",
                json!({ "short_code": code }),
            ));
        }

        Ok(code)
    }

    async fn allocate_generated(&self) -> Result<String, AppError> {
        for attempt in 1..=self.policy.max_attempts {
            let code = normalize_code(&self.generator.generate(self.policy.code_length));

            if !self.link_repository.exists(&code).await? {
                return Ok(code);
            }

            tracing::warn!(attempt, code, "Generated short code collided");
        }

        Err(AppError::Exhausted {
            attempts: self.policy.max_attempts,
        })
    }
}
