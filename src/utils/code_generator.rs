//! Short code generation, normalization and validation.
//!
//! Codes are drawn from the 62-symbol alphanumeric alphabet and then
//! upper-cased, so every stored code is made of `A-Z` and `0-9`.

use std::sync::{LazyLock, Mutex, PoisonError};

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// Length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Codes that would be shadowed by a fixed route, in normalized form.
const RESERVED_CODES: &[&str] = &["HEALTH", "LIST", "RESOLVE", "SHORTEN"];

static CODE_ALPHABET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("alphabet regex is valid"));

/// Source of candidate short codes.
///
/// Implementations are pure generators and never consult storage; collision
/// handling belongs to [`crate::application::services::CodeAllocator`].
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Draws a candidate code of `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Uniform random generator over the alphanumeric alphabet.
pub struct RandomCodeGenerator<R = StdRng> {
    rng: Mutex<R>,
}

impl RandomCodeGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator, for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> RandomCodeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: Rng + Send> CodeGenerator for RandomCodeGenerator<R> {
    fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..length)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect()
    }
}

/// Normalizes a short code to its stored (upper-case) form.
pub fn normalize_code(code: &str) -> String {
    code.to_uppercase()
}

/// Validates a custom code against the generated-code rules.
///
/// Only applied when strict custom codes are enabled.
///
/// # Rules
///
/// - Exactly `length` characters
/// - Characters from `A-Z`, `a-z`, `0-9`
/// - Not a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str, length: usize) -> Result<(), AppError> {
    if code.chars().count() != length {
        return Err(AppError::bad_request(
            format!("Custom code must be exactly {length} characters"),
            json!({ "provided_length": code.chars().count() }),
        ));
    }

    if !CODE_ALPHABET_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters and digits",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&normalize_code(code).as_str()) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
