//! Health check response.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: StorageCheck,
}

/// Result of probing the link table.
#[derive(Debug, Serialize)]
pub struct StorageCheck {
    /// `ok` or `error`.
    pub status: &'static str,
    /// Number of stored links, when the probe succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<i64>,
    pub message: String,
}

impl StorageCheck {
    pub fn reachable(links: i64) -> Self {
        Self {
            status: "ok",
            links: Some(links),
            message: format!("Connected, {links} links stored"),
        }
    }

    pub fn unreachable(reason: impl std::fmt::Display) -> Self {
        Self {
            status: "error",
            links: None,
            message: format!("Database error: {reason}"),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.links.is_some()
    }
}

impl HealthResponse {
    pub fn from_storage(database: StorageCheck) -> Self {
        let status = if database.is_ok() {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }
    }
}
