#![allow(dead_code)]

use link_shortener::application::services::{AllocationPolicy, LinkService};
use link_shortener::domain::ImageRenderer;
use link_shortener::error::AppError;
use link_shortener::infrastructure::imaging::QrRenderer;
use link_shortener::infrastructure::persistence::{self, MIGRATOR, SqliteLinkRepository};
use link_shortener::state::AppState;
use link_shortener::utils::code_generator::RandomCodeGenerator;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use url::Url;

pub const BASE_URL: &str = "http://s.example.com/";

/// In-memory database with migrations applied.
///
/// A single connection that never expires, since every connection to
/// `sqlite::memory:` gets its own database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

/// File-backed database behind a pool with several connections, so writes
/// from concurrent tasks really hit SQLite at the same time.
///
/// The returned directory must outlive the pool.
pub async fn concurrent_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("links.db").display());

    let pool = persistence::connect(&url, max_connections, Duration::from_secs(30))
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();

    (dir, pool)
}

pub fn test_repository(pool: &SqlitePool) -> Arc<SqliteLinkRepository> {
    Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())))
}

/// Renderer returning a fixed payload, for tests that create many links.
pub struct StaticRenderer(pub Vec<u8>);

impl ImageRenderer for StaticRenderer {
    fn render(&self, _data: &str) -> Result<Vec<u8>, AppError> {
        Ok(self.0.clone())
    }
}

pub fn create_test_service(
    pool: &SqlitePool,
    renderer: Arc<dyn ImageRenderer>,
) -> LinkService<SqliteLinkRepository, RandomCodeGenerator> {
    LinkService::new(
        test_repository(pool),
        RandomCodeGenerator::seeded(42),
        renderer,
        AllocationPolicy::default(),
    )
}

pub fn create_test_state(pool: &SqlitePool) -> AppState {
    let service = create_test_service(pool, Arc::new(QrRenderer::default()));

    AppState::new(Arc::new(service), Url::parse(BASE_URL).unwrap())
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (long_url, short_code, created_at) VALUES (?1, ?2, ?3)")
        .bind(url)
        .bind(code)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}
