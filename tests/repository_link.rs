mod common;

use link_shortener::domain::entities::NewLink;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use std::collections::HashSet;

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        long_url: url.to_string(),
        short_code: code.to_string(),
    }
}

#[tokio::test]
async fn test_create_link() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool);

    let link = repo
        .create(new_link("ABC123", "https://example.com"))
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.short_code, "ABC123");
    assert_eq!(link.long_url, "https://example.com");
    assert!(link.image_payload.is_none());
}

#[tokio::test]
async fn test_create_normalizes_code() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool);

    let link = repo
        .create(new_link("abc123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.short_code, "ABC123");
}

#[tokio::test]
async fn test_create_duplicate_code_conflicts() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool);

    repo.create(new_link("ABC123", "https://a.example"))
        .await
        .unwrap();

    let err = repo
        .create(new_link("abc123", "https://b.example"))
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(err.to_error_info().details["short_code"], "ABC123");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_create_same_code_single_winner() {
    let (_dir, pool) = common::concurrent_pool(16).await;
    let repo = common::test_repository(&pool);

    let mut handles = Vec::new();
    for i in 0..64 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            // Mixed casing: every writer targets the same stored code.
            let code = if i % 2 == 0 { "RACE01" } else { "race01" };
            repo.create(new_link(code, &format!("https://example.com/{i}")))
                .await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(link) => {
                assert_eq!(link.short_code, "RACE01");
                successes += 1;
            }
            Err(AppError::Conflict { .. }) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 63);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_exists_is_exact() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "EXIST1", "https://example.com").await;
    let repo = common::test_repository(&pool);

    assert!(repo.exists("EXIST1").await.unwrap());
    assert!(!repo.exists("exist1").await.unwrap());
    assert!(!repo.exists("OTHER1").await.unwrap());
}

#[tokio::test]
async fn test_find_by_code_is_case_insensitive() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "FIND01", "https://example.com/find").await;
    let repo = common::test_repository(&pool);

    let lower = repo.find_by_code("find01").await.unwrap().unwrap();
    let mixed = repo.find_by_code("FiNd01").await.unwrap().unwrap();

    assert_eq!(lower.long_url, "https://example.com/find");
    assert_eq!(lower, mixed);
}

#[tokio::test]
async fn test_find_by_code_not_found() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool);

    let result = repo.find_by_code("ZZZZZZ").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_attach_image_round_trip() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool);
    repo.create(new_link("IMG001", "https://example.com"))
        .await
        .unwrap();

    let payload: Vec<u8> = (0..=255).collect();
    repo.attach_image("img001", payload.clone()).await.unwrap();

    let link = repo.find_by_code("IMG001").await.unwrap().unwrap();
    assert_eq!(link.image_payload, Some(payload));
}

#[tokio::test]
async fn test_attach_image_missing_link() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool);

    let err = repo.attach_image("NOPE00", vec![1, 2, 3]).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_list_all_returns_each_link_once() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool);

    for (code, url) in [
        ("LIST01", "https://one.example"),
        ("LIST02", "https://two.example"),
        ("LIST03", "https://three.example"),
    ] {
        repo.create(new_link(code, url)).await.unwrap();
    }
    let _ = repo.create(new_link("LIST01", "https://dupe.example")).await;

    let links = repo.list_all().await.unwrap();
    let codes: HashSet<&str> = links.iter().map(|l| l.short_code.as_str()).collect();

    assert_eq!(links.len(), 3);
    assert_eq!(codes.len(), 3);
    assert!(
        links
            .iter()
            .any(|l| l.short_code == "LIST02" && l.long_url == "https://two.example")
    );
}

#[tokio::test]
async fn test_count() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool);

    assert_eq!(repo.count().await.unwrap(), 0);

    repo.create(new_link("CNT001", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
}
