//! Tests for the token store service

use chrono::Utc;

use crate::domain::entities::token::{TokenEntity, TokenType};
use crate::errors::{DomainError, TokenError};
use crate::repositories::MockTokenRepository;
use crate::services::token::{TokenStore, TokenStoreConfig};

fn store() -> TokenStore<MockTokenRepository> {
    TokenStore::new(MockTokenRepository::new(), TokenStoreConfig::default()).unwrap()
}

#[test]
fn test_empty_provider_is_rejected() {
    let result = TokenStore::new(MockTokenRepository::new(), TokenStoreConfig::new("  "));
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_save_bearer_then_fetch() {
    let store = store();

    let before = Utc::now().timestamp();
    let saved = store.save_bearer("abc", 3600).await.unwrap();
    assert_eq!(saved.provider, "lightspeed");
    assert!(saved.created_at >= before);

    let pair = store.fetch("anything-at-all").await.unwrap();
    assert_eq!(pair.bearer.token, "abc");
    assert_eq!(pair.bearer.token_type, TokenType::Bearer);
    assert_eq!(pair.bearer.expires_in, 3600);
    assert!(!pair.bearer.is_expired());

    assert!(pair.refresh.is_empty());
    assert_eq!(pair.refresh, TokenEntity::empty(TokenType::Refresh));
}

#[tokio::test]
async fn test_save_refresh_sets_type() {
    let store = store();
    store.save_refresh("r-123", 86_400).await.unwrap();

    let (bearer, refresh) = store.fetch("lightspeed").await.unwrap().into_tuple();
    assert!(bearer.is_empty());
    assert_eq!(refresh.token, "r-123");
    assert_eq!(refresh.token_type, TokenType::Refresh);
}

#[tokio::test]
async fn test_repeated_saves_accumulate_and_fetch_returns_one() {
    let store = store();
    store.save_bearer("first", 3600).await.unwrap();
    store.save_bearer("second", 3600).await.unwrap();

    assert_eq!(store.repository().len().await, 2);

    let pair = store.fetch("lightspeed").await.unwrap();
    // the mock scans in insertion order
    assert_eq!(pair.bearer.token, "second");
}

#[tokio::test]
async fn test_fetch_ignores_requested_provider() {
    let store = store();
    store
        .repository()
        .seed(vec![TokenEntity {
            provider: "someone-else".to_string(),
            token: "foreign".to_string(),
            token_type: TokenType::Bearer,
            expires_in: 3600,
            created_at: 1,
        }])
        .await;
    store.save_bearer("ours", 3600).await.unwrap();

    let pair = store.fetch("someone-else").await.unwrap();
    assert_eq!(pair.bearer.token, "ours");
}

#[tokio::test]
async fn test_configured_provider_is_used() {
    let store = TokenStore::new(MockTokenRepository::new(), TokenStoreConfig::new("acme")).unwrap();
    assert_eq!(store.provider(), "acme");

    let saved = store.save_refresh("r", 60).await.unwrap();
    assert_eq!(saved.provider, "acme");

    let pair = store.fetch("acme").await.unwrap();
    assert_eq!(pair.refresh.token, "r");
}

#[tokio::test]
async fn test_save_failure_is_returned() {
    let store = TokenStore::new(
        MockTokenRepository::new().with_insert_failure(),
        TokenStoreConfig::default(),
    )
    .unwrap();

    let err = store.save_bearer("abc", 3600).await.unwrap_err();
    assert!(matches!(err.as_token_error(), Some(TokenError::Write { .. })));
}

#[tokio::test]
async fn test_scan_failure_is_returned() {
    let store = TokenStore::new(
        MockTokenRepository::new().with_scan_failure(TokenError::Read {
            message: "ResourceNotFoundException".to_string(),
        }),
        TokenStoreConfig::default(),
    )
    .unwrap();

    let err = store.fetch("lightspeed").await.unwrap_err();
    assert!(matches!(err.as_token_error(), Some(TokenError::Read { .. })));
}

#[tokio::test]
async fn test_malformed_record_is_not_silently_accepted() {
    let store = TokenStore::new(
        MockTokenRepository::new().with_scan_failure(TokenError::deserialization(
            "CreatedAt",
            "expected a number",
        )),
        TokenStoreConfig::default(),
    )
    .unwrap();

    let err = store.fetch("lightspeed").await.unwrap_err();
    let token_err = err.as_token_error().unwrap();
    assert!(token_err.is_data_error());
}
