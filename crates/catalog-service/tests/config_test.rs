use catalog_service::config::{CatalogConfig, ConfigError};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = CatalogConfig::default();

    assert_eq!(config.paging.default_page_size, 50);
    assert_eq!(config.validation.default_status, 422);
    assert_eq!(config.actors.buffer_size, 32);
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = CatalogConfig::load(&dir.path().join("catalog.toml"))
        .await
        .unwrap();
    assert_eq!(config, CatalogConfig::default());
}

#[tokio::test]
async fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "[paging]\ndefault_page_size = 20\n").unwrap();

    let config = CatalogConfig::load(&path).await.unwrap();
    assert_eq!(config.paging.default_page_size, 20);
    assert_eq!(config.validation.default_status, 422);
    assert_eq!(config.actors.buffer_size, 32);
}

#[tokio::test]
async fn test_invalid_values_are_all_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        "[paging]\ndefault_page_size = 0\n[validation]\ndefault_status = 200\n",
    )
    .unwrap();

    match CatalogConfig::load(&path).await {
        Err(ConfigError::Invalid(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected invalid config, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "[paging\n").unwrap();

    assert!(matches!(
        CatalogConfig::load(&path).await,
        Err(ConfigError::Parse(_))
    ));
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");

    let mut config = CatalogConfig::default();
    config.validation.default_status = 400;
    config.actors.buffer_size = 8;
    config.save(&path).await.unwrap();

    assert_eq!(CatalogConfig::load(&path).await.unwrap(), config);
}
