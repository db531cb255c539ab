//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use linkfolio_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let path = write_config(
        r#"{
            "server": { "host": "127.0.0.1", "port": 5050, "max_body_bytes": 1048576 },
            "database": { "path": "/tmp/integration_test.db", "pool_size": 10 },
            "image_store": {
                "upload_url": "https://api.cloudinary.com/v1_1/demo/image/upload",
                "api_key": "123",
                "api_secret": "shh",
                "folder": "linkfolio",
                "timeout_seconds": 12
            },
            "logging": { "json": true }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config from JSON file");

    assert_eq!(config.server.bind_address(), "127.0.0.1:5050");
    assert_eq!(config.server.max_body_bytes, 1_048_576);
    assert_eq!(config.database.path, "/tmp/integration_test.db");
    assert_eq!(config.database.pool_size, 10);
    assert_eq!(config.image_store.api_secret, "shh");
    assert_eq!(config.image_store.folder.as_deref(), Some("linkfolio"));
    assert_eq!(config.image_store.timeout_seconds, 12);
    assert!(config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file_with_defaults() {
    let path = write_config(
        r#"
[image_store]
upload_url = "https://api.cloudinary.com/v1_1/demo/image/upload"
api_key = "123"
api_secret = "shh"
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config from TOML file");

    assert_eq!(config.server.port, linkfolio_domain::constants::DEFAULT_PORT);
    assert_eq!(config.server.max_body_bytes, linkfolio_domain::constants::DEFAULT_MAX_BODY_BYTES);
    assert_eq!(config.database.pool_size, linkfolio_domain::constants::DEFAULT_DB_POOL_SIZE);
    assert!(config.image_store.folder.is_none());
    assert!(!config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_image_store_section_is_rejected() {
    let path = write_config(r#"{ "database": { "path": "x.db", "pool_size": 1 } }"#, "json");

    let result = config::load_from_file(Some(path.clone()));
    assert!(matches!(result, Err(linkfolio_domain::LinkfolioError::Config(_))));

    std::fs::remove_file(path).ok();
}
