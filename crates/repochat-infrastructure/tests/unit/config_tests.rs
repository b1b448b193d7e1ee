//! Configuration Loader Tests

use std::path::PathBuf;

use repochat_domain::error::Error;
use repochat_infrastructure::config::{AppConfig, ConfigLoader};
use repochat_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_PERSIST_DIR};
use tempfile::TempDir;

fn isolated_loader(prefix: &str) -> ConfigLoader {
    ConfigLoader::new().with_env_prefix(prefix)
}

#[test]
fn test_defaults_match_documented_values() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.index.persist_dir, PathBuf::from(DEFAULT_PERSIST_DIR));
    assert_eq!(config.index.similarity_top_k, 2);
    assert_eq!(config.index.chunk_size, 1024);
    assert_eq!(config.index.chunk_overlap, 20);
    assert_eq!(config.github.branch, "main");
    assert_eq!(config.github.concurrent_requests, 5);
    assert_eq!(
        config.github.include_extensions,
        vec![".py", ".ipynb", ".js", ".ts", ".md"]
    );
    assert_eq!(config.github.token_env, "GITHUB_TOKEN");
    assert_eq!(config.embedding.hosted.model, "text-embedding-ada-002");
    assert_eq!(config.embedding.hosted.api_key_env, "OPENAI_API_KEY");
    assert_eq!(config.embedding.local.model, "BAAI/bge-small-en-v1.5");
    assert_eq!(config.llm.model, "llama2");
    assert_eq!(config.llm.request_timeout_secs, 200);
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("repochat.toml");

    let mut original = AppConfig::default();
    original.index.persist_dir = PathBuf::from("/var/lib/repochat");
    original.github.branch = "develop".to_string();
    original.embedding.hosted.base_url = Some("http://localhost:8080/v1".to_string());

    let loader = isolated_loader("REPOCHAT_TEST_SAVE").with_config_path(&config_path);
    loader.save_to_file(&original, &config_path).unwrap();

    let loaded = loader.load().unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loader.config_file(), Some(config_path));
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("partial.toml");
    std::fs::write(
        &config_path,
        "[index]\nsimilarity_top_k = 4\n\n[llm]\nmodel = \"mistral\"\n",
    )
    .unwrap();

    let config = isolated_loader("REPOCHAT_TEST_PARTIAL")
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.index.similarity_top_k, 4);
    assert_eq!(config.llm.model, "mistral");
    assert_eq!(config.index.chunk_size, 1024);
    assert_eq!(config.llm.request_timeout_secs, 200);
}

#[test]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("repochat.toml");
    std::fs::write(&config_path, "[index]\npersist_dir = \"from-file\"\n").unwrap();

    // SAFETY: the variable names are unique to this test
    unsafe {
        std::env::set_var("REPOCHAT_TEST_ENV_INDEX__PERSIST_DIR", "from-env");
        std::env::set_var("REPOCHAT_TEST_ENV_GITHUB__CONCURRENT_REQUESTS", "2");
    }

    let config = isolated_loader("REPOCHAT_TEST_ENV")
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.index.persist_dir, PathBuf::from("from-env"));
    assert_eq!(config.github.concurrent_requests, 2);
}

#[test]
fn test_missing_explicit_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = isolated_loader("REPOCHAT_TEST_MISSING")
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap_err();

    assert!(err.is_configuration(), "got {err:?}");
}

fn load_invalid(name: &str, toml: &str) -> Error {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(name);
    std::fs::write(&config_path, toml).unwrap();
    isolated_loader("REPOCHAT_TEST_INVALID")
        .with_config_path(&config_path)
        .load()
        .unwrap_err()
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        ("concurrency.toml", "[github]\nconcurrent_requests = 0\n", "concurrent"),
        ("extensions.toml", "[github]\ninclude_extensions = []\n", "extensions"),
        ("chunk.toml", "[index]\nchunk_size = 0\n", "Chunk size"),
        (
            "overlap.toml",
            "[index]\nchunk_size = 100\nchunk_overlap = 100\n",
            "overlap",
        ),
        ("topk.toml", "[index]\nsimilarity_top_k = 0\n", "top-k"),
        ("timeout.toml", "[llm]\nrequest_timeout_secs = 0\n", "timeout"),
        ("level.toml", "[logging]\nlevel = \"loud\"\n", "log level"),
    ];

    for (name, toml, expected) in cases {
        let err = load_invalid(name, toml);
        assert!(err.is_configuration(), "{name}: {err:?}");
        assert!(err.to_string().contains(expected), "{name}: {err}");
    }
}

#[test]
fn test_malformed_toml_is_config_error() {
    let err = load_invalid("broken.toml", "[index\npersist_dir = ");
    assert!(matches!(err, Error::Configuration { .. }), "got {err:?}");
}
