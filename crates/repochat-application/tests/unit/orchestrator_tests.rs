//! Tests for the persistence check and the build/reload branches

use std::sync::Arc;

use repochat_application::use_cases::{IndexBranch, IndexSettings, IndexingOrchestrator};
use repochat_domain::constants::{
    INDEX_MANIFEST_FILENAME, MSG_DOCUMENTS_INDEXED, MSG_EMBEDDING_MODEL_LOADED,
    MSG_HOSTED_BACKEND, MSG_INDEX_LOADED, MSG_LOCAL_BACKEND,
};
use repochat_domain::entities::{Document, RepositoryCoordinates};
use repochat_domain::error::Error;
use repochat_domain::value_objects::BackendChoice;
use tempfile::TempDir;

use crate::support::{CountingFetcher, FakeFactory, ScriptedUi, sample_documents};

fn orchestrator(
    fetcher: &Arc<CountingFetcher>,
    factory: &Arc<FakeFactory>,
    dir: &TempDir,
) -> IndexingOrchestrator {
    IndexingOrchestrator::new(
        fetcher.clone(),
        factory.clone(),
        dir.path().join("basic/storage"),
        IndexSettings::default(),
    )
}

// ============================================================================
// Build branch
// ============================================================================

#[tokio::test]
async fn test_absent_store_hosted_choice_builds_once() {
    let dir = TempDir::new().unwrap();
    let fetcher = CountingFetcher::new(sample_documents());
    let factory = FakeFactory::new();
    let mut orchestrator = orchestrator(&fetcher, &factory, &dir);
    let mut ui = ScriptedUi::new("octocat", "Hello-World");

    let outcome = orchestrator
        .open_index(BackendChoice::from_input("1"), &mut ui)
        .await
        .unwrap();

    assert_eq!(outcome.branch, IndexBranch::Built);
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(
        fetcher.last_repository.lock().unwrap().clone(),
        Some(RepositoryCoordinates::new("octocat", "Hello-World"))
    );
    assert_eq!(ui.repository_requests, 1);
    assert_eq!(ui.messages, vec![MSG_HOSTED_BACKEND, MSG_DOCUMENTS_INDEXED]);

    // Hosted provider used, local one never created nor registered
    assert_eq!(factory.local_requests(), 0);
    assert!(factory.hosted_requests() >= 1);
    assert!(orchestrator.settings().default_embedding.is_none());
    assert_eq!(outcome.index.embedding_provider().provider_name(), "hosted-fake");

    let manifest = outcome.index.manifest();
    assert_eq!(manifest.backend, BackendChoice::Hosted);
    assert_eq!(manifest.owner, "octocat");
    assert_eq!(manifest.repo, "Hello-World");
    assert_eq!(manifest.document_count, 2);
    assert!(dir.path().join("basic/storage").join(INDEX_MANIFEST_FILENAME).is_file());
}

#[tokio::test]
async fn test_any_other_choice_registers_local_default() {
    for input in ["0", "", "x"] {
        let dir = TempDir::new().unwrap();
        let fetcher = CountingFetcher::new(sample_documents());
        let factory = FakeFactory::new();
        let mut orchestrator = orchestrator(&fetcher, &factory, &dir);
        let mut ui = ScriptedUi::new("octocat", "Hello-World");

        let outcome = orchestrator
            .open_index(BackendChoice::from_input(input), &mut ui)
            .await
            .unwrap();

        assert_eq!(outcome.branch, IndexBranch::Built, "input {input:?}");
        assert_eq!(factory.local_requests(), 1, "input {input:?}");
        assert_eq!(factory.hosted_requests(), 0, "input {input:?}");
        let default = orchestrator.settings().default_embedding.as_ref().unwrap();
        assert_eq!(default.provider_name(), "local-fake");
        assert_eq!(outcome.index.manifest().backend, BackendChoice::Local);
        assert_eq!(
            ui.messages,
            vec![MSG_LOCAL_BACKEND, MSG_EMBEDDING_MODEL_LOADED, MSG_DOCUMENTS_INDEXED]
        );
        assert!(factory.local.batch_calls() >= 1);
        assert_eq!(factory.hosted.batch_calls(), 0);
    }
}

#[tokio::test]
async fn test_fetch_failure_is_build_failed_and_leaves_no_store() {
    let dir = TempDir::new().unwrap();
    let fetcher = CountingFetcher::failing("GitHub unreachable");
    let factory = FakeFactory::new();
    let mut orchestrator = orchestrator(&fetcher, &factory, &dir);
    let mut ui = ScriptedUi::new("octocat", "Hello-World");

    let err = orchestrator
        .open_index(BackendChoice::Hosted, &mut ui)
        .await
        .unwrap_err();

    match err {
        Error::BuildFailed { reason } => assert!(reason.contains("GitHub unreachable")),
        other => panic!("expected BuildFailed, got {other:?}"),
    }
    assert!(!dir.path().join("basic/storage").exists());
    assert!(!ui.messages.contains(&MSG_DOCUMENTS_INDEXED.to_string()));
}

#[tokio::test]
async fn test_hosted_embedding_failure_is_build_failed() {
    let dir = TempDir::new().unwrap();
    let fetcher = CountingFetcher::new(sample_documents());
    let factory = FakeFactory::without_hosted_credentials();
    let mut orchestrator = orchestrator(&fetcher, &factory, &dir);
    let mut ui = ScriptedUi::new("octocat", "Hello-World");

    let err = orchestrator
        .open_index(BackendChoice::Hosted, &mut ui)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::BuildFailed { .. }), "got {err:?}");
    assert!(err.to_string().contains("OPENAI_API_KEY"));
    assert!(!dir.path().join("basic/storage").exists());
}

#[tokio::test]
async fn test_configured_branch_is_fetched() {
    let dir = TempDir::new().unwrap();
    let fetcher = CountingFetcher::new(sample_documents());
    let factory = FakeFactory::new();
    let mut orchestrator = orchestrator(&fetcher, &factory, &dir).with_branch("develop");
    let mut ui = ScriptedUi::new("octocat", "Hello-World");

    orchestrator
        .open_index(BackendChoice::Hosted, &mut ui)
        .await
        .unwrap();

    let fetched = fetcher.last_repository.lock().unwrap().clone().unwrap();
    assert_eq!(fetched.branch, "develop");
}

#[tokio::test]
async fn test_identical_files_are_both_retrievable() {
    let dir = TempDir::new().unwrap();
    let text = "Shared readme. Every package ships the same one.";
    let fetcher = CountingFetcher::new(vec![
        Document::new("same-sha", "pkg_a/README.md", text),
        Document::new("same-sha", "pkg_b/README.md", text),
    ]);
    let factory = FakeFactory::new();
    let mut orchestrator = orchestrator(&fetcher, &factory, &dir);
    let mut ui = ScriptedUi::new("octocat", "Hello-World");

    let outcome = orchestrator
        .open_index(BackendChoice::Hosted, &mut ui)
        .await
        .unwrap();

    assert_eq!(outcome.index.manifest().chunk_count, 2);
    let hits = outcome.index.retrieve("Shared readme", 10).await.unwrap();
    let mut paths: Vec<_> = hits.iter().map(|h| h.file_path.as_str()).collect();
    paths.sort_unstable();
    assert_eq!(paths, vec!["pkg_a/README.md", "pkg_b/README.md"]);
}

// ============================================================================
// Reload branch
// ============================================================================

#[tokio::test]
async fn test_present_store_reloads_without_fetching() {
    let dir = TempDir::new().unwrap();
    {
        let fetcher = CountingFetcher::new(sample_documents());
        let factory = FakeFactory::new();
        let mut first = orchestrator(&fetcher, &factory, &dir);
        first
            .open_index(BackendChoice::Hosted, &mut ScriptedUi::new("octocat", "Hello-World"))
            .await
            .unwrap();
    }

    let fetcher = CountingFetcher::new(sample_documents());
    let factory = FakeFactory::new();
    let mut second = orchestrator(&fetcher, &factory, &dir);
    let mut ui = ScriptedUi::new("unused", "unused");

    let outcome = second
        .open_index(BackendChoice::Hosted, &mut ui)
        .await
        .unwrap();

    assert_eq!(outcome.branch, IndexBranch::Reloaded);
    assert_eq!(fetcher.calls(), 0);
    assert_eq!(ui.repository_requests, 0);
    assert_eq!(ui.messages, vec![MSG_INDEX_LOADED]);
    assert_eq!(outcome.index.manifest().chunk_count, 2);

    let hits = outcome.index.retrieve("Hello World", 2).await.unwrap();
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn test_reload_follows_indexed_backend() {
    let dir = TempDir::new().unwrap();
    {
        let fetcher = CountingFetcher::new(sample_documents());
        let factory = FakeFactory::new();
        orchestrator(&fetcher, &factory, &dir)
            .open_index(BackendChoice::Local, &mut ScriptedUi::new("octocat", "Hello-World"))
            .await
            .unwrap();
    }

    let fetcher = CountingFetcher::new(Vec::new());
    let factory = FakeFactory::new();
    let outcome = orchestrator(&fetcher, &factory, &dir)
        .open_index(BackendChoice::Hosted, &mut ScriptedUi::new("x", "y"))
        .await
        .unwrap();

    assert_eq!(outcome.index.embedding_provider().provider_name(), "local-fake");
    assert_eq!(factory.hosted_requests(), 0);
    assert_eq!(factory.local_requests(), 1);
}

#[tokio::test]
async fn test_unreadable_store_is_fatal_not_rebuilt() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("basic/storage")).unwrap();

    let fetcher = CountingFetcher::new(sample_documents());
    let factory = FakeFactory::new();
    let err = orchestrator(&fetcher, &factory, &dir)
        .open_index(BackendChoice::Hosted, &mut ScriptedUi::new("octocat", "Hello-World"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::IndexCorrupted { .. }), "got {err:?}");
    assert_eq!(fetcher.calls(), 0);
}
