//! End-to-end command flows with a scripted CLI runner.
//!
//! Exercises the list -> cache -> mutate cycle without touching a real
//! `vtex` binary.

mod common;

use common::fixtures::SessionFixture;
use common::runners::ScriptedRunner;

use vtexctl::cli::commands::{account, workspace};
use vtexctl::cli::progress::SilentReporter;
use vtexctl::core::cache::WorkspaceCache;
use vtexctl::store::MemoryStore;

const LIST_OUTPUT: &str = "Name      Weight  Production\n* dev     0       false\n  master  0       true\n";

#[tokio::test]
async fn test_list_populates_cache() {
    let fixture = SessionFixture::new().with_account("acme").with_workspace("dev");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());
    let runner = ScriptedRunner::ok(LIST_OUTPUT);

    workspace::run_workspace_list(&session, &cache, &runner, &SilentReporter, false)
        .await
        .unwrap();

    assert_eq!(runner.last_call().unwrap(), vec!["workspace", "list"]);
    let cached = cache.get("acme").expect("list should populate the cache");
    assert_eq!(cached.len(), 2);
    assert_eq!(cached[0].name, "dev");
    assert!(cached[0].is_active);
    assert!(cached[1].is_production);
}

#[tokio::test]
async fn test_second_list_is_served_from_cache() {
    let fixture = SessionFixture::new().with_account("acme");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());
    let runner = ScriptedRunner::ok(LIST_OUTPUT);

    workspace::run_workspace_list(&session, &cache, &runner, &SilentReporter, false)
        .await
        .unwrap();
    workspace::run_workspace_list(&session, &cache, &runner, &SilentReporter, false)
        .await
        .unwrap();

    assert_eq!(runner.call_count(), 1, "second list must not hit the CLI");
}

#[tokio::test]
async fn test_refresh_bypasses_cache() {
    let fixture = SessionFixture::new().with_account("acme");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());
    let runner = ScriptedRunner::ok(LIST_OUTPUT);

    workspace::run_workspace_list(&session, &cache, &runner, &SilentReporter, false)
        .await
        .unwrap();
    workspace::run_workspace_list(&session, &cache, &runner, &SilentReporter, true)
        .await
        .unwrap();

    assert_eq!(runner.call_count(), 2);
}

#[tokio::test]
async fn test_unparseable_output_degrades_without_caching() {
    let fixture = SessionFixture::new().with_account("acme");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());
    let runner = ScriptedRunner::ok("%%% !!!\n??? ###\n");

    let result =
        workspace::run_workspace_list(&session, &cache, &runner, &SilentReporter, false).await;

    assert!(result.is_ok(), "malformed output is a fallback, not a crash");
    assert!(cache.get("acme").is_none());
}

#[tokio::test]
async fn test_cli_failure_leaves_cache_unchanged() {
    let fixture = SessionFixture::new().with_account("acme");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());

    let seeded = ScriptedRunner::ok(LIST_OUTPUT);
    workspace::run_workspace_list(&session, &cache, &seeded, &SilentReporter, false)
        .await
        .unwrap();

    let failing = ScriptedRunner::failing("network down");
    let result =
        workspace::run_workspace_list(&session, &cache, &failing, &SilentReporter, true).await;

    assert!(result.is_err());
    assert!(cache.get("acme").is_some(), "failed fetch must not clobber cache");
}

#[tokio::test]
async fn test_use_updates_active_workspace_in_cache() {
    let fixture = SessionFixture::new().with_account("acme").with_workspace("dev");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());

    let seeded = ScriptedRunner::ok(LIST_OUTPUT);
    workspace::run_workspace_list(&session, &cache, &seeded, &SilentReporter, false)
        .await
        .unwrap();

    let runner = ScriptedRunner::ok("workspace change\n");
    workspace::run_workspace_use(&session, &cache, &runner, &SilentReporter, "master", false)
        .await
        .unwrap();

    assert_eq!(runner.last_call().unwrap(), vec!["use", "master"]);
    let cached = cache.get("acme").unwrap();
    assert!(!cached[0].is_active);
    assert!(cached[1].is_active);
}

#[tokio::test]
async fn test_use_already_current_skips_cli() {
    let fixture = SessionFixture::new().with_account("acme").with_workspace("dev");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());
    let runner = ScriptedRunner::ok("workspace change\n");

    workspace::run_workspace_use(&session, &cache, &runner, &SilentReporter, "dev", false)
        .await
        .unwrap();

    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn test_use_uncached_workspace_expires_entry() {
    let fixture = SessionFixture::new().with_account("acme").with_workspace("dev");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());

    let seeded = ScriptedRunner::ok(LIST_OUTPUT);
    workspace::run_workspace_list(&session, &cache, &seeded, &SilentReporter, false)
        .await
        .unwrap();

    let runner = ScriptedRunner::ok("workspace change\n");
    workspace::run_workspace_use(&session, &cache, &runner, &SilentReporter, "brand-new", true)
        .await
        .unwrap();

    assert_eq!(runner.last_call().unwrap(), vec!["use", "brand-new", "--create"]);
    // The cached list no longer reflects ground truth; next read must miss
    assert!(cache.get("acme").is_none());
}

#[tokio::test]
async fn test_delete_clears_account_cache() {
    let fixture = SessionFixture::new().with_account("acme").with_workspace("dev");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());

    let seeded = ScriptedRunner::ok(LIST_OUTPUT);
    workspace::run_workspace_list(&session, &cache, &seeded, &SilentReporter, false)
        .await
        .unwrap();

    let runner = ScriptedRunner::ok("deleted\n");
    workspace::run_workspace_delete(&session, &cache, &runner, "old-feature", true)
        .await
        .unwrap();

    assert_eq!(
        runner.last_call().unwrap(),
        vec!["workspace", "delete", "old-feature"]
    );
    assert!(cache.get("acme").is_none());
}

#[tokio::test]
async fn test_delete_refuses_master_and_current() {
    let fixture = SessionFixture::new().with_account("acme").with_workspace("dev");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());
    let runner = ScriptedRunner::ok("deleted\n");

    let result =
        workspace::run_workspace_delete(&session, &cache, &runner, "master", true).await;
    assert!(result.is_err());

    let result = workspace::run_workspace_delete(&session, &cache, &runner, "dev", true).await;
    assert!(result.is_err());

    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn test_delete_error_output_aborts_and_keeps_cache() {
    let fixture = SessionFixture::new().with_account("acme").with_workspace("dev");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());

    let seeded = ScriptedRunner::ok(LIST_OUTPUT);
    workspace::run_workspace_list(&session, &cache, &seeded, &SilentReporter, false)
        .await
        .unwrap();

    // Zero exit but error-looking text still counts as failure
    let runner = ScriptedRunner::ok("Error: workspace is protected\n");
    let result =
        workspace::run_workspace_delete(&session, &cache, &runner, "qa", true).await;

    assert!(result.is_err());
    assert!(cache.get("acme").is_some());
}

#[tokio::test]
async fn test_account_switch_force_expires_target() {
    let fixture = SessionFixture::new().with_account("acme").with_workspace("dev");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());

    // The target account has a cached list from an earlier session
    cache.put(
        "otherstore",
        vec![vtexctl::core::workspace::WorkspaceRecord {
            name: "master".to_string(),
            is_active: true,
            is_production: true,
        }],
    );

    let runner = ScriptedRunner::ok("switched\n");
    account::run_account_switch(&session, &cache, &runner, &SilentReporter, "otherstore")
        .await
        .unwrap();

    assert_eq!(runner.last_call().unwrap(), vec!["switch", "otherstore"]);
    assert!(cache.get("otherstore").is_none(), "switch must force a re-fetch");
}

#[tokio::test]
async fn test_account_switch_to_current_skips_cli() {
    let fixture = SessionFixture::new().with_account("acme");
    let session = fixture.session_dir();
    let cache = WorkspaceCache::new(MemoryStore::new());
    let runner = ScriptedRunner::ok("switched\n");

    account::run_account_switch(&session, &cache, &runner, &SilentReporter, "acme")
        .await
        .unwrap();

    assert_eq!(runner.call_count(), 0);
}
