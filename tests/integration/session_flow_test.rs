//! Session lifecycle flows over the durable file-backed credential store.

use std::sync::Arc;

use trackhub_auth::{CredentialStore, FileCredentialStore, SessionManager};

use crate::helpers;

fn file_store(dir: &tempfile::TempDir) -> Arc<FileCredentialStore> {
    Arc::new(FileCredentialStore::new(dir.path().join("credential")))
}

#[test]
fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let credential = helpers::credential(serde_json::json!({
        "sub": "u1",
        "username": "alice",
        "email": "alice@lab.edu",
        "role": "ROLE_ADMIN",
        "exp": helpers::exp_in_an_hour(),
    }));

    let mut manager = SessionManager::new(store.clone());
    manager.login(&credential).unwrap();
    drop(manager);

    // A fresh manager over the same store restores the same session,
    // the way a page reload restores from browser storage.
    let mut restarted = SessionManager::new(store);
    let session = restarted.initialize().cloned().unwrap();
    assert_eq!(session.user.username, "alice");
    assert_eq!(session.role, "ROLE_ADMIN");
    assert!(restarted.is_admin());
}

#[test]
fn test_expired_credential_cleared_on_startup() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    store.set(&helpers::credential(serde_json::json!({
        "sub": "u1",
        "exp": 1,
    })));

    let mut manager = SessionManager::new(store.clone());
    assert!(manager.initialize().is_none());
    assert_eq!(store.get(), None, "expired credential must be removed from disk");
}

#[test]
fn test_malformed_credential_cleared_on_startup() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    store.set("not.a.valid.token");

    let mut manager = SessionManager::new(store.clone());
    assert!(manager.initialize().is_none());
    assert_eq!(store.get(), None);
}

#[test]
fn test_expiry_boundary_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    let now = helpers::now_ms();

    // exp exactly floor(now / 1000): strict '>' means already expired.
    store.set(&helpers::credential(serde_json::json!({
        "sub": "u1",
        "exp": now / 1000,
    })));
    let mut manager = SessionManager::new(store.clone());
    assert!(manager.initialize_at(now).is_none());

    // One second later than that is still valid.
    store.set(&helpers::credential(serde_json::json!({
        "sub": "u1",
        "exp": now / 1000 + 1,
    })));
    assert!(manager.initialize_at(now).is_some());
}

#[test]
fn test_logout_twice_matches_logout_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    let mut manager = SessionManager::new(store.clone());
    manager
        .login(&helpers::credential(serde_json::json!({
            "sub": "u1",
            "exp": helpers::exp_in_an_hour(),
        })))
        .unwrap();

    manager.logout();
    let after_once = (manager.is_authenticated(), store.get());
    manager.logout();
    let after_twice = (manager.is_authenticated(), store.get());

    assert_eq!(after_once, (false, None));
    assert_eq!(after_once, after_twice);
}

#[test]
fn test_unavailable_storage_fails_open_to_logged_out() {
    // Point the store at a path that can never exist (parent is a file).
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let store = Arc::new(FileCredentialStore::new(blocker.join("credential")));

    let mut manager = SessionManager::new(store);
    assert!(manager.initialize().is_none());

    // Login still resolves a session in memory even though persistence
    // silently failed; nothing panics or errors.
    let credential = helpers::credential(serde_json::json!({
        "sub": "u1",
        "exp": helpers::exp_in_an_hour(),
    }));
    assert!(manager.login(&credential).is_ok());
    assert!(manager.is_authenticated());
}
