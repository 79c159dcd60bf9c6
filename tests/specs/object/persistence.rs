//! Durability of the local namespace across object lifetimes.

use crate::prelude::assert_eq;
use crate::prelude::*;

fn config() -> ObjectConfig {
    ObjectConfig::new("prefs", Backend::Local)
        .with("theme", json!("light"))
        .with("font_size", json!(12))
}

#[test]
fn local_objects_survive_recreation() {
    let dir = tempfile::tempdir().unwrap();

    {
        let backends = disk_backends(dir.path());
        let mut prefs = PersistedObject::create(config(), &backends).unwrap();
        prefs.set("theme", json!("dark")).unwrap();
    }

    // A fresh set of backends over the same directory sees the snapshot
    let backends = disk_backends(dir.path());
    let prefs = PersistedObject::create(config(), &backends).unwrap();

    assert_eq!(prefs.get("theme"), Some(&json!("dark")));
    assert_eq!(prefs.get("font_size"), Some(&json!(12)));
    assert!(!prefs.is_initial_content());
}

#[test]
fn new_defaults_fill_in_missing_fields() {
    let dir = tempfile::tempdir().unwrap();

    {
        let backends = disk_backends(dir.path());
        let mut prefs = PersistedObject::create(config(), &backends).unwrap();
        prefs.set("theme", json!("dark")).unwrap();
    }

    // A later version of the application ships an extra default
    let backends = disk_backends(dir.path());
    let extended = config().with("language", json!("en"));
    let prefs = PersistedObject::create(extended, &backends).unwrap();

    assert_eq!(prefs.get("theme"), Some(&json!("dark")));
    assert_eq!(prefs.get("language"), Some(&json!("en")));
}

#[test]
fn session_objects_do_not_survive_new_backends() {
    let dir = tempfile::tempdir().unwrap();

    {
        let backends = disk_backends(dir.path());
        let mut token = PersistedObject::create(
            ObjectConfig::new("api-token", Backend::Session).with("token", json!(null)),
            &backends,
        )
        .unwrap();
        token.set("token", json!("123456")).unwrap();
    }

    // Session state lives in memory only; fresh backends start clean
    let backends = disk_backends(dir.path());
    let token = PersistedObject::create(
        ObjectConfig::new("api-token", Backend::Session).with("token", json!(null)),
        &backends,
    )
    .unwrap();

    assert!(token.is_initial_content());
    assert_eq!(token.get("token"), Some(&json!(null)));
}

#[test]
fn malformed_snapshot_on_disk_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        store.set("prefs", "{corrupt").unwrap();
    }

    let backends = disk_backends(dir.path());
    let prefs = PersistedObject::create(config(), &backends).unwrap();

    assert!(prefs.is_initial_content());
    assert_eq!(
        read_snapshot(dir.path(), "prefs"),
        Some(json!({ "theme": "light", "font_size": 12 }))
    );
}
