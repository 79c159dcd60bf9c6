//! Objects never observe each other's data across keys or backends.

use crate::prelude::assert_eq;
use crate::prelude::*;

fn token_config(key: &str, backend: Backend) -> ObjectConfig {
    ObjectConfig::new(key, backend).with("token", json!(null))
}

#[test]
fn different_keys_are_isolated() {
    let backends = Backends::in_memory();

    let mut first = PersistedObject::create(token_config("first", Backend::Local), &backends).unwrap();
    let second = PersistedObject::create(token_config("second", Backend::Local), &backends).unwrap();

    first.set("token", json!("123456")).unwrap();

    assert_eq!(second.get("token"), Some(&json!(null)));
    assert!(second.is_initial_content());
}

#[test]
fn same_key_on_different_backends_is_isolated() {
    let backends = Backends::in_memory();

    let mut session =
        PersistedObject::create(token_config("api-token", Backend::Session), &backends).unwrap();
    let mut local =
        PersistedObject::create(token_config("api-token", Backend::Local), &backends).unwrap();

    session.set("token", json!("123456")).unwrap();
    local.set("token", json!("abcde")).unwrap();

    assert_eq!(session.get("token"), Some(&json!("123456")));
    assert_eq!(local.get("token"), Some(&json!("abcde")));

    // The raw namespaces hold different snapshots under the same key
    let session_raw = backends
        .for_backend(Backend::Session)
        .get("api-token")
        .unwrap()
        .unwrap();
    let local_raw = backends
        .for_backend(Backend::Local)
        .get("api-token")
        .unwrap()
        .unwrap();
    assert_ne!(session_raw, local_raw);
}

#[test]
fn clearing_one_object_leaves_others_alone() {
    let backends = Backends::in_memory();

    let mut first = PersistedObject::create(token_config("first", Backend::Local), &backends).unwrap();
    let mut second = PersistedObject::create(token_config("second", Backend::Local), &backends).unwrap();
    first.set("token", json!("a")).unwrap();
    second.set("token", json!("b")).unwrap();

    first.clear().unwrap();

    assert_eq!(
        backends.for_backend(Backend::Local).get("first").unwrap(),
        None
    );
    assert!(backends
        .for_backend(Backend::Local)
        .get("second")
        .unwrap()
        .is_some());
}
