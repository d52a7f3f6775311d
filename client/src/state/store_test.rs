use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get(TOKEN_KEY), Ok(None));

    store.set(TOKEN_KEY, "abc123").expect("set");
    assert_eq!(store.get(TOKEN_KEY), Ok(Some("abc123".to_owned())));

    store.remove(TOKEN_KEY).expect("remove");
    assert_eq!(store.get(TOKEN_KEY), Ok(None));
    assert!(store.is_empty());
}

#[test]
fn memory_store_remove_absent_key_succeeds() {
    let store = MemoryStore::new();
    assert_eq!(store.remove(USER_KEY), Ok(()));
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.set(TOKEN_KEY, "t").expect("set");
    assert_eq!(other.get(TOKEN_KEY), Ok(Some("t".to_owned())));
}

#[test]
fn memory_store_with_entries_prepopulates() {
    let store = MemoryStore::with_entries([(TOKEN_KEY, "abc123"), (USER_KEY, "{}")]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(USER_KEY), Ok(Some("{}".to_owned())));
}

#[test]
fn unavailable_memory_store_fails_every_operation() {
    let store = MemoryStore::unavailable();
    assert!(matches!(store.get(TOKEN_KEY), Err(StorageError::Unavailable(_))));
    assert!(matches!(store.set(TOKEN_KEY, "t"), Err(StorageError::Unavailable(_))));
    assert!(matches!(store.remove(TOKEN_KEY), Err(StorageError::Unavailable(_))));
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn session_context_derefs_to_shared_store() {
    let store = MemoryStore::new();
    let ctx = SessionContext::new(store.clone());
    ctx.set(TOKEN_KEY, "abc123").expect("set through context");
    assert_eq!(store.get(TOKEN_KEY), Ok(Some("abc123".to_owned())));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_unavailable_outside_browser() {
    let ctx = SessionContext::browser();
    assert!(matches!(ctx.get(TOKEN_KEY), Err(StorageError::Unavailable(_))));
    assert!(matches!(ctx.remove(TOKEN_KEY), Err(StorageError::Unavailable(_))));
}

#[test]
fn session_context_is_itself_a_store() {
    let store = MemoryStore::with_entries([(TOKEN_KEY, "abc123")]);
    let ctx = SessionContext::new(store.clone());
    let as_store: &dyn SessionStore = &ctx;
    assert_eq!(as_store.get(TOKEN_KEY), Ok(Some("abc123".to_owned())));
    as_store.remove(TOKEN_KEY).expect("remove through context");
    assert!(store.is_empty());
}
