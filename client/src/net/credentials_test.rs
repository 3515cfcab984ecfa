use super::*;

#[test]
fn fresh_memory_context_is_unauthenticated() {
    let session = SessionContext::in_memory();
    assert!(!session.is_authenticated());
    assert_eq!(session.access_token(), None);
    assert_eq!(session.refresh_token(), None);
}

#[test]
fn store_tokens_persists_both_keys() {
    let backend = Arc::new(MemoryStorage::default());
    let session = SessionContext::new(backend.clone());
    session.store_tokens("acc", "ref");
    assert_eq!(backend.get(ACCESS_TOKEN_KEY).as_deref(), Some("acc"));
    assert_eq!(backend.get(REFRESH_TOKEN_KEY).as_deref(), Some("ref"));
    assert!(session.is_authenticated());
}

#[test]
fn set_access_token_keeps_refresh_token() {
    let session = SessionContext::in_memory();
    session.store_tokens("old", "ref");
    session.set_access_token("new");
    assert_eq!(session.access_token().as_deref(), Some("new"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref"));
}

#[test]
fn clear_removes_both_tokens() {
    let session = SessionContext::in_memory();
    session.store_tokens("acc", "ref");
    session.clear();
    assert!(!session.is_authenticated());
    assert_eq!(session.refresh_token(), None);
}

#[test]
fn empty_stored_token_counts_as_absent() {
    let session = SessionContext::in_memory();
    session.set_access_token("");
    assert!(!session.is_authenticated());
}

#[test]
fn clones_share_the_same_backend() {
    let session = SessionContext::in_memory();
    let other = session.clone();
    session.store_tokens("acc", "ref");
    assert!(other.is_authenticated());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let session = SessionContext::browser();
    session.store_tokens("acc", "ref");
    assert!(!session.is_authenticated());
}
