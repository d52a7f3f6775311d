//! Session oracle and session lifecycle writes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation decision funnels through [`is_authenticated`]. It is a
//! plain function of store contents at call time; nothing is memoized, so a
//! logout in one component is seen by the next guard evaluation.
//!
//! ERROR HANDLING
//! ==============
//! Reads degrade: an unreachable store means "no session". Writes propagate
//! [`StorageError`] so callers decide what a failed login or logout means.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use wire::{SessionGrant, SessionUser};

use super::store::{SessionStore, StorageError, TOKEN_KEY, USER_KEY};

/// True iff the `token` key holds a non-empty value.
///
/// The `user` key is never consulted. Storage failures count as
/// unauthenticated.
pub fn is_authenticated(store: &dyn SessionStore) -> bool {
    match store.get(TOKEN_KEY) {
        Ok(token) => token.is_some_and(|t| !t.is_empty()),
        Err(err) => {
            log::warn!("treating session as signed out: {err}");
            false
        }
    }
}

/// Identity record for display, if one is stored and decodes.
pub fn current_user(store: &dyn SessionStore) -> Option<SessionUser> {
    let raw = store.get(USER_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Persist a freshly issued session: `user` first, then `token`.
///
/// The `token` write is the one that authenticates, so it goes last. If it
/// fails, the `user` record written before it is removed again.
///
/// # Errors
///
/// Returns [`StorageError`] if either write fails or the user record cannot
/// be encoded.
pub fn establish_session(store: &dyn SessionStore, grant: &SessionGrant) -> Result<(), StorageError> {
    let user = serde_json::to_string(&grant.user).map_err(|e| StorageError::Encode(e.to_string()))?;
    store.set(USER_KEY, &user)?;
    if let Err(err) = store.set(TOKEN_KEY, &grant.token) {
        if let Err(cleanup) = store.remove(USER_KEY) {
            log::warn!("left a stale user record behind: {cleanup}");
        }
        return Err(err);
    }
    Ok(())
}

/// Remove all session evidence: `user`, then `token`.
///
/// Succeeds when the keys are already absent.
///
/// # Errors
///
/// Returns [`StorageError`] from the first removal that fails.
pub fn end_session(store: &dyn SessionStore) -> Result<(), StorageError> {
    store.remove(USER_KEY)?;
    store.remove(TOKEN_KEY)
}
