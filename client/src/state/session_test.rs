use std::sync::Mutex;

use super::*;
use crate::state::store::{KeyValueStorage, MemoryStorage, StoredAuth, TOKEN_KEY, USER_KEY};

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        username: "jane".to_owned(),
        email: "jane@lab.edu".to_owned(),
        role,
    }
}

fn cell_with_storage() -> (SessionCell, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (SessionCell::new(TokenStore::new(storage.clone())), storage)
}

// =============================================================
// Session flags
// =============================================================

#[test]
fn signed_out_session_has_no_flags() {
    let session = Session::signed_out();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert!(!session.is_member());
    assert_eq!(session.token(), None);
}

#[test]
fn admin_session_flags() {
    let session = Session::signed_in(user(Role::Admin), "t");
    assert!(session.is_authenticated());
    assert!(session.is_admin());
    assert!(!session.is_member());
}

#[test]
fn member_session_flags() {
    let session = Session::signed_in(user(Role::Member), "t");
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
    assert!(session.is_member());
}

// =============================================================
// hydrate
// =============================================================

#[test]
fn hydrate_reads_stored_pair() {
    let (cell, _) = cell_with_storage();
    cell.store().save(&user(Role::Admin), "tok");
    let session = cell.hydrate();
    assert_eq!(session, Session::signed_in(user(Role::Admin), "tok"));
    assert!(cell.is_hydrated());
}

#[test]
fn hydrate_only_reads_once() {
    let (cell, _) = cell_with_storage();
    assert!(!cell.hydrate().is_authenticated());
    cell.store().save(&user(Role::Admin), "tok");
    assert!(!cell.hydrate().is_authenticated());
}

#[test]
fn hydrate_with_token_but_no_user_is_signed_out_and_cleans_up() {
    let (cell, storage) = cell_with_storage();
    storage.set(TOKEN_KEY, "orphan");
    assert!(!cell.hydrate().is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn hydrate_with_user_but_no_token_is_signed_out_and_cleans_up() {
    let (cell, storage) = cell_with_storage();
    storage.set(USER_KEY, &serde_json::to_string(&user(Role::Member)).unwrap());
    assert!(!cell.hydrate().is_authenticated());
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn hydrate_after_establish_keeps_established_session() {
    let (cell, _) = cell_with_storage();
    cell.establish(user(Role::Member), "fresh".to_owned());
    assert_eq!(cell.hydrate().token(), Some("fresh"));
}

// =============================================================
// establish / clear
// =============================================================

#[test]
fn establish_writes_through_and_bumps_generation() {
    let (cell, _) = cell_with_storage();
    let before = cell.generation();
    cell.establish(user(Role::Admin), "tok".to_owned());
    assert_eq!(cell.generation(), before + 1);
    assert_eq!(
        cell.store().read(),
        StoredAuth { user: Some(user(Role::Admin)), token: Some("tok".to_owned()) }
    );
}

#[test]
fn clear_empties_memory_and_store() {
    let (cell, _) = cell_with_storage();
    cell.establish(user(Role::Admin), "tok".to_owned());
    cell.clear();
    assert!(!cell.snapshot().is_authenticated());
    assert_eq!(cell.store().read(), StoredAuth::default());
}

// =============================================================
// Generation fencing
// =============================================================

#[test]
fn replace_user_applies_for_current_generation() {
    let (cell, _) = cell_with_storage();
    cell.establish(user(Role::Member), "tok".to_owned());
    let generation = cell.generation();
    let promoted = user(Role::Admin);
    assert!(cell.replace_user(promoted.clone(), generation));
    assert_eq!(cell.snapshot(), Session::signed_in(promoted.clone(), "tok"));
    assert_eq!(cell.store().read().user, Some(promoted));
}

#[test]
fn replace_user_rejected_after_clear() {
    let (cell, _) = cell_with_storage();
    cell.establish(user(Role::Admin), "tok".to_owned());
    let generation = cell.generation();
    cell.clear();
    assert!(!cell.replace_user(user(Role::Admin), generation));
    assert!(!cell.snapshot().is_authenticated());
    assert_eq!(cell.store().read(), StoredAuth::default());
}

#[test]
fn replace_user_rejected_when_signed_out() {
    let (cell, _) = cell_with_storage();
    let generation = cell.generation();
    assert!(!cell.replace_user(user(Role::Admin), generation));
    assert!(!cell.snapshot().is_authenticated());
}

#[test]
fn invalidate_clears_current_generation() {
    let (cell, _) = cell_with_storage();
    cell.establish(user(Role::Admin), "tok".to_owned());
    assert!(cell.invalidate(cell.generation()));
    assert!(!cell.snapshot().is_authenticated());
}

#[test]
fn invalidate_ignores_older_generation() {
    let (cell, _) = cell_with_storage();
    let stale = cell.generation();
    cell.establish(user(Role::Admin), "tok".to_owned());
    assert!(!cell.invalidate(stale));
    assert!(cell.snapshot().is_admin());
}

// =============================================================
// Listeners
// =============================================================

#[test]
fn listeners_see_every_transition() {
    let (cell, _) = cell_with_storage();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    cell.subscribe(Arc::new(move |s: &Session| sink.lock().unwrap().push(s.is_authenticated())));

    cell.hydrate();
    cell.establish(user(Role::Admin), "tok".to_owned());
    cell.clear();

    assert_eq!(*seen.lock().unwrap(), vec![false, true, false]);
}

#[test]
fn listener_may_read_cell_without_deadlock() {
    let (cell, _) = cell_with_storage();
    let inner = cell.clone();
    let seen = Arc::new(Mutex::new(None));
    let sink = seen.clone();
    cell.subscribe(Arc::new(move |_: &Session| *sink.lock().unwrap() = Some(inner.generation())));
    cell.establish(user(Role::Member), "tok".to_owned());
    assert_eq!(*seen.lock().unwrap(), Some(1));
}
