use super::*;
use crate::net::error::ApiError;

#[test]
fn default_is_loading() {
    let state: Loadable<Vec<u8>> = Loadable::default();
    assert!(state.is_loading());
    assert_eq!(state.ready(), None);
    assert_eq!(state.error(), None);
}

#[test]
fn ok_result_is_ready() {
    let state = Loadable::from_result(Ok(vec![1, 2]));
    assert_eq!(state.ready(), Some(&vec![1, 2]));
    assert!(!state.is_loading());
}

#[test]
fn err_result_keeps_display_message() {
    let state: Loadable<()> =
        Loadable::from_result(Err(ApiError::Server { status: 500, message: "database unavailable".to_owned() }));
    assert_eq!(state.error(), Some("database unavailable"));
    assert_eq!(state.ready(), None);
}
