use super::*;
use crate::session::Session;

#[test]
fn initializing_reports_loading_and_nulls() {
    let info = AuthDebugInfo::from_status(&AuthStatus::Initializing);
    assert_eq!(info.lines(), ["Loading: true", "User: null", "UID: null"]);
}

#[test]
fn authenticated_reports_email_and_short_uid() {
    let session = Session::new("abcdefghijkl").with_email("a@b.com");
    let info = AuthDebugInfo::from_status(&AuthStatus::Authenticated(session));
    assert_eq!(info.to_string(), "Loading: false\nUser: a@b.com\nUID: abcdefgh...");
}

#[test]
fn authenticated_without_email_shows_null_user() {
    let info = AuthDebugInfo::from_status(&AuthStatus::Authenticated(Session::new("u1")));
    assert_eq!(info.user, "null");
    assert_eq!(info.uid, "u1...");
}
