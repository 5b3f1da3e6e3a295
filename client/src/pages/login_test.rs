use super::*;

#[test]
fn sign_in_label_reflects_loading() {
    assert_eq!(sign_in_label(true), "Signing in...");
    assert_eq!(sign_in_label(false), "Sign in with Google");
}

#[test]
fn redirect_notice_only_for_redirect_decision() {
    assert!(shows_redirect_notice(&GuardDecision::Redirect("/".to_owned())));
    assert!(!shows_redirect_notice(&GuardDecision::Render));
    assert!(!shows_redirect_notice(&GuardDecision::Checking));
}
