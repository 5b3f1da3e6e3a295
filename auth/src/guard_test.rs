use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::gateway::MemoryGateway;
use crate::session::Session;

fn routes() -> GuardRoutes {
    GuardRoutes::default()
}

fn authed() -> AuthStatus {
    AuthStatus::Authenticated(Session::new("u1"))
}

fn navigation_log() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    (log, move |path: &str| sink.borrow_mut().push(path.to_owned()))
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn evaluate_checking_while_initializing() {
    for access in [ViewAccess::RequiresSession, ViewAccess::RequiresNoSession] {
        assert_eq!(evaluate(&AuthStatus::Initializing, access, &routes()), GuardDecision::Checking);
    }
}

#[test]
fn evaluate_protected_view_redirects_unauthenticated_to_sign_in() {
    assert_eq!(
        evaluate(&AuthStatus::Unauthenticated, ViewAccess::RequiresSession, &routes()),
        GuardDecision::Redirect("/login".to_owned())
    );
}

#[test]
fn evaluate_protected_view_renders_for_session() {
    assert_eq!(evaluate(&authed(), ViewAccess::RequiresSession, &routes()), GuardDecision::Render);
}

#[test]
fn evaluate_entry_view_redirects_session_to_landing() {
    assert_eq!(
        evaluate(&authed(), ViewAccess::RequiresNoSession, &routes()),
        GuardDecision::Redirect("/".to_owned())
    );
}

#[test]
fn evaluate_entry_view_renders_for_anonymous() {
    assert_eq!(
        evaluate(&AuthStatus::Unauthenticated, ViewAccess::RequiresNoSession, &routes()),
        GuardDecision::Render
    );
}

#[test]
fn evaluate_public_view_always_renders() {
    for status in [AuthStatus::Initializing, AuthStatus::Unauthenticated, authed()] {
        assert_eq!(evaluate(&status, ViewAccess::Public, &routes()), GuardDecision::Render);
    }
}

#[test]
fn evaluate_uses_custom_routes() {
    let routes = GuardRoutes { sign_in: "/app/login".to_owned(), landing: "/app".to_owned() };
    assert_eq!(
        evaluate(&AuthStatus::Unauthenticated, ViewAccess::RequiresSession, &routes),
        GuardDecision::Redirect("/app/login".to_owned())
    );
    assert_eq!(
        evaluate(&authed(), ViewAccess::RequiresNoSession, &routes),
        GuardDecision::Redirect("/app".to_owned())
    );
}

// =============================================================
// RouteGuard
// =============================================================

#[test]
fn guard_does_not_navigate_while_checking() {
    let service = AuthService::new(MemoryGateway::new());
    let (log, navigate) = navigation_log();

    let guard = RouteGuard::activate(&service, ViewAccess::RequiresSession, routes(), navigate);

    assert_eq!(guard.decision(), GuardDecision::Checking);
    assert!(log.borrow().is_empty());
}

#[test]
fn library_redirects_to_sign_in_when_gateway_reports_no_session() {
    let gateway = MemoryGateway::new();
    let service = AuthService::new(gateway.clone());
    let (log, navigate) = navigation_log();
    let guard = RouteGuard::activate(&service, ViewAccess::RequiresSession, routes(), navigate);

    gateway.emit(None);

    assert_eq!(*log.borrow(), vec!["/login".to_owned()]);
    assert_eq!(guard.decision(), GuardDecision::Redirect("/login".to_owned()));
}

#[test]
fn guard_evaluates_immediately_on_activation() {
    let gateway = MemoryGateway::new();
    let service = AuthService::new(gateway.clone());
    gateway.emit(Some(Session::new("u1")));
    let (log, navigate) = navigation_log();

    let guard = RouteGuard::activate(&service, ViewAccess::RequiresNoSession, routes(), navigate);

    assert_eq!(*log.borrow(), vec!["/".to_owned()]);
    assert_eq!(guard.decision(), GuardDecision::Redirect("/".to_owned()));
}

#[test]
fn guard_redirects_once_per_target() {
    let gateway = MemoryGateway::new();
    let service = AuthService::new(gateway.clone());
    let (log, navigate) = navigation_log();
    let _guard = RouteGuard::activate(&service, ViewAccess::RequiresSession, routes(), navigate);

    gateway.emit(None);
    service.store().apply_notification(None);
    gateway.emit(None);

    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn guard_renders_then_redirects_after_session_ends() {
    let gateway = MemoryGateway::new();
    let service = AuthService::new(gateway.clone());
    let (log, navigate) = navigation_log();
    let guard = RouteGuard::activate(&service, ViewAccess::RequiresSession, routes(), navigate);

    gateway.emit(Some(Session::new("u1")));
    assert_eq!(guard.decision(), GuardDecision::Render);
    assert!(log.borrow().is_empty());

    gateway.emit(None);
    assert_eq!(*log.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn dropped_guard_no_longer_navigates() {
    let gateway = MemoryGateway::new();
    let service = AuthService::new(gateway.clone());
    let (log, navigate) = navigation_log();
    let guard = RouteGuard::activate(&service, ViewAccess::RequiresSession, routes(), navigate);

    drop(guard);
    gateway.emit(None);

    assert!(log.borrow().is_empty());
    assert_eq!(service.store().subscriber_count(), 0);
}

#[test]
fn public_guard_never_navigates() {
    let gateway = MemoryGateway::new();
    let service = AuthService::new(gateway.clone());
    let (log, navigate) = navigation_log();
    let guard = RouteGuard::activate(&service, ViewAccess::Public, routes(), navigate);

    gateway.emit(None);
    gateway.emit(Some(Session::new("u1")));

    assert!(log.borrow().is_empty());
    assert_eq!(guard.decision(), GuardDecision::Render);
}
