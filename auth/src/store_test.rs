use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::gateway::MemoryGateway;

fn record(store: &AuthStore) -> (Rc<RefCell<Vec<AuthStatus>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let sub = store.subscribe(move |status| sink.borrow_mut().push(status.clone()));
    (seen, sub)
}

fn alice() -> Session {
    Session::new("u1").with_email("a@b.com")
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn new_store_is_initializing() {
    let store = AuthStore::new();
    assert_eq!(store.status(), AuthStatus::Initializing);
    assert!(store.is_loading());
    assert!(store.current_session().is_none());
    assert!(!store.is_initialized());
}

#[test]
fn initialize_is_idempotent() {
    let gateway = MemoryGateway::new();
    let store = AuthStore::new();

    assert!(store.initialize(&gateway));
    assert!(!store.initialize(&gateway));

    assert!(store.is_initialized());
    assert_eq!(gateway.listener_count(), 1);
}

#[test]
fn dropping_store_releases_gateway_listener() {
    let gateway = MemoryGateway::new();
    let store = AuthStore::new();
    store.initialize(&gateway);
    drop(store);
    assert_eq!(gateway.listener_count(), 0);
    gateway.emit(None);
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn first_notification_resolves_initializing() {
    let gateway = MemoryGateway::new();
    let store = AuthStore::new();
    store.initialize(&gateway);
    let (seen, _sub) = record(&store);

    gateway.emit(None);

    assert_eq!(store.status(), AuthStatus::Unauthenticated);
    assert_eq!(*seen.borrow(), vec![AuthStatus::Unauthenticated]);
}

#[test]
fn status_tracks_latest_notification_in_order() {
    let gateway = MemoryGateway::new();
    let store = AuthStore::new();
    store.initialize(&gateway);
    let (seen, _sub) = record(&store);

    let sequence = [None, Some(alice()), None, Some(Session::new("u2")), Some(alice())];
    for session in sequence.clone() {
        gateway.emit(session.clone());
        assert_eq!(store.status(), AuthStatus::from_notification(session));
    }

    let expected: Vec<AuthStatus> = sequence.into_iter().map(AuthStatus::from_notification).collect();
    assert_eq!(*seen.borrow(), expected);
}

#[test]
fn repeated_identical_notification_is_not_rebroadcast() {
    let gateway = MemoryGateway::new();
    let store = AuthStore::new();
    store.initialize(&gateway);
    let (seen, _sub) = record(&store);

    gateway.emit(Some(alice()));
    gateway.emit(Some(alice()));

    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn never_reverts_to_initializing_without_a_call() {
    let gateway = MemoryGateway::new();
    let store = AuthStore::new();
    store.initialize(&gateway);

    gateway.emit(Some(alice()));
    gateway.emit(None);
    gateway.emit(None);

    assert!(!store.is_loading());
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn same_callback_subscribed_twice_fires_twice() {
    let store = AuthStore::new();
    let count = Rc::new(Cell::new(0));
    let callback = {
        let count = count.clone();
        move |_: &AuthStatus| count.set(count.get() + 1)
    };

    let _a = store.subscribe(callback.clone());
    let _b = store.subscribe(callback);
    store.apply_notification(None);

    assert_eq!(count.get(), 2);
}

#[test]
fn dropped_subscription_stops_callbacks() {
    let store = AuthStore::new();
    let (seen, sub) = record(&store);

    store.apply_notification(None);
    sub.unsubscribe();
    store.apply_notification(Some(alice()));

    assert_eq!(*seen.borrow(), vec![AuthStatus::Unauthenticated]);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn subscription_outliving_store_is_harmless() {
    let store = AuthStore::new();
    let sub = store.subscribe(|_| {});
    drop(store);
    drop(sub);
}

#[test]
fn callback_may_read_store_reentrantly() {
    let store = AuthStore::new();
    let observed = Rc::new(RefCell::new(None));
    let sink = observed.clone();
    let reader = store.clone();
    let _sub = store.subscribe(move |_| *sink.borrow_mut() = Some(reader.status()));

    store.apply_notification(Some(alice()));

    assert_eq!(*observed.borrow(), Some(AuthStatus::Authenticated(alice())));
}

#[test]
fn callback_may_drop_its_own_subscription() {
    let store = AuthStore::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let count = Rc::new(Cell::new(0));

    let sub = {
        let slot = slot.clone();
        let count = count.clone();
        store.subscribe(move |_| {
            count.set(count.get() + 1);
            slot.borrow_mut().take();
        })
    };
    *slot.borrow_mut() = Some(sub);

    store.apply_notification(None);
    store.apply_notification(Some(alice()));

    assert_eq!(count.get(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn write_back_from_callback_keeps_delivery_order() {
    let store = AuthStore::new();
    let writer = store.clone();
    let _sign_out_on_auth = store.subscribe(move |status| {
        if status.is_authenticated() {
            writer.apply_notification(None);
        }
    });
    let (seen, _sub) = record(&store);

    store.apply_notification(Some(alice()));

    assert_eq!(store.status(), AuthStatus::Unauthenticated);
    assert_eq!(
        *seen.borrow(),
        vec![AuthStatus::Authenticated(alice()), AuthStatus::Unauthenticated]
    );
}

#[test]
fn write_back_after_later_subscribers_still_reaches_everyone() {
    let store = AuthStore::new();
    let (first, _first_sub) = record(&store);
    let writer = store.clone();
    let _sign_out_on_auth = store.subscribe(move |status| {
        if status.is_authenticated() {
            writer.apply_notification(None);
        }
    });
    let (last, _last_sub) = record(&store);

    store.apply_notification(Some(alice()));

    let expected = vec![AuthStatus::Authenticated(alice()), AuthStatus::Unauthenticated];
    assert_eq!(*first.borrow(), expected);
    assert_eq!(*last.borrow(), expected);
}

#[test]
fn listener_released_mid_dispatch_is_skipped() {
    let store = AuthStore::new();
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let slot = victim.clone();
    let _releaser = store.subscribe(move |_| {
        slot.borrow_mut().take();
    });
    let (seen, sub) = record(&store);
    *victim.borrow_mut() = Some(sub);

    store.apply_notification(None);

    assert!(seen.borrow().is_empty());
    assert_eq!(store.subscriber_count(), 1);
}

// =============================================================
// In-flight calls
// =============================================================

#[test]
fn in_flight_call_forces_initializing_then_restores() {
    let store = AuthStore::new();
    store.apply_notification(Some(alice()));
    let (seen, _sub) = record(&store);

    let call = store.begin_call();
    assert!(store.is_loading());
    drop(call);

    assert_eq!(store.status(), AuthStatus::Authenticated(alice()));
    assert_eq!(
        *seen.borrow(),
        vec![AuthStatus::Initializing, AuthStatus::Authenticated(alice())]
    );
}

#[test]
fn notification_during_call_is_held_until_call_ends() {
    let store = AuthStore::new();
    store.apply_notification(None);

    let call = store.begin_call();
    store.apply_notification(Some(alice()));
    assert!(store.is_loading());

    drop(call);
    assert_eq!(store.status(), AuthStatus::Authenticated(alice()));
}

#[test]
fn call_before_first_notification_stays_initializing() {
    let store = AuthStore::new();
    let (seen, _sub) = record(&store);

    drop(store.begin_call());

    assert!(store.is_loading());
    assert!(seen.borrow().is_empty());
}
