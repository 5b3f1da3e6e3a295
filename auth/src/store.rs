//! Process-wide auth status holder.
//!
//! DESIGN
//! ======
//! The store keeps two facts: the last settled status reported by the gateway
//! (or by an explicit sign-in/out resolution) and a count of in-flight
//! identity calls. The observable status is `Initializing` while nothing has
//! settled yet or while any call is in flight, otherwise the settled value.
//!
//! Subscribers are notified only when the observable status changes, so a
//! sign-in resolution and the gateway's own notification carrying the same
//! session produce a single transition. Listener lists are cloned out of the
//! `RefCell` before dispatch, which lets callbacks read the store, subscribe,
//! or drop subscriptions while being notified. A listener released mid-dispatch
//! is skipped for the rest of that round.
//!
//! A callback that writes back into the store does not dispatch recursively.
//! The write is recorded and the current round finishes first; the newer
//! status is then broadcast as its own round, so every subscriber sees
//! transitions in the order they happened and ends on the current status.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::gateway::{GatewaySubscription, IdentityGateway};
use crate::session::Session;
use crate::status::AuthStatus;

type Listener = Rc<dyn Fn(&AuthStatus)>;

#[derive(Default)]
struct Inner {
    initialized: bool,
    settled: Option<AuthStatus>,
    in_flight: usize,
    observed: AuthStatus,
    next_listener_id: u64,
    listeners: Vec<(u64, Listener)>,
    dispatching: bool,
    gateway: Option<GatewaySubscription>,
}

impl Inner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }

    fn current(&self) -> AuthStatus {
        match &self.settled {
            Some(status) if self.in_flight == 0 => status.clone(),
            _ => AuthStatus::Initializing,
        }
    }
}

/// Shared handle to the auth status. Clones refer to the same store.
#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Rc<RefCell<Inner>>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening to the gateway's notification stream.
    ///
    /// Returns `false` without side effects if already initialized.
    pub fn initialize(&self, gateway: &dyn IdentityGateway) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.initialized {
                tracing::debug!("auth store already initialized");
                return false;
            }
            inner.initialized = true;
        }

        let weak = Rc::downgrade(&self.inner);
        let subscription = gateway.on_state_change(Box::new(move |session| {
            if let Some(inner) = weak.upgrade() {
                AuthStore { inner }.apply_notification(session);
            }
        }));
        self.inner.borrow_mut().gateway = Some(subscription);
        tracing::debug!("auth store listening for gateway notifications");
        true
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.borrow().initialized
    }

    /// Current status snapshot.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.inner.borrow().current()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status().is_loading()
    }

    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.status().session().cloned()
    }

    /// Register a callback for every status transition.
    ///
    /// The callback is not invoked for the status current at subscription
    /// time. Registering the same callback twice yields two invocations.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&AuthStatus) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Rc::new(callback)));
        Subscription { store: Rc::downgrade(&self.inner), id }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Record a gateway notification (or an explicit sign-in/out resolution).
    pub fn apply_notification(&self, session: Option<Session>) {
        let status = AuthStatus::from_notification(session);
        tracing::debug!(status = status.as_str(), "auth notification received");
        self.inner.borrow_mut().settled = Some(status);
        self.publish();
    }

    /// Mark an identity call in flight until the returned guard drops.
    pub(crate) fn begin_call(&self) -> InFlight {
        self.inner.borrow_mut().in_flight += 1;
        self.publish();
        InFlight { store: self.clone() }
    }

    fn publish(&self) {
        if self.inner.borrow().dispatching {
            // Picked up by the enclosing round once it finishes.
            return;
        }
        let _round = Dispatch::enter(&self.inner);
        loop {
            let (status, listeners) = {
                let mut inner = self.inner.borrow_mut();
                let status = inner.current();
                if status == inner.observed {
                    return;
                }
                inner.observed = status.clone();
                let listeners: Vec<(u64, Listener)> = inner.listeners.clone();
                (status, listeners)
            };

            tracing::debug!(status = status.as_str(), subscribers = listeners.len(), "auth status changed");
            for (id, listener) in listeners {
                if self.inner.borrow().is_subscribed(id) {
                    listener(&status);
                }
            }
        }
    }

    fn unsubscribe(inner: &Rc<RefCell<Inner>>, id: u64) {
        inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
    }
}

/// Marks a broadcast round in progress; cleared on every exit path.
struct Dispatch<'a> {
    inner: &'a RefCell<Inner>,
}

impl<'a> Dispatch<'a> {
    fn enter(inner: &'a RefCell<Inner>) -> Self {
        inner.borrow_mut().dispatching = true;
        Self { inner }
    }
}

impl Drop for Dispatch<'_> {
    fn drop(&mut self) {
        self.inner.borrow_mut().dispatching = false;
    }
}

/// Registration returned by [`AuthStore::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<RefCell<Inner>>,
    id: u64,
}

impl Subscription {
    /// Release now instead of at drop.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            AuthStore::unsubscribe(&inner, self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// In-flight marker for an identity call; released on every exit path.
pub(crate) struct InFlight {
    store: AuthStore,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        {
            let mut inner = self.store.inner.borrow_mut();
            inner.in_flight = inner.in_flight.saturating_sub(1);
        }
        self.store.publish();
    }
}
