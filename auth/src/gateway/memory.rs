//! In-process identity gateway.
//!
//! Scripted stand-in for a real provider. Sign-in and sign-out results are
//! queued ahead of time, either ready or deferred until the test resolves
//! them. Successful actions echo a state-change notification the way a real
//! provider does.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::{GatewaySubscription, IdentityGateway, ProviderId, StateListener};
use crate::error::AuthError;
use crate::session::Session;

type Listener = Rc<dyn Fn(Option<Session>)>;

enum Scripted<T> {
    Ready(Result<T, AuthError>),
    Deferred(oneshot::Receiver<Result<T, AuthError>>),
}

/// Resolves a deferred gateway call.
pub struct Deferred<T> {
    tx: oneshot::Sender<Result<T, AuthError>>,
}

impl<T> Deferred<T> {
    /// Complete the pending call. A no-op if the call was abandoned.
    pub fn resolve(self, result: Result<T, AuthError>) {
        let _ = self.tx.send(result);
    }
}

#[derive(Default)]
struct Inner {
    next_listener_id: u64,
    listeners: Vec<(u64, Listener)>,
    sign_in: VecDeque<Scripted<Session>>,
    sign_out: VecDeque<Scripted<()>>,
    current: Option<Session>,
    silent: bool,
    sign_in_calls: usize,
    sign_out_calls: usize,
}

/// Scriptable gateway backed by plain memory.
#[derive(Clone, Default)]
pub struct MemoryGateway {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose successful actions do not emit notifications.
    #[must_use]
    pub fn silent() -> Self {
        let gateway = Self::default();
        gateway.inner.borrow_mut().silent = true;
        gateway
    }

    /// Queue the result of the next sign-in call.
    pub fn script_sign_in(&self, result: Result<Session, AuthError>) {
        self.inner.borrow_mut().sign_in.push_back(Scripted::Ready(result));
    }

    /// Queue a sign-in call that stays pending until resolved.
    #[must_use]
    pub fn defer_sign_in(&self) -> Deferred<Session> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().sign_in.push_back(Scripted::Deferred(rx));
        Deferred { tx }
    }

    /// Queue the result of the next sign-out call.
    pub fn script_sign_out(&self, result: Result<(), AuthError>) {
        self.inner.borrow_mut().sign_out.push_back(Scripted::Ready(result));
    }

    /// Queue a sign-out call that stays pending until resolved.
    #[must_use]
    pub fn defer_sign_out(&self) -> Deferred<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().sign_out.push_back(Scripted::Deferred(rx));
        Deferred { tx }
    }

    /// Deliver a state-change notification to every listener.
    pub fn emit(&self, session: Option<Session>) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            inner.current.clone_from(&session);
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(session.clone());
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.inner.borrow().current.clone()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    #[must_use]
    pub fn sign_in_calls(&self) -> usize {
        self.inner.borrow().sign_in_calls
    }

    #[must_use]
    pub fn sign_out_calls(&self) -> usize {
        self.inner.borrow().sign_out_calls
    }

    fn echo(&self, session: Option<Session>) {
        let silent = self.inner.borrow().silent;
        if silent {
            self.inner.borrow_mut().current = session;
        } else {
            self.emit(session);
        }
    }
}

async fn settle<T>(scripted: Option<Scripted<T>>, unscripted: Result<T, AuthError>) -> Result<T, AuthError> {
    match scripted {
        None => unscripted,
        Some(Scripted::Ready(result)) => result,
        Some(Scripted::Deferred(rx)) => rx
            .await
            .unwrap_or_else(|_| Err(AuthError::Network("deferred gateway call dropped".to_owned()))),
    }
}

#[async_trait(?Send)]
impl IdentityGateway for MemoryGateway {
    fn on_state_change(&self, listener: StateListener) -> GatewaySubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Rc::from(listener)));
            id
        };
        let weak = Rc::downgrade(&self.inner);
        GatewaySubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }

    async fn sign_in_interactive(&self, provider: ProviderId) -> Result<Session, AuthError> {
        let scripted = {
            let mut inner = self.inner.borrow_mut();
            inner.sign_in_calls += 1;
            inner.sign_in.pop_front()
        };
        let unscripted = Err(AuthError::Provider {
            code: "memory/unscripted".to_owned(),
            message: format!("no sign-in result queued for {}", provider.as_str()),
        });
        let session = settle(scripted, unscripted).await?;
        self.echo(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let scripted = {
            let mut inner = self.inner.borrow_mut();
            inner.sign_out_calls += 1;
            inner.sign_out.pop_front()
        };
        settle(scripted, Ok(())).await?;
        self.echo(None);
        Ok(())
    }
}
