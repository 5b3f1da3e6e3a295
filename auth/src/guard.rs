//! Route guards: per-view render/redirect policy.
//!
//! DESIGN
//! ======
//! `evaluate` is a pure function of status and view access, so views can
//! derive what to render without side effects. `RouteGuard` owns the one side
//! effect, navigation, and applies it once per distinct redirect target while
//! its subscription is alive. Dropping the guard releases the subscription.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::service::AuthService;
use crate::status::AuthStatus;
use crate::store::Subscription;

pub const DEFAULT_SIGN_IN_PATH: &str = "/login";
pub const DEFAULT_LANDING_PATH: &str = "/";

/// What a view requires of the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAccess {
    /// Protected content; unauthenticated viewers go to sign-in.
    RequiresSession,
    /// Entry views such as sign-in; authenticated viewers go to the landing view.
    RequiresNoSession,
    /// Always rendered.
    Public,
}

/// Navigation targets used by redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardRoutes {
    pub sign_in: String,
    pub landing: String,
}

impl Default for GuardRoutes {
    fn default() -> Self {
        Self { sign_in: DEFAULT_SIGN_IN_PATH.to_owned(), landing: DEFAULT_LANDING_PATH.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Status unresolved: show a placeholder, do not navigate.
    Checking,
    Redirect(String),
    Render,
}

/// Decide what a view should do for the given status.
#[must_use]
pub fn evaluate(status: &AuthStatus, access: ViewAccess, routes: &GuardRoutes) -> GuardDecision {
    match (access, status) {
        (ViewAccess::Public, _) => GuardDecision::Render,
        (_, AuthStatus::Initializing) => GuardDecision::Checking,
        (ViewAccess::RequiresSession, AuthStatus::Unauthenticated) => {
            GuardDecision::Redirect(routes.sign_in.clone())
        }
        (ViewAccess::RequiresNoSession, AuthStatus::Authenticated(_)) => {
            GuardDecision::Redirect(routes.landing.clone())
        }
        (ViewAccess::RequiresSession, AuthStatus::Authenticated(_))
        | (ViewAccess::RequiresNoSession, AuthStatus::Unauthenticated) => GuardDecision::Render,
    }
}

/// Side-effect sink for redirects (the router, in the UI).
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, path: &str) {
        self(path);
    }
}

struct GuardState<N> {
    access: ViewAccess,
    routes: GuardRoutes,
    navigator: N,
    decision: RefCell<GuardDecision>,
}

impl<N: Navigator> GuardState<N> {
    fn react(&self, status: &AuthStatus) {
        let next = evaluate(status, self.access, &self.routes);
        let previous = self.decision.replace(next.clone());
        if let GuardDecision::Redirect(path) = next {
            if previous != GuardDecision::Redirect(path.clone()) {
                tracing::debug!(%path, access = ?self.access, status = status.as_str(), "route guard redirect");
                self.navigator.navigate_to(&path);
            }
        }
    }
}

/// Active guard for one mounted view.
#[must_use = "dropping a RouteGuard deactivates it immediately"]
pub struct RouteGuard {
    decision: Box<dyn Fn() -> GuardDecision>,
    _subscription: Subscription,
}

impl RouteGuard {
    /// Evaluate now and on every status change until dropped.
    pub fn activate<N>(service: &AuthService, access: ViewAccess, routes: GuardRoutes, navigator: N) -> Self
    where
        N: Navigator + 'static,
    {
        let state = Rc::new(GuardState {
            access,
            routes,
            navigator,
            decision: RefCell::new(GuardDecision::Checking),
        });

        let listener = state.clone();
        let subscription = service.subscribe(move |status| listener.react(status));
        state.react(&service.status());

        Self {
            decision: Box::new(move || state.decision.borrow().clone()),
            _subscription: subscription,
        }
    }

    /// Most recent decision.
    #[must_use]
    pub fn decision(&self) -> GuardDecision {
        (self.decision)()
    }
}
