//! Guard redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards decide at render time and fire navigation from a post-mount
//! effect. Navigation always replaces the current history entry, and the
//! gate below keeps repeated evaluations from stacking redirects.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::access::GuardDecision;

/// Navigation options for guard redirects: replace, never push.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Fires each redirect target at most once per guard activation.
///
/// A `Render` decision clears the gate, so a later redirect after the status
/// changes fires again. The last decision applied wins.
#[derive(Clone, Debug, Default)]
pub struct RedirectGate {
    issued: Arc<Mutex<Option<AppRoute>>>,
}

impl RedirectGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `decision`, calling `navigate` only for a target not yet issued.
    ///
    /// Returns whether navigation was fired.
    pub fn issue<F: FnOnce(&str)>(&self, decision: GuardDecision, navigate: F) -> bool {
        let mut issued = self.issued.lock().unwrap_or_else(PoisonError::into_inner);
        let GuardDecision::Redirect(route) = decision else {
            *issued = None;
            return false;
        };
        if *issued == Some(route) {
            log::debug!("redirect to {} already issued", route.path());
            return false;
        }
        *issued = Some(route);
        drop(issued);
        navigate(route.path());
        true
    }

    /// Target most recently fired, if the last decision was a redirect.
    #[cfg(test)]
    pub(crate) fn issued(&self) -> Option<AppRoute> {
        *self.issued.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Fire the redirect for `decision` after mount, replacing history.
pub fn install_guard_redirect<F>(decision: GuardDecision, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let gate = RedirectGate::new();
    Effect::new(move || {
        let navigate = navigate.clone();
        gate.issue(decision, move |path| navigate(path, replace_options()));
    });
}
