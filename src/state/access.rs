//! Guard decisions over the status store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `evaluate` is the single decision path shared by both guard components:
//! it reads the store once and returns either `Render` or one redirect route.
//! Components suppress protected content from the returned value and hand
//! the same value to the navigation effect, so the two can never disagree.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::config::STORAGE_KEYS;
use crate::routes::AppRoute;
use crate::state::session::SessionFlag;
use crate::state::status::{Role, classify};
use crate::state::store::StatusStore;

/// What a protected subtree is gated on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Protection {
    /// Multi-state onboarding status of a partner role.
    Role(Role),
    /// Binary consumer login flag.
    Session,
}

impl Protection {
    /// Storage key sampled by this protection.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Protection::Role(role) => role.status_key(),
            Protection::Session => STORAGE_KEYS.user_session,
        }
    }

    /// Least-privileged route for this protection.
    pub const fn entry_route(self) -> AppRoute {
        match self {
            Protection::Role(role) => role.entry_route(),
            Protection::Session => AppRoute::Landing,
        }
    }
}

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected outlet unmodified.
    Render,
    /// Render nothing and replace the location with this route.
    Redirect(AppRoute),
}

impl GuardDecision {
    pub fn renders_protected(self) -> bool {
        matches!(self, GuardDecision::Render)
    }

    pub fn redirect_target(self) -> Option<AppRoute> {
        match self {
            GuardDecision::Render => None,
            GuardDecision::Redirect(route) => Some(route),
        }
    }
}

/// Sample the store once and decide for `protection`.
pub fn evaluate<S: StatusStore + ?Sized>(protection: Protection, store: &S) -> GuardDecision {
    let raw = store.get(protection.storage_key());
    let decision = decide(protection, raw.as_deref());
    match decision {
        GuardDecision::Render => log::debug!("{protection:?} guard: access granted"),
        GuardDecision::Redirect(route) => {
            log::info!("{protection:?} guard: stored {raw:?}, redirecting to {}", route.path());
        }
    }
    decision
}

/// Pure decision for a raw stored value.
pub fn decide(protection: Protection, raw: Option<&str>) -> GuardDecision {
    match protection {
        Protection::Role(role) => match classify(role, raw).redirect {
            None => GuardDecision::Render,
            Some(route) => GuardDecision::Redirect(route),
        },
        Protection::Session => {
            if SessionFlag::from_stored(raw).is_logged_in() {
                GuardDecision::Render
            } else {
                GuardDecision::Redirect(AppRoute::Landing)
            }
        }
    }
}
