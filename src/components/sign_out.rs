//! Sign-out control for protected dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Status slots stay valid until something clears them. Signing out is that
//! something: it drops the slot behind the guard protecting the current path
//! and leaves through that guard's entry route.

#[cfg(test)]
#[path = "sign_out_test.rs"]
mod sign_out_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::AppRoute;
use crate::state::access::Protection;
use crate::state::store::{StatusStore, StoreHandle};
use crate::util::redirect::replace_options;

/// Guard protecting `path`, if it is a registered protected route.
pub fn protection_for_path(path: &str) -> Option<Protection> {
    AppRoute::resolve(path).and_then(AppRoute::protection)
}

/// Clear the slot `protection` reads and return where to go next.
///
/// A failed removal is logged; the caller still navigates away.
pub fn clear_access<S: StatusStore + ?Sized>(store: &S, protection: Protection) -> AppRoute {
    let key = protection.storage_key();
    match store.remove(key) {
        Ok(()) => log::info!("signed out of {protection:?}, cleared {key}"),
        Err(e) => log::warn!("sign-out could not clear {key}: {e}"),
    }
    protection.entry_route()
}

#[component]
pub fn SignOutButton() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let on_click = move |_| {
        let path = pathname.get_untracked();
        let Some(protection) = protection_for_path(&path) else {
            log::warn!("sign-out requested outside a protected route: {path}");
            return;
        };
        let next = clear_access(&*store, protection);
        navigate(next.path(), replace_options());
    };

    view! {
        <button class="sign-out-button" type="button" on:click=on_click>
            "Sign out"
        </button>
    }
}
