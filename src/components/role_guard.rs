//! Route guard for a partner role's protected subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the view of a parent route. Each activation samples the role's
//! status slot once, before anything is painted. Only an approved status
//! renders the nested outlet; every other status renders nothing and
//! replaces the location with the role's next onboarding step.

#[cfg(test)]
#[path = "role_guard_test.rs"]
mod role_guard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::state::access::{Protection, evaluate};
use crate::state::status::Role;
use crate::state::store::StoreHandle;
use crate::util::redirect::install_guard_redirect;

/// Renders the child route outlet only for an approved `role`.
#[component]
pub fn RoleGuard(role: Role) -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let navigate = use_navigate();

    // One read per activation; the effect reuses this value.
    let decision = evaluate(Protection::Role(role), &*store);
    install_guard_redirect(decision, navigate);

    if decision.renders_protected() {
        view! { <Outlet/> }.into_any()
    } else {
        ().into_any()
    }
}
