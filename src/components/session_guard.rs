//! Guard for the consumer area, gated on the login flag.

#[cfg(test)]
#[path = "session_guard_test.rs"]
mod session_guard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::{Outlet, Redirect};

use crate::state::access::{GuardDecision, Protection, evaluate};
use crate::state::store::StoreHandle;
use crate::util::redirect::replace_options;

/// Renders the child route outlet when a consumer login is recorded,
/// otherwise redirects to the landing page during render.
#[component]
pub fn SessionGuard() -> impl IntoView {
    let store = expect_context::<StoreHandle>();

    match evaluate(Protection::Session, &*store) {
        GuardDecision::Render => view! { <Outlet/> }.into_any(),
        GuardDecision::Redirect(route) => {
            view! { <Redirect path=route.path() options=replace_options()/> }.into_any()
        }
    }
}
