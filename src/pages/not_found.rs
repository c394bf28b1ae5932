//! Catch-all page for unmatched paths.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p class="not-found-page__path">{move || location.pathname.get()}</p>
            <A href=AppRoute::Landing.path()>"Back to FoodHub"</A>
        </div>
    }
}
