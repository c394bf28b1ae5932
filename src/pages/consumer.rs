//! Consumer area, rendered behind the session guard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sign_out::SignOutButton;
use crate::routes::AppRoute;

#[component]
fn ConsumerNav() -> impl IntoView {
    view! {
        <nav class="dashboard-nav">
            <A href=AppRoute::ConsumerHome.path()>"Restaurants"</A>
            <A href=AppRoute::ConsumerOrders.path()>"My orders"</A>
            <SignOutButton/>
        </nav>
    }
}

#[component]
pub fn ConsumerHomePage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <ConsumerNav/>
            <h1>"Hungry?"</h1>
            <p>"Pick a restaurant near you to start an order."</p>
        </div>
    }
}

#[component]
pub fn ConsumerOrdersPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <ConsumerNav/>
            <h1>"My orders"</h1>
            <p class="dashboard-page__empty">"You have not ordered anything yet."</p>
        </div>
    }
}
