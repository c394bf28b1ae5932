//! Restaurant partner dashboard, rendered behind the partner role guard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sign_out::SignOutButton;
use crate::routes::AppRoute;
use crate::state::status::Role;

#[component]
fn RestaurantNav() -> impl IntoView {
    view! {
        <nav class="dashboard-nav">
            <A href=AppRoute::Dashboard(Role::RestaurantPartner).path()>"Overview"</A>
            <A href=AppRoute::RestaurantOrders.path()>"Orders"</A>
            <SignOutButton/>
        </nav>
    }
}

#[component]
pub fn RestaurantDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <RestaurantNav/>
            <h1>"Restaurant dashboard"</h1>
            <p>"Your storefront is live. Incoming orders appear under Orders."</p>
        </div>
    }
}

#[component]
pub fn RestaurantOrdersPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <RestaurantNav/>
            <h1>"Orders"</h1>
            <p class="dashboard-page__empty">"No open orders."</p>
        </div>
    }
}
