//! Shipper dashboard, rendered behind the shipper role guard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sign_out::SignOutButton;
use crate::routes::AppRoute;
use crate::state::status::Role;

#[component]
fn ShipperNav() -> impl IntoView {
    view! {
        <nav class="dashboard-nav">
            <A href=AppRoute::Dashboard(Role::Shipper).path()>"Overview"</A>
            <A href=AppRoute::ShipperDeliveries.path()>"Deliveries"</A>
            <SignOutButton/>
        </nav>
    }
}

#[component]
pub fn ShipperDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <ShipperNav/>
            <h1>"Shipper dashboard"</h1>
            <p>"You are approved to deliver. Pick up assignments under Deliveries."</p>
        </div>
    }
}

#[component]
pub fn ShipperDeliveriesPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <ShipperNav/>
            <h1>"Deliveries"</h1>
            <p class="dashboard-page__empty">"No deliveries assigned."</p>
        </div>
    }
}
