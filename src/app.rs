//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::{role_guard::RoleGuard, session_guard::SessionGuard};
use crate::pages::{
    consumer::{ConsumerHomePage, ConsumerOrdersPage},
    landing::LandingPage,
    not_found::NotFoundPage,
    onboarding::{ApplicationPage, PendingPage, SignInPage},
    restaurant::{RestaurantDashboardPage, RestaurantOrdersPage},
    shipper::{ShipperDashboardPage, ShipperDeliveriesPage},
};
use crate::state::status::Role;
use crate::state::store::StoreHandle;

/// Root application component.
///
/// Provides the status store (the browser store unless a host already
/// provided one) and sets up client-side routing. Paths here must stay in
/// step with `routes::AppRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let store = use_context::<StoreHandle>().unwrap_or_else(StoreHandle::browser);
    provide_context(store);

    view! {
        <Title text="FoodHub"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>

                <ParentRoute path=StaticSegment("user") view=SessionGuard>
                    <Route path=StaticSegment("") view=ConsumerHomePage/>
                    <Route path=StaticSegment("orders") view=ConsumerOrdersPage/>
                </ParentRoute>

                <Route
                    path=(StaticSegment("restaurant"), StaticSegment("auth"))
                    view=|| view! { <SignInPage role=Role::RestaurantPartner/> }
                />
                <Route
                    path=(StaticSegment("restaurant"), StaticSegment("application"))
                    view=|| view! { <ApplicationPage role=Role::RestaurantPartner/> }
                />
                <Route
                    path=(StaticSegment("restaurant"), StaticSegment("pending"))
                    view=|| view! { <PendingPage role=Role::RestaurantPartner/> }
                />
                <ParentRoute
                    path=(StaticSegment("restaurant"), StaticSegment("dashboard"))
                    view=|| view! { <RoleGuard role=Role::RestaurantPartner/> }
                >
                    <Route path=StaticSegment("") view=RestaurantDashboardPage/>
                    <Route path=StaticSegment("orders") view=RestaurantOrdersPage/>
                </ParentRoute>

                <Route
                    path=(StaticSegment("shipper"), StaticSegment("auth"))
                    view=|| view! { <SignInPage role=Role::Shipper/> }
                />
                <Route
                    path=(StaticSegment("shipper"), StaticSegment("application"))
                    view=|| view! { <ApplicationPage role=Role::Shipper/> }
                />
                <Route
                    path=(StaticSegment("shipper"), StaticSegment("pending"))
                    view=|| view! { <PendingPage role=Role::Shipper/> }
                />
                <ParentRoute
                    path=(StaticSegment("shipper"), StaticSegment("dashboard"))
                    view=|| view! { <RoleGuard role=Role::Shipper/> }
                >
                    <Route path=StaticSegment("") view=ShipperDashboardPage/>
                    <Route path=StaticSegment("deliveries") view=ShipperDeliveriesPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
