#![cfg(not(feature = "csr"))]

use leptos::prelude::*;
use leptos_router::components::provide_server_redirect;
use leptos_router::location::RequestUrl;

use super::*;
use crate::routes::AppRoute;
use crate::state::store::MemoryStore;

const NOT_FOUND: &str = "Page not found";

/// Server-render the whole app at `path` against `store`.
fn render_app(path: &str, store: MemoryStore) -> String {
    Owner::new().with(|| {
        provide_context(RequestUrl::new(path));
        provide_context(StoreHandle::new(store));
        provide_server_redirect(|_| {});
        view! { <App/> }.to_html()
    })
}

fn fully_approved() -> MemoryStore {
    MemoryStore::with_entries([
        ("restaurant_profile_status", "approved"),
        ("shipper_profile_status", "approved"),
        ("user_logged_in", "true"),
    ])
}

#[test]
fn unmatched_paths_render_not_found() {
    for path in [
        "/does-not-exist",
        "/restaurant",
        "/restaurant/dashboard/menu",
        "/user/orders/42",
        "/shipper/dashboard/map",
    ] {
        assert!(render_app(path, MemoryStore::new()).contains(NOT_FOUND), "{path}");
    }
}

#[test]
fn unmatched_paths_render_not_found_regardless_of_status() {
    for path in ["/nowhere", "/restaurant/settings"] {
        assert!(render_app(path, fully_approved()).contains(NOT_FOUND), "{path}");
    }
}

#[test]
fn every_catalogued_route_is_registered() {
    for route in AppRoute::ALL {
        for store in [MemoryStore::new(), fully_approved()] {
            let html = render_app(route.path(), store);
            assert!(!html.contains(NOT_FOUND), "{route:?}: {html}");
        }
    }
}

#[test]
fn approved_partner_sees_dashboard() {
    let html = render_app("/restaurant/dashboard", fully_approved());
    assert!(html.contains("Restaurant dashboard"), "{html}");
    let html = render_app("/shipper/dashboard/deliveries", fully_approved());
    assert!(html.contains("No deliveries assigned."), "{html}");
}

#[test]
fn unapproved_partner_dashboard_stays_blank() {
    let store = MemoryStore::with_entries([("restaurant_profile_status", "pending")]);
    let html = render_app("/restaurant/dashboard/orders", store);
    assert!(!html.contains("No open orders."), "{html}");
    assert!(!html.contains(NOT_FOUND), "{html}");
}

#[test]
fn onboarding_pages_render_without_any_status() {
    let html = render_app("/shipper/pending", MemoryStore::new());
    assert!(html.contains("Shipper application under review"), "{html}");
    let html = render_app("/restaurant/application", MemoryStore::new());
    assert!(html.contains("Complete your restaurant partner application"), "{html}");
}
