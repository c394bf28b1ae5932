//! Catalogue of every route registered with the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards redirect to `AppRoute` values rather than raw strings, and pages
//! build links from them. `app::App` registers the same paths with
//! `leptos_router`; anything `resolve` does not know falls through to the
//! not-found page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::access::Protection;
use crate::state::status::Role;

/// A registered application route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    ConsumerHome,
    ConsumerOrders,
    SignIn(Role),
    Application(Role),
    Pending(Role),
    Dashboard(Role),
    RestaurantOrders,
    ShipperDeliveries,
}

impl AppRoute {
    pub const ALL: [AppRoute; 13] = [
        AppRoute::Landing,
        AppRoute::ConsumerHome,
        AppRoute::ConsumerOrders,
        AppRoute::SignIn(Role::RestaurantPartner),
        AppRoute::Application(Role::RestaurantPartner),
        AppRoute::Pending(Role::RestaurantPartner),
        AppRoute::Dashboard(Role::RestaurantPartner),
        AppRoute::RestaurantOrders,
        AppRoute::SignIn(Role::Shipper),
        AppRoute::Application(Role::Shipper),
        AppRoute::Pending(Role::Shipper),
        AppRoute::Dashboard(Role::Shipper),
        AppRoute::ShipperDeliveries,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::ConsumerHome => "/user",
            AppRoute::ConsumerOrders => "/user/orders",
            AppRoute::SignIn(Role::RestaurantPartner) => "/restaurant/auth",
            AppRoute::Application(Role::RestaurantPartner) => "/restaurant/application",
            AppRoute::Pending(Role::RestaurantPartner) => "/restaurant/pending",
            AppRoute::Dashboard(Role::RestaurantPartner) => "/restaurant/dashboard",
            AppRoute::RestaurantOrders => "/restaurant/dashboard/orders",
            AppRoute::SignIn(Role::Shipper) => "/shipper/auth",
            AppRoute::Application(Role::Shipper) => "/shipper/application",
            AppRoute::Pending(Role::Shipper) => "/shipper/pending",
            AppRoute::Dashboard(Role::Shipper) => "/shipper/dashboard",
            AppRoute::ShipperDeliveries => "/shipper/dashboard/deliveries",
        }
    }

    /// Guard in front of this route, if any.
    pub const fn protection(self) -> Option<Protection> {
        match self {
            AppRoute::ConsumerHome | AppRoute::ConsumerOrders => Some(Protection::Session),
            AppRoute::Dashboard(role) => Some(Protection::Role(role)),
            AppRoute::RestaurantOrders => Some(Protection::Role(Role::RestaurantPartner)),
            AppRoute::ShipperDeliveries => Some(Protection::Role(Role::Shipper)),
            AppRoute::Landing
            | AppRoute::SignIn(_)
            | AppRoute::Application(_)
            | AppRoute::Pending(_) => None,
        }
    }

    /// Match a location path against the catalogue.
    ///
    /// Query strings, fragments and trailing slashes are ignored. `None`
    /// means the catch-all not-found page handles the path.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        if !normalized.starts_with('/') {
            return None;
        }
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}
