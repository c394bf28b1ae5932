//! Onboarding status policy for the partner roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and onboarding flows persist one status token per role. Guards
//! classify whatever is stored into a closed set of states, and every state
//! other than `Approved` maps to exactly one redirect route for that role.
//!
//! Only the exact tokens `"approved"`, `"pending"` and `"unsubmitted"` are
//! recognized. Anything else, including an absent key, is `Unknown` and sends
//! the user back to the role's sign-in entry.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::config::STORAGE_KEYS;
use crate::routes::AppRoute;

/// A user category with its own onboarding lifecycle and status slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    RestaurantPartner,
    Shipper,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::RestaurantPartner, Role::Shipper];

    /// Storage key of this role's status slot.
    pub const fn status_key(self) -> &'static str {
        match self {
            Role::RestaurantPartner => STORAGE_KEYS.restaurant_status,
            Role::Shipper => STORAGE_KEYS.shipper_status,
        }
    }

    /// Human-readable role name for page copy.
    pub const fn label(self) -> &'static str {
        match self {
            Role::RestaurantPartner => "Restaurant partner",
            Role::Shipper => "Shipper",
        }
    }

    /// Route the role lands on once approved.
    pub const fn home_route(self) -> AppRoute {
        AppRoute::Dashboard(self)
    }

    /// Least-privileged entry point for this role.
    pub const fn entry_route(self) -> AppRoute {
        AppRoute::SignIn(self)
    }
}

/// Closed classification of a stored role status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthorizationStatus {
    /// Onboarding finished and accepted; the only state that passes a guard.
    Approved,
    /// Application submitted and under review.
    Pending,
    /// Account exists but the application form was never submitted.
    Unsubmitted,
    /// Absent, empty, or unrecognized value.
    Unknown,
}

impl AuthorizationStatus {
    const RECOGNIZED: [Self; 3] = [Self::Approved, Self::Pending, Self::Unsubmitted];

    /// Classify a raw stored value. Matching is exact and case-sensitive.
    pub fn from_stored(raw: Option<&str>) -> Self {
        Self::RECOGNIZED
            .into_iter()
            .find(|status| status.token() == raw)
            .unwrap_or(Self::Unknown)
    }

    /// Storage token for this status. `Unknown` has no token.
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Approved => Some("approved"),
            Self::Pending => Some("pending"),
            Self::Unsubmitted => Some("unsubmitted"),
            Self::Unknown => None,
        }
    }

    /// Where `role` must be sent when holding this status, or `None` to pass.
    pub const fn redirect_for(self, role: Role) -> Option<AppRoute> {
        match self {
            Self::Approved => None,
            Self::Pending => Some(AppRoute::Pending(role)),
            Self::Unsubmitted => Some(AppRoute::Application(role)),
            Self::Unknown => Some(role.entry_route()),
        }
    }
}

/// Result of classifying one role's stored status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub status: AuthorizationStatus,
    /// `None` exactly when `status` is `Approved`.
    pub redirect: Option<AppRoute>,
}

/// Map a role and its raw stored status to a classification and redirect.
///
/// Total over every input; never fails.
pub fn classify(role: Role, raw: Option<&str>) -> Classification {
    let status = AuthorizationStatus::from_stored(raw);
    Classification {
        status,
        redirect: status.redirect_for(role),
    }
}
