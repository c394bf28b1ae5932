//! End-to-end guard scenarios against an in-memory status store.
//!
//! Each scenario runs the same two steps a guard activation performs: one
//! render-time evaluation, then the gated redirect. `Activation` records
//! whether the protected outlet would be painted and every navigation call.

use std::cell::RefCell;

use foodhub_portal::routes::AppRoute;
use foodhub_portal::state::access::{GuardDecision, Protection, evaluate};
use foodhub_portal::state::status::Role;
use foodhub_portal::state::store::{MemoryStore, StatusStore};
use foodhub_portal::util::redirect::RedirectGate;

struct Activation {
    rendered_outlet: bool,
    navigations: Vec<String>,
}

fn activate(protection: Protection, store: &MemoryStore, passes: usize) -> Activation {
    let decision = evaluate(protection, store);
    let gate = RedirectGate::new();
    let navigations = RefCell::new(Vec::new());
    for _ in 0..passes {
        gate.issue(decision, |path| navigations.borrow_mut().push(path.to_owned()));
    }
    Activation {
        rendered_outlet: decision.renders_protected(),
        navigations: navigations.into_inner(),
    }
}

#[test]
fn approved_restaurant_renders_outlet_without_navigation() {
    let store = MemoryStore::with_entries([("restaurant_profile_status", "approved")]);
    let run = activate(Protection::Role(Role::RestaurantPartner), &store, 2);
    assert!(run.rendered_outlet);
    assert!(run.navigations.is_empty());
}

#[test]
fn pending_restaurant_renders_nothing_and_replaces_to_pending() {
    let store = MemoryStore::with_entries([("restaurant_profile_status", "pending")]);
    let run = activate(Protection::Role(Role::RestaurantPartner), &store, 1);
    assert!(!run.rendered_outlet);
    assert_eq!(run.navigations, vec!["/restaurant/pending".to_owned()]);
}

#[test]
fn missing_shipper_status_replaces_to_shipper_auth() {
    let store = MemoryStore::new();
    let run = activate(Protection::Role(Role::Shipper), &store, 1);
    assert!(!run.rendered_outlet);
    assert_eq!(run.navigations, vec!["/shipper/auth".to_owned()]);
}

#[test]
fn unsubmitted_shipper_replaces_to_application() {
    let store = MemoryStore::with_entries([("shipper_profile_status", "unsubmitted")]);
    let run = activate(Protection::Role(Role::Shipper), &store, 1);
    assert!(!run.rendered_outlet);
    assert_eq!(run.navigations, vec!["/shipper/application".to_owned()]);
}

#[test]
fn session_guard_requires_literal_true() {
    for raw in [None, Some("false"), Some("TRUE"), Some("1"), Some("")] {
        let store = match raw {
            Some(value) => MemoryStore::with_entries([("user_logged_in", value)]),
            None => MemoryStore::new(),
        };
        let run = activate(Protection::Session, &store, 1);
        assert!(!run.rendered_outlet, "{raw:?}");
        assert_eq!(run.navigations, vec!["/".to_owned()], "{raw:?}");
    }

    let store = MemoryStore::with_entries([("user_logged_in", "true")]);
    let run = activate(Protection::Session, &store, 1);
    assert!(run.rendered_outlet);
    assert!(run.navigations.is_empty());
}

#[test]
fn undefined_paths_reach_not_found_regardless_of_status() {
    let store = MemoryStore::with_entries([
        ("restaurant_profile_status", "approved"),
        ("shipper_profile_status", "approved"),
        ("user_logged_in", "true"),
    ]);
    assert_eq!(store.get("user_logged_in").as_deref(), Some("true"));
    for path in ["/does-not-exist", "/restaurant/settings", "/shipper/dashboard/map"] {
        assert_eq!(AppRoute::resolve(path), None, "{path}");
    }
}

#[test]
fn repeated_evaluation_issues_a_single_redirect() {
    let store = MemoryStore::with_entries([("restaurant_profile_status", "unsubmitted")]);
    let run = activate(Protection::Role(Role::RestaurantPartner), &store, 3);
    assert_eq!(run.navigations, vec!["/restaurant/application".to_owned()]);
}

#[test]
fn non_approved_statuses_never_render_outlet() {
    for raw in ["pending", "unsubmitted", "", "Approved", "revoked"] {
        for role in Role::ALL {
            let store = MemoryStore::with_entries([(role.status_key(), raw)]);
            let run = activate(Protection::Role(role), &store, 1);
            assert!(!run.rendered_outlet, "{role:?} with {raw:?}");
            assert_eq!(run.navigations.len(), 1, "{role:?} with {raw:?}");
        }
    }
}

#[test]
fn reactivation_picks_up_external_status_change() {
    let store = MemoryStore::with_entries([("shipper_profile_status", "pending")]);
    let first = activate(Protection::Role(Role::Shipper), &store, 1);
    assert_eq!(first.navigations, vec!["/shipper/pending".to_owned()]);

    store.set("shipper_profile_status", "approved").unwrap();
    let second = activate(Protection::Role(Role::Shipper), &store, 1);
    assert!(second.rendered_outlet);
    assert!(second.navigations.is_empty());

    store.remove("shipper_profile_status").unwrap();
    assert_eq!(
        evaluate(Protection::Role(Role::Shipper), &store),
        GuardDecision::Redirect(AppRoute::SignIn(Role::Shipper))
    );
}
