#![cfg(not(feature = "csr"))]

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Route, Router, Routes, provide_server_redirect};
use leptos_router::location::RequestUrl;

use super::*;
use crate::routes::AppRoute;
use crate::state::store::MemoryStore;

const PROTECTED: &str = "PROTECTED-ORDERS";

/// Server-render `/user` and collect every redirect the guard requests.
fn render_consumer(raw: Option<&str>) -> (String, Vec<String>) {
    let store = match raw {
        Some(value) => MemoryStore::with_entries([("user_logged_in", value)]),
        None => MemoryStore::new(),
    };
    let redirects = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&redirects);

    let html = Owner::new().with(|| {
        provide_context(RequestUrl::new("/user"));
        provide_context(StoreHandle::new(store));
        provide_server_redirect(move |path| sink.lock().unwrap().push(path.to_owned()));
        view! {
            <Router>
                <Routes fallback=|| "NO-ROUTE">
                    <ParentRoute path=StaticSegment("user") view=SessionGuard>
                        <Route path=StaticSegment("") view=|| view! { <p>{PROTECTED}</p> }/>
                    </ParentRoute>
                </Routes>
            </Router>
        }
        .to_html()
    });
    let redirects = redirects.lock().unwrap().clone();
    (html, redirects)
}

#[test]
fn logged_in_consumer_renders_outlet_without_redirect() {
    let (html, redirects) = render_consumer(Some("true"));
    assert!(html.contains(PROTECTED), "{html}");
    assert!(redirects.is_empty(), "{redirects:?}");
}

#[test]
fn logged_out_consumer_is_sent_to_landing() {
    for raw in [None, Some("false"), Some("TRUE"), Some("")] {
        let (html, redirects) = render_consumer(raw);
        assert!(!html.contains(PROTECTED), "{raw:?}: {html}");
        assert_eq!(redirects.len(), 1, "{raw:?}: {redirects:?}");
        assert_eq!(
            AppRoute::resolve(&redirects[0]),
            Some(AppRoute::Landing),
            "{raw:?}: {redirects:?}"
        );
    }
}
