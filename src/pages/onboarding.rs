//! Onboarding step pages reached through guard redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! These pages only display where the user stands. Producing or updating a
//! role status is the job of the partner onboarding service, which writes the
//! status slot; the guard picks the change up on the next activation.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::state::status::{AuthorizationStatus, Role};

/// Heading and body copy for the step a non-approved status lands on.
pub fn step_copy(role: Role, status: AuthorizationStatus) -> (String, String) {
    let label = role.label();
    match status {
        AuthorizationStatus::Pending => (
            format!("{label} application under review"),
            "We received your application. You will get access as soon as it is approved."
                .to_owned(),
        ),
        AuthorizationStatus::Unsubmitted => (
            format!("Complete your {} application", label.to_lowercase()),
            "Your account is ready, but we still need your application before you can start."
                .to_owned(),
        ),
        AuthorizationStatus::Unknown | AuthorizationStatus::Approved => (
            format!("{label} sign in"),
            "Sign in with your partner account to continue.".to_owned(),
        ),
    }
}

#[component]
fn StepPage(role: Role, status: AuthorizationStatus) -> impl IntoView {
    let (heading, body) = step_copy(role, status);

    view! {
        <Title text=heading.clone()/>
        <div class="onboarding-page">
            <div class="onboarding-card">
                <p class="onboarding-card__role">{role.label()}</p>
                <h1>{heading}</h1>
                <p>{body}</p>
                <A href=AppRoute::Landing.path()>"Back to FoodHub"</A>
            </div>
        </div>
    }
}

/// Entry point for a role with no recognized status.
#[component]
pub fn SignInPage(role: Role) -> impl IntoView {
    view! { <StepPage role=role status=AuthorizationStatus::Unknown/> }
}

#[component]
pub fn ApplicationPage(role: Role) -> impl IntoView {
    view! { <StepPage role=role status=AuthorizationStatus::Unsubmitted/> }
}

#[component]
pub fn PendingPage(role: Role) -> impl IntoView {
    view! { <StepPage role=role status=AuthorizationStatus::Pending/> }
}
