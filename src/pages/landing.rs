//! Public landing page and consumer entry point.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::state::status::Role;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"FoodHub"</h1>
            <p class="landing-page__subtitle">"Order, cook, deliver."</p>
            <div class="landing-page__cards">
                <A href=AppRoute::ConsumerHome.path()>
                    <div class="landing-card">
                        <h2>"Order food"</h2>
                        <p>"Browse restaurants and track your orders."</p>
                    </div>
                </A>
                <A href=Role::RestaurantPartner.home_route().path()>
                    <div class="landing-card">
                        <h2>{Role::RestaurantPartner.label()}</h2>
                        <p>"Manage your menu and incoming orders."</p>
                    </div>
                </A>
                <A href=Role::Shipper.home_route().path()>
                    <div class="landing-card">
                        <h2>{Role::Shipper.label()}</h2>
                        <p>"Pick up and deliver orders near you."</p>
                    </div>
                </A>
            </div>
        </div>
    }
}
