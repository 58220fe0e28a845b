//! Landing page with hero and feature blurbs.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="hero">
                <h1>"Pow Hunter"</h1>
                <p class="hero__tagline">"Never miss a powder day at your favorite resort"</p>
                <div class="hero__cta">
                    <A href="/signup" attr:class="btn btn--primary">
                        "Sign Up for Alerts"
                    </A>
                    <A href="/manage" attr:class="btn">
                        "Manage Subscriptions"
                    </A>
                </div>
            </header>

            <section class="features">
                <h2>"Why Choose Pow Hunter?"</h2>
                <div class="features__grid">
                    <div class="feature">
                        <h3>"Save Your Favorites"</h3>
                        <p>"Keep track of your favorite ski resorts in one place"</p>
                    </div>
                    <div class="feature">
                        <h3>"Weather Forecasts"</h3>
                        <p>"Get detailed snow and weather forecasts for your resorts"</p>
                    </div>
                    <div class="feature">
                        <h3>"Text Alerts"</h3>
                        <p>"Receive notifications when fresh powder is on the way"</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
