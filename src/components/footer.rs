//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Pow Hunter: powder day alerts for your favorite resorts."</p>
            <div class="footer__links">
                <A href="/signup">"Sign Up"</A>
                <A href="/manage">"Manage Subscriptions"</A>
                <A href="/contact">"Contact Us"</A>
            </div>
        </footer>
    }
}
