//! Post-signup confirmation page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <div class="success-page">
            <div class="success-page__badge">"✓"</div>
            <h1>"You're All Set!"</h1>
            <p>
                "Your powder alert has been created successfully. We'll notify you when \
                 fresh snow is forecasted at your selected resorts. Get ready to hunt \
                 some powder!"
            </p>
            <A href="/" attr:class="btn btn--primary">
                "Back to Home"
            </A>
        </div>
    }
}
