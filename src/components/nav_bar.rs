//! Top navigation bar with a sign-out action for authenticated sessions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::Session;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let sign_out = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let mut store = session.get_untracked();
            store.logout().await;
            session.set(store);
        });
    };

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                "Pow Hunter"
            </A>
            <div class="nav-bar__links">
                <A href="/manage">"Manage"</A>
                <A href="/contact">"Contact"</A>
                <Show
                    when=move || session.with(Session::is_authenticated)
                    fallback=|| view! { <A href="/login">"Sign In"</A> }
                >
                    <button class="nav-bar__signout" on:click=sign_out>
                        "Sign Out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
