//! Login page: requests a magic-link email.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get();
        if address.is_empty() || sending.get() {
            return;
        }

        sending.set(true);
        message.set(None);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::net::api::HttpApi;
            use crate::state::verify::Purpose;

            match HttpApi.request_magic_link(&address, Purpose::Login.as_str()).await {
                Ok(()) => message.set(Some(
                    "Magic link sent! Check your email and click the link to sign in."
                        .to_owned(),
                )),
                Err(err) => error.set(Some(err.to_string())),
            }
            sending.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = address;
        }
    };

    view! {
        <div class="auth-card">
            <h1>"Sign In"</h1>

            {move || message.get().map(|m| view! { <p class="banner banner--success">{m}</p> })}
            {move || error.get().map(|e| view! { <p class="banner banner--error">{e}</p> })}

            <form on:submit=submit>
                <label class="field">
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || sending.get()
                    />
                </label>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || sending.get() || email.get().is_empty()
                >
                    {move || if sending.get() { "Sending Magic Link..." } else { "Send Magic Link" }}
                </button>
            </form>

            <p class="auth-card__hint">
                "Don't have an account? The magic link will create one for you automatically."
            </p>
        </div>
    }
}
