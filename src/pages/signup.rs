//! Signup page.
//!
//! Stages the form data locally, then requests a signup magic link. The
//! staged payload is replayed by the verify page once the user clicks the
//! emailed link.

use leptos::prelude::*;

use crate::net::api::{HttpApi, VerifyApi};
use crate::net::types::Resort;
use crate::state::signup::{self, StagedSignup};
use crate::util::storage::BrowserStorage;

const DEFAULT_NOTIFICATION_DAYS: u32 = 3;
const DEFAULT_MIN_SNOW_AMOUNT: u32 = 6;

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let notification_days = RwSignal::new(DEFAULT_NOTIFICATION_DAYS);
    let min_snow_amount = RwSignal::new(DEFAULT_MIN_SNOW_AMOUNT);
    let selected_resorts = RwSignal::new(Vec::<String>::new());

    let sending = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let resorts = LocalResource::new(|| async move { HttpApi.fetch_resorts().await });

    let toggle_resort = move |name: String, checked: bool| {
        selected_resorts.update(|list| {
            if checked {
                if !list.contains(&name) {
                    list.push(name);
                }
            } else {
                list.retain(|selected| selected != &name);
            }
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get();
        if address.is_empty() || phone.get().is_empty() || sending.get() {
            return;
        }

        let payload = StagedSignup {
            phone: phone.get(),
            notification_days: notification_days.get(),
            min_snow_amount: min_snow_amount.get(),
            resorts: selected_resorts.get(),
        };
        signup::stage(&BrowserStorage, &payload);

        sending.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::state::verify::Purpose;

            match HttpApi
                .request_magic_link(&address, Purpose::Signup.as_str())
                .await
            {
                Ok(()) => sent.set(true),
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
        <div class="signup-page">
            <h1>"Create Your Account"</h1>
            <p class="signup-page__intro">
                "Sign up to start receiving powder alerts for your favorite resorts"
            </p>

            <Show when=move || sent.get()>
                <p class="banner banner--success">
                    "Magic link sent! Check your email to verify your account and activate your alerts."
                </p>
            </Show>
            {move || error.get().map(|e| view! { <p class="banner banner--error">{e}</p> })}

            <form on:submit=submit>
                <label class="field">
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    "Phone Number"
                    <input
                        type="tel"
                        required
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <span class="field__hint">"We'll send SMS alerts to this number"</span>
                </label>

                <label class="field">
                    "How many days in advance would you like to receive alerts?"
                    <input
                        type="range"
                        min="1"
                        max="5"
                        prop:value=move || notification_days.get().to_string()
                        on:input=move |ev| {
                            if let Ok(days) = event_target_value(&ev).parse() {
                                notification_days.set(days);
                            }
                        }
                    />
                    <span class="field__hint">{move || format!("{} days", notification_days.get())}</span>
                </label>

                <label class="field">
                    "Minimum snow amount for alerts (inches)?"
                    <input
                        type="range"
                        min="1"
                        max="24"
                        prop:value=move || min_snow_amount.get().to_string()
                        on:input=move |ev| {
                            if let Ok(inches) = event_target_value(&ev).parse() {
                                min_snow_amount.set(inches);
                            }
                        }
                    />
                    <span class="field__hint">{move || format!("{} inches", min_snow_amount.get())}</span>
                </label>

                <fieldset class="field">
                    <legend>"Select Resorts"</legend>
                    <Suspense fallback=move || view! { <p>"Loading resorts..."</p> }>
                        {move || {
                            resorts.get().map(|result| match result {
                                Ok(list) => view! {
                                    <div class="resort-list">
                                        {list
                                            .into_iter()
                                            .map(|resort: Resort| {
                                                let name = resort.name;
                                                let check_name = name.clone();
                                                let toggle_name = name.clone();
                                                view! {
                                                    <label class="resort-list__item">
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=move || {
                                                                selected_resorts.with(|sel| sel.contains(&check_name))
                                                            }
                                                            on:change=move |ev| {
                                                                toggle_resort(toggle_name.clone(), event_target_checked(&ev));
                                                            }
                                                        />
                                                        {name}
                                                    </label>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any(),
                                Err(_) => view! {
                                    <p class="banner banner--error">"Failed to load resorts. Please try again."</p>
                                }
                                    .into_any(),
                            })
                        }}
                    </Suspense>
                </fieldset>

                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || {
                        sending.get() || email.get().is_empty() || phone.get().is_empty()
                    }
                >
                    {move || if sending.get() { "Sending..." } else { "Create Alert" }}
                </button>
            </form>
        </div>
    }
}
