//! Subscription management page: look up alerts by email, delete one or all.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::UserAlert;

#[component]
pub fn ManagePage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let searched_email = RwSignal::new(String::new());
    let alerts = RwSignal::new(Vec::<UserAlert>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Pending confirmation dialogs: (resort_uuid, resort_name) or delete-all.
    let pending_delete = RwSignal::new(None::<(String, String)>);
    let pending_delete_all = RwSignal::new(false);

    let load = move |address: String| {
        loading.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::HttpApi.fetch_user_alerts(&address).await {
                Ok(list) => alerts.set(list),
                Err(_) => {
                    error.set(Some("Failed to load subscriptions. Please try again.".to_owned()));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = address;
        }
    };

    let search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_owned();
        if address.is_empty() {
            return;
        }
        searched_email.set(address.clone());
        load(address);
    };

    let delete_one = move |resort_uuid: String| {
        let address = searched_email.get();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::HttpApi.delete_alert(&address, &resort_uuid).await {
                Ok(()) => {
                    pending_delete.set(None);
                    load(address);
                }
                Err(_) => {
                    error.set(Some("Failed to delete subscription. Please try again.".to_owned()));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (address, resort_uuid);
        }
    };

    let delete_all = move |_| {
        let address = searched_email.get();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::HttpApi.delete_all_alerts(&address).await {
                Ok(()) => {
                    pending_delete_all.set(false);
                    load(address);
                }
                Err(_) => {
                    error.set(Some(
                        "Failed to delete all subscriptions. Please try again.".to_owned(),
                    ));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = address;
        }
    };

    view! {
        <div class="manage-page">
            <h1>"Manage Your Subscriptions"</h1>
            <p>
                "Enter your email address to view and manage your powder alert subscriptions."
            </p>

            <form class="manage-page__search" on:submit=search>
                <input
                    type="email"
                    required
                    placeholder="Email Address"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Loading..." } else { "Find Subscriptions" }}
                </button>
            </form>

            {move || error.get().map(|e| view! { <p class="banner banner--error">{e}</p> })}

            <Show when=move || {
                !searched_email.get().is_empty() && alerts.with(Vec::is_empty) && !loading.get()
                    && error.get().is_none()
            }>
                <p class="banner banner--info">
                    {move || format!("No active subscriptions found for {}.", searched_email.get())}
                    <A href="/signup">"Create one?"</A>
                </p>
            </Show>

            <Show when=move || !alerts.with(Vec::is_empty)>
                <div class="manage-page__header">
                    <h2>{move || format!("Active Subscriptions ({})", alerts.with(Vec::len))}</h2>
                    <button class="btn btn--danger" on:click=move |_| pending_delete_all.set(true)>
                        "Delete All"
                    </button>
                </div>

                <ul class="subscription-list">
                    <For
                        each=move || alerts.get()
                        key=|alert| alert.id
                        children=move |alert: UserAlert| {
                            let resort_uuid = alert.resort_uuid.clone();
                            let resort_name = alert.resort_name.clone();
                            let created = alert.created_at.clone().into_option();
                            view! {
                                <li class="subscription-list__item">
                                    <div>
                                        <h3>{alert.resort_name.clone()}</h3>
                                        <span class="chip">
                                            {format!("{}\" minimum snow", alert.min_snow_amount)}
                                        </span>
                                        <span class="chip">
                                            {format!("{} days notice", alert.notification_days)}
                                        </span>
                                        {created.map(|ts| view! { <p class="subscription-list__created">{format!("Created: {ts}")}</p> })}
                                    </div>
                                    <button
                                        class="btn btn--danger"
                                        on:click=move |_| {
                                            pending_delete
                                                .set(Some((resort_uuid.clone(), resort_name.clone())));
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| pending_delete.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete Subscription"</h2>
                        <p>
                            {move || {
                                pending_delete
                                    .get()
                                    .map(|(_, name)| {
                                        format!(
                                            "Are you sure you want to delete your subscription for {name}? \
                                             You will no longer receive powder alerts for this resort.",
                                        )
                                    })
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| pending_delete.set(None)>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| {
                                    if let Some((uuid, _)) = pending_delete.get() {
                                        delete_one(uuid);
                                    }
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || pending_delete_all.get()>
                <div class="dialog-backdrop" on:click=move |_| pending_delete_all.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete All Subscriptions"</h2>
                        <p>
                            "Are you sure you want to delete ALL your powder alert subscriptions? \
                             This action cannot be undone and you will no longer receive any \
                             powder alerts."
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| pending_delete_all.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=delete_all>
                                "Delete All"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <A href="/" attr:class="manage-page__back">
                "← Back to Home"
            </A>
        </div>
    }
}
