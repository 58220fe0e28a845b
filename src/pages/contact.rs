//! Contact form page.

use leptos::prelude::*;

use crate::net::types::ContactRequest;

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }

        let request = ContactRequest {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };

        sending.set(true);
        sent.set(false);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::HttpApi.send_contact(&request).await {
                Ok(()) => {
                    sent.set(true);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            sending.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="contact-page">
            <h1>"Contact Us"</h1>
            <p>"Have questions or feedback? We'd love to hear from you!"</p>

            <Show when=move || sent.get()>
                <p class="banner banner--success">
                    "Thank you for your message! We'll get back to you soon."
                </p>
            </Show>
            {move || error.get().map(|e| view! { <p class="banner banner--error">{e}</p> })}

            <form on:submit=submit>
                <label class="field">
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                    "Message"
                    <textarea
                        required
                        rows="6"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
