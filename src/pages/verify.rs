//! Magic-link redemption screen.
//!
//! Reads `token` and `purpose` from the incoming URL once at mount, drives
//! the verification flow, and renders its status. On success a scheduled
//! redirect fires after a fixed delay; tearing the page down first cancels
//! it.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::state::session::Session;
use crate::state::verify::{self, Purpose, VerifyStatus, SUCCESS_REDIRECT_DELAY_MS};
use crate::util::schedule::ScheduledTask;

#[component]
pub fn VerifyPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let status = RwSignal::new(VerifyStatus::Verifying);

    let query = use_query_map();
    let token = query.with_untracked(|q| q.get("token"));
    let purpose = Purpose::from_param(query.with_untracked(|q| q.get("purpose")).as_deref());

    // The handle exists before any work is spawned, so teardown always has
    // something to cancel, even while the token exchange is still in flight.
    let redirect = ScheduledTask::pending();
    let cleanup = redirect.clone();
    on_cleanup(move || cleanup.cancel());

    #[cfg(feature = "csr")]
    {
        use crate::net::api::HttpApi;
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            let mut store = session.get_untracked();
            let terminal = verify::run(
                &HttpApi,
                &mut store,
                token.as_deref(),
                purpose,
                // try_set: the page may have been torn down mid-flight.
                |transition| {
                    let _ = status.try_set(transition.clone());
                },
            )
            .await;
            session.set(store);

            if terminal == VerifyStatus::Success && !redirect.is_cancelled() {
                redirect.arm(SUCCESS_REDIRECT_DELAY_MS, move || {
                    navigate(purpose.redirect_path(), NavigateOptions::default());
                });
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, token, purpose, redirect);
    }

    view! {
        <div class="verify-page">
            {move || match status.get() {
                VerifyStatus::Verifying => view! {
                    <div class="verify-page__pending">
                        <div class="spinner"></div>
                        <h2>"Verifying your magic link..."</h2>
                        <p>"Please wait while we sign you in."</p>
                    </div>
                }
                    .into_any(),
                VerifyStatus::CreatingAlerts => view! {
                    <div class="verify-page__pending">
                        <div class="spinner"></div>
                        <h2>"Setting up your powder alerts..."</h2>
                        <p>"Almost done! We're creating your custom alerts."</p>
                    </div>
                }
                    .into_any(),
                VerifyStatus::Success => view! {
                    <div class="verify-page__done">
                        <p class="banner banner--success">"Successfully signed in!"</p>
                        <p>"Redirecting you to your dashboard..."</p>
                    </div>
                }
                    .into_any(),
                VerifyStatus::Error(message) => view! {
                    <div class="verify-page__error">
                        <p class="banner banner--error">{message}</p>
                        <p>"The magic link may have expired or been used already."</p>
                        <A href="/login" attr:class="btn btn--primary">
                            "Get New Magic Link"
                        </A>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}
