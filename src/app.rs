//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::{footer::Footer, nav_bar::NavBar};
use crate::pages::{
    contact::ContactPage, home::HomePage, login::LoginPage, manage::ManagePage,
    signup::SignupPage, success::SuccessPage, verify::VerifyPage,
};
use crate::state::session::Session;

/// Root application component.
///
/// Provides the session context (hydrated from persisted storage at
/// construction) and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    view! {
        <Title text="Pow Hunter"/>

        <Router>
            <NavBar/>
            <main class="content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("verify"))
                        view=VerifyPage
                    />
                    <Route path=StaticSegment("success") view=SuccessPage/>
                    <Route path=StaticSegment("manage") view=ManagePage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
