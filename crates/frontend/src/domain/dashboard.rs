use leptos::prelude::*;

use crate::system::auth::context::use_session;

/// Landing screen after login.
#[component]
pub fn Dashboard() -> impl IntoView {
    let (session, _) = use_session();

    let username = move || {
        session
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                </div>
            </div>
            <div style="padding: 24px;">
                <p>{move || format!("Welcome, {}.", username())}</p>
                <p style="color: #666;">
                    "Use the sidebar to manage deliveries, returns, employees, locations and Amazon IDs."
                </p>
            </div>
        </div>
    }
}
