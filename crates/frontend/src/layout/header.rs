use leptos::prelude::*;

use crate::system::auth::context::{do_logout, use_session};

#[component]
pub fn TopHeader() -> impl IntoView {
    let (session, set_session) = use_session();

    let username = move || {
        session
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };
    let avatar = move || session.get().user.map(|u| u.image).unwrap_or_default();

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <span class="app-header__title">"Vehicle Management System"</span>
            </div>
            <div class="app-header__user">
                <Show when=move || !avatar().is_empty()>
                    <img
                        class="app-header__avatar"
                        src=avatar
                        alt="avatar"
                        style="width: 32px; height: 32px; border-radius: 50%; object-fit: cover;"
                    />
                </Show>
                <span class="app-header__username">{username}</span>
                <button class="button button--secondary" on:click=move |_| do_logout(set_session)>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
