use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::storage;

/// The session is cleared after this long without pointer or keyboard
/// activity.
const IDLE_LOGOUT_MS: i32 = 30 * 60 * 1000;

#[derive(Clone, Debug, Default)]
pub struct Session {
    pub user: Option<UserInfo>,
}

/// Session context provider component. Restores a persisted user on mount
/// and arms the inactivity timer.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(Session {
        user: storage::load_user(),
    });

    provide_context(session);
    provide_context(set_session);

    install_idle_logout(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<Session>, WriteSignal<Session>) {
    let session =
        use_context::<ReadSignal<Session>>().expect("SessionProvider not found in component tree");
    let set_session =
        use_context::<WriteSignal<Session>>().expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Helper: drop the session. The route switch falls back to the login page.
pub fn do_logout(set_session: WriteSignal<Session>) {
    storage::clear_user();
    set_session.set(Session::default());
}

/// (Re)arms the fixed inactivity timeout. Called once per pointer/keyboard
/// event; when it fires the session is cleared unconditionally.
fn arm_idle_timer(set_session: WriteSignal<Session>, timeout_id: StoredValue<Option<i32>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(id) = timeout_id.get_value() {
        window.clear_timeout_with_handle(id);
    }

    let expire = Closure::wrap(Box::new(move || {
        log::info!("session expired after inactivity");
        storage::clear_user();
        set_session.set(Session::default());
    }) as Box<dyn Fn()>);

    if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        expire.as_ref().unchecked_ref::<js_sys::Function>(),
        IDLE_LOGOUT_MS,
    ) {
        timeout_id.set_value(Some(id));
    }
    expire.forget();
}

fn install_idle_logout(set_session: WriteSignal<Session>) {
    let timeout_id = StoredValue::new(None::<i32>);
    arm_idle_timer(set_session, timeout_id);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for event in ["mousedown", "keydown"] {
        let reset = Closure::wrap(Box::new(move || {
            arm_idle_timer(set_session, timeout_id);
        }) as Box<dyn Fn()>);
        let _ = document
            .add_event_listener_with_callback(event, reset.as_ref().unchecked_ref());
        // listeners live for the whole page lifetime
        reset.forget();
    }
}
