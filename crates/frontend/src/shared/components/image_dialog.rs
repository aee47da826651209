use leptos::prelude::*;

/// Fullscreen overlay showing a single photo. Closes on backdrop click or
/// the close button.
#[component]
pub fn ImageDialog(
    /// URL of the open image; `None` keeps the dialog hidden
    #[prop(into)]
    image_url: Signal<Option<String>>,

    /// Callback to close the dialog
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || image_url.get().is_some()>
            <div
                style="position: fixed; inset: 0; background: rgba(0,0,0,0.7); display: flex; align-items: center; justify-content: center; z-index: 1000;"
                on:click=move |_| on_close.run(())
            >
                <div
                    style="position: relative; max-width: 90vw; max-height: 90vh;"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        style="position: absolute; top: -14px; right: -14px; width: 28px; height: 28px; border-radius: 50%; border: none; background: white; cursor: pointer; font-weight: bold;"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                    <img
                        src=move || image_url.get().unwrap_or_default()
                        alt="photo"
                        style="max-width: 90vw; max-height: 90vh; border-radius: 4px;"
                    />
                </div>
            </div>
        </Show>
    }
}
