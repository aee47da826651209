use leptos::prelude::*;

use crate::routes::Screen;

const MENU: [Screen; 6] = [
    Screen::Dashboard,
    Screen::Deliveries,
    Screen::Returns,
    Screen::Employees,
    Screen::Locations,
    Screen::AmazonIds,
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let active_screen =
        use_context::<RwSignal<Screen>>().expect("active screen signal not found in context");

    view! {
        <div class="app-sidebar__content">
            {MENU.into_iter().map(|screen| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || active_screen.get() == screen
                        on:click=move |_| active_screen.set(screen)
                    >
                        <span>{screen.label()}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
