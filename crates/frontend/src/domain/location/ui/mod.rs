use contracts::domain::location::{Location, LocationForm, ROLE_OPTIONS};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[component]
pub fn LocationList() -> impl IntoView {
    let (locations, set_locations) = signal(Vec::<Location>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let (show_dialog, set_show_dialog) = signal(false);
    let form = RwSignal::new(LocationForm::default());
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_locations().await {
                Ok(list) => set_locations.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let open_create = move || {
        form.set(LocationForm::default());
        set_form_error.set(None);
        set_show_dialog.set(true);
    };

    let open_edit = move |location: &Location| {
        form.set(LocationForm::from_location(location));
        set_form_error.set(None);
        set_show_dialog.set(true);
    };

    let submit = move || {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            set_form_error.set(Some(e));
            return;
        }
        spawn_local(async move {
            set_saving.set(true);
            // the id in the form decides create vs edit
            let result = if current.id.is_some() {
                api::edit_location(&current).await
            } else {
                api::create_location(&current).await
            };
            set_saving.set(false);
            match result {
                Ok(()) => {
                    set_show_dialog.set(false);
                    load();
                }
                Err(e) => set_form_error.set(Some(e)),
            }
        });
    };

    let toggle_role = move |role: String, checked: bool| {
        form.update(|f| {
            if checked {
                if !f.roles.contains(&role) {
                    f.roles.push(role);
                }
            } else {
                f.roles.retain(|existing| existing != &role);
            }
        });
    };

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Locations"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_create()>
                        "Add Location"
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="color: #c62828; padding: 8px;">
                    <span>"⚠ "</span><span>{e}</span>
                </div>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div style="padding: 24px;">"Loading..."</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"ID"</th>
                                <th class="table__header-cell">"Abbreviation"</th>
                                <th class="table__header-cell">"Address"</th>
                                <th class="table__header-cell">"Coordinates"</th>
                                <th class="table__header-cell">"Roles"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || locations.get().into_iter().map(|location| {
                                let for_edit = location.clone();
                                let maps_url = format!("https://www.google.com/maps?q={}", location.latlong);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{location.id}</td>
                                        <td class="table__cell">{location.abbreviation.clone()}</td>
                                        <td class="table__cell">{location.address.clone()}</td>
                                        <td class="table__cell">
                                            <a href=maps_url target="_blank" rel="noopener">{location.latlong.clone()}</a>
                                        </td>
                                        <td class="table__cell">{location.roles.clone()}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--secondary"
                                                on:click=move |_| open_edit(&for_edit)
                                            >
                                                "Edit"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>

            <Show when=move || show_dialog.get()>
                <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 900;">
                    <div style="background: white; border-radius: 6px; padding: 20px; width: min(480px, 92vw);">
                        <h2>{move || if form.get().id.is_some() { "Edit Location" } else { "Add Location" }}</h2>

                        {move || form_error.get().map(|e| view! {
                            <div style="color: #c62828; padding: 4px 0;">{e}</div>
                        })}

                        <div class="form-group">
                            <label>"Abbreviation"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().abbreviation
                                on:input=move |ev| form.update(|f| f.abbreviation = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Address"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().address
                                on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Coordinates (lat,long)"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().latlong
                                on:input=move |ev| form.update(|f| f.latlong = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Roles"</label>
                            <div style="display: flex; flex-wrap: wrap; gap: 8px;">
                                {ROLE_OPTIONS.iter().map(|&role| {
                                    view! {
                                        <label style="display: inline-flex; gap: 4px; align-items: center;">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || form.get().roles.iter().any(|r| r == role)
                                                on:change=move |ev| toggle_role(role.to_string(), event_target_checked(&ev))
                                            />
                                            {role}
                                        </label>
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <div style="display: flex; gap: 8px; justify-content: flex-end; padding-top: 12px;">
                            <button
                                class="button button--secondary"
                                on:click=move |_| set_show_dialog.set(false)
                                disabled=move || saving.get()
                            >
                                "Cancel"
                            </button>
                            <button
                                class="button button--primary"
                                on:click=move |_| submit()
                                disabled=move || saving.get()
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
