use contracts::domain::employee::{display_role, Employee, EmployeeForm, ROLE_CHOICES};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::locations::use_locations;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let (locations, _location_map) = use_locations();

    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());

    // Dialog state: form plus whether this is an edit of an existing record
    let (show_dialog, set_show_dialog) = signal(false);
    let (is_editing, set_is_editing) = signal(false);
    let form = RwSignal::new(EmployeeForm::default());
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_employees().await {
                Ok(list) => set_employees.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let open_create = move || {
        form.set(EmployeeForm::default());
        set_is_editing.set(false);
        set_form_error.set(None);
        set_show_dialog.set(true);
    };

    let open_edit = move |employee: &Employee| {
        form.set(EmployeeForm::from_employee(employee));
        set_is_editing.set(true);
        set_form_error.set(None);
        set_show_dialog.set(true);
    };

    let submit = move || {
        let current = form.get_untracked();
        let editing = is_editing.get_untracked();
        if let Err(e) = current.validate(editing) {
            set_form_error.set(Some(e));
            return;
        }
        spawn_local(async move {
            set_saving.set(true);
            let result = if editing {
                api::edit_employee(&current).await
            } else {
                api::create_employee(&current).await
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

    let reset_device = move |employee_id: i64| {
        if !confirm("Reset this employee's registered device?") {
            return;
        }
        spawn_local(async move {
            // "already cleared" also shows up here, as a plain notice
            match api::remove_device(employee_id).await {
                Ok(()) => {
                    alert("Device ID cleared.");
                    load();
                }
                Err(e) => alert(&e),
            }
        });
    };

    let filtered = move || -> Vec<Employee> {
        let term = search.get();
        employees
            .get()
            .into_iter()
            .filter(|e| e.matches_name(&term))
            .collect()
    };

    let toggle_location = move |id: String, checked: bool| {
        form.update(|f| {
            if checked {
                if !f.location_ids.contains(&id) {
                    f.location_ids.push(id);
                }
            } else {
                f.location_ids.retain(|existing| existing != &id);
            }
        });
    };

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Employees"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_create()>
                        "Add Employee"
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        "Refresh"
                    </button>
                </div>
            </div>

            <div style="padding: 8px 0;">
                <SearchInput
                    on_change=Callback::new(move |term| set_search.set(term))
                    placeholder="Search by name..."
                />
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
                                <th class="table__header-cell">"Emp ID"</th>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Login ID"</th>
                                <th class="table__header-cell">"Email"</th>
                                <th class="table__header-cell">"Phone"</th>
                                <th class="table__header-cell">"Role"</th>
                                <th class="table__header-cell">"Locations"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search.get();
                                let location_list = locations.get();
                                filtered().into_iter().map(|employee| {
                                    let labels = employee.location_labels(&location_list);
                                    let employee_id = employee.employee_id;
                                    let for_edit = employee.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{employee.emp_id.clone()}</td>
                                            <td class="table__cell">{highlight_matches(&employee.full_name, &term)}</td>
                                            <td class="table__cell">{employee.login_id.clone()}</td>
                                            <td class="table__cell">{employee.email.clone()}</td>
                                            <td class="table__cell">{employee.phone_number.clone()}</td>
                                            <td class="table__cell">{display_role(&employee.role).to_string()}</td>
                                            <td class="table__cell">{labels}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--secondary"
                                                    on:click=move |_| open_edit(&for_edit)
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="button button--secondary"
                                                    on:click=move |_| reset_device(employee_id)
                                                >
                                                    "Reset Device"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <Show when=move || show_dialog.get()>
                <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 900;">
                    <div style="background: white; border-radius: 6px; padding: 20px; width: min(520px, 92vw); max-height: 90vh; overflow: auto;">
                        <h2>{move || if is_editing.get() { "Edit Employee" } else { "Add Employee" }}</h2>

                        {move || form_error.get().map(|e| view! {
                            <div style="color: #c62828; padding: 4px 0;">{e}</div>
                        })}

                        <div class="form-group">
                            <label>"Employee ID"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().emp_id
                                // identity is immutable once created
                                disabled=move || is_editing.get()
                                on:input=move |ev| form.update(|f| f.emp_id = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Full Name"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().full_name
                                on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Email"</label>
                            <input
                                type="email"
                                prop:value=move || form.get().email
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Phone Number"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().phone_number
                                on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Role"</label>
                            <select
                                prop:value=move || form.get().role
                                on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                            >
                                <option value="">"Select role"</option>
                                {ROLE_CHOICES.iter().map(|(value, label)| {
                                    view! { <option value={*value}>{*label}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                        <Show when=move || !is_editing.get()>
                            <div class="form-group">
                                <label>"Login ID"</label>
                                <input
                                    type="text"
                                    prop:value=move || form.get().login_id
                                    on:input=move |ev| form.update(|f| f.login_id = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Password"</label>
                                <input
                                    type="password"
                                    prop:value=move || form.get().password
                                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                />
                            </div>
                        </Show>
                        <div class="form-group">
                            <label>"Locations"</label>
                            <div style="display: flex; flex-wrap: wrap; gap: 8px;">
                                {move || locations.get().into_iter().map(|loc| {
                                    let id = loc.id.to_string();
                                    let id_for_check = id.clone();
                                    let id_for_toggle = id.clone();
                                    view! {
                                        <label style="display: inline-flex; gap: 4px; align-items: center;">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || form.get().location_ids.contains(&id_for_check)
                                                on:change=move |ev| toggle_location(id_for_toggle.clone(), event_target_checked(&ev))
                                            />
                                            {loc.abbreviation.clone()}
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
