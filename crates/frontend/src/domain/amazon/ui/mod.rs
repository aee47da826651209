use contracts::domain::amazon::{
    export_row, sample_template, validate_entries, AmazonIdEntry, AmazonIdRow, EXPORT_HEADER,
    PAGE_SIZES,
};
use contracts::shared::csv::build_csv;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::export::download_csv;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::locations::use_locations;

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

#[component]
pub fn AmazonIdList() -> impl IntoView {
    let (locations, _location_map) = use_locations();

    let (rows, set_rows) = signal(Vec::<AmazonIdRow>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let (office_filter, set_office_filter) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let (page_size, set_page_size) = signal(PAGE_SIZES[0] as u32);

    // Multi-row add dialog
    let (show_dialog, set_show_dialog) = signal(false);
    let entries = RwSignal::new(vec![AmazonIdEntry::default()]);
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let (uploading, set_uploading) = signal(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_amazon_ids().await {
                Ok(list) => set_rows.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let filtered = move || -> Vec<AmazonIdRow> {
        let office = office_filter.get();
        let office = (!office.is_empty()).then_some(office);
        let term = search.get();
        rows.get()
            .into_iter()
            .filter(|row| row.matches(office.as_deref(), &term))
            .collect()
    };

    let total_pages = move || {
        let len = filtered().len() as u32;
        let size = page_size.get().max(1);
        if len == 0 {
            1
        } else {
            len.div_ceil(size)
        }
    };

    let toggle = move |id: i64| {
        spawn_local(async move {
            match api::toggle_status(id).await {
                Ok(()) => load(),
                Err(e) => alert(&e),
            }
        });
    };

    let submit_entries = move || {
        let batch = entries.get_untracked();
        if let Err(e) = validate_entries(&batch) {
            set_form_error.set(Some(e));
            return;
        }
        spawn_local(async move {
            match api::add_entries(&batch).await {
                Ok(()) => {
                    set_show_dialog.set(false);
                    entries.set(vec![AmazonIdEntry::default()]);
                    set_form_error.set(None);
                    load();
                }
                Err(e) => set_form_error.set(Some(e)),
            }
        });
    };

    let upload_file = move || {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            alert("No file selected");
            return;
        };
        spawn_local(async move {
            set_uploading.set(true);
            match api::bulk_upload(file).await {
                Ok(()) => {
                    alert("Bulk Amazon IDs uploaded successfully.");
                    load();
                }
                Err(e) => alert(&e),
            }
            set_uploading.set(false);
        });
    };

    let export_csv = move || {
        let data: Vec<Vec<String>> = filtered().iter().map(export_row).collect();
        if data.is_empty() {
            alert("No rows to export");
            return;
        }
        let csv = build_csv(&EXPORT_HEADER, &data);
        if let Err(e) = download_csv(&csv, "amazon_ids.csv") {
            alert(&e);
        }
    };

    let download_sample = move || {
        if let Err(e) = download_csv(&sample_template(), "sample_bulk_amazon_id.csv") {
            alert(&e);
        }
    };

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Amazon IDs"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| {
                        entries.set(vec![AmazonIdEntry::default()]);
                        set_form_error.set(None);
                        set_show_dialog.set(true);
                    }>
                        "Add Amazon IDs"
                    </button>
                    <button class="button button--secondary" on:click=move |_| export_csv()>
                        "Export CSV"
                    </button>
                    <button class="button button--secondary" on:click=move |_| download_sample()>
                        "Sample File"
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="filter-panel" style="display: flex; flex-wrap: wrap; gap: 8px; align-items: center; padding: 8px 0;">
                <select
                    on:change=move |ev| {
                        set_office_filter.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                    prop:value=move || office_filter.get()
                >
                    <option value="">"All offices"</option>
                    {move || locations.get().into_iter().map(|loc| {
                        view! {
                            <option value={loc.abbreviation.clone()}>{loc.abbreviation.clone()}</option>
                        }
                    }).collect_view()}
                </select>
                <SearchInput
                    on_change=Callback::new(move |term| {
                        set_search.set(term);
                        set_page.set(1);
                    })
                    placeholder="Search mappings..."
                />
                <span style="margin-left: auto; display: inline-flex; gap: 8px; align-items: center;">
                    <input type="file" accept=".xls,.xlsx" node_ref=file_input />
                    <button
                        class="button button--secondary"
                        on:click=move |_| upload_file()
                        disabled=move || uploading.get()
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Bulk Upload" }}
                    </button>
                </span>
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
                                <th class="table__header-cell">"Comp Name"</th>
                                <th class="table__header-cell">"Office"</th>
                                <th class="table__header-cell">"Amazon ID"</th>
                                <th class="table__header-cell">"Comp ID"</th>
                                <th class="table__header-cell">"Updated"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search.get();
                                let start = ((page.get().saturating_sub(1)) * page_size.get()) as usize;
                                let size = page_size.get() as usize;
                                filtered().into_iter().skip(start).take(size).map(|row| {
                                    let id = row.id;
                                    let active = row.is_active();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{highlight_matches(&row.comp_name, &term)}</td>
                                            <td class="table__cell">{highlight_matches(&row.office, &term)}</td>
                                            <td class="table__cell">{highlight_matches(&row.amazon_id, &term)}</td>
                                            <td class="table__cell">{highlight_matches(&row.comp_id, &term)}</td>
                                            <td class="table__cell">{crate::shared::date_utils::format_datetime(&row.update_date_time)}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--secondary"
                                                    style=if active {
                                                        "background: #2e7d32; color: white;"
                                                    } else {
                                                        "background: #9e9e9e; color: white;"
                                                    }
                                                    title="Toggle status"
                                                    on:click=move |_| toggle(id)
                                                >
                                                    {row.status_label()}
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

            <PaginationControls
                current_page=Signal::derive(move || page.get())
                total_pages=Signal::derive(total_pages)
                total_records=Signal::derive(move || filtered().len() as u64)
                page_size=Signal::derive(move || page_size.get())
                on_page_change=Callback::new(move |p| set_page.set(p))
                on_page_size_change=Callback::new(move |size| {
                    set_page_size.set(size);
                    set_page.set(1);
                })
                page_size_options=PAGE_SIZES.iter().map(|&s| s as u32).collect()
            />

            <Show when=move || show_dialog.get()>
                <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 900;">
                    <div style="background: white; border-radius: 6px; padding: 20px; width: min(640px, 94vw); max-height: 90vh; overflow: auto;">
                        <h2>"Add Amazon IDs"</h2>

                        {move || form_error.get().map(|e| view! {
                            <div style="color: #c62828; padding: 4px 0;">{e}</div>
                        })}

                        {move || entries.get().into_iter().enumerate().map(|(idx, entry)| {
                            view! {
                                <div style="display: flex; gap: 8px; align-items: center; padding: 4px 0;">
                                    <select
                                        prop:value=entry.office.clone()
                                        on:change=move |ev| entries.update(|list| {
                                            if let Some(e) = list.get_mut(idx) {
                                                e.office = event_target_value(&ev);
                                            }
                                        })
                                    >
                                        <option value="">"Office"</option>
                                        {locations.get().into_iter().map(|loc| {
                                            view! {
                                                <option value={loc.abbreviation.clone()}>{loc.abbreviation.clone()}</option>
                                            }
                                        }).collect_view()}
                                    </select>
                                    <input
                                        type="text"
                                        placeholder="Amazon ID"
                                        prop:value=entry.amazon_id.clone()
                                        on:input=move |ev| entries.update(|list| {
                                            if let Some(e) = list.get_mut(idx) {
                                                e.amazon_id = event_target_value(&ev);
                                            }
                                        })
                                    />
                                    <input
                                        type="text"
                                        placeholder="Comp ID"
                                        prop:value=entry.comp_id.clone()
                                        on:input=move |ev| entries.update(|list| {
                                            if let Some(e) = list.get_mut(idx) {
                                                e.comp_id = event_target_value(&ev);
                                            }
                                        })
                                    />
                                    <input
                                        type="text"
                                        placeholder="Comp Name"
                                        prop:value=entry.comp_name.clone()
                                        on:input=move |ev| entries.update(|list| {
                                            if let Some(e) = list.get_mut(idx) {
                                                e.comp_name = event_target_value(&ev);
                                            }
                                        })
                                    />
                                    <button
                                        class="button button--secondary"
                                        title="Remove row"
                                        on:click=move |_| entries.update(|list| {
                                            if list.len() > 1 {
                                                list.remove(idx);
                                            }
                                        })
                                    >
                                        "−"
                                    </button>
                                </div>
                            }
                        }).collect_view()}

                        <button
                            class="button button--secondary"
                            on:click=move |_| entries.update(|list| list.push(AmazonIdEntry::default()))
                        >
                            "+ Add Row"
                        </button>

                        <div style="display: flex; gap: 8px; justify-content: flex-end; padding-top: 12px;">
                            <button class="button button--secondary" on:click=move |_| set_show_dialog.set(false)>
                                "Cancel"
                            </button>
                            <button class="button button--primary" on:click=move |_| submit_entries()>
                                "Save"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
