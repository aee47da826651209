use chrono::Local;
use contracts::domain::common::MatchFilter;
use contracts::domain::delivery::{
    export_row, Delivery, DeliveryFilters, DeliveryQuery, QueryScope, EXPORT_HEADER, EXPORT_LIMIT,
    PER_PAGE_OPTIONS, STATUS_COMPLETE, STATUS_DELETE,
};
use contracts::domain::location::location_label;
use contracts::shared::api::PageInfo;
use contracts::shared::csv::build_csv;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::image_dialog::ImageDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::export::{download_csv, timestamped_filename};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::locations::use_locations;
use crate::system::auth::context::use_session;

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
pub fn DeliveryList() -> impl IntoView {
    let (session, _) = use_session();
    let (locations, location_map) = use_locations();

    let (deliveries, set_deliveries) = signal(Vec::<Delivery>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (page, set_page) = signal(1u32);
    let (per_page, set_per_page) = signal(50u32);
    let (page_info, set_page_info) = signal(PageInfo::default());

    // Filter edits accumulate in the draft set; "Apply" commits them.
    let (draft_from, set_draft_from) = signal(String::new());
    let (draft_to, set_draft_to) = signal(String::new());
    let (draft_location, set_draft_location) = signal(String::new());
    let (draft_match, set_draft_match) = signal(MatchFilter::All);
    let (draft_search, set_draft_search) = signal(String::new());
    let applied = RwSignal::new(DeliveryFilters::default());

    let (dialog_image, set_dialog_image) = signal(Option::<String>::None);

    let collect_draft = move || DeliveryFilters {
        from_date: draft_from.get(),
        to_date: draft_to.get(),
        location_id: draft_location.get().parse().ok(),
        match_status: draft_match.get(),
        search: draft_search.get(),
    };

    // Page navigation keeps the table on screen (no loading flicker);
    // filter and page-size changes show the indicator.
    let load = move |target_page: u32, show_loading: bool| {
        let query = DeliveryQuery {
            page: target_page,
            limit: per_page.get_untracked(),
            filters: applied.get_untracked(),
            scope: QueryScope::from_user(session.get_untracked().user.as_ref()),
        };
        spawn_local(async move {
            if show_loading {
                set_loading.set(true);
            }
            set_error.set(None);
            match api::fetch_deliveries(&query).await {
                Ok(envelope) => {
                    set_deliveries.set(envelope.data);
                    set_page_info.set(envelope.pagination.unwrap_or_default());
                    set_page.set(target_page);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let apply_filters = move || {
        applied.set(collect_draft());
        load(1, true);
    };

    let clear_filters = move || {
        set_draft_from.set(String::new());
        set_draft_to.set(String::new());
        set_draft_location.set(String::new());
        set_draft_match.set(MatchFilter::All);
        set_draft_search.set(String::new());
        applied.set(DeliveryFilters::default());
        load(1, true);
    };

    let change_status = move |id: i64, new_status: &'static str, prompt: &'static str| {
        if !confirm(prompt) {
            return;
        }
        let current = page.get_untracked();
        spawn_local(async move {
            match api::update_status(id, new_status).await {
                Ok(()) => load(current, false),
                Err(e) => alert(&e),
            }
        });
    };

    let export_csv = move || {
        let query = DeliveryQuery {
            page: 1,
            limit: EXPORT_LIMIT,
            filters: applied.get_untracked(),
            scope: QueryScope::from_user(session.get_untracked().user.as_ref()),
        };
        let map = location_map.get_untracked();
        let match_filter = query.filters.match_status;
        spawn_local(async move {
            match api::fetch_deliveries(&query).await {
                Ok(envelope) => {
                    let rows: Vec<Vec<String>> = envelope
                        .data
                        .iter()
                        .filter(|d| match_filter.accepts(d.match_status()))
                        .enumerate()
                        .map(|(i, d)| {
                            export_row(d, i + 1, &location_label(&map, &d.location_id))
                        })
                        .collect();
                    if rows.is_empty() {
                        alert("No deliveries to export");
                        return;
                    }
                    let csv = build_csv(&EXPORT_HEADER, &rows);
                    if let Err(e) = download_csv(&csv, &timestamped_filename("deliveries")) {
                        log!("export failed: {}", e);
                        alert(&e);
                    }
                }
                Err(e) => alert(&e),
            }
        });
    };

    // The backend ignores matchStatus, so the returned page is re-filtered
    // here. Pagination counters still reflect the unfiltered page.
    let visible_rows = move || -> Vec<Delivery> {
        let filter = applied.get().match_status;
        deliveries
            .get()
            .into_iter()
            .filter(|d| filter.accepts(d.match_status()))
            .collect()
    };

    load(1, true);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Out Deliveries"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load(page.get_untracked(), true)>
                        "Refresh"
                    </button>
                    <button class="button button--secondary" on:click=move |_| export_csv()>
                        "Export CSV"
                    </button>
                </div>
            </div>

            <div class="filter-panel" style="display: flex; flex-wrap: wrap; gap: 8px; align-items: center; padding: 8px 0;">
                <label>"From "
                    <input
                        type="date"
                        prop:value=move || draft_from.get()
                        on:input=move |ev| set_draft_from.set(event_target_value(&ev))
                    />
                </label>
                <label>"To "
                    <input
                        type="date"
                        prop:value=move || draft_to.get()
                        on:input=move |ev| set_draft_to.set(event_target_value(&ev))
                    />
                </label>
                <select
                    on:change=move |ev| set_draft_location.set(event_target_value(&ev))
                    prop:value=move || draft_location.get()
                >
                    <option value="">"All locations"</option>
                    {move || locations.get().into_iter().map(|loc| {
                        view! {
                            <option value={loc.id.to_string()}>{loc.abbreviation.clone()}</option>
                        }
                    }).collect_view()}
                </select>
                <select
                    on:change=move |ev| set_draft_match.set(MatchFilter::from_str(&event_target_value(&ev)))
                    prop:value=move || draft_match.get().as_str().to_string()
                >
                    {MatchFilter::OPTIONS.iter().map(|opt| {
                        view! { <option value={opt.as_str()}>{opt.as_str()}</option> }
                    }).collect_view()}
                </select>
                <SearchInput
                    on_change=Callback::new(move |term| set_draft_search.set(term))
                    placeholder="Search deliveries..."
                />
                <button class="button button--primary" on:click=move |_| apply_filters()>
                    "Apply"
                </button>
                <Show when=move || applied.get().is_active()>
                    <button class="button button--secondary" on:click=move |_| clear_filters()>
                        {move || format!("Clear filters ({})", applied.get().active_count())}
                    </button>
                </Show>
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
                                <th class="table__header-cell">"Sr No."</th>
                                <th class="table__header-cell">"Photo"</th>
                                <th class="table__header-cell">"Emp ID"</th>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Delivery"</th>
                                <th class="table__header-cell">"Vehicles"</th>
                                <th class="table__header-cell">"Vehicle Numbers"</th>
                                <th class="table__header-cell">"Manual Numbers"</th>
                                <th class="table__header-cell">"Packets"</th>
                                <th class="table__header-cell">"Location"</th>
                                <th class="table__header-cell">"Date & Time"</th>
                                <th class="table__header-cell">"Match"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let now = Local::now().naive_local();
                                let map = location_map.get();
                                let term = applied.get().search;
                                let base = (page.get().saturating_sub(1)) * per_page.get();
                                visible_rows().into_iter().enumerate().map(|(idx, d)| {
                                    let location_name = location_label(&map, &d.location_id);
                                    let vehicle_nos = d.vehicle_numbers().join(", ");
                                    let manual_nos = d.manual_numbers().join(", ");
                                    let match_status = d.match_status();
                                    let can_complete = d.can_complete(now);
                                    let can_delete = d.can_delete();
                                    let id = d.id;
                                    let maps_url = format!("https://www.google.com/maps?q={}", d.lat_long);
                                    let emp_pic = d.emp_pic.clone();
                                    let combined_pic = d.combined_vehicle_pic.clone().unwrap_or_default();
                                    let photos: Vec<String> = d.vehicle_pics().iter().map(|p| p.to_string()).collect();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{(base as usize) + idx + 1}</td>
                                            <td class="table__cell">
                                                {(!emp_pic.is_empty()).then(|| {
                                                    let pic = emp_pic.clone();
                                                    view! {
                                                        <img
                                                            src=emp_pic.clone()
                                                            alt="employee"
                                                            style="width: 36px; height: 36px; border-radius: 50%; object-fit: cover; cursor: pointer;"
                                                            on:click=move |_| set_dialog_image.set(Some(pic.clone()))
                                                        />
                                                    }
                                                })}
                                            </td>
                                            <td class="table__cell">{highlight_matches(&d.emp_id, &term)}</td>
                                            <td class="table__cell">{highlight_matches(&d.emp_name, &term)}</td>
                                            <td class="table__cell">{highlight_matches(&d.type_of_delivery, &term)}</td>
                                            <td class="table__cell">{format!("{} × {}", d.number_of_vehicle, d.type_of_vehicle)}</td>
                                            <td class="table__cell">
                                                {highlight_matches(&vehicle_nos, &term)}
                                                <span style="display: inline-flex; gap: 4px; margin-left: 6px;">
                                                    {photos.into_iter().map(|pic| {
                                                        let open = pic.clone();
                                                        view! {
                                                            <img
                                                                src=pic
                                                                alt="vehicle"
                                                                style="width: 24px; height: 24px; object-fit: cover; cursor: pointer; border-radius: 3px;"
                                                                on:click=move |_| set_dialog_image.set(Some(open.clone()))
                                                            />
                                                        }
                                                    }).collect_view()}
                                                    {(!combined_pic.is_empty()).then(|| {
                                                        let open = combined_pic.clone();
                                                        view! {
                                                            <img
                                                                src=combined_pic.clone()
                                                                alt="combined"
                                                                style="width: 24px; height: 24px; object-fit: cover; cursor: pointer; border-radius: 3px; border: 1px solid #999;"
                                                                on:click=move |_| set_dialog_image.set(Some(open.clone()))
                                                            />
                                                        }
                                                    })}
                                                </span>
                                            </td>
                                            <td class="table__cell">{highlight_matches(&manual_nos, &term)}</td>
                                            <td class="table__cell">{d.comp_name.clone()}</td>
                                            <td class="table__cell">
                                                <a href=maps_url target="_blank" rel="noopener">
                                                    {highlight_matches(&location_name, &term)}
                                                </a>
                                            </td>
                                            <td class="table__cell">{crate::shared::date_utils::format_datetime(&d.datetime)}</td>
                                            <td class="table__cell">
                                                <span style=match_badge_style(match_status.as_str())>
                                                    {match_status.as_str()}
                                                </span>
                                            </td>
                                            <td class="table__cell">{d.status.clone()}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--primary"
                                                    disabled=!can_complete
                                                    title=if can_complete { "Mark complete" } else { "Available 3 hours after entry" }
                                                    on:click=move |_| change_status(id, STATUS_COMPLETE, "Mark this delivery as complete?")
                                                >
                                                    "Complete"
                                                </button>
                                                <button
                                                    class="button button--secondary"
                                                    disabled=!can_delete
                                                    on:click=move |_| change_status(id, STATUS_DELETE, "Delete this delivery?")
                                                >
                                                    "Delete"
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
                total_pages=Signal::derive(move || page_info.get().total_pages)
                total_records=Signal::derive(move || page_info.get().total_records)
                page_size=Signal::derive(move || per_page.get())
                on_page_change=Callback::new(move |p| load(p, false))
                on_page_size_change=Callback::new(move |size| {
                    set_per_page.set(size);
                    load(1, true);
                })
                page_size_options=PER_PAGE_OPTIONS.to_vec()
            />

            <ImageDialog
                image_url=Signal::derive(move || dialog_image.get())
                on_close=Callback::new(move |_| set_dialog_image.set(None))
            />
        </div>
    }
}

fn match_badge_style(status: &str) -> &'static str {
    match status {
        "OK" => "background: #2e7d32; color: white; padding: 2px 8px; border-radius: 10px; font-size: 12px;",
        "Not OK" => "background: #c62828; color: white; padding: 2px 8px; border-radius: 10px; font-size: 12px;",
        _ => "background: #9e9e9e; color: white; padding: 2px 8px; border-radius: 10px; font-size: 12px;",
    }
}
