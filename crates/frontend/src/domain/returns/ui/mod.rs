use contracts::domain::common::MatchFilter;
use contracts::domain::delivery::QueryScope;
use contracts::domain::location::location_label;
use contracts::domain::returns::{export_row, ReturnFilters, ReturnRecord, EXPORT_HEADER, PER_PAGE};
use contracts::shared::csv::build_csv;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::image_dialog::ImageDialog;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::download_csv;
use crate::shared::locations::use_locations;
use crate::system::auth::context::use_session;

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

#[component]
pub fn ReturnList() -> impl IntoView {
    let (session, _) = use_session();
    let (locations, location_map) = use_locations();

    let (records, set_records) = signal(Vec::<ReturnRecord>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    // 1-indexed; fixed page size, client-side
    let (page, set_page) = signal(1usize);

    let (from_date, set_from_date) = signal(String::new());
    let (to_date, set_to_date) = signal(String::new());
    let (location_filter, set_location_filter) = signal(String::new());
    let (match_filter, set_match_filter) = signal(MatchFilter::All);

    let filters = move || ReturnFilters {
        from_date: from_date.get(),
        to_date: to_date.get(),
        location_id: location_filter.get().parse().ok(),
        match_status: match_filter.get(),
    };

    let load = move || {
        let scope = QueryScope::from_user(session.get_untracked().user.as_ref());
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_returns(&scope).await {
                Ok(list) => {
                    set_records.set(list);
                    set_page.set(1);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let filtered = move || filters().apply(&records.get());

    let total_pages = move || {
        let len = filtered().len();
        if len == 0 {
            1
        } else {
            len.div_ceil(PER_PAGE)
        }
    };

    let export_csv = move || {
        let map = location_map.get_untracked();
        let rows: Vec<Vec<String>> = filtered()
            .iter()
            .map(|r| export_row(r, &location_label(&map, &r.location_id)))
            .collect();
        if rows.is_empty() {
            alert("No returns to export");
            return;
        }
        let csv = build_csv(&EXPORT_HEADER, &rows);
        if let Err(e) = download_csv(&csv, "returns.csv") {
            alert(&e);
        }
    };

    let (dialog_image, set_dialog_image) = signal(Option::<String>::None);

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Returns"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load()>
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
                        prop:value=move || from_date.get()
                        on:input=move |ev| {
                            set_from_date.set(event_target_value(&ev));
                            set_page.set(1);
                        }
                    />
                </label>
                <label>"To "
                    <input
                        type="date"
                        prop:value=move || to_date.get()
                        on:input=move |ev| {
                            set_to_date.set(event_target_value(&ev));
                            set_page.set(1);
                        }
                    />
                </label>
                <select
                    on:change=move |ev| {
                        set_location_filter.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                    prop:value=move || location_filter.get()
                >
                    <option value="">"All locations"</option>
                    {move || locations.get().into_iter().map(|loc| {
                        view! {
                            <option value={loc.id.to_string()}>{loc.abbreviation.clone()}</option>
                        }
                    }).collect_view()}
                </select>
                <select
                    on:change=move |ev| {
                        set_match_filter.set(MatchFilter::from_str(&event_target_value(&ev)));
                        set_page.set(1);
                    }
                    prop:value=move || match_filter.get().as_str().to_string()
                >
                    {MatchFilter::OPTIONS.iter().map(|opt| {
                        view! { <option value={opt.as_str()}>{opt.as_str()}</option> }
                    }).collect_view()}
                </select>
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
                                <th class="table__header-cell">"Vehicle Number"</th>
                                <th class="table__header-cell">"Manual Number"</th>
                                <th class="table__header-cell">"No. of Packets"</th>
                                <th class="table__header-cell">"Location"</th>
                                <th class="table__header-cell">"Date & Time"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let map = location_map.get();
                                let all = filtered();
                                let total = all.len();
                                let start = (page.get() - 1) * PER_PAGE;
                                all.into_iter().skip(start).take(PER_PAGE).enumerate().map(|(idx, r)| {
                                    // serial numbers count down from the filtered total
                                    let sr_no = total - (start + idx);
                                    let location_name = location_label(&map, &r.location_id);
                                    let maps_url = format!("https://www.google.com/maps?q={}", r.lat_long);
                                    let status = r.match_status();
                                    let pic = r.pic.clone();
                                    let combined = r.combined_pic.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{sr_no}</td>
                                            <td class="table__cell">
                                                <span style="display: inline-flex; gap: 4px;">
                                                    {(!pic.is_empty()).then(|| {
                                                        let open = pic.clone();
                                                        view! {
                                                            <img
                                                                src=pic.clone()
                                                                alt="return"
                                                                style="width: 28px; height: 28px; object-fit: cover; cursor: pointer; border-radius: 3px;"
                                                                on:click=move |_| set_dialog_image.set(Some(open.clone()))
                                                            />
                                                        }
                                                    })}
                                                    {(!combined.is_empty()).then(|| {
                                                        let open = combined.clone();
                                                        view! {
                                                            <img
                                                                src=combined.clone()
                                                                alt="combined"
                                                                style="width: 28px; height: 28px; object-fit: cover; cursor: pointer; border-radius: 3px; border: 1px solid #999;"
                                                                on:click=move |_| set_dialog_image.set(Some(open.clone()))
                                                            />
                                                        }
                                                    })}
                                                </span>
                                            </td>
                                            <td class="table__cell">{r.vehicle_number.clone()}</td>
                                            <td class="table__cell">{r.manual_number.clone()}</td>
                                            <td class="table__cell">{r.no_of_packets.clone()}</td>
                                            <td class="table__cell">
                                                <a href=maps_url target="_blank" rel="noopener">{location_name}</a>
                                            </td>
                                            <td class="table__cell">{format_datetime(&r.date_time)}</td>
                                            <td class="table__cell">{status.as_str()}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "‹"
                </button>
                <span class="pagination-info">
                    {move || format!("{} / {} ({})", page.get(), total_pages(), filtered().len())}
                </span>
                <button
                    class="pagination-btn"
                    disabled=move || page.get() >= total_pages()
                    on:click=move |_| set_page.update(|p| *p += 1)
                >
                    "›"
                </button>
            </div>

            <ImageDialog
                image_url=Signal::derive(move || dialog_image.get())
                on_close=Callback::new(move |_| set_dialog_image.set(None))
            />
        </div>
    }
}
