/// List helpers: search-match highlighting and a debounced search box.
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Debounce window for free-text search, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Split `text` into runs, marking the case-insensitive matches of the
/// already-lowercased `filter_lower`.
///
/// Lowercasing can change byte length ('İ' lowers to two chars), so matches
/// are located in a per-char lowered copy whose byte offsets map back to
/// char boundaries of the original. A match that covers part of a lowered
/// expansion highlights the whole original char.
fn match_runs(text: &str, filter_lower: &str) -> Vec<(String, bool)> {
    let mut text_lower = String::with_capacity(text.len());
    // lowered byte index -> byte index of the originating char in `text`
    let mut origin: Vec<usize> = Vec::with_capacity(text.len());
    for (pos, ch) in text.char_indices() {
        for low in ch.to_lowercase() {
            for _ in 0..low.len_utf8() {
                origin.push(pos);
            }
            text_lower.push(low);
        }
    }

    let mut runs: Vec<(String, bool)> = Vec::new();
    let mut cursor = 0;
    let mut lower_pos = 0;
    while let Some(found) = text_lower[lower_pos..].find(filter_lower) {
        let lower_start = lower_pos + found;
        let lower_end = lower_start + filter_lower.len();
        lower_pos = lower_end;

        let start = origin[lower_start];
        let last = origin[lower_end - 1];
        let end = last
            + text[last..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(0);
        // a second hit inside the same expansion maps behind the cursor
        if start < cursor {
            continue;
        }
        if start > cursor {
            runs.push((text[cursor..start].to_string(), false));
        }
        runs.push((text[start..end].to_string(), true));
        cursor = end;
    }
    if cursor < text.len() {
        runs.push((text[cursor..].to_string(), false));
    }
    runs
}

/// Wrap the case-insensitive matches of `filter` inside `text` in a
/// highlighted span.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let parts: Vec<AnyView> = match_runs(text, &filter.to_lowercase())
        .into_iter()
        .map(|(fragment, matched)| {
            if matched {
                view! {
                    <span style="background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;">
                        {fragment}
                    </span>
                }
                .into_any()
            } else {
                view! { <span>{fragment}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::match_runs;

    fn runs(text: &str, filter: &str) -> Vec<(String, bool)> {
        match_runs(text, &filter.to_lowercase())
    }

    #[test]
    fn splits_around_case_insensitive_matches() {
        assert_eq!(
            runs("Ravi Kumar", "ravi"),
            vec![("Ravi".to_string(), true), (" Kumar".to_string(), false)]
        );
        assert_eq!(runs("no hit here", "xyz"), vec![("no hit here".to_string(), false)]);
    }

    #[test]
    fn repeated_matches_each_get_a_run() {
        assert_eq!(
            runs("MH12 MH14", "mh"),
            vec![
                ("MH".to_string(), true),
                ("12 ".to_string(), false),
                ("MH".to_string(), true),
                ("14".to_string(), false),
            ]
        );
    }

    #[test]
    fn length_changing_lowercase_stays_on_char_boundaries() {
        // 'İ' lowers to "i\u{307}", shifting every byte offset behind it
        assert_eq!(
            runs("İstanbul", "stanbul"),
            vec![("İ".to_string(), false), ("stanbul".to_string(), true)]
        );
        assert_eq!(
            runs("İstanbul", "i"),
            vec![("İ".to_string(), true), ("stanbul".to_string(), false)]
        );
    }
}

/// Search box with debounce and a clear button. The callback fires
/// `SEARCH_DEBOUNCE_MS` after the last keystroke.
#[component]
pub fn SearchInput(
    /// Callback for the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Raw input value, before debounce
    let (input_value, set_input_value) = signal(String::new());

    // Each keystroke bumps the generation; only the latest timer commits.
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let my_generation = generation.get_value() + 1;
        generation.set_value(my_generation);

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == my_generation {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        generation.update_value(|g| *g += 1);
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style="width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        "×"
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
