//! Generic searchable multi-select with toggled entries.
//!
//! DESIGN
//! ======
//! Shares `SelectOption` and the label filter with `ComboBox`; the only
//! difference is plural selection. Clicking an option toggles it and the
//! whole new selection is reported through the callback, so the parent
//! remains the single owner of the value.

#[cfg(test)]
#[path = "multi_select_test.rs"]
mod multi_select_test;

use leptos::prelude::*;

use super::combo_box::{SelectOption, filter_options};

/// Toggle `value` in or out of `selection`, preserving insertion order.
#[must_use]
pub fn toggle_selection(mut selection: Vec<String>, value: &str) -> Vec<String> {
    if let Some(position) = selection.iter().position(|v| v == value) {
        selection.remove(position);
    } else {
        selection.push(value.to_owned());
    }
    selection
}

/// Trigger label: the placeholder when nothing is selected, else a count.
#[must_use]
pub fn selection_summary(count: usize, placeholder: &str) -> String {
    if count == 0 {
        placeholder.to_owned()
    } else {
        format!("{count} selected")
    }
}

/// Searchable multi-select; `value` holds the selected option values in
/// selection order and `on_change` receives the full toggled selection.
#[component]
pub fn MultiSelect(
    value: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] placeholder: String,
    #[prop(into)] empty_message: String,
    #[prop(into)] search_message: String,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    let filtered = move || filter_options(&options.get(), &query.get());
    let has_matches = move || !filtered().is_empty();
    let empty_fallback = move || {
        let message = empty_message.clone();
        move || view! { <p class="multi-select__empty">{message.clone()}</p> }
    };

    view! {
        <div class="multi-select">
            <button
                type="button"
                class="multi-select__trigger"
                on:click=move |_| {
                    open.update(|o| *o = !*o);
                    query.set(String::new());
                }
            >
                {
                    let placeholder = placeholder.clone();
                    move || selection_summary(value.get().len(), &placeholder)
                }
            </button>
            <Show when=move || open.get()>
                <div class="multi-select__popover">
                    <input
                        class="multi-select__search"
                        type="text"
                        placeholder=search_message.clone()
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <Show when=has_matches fallback=empty_fallback()>
                        <ul class="multi-select__options">
                            {move || {
                                filtered()
                                    .into_iter()
                                    .map(|option| {
                                        let toggled = option.value.clone();
                                        let current = option.value.clone();
                                        view! {
                                            <li>
                                                <button
                                                    type="button"
                                                    class="multi-select__option"
                                                    class:multi-select__option--selected=move || {
                                                        value.get().iter().any(|v| *v == current)
                                                    }
                                                    on:click=move |_| {
                                                        on_change
                                                            .run(toggle_selection(value.get(), &toggled));
                                                    }
                                                >
                                                    {option.label.clone()}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
