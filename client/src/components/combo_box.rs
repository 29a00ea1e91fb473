//! Generic searchable single-select dropdown.
//!
//! DESIGN
//! ======
//! Options are plain value/label pairs, so the control carries no domain
//! knowledge; the voyage form parameterizes it for vessels. The control is a
//! pure function of `(options, current selection)` and reports changes
//! through a callback rather than owning the selection itself.

#[cfg(test)]
#[path = "combo_box_test.rs"]
mod combo_box_test;

use leptos::prelude::*;

/// A selectable value/label pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Case-insensitive substring filter over option labels.
#[must_use]
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Trigger label for the current selection, or the placeholder when the
/// selected value is empty or unknown.
#[must_use]
pub fn selected_label(options: &[SelectOption], value: &str, placeholder: &str) -> String {
    options
        .iter()
        .find(|option| option.value == value)
        .map_or_else(|| placeholder.to_owned(), |option| option.label.clone())
}

/// Searchable single-select; `value` holds the selected option's value or
/// the empty string, and `on_change` receives the newly selected value.
#[component]
pub fn ComboBox(
    value: Signal<String>,
    on_change: Callback<String>,
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
        move || view! { <p class="combo-box__empty">{message.clone()}</p> }
    };

    view! {
        <div class="combo-box">
            <button
                type="button"
                class="combo-box__trigger"
                on:click=move |_| {
                    open.update(|o| *o = !*o);
                    query.set(String::new());
                }
            >
                {
                    let placeholder = placeholder.clone();
                    move || selected_label(&options.get(), &value.get(), &placeholder)
                }
            </button>
            <Show when=move || open.get()>
                <div class="combo-box__popover">
                    <input
                        class="combo-box__search"
                        type="text"
                        placeholder=search_message.clone()
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <Show when=has_matches fallback=empty_fallback()>
                        <ul class="combo-box__options">
                            {move || {
                                filtered()
                                    .into_iter()
                                    .map(|option| {
                                        let chosen = option.value.clone();
                                        let current = option.value.clone();
                                        view! {
                                            <li>
                                                <button
                                                    type="button"
                                                    class="combo-box__option"
                                                    class:combo-box__option--selected=move || {
                                                        value.get() == current
                                                    }
                                                    on:click=move |_| {
                                                        on_change.run(chosen.clone());
                                                        open.set(false);
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
