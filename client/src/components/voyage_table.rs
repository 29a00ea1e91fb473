//! Voyage table with per-row unit-type popover and delete action.

use leptos::prelude::*;
use schema::Voyage;

use super::unit_type_list::UnitTypeList;
use crate::util::format::table_timestamp;

/// The voyage collection as a table. Clicking a unit-type count expands the
/// detail popover; the delete button reports the row's id to `on_delete`.
#[component]
pub fn VoyageTable(
    #[prop(into)] voyages: Signal<Vec<Voyage>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    // At most one popover open at a time, keyed by voyage id.
    let expanded = RwSignal::new(None::<String>);

    view! {
        <table class="voyage-table">
            <thead>
                <tr>
                    <th>"Departure"</th>
                    <th>"Arrival"</th>
                    <th>"Port of loading"</th>
                    <th>"Port of discharge"</th>
                    <th>"Vessel"</th>
                    <th>"Unit types"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    voyages
                        .get()
                        .into_iter()
                        .map(|voyage| {
                            view! { <VoyageRow voyage=voyage expanded=expanded on_delete=on_delete /> }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn VoyageRow(
    voyage: Voyage,
    expanded: RwSignal<Option<String>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let toggle_id = voyage.id.clone();
    let row_id = voyage.id.clone();
    let delete_id = voyage.id.clone();
    let unit_types = voyage.unit_types.clone();
    let count = voyage.unit_types.len();

    view! {
        <tr class="voyage-table__row">
            <td>{table_timestamp(voyage.scheduled_departure)}</td>
            <td>{table_timestamp(voyage.scheduled_arrival)}</td>
            <td>{voyage.port_of_loading}</td>
            <td>{voyage.port_of_discharge}</td>
            <td>{voyage.vessel.name}</td>
            <td
                class="voyage-table__unit-count"
                on:click=move |_| {
                    expanded.update(|current| {
                        *current = if current.as_deref() == Some(toggle_id.as_str()) {
                            None
                        } else {
                            Some(toggle_id.clone())
                        };
                    });
                }
            >
                {count}
                <Show when=move || expanded.get().as_deref() == Some(row_id.as_str())>
                    <div class="voyage-table__popover" on:click=move |ev| ev.stop_propagation()>
                        <UnitTypeList unit_types=unit_types.clone() />
                    </div>
                </Show>
            </td>
            <td>
                <button class="btn btn--outline" on:click=move |_| on_delete.run(delete_id.clone())>
                    "X"
                </button>
            </td>
        </tr>
    }
}
