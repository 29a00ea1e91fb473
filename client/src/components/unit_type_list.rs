//! Unit-type detail list shown from the voyage table's count popover.

use leptos::prelude::*;
use schema::UnitType;

/// Names and default lengths of a voyage's unit types.
#[component]
pub fn UnitTypeList(unit_types: Vec<UnitType>) -> impl IntoView {
    view! {
        <ul class="unit-type-list">
            {unit_types
                .into_iter()
                .map(|unit| {
                    view! {
                        <li class="unit-type-list__item">
                            <span class="unit-type-list__name">{unit.name}</span>
                            <span class="unit-type-list__length">
                                {format!("{} m", unit.default_length)}
                            </span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
