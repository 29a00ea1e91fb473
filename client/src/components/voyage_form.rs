//! Voyage creation form: field state, validation, and candidate emission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `RawFormState` for the life of the creation panel and starts the
//! vessel/unit-type reference fetches on mount; the selection widgets render
//! empty until those land, without blocking the other fields. Submitting runs
//! the draft validator — an invalid draft surfaces per-field messages and
//! makes no network call, a valid one is emitted through `on_submit`. The
//! form performs no voyage I/O itself, keeping it independent of transport.

#[cfg(test)]
#[path = "voyage_form_test.rs"]
mod voyage_form_test;

use leptos::prelude::*;
use schema::{UnitType, Vessel, VoyageCandidate};

use crate::components::combo_box::{ComboBox, SelectOption};
use crate::components::multi_select::MultiSelect;
use crate::state::draft::{Field, FieldError, validate};
use crate::state::form::RawFormState;
use crate::util::clock;
use crate::util::format::{format_input_date, parse_input_date};

/// Vessels as combo-box options.
#[must_use]
pub fn vessel_options(vessels: &[Vessel]) -> Vec<SelectOption> {
    vessels
        .iter()
        .map(|vessel| SelectOption::new(vessel.id.clone(), vessel.name.clone()))
        .collect()
}

/// Unit types as multi-select options.
#[must_use]
pub fn unit_type_options(unit_types: &[UnitType]) -> Vec<SelectOption> {
    unit_types
        .iter()
        .map(|unit| SelectOption::new(unit.id.clone(), unit.name.clone()))
        .collect()
}

/// First message attached to `field`, if any.
#[must_use]
pub fn field_message(errors: &[FieldError], field: Field) -> Option<String> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message.clone())
}

/// The voyage creation form. Emits a validated candidate through `on_submit`.
#[component]
pub fn VoyageForm(on_submit: Callback<VoyageCandidate>) -> impl IntoView {
    let form = RwSignal::new(RawFormState::fresh(clock::today()));
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let vessels = RwSignal::new(Vec::<Vessel>::new());
    let unit_types = RwSignal::new(Vec::<UnitType>::new());

    // Reference data loads in the background; a failed fetch leaves the
    // widget empty rather than blocking the form.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::api::fetch_vessels().await {
                vessels.set(list);
            }
        });
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::api::fetch_unit_types().await {
                unit_types.set(list);
            }
        });
    }

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate(&form.get()) {
            Ok(candidate) => {
                errors.set(Vec::new());
                on_submit.run(candidate);
            }
            Err(failures) => errors.set(failures),
        }
    };

    view! {
        <form class="voyage-form" on:submit=on_form_submit>
            <div class="voyage-form__group">
                <label class="voyage-form__label">
                    "Departure"
                    <input
                        class="voyage-form__input"
                        type="date"
                        prop:value=move || {
                            form.get().departure_date.map(format_input_date).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            form.update(|f| {
                                f.departure_date = parse_input_date(&event_target_value(&ev));
                            });
                        }
                    />
                </label>
                <FieldMessage errors=errors field=Field::DepartureDate />
                <label class="voyage-form__label voyage-form__label--time">
                    "Time"
                    <input
                        class="voyage-form__input voyage-form__input--time"
                        type="time"
                        prop:value=move || form.get().departure_time
                        on:input=move |ev| {
                            form.update(|f| f.departure_time = event_target_value(&ev));
                        }
                    />
                </label>
                <FieldMessage errors=errors field=Field::DepartureTime />
            </div>

            <div class="voyage-form__group">
                <label class="voyage-form__label">
                    "Arrival"
                    <input
                        class="voyage-form__input"
                        type="date"
                        prop:value=move || {
                            form.get().arrival_date.map(format_input_date).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            form.update(|f| {
                                f.arrival_date = parse_input_date(&event_target_value(&ev));
                            });
                        }
                    />
                </label>
                <FieldMessage errors=errors field=Field::ArrivalDate />
                <label class="voyage-form__label voyage-form__label--time">
                    "Time"
                    <input
                        class="voyage-form__input voyage-form__input--time"
                        type="time"
                        prop:value=move || form.get().arrival_time
                        on:input=move |ev| {
                            form.update(|f| f.arrival_time = event_target_value(&ev));
                        }
                    />
                </label>
                <FieldMessage errors=errors field=Field::ArrivalTime />
            </div>

            <label class="voyage-form__label">
                "Port of loading"
                <input
                    class="voyage-form__input"
                    type="text"
                    placeholder="Oslo"
                    prop:value=move || form.get().port_of_loading
                    on:input=move |ev| {
                        form.update(|f| f.port_of_loading = event_target_value(&ev));
                    }
                />
                <span class="voyage-form__description">"The beginning of the voyage"</span>
            </label>
            <FieldMessage errors=errors field=Field::PortOfLoading />

            <label class="voyage-form__label">
                "Port of discharge"
                <input
                    class="voyage-form__input"
                    type="text"
                    placeholder="Copenhagen"
                    prop:value=move || form.get().port_of_discharge
                    on:input=move |ev| {
                        form.update(|f| f.port_of_discharge = event_target_value(&ev));
                    }
                />
                <span class="voyage-form__description">"The destination of the voyage"</span>
            </label>
            <FieldMessage errors=errors field=Field::PortOfDischarge />

            <div class="voyage-form__label">
                "Vessel"
                <ComboBox
                    value=Signal::derive(move || form.get().vessel)
                    on_change=Callback::new(move |vessel| form.update(|f| f.vessel = vessel))
                    options=Signal::derive(move || vessel_options(&vessels.get()))
                    placeholder="Select vessel"
                    empty_message="No vessel found."
                    search_message="Search vessel..."
                />
            </div>
            <FieldMessage errors=errors field=Field::Vessel />

            <div class="voyage-form__label">
                "Unit types"
                <MultiSelect
                    value=Signal::derive(move || form.get().unit_types)
                    on_change=Callback::new(move |selection| {
                        form.update(|f| f.unit_types = selection);
                    })
                    options=Signal::derive(move || unit_type_options(&unit_types.get()))
                    placeholder="Select unit types"
                    empty_message="No unit types found."
                    search_message="Search unit types..."
                />
            </div>
            <FieldMessage errors=errors field=Field::UnitTypes />

            <button class="btn btn--primary" type="submit">
                "Submit"
            </button>
        </form>
    }
}

/// Inline validation message for one field, hidden when the field is clean.
#[component]
fn FieldMessage(errors: RwSignal<Vec<FieldError>>, field: Field) -> impl IntoView {
    view! {
        <Show when=move || field_message(&errors.get(), field).is_some()>
            <p class="voyage-form__error">
                {move || field_message(&errors.get(), field).unwrap_or_default()}
            </p>
        </Show>
    }
}
