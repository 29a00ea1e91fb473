//! Voyages page: list, create, and delete flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route. It owns fetch/mutation orchestration: every
//! successful mutation marks the collection stale and re-fetches it
//! wholesale instead of patching rows in place, trading an extra round trip
//! for freedom from merge conflicts between concurrent mutations. Failed
//! mutations leave the displayed collection untouched.

#[cfg(test)]
#[path = "voyages_test.rs"]
mod voyages_test;

use leptos::prelude::*;
use schema::VoyageCandidate;

use crate::components::toast::ToastRegion;
use crate::components::voyage_sheet::VoyageSheet;
use crate::components::voyage_table::VoyageTable;
use crate::state::toast::ToastState;
use crate::state::voyages::VoyagesState;

/// Toast copy for a successful creation.
pub const CREATE_SUCCESS_TITLE: &str = "Success!";
pub const CREATE_SUCCESS_MESSAGE: &str = "New voyage has been created!";
/// Toast title for any failed mutation.
pub const FAILURE_TITLE: &str = "Oops!";

/// Fold a create outcome into toast state; returns whether the collection
/// should be re-fetched. Failures never touch the displayed collection.
pub fn record_create_outcome(toasts: &mut ToastState, outcome: &Result<(), String>) -> bool {
    match outcome {
        Ok(()) => {
            toasts.push_success(CREATE_SUCCESS_TITLE, CREATE_SUCCESS_MESSAGE);
            true
        }
        Err(message) => {
            toasts.push_error(FAILURE_TITLE, message);
            false
        }
    }
}

/// Fold a delete outcome into toast state; returns whether the collection
/// should be re-fetched. Successful deletes speak through the refreshed
/// table, so only failures raise a toast.
pub fn record_delete_outcome(toasts: &mut ToastState, outcome: &Result<(), String>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(message) => {
            toasts.push_error(FAILURE_TITLE, message);
            false
        }
    }
}

#[cfg(feature = "hydrate")]
async fn refresh(voyages: RwSignal<VoyagesState>) {
    let result = crate::net::api::fetch_voyages().await;
    voyages.update(|state| state.apply_fetch(result));
}

/// Voyages page — creation sheet, voyage table, and toast region.
#[component]
pub fn VoyagesPage() -> impl IntoView {
    let voyages = expect_context::<RwSignal<VoyagesState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    // Initial list fetch; SSR renders the loading state.
    #[cfg(feature = "hydrate")]
    {
        voyages.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            refresh(voyages).await;
        });
    }

    let on_create = Callback::new(move |candidate: VoyageCandidate| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::create_voyage(&candidate).await;
            let stale = toasts
                .try_update(|state| record_create_outcome(state, &outcome))
                .unwrap_or(false);
            if stale {
                refresh(voyages).await;
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = candidate;
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::delete_voyage(&id).await;
            let stale = toasts
                .try_update(|state| record_delete_outcome(state, &outcome))
                .unwrap_or(false);
            if stale {
                refresh(voyages).await;
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <main class="voyages-page">
            <div class="voyages-page__actions">
                <VoyageSheet on_create=on_create />
            </div>
            <Show when=move || voyages.get().error.is_some()>
                <p class="voyages-page__error">{move || voyages.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !voyages.get().loading
                fallback=move || view! { <p class="voyages-page__loading">"Loading voyages..."</p> }
            >
                <VoyageTable
                    voyages=Signal::derive(move || voyages.get().items)
                    on_delete=on_delete
                />
            </Show>
            <ToastRegion />
        </main>
    }
}
