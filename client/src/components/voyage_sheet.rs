//! Slide-over panel hosting the voyage creation form.
//!
//! DESIGN
//! ======
//! The panel closes the moment a valid draft is submitted, before the create
//! request settles; the outcome is reported through a toast instead of
//! keeping the user parked on the form. The form mounts fresh on every open,
//! so raw field state never leaks between sessions.

use leptos::prelude::*;
use schema::VoyageCandidate;

use crate::components::voyage_form::VoyageForm;

/// Trigger button plus the creation panel. Forwards a submitted candidate to
/// `on_create` after dismissing itself.
#[component]
pub fn VoyageSheet(on_create: Callback<VoyageCandidate>) -> impl IntoView {
    let open = RwSignal::new(false);

    let on_submit = Callback::new(move |candidate: VoyageCandidate| {
        open.set(false);
        on_create.run(candidate);
    });

    view! {
        <button class="btn btn--primary" on:click=move |_| open.set(true)>
            "Create"
        </button>
        <Show when=move || open.get()>
            <div class="sheet-backdrop" on:click=move |_| open.set(false)>
                <aside class="sheet" on:click=move |ev| ev.stop_propagation()>
                    <header class="sheet__header">
                        <h2 class="sheet__title">"Create a new voyage"</h2>
                        <p class="sheet__description">"This will create a brand new voyage"</p>
                    </header>
                    <VoyageForm on_submit=on_submit />
                </aside>
            </div>
        </Show>
    }
}
