//! Toast region rendering transient mutation outcomes.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Fixed-position stack of active toasts with per-toast dismissal.
#[component]
pub fn ToastRegion() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-region">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let is_error = toast.kind == ToastKind::Error;
                        view! {
                            <div class="toast" class:toast--error=is_error>
                                <strong class="toast__title">{toast.title}</strong>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
