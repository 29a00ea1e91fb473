//! Application shell: router, head metadata, and shared context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The voyage list and toast containers are provided here as `RwSignal`
//! context so the page and the toast region read the same state regardless
//! of where a mutation was started.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::voyages::VoyagesPage;
use crate::state::toast::ToastState;
use crate::state::voyages::VoyagesState;

/// HTML document shell used by SSR; hydration replaces the `<body>` contents.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root component: provides shared state and mounts the single route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(VoyagesState::default()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/portside.css" />
        <Title text="Voyages | Portside" />
        <Router>
            <Routes fallback=|| "Not found.">
                <Route path=path!("/") view=VoyagesPage />
            </Routes>
        </Router>
    }
}
