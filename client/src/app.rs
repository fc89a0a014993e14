//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::builder::BuilderPage;
use crate::state::builder::BuilderState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the builder state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let builder = RwSignal::new(BuilderState::default());
    provide_context(builder);

    view! {
        <Stylesheet id="leptos" href="/pkg/pagebuilder.css"/>
        <Title text="Page Builder"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BuilderPage/>
            </Routes>
        </Router>
    }
}
