//! Builder page: the sidebar beside the live page preview.

use leptos::prelude::*;

use crate::components::preview_panel::PreviewPanel;
use crate::components::sidebar::Sidebar;

#[component]
pub fn BuilderPage() -> impl IntoView {
    view! {
        <div class="builder">
            <header class="builder__header">
                <h1 class="builder__title">"Page Builder"</h1>
            </header>
            <div class="builder__body">
                <Sidebar/>
                <PreviewPanel/>
            </div>
        </div>
    }
}
