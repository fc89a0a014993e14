//! Page preview and the only drop zone that appends components.

use leptos::prelude::*;
use pagebuilder_model::{ComponentKind, DropZone};
use uuid::Uuid;

use crate::components::drop_zone;
use crate::components::preview_item::PreviewItem;
use crate::state::builder::BuilderState;

/// Renders every instance in page order, keyed by instance id so per-item
/// view state (carousel cursors) survives edits and removals elsewhere.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let zone = DropZone::Preview;

    let highlighted = move || builder.with(|b| b.drag.is_highlighted(zone));
    let entries = Memo::new(move |_| {
        builder.with(|b| {
            b.page
                .instances()
                .iter()
                .map(|instance| (instance.id(), instance.kind()))
                .collect::<Vec<(Uuid, ComponentKind)>>()
        })
    });

    view! {
        <main
            class="preview"
            class:preview--hover=highlighted
            on:dragenter=drop_zone::on_enter(builder, zone)
            on:dragover=drop_zone::on_over(builder, zone)
            on:dragleave=drop_zone::on_leave(builder, zone)
            on:drop=drop_zone::on_drop(builder, zone)
        >
            <Show when=move || entries.with(Vec::is_empty)>
                <p class="preview__empty">"Drop components here to build the page."</p>
            </Show>
            <For
                each=move || entries.get()
                key=|entry: &(Uuid, ComponentKind)| entry.0
                children=move |(id, kind)| view! { <PreviewItem id kind/> }
            />
        </main>
    }
}
