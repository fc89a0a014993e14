//! Left-hand panel: the palette, or the property editor for the selection.
//!
//! The sidebar is also a drop zone. It highlights while a template hovers
//! over it, but a drop here adds nothing to the page.

use leptos::prelude::*;
use pagebuilder_model::DropZone;

use crate::components::drop_zone;
use crate::components::palette::Palette;
use crate::components::property_editor::PropertyEditor;
use crate::state::builder::BuilderState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let zone = DropZone::Edit;

    let highlighted = move || builder.with(|b| b.drag.is_highlighted(zone));
    let has_selection = Memo::new(move |_| builder.with(|b| b.page.editing().is_some()));

    let on_back = move |_ev: leptos::ev::MouseEvent| {
        builder.update(BuilderState::deselect);
    };

    view! {
        <aside
            class="sidebar"
            class:sidebar--hover=highlighted
            on:dragenter=drop_zone::on_enter(builder, zone)
            on:dragover=drop_zone::on_over(builder, zone)
            on:dragleave=drop_zone::on_leave(builder, zone)
            on:drop=drop_zone::on_drop(builder, zone)
        >
            <Show when=move || has_selection.get() fallback=|| view! { <Palette/> }>
                <button class="sidebar__back" on:click=on_back>
                    "Back to components"
                </button>
                <PropertyEditor/>
            </Show>
        </aside>
    }
}
