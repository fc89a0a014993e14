//! Draggable component templates shown while nothing is selected.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use leptos::ev::DragEvent;
use leptos::prelude::*;
use pagebuilder_model::ComponentKind;

use crate::state::builder::BuilderState;

#[cfg(feature = "hydrate")]
const DRAG_MIME: &str = "text/plain";

fn describe(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Text => "Headings, paragraphs and lists written in HTML",
        ComponentKind::Image => "A single image with size and alignment",
        ComponentKind::Carousel => "A row of images with previous/next controls",
    }
}

/// Palette tiles for every component kind.
#[component]
pub fn Palette() -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();

    let tiles = ComponentKind::ALL
        .into_iter()
        .map(|kind| {
            let on_dragstart = move |ev: DragEvent| {
                let tag = kind.as_str();
                #[cfg(feature = "hydrate")]
                {
                    // Firefox refuses to start a drag without a payload.
                    if let Some(transfer) = ev.data_transfer() {
                        if let Err(err) = transfer.set_data(DRAG_MIME, tag) {
                            log::warn!("drag payload for {tag} rejected: {err:?}");
                        }
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = ev;
                builder.maybe_update(|b| b.begin_drag(tag).is_ok());
            };
            let on_dragend = move |_ev: DragEvent| {
                builder.maybe_update(BuilderState::cancel_drag);
            };

            view! {
                <div
                    class="palette__tile"
                    draggable="true"
                    data-kind=kind.as_str()
                    on:dragstart=on_dragstart
                    on:dragend=on_dragend
                >
                    <span class="palette__label">{kind.label()}</span>
                    <span class="palette__hint">{describe(kind)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="palette">
            <h2 class="palette__title">"Components"</h2>
            <p class="palette__intro">"Drag a component onto the page."</p>
            {tiles}
        </div>
    }
}
