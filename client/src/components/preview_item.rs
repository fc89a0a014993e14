//! One placed component in the page preview.
//!
//! ARCHITECTURE
//! ============
//! `PreviewItem` is mounted once per instance id. Each kind-specific body
//! reads its props through a `Memo` keyed by that id, so an edit re-renders
//! only the fields that changed and a carousel keeps its cursor while the
//! page around it changes.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use pagebuilder_model::{CarouselCursor, ComponentKind, sanitize_rich_text};
use uuid::Uuid;

use crate::state::builder::BuilderState;
use crate::util::preview::{EMPTY_CAROUSEL_MESSAGE, has_slides, image_alt, image_src, size_style, strip_offset_style};

/// Clickable wrapper that selects the instance and outlines it when selected.
#[component]
pub fn PreviewItem(id: Uuid, kind: ComponentKind) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let selected = Memo::new(move |_| builder.with(|b| b.is_selected(id)));

    let on_click = move |_ev: MouseEvent| {
        builder.maybe_update(|b| b.select_id(id).is_ok());
    };

    let body = match kind {
        ComponentKind::Text => view! { <TextPreview id/> }.into_any(),
        ComponentKind::Image => view! { <ImagePreview id/> }.into_any(),
        ComponentKind::Carousel => view! { <CarouselPreview id/> }.into_any(),
    };

    view! {
        <div
            class="preview-item"
            class:preview-item--selected=move || selected.get()
            data-kind=kind.as_str()
            data-label=kind.label()
            on:click=on_click
        >
            {body}
        </div>
    }
}

#[component]
fn TextPreview(id: Uuid) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let value = Memo::new(move |_| builder.with(|b| b.text_props(id).map(|p| p.value).unwrap_or_default()));
    let html = move || value.with(|raw| sanitize_rich_text(raw));

    view! {
        <div class="text-preview">
            <div class="text-preview__content" inner_html=html></div>
            <Show when=move || value.with(String::is_empty)>
                <span class="text-preview__placeholder">{ComponentKind::Text.label()}</span>
            </Show>
        </div>
    }
}

#[component]
fn ImagePreview(id: Uuid) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let props = Memo::new(move |_| builder.with(|b| b.image_props(id)).unwrap_or_default());

    let row_style = move || props.with(|p| format!("justify-content: {};", p.position.justify_content()));

    view! {
        <div class="image-preview" style=row_style>
            <img
                class="image-preview__img"
                src=move || props.with(|p| image_src(&p.src))
                alt=move || props.with(|p| image_alt(&p.alt))
                style=move || props.with(|p| size_style(p.width, p.height))
            />
        </div>
    }
}

/// Carousel body. The slide cursor lives here, not in the page.
#[component]
fn CarouselPreview(id: Uuid) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let props = Memo::new(move |_| builder.with(|b| b.carousel_props(id)).unwrap_or_default());
    let cursor = RwSignal::new(CarouselCursor::new());

    let len = move || props.with(|p| p.images.len());

    let on_prev = move |ev: MouseEvent| {
        ev.stop_propagation();
        let len = len();
        cursor.update(|c| c.prev(len));
    };
    let on_next = move |ev: MouseEvent| {
        ev.stop_propagation();
        let len = len();
        cursor.update(|c| c.next(len));
    };

    let slides = move || {
        props.with(|p| {
            p.images
                .iter()
                .map(|url| view! { <img class="carousel-preview__slide" src=url.clone() alt=""/> })
                .collect_view()
        })
    };

    view! {
        <div class="carousel-preview" style=move || props.with(|p| size_style(p.width, p.height))>
            <Show
                when=move || has_slides(len())
                fallback=|| view! { <div class="carousel-preview__empty">{EMPTY_CAROUSEL_MESSAGE}</div> }
            >
                <div
                    class="carousel-preview__strip"
                    style=move || strip_offset_style(cursor.get().offset_percent(len()))
                >
                    {slides}
                </div>
            </Show>
            <Show when=move || CarouselCursor::has_controls(len())>
                <button class="carousel-preview__nav carousel-preview__nav--prev" on:click=on_prev>
                    "\u{276E}"
                </button>
                <button class="carousel-preview__nav carousel-preview__nav--next" on:click=on_next>
                    "\u{276F}"
                </button>
            </Show>
        </div>
    }
}
