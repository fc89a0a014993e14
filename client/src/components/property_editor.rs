//! Property form for the selected instance.
//!
//! ARCHITECTURE
//! ============
//! Every field writes straight back to the page on each input event; there
//! is no draft state and no save step. The form is rebuilt only when the
//! selection moves to a different instance, so typing never remounts the
//! field under the caret.

#[cfg(test)]
#[path = "property_editor_test.rs"]
mod property_editor_test;

use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use pagebuilder_model::{ComponentKind, ImagePosition, PropertyEdit, parse_dimension};
use uuid::Uuid;

use crate::state::builder::BuilderState;
use crate::util::preview::{PLACEHOLDER_IMAGE_URL, format_dimension};

/// Apply `edit`, notifying subscribers only when the page accepted it.
fn apply_edit(builder: RwSignal<BuilderState>, edit: PropertyEdit) {
    builder.maybe_update(|b| b.edit(edit).is_ok());
}

/// Parse numeric field text and apply it to the selection. Unparseable
/// input is logged and the last accepted value stays. Returns whether the
/// page changed.
fn apply_dimension(state: &mut BuilderState, raw: &str, to_edit: fn(f64) -> PropertyEdit) -> bool {
    match parse_dimension(raw) {
        Ok(value) => state.edit(to_edit(value)).is_ok(),
        Err(err) => {
            log::warn!("dimension input ignored: {err} ({})", err.code());
            false
        }
    }
}

fn position_label(position: ImagePosition) -> &'static str {
    match position {
        ImagePosition::Start => "Left",
        ImagePosition::Center => "Center",
        ImagePosition::End => "Right",
    }
}

/// Editor for whichever instance is selected, plus its delete action.
#[component]
pub fn PropertyEditor() -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let target = Memo::new(move |_| builder.with(|b| b.page.editing().map(|i| (i.id(), i.kind()))));

    let on_delete = move |_ev: MouseEvent| {
        builder.maybe_update(|b| b.remove_selected().is_ok());
    };

    view! {
        <section class="property-editor">
            {move || {
                target
                    .get()
                    .map(|(id, kind)| {
                        let fields = match kind {
                            ComponentKind::Text => view! { <TextFields id/> }.into_any(),
                            ComponentKind::Image => view! { <ImageFields id/> }.into_any(),
                            ComponentKind::Carousel => view! { <CarouselFields id/> }.into_any(),
                        };
                        view! {
                            <h2 class="property-editor__title">{kind.label()}</h2>
                            {fields}
                        }
                    })
            }}
            <button class="property-editor__delete" on:click=on_delete>
                "Delete"
            </button>
        </section>
    }
}

#[component]
fn TextFields(id: Uuid) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let value = move || builder.with(|b| b.text_props(id).map(|p| p.value).unwrap_or_default());

    view! {
        <label class="property-editor__field">
            <span>"Content"</span>
            <span class="property-editor__hint">"(HTML tags supported)"</span>
            <textarea
                class="property-editor__textarea"
                prop:value=value
                on:input=move |ev| apply_edit(builder, PropertyEdit::TextValue(event_target_value(&ev)))
            ></textarea>
        </label>
    }
}

#[component]
fn ImageFields(id: Uuid) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let props = Memo::new(move |_| builder.with(|b| b.image_props(id)).unwrap_or_default());
    let initial = props.get_untracked();
    let group = format!("image-position-{id}");

    let radios = ImagePosition::ALL
        .into_iter()
        .map(|position| {
            let on_change = move |_ev: Event| apply_edit(builder, PropertyEdit::ImagePosition(position));
            view! {
                <label class="property-editor__radio">
                    <input
                        type="radio"
                        name=group.clone()
                        value=position.as_str()
                        prop:checked=move || props.with(|p| p.position == position)
                        on:change=on_change
                    />
                    <span>{position_label(position)}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <label class="property-editor__field">
            <span>"Image URL"</span>
            <input
                type="text"
                class="property-editor__input"
                placeholder=PLACEHOLDER_IMAGE_URL
                prop:value=move || props.with(|p| p.src.clone())
                on:input=move |ev| apply_edit(builder, PropertyEdit::ImageSrc(event_target_value(&ev)))
            />
        </label>
        <label class="property-editor__field">
            <span>"Description"</span>
            <input
                type="text"
                class="property-editor__input"
                placeholder="Describe the image"
                prop:value=move || props.with(|p| p.alt.clone())
                on:input=move |ev| apply_edit(builder, PropertyEdit::ImageAlt(event_target_value(&ev)))
            />
            <span class="property-editor__hint">"(only shown when the link fails)"</span>
        </label>
        <DimensionField label="Width" initial=initial.width to_edit=PropertyEdit::Width/>
        <DimensionField label="Height" initial=initial.height to_edit=PropertyEdit::Height/>
        <div class="property-editor__radios">{radios}</div>
    }
}

#[component]
fn CarouselFields(id: Uuid) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let props = Memo::new(move |_| builder.with(|b| b.carousel_props(id)).unwrap_or_default());
    let initial = props.get_untracked();
    let slot_count = Memo::new(move |_| props.with(|p| p.images.len()));

    let on_add = move |_ev: MouseEvent| apply_edit(builder, PropertyEdit::AddCarouselSlot);

    view! {
        <div class="property-editor__field">
            <span>"Image URLs"</span>
            <For
                each=move || 0..slot_count.get()
                key=|slot: &usize| *slot
                children=move |slot| {
                    let url = move || props.with(|p| p.images.get(slot).cloned().unwrap_or_default());
                    view! {
                        <input
                            type="text"
                            class="property-editor__input"
                            prop:value=url
                            on:input=move |ev| {
                                apply_edit(builder, PropertyEdit::CarouselImage { slot, url: event_target_value(&ev) })
                            }
                        />
                    }
                }
            />
            <button class="property-editor__add" on:click=on_add>
                "Add image"
            </button>
        </div>
        <DimensionField label="Width" initial=initial.width to_edit=PropertyEdit::Width/>
        <DimensionField label="Height" initial=initial.height to_edit=PropertyEdit::Height/>
    }
}

/// Numeric px field. The value is seeded once per selection; echoing the
/// parsed number back would rewrite partial input such as `12.`.
#[component]
fn DimensionField(label: &'static str, initial: f64, to_edit: fn(f64) -> PropertyEdit) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();

    let on_input = move |ev: Event| {
        let raw = event_target_value(&ev);
        builder.maybe_update(|b| apply_dimension(b, &raw, to_edit));
    };

    view! {
        <label class="property-editor__field property-editor__field--inline">
            <span>{label}</span>
            <input type="number" class="property-editor__number" prop:value=format_dimension(initial) on:input=on_input/>
            <span>"px"</span>
        </label>
    }
}
