//! Drag event handlers shared by the sidebar and preview panels.
//!
//! DESIGN
//! ======
//! `dragleave` fires whenever the pointer crosses into a child element, so
//! `dragover` re-enters the zone on every tick. Both go through
//! `maybe_update`, which only notifies subscribers when the drag state moved.

use leptos::ev::DragEvent;
use leptos::prelude::*;
use pagebuilder_model::DropZone;

use crate::state::builder::BuilderState;

pub fn on_enter(builder: RwSignal<BuilderState>, zone: DropZone) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        builder.maybe_update(|b| b.drag_enter(zone));
    }
}

/// `dragover` must be cancelled for the browser to allow a drop here.
pub fn on_over(builder: RwSignal<BuilderState>, zone: DropZone) -> impl Fn(DragEvent) + Copy + 'static {
    on_enter(builder, zone)
}

pub fn on_leave(builder: RwSignal<BuilderState>, zone: DropZone) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        builder.maybe_update(|b| b.drag_leave(zone));
    }
}

pub fn on_drop(builder: RwSignal<BuilderState>, zone: DropZone) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        builder.update(|b| {
            b.drop_on(zone);
        });
    }
}
