//! Update function for the schema builder component.
//!
//! Elm-style: receives the current `SchemaBuilderComponent` state, the
//! `Context`, and a `Msg`, applies it to the field model and returns whether
//! the view should re-render.
//!
//! Model errors (stale indices, object operations on a non-object field) are
//! logged to the browser console and leave the state untouched.

use common::model::ModelError;
use gloo_console as console;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{copy_to_clipboard, show_toast};
use super::messages::Msg;
use super::state::SchemaBuilderComponent;

/// Central update function for the component.
pub fn update(
    component: &mut SchemaBuilderComponent,
    _ctx: &Context<SchemaBuilderComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::AddField => {
            component.model.add_field();
            true
        }
        Msg::RemoveField(index) => {
            if !component.can_remove_fields() {
                return false;
            }
            rerender_on_success(component.model.remove_field(index).map(drop))
        }
        Msg::UpdateField(index, patch) => {
            rerender_on_success(component.model.update_field(index, &patch))
        }
        Msg::AddObjectField(index) => rerender_on_success(component.model.add_object_field(index)),
        Msg::UpdateObjectField(index, object_index, patch) => rerender_on_success(
            component
                .model
                .update_object_field(index, object_index, &patch),
        ),
        Msg::RemoveObjectField(index, object_index) => rerender_on_success(
            component
                .model
                .remove_object_field(index, object_index)
                .map(drop),
        ),
        Msg::BuildSchema => {
            let schema = component.model.generate();
            console::log!(schema.clone());
            component.generated_schema = Some(schema);
            true
        }
        Msg::CopySchema => {
            let text = component.displayed_schema().to_string();
            spawn_local(async move {
                match copy_to_clipboard(&text).await {
                    Ok(()) => show_toast("Copied!", "Schema copied to clipboard."),
                    Err(err) => {
                        console::error!(format!("Clipboard write failed: {err}"));
                        show_toast("Copy failed", "The clipboard is not available.");
                    }
                }
            });
            false
        }
    }
}

fn rerender_on_success(result: Result<(), ModelError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            console::error!(err.to_string());
            false
        }
    }
}
