use common::model::{Field, ObjectFieldPatch, ScalarType};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::schema_builder::helpers::{
    checkbox_callback, select_callback, text_input_callback,
};
use crate::components::schema_builder::{Msg, SchemaBuilderComponent};

/// Children of an object or array-of-object field: one row per child with
/// name, scalar type, required flag and a delete button.
pub fn object_fields_section(
    link: &Scope<SchemaBuilderComponent>,
    index: usize,
    field: &Field,
) -> Html {
    let children = field.object_fields().unwrap_or_default();

    html! {
        <div class="object-fields">
            <div class="section-header">
                <label>{"Object Fields"}</label>
                <button class="btn btn-link" onclick={link.callback(move |_| Msg::AddObjectField(index))}>
                    {"+ Add Object Field"}
                </button>
            </div>
            {
                for children.iter().enumerate().map(|(child_index, child)| {
                    let current = child.field_type;
                    html! {
                        <div class="object-field-row">
                            <input
                                placeholder="Field Name"
                                value={child.name.clone()}
                                oninput={text_input_callback(link, move |name| {
                                    Msg::UpdateObjectField(index, child_index, ObjectFieldPatch::new().name(name))
                                })}
                            />
                            <select onchange={select_callback(link, move |field_type: ScalarType| {
                                Msg::UpdateObjectField(index, child_index, ObjectFieldPatch::new().field_type(field_type))
                            })}>
                                {
                                    for ScalarType::ALL.iter().map(|ty| html! {
                                        <option value={ty.as_str()} selected={*ty == current}>
                                            { ty.as_str() }
                                        </option>
                                    })
                                }
                            </select>
                            <div class="row-actions">
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        checked={child.required}
                                        onchange={checkbox_callback(link, move |required| {
                                            Msg::UpdateObjectField(index, child_index, ObjectFieldPatch::new().required(required))
                                        })}
                                    />
                                    {"Required"}
                                </label>
                                <button
                                    class="btn btn-danger btn-icon"
                                    title="Remove object field"
                                    onclick={link.callback(move |_| Msg::RemoveObjectField(index, child_index))}
                                >
                                    {"✕"}
                                </button>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
