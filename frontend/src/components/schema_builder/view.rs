//! View rendering for the schema builder component.
//!
//! The card is split in two panes: the field editor on the left (one card per
//! field) and the generated schema preview with a copy button on the right.
//! Type-specific inputs switch with the field type; object children and the
//! conditional rule are rendered by the `sections` module.

use common::model::{ElementType, Field, FieldKind, FieldPatch, FieldType};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{
    checkbox_callback, highlight_typescript, select_callback, text_input_callback,
    textarea_callback,
};
use super::messages::Msg;
use super::sections::{conditional_section, object_fields_section};
use super::state::SchemaBuilderComponent;

/// Main view function for the schema builder component.
pub fn view(component: &SchemaBuilderComponent, ctx: &Context<SchemaBuilderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="schema-builder">
            <div class="card">
                { build_toolbar(link) }
                <div class="card-content">
                    <div class="fields-pane">
                        {
                            for component.model.fields().iter().enumerate().map(|(index, field)| {
                                build_field_card(component, link, index, field)
                            })
                        }
                    </div>
                    { build_preview(component, link) }
                </div>
            </div>
        </div>
    }
}

fn build_toolbar(link: &Scope<SchemaBuilderComponent>) -> Html {
    html! {
        <div class="card-header toolbar">
            <button class="btn" onclick={link.callback(|_| Msg::AddField)}>
                {"+ Add Field"}
            </button>
            <button class="btn btn-accent" onclick={link.callback(|_| Msg::BuildSchema)}>
                {"Build Schema"}
            </button>
        </div>
    }
}

/// Right pane: highlighted schema text and the copy button.
fn build_preview(component: &SchemaBuilderComponent, link: &Scope<SchemaBuilderComponent>) -> Html {
    let highlighted = AttrValue::from(highlight_typescript(component.displayed_schema()));

    html! {
        <div class="preview-pane">
            <div class="preview">
                <button
                    class="btn btn-outline copy-btn"
                    title="Copy schema"
                    onclick={link.callback(|_| Msg::CopySchema)}
                >
                    {"Copy"}
                </button>
                <pre class="code"><code>{ Html::from_html_unchecked(highlighted) }</code></pre>
            </div>
        </div>
    }
}

fn build_field_card(
    component: &SchemaBuilderComponent,
    link: &Scope<SchemaBuilderComponent>,
    index: usize,
    field: &Field,
) -> Html {
    let current_type = field.field_type();

    html! {
        <div class="field-card">
            <div class="grid-3">
                <div>
                    <label>{"Field Name"}</label>
                    <input
                        value={field.name.clone()}
                        placeholder="Enter field name"
                        oninput={text_input_callback(link, move |name| {
                            Msg::UpdateField(index, FieldPatch::new().name(name))
                        })}
                    />
                </div>

                <div>
                    <label>{"Field Type"}</label>
                    <select onchange={select_callback(link, move |field_type: FieldType| {
                        Msg::UpdateField(index, FieldPatch::new().field_type(field_type))
                    })}>
                        {
                            for FieldType::ALL.iter().map(|ty| html! {
                                <option value={ty.as_str()} selected={*ty == current_type}>
                                    { ty.as_str() }
                                </option>
                            })
                        }
                    </select>
                </div>

                <div class="flags">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            checked={field.required}
                            onchange={checkbox_callback(link, move |required| {
                                Msg::UpdateField(index, FieldPatch::new().required(required))
                            })}
                        />
                        {"Required"}
                    </label>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            checked={field.nullable}
                            onchange={checkbox_callback(link, move |nullable| {
                                Msg::UpdateField(index, FieldPatch::new().nullable(nullable))
                            })}
                        />
                        {"Nullable"}
                    </label>
                </div>
            </div>

            { build_type_specific_inputs(link, index, field) }

            { conditional_section(component, link, index, field) }

            <div>
                <label>{"Custom Error Message"}</label>
                <textarea
                    value={field.custom_message.clone()}
                    placeholder="Optional custom error message"
                    oninput={textarea_callback(link, move |message| {
                        Msg::UpdateField(index, FieldPatch::new().custom_message(message))
                    })}
                />
            </div>

            <button
                class="btn btn-danger"
                disabled={!component.can_remove_fields()}
                onclick={link.callback(move |_| Msg::RemoveField(index))}
            >
                {"Remove Field"}
            </button>
        </div>
    }
}

/// Inputs that only make sense for the field's current type.
fn build_type_specific_inputs(
    link: &Scope<SchemaBuilderComponent>,
    index: usize,
    field: &Field,
) -> Html {
    match &field.kind {
        FieldKind::String {
            min_length,
            max_length,
        } => html! {
            <div class="grid-3">
                { number_input(link, "Min Length", "Minimum length", min_length, move |v| {
                    Msg::UpdateField(index, FieldPatch::new().min_length(v))
                }) }
                { number_input(link, "Max Length", "Maximum length", max_length, move |v| {
                    Msg::UpdateField(index, FieldPatch::new().max_length(v))
                }) }
            </div>
        },
        FieldKind::Number { min, max } => html! {
            <div class="grid-3">
                { number_input(link, "Min Value", "Minimum value", min, move |v| {
                    Msg::UpdateField(index, FieldPatch::new().min(v))
                }) }
                { number_input(link, "Max Value", "Maximum value", max, move |v| {
                    Msg::UpdateField(index, FieldPatch::new().max(v))
                }) }
            </div>
        },
        FieldKind::Array { element, min, max } => {
            let current = element.element_type();
            html! {
                <div class="stack">
                    <div class="grid-3">
                        <div>
                            <label>{"Array Element Type"}</label>
                            <select onchange={select_callback(link, move |element_type: ElementType| {
                                Msg::UpdateField(index, FieldPatch::new().element_type(element_type))
                            })}>
                                {
                                    for ElementType::ALL.iter().map(|ty| html! {
                                        <option value={ty.as_str()} selected={*ty == current}>
                                            { ty.as_str() }
                                        </option>
                                    })
                                }
                            </select>
                        </div>
                        { number_input(link, "Min Array Length", "Minimum count", min, move |v| {
                            Msg::UpdateField(index, FieldPatch::new().array_min(v))
                        }) }
                        { number_input(link, "Max Array Length", "Maximum count", max, move |v| {
                            Msg::UpdateField(index, FieldPatch::new().array_max(v))
                        }) }
                    </div>
                    {
                        if field.array_of_object() {
                            object_fields_section(link, index, field)
                        } else {
                            html! {}
                        }
                    }
                </div>
            }
        }
        FieldKind::Object { .. } => object_fields_section(link, index, field),
        FieldKind::Boolean | FieldKind::Date => html! {},
    }
}

fn number_input(
    link: &Scope<SchemaBuilderComponent>,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    to_msg: impl Fn(String) -> Msg + 'static,
) -> Html {
    html! {
        <div>
            <label>{ label }</label>
            <input
                type="number"
                value={value.to_string()}
                placeholder={placeholder}
                oninput={text_input_callback(link, to_msg)}
            />
        </div>
    }
}
