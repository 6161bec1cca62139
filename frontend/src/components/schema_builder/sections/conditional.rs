use common::model::{Condition, ConditionalPatch, Field, FieldPatch};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::schema_builder::helpers::{
    checkbox_callback, select_callback, text_input_callback,
};
use crate::components::schema_builder::{Msg, SchemaBuilderComponent};

fn conditional_msg(index: usize, patch: ConditionalPatch) -> Msg {
    Msg::UpdateField(index, FieldPatch::new().conditional(patch))
}

/// Conditional validation box of a field card.
///
/// The dependent-field picker never offers the field itself, and the value
/// input only shows up for conditions that compare against a value.
pub fn conditional_section(
    component: &SchemaBuilderComponent,
    link: &Scope<SchemaBuilderComponent>,
    index: usize,
    field: &Field,
) -> Html {
    let rule = &field.conditional;

    html! {
        <div class="conditional">
            <label class="checkbox section-title">
                <input
                    type="checkbox"
                    checked={rule.enabled}
                    onchange={checkbox_callback(link, move |enabled| {
                        conditional_msg(index, ConditionalPatch::new().enabled(enabled))
                    })}
                />
                {"Use Conditional Validation"}
            </label>
            {
                if rule.enabled {
                    build_rule_editor(component, link, index, field)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_rule_editor(
    component: &SchemaBuilderComponent,
    link: &Scope<SchemaBuilderComponent>,
    index: usize,
    field: &Field,
) -> Html {
    let rule = &field.conditional;
    let candidates = component.dependency_candidates(index);
    let value_type = if component.dependent_is_numeric(index) {
        "number"
    } else {
        "text"
    };

    let on_depends_on = select_callback(link, move |name: String| {
        conditional_msg(index, ConditionalPatch::new().depends_on(name))
    });
    let on_condition = select_callback(link, move |condition: Condition| {
        conditional_msg(index, ConditionalPatch::new().condition(condition))
    });

    html! {
        <div class="stack">
            <div class="grid-3">
                <div>
                    <label>{"Depends On Field"}</label>
                    <select onchange={on_depends_on}>
                        <option value="" disabled=true selected={rule.depends_on.is_empty()}>
                            {"Select field"}
                        </option>
                        {
                            for candidates.into_iter().map(|name| html! {
                                <option value={name.to_string()} selected={name == rule.depends_on}>
                                    { name }
                                </option>
                            })
                        }
                    </select>
                </div>

                <div>
                    <label>{"Condition"}</label>
                    <select onchange={on_condition}>
                        {
                            for Condition::ALL.iter().map(|condition| html! {
                                <option value={condition.as_str()} selected={*condition == rule.condition}>
                                    { condition.label() }
                                </option>
                            })
                        }
                    </select>
                </div>

                {
                    if rule.condition.takes_value() {
                        html! {
                            <div>
                                <label>{"Value"}</label>
                                <input
                                    type={value_type}
                                    value={rule.value.clone()}
                                    placeholder="Comparison value"
                                    oninput={text_input_callback(link, move |value| {
                                        conditional_msg(index, ConditionalPatch::new().value(value))
                                    })}
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="grid-2">
                { branch_box(link, index, "Then", rule.then.required, |index, required| {
                    conditional_msg(index, ConditionalPatch::new().then_required(required))
                }) }
                { branch_box(link, index, "Otherwise", rule.otherwise.required, |index, required| {
                    conditional_msg(index, ConditionalPatch::new().otherwise_required(required))
                }) }
            </div>
        </div>
    }
}

fn branch_box(
    link: &Scope<SchemaBuilderComponent>,
    index: usize,
    title: &'static str,
    required: bool,
    to_msg: fn(usize, bool) -> Msg,
) -> Html {
    html! {
        <div class="branch">
            <label class="section-title">{ title }</label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    checked={required}
                    onchange={checkbox_callback(link, move |required| to_msg(index, required))}
                />
                {"Required"}
            </label>
        </div>
    }
}
