use crate::model::{
    ArrayElement, Condition, ConditionalValidation, Field, FieldKind, ObjectField, ScalarType,
};

const PREAMBLE: &str = "import * as Yup from 'yup';\n\nconst validationSchema = Yup.object({\n";
const POSTAMBLE: &str = "});\n\nexport default validationSchema;";

/// Schema shown and copied before anything has been generated. Identical to
/// the output for an empty field list.
pub const DEFAULT_SCHEMA: &str =
    "import * as Yup from 'yup';\n\nconst validationSchema = Yup.object({\n});\n\nexport default validationSchema;";

/// Renders `fields` as a Yup object schema module.
///
/// Fields with an empty name are skipped. Every other value is copied into
/// the output as typed: bounds are not checked, names are not deduplicated
/// and a conditional rule may name a field that does not exist. This never
/// fails.
pub fn generate(fields: &[Field]) -> String {
    let mut schema = String::from(PREAMBLE);

    for field in fields.iter().filter(|field| !field.name.is_empty()) {
        schema.push_str(&field_schema(field, fields));
        schema.push_str(",\n");
    }

    schema.push_str(POSTAMBLE);
    schema
}

fn field_schema(field: &Field, siblings: &[Field]) -> String {
    let mut out = format!("  {}: ", field.name);
    out.push_str(&base_validator(field));

    if field.nullable {
        out.push_str(".nullable()");
    }

    if field.conditional.is_active() {
        out.push_str(&when_clause(field, &field.conditional, siblings));
    } else {
        out.push_str(&requirement(field, field.required));
    }

    out.push_str(&bound_clauses(&field.kind));
    out
}

fn scalar_validator(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "Yup.string()",
        ScalarType::Number => "Yup.number()",
        ScalarType::Boolean => "Yup.boolean()",
        ScalarType::Date => "Yup.date()",
    }
}

/// Type validator, including the element schema and count bounds of arrays.
fn base_validator(field: &Field) -> String {
    match &field.kind {
        FieldKind::String { .. } => scalar_validator(ScalarType::String).to_string(),
        FieldKind::Number { .. } => scalar_validator(ScalarType::Number).to_string(),
        FieldKind::Boolean => scalar_validator(ScalarType::Boolean).to_string(),
        FieldKind::Date => scalar_validator(ScalarType::Date).to_string(),
        FieldKind::Array { element, min, max } => {
            let mut out = match element {
                ArrayElement::Scalar(scalar) => {
                    format!("Yup.array().of({})", scalar_validator(*scalar))
                }
                ArrayElement::Object(children) => {
                    format!("Yup.array().of(Yup.object({{\n{}  }}))", object_body(children))
                }
            };
            if !min.is_empty() {
                out.push_str(&format!(
                    ".min({min}, \"Minimum {} count is {min}\")",
                    field.name
                ));
            }
            if !max.is_empty() {
                out.push_str(&format!(
                    ".max({max}, \"Maximum {} count is {max}\")",
                    field.name
                ));
            }
            out
        }
        FieldKind::Object { fields } => format!("Yup.object({{\n{}  }})", object_body(fields)),
    }
}

/// One line per child: validator plus a bare required/not-required suffix.
fn object_body(children: &[ObjectField]) -> String {
    children
        .iter()
        .map(|child| {
            let suffix = if child.required {
                ".required()"
            } else {
                ".notRequired()"
            };
            format!(
                "    {}: {}{},\n",
                child.name,
                scalar_validator(child.field_type),
                suffix
            )
        })
        .collect()
}

fn requirement(field: &Field, required: bool) -> String {
    if required {
        format!(".required(\"{}\")", field.required_message())
    } else {
        ".notRequired()".to_string()
    }
}

fn when_clause(field: &Field, rule: &ConditionalValidation, siblings: &[Field]) -> String {
    // Only the dependent field's declared type decides how the value is quoted.
    let numeric = siblings
        .iter()
        .find(|sibling| sibling.name == rule.depends_on)
        .is_some_and(Field::is_numeric);

    let mut out = format!(".when('{}', {{\n", rule.depends_on);
    out.push_str(&format!("    is: {},\n", condition_test(rule, numeric)));
    out.push_str(&format!(
        "    then: (schema) => schema{},\n",
        requirement(field, rule.then.required)
    ));
    out.push_str(&format!(
        "    otherwise: (schema) => schema{}\n  }})",
        requirement(field, rule.otherwise.required)
    ));
    out
}

fn condition_test(rule: &ConditionalValidation, numeric: bool) -> String {
    let value = &rule.value;
    match rule.condition {
        Condition::Equals => literal(value, numeric),
        Condition::NotEquals => format!("(val) => val !== {}", literal(value, numeric)),
        Condition::Defined => "(val) => val !== undefined && val !== null && val !== ''".to_string(),
        Condition::Undefined => "(val) => val === undefined || val === null || val === ''".to_string(),
        Condition::GreaterThan => format!("(val) => val > {value}"),
        Condition::LessThan => format!("(val) => val < {value}"),
        Condition::GreaterThanOrEqual => format!("(val) => val >= {value}"),
        Condition::LessThanOrEqual => format!("(val) => val <= {value}"),
    }
}

/// Bare literal for numeric dependents, a JSON string literal otherwise.
fn literal(value: &str, numeric: bool) -> String {
    if numeric {
        value.to_string()
    } else {
        serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
    }
}

fn bound_clauses(kind: &FieldKind) -> String {
    let mut out = String::new();
    match kind {
        FieldKind::String {
            min_length,
            max_length,
        } => {
            if !min_length.is_empty() {
                out.push_str(&format!(".min({min_length}, \"Minimum length is {min_length}\")"));
            }
            if !max_length.is_empty() {
                out.push_str(&format!(".max({max_length}, \"Maximum length is {max_length}\")"));
            }
        }
        FieldKind::Number { min, max } => {
            if !min.is_empty() {
                out.push_str(&format!(".min({min}, \"Minimum value is {min}\")"));
            }
            if !max.is_empty() {
                out.push_str(&format!(".max({max}, \"Maximum value is {max}\")"));
            }
        }
        FieldKind::Boolean | FieldKind::Date | FieldKind::Array { .. } | FieldKind::Object { .. } => {}
    }
    out
}
