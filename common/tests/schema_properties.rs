use common::model::{
    Condition, ConditionalPatch, ElementType, Field, FieldModel, FieldPatch, FieldType,
    ObjectFieldPatch, ScalarType,
};
use common::schema::{generate, DEFAULT_SCHEMA};

fn conditional_model(dependent_type: FieldType) -> FieldModel {
    let mut model = FieldModel::new();
    model
        .update_field(0, &FieldPatch::new().name("age").field_type(dependent_type))
        .unwrap();
    model.add_field();
    model
        .update_field(
            0,
            &FieldPatch::new().name("guardian").conditional(
                ConditionalPatch::new()
                    .enabled(true)
                    .depends_on("age")
                    .condition(Condition::Equals)
                    .value("18"),
            ),
        )
        .unwrap();
    model
}

#[test]
fn end_to_end_single_required_string() {
    let mut model = FieldModel::new();
    model
        .update_field(
            0,
            &FieldPatch::new()
                .name("email")
                .field_type(FieldType::String)
                .required(true),
        )
        .unwrap();

    assert_eq!(
        model.generate(),
        "import * as Yup from 'yup';\n\n\
         const validationSchema = Yup.object({\n\
         \x20 email: Yup.string().required(\"email is required\"),\n\
         });\n\n\
         export default validationSchema;"
    );
}

#[test]
fn unnamed_fields_never_appear() {
    let mut model = FieldModel::new();
    model.add_field();
    model
        .update_field(1, &FieldPatch::new().name("kept").required(true))
        .unwrap();
    model
        .update_field(0, &FieldPatch::new().field_type(FieldType::Number).min("1"))
        .unwrap();

    let schema = model.generate();
    assert!(!schema.contains("Yup.number()"));
    assert!(!schema.contains("  : "));
    assert!(schema.contains("kept: Yup.string()"));

    assert_eq!(generate(&[Field::default()]), DEFAULT_SCHEMA);
}

#[test]
fn generating_twice_gives_the_same_text() {
    let model = conditional_model(FieldType::Number);
    let before = model.clone();
    assert_eq!(model.generate(), model.generate());
    assert_eq!(model, before);
}

#[test]
fn required_number_uses_default_message() {
    let mut model = FieldModel::new();
    model
        .update_field(
            0,
            &FieldPatch::new()
                .name("quantity")
                .field_type(FieldType::Number)
                .required(true),
        )
        .unwrap();

    assert!(model
        .generate()
        .contains("quantity: Yup.number().required(\"quantity is required\")"));
}

#[test]
fn string_length_bounds_come_after_required_clause_in_order() {
    let mut model = FieldModel::new();
    model
        .update_field(
            0,
            &FieldPatch::new()
                .name("username")
                .min_length("3")
                .max_length("10"),
        )
        .unwrap();

    let schema = model.generate();
    let required = schema.find(".notRequired()").unwrap();
    let min = schema.find(".min(3, \"Minimum length is 3\")").unwrap();
    let max = schema.find(".max(10, \"Maximum length is 10\")").unwrap();
    assert!(required < min && min < max);
}

#[test]
fn array_of_object_lists_children_in_order() {
    let mut model = FieldModel::new();
    model
        .update_field(
            0,
            &FieldPatch::new()
                .name("items")
                .field_type(FieldType::Array)
                .element_type(ElementType::Object),
        )
        .unwrap();
    model.add_object_field(0).unwrap();
    model.add_object_field(0).unwrap();
    model
        .update_object_field(0, 0, &ObjectFieldPatch::new().name("a").required(true))
        .unwrap();
    model
        .update_object_field(
            0,
            1,
            &ObjectFieldPatch::new().name("b").field_type(ScalarType::Number),
        )
        .unwrap();

    let schema = model.generate();
    assert!(schema.contains(
        "  items: Yup.array().of(Yup.object({\n    a: Yup.string().required(),\n    b: Yup.number().notRequired(),\n  })).notRequired(),\n"
    ));
}

#[test]
fn numeric_dependent_gets_a_bare_literal() {
    let schema = conditional_model(FieldType::Number).generate();
    assert!(schema.contains("    is: 18,\n"), "{schema}");
}

#[test]
fn string_dependent_gets_a_quoted_literal() {
    let schema = conditional_model(FieldType::String).generate();
    assert!(schema.contains("    is: \"18\",\n"), "{schema}");
}

#[test]
fn unknown_dependent_is_treated_as_non_numeric() {
    let mut model = conditional_model(FieldType::Number);
    model
        .update_field(1, &FieldPatch::new().name("years"))
        .unwrap();

    let schema = model.generate();
    assert!(schema.contains(".when('age', {\n    is: \"18\",\n"), "{schema}");
}

#[test]
fn update_leaves_other_members_and_fields_alone() {
    let mut model = conditional_model(FieldType::Number);
    let before = model.clone();

    model
        .update_field(0, &FieldPatch::new().required(true))
        .unwrap();

    assert_eq!(model.fields()[1], before.fields()[1]);
    let updated = &model.fields()[0];
    let original = &before.fields()[0];
    assert!(updated.required);
    assert_eq!(updated.name, original.name);
    assert_eq!(updated.kind, original.kind);
    assert_eq!(updated.nullable, original.nullable);
    assert_eq!(updated.custom_message, original.custom_message);
    assert_eq!(updated.conditional, original.conditional);
}

#[test]
fn model_round_trips_through_json_requests() {
    let model = conditional_model(FieldType::Number);
    let body = serde_json::json!({ "fields": model.fields() });

    let request: common::requests::GenerateSchemaRequest =
        serde_json::from_value(body).unwrap();
    assert_eq!(generate(&request.fields), model.generate());
}

#[test]
fn string_bounds_return_after_switching_to_number_and_back() {
    let mut model = FieldModel::new();
    model
        .update_field(0, &FieldPatch::new().name("code").min_length("3"))
        .unwrap();
    model
        .update_field(0, &FieldPatch::new().field_type(FieldType::Number))
        .unwrap();
    assert!(!model.generate().contains("Minimum length is 3"));

    model
        .update_field(0, &FieldPatch::new().field_type(FieldType::String))
        .unwrap();
    assert!(model
        .generate()
        .contains("  code: Yup.string().notRequired().min(3, \"Minimum length is 3\"),\n"));
}

#[test]
fn object_children_return_after_switching_to_string_and_back() {
    let mut model = FieldModel::new();
    model
        .update_field(0, &FieldPatch::new().name("addr").field_type(FieldType::Object))
        .unwrap();
    model.add_object_field(0).unwrap();
    model
        .update_object_field(0, 0, &ObjectFieldPatch::new().name("street"))
        .unwrap();

    model
        .update_field(0, &FieldPatch::new().field_type(FieldType::String))
        .unwrap();
    model
        .update_field(0, &FieldPatch::new().field_type(FieldType::Object))
        .unwrap();

    assert!(model.generate().contains(
        "  addr: Yup.object({\n    street: Yup.string().notRequired(),\n  }).notRequired(),\n"
    ));
}

#[test]
fn object_switched_to_array_starts_with_scalar_elements() {
    let mut model = FieldModel::new();
    model
        .update_field(0, &FieldPatch::new().name("addr").field_type(FieldType::Object))
        .unwrap();
    model.add_object_field(0).unwrap();
    model
        .update_object_field(0, 0, &ObjectFieldPatch::new().name("street"))
        .unwrap();

    model
        .update_field(0, &FieldPatch::new().field_type(FieldType::Array))
        .unwrap();
    assert!(model
        .generate()
        .contains("  addr: Yup.array().of(Yup.string()).notRequired(),\n"));

    model
        .update_field(0, &FieldPatch::new().element_type(ElementType::Object))
        .unwrap();
    assert!(model.generate().contains(
        "  addr: Yup.array().of(Yup.object({\n    street: Yup.string().notRequired(),\n  })).notRequired(),\n"
    ));
}
