//! Field descriptors edited by the schema builder form.
//!
//! A top-level [`Field`] carries the flags every field has (name, required,
//! nullable, custom message, conditional rule) plus a [`FieldKind`] holding
//! only what its type needs: string length bounds, number bounds, an array
//! element shape with count bounds, or the children of an object. Object
//! children are [`ObjectField`]s, which are always scalar, so nesting stops
//! one level down. Whatever the other shapes held is kept on the field while
//! it is not in use, so switching types back and forth loses nothing.
//!
//! Updates never touch a record in place: [`Field::apply`] and
//! [`ObjectField::apply`] build the next version from a patch and leave the
//! original alone.

use serde::{Deserialize, Serialize};
use std::mem;

use super::patch::{ConditionalPatch, FieldPatch, ObjectFieldPatch, PolicyPatch};
use super::types::{Condition, ElementType, FieldType, ScalarType};

/// One entry inside an object or array-of-object shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: ScalarType,
    pub required: bool,
}

impl ObjectField {
    pub fn new(name: impl Into<String>, field_type: ScalarType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
        }
    }

    /// Returns a copy with the members present in `patch` replaced.
    pub fn apply(&self, patch: &ObjectFieldPatch) -> ObjectField {
        ObjectField {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            field_type: patch.field_type.unwrap_or(self.field_type),
            required: patch.required.unwrap_or(self.required),
        }
    }
}

/// Requirement applied by one branch of a conditional rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementPolicy {
    pub required: bool,
}

impl RequirementPolicy {
    fn apply(&self, patch: &PolicyPatch) -> RequirementPolicy {
        RequirementPolicy {
            required: patch.required.unwrap_or(self.required),
        }
    }
}

/// Makes a field's required-ness depend on the value of a sibling field.
///
/// `depends_on` is only a name; it is looked up against the current field
/// list when a schema is generated and may point at nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionalValidation {
    pub enabled: bool,
    pub depends_on: String,
    pub condition: Condition,
    pub value: String,
    pub then: RequirementPolicy,
    pub otherwise: RequirementPolicy,
}

impl Default for ConditionalValidation {
    fn default() -> Self {
        Self {
            enabled: false,
            depends_on: String::new(),
            condition: Condition::Equals,
            value: String::new(),
            then: RequirementPolicy { required: true },
            otherwise: RequirementPolicy { required: false },
        }
    }
}

impl ConditionalValidation {
    /// Key-wise merge; the `then`/`otherwise` policies merge one level deeper.
    pub fn apply(&self, patch: &ConditionalPatch) -> ConditionalValidation {
        ConditionalValidation {
            enabled: patch.enabled.unwrap_or(self.enabled),
            depends_on: patch
                .depends_on
                .clone()
                .unwrap_or_else(|| self.depends_on.clone()),
            condition: patch.condition.unwrap_or(self.condition),
            value: patch.value.clone().unwrap_or_else(|| self.value.clone()),
            then: patch
                .then
                .as_ref()
                .map_or(self.then, |policy| self.then.apply(policy)),
            otherwise: patch
                .otherwise
                .as_ref()
                .map_or(self.otherwise, |policy| self.otherwise.apply(policy)),
        }
    }

    /// True when the rule takes over from the plain required flag.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.depends_on.is_empty()
    }
}

/// Element shape of an array field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrayElement {
    Scalar(ScalarType),
    Object(Vec<ObjectField>),
}

impl Default for ArrayElement {
    fn default() -> Self {
        ArrayElement::Scalar(ScalarType::String)
    }
}

impl ArrayElement {
    pub fn element_type(&self) -> ElementType {
        match self {
            ArrayElement::Scalar(scalar) => ElementType::from(*scalar),
            ArrayElement::Object(_) => ElementType::Object,
        }
    }
}

/// Type-specific part of a field. Bounds are kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    #[serde(rename_all = "camelCase")]
    String {
        #[serde(default)]
        min_length: String,
        #[serde(default)]
        max_length: String,
    },
    Number {
        #[serde(default)]
        min: String,
        #[serde(default)]
        max: String,
    },
    Boolean,
    Date,
    Array {
        #[serde(default)]
        element: ArrayElement,
        #[serde(default)]
        min: String,
        #[serde(default)]
        max: String,
    },
    Object {
        #[serde(default)]
        fields: Vec<ObjectField>,
    },
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::String {
            min_length: String::new(),
            max_length: String::new(),
        }
    }
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::String { .. } => FieldType::String,
            FieldKind::Number { .. } => FieldType::Number,
            FieldKind::Boolean => FieldType::Boolean,
            FieldKind::Date => FieldType::Date,
            FieldKind::Array { .. } => FieldType::Array,
            FieldKind::Object { .. } => FieldType::Object,
        }
    }
}

/// Members of the shapes a field is not using right now.
///
/// Switching the type or the array element type parks the outgoing shape's
/// members here and takes the incoming shape's members back out, so a round
/// trip through another type finds bounds and children as they were left.
/// Bounds patched while their shape is inactive are kept here as well.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct InactiveShapes {
    min_length: String,
    max_length: String,
    min: String,
    max: String,
    array_min: String,
    array_max: String,
    element_type: ElementType,
    object_fields: Vec<ObjectField>,
}

impl InactiveShapes {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn park(&mut self, kind: FieldKind) {
        match kind {
            FieldKind::String {
                min_length,
                max_length,
            } => {
                self.min_length = min_length;
                self.max_length = max_length;
            }
            FieldKind::Number { min, max } => {
                self.min = min;
                self.max = max;
            }
            FieldKind::Boolean | FieldKind::Date => {}
            FieldKind::Array { element, min, max } => {
                self.array_min = min;
                self.array_max = max;
                self.park_element(element);
            }
            FieldKind::Object { fields } => self.object_fields = fields,
        }
    }

    /// A scalar element leaves any parked children where they are.
    fn park_element(&mut self, element: ArrayElement) {
        self.element_type = element.element_type();
        if let ArrayElement::Object(fields) = element {
            self.object_fields = fields;
        }
    }

    fn take(&mut self, field_type: FieldType) -> FieldKind {
        match field_type {
            FieldType::String => FieldKind::String {
                min_length: mem::take(&mut self.min_length),
                max_length: mem::take(&mut self.max_length),
            },
            FieldType::Number => FieldKind::Number {
                min: mem::take(&mut self.min),
                max: mem::take(&mut self.max),
            },
            FieldType::Boolean => FieldKind::Boolean,
            FieldType::Date => FieldKind::Date,
            FieldType::Array => FieldKind::Array {
                element: self.take_element(),
                min: mem::take(&mut self.array_min),
                max: mem::take(&mut self.array_max),
            },
            FieldType::Object => FieldKind::Object {
                fields: mem::take(&mut self.object_fields),
            },
        }
    }

    fn take_element(&mut self) -> ArrayElement {
        match mem::take(&mut self.element_type).scalar() {
            Some(scalar) => ArrayElement::Scalar(scalar),
            None => ArrayElement::Object(mem::take(&mut self.object_fields)),
        }
    }
}

/// Top-level descriptor of one schema property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    /// Schema key; a field with an empty name is left out of the schema.
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub nullable: bool,
    /// Replaces the default `"<name> is required"` message when non-empty.
    pub custom_message: String,
    #[serde(rename = "conditionalValidation")]
    pub conditional: ConditionalValidation,
    #[serde(skip_serializing_if = "InactiveShapes::is_empty")]
    inactive: InactiveShapes,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    pub fn is_numeric(&self) -> bool {
        self.field_type() == FieldType::Number
    }

    /// Element type of an array field, `None` for every other type.
    pub fn element_type(&self) -> Option<ElementType> {
        match &self.kind {
            FieldKind::Array { element, .. } => Some(element.element_type()),
            _ => None,
        }
    }

    pub fn array_of_object(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::Array {
                element: ArrayElement::Object(_),
                ..
            }
        )
    }

    /// Children of an object or array-of-object field.
    pub fn object_fields(&self) -> Option<&[ObjectField]> {
        match &self.kind {
            FieldKind::Object { fields }
            | FieldKind::Array {
                element: ArrayElement::Object(fields),
                ..
            } => Some(fields),
            _ => None,
        }
    }

    pub(crate) fn object_fields_mut(&mut self) -> Option<&mut Vec<ObjectField>> {
        match &mut self.kind {
            FieldKind::Object { fields }
            | FieldKind::Array {
                element: ArrayElement::Object(fields),
                ..
            } => Some(fields),
            _ => None,
        }
    }

    /// Message used by every `.required(...)` clause emitted for this field.
    pub fn required_message(&self) -> String {
        if self.custom_message.is_empty() {
            format!("{} is required", self.name)
        } else {
            self.custom_message.clone()
        }
    }

    /// Returns the next version of this field with `patch` merged in.
    ///
    /// Only the members present in `patch` change. The type switch comes
    /// first, then the array element type, then the bounds, then the plain
    /// members and finally the conditional rule. Members of shapes the field
    /// is not using are kept aside and come back when the field switches to
    /// that shape again.
    pub fn apply(&self, patch: &FieldPatch) -> Field {
        let mut next = self.clone();

        if let Some(field_type) = patch.field_type {
            next.switch_type(field_type);
        }
        if let Some(element_type) = patch.element_type {
            next.switch_element_type(element_type);
        }
        next.apply_bounds(patch);

        if let Some(name) = &patch.name {
            next.name.clone_from(name);
        }
        if let Some(required) = patch.required {
            next.required = required;
        }
        if let Some(nullable) = patch.nullable {
            next.nullable = nullable;
        }
        if let Some(message) = &patch.custom_message {
            next.custom_message.clone_from(message);
        }
        if let Some(conditional) = &patch.conditional {
            next.conditional = next.conditional.apply(conditional);
        }

        next
    }

    fn switch_type(&mut self, field_type: FieldType) {
        if self.field_type() == field_type {
            return;
        }
        let outgoing = mem::replace(&mut self.kind, FieldKind::Boolean);
        self.inactive.park(outgoing);
        self.kind = self.inactive.take(field_type);
    }

    /// Outside an array the element type is only remembered.
    fn switch_element_type(&mut self, element_type: ElementType) {
        match &mut self.kind {
            FieldKind::Array { element, .. } => {
                if element.element_type() == element_type {
                    return;
                }
                self.inactive.park_element(mem::take(element));
                self.inactive.element_type = element_type;
                *element = self.inactive.take_element();
            }
            _ => self.inactive.element_type = element_type,
        }
    }

    fn apply_bounds(&mut self, patch: &FieldPatch) {
        fn set(target: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        let (min_length, max_length) = match &mut self.kind {
            FieldKind::String {
                min_length,
                max_length,
            } => (min_length, max_length),
            _ => (&mut self.inactive.min_length, &mut self.inactive.max_length),
        };
        set(min_length, &patch.min_length);
        set(max_length, &patch.max_length);

        let (min, max) = match &mut self.kind {
            FieldKind::Number { min, max } => (min, max),
            _ => (&mut self.inactive.min, &mut self.inactive.max),
        };
        set(min, &patch.min);
        set(max, &patch.max);

        let (array_min, array_max) = match &mut self.kind {
            FieldKind::Array { min, max, .. } => (min, max),
            _ => (&mut self.inactive.array_min, &mut self.inactive.array_max),
        };
        set(array_min, &patch.array_min);
        set(array_max, &patch.array_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_field(name: &str) -> ObjectField {
        ObjectField::new(name, ScalarType::String, false)
    }

    #[test]
    fn default_field_is_an_unbounded_optional_string() {
        let field = Field::default();
        assert_eq!(field.name, "");
        assert_eq!(field.field_type(), FieldType::String);
        assert!(!field.required && !field.nullable);
        assert!(!field.conditional.enabled);
        assert!(field.conditional.then.required);
        assert!(!field.conditional.otherwise.required);
    }

    #[test]
    fn bounds_for_another_type_wait_for_that_type() {
        let field = Field::default().apply(&FieldPatch::new().min("1").array_max("4"));
        assert_eq!(field.kind, FieldKind::default());

        let number = field.apply(&FieldPatch::new().field_type(FieldType::Number));
        assert_eq!(
            number.kind,
            FieldKind::Number {
                min: "1".into(),
                max: String::new()
            }
        );

        let array = number.apply(&FieldPatch::new().field_type(FieldType::Array));
        assert_eq!(
            array.kind,
            FieldKind::Array {
                element: ArrayElement::Scalar(ScalarType::String),
                min: String::new(),
                max: "4".into(),
            }
        );
    }

    #[test]
    fn length_bounds_survive_a_trip_through_number() {
        let field = Field::new("code", FieldKind::default())
            .apply(&FieldPatch::new().min_length("3").max_length("10"));

        let number = field.apply(&FieldPatch::new().field_type(FieldType::Number));
        assert_eq!(
            number.kind,
            FieldKind::Number {
                min: String::new(),
                max: String::new()
            }
        );

        let back = number.apply(&FieldPatch::new().field_type(FieldType::String));
        assert_eq!(
            back.kind,
            FieldKind::String {
                min_length: "3".into(),
                max_length: "10".into()
            }
        );
        assert_eq!(back, field);
    }

    #[test]
    fn type_and_bounds_in_one_patch() {
        let field = Field::default().apply(
            &FieldPatch::new()
                .field_type(FieldType::Number)
                .min("0")
                .max("120"),
        );
        assert_eq!(
            field.kind,
            FieldKind::Number {
                min: "0".into(),
                max: "120".into()
            }
        );
    }

    #[test]
    fn object_children_survive_a_trip_through_a_scalar_type() {
        let object = Field::new(
            "address",
            FieldKind::Object {
                fields: vec![object_field("street")],
            },
        );

        let string = object.apply(&FieldPatch::new().field_type(FieldType::String));
        assert_eq!(string.object_fields(), None);

        let back = string.apply(&FieldPatch::new().field_type(FieldType::Object));
        assert_eq!(back.object_fields().unwrap(), &[object_field("street")]);
        assert_eq!(back, object);
    }

    #[test]
    fn object_to_array_keeps_the_scalar_element_until_asked() {
        let object = Field::new(
            "address",
            FieldKind::Object {
                fields: vec![object_field("street")],
            },
        );

        let array = object.apply(&FieldPatch::new().field_type(FieldType::Array));
        assert!(!array.array_of_object());
        assert_eq!(array.element_type(), Some(ElementType::String));

        let objects = array.apply(&FieldPatch::new().element_type(ElementType::Object));
        assert_eq!(objects.object_fields().unwrap(), &[object_field("street")]);

        let back = array.apply(&FieldPatch::new().field_type(FieldType::Object));
        assert_eq!(back, object);
    }

    #[test]
    fn array_children_survive_a_scalar_element_and_the_object_type() {
        let array = Field::new(
            "items",
            FieldKind::Array {
                element: ArrayElement::Object(vec![object_field("label")]),
                min: "1".into(),
                max: String::new(),
            },
        );

        let numbers = array.apply(&FieldPatch::new().element_type(ElementType::Number));
        assert_eq!(numbers.element_type(), Some(ElementType::Number));
        assert_eq!(numbers.object_fields(), None);

        let objects = numbers.apply(&FieldPatch::new().element_type(ElementType::Object));
        assert_eq!(objects, array);

        let object = array.apply(&FieldPatch::new().field_type(FieldType::Object));
        assert_eq!(object.object_fields().unwrap(), &[object_field("label")]);

        let again = object.apply(&FieldPatch::new().field_type(FieldType::Array));
        assert_eq!(again, array);
    }

    #[test]
    fn element_type_switches_between_scalar_and_object() {
        let array = Field::default().apply(&FieldPatch::new().field_type(FieldType::Array));
        assert_eq!(array.element_type(), Some(ElementType::String));
        assert!(!array.array_of_object());

        let objects = array.apply(&FieldPatch::new().element_type(ElementType::Object));
        assert!(objects.array_of_object());
        assert_eq!(objects.object_fields(), Some(&[][..]));

        let dates = objects.apply(&FieldPatch::new().element_type(ElementType::Date));
        assert_eq!(dates.element_type(), Some(ElementType::Date));
        assert_eq!(dates.object_fields(), None);
    }

    #[test]
    fn element_type_on_non_array_is_remembered() {
        let field = Field::default().apply(&FieldPatch::new().element_type(ElementType::Date));
        assert_eq!(field.kind, FieldKind::default());

        let array = field.apply(&FieldPatch::new().field_type(FieldType::Array));
        assert_eq!(array.element_type(), Some(ElementType::Date));
    }

    #[test]
    fn conditional_patch_merges_key_wise() {
        let field = Field::default().apply(
            &FieldPatch::new().conditional(
                ConditionalPatch::new()
                    .enabled(true)
                    .depends_on("age")
                    .value("18"),
            ),
        );
        let field = field.apply(
            &FieldPatch::new().conditional(ConditionalPatch::new().otherwise_required(true)),
        );

        let rule = &field.conditional;
        assert!(rule.enabled);
        assert_eq!(rule.depends_on, "age");
        assert_eq!(rule.value, "18");
        assert_eq!(rule.condition, Condition::Equals);
        assert!(rule.then.required);
        assert!(rule.otherwise.required);
        assert!(rule.is_active());
    }

    #[test]
    fn required_message_prefers_custom_message() {
        let mut field = Field::new("email", FieldKind::default());
        assert_eq!(field.required_message(), "email is required");
        field.custom_message = "Please enter an email".into();
        assert_eq!(field.required_message(), "Please enter an email");
    }

    #[test]
    fn deserializes_with_missing_members_defaulted() {
        let field: Field = serde_json::from_str(
            r#"{
                "name": "tags",
                "required": true,
                "kind": { "type": "array", "element": { "object": [ { "name": "label" } ] }, "min": "1" },
                "conditionalValidation": { "enabled": true, "condition": "lesserThan" }
            }"#,
        )
        .unwrap();

        assert_eq!(field.name, "tags");
        assert!(field.required);
        assert_eq!(
            field.kind,
            FieldKind::Array {
                element: ArrayElement::Object(vec![object_field("label")]),
                min: "1".into(),
                max: String::new(),
            }
        );
        assert_eq!(field.conditional.condition, Condition::LessThan);
        assert!(field.conditional.then.required);
    }
}
