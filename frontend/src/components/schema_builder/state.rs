//! Component state for the schema builder.
//!
//! Holds the field model being edited and the last generated schema, along
//! with the read-only queries the view needs to decide what to render.

use common::model::{Field, FieldModel};
use common::schema::DEFAULT_SCHEMA;

/// Main state container for the `SchemaBuilderComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct SchemaBuilderComponent {
    /// The fields being edited, in schema order.
    pub model: FieldModel,

    /// Output of the last "Build Schema" click. `None` until the first build.
    pub generated_schema: Option<String>,
}

impl SchemaBuilderComponent {
    pub fn new(initial_fields: Option<Vec<Field>>) -> Self {
        let model = match initial_fields {
            Some(fields) if !fields.is_empty() => FieldModel::from(fields),
            _ => FieldModel::new(),
        };
        Self {
            model,
            generated_schema: None,
        }
    }

    /// Text shown in the preview and copied to the clipboard.
    pub fn displayed_schema(&self) -> &str {
        self.generated_schema.as_deref().unwrap_or(DEFAULT_SCHEMA)
    }

    /// The form always keeps one field on screen.
    pub fn can_remove_fields(&self) -> bool {
        self.model.len() > 1
    }

    /// Names the field at `index` may depend on: every other named field.
    pub fn dependency_candidates(&self, index: usize) -> Vec<&str> {
        self.model
            .fields()
            .iter()
            .enumerate()
            .filter(|(i, field)| *i != index && !field.name.is_empty())
            .map(|(_, field)| field.name.as_str())
            .collect()
    }

    /// Whether the field named by `index`'s conditional rule is a number.
    pub fn dependent_is_numeric(&self, index: usize) -> bool {
        self.model.field(index).is_some_and(|field| {
            self.model
                .fields()
                .iter()
                .find(|other| other.name == field.conditional.depends_on)
                .is_some_and(Field::is_numeric)
        })
    }
}
