//! Defines the properties for the `SchemaBuilderComponent`.

use common::model::Field;
use yew::prelude::*;

/// Properties for the `SchemaBuilderComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct SchemaBuilderProps {
    /// Fields to start editing with. Only read when the component is created;
    /// `None` (the default) or an empty list starts from one blank field.
    #[prop_or_default]
    pub initial_fields: Option<Vec<Field>>,
}
