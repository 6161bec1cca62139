//! Field-descriptor model behind the schema builder form.
//!
//! - `types`: the enumerations behind every select box.
//! - `field`: the `Field`/`ObjectField` records and how patches merge into them.
//! - `patch`: partial updates with chained setters.
//! - `field_model`: the ordered, editable list of fields.

mod error;
mod field;
mod field_model;
mod patch;
mod types;

pub use error::ModelError;
pub use field::{ArrayElement, ConditionalValidation, Field, FieldKind, ObjectField, RequirementPolicy};
pub use field_model::FieldModel;
pub use patch::{ConditionalPatch, FieldPatch, ObjectFieldPatch, PolicyPatch};
pub use types::{Condition, ElementType, FieldType, ScalarType};
