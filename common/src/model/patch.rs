//! Partial updates for the field model.
//!
//! A patch only carries the members the caller wants to change; everything
//! left as `None` keeps its current value. Patches are built with chained
//! setters:
//!
//! ```
//! use common::model::{FieldPatch, FieldType};
//!
//! let patch = FieldPatch::new()
//!     .name("email")
//!     .field_type(FieldType::String)
//!     .required(true);
//! assert_eq!(patch.name.as_deref(), Some("email"));
//! assert!(patch.nullable.is_none());
//! ```

use super::types::{Condition, ElementType, FieldType, ScalarType};

macro_rules! setters {
    ($($member:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $member(mut self, value: impl Into<$ty>) -> Self {
                self.$member = Some(value.into());
                self
            }
        )*
    };
}

/// Partial update of a top-level field.
///
/// Bounds are only applied when they fit the field's type after the patch's
/// own `field_type` change, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub required: Option<bool>,
    pub nullable: Option<bool>,
    pub element_type: Option<ElementType>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub array_min: Option<String>,
    pub array_max: Option<String>,
    pub custom_message: Option<String>,
    pub conditional: Option<ConditionalPatch>,
}

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        name: String,
        field_type: FieldType,
        required: bool,
        nullable: bool,
        element_type: ElementType,
        min_length: String,
        max_length: String,
        min: String,
        max: String,
        array_min: String,
        array_max: String,
        custom_message: String,
        conditional: ConditionalPatch,
    }
}

/// Partial update of an object field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectFieldPatch {
    pub name: Option<String>,
    pub field_type: Option<ScalarType>,
    pub required: Option<bool>,
}

impl ObjectFieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        name: String,
        field_type: ScalarType,
        required: bool,
    }
}

/// Partial update of a conditional rule, merged key-wise into the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalPatch {
    pub enabled: Option<bool>,
    pub depends_on: Option<String>,
    pub condition: Option<Condition>,
    pub value: Option<String>,
    pub then: Option<PolicyPatch>,
    pub otherwise: Option<PolicyPatch>,
}

impl ConditionalPatch {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        enabled: bool,
        depends_on: String,
        condition: Condition,
        value: String,
        then: PolicyPatch,
        otherwise: PolicyPatch,
    }

    pub fn then_required(self, required: bool) -> Self {
        self.then(PolicyPatch::required(required))
    }

    pub fn otherwise_required(self, required: bool) -> Self {
        self.otherwise(PolicyPatch::required(required))
    }
}

/// Partial update of a `then`/`otherwise` branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyPatch {
    pub required: Option<bool>,
}

impl PolicyPatch {
    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
        }
    }
}
