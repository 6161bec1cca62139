//! Closed sets of values the user picks from select boxes: field types,
//! array element types, the scalar types allowed inside object shapes, and
//! the conditional-validation conditions.
//!
//! Every enum carries its select value (`as_str`) and parses back from it via
//! `FromStr`, so the view can round-trip `<select>` values without stringly
//! typed matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ModelError;

/// Type of a top-level field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Array,
    Object,
}

impl FieldType {
    /// Select order used by the field type picker.
    pub const ALL: [FieldType; 6] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Date,
        FieldType::Array,
        FieldType::Object,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }
}

/// Type of a field nested inside an object or array-of-object shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarType {
    #[default]
    String,
    Number,
    Boolean,
    Date,
}

impl ScalarType {
    pub const ALL: [ScalarType; 4] = [
        ScalarType::String,
        ScalarType::Number,
        ScalarType::Boolean,
        ScalarType::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Number => "number",
            ScalarType::Boolean => "boolean",
            ScalarType::Date => "date",
        }
    }
}

/// Element type of an array field: any field type except `array`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    #[default]
    String,
    Number,
    Boolean,
    Date,
    Object,
}

impl ElementType {
    pub const ALL: [ElementType; 5] = [
        ElementType::String,
        ElementType::Number,
        ElementType::Boolean,
        ElementType::Date,
        ElementType::Object,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Object => "object",
            ElementType::String => "string",
            ElementType::Number => "number",
            ElementType::Boolean => "boolean",
            ElementType::Date => "date",
        }
    }

    /// The scalar this element type maps to, `None` for `object`.
    pub fn scalar(&self) -> Option<ScalarType> {
        match self {
            ElementType::String => Some(ScalarType::String),
            ElementType::Number => Some(ScalarType::Number),
            ElementType::Boolean => Some(ScalarType::Boolean),
            ElementType::Date => Some(ScalarType::Date),
            ElementType::Object => None,
        }
    }
}

impl From<ScalarType> for ElementType {
    fn from(scalar: ScalarType) -> Self {
        match scalar {
            ScalarType::String => ElementType::String,
            ScalarType::Number => ElementType::Number,
            ScalarType::Boolean => ElementType::Boolean,
            ScalarType::Date => ElementType::Date,
        }
    }
}

/// Test applied to the dependent field's value by a conditional rule.
///
/// `LessThan` is the canonical spelling; the older `lesserThan` select value
/// is still accepted when parsing or deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    #[default]
    Equals,
    NotEquals,
    Defined,
    Undefined,
    GreaterThan,
    #[serde(alias = "lesserThan")]
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl Condition {
    /// Order shown in the condition picker.
    pub const ALL: [Condition; 8] = [
        Condition::Equals,
        Condition::NotEquals,
        Condition::GreaterThan,
        Condition::LessThan,
        Condition::GreaterThanOrEqual,
        Condition::LessThanOrEqual,
        Condition::Defined,
        Condition::Undefined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Equals => "equals",
            Condition::NotEquals => "notEquals",
            Condition::Defined => "defined",
            Condition::Undefined => "undefined",
            Condition::GreaterThan => "greaterThan",
            Condition::LessThan => "lessThan",
            Condition::GreaterThanOrEqual => "greaterThanOrEqual",
            Condition::LessThanOrEqual => "lessThanOrEqual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Equals => "Equals",
            Condition::NotEquals => "Not Equals",
            Condition::Defined => "Is Defined",
            Condition::Undefined => "Is Undefined",
            Condition::GreaterThan => "Greater Than",
            Condition::LessThan => "Less Than",
            Condition::GreaterThanOrEqual => "Greater Than or Equal",
            Condition::LessThanOrEqual => "Less Than or Equal",
        }
    }

    /// Whether the condition compares against the rule's `value`.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Condition::Defined | Condition::Undefined)
    }
}

macro_rules! impl_select_value {
    ($ty:ty, $what:literal $(, $alias:literal => $variant:expr)*) => {
        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == $alias {
                        return Ok($variant);
                    }
                )*
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == s)
                    .ok_or_else(|| ModelError::UnknownVariant {
                        kind: $what,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_select_value!(FieldType, "field type");
impl_select_value!(ScalarType, "object field type");
impl_select_value!(ElementType, "array element type");
impl_select_value!(Condition, "condition", "lesserThan" => Condition::LessThan);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_parse_back() {
        for ty in FieldType::ALL {
            assert_eq!(ty.as_str().parse::<FieldType>().unwrap(), ty);
        }
        for condition in Condition::ALL {
            assert_eq!(condition.as_str().parse::<Condition>().unwrap(), condition);
        }
        assert_eq!("object".parse::<ElementType>().unwrap(), ElementType::Object);
    }

    #[test]
    fn legacy_lesser_than_spelling_maps_to_less_than() {
        assert_eq!("lesserThan".parse::<Condition>().unwrap(), Condition::LessThan);
        let parsed: Condition = serde_json::from_str("\"lesserThan\"").unwrap();
        assert_eq!(parsed, Condition::LessThan);
        assert_eq!(serde_json::to_string(&Condition::LessThan).unwrap(), "\"lessThan\"");
    }

    #[test]
    fn unknown_select_value_is_rejected() {
        let err = "array".parse::<ScalarType>().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownVariant {
                kind: "object field type",
                value: "array".to_string(),
            }
        );
    }

    #[test]
    fn only_presence_conditions_skip_the_value() {
        let without_value: Vec<_> = Condition::ALL
            .iter()
            .filter(|c| !c.takes_value())
            .collect();
        assert_eq!(without_value, vec![&Condition::Defined, &Condition::Undefined]);
    }
}
