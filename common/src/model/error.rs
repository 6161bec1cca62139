use thiserror::Error;

/// Failures of the index-addressed model operations and of select-value
/// parsing. The model is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("field index {index} is out of range (model has {len} fields)")]
    FieldOutOfRange { index: usize, len: usize },

    #[error("object field index {index} of field {field} is out of range ({len} object fields)")]
    ObjectFieldOutOfRange { field: usize, index: usize, len: usize },

    #[error("field {index} is neither an object nor an array of objects")]
    NotObjectShaped { index: usize },

    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}
