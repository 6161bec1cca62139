use serde::{Deserialize, Serialize};

use crate::model::Field;

/// Request payload for the schema generation endpoint.
/// Carries the fields in the order they should appear in the schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateSchemaRequest {
    #[serde(default)]
    pub fields: Vec<Field>,
}
