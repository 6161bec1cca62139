use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::field::{Field, ObjectField};
use super::patch::{FieldPatch, ObjectFieldPatch};
use crate::schema;

/// The ordered list of fields the user is editing.
///
/// Every mutation replaces the touched field with a new record built from
/// the old one, and either completes fully or returns an error with the
/// model unchanged. Keeping at least one field around is left to the UI:
/// [`FieldModel::remove_field`] will happily empty the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldModel {
    fields: Vec<Field>,
}

impl Default for FieldModel {
    /// A model holding a single default field.
    fn default() -> Self {
        Self {
            fields: vec![Field::default()],
        }
    }
}

impl From<Vec<Field>> for FieldModel {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl FieldModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Inserts a default field at the top of the list.
    pub fn add_field(&mut self) {
        self.fields.insert(0, Field::default());
    }

    /// Appends a default object field to the children of `field_index`.
    pub fn add_object_field(&mut self, field_index: usize) -> Result<(), ModelError> {
        self.replace(field_index, |field| {
            let mut next = field.clone();
            next.object_fields_mut()
                .ok_or(ModelError::NotObjectShaped { index: field_index })?
                .push(ObjectField::default());
            Ok(next)
        })
    }

    pub fn update_field(&mut self, index: usize, patch: &FieldPatch) -> Result<(), ModelError> {
        self.replace(index, |field| Ok(field.apply(patch)))
    }

    pub fn update_object_field(
        &mut self,
        field_index: usize,
        object_field_index: usize,
        patch: &ObjectFieldPatch,
    ) -> Result<(), ModelError> {
        self.replace(field_index, |field| {
            let mut next = field.clone();
            let children = next
                .object_fields_mut()
                .ok_or(ModelError::NotObjectShaped { index: field_index })?;
            let len = children.len();
            let child = children
                .get_mut(object_field_index)
                .ok_or(ModelError::ObjectFieldOutOfRange {
                    field: field_index,
                    index: object_field_index,
                    len,
                })?;
            *child = child.apply(patch);
            Ok(next)
        })
    }

    /// Removes and returns the field at `index`, even if it is the last one.
    pub fn remove_field(&mut self, index: usize) -> Result<Field, ModelError> {
        self.check_index(index)?;
        Ok(self.fields.remove(index))
    }

    pub fn remove_object_field(
        &mut self,
        field_index: usize,
        object_field_index: usize,
    ) -> Result<ObjectField, ModelError> {
        self.check_index(field_index)?;
        let mut next = self.fields[field_index].clone();
        let children = next
            .object_fields_mut()
            .ok_or(ModelError::NotObjectShaped { index: field_index })?;
        if object_field_index >= children.len() {
            return Err(ModelError::ObjectFieldOutOfRange {
                field: field_index,
                index: object_field_index,
                len: children.len(),
            });
        }
        let removed = children.remove(object_field_index);
        self.fields[field_index] = next;
        Ok(removed)
    }

    /// Yup schema source for the current fields.
    pub fn generate(&self) -> String {
        schema::generate(&self.fields)
    }

    fn check_index(&self, index: usize) -> Result<(), ModelError> {
        if index < self.fields.len() {
            Ok(())
        } else {
            Err(ModelError::FieldOutOfRange {
                index,
                len: self.fields.len(),
            })
        }
    }

    fn replace(
        &mut self,
        index: usize,
        build: impl FnOnce(&Field) -> Result<Field, ModelError>,
    ) -> Result<(), ModelError> {
        self.check_index(index)?;
        let next = build(&self.fields[index])?;
        self.fields[index] = next;
        Ok(())
    }
}
