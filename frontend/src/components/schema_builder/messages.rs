use common::model::{FieldPatch, ObjectFieldPatch};

#[derive(Clone)]
pub enum Msg {
    AddField,
    RemoveField(usize),
    UpdateField(usize, FieldPatch),
    AddObjectField(usize),
    UpdateObjectField(usize, usize, ObjectFieldPatch),
    RemoveObjectField(usize, usize),
    BuildSchema,
    CopySchema,
}
