mod conditional;
mod object_fields;

pub use conditional::conditional_section;
pub use object_fields::object_fields_section;
