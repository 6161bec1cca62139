//! Yup schema source generation.
//!
//! [`generate`] walks a field list and concatenates Yup validator calls into
//! a small TypeScript module that default-exports the schema. It is a text
//! templater only: whatever the user typed ends up in the output, sensible or
//! not.

mod generator;

pub use generator::{generate, DEFAULT_SCHEMA};
