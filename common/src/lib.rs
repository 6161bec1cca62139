//! Shared core of the schema builder: the field-descriptor model edited by the
//! frontend and the generator that turns it into Yup schema source text.

pub mod model;
pub mod requests;
pub mod schema;
