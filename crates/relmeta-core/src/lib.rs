//! Relation metadata resolution for an object-relational mapper.
//!
//! Entities and their relations are registered as plain declarations with a
//! [`schema::Builder`]. Building the schema constructs every relation, then
//! wires each one to its owning, related and junction models. The resulting
//! [`Schema`] is read-only: ownership, column names, inverse sides and lazy
//! detection are all derived on demand from the wired graph.

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses relmeta's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
