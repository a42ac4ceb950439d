/// Type name marking a property as a deferred reference. Relations whose
/// declared property type carries this name are lazily materialized.
pub const DEFERRED_TYPE_NAME: &str = "Promise";

/// Declared type of a relation property.
///
/// Only the type's name is recorded. It is never used to construct values,
/// only to detect deferred references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyType {
    pub name: String,
}

impl PropertyType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns true if the type is the deferred-reference wrapper. The match
    /// is on the type name alone, folding ASCII letters only: `PROMISE`
    /// matches, but non-ASCII case variants are never folded.
    pub fn is_deferred(&self) -> bool {
        self.name.eq_ignore_ascii_case(DEFERRED_TYPE_NAME)
    }
}

impl From<&str> for PropertyType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
