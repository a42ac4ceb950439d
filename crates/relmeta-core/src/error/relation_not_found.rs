use super::Error;

/// Error when the inverse side of a relation does not name a relation on the
/// related entity.
///
/// Only the strict inverse lookup raises this. Every other unresolved
/// reference degrades to an empty or default value.
#[derive(Debug)]
pub(super) struct RelationNotFoundError {
    entity: Box<str>,
    property_path: Box<str>,
}

impl std::error::Error for RelationNotFoundError {}

impl core::fmt::Display for RelationNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "relation not found: entity `{}` has no relation with property path `{}`",
            self.entity, self.property_path
        )
    }
}

impl Error {
    /// Creates a relation not found error for `entity`, the entity that
    /// declared the relation, and the inverse `property_path` that failed to
    /// resolve.
    pub fn relation_not_found(
        entity: impl Into<String>,
        property_path: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::RelationNotFound(RelationNotFoundError {
            entity: entity.into().into(),
            property_path: property_path.into().into(),
        }))
    }

    /// Returns `true` if this error is a relation not found error.
    pub fn is_relation_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RelationNotFound(_))
    }
}
