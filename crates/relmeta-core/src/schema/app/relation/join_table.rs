use super::JoinColumn;

/// Junction table shape for the owning side of a many-to-many relation.
///
/// Attached only to the owning side; its presence is what makes that side
/// own the relation. Both columns always carry their resolved names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTable {
    /// Junction table name
    pub name: String,

    /// Column referencing the owning entity
    pub join_column: JoinColumn,

    /// Column referencing the related entity
    pub inverse_join_column: JoinColumn,
}
