/// The primary column of an entity.
///
/// Only the property name is tracked here; relations fall back to it when no
/// explicit referenced column is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKey {
    pub property_name: String,
}

impl PrimaryKey {
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
        }
    }
}
