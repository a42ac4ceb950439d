/// Physical foreign key facts for a relation owning a singular foreign key.
///
/// Both fields are optional refinements. Without a name the column is named
/// after the relation property; without a referenced column the foreign key
/// points at the related entity's primary column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinColumn {
    /// Explicit column name
    pub name: Option<String>,

    /// Column on the related entity this foreign key points at
    pub referenced_column_name: Option<String>,
}

impl JoinColumn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            referenced_column_name: None,
        }
    }

    pub fn referencing(mut self, column: impl Into<String>) -> Self {
        self.referenced_column_name = Some(column.into());
        self
    }
}
