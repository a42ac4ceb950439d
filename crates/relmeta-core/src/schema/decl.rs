//! Declarations handed to the [`Builder`](super::Builder) by the registration
//! layer.
//!
//! A declaration records what was stated about an entity or relation and
//! nothing more. Resolution happens when the schema is built.

use super::app::{
    InverseSide, JoinColumn, PropertiesMap, PropertyType, ReferentialAction, RelationKind,
};
use super::NamingStrategy;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EntityDeclaration {
    /// Entity class name, used to resolve relation owners and targets
    pub name: String,

    /// Explicit table name
    pub table_name: Option<String>,

    /// Property name of the primary column
    pub primary_key: String,

    /// Other column properties
    pub columns: Vec<String>,

    /// Overrides the builder's default naming strategy for this entity
    pub naming_strategy: Option<Arc<dyn NamingStrategy>>,
}

#[derive(Debug, Clone)]
pub struct RelationDeclaration {
    /// Name of the entity declaring the property
    pub owner: String,

    pub property_name: String,

    pub kind: RelationKind,

    /// Name of the related entity
    pub target: String,

    pub property_type: Option<PropertyType>,

    pub inverse_side: Option<InverseSide>,

    pub is_tree_parent: bool,

    pub is_tree_children: bool,

    pub options: RelationOptions,

    pub join_column: Option<JoinColumn>,

    pub join_table: Option<JoinTableOptions>,
}

/// The options bundle of a relation declaration.
///
/// Deserializes from an object with the camelCase keys `cascadeInsert`,
/// `cascadeUpdate`, `cascadeRemove`, `cascadeAll`, `nullable`,
/// `oldColumnName` and `onDelete`. Missing keys take their defaults and
/// unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationOptions {
    pub cascade_insert: bool,
    pub cascade_update: bool,
    pub cascade_remove: bool,

    /// Shorthand for all three cascade flags
    pub cascade_all: bool,

    /// `None` leaves the relation nullable
    pub nullable: Option<bool>,

    pub old_column_name: Option<String>,

    pub on_delete: Option<ReferentialAction>,
}

/// Junction table options for the owning side of a many-to-many relation.
/// Unset names are generated by the owning entity's naming strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinTableOptions {
    pub name: Option<String>,

    /// Column referencing the owning entity
    pub join_column: Option<JoinColumn>,

    /// Column referencing the related entity
    pub inverse_join_column: Option<JoinColumn>,
}

impl EntityDeclaration {
    pub fn new(name: impl Into<String>, primary_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            primary_key: primary_key.into(),
            columns: vec![],
            naming_strategy: None,
        }
    }

    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn column(mut self, property_name: impl Into<String>) -> Self {
        self.columns.push(property_name.into());
        self
    }

    pub fn naming_strategy(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming_strategy = Some(Arc::new(naming));
        self
    }
}

impl RelationDeclaration {
    pub fn new(
        owner: impl Into<String>,
        property_name: impl Into<String>,
        kind: RelationKind,
        target: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            property_name: property_name.into(),
            kind,
            target: target.into(),
            property_type: None,
            inverse_side: None,
            is_tree_parent: false,
            is_tree_children: false,
            options: RelationOptions::default(),
            join_column: None,
            join_table: None,
        }
    }

    pub fn one_to_one(
        owner: impl Into<String>,
        property_name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(owner, property_name, RelationKind::OneToOne, target)
    }

    pub fn one_to_many(
        owner: impl Into<String>,
        property_name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(owner, property_name, RelationKind::OneToMany, target)
    }

    pub fn many_to_one(
        owner: impl Into<String>,
        property_name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(owner, property_name, RelationKind::ManyToOne, target)
    }

    pub fn many_to_many(
        owner: impl Into<String>,
        property_name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(owner, property_name, RelationKind::ManyToMany, target)
    }

    pub fn property_type(mut self, ty: impl Into<PropertyType>) -> Self {
        self.property_type = Some(ty.into());
        self
    }

    /// Names the inverse property directly.
    pub fn inverse_side(mut self, inverse_side: impl Into<InverseSide>) -> Self {
        self.inverse_side = Some(inverse_side.into());
        self
    }

    /// Picks the inverse property from the related entity's properties map.
    pub fn inverse_side_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&PropertiesMap) -> String + Send + Sync + 'static,
    {
        self.inverse_side = Some(InverseSide::resolver(f));
        self
    }

    pub fn tree_parent(mut self) -> Self {
        self.is_tree_parent = true;
        self
    }

    pub fn tree_children(mut self) -> Self {
        self.is_tree_children = true;
        self
    }

    pub fn options(mut self, options: RelationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn join_column(mut self, join_column: JoinColumn) -> Self {
        self.join_column = Some(join_column);
        self
    }

    pub fn join_table(mut self, join_table: JoinTableOptions) -> Self {
        self.join_table = Some(join_table);
        self
    }
}

impl RelationOptions {
    pub fn cascade_all() -> Self {
        Self {
            cascade_all: true,
            ..Self::default()
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    pub fn old_column_name(mut self, name: impl Into<String>) -> Self {
        self.old_column_name = Some(name.into());
        self
    }
}

impl JoinTableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn join_column(mut self, join_column: JoinColumn) -> Self {
        self.join_column = Some(join_column);
        self
    }

    pub fn inverse_join_column(mut self, join_column: JoinColumn) -> Self {
        self.inverse_join_column = Some(join_column);
        self
    }
}
