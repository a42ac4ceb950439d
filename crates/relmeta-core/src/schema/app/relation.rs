mod inverse_side;
pub use inverse_side::{InverseSide, InverseSideResolver};

mod join_column;
pub use join_column::JoinColumn;

mod join_table;
pub use join_table::JoinTable;

mod property_type;
pub use property_type::{PropertyType, DEFERRED_TYPE_NAME};

mod referential_action;
pub use referential_action::ReferentialAction;

use super::{Model, ModelId, PropertiesMap, Schema};
use crate::schema::decl::RelationDeclaration;
use std::fmt;

/// Relation metadata: the resolved view of one declared relation.
///
/// Constructed from its declaration with an unresolved target, then wired by
/// the schema builder. Every accessor taking a `&Schema` derives its answer
/// from the wired graph and never mutates it.
#[derive(Debug, Clone)]
pub struct Relation {
    /// Identifies the relation; `id.model` is the owning model
    pub id: RelationId,

    /// Name of the property holding the relation on the owning model
    pub property_name: String,

    pub kind: RelationKind,

    /// The related model
    pub target: ModelId,

    /// Junction model backing a many-to-many relation
    pub junction: Option<ModelId>,

    pub cascade_insert: bool,
    pub cascade_update: bool,
    pub cascade_remove: bool,

    /// True unless the declaration made the foreign key mandatory.
    pub nullable: bool,

    pub on_delete: Option<ReferentialAction>,

    /// Previous column name, kept for migrations.
    pub old_column_name: Option<String>,

    pub is_tree_parent: bool,
    pub is_tree_children: bool,

    /// Declared type of the property, used for lazy detection only.
    pub property_type: Option<PropertyType>,

    pub inverse_side: Option<InverseSide>,

    /// Set only when this side owns a singular foreign key.
    pub join_column: Option<JoinColumn>,

    /// Set only when this side owns a many-to-many junction table.
    pub join_table: Option<JoinTable>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl Relation {
    /// Builds the relation described by `decl`. Blanket cascading is expanded
    /// into the three individual flags here. The target, junction and join
    /// descriptors are left for the wiring pass.
    pub fn from_declaration(id: RelationId, decl: &RelationDeclaration) -> Relation {
        let options = &decl.options;

        Relation {
            id,
            property_name: decl.property_name.clone(),
            kind: decl.kind,
            target: ModelId::placeholder(),
            junction: None,
            cascade_insert: options.cascade_insert || options.cascade_all,
            cascade_update: options.cascade_update || options.cascade_all,
            cascade_remove: options.cascade_remove || options.cascade_all,
            nullable: options.nullable.unwrap_or(true),
            on_delete: options.on_delete,
            old_column_name: options.old_column_name.clone(),
            is_tree_parent: decl.is_tree_parent,
            is_tree_children: decl.is_tree_children,
            property_type: decl.property_type.clone(),
            inverse_side: decl.inverse_side.clone(),
            join_column: None,
            join_table: None,
        }
    }

    /// The model declaring this relation
    pub fn owner<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.id.model)
    }

    /// The model this relation points to
    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }

    pub fn junction<'a>(&self, schema: &'a Schema) -> Option<&'a Model> {
        self.junction.map(|id| schema.model(id))
    }

    /// Returns `Entity.property`.
    pub fn full_name(&self, schema: &Schema) -> String {
        format!("{}.{}", self.owner(schema).name, self.property_name)
    }

    pub fn is_one_to_one(&self) -> bool {
        self.kind.is_one_to_one()
    }

    pub fn is_one_to_many(&self) -> bool {
        self.kind.is_one_to_many()
    }

    pub fn is_many_to_one(&self) -> bool {
        self.kind.is_many_to_one()
    }

    pub fn is_many_to_many(&self) -> bool {
        self.kind.is_many_to_many()
    }

    /// Whether this side holds the physical foreign key or junction table.
    ///
    /// A many-to-one side always does and a one-to-many side never does. A
    /// one-to-one side owns the relation iff it carries a join column, and a
    /// many-to-many side iff it carries a join table.
    pub fn is_owning(&self) -> bool {
        match self.kind {
            RelationKind::ManyToOne => true,
            RelationKind::OneToMany => false,
            RelationKind::OneToOne => self.join_column.is_some(),
            RelationKind::ManyToMany => self.join_table.is_some(),
        }
    }

    pub fn is_one_to_one_owner(&self) -> bool {
        self.is_one_to_one() && self.is_owning()
    }

    pub fn is_one_to_one_not_owner(&self) -> bool {
        self.is_one_to_one() && !self.is_owning()
    }

    /// Returns true if the property is declared as a deferred reference.
    pub fn is_lazy(&self) -> bool {
        self.property_type
            .as_ref()
            .is_some_and(PropertyType::is_deferred)
    }

    /// The physical column holding this side's foreign key.
    ///
    /// An explicitly named join column goes through the owning entity's
    /// customized naming, anything else is named after the property.
    ///
    /// # Panics
    ///
    /// Many-to-many relations have no singular column; calling this on one
    /// panics.
    #[track_caller]
    pub fn name(&self, schema: &Schema) -> String {
        self.assert_singular_column(schema, "name");

        let naming = self.owner(schema).naming_strategy();
        match self
            .join_column
            .as_ref()
            .and_then(|join_column| join_column.name.as_deref())
        {
            Some(custom) => naming.relation_name_customized(custom),
            None => naming.relation_name(&self.property_name),
        }
    }

    /// The column on the related entity this relation's foreign key points
    /// to: the join column's referenced column when declared, otherwise the
    /// related entity's primary column.
    ///
    /// # Panics
    ///
    /// Panics on many-to-many relations, see [`Relation::name`].
    #[track_caller]
    pub fn referenced_column_name<'a>(&'a self, schema: &'a Schema) -> &'a str {
        self.assert_singular_column(schema, "referenced_column_name");

        match self
            .join_column
            .as_ref()
            .and_then(|join_column| join_column.referenced_column_name.as_deref())
        {
            Some(referenced) => referenced,
            None => &self.target(schema).expect_primary_key().property_name,
        }
    }

    /// The property on the related entity representing the opposite end of
    /// this relation, or an empty string when there is none.
    ///
    /// A declared inverse side always wins. Failing that, a tree parent
    /// pairs with the related entity's tree children relation and vice versa.
    pub fn inverse_side_property(&self, schema: &Schema) -> String {
        let target = self.target(schema);

        if let Some(inverse_side) = &self.inverse_side {
            return match inverse_side {
                InverseSide::Literal(name) => name.clone(),
                InverseSide::Resolver(resolver) => resolver.resolve(&target.properties_map()),
            };
        }

        let pair = if self.is_tree_parent {
            target.tree_children_relation()
        } else if self.is_tree_children {
            target.tree_parent_relation()
        } else {
            None
        };

        pair.map(|relation| relation.property_name.clone())
            .unwrap_or_default()
    }

    /// The related entity's properties map, as handed to inverse-side
    /// resolvers.
    pub fn target_properties(&self, schema: &Schema) -> PropertiesMap {
        self.target(schema).properties_map()
    }

    pub fn has_inverse_side(&self, schema: &Schema) -> bool {
        self.find_inverse_relation(schema).is_some()
    }

    /// The relation on the related entity forming the opposite end of this
    /// one.
    ///
    /// Fails with a relation not found error, naming the owning entity and
    /// the computed inverse property, when the related entity has no such
    /// relation.
    pub fn inverse_relation<'a>(&self, schema: &'a Schema) -> crate::Result<&'a Relation> {
        self.find_inverse_relation(schema).ok_or_else(|| {
            crate::Error::relation_not_found(
                self.owner(schema).name.clone(),
                self.inverse_side_property(schema),
            )
        })
    }

    pub(crate) fn find_inverse_relation<'a>(&self, schema: &'a Schema) -> Option<&'a Relation> {
        let property = self.inverse_side_property(schema);
        self.target(schema).find_relation_with_property_name(&property)
    }

    #[track_caller]
    fn assert_singular_column(&self, schema: &Schema, accessor: &str) {
        assert!(
            !self.is_many_to_many(),
            "`{accessor}` called on many-to-many relation `{}`, which has no singular column",
            self.full_name(schema)
        );
    }
}

impl RelationKind {
    pub fn is_one_to_one(self) -> bool {
        matches!(self, Self::OneToOne)
    }

    pub fn is_one_to_many(self) -> bool {
        matches!(self, Self::OneToMany)
    }

    pub fn is_many_to_one(self) -> bool {
        matches!(self, Self::ManyToOne)
    }

    pub fn is_many_to_many(self) -> bool {
        matches!(self, Self::ManyToMany)
    }

    /// Kinds whose owning side carries a singular foreign key column.
    pub fn can_have_join_column(self) -> bool {
        matches!(self, Self::OneToOne | Self::ManyToOne)
    }

    pub fn can_have_join_table(self) -> bool {
        self.is_many_to_many()
    }
}

impl From<&Self> for RelationId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Relation> for RelationId {
    fn from(val: &Relation) -> Self {
        val.id
    }
}

impl fmt::Debug for RelationId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "RelationId({}/{})", self.model.0, self.index)
    }
}
