use super::{NamingStrategy, PrimaryKey, PropertiesMap, Relation, RelationId};
use std::fmt;
use std::sync::Arc;

/// Entity metadata: everything the relation layer needs to know about one
/// data-model class.
#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the entity class, exactly as declared. Junctions carry their
    /// table name.
    pub name: String,

    /// Declared entity, or a junction synthesized for a many-to-many relation
    pub kind: ModelKind,

    /// Explicit table name, if one was declared
    pub table_name: Option<String>,

    /// Plain column properties, excluding the primary column
    pub columns: Vec<String>,

    /// Relations declared on this model, indexed by `RelationId::index`
    pub relations: Vec<Relation>,

    /// The relation pointing at this entity's parent row in a tree
    pub tree_parent: Option<RelationId>,

    /// The relation holding this entity's child rows in a tree
    pub tree_children: Option<RelationId>,

    /// Strategy turning this entity's property names into column names
    pub naming_strategy: Arc<dyn NamingStrategy>,
}

#[derive(Debug, Clone)]
pub enum ModelKind {
    /// A registered entity with a primary column
    Entity { primary_key: PrimaryKey },

    /// Junction table backing the owning many-to-many `relation`
    Junction { relation: RelationId },
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    /// Returns true if this model was registered as an entity
    pub fn is_entity(&self) -> bool {
        matches!(self.kind, ModelKind::Entity { .. })
    }

    /// Returns true if this model was synthesized for a many-to-many relation
    pub fn is_junction(&self) -> bool {
        matches!(self.kind, ModelKind::Junction { .. })
    }

    /// Returns the primary key of an entity, `None` for junctions
    pub fn primary_key(&self) -> Option<&PrimaryKey> {
        match &self.kind {
            ModelKind::Entity { primary_key } => Some(primary_key),
            ModelKind::Junction { .. } => None,
        }
    }

    #[track_caller]
    pub fn expect_primary_key(&self) -> &PrimaryKey {
        match self.primary_key() {
            Some(primary_key) => primary_key,
            None => panic!("expected `{}` to be an entity, but it is a junction", self.name),
        }
    }

    /// The physical table name: the explicit one if declared, otherwise the
    /// naming strategy's name for the entity class.
    pub fn table_name(&self) -> String {
        match &self.table_name {
            Some(table_name) => table_name.clone(),
            None => self.naming_strategy.table_name(&self.name),
        }
    }

    pub fn naming_strategy(&self) -> &dyn NamingStrategy {
        &*self.naming_strategy
    }

    #[track_caller]
    pub fn relation(&self, id: impl Into<RelationId>) -> &Relation {
        let relation_id = id.into();
        assert_eq!(self.id, relation_id.model);
        &self.relations[relation_id.index]
    }

    pub fn has_relation_with_property_name(&self, name: &str) -> bool {
        self.find_relation_with_property_name(name).is_some()
    }

    pub fn find_relation_with_property_name(&self, name: &str) -> Option<&Relation> {
        self.relations
            .iter()
            .find(|relation| relation.property_name == name)
    }

    pub fn tree_parent_relation(&self) -> Option<&Relation> {
        self.tree_parent.map(|id| self.relation(id))
    }

    pub fn tree_children_relation(&self) -> Option<&Relation> {
        self.tree_children.map(|id| self.relation(id))
    }

    /// Builds the map of every declared property: the primary column, plain
    /// columns, then relations.
    pub fn properties_map(&self) -> PropertiesMap {
        self.primary_key()
            .map(|primary_key| primary_key.property_name.as_str())
            .into_iter()
            .chain(self.columns.iter().map(String::as_str))
            .chain(
                self.relations
                    .iter()
                    .map(|relation| relation.property_name.as_str()),
            )
            .collect()
    }
}

impl ModelId {
    /// Create a `RelationId` representing the current model's relation at
    /// index `index`.
    pub const fn relation(self, index: usize) -> RelationId {
        RelationId { model: self, index }
    }

    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
