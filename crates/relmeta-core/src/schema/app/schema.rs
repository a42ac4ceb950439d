use super::{Model, ModelId, Name, Relation, RelationId};
use crate::schema::Builder;
use indexmap::IndexMap;

/// Arena of every model known to the mapper.
///
/// Models address each other by [`ModelId`] and relations by [`RelationId`],
/// so the naturally cyclic relation graph needs no shared ownership. A schema
/// is produced by [`Builder::build`] and is read-only afterwards.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    /// Find an entity by name. Names compare after case normalization, see
    /// [`Name`]. Junction models are never returned.
    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        let name = Name::new(name);
        self.models()
            .filter(|model| model.is_entity())
            .find(|model| Name::new(&model.name) == name)
    }

    /// Get a relation by ID
    #[track_caller]
    pub fn relation(&self, id: RelationId) -> &Relation {
        self.model(id.model).relation(id)
    }

    /// Iterate every relation of every model, junction models included.
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.models().flat_map(|model| model.relations.iter())
    }
}
