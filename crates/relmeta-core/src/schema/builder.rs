use super::app::{
    JoinColumn, JoinTable, Model, ModelId, ModelKind, PrimaryKey, ReferentialAction, Relation,
    RelationId, Schema,
};
use super::decl::{EntityDeclaration, JoinTableOptions, RelationDeclaration, RelationOptions};
use super::{DefaultNamingStrategy, Name, NamingStrategy};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::sync::Arc;

/// Collects entity and relation declarations, then builds the [`Schema`].
///
/// Declarations may arrive in any order: a relation can be registered before
/// the entities it mentions. Nothing is resolved until [`Builder::build`].
#[derive(Debug)]
pub struct Builder {
    /// Naming strategy for entities that do not declare their own
    naming_strategy: Arc<dyn NamingStrategy>,

    entities: Vec<EntityDeclaration>,

    relations: Vec<RelationDeclaration>,
}

/// Used to track state during the build process
struct BuildSchema<'a> {
    builder: &'a Builder,

    /// Maps declared entity names to identifiers. Junction models are never
    /// added, so relations cannot target them.
    model_lookup: IndexMap<Name, ModelId>,

    /// The schema as it is built
    schema: Schema,

    /// Constructed relations waiting to be wired, with their declarations
    pending: Vec<(RelationId, &'a RelationDeclaration)>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            naming_strategy: Arc::new(DefaultNamingStrategy),
            entities: vec![],
            relations: vec![],
        }
    }

    pub fn naming_strategy(&mut self, naming: impl NamingStrategy + 'static) -> &mut Self {
        self.naming_strategy = Arc::new(naming);
        self
    }

    /// Registers an entity. Identifiers are handed out in registration order.
    pub fn entity(&mut self, decl: EntityDeclaration) -> ModelId {
        let id = ModelId(self.entities.len());
        self.entities.push(decl);
        id
    }

    pub fn relation(&mut self, decl: RelationDeclaration) -> &mut Self {
        self.relations.push(decl);
        self
    }

    /// Builds the schema in two passes. Every relation is first constructed
    /// from its declaration, then wired to its target, join descriptors and
    /// junction once every model exists.
    pub fn build(&self) -> Result<Schema> {
        let mut build = BuildSchema {
            builder: self,
            model_lookup: IndexMap::new(),
            schema: Schema::default(),
            pending: vec![],
        };

        build.build_models()?;
        build.build_relations()?;

        tracing::debug!(
            models = build.schema.models.len(),
            relations = build.pending.len(),
            "constructed relation metadata"
        );

        build.link_relations()?;
        build.build_junctions()?;
        build.link_junctions();

        tracing::debug!(
            models = build.schema.models.len(),
            junctions = build.schema.models().filter(|model| model.is_junction()).count(),
            "linked relations"
        );

        Ok(build.schema)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BuildSchema<'a> {
    fn build_models(&mut self) -> Result<()> {
        for (index, decl) in self.builder.entities.iter().enumerate() {
            let id = ModelId(index);
            let name = Name::new(&decl.name);

            if self.model_lookup.insert(name, id).is_some() {
                return Err(Error::invalid_schema(format!(
                    "entity `{}` is registered more than once",
                    decl.name,
                )));
            }

            let naming_strategy = decl
                .naming_strategy
                .clone()
                .unwrap_or_else(|| self.builder.naming_strategy.clone());

            self.schema.models.insert(
                id,
                Model {
                    id,
                    name: decl.name.clone(),
                    kind: ModelKind::Entity {
                        primary_key: PrimaryKey::new(decl.primary_key.clone()),
                    },
                    table_name: decl.table_name.clone(),
                    columns: decl.columns.clone(),
                    relations: vec![],
                    tree_parent: None,
                    tree_children: None,
                    naming_strategy,
                },
            );
        }

        Ok(())
    }

    fn build_relations(&mut self) -> Result<()> {
        let builder = self.builder;

        for decl in &builder.relations {
            let Some(&owner) = self.model_lookup.get(&Name::new(&decl.owner)) else {
                return Err(Error::invalid_schema(format!(
                    "relation `{}` is declared on an entity that was not registered with the \
                     schema; did you forget to register it with `Builder::entity`?",
                    declared_name(decl),
                )));
            };

            let model = &mut self.schema.models[&owner];

            if model.has_relation_with_property_name(&decl.property_name) {
                return Err(Error::invalid_schema(format!(
                    "entity `{}` declares more than one relation named `{}`",
                    model.name, decl.property_name,
                )));
            }

            let id = owner.relation(model.relations.len());
            model.relations.push(Relation::from_declaration(id, decl));
            self.pending.push((id, decl));
        }

        Ok(())
    }

    /// Resolves each relation's target and attaches what the declaration
    /// stated about the physical mapping.
    fn link_relations(&mut self) -> Result<()> {
        for &(id, decl) in &self.pending {
            let Some(&target) = self.model_lookup.get(&Name::new(&decl.target)) else {
                return Err(Error::invalid_schema(format!(
                    "relation `{}` references entity `{}`, which was not registered with the \
                     schema; did you forget to register it with `Builder::entity`?",
                    declared_name(decl),
                    decl.target,
                )));
            };

            if decl.join_column.is_some() && !decl.kind.can_have_join_column() {
                return Err(Error::invalid_schema(format!(
                    "relation `{}` is {:?} and cannot have a join column",
                    declared_name(decl),
                    decl.kind,
                )));
            }

            if decl.join_table.is_some() && !decl.kind.can_have_join_table() {
                return Err(Error::invalid_schema(format!(
                    "relation `{}` is {:?} and cannot have a join table",
                    declared_name(decl),
                    decl.kind,
                )));
            }

            let model = &mut self.schema.models[&id.model];

            if decl.is_tree_parent {
                if let Some(existing) = model.tree_parent {
                    return Err(Error::invalid_schema(format!(
                        "entity `{}` declares more than one tree parent relation \
                         (`{}` and `{}`)",
                        model.name,
                        model.relations[existing.index].property_name,
                        decl.property_name,
                    )));
                }
                model.tree_parent = Some(id);
            }

            if decl.is_tree_children {
                if let Some(existing) = model.tree_children {
                    return Err(Error::invalid_schema(format!(
                        "entity `{}` declares more than one tree children relation \
                         (`{}` and `{}`)",
                        model.name,
                        model.relations[existing.index].property_name,
                        decl.property_name,
                    )));
                }
                model.tree_children = Some(id);
            }

            let relation = &mut model.relations[id.index];
            relation.target = target;
            relation.join_column = decl.join_column.clone();

            tracing::trace!(
                relation = ?id,
                property = %decl.property_name,
                kind = ?decl.kind,
                target = ?target,
                "wired relation"
            );
        }

        Ok(())
    }

    /// Adds a junction model for every many-to-many relation declaring a
    /// join table. Must run after `link_relations`.
    fn build_junctions(&mut self) -> Result<()> {
        let owning: Vec<_> = self
            .pending
            .iter()
            .filter_map(|&(id, decl)| decl.join_table.as_ref().map(|options| (id, options)))
            .collect();

        for (id, options) in owning {
            self.build_junction(id, options)?;
        }

        Ok(())
    }

    fn build_junction(&mut self, id: RelationId, options: &JoinTableOptions) -> Result<()> {
        let relation = self.schema.relation(id);
        let owner = relation.owner(&self.schema);
        let target = relation.target(&self.schema);

        let naming = owner.naming_strategy.clone();
        let owner_table = owner.table_name();
        let target_table = target.table_name();

        let table = options.name.clone().unwrap_or_else(|| {
            naming.join_table_name(&owner_table, &target_table, &relation.property_name)
        });

        let mut join_column = junction_column(
            &*naming,
            options.join_column.as_ref(),
            &owner_table,
            &owner.expect_primary_key().property_name,
        );

        let mut inverse_join_column = junction_column(
            &*naming,
            options.inverse_join_column.as_ref(),
            &target_table,
            &target.expect_primary_key().property_name,
        );

        // Self-referential relations generate the same name for both columns
        if join_column.name == inverse_join_column.name {
            let declared = |column: Option<&JoinColumn>| {
                column.is_some_and(|column| column.name.is_some())
            };

            if declared(options.join_column.as_ref())
                || declared(options.inverse_join_column.as_ref())
            {
                return Err(Error::invalid_schema(format!(
                    "junction `{table}` for relation `{}` declares both join columns as `{}`",
                    relation.full_name(&self.schema),
                    join_column.name.as_deref().unwrap_or_default(),
                )));
            }

            for (index, column) in [&mut join_column, &mut inverse_join_column]
                .into_iter()
                .enumerate()
            {
                column.name = column
                    .name
                    .as_deref()
                    .map(|name| naming.join_table_duplicate_column_name(name, index + 1));
            }
        }

        let junction_id = ModelId(self.schema.models.len());
        let relations = vec![
            junction_relation(junction_id.relation(0), &table, owner, &join_column),
            junction_relation(junction_id.relation(1), &table, target, &inverse_join_column),
        ];

        tracing::debug!(
            relation = ?id,
            junction = ?junction_id,
            table = %table,
            "synthesized junction"
        );

        self.schema.models.insert(
            junction_id,
            Model {
                id: junction_id,
                name: table.clone(),
                kind: ModelKind::Junction { relation: id },
                table_name: Some(table.clone()),
                columns: vec![],
                relations,
                tree_parent: None,
                tree_children: None,
                naming_strategy: naming,
            },
        );

        let relation = &mut self.schema.models[&id.model].relations[id.index];
        relation.junction = Some(junction_id);
        relation.join_table = Some(JoinTable {
            name: table,
            join_column,
            inverse_join_column,
        });

        Ok(())
    }

    /// Shares each junction with the inverse side of its owning relation.
    fn link_junctions(&mut self) {
        let links: Vec<(RelationId, ModelId)> = self
            .schema
            .relations()
            .filter(|relation| relation.is_many_to_many() && relation.is_owning())
            .filter_map(|relation| {
                let junction = relation.junction?;
                let inverse = relation.find_inverse_relation(&self.schema)?;
                (inverse.is_many_to_many() && !inverse.is_owning())
                    .then_some((inverse.id, junction))
            })
            .collect();

        for (id, junction) in links {
            self.schema.models[&id.model].relations[id.index].junction = Some(junction);
        }
    }
}

/// `Owner.property`, as written in the declaration.
fn declared_name(decl: &RelationDeclaration) -> String {
    format!("{}.{}", decl.owner, decl.property_name)
}

fn junction_column(
    naming: &dyn NamingStrategy,
    declared: Option<&JoinColumn>,
    table: &str,
    primary_key: &str,
) -> JoinColumn {
    let referenced = declared
        .and_then(|column| column.referenced_column_name.clone())
        .unwrap_or_else(|| primary_key.to_string());

    let name = declared
        .and_then(|column| column.name.clone())
        .unwrap_or_else(|| naming.join_table_column_name(table, &referenced));

    JoinColumn {
        name: Some(name),
        referenced_column_name: Some(referenced),
    }
}

/// A junction's non-nullable, cascading foreign key to one side of the
/// many-to-many relation.
fn junction_relation(
    id: RelationId,
    table: &str,
    target: &Model,
    column: &JoinColumn,
) -> Relation {
    let property_name = column.name.clone().unwrap_or_default();
    let decl = RelationDeclaration::many_to_one(table, property_name, target.name.clone())
        .options(
            RelationOptions::default()
                .nullable(false)
                .on_delete(ReferentialAction::Cascade),
        )
        .join_column(column.clone());

    let mut relation = Relation::from_declaration(id, &decl);
    relation.target = target.id;
    relation.join_column = decl.join_column;
    relation
}
