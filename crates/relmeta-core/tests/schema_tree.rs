use relmeta_core::schema::app::*;
use relmeta_core::schema::decl::{EntityDeclaration, RelationDeclaration};
use std_util::prelude::*;

fn category_tree() -> Schema {
    let mut builder = Schema::builder();
    builder.entity(EntityDeclaration::new("Category", "id").column("label"));
    builder
        .relation(RelationDeclaration::many_to_one("Category", "parent", "Category").tree_parent())
        .relation(
            RelationDeclaration::one_to_many("Category", "children", "Category").tree_children(),
        );
    assert_ok!(builder.build())
}

fn relation<'a>(schema: &'a Schema, entity: &str, property: &str) -> &'a Relation {
    let model = assert_some!(schema.model_by_name(entity));
    assert_some!(model.find_relation_with_property_name(property))
}

#[test]
fn model_records_tree_relations() {
    let schema = category_tree();
    let category = assert_some!(schema.model_by_name("Category"));

    assert_eq!(
        assert_some!(category.tree_parent_relation()).property_name,
        "parent"
    );
    assert_eq!(
        assert_some!(category.tree_children_relation()).property_name,
        "children"
    );
}

#[test]
fn tree_parent_pairs_with_children() {
    let schema = category_tree();
    let parent = relation(&schema, "Category", "parent");

    assert_eq!(parent.inverse_side_property(&schema), "children");
    assert!(parent.has_inverse_side(&schema));
    assert_eq!(
        assert_ok!(parent.inverse_relation(&schema)).id,
        relation(&schema, "Category", "children").id
    );
}

#[test]
fn tree_children_pairs_with_parent() {
    let schema = category_tree();
    let children = relation(&schema, "Category", "children");

    assert_eq!(children.inverse_side_property(&schema), "parent");
    assert_eq!(
        assert_ok!(children.inverse_relation(&schema)).id,
        relation(&schema, "Category", "parent").id
    );
}

#[test]
fn tree_parent_without_children_relation() {
    let mut builder = Schema::builder();
    builder.entity(EntityDeclaration::new("Folder", "id"));
    builder.relation(RelationDeclaration::many_to_one("Folder", "parent", "Folder").tree_parent());
    let schema = assert_ok!(builder.build());

    let parent = relation(&schema, "Folder", "parent");
    assert_eq!(parent.inverse_side_property(&schema), "");
    assert!(!parent.has_inverse_side(&schema));
    assert!(assert_err!(parent.inverse_relation(&schema)).is_relation_not_found());
}

#[test]
fn tree_parent_is_owning_self_reference() {
    let schema = category_tree();
    let parent = relation(&schema, "Category", "parent");

    assert!(parent.is_owning());
    assert_eq!(parent.target, parent.id.model);
    assert_eq!(parent.name(&schema), "parent");
    assert_eq!(parent.referenced_column_name(&schema), "id");
}

#[test]
fn second_tree_parent_is_rejected() {
    let mut builder = Schema::builder();
    builder.entity(EntityDeclaration::new("Folder", "id"));
    builder
        .relation(RelationDeclaration::many_to_one("Folder", "parent", "Folder").tree_parent())
        .relation(RelationDeclaration::many_to_one("Folder", "owner", "Folder").tree_parent());

    let err = assert_err!(builder.build());
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: entity `Folder` declares more than one tree parent relation \
         (`parent` and `owner`)"
    );
}

#[test]
fn second_tree_children_is_rejected() {
    let mut builder = Schema::builder();
    builder.entity(EntityDeclaration::new("Folder", "id"));
    builder
        .relation(RelationDeclaration::one_to_many("Folder", "children", "Folder").tree_children())
        .relation(RelationDeclaration::one_to_many("Folder", "files", "Folder").tree_children());

    let err = assert_err!(builder.build());
    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("more than one tree children relation"));
}
