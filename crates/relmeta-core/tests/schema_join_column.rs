use relmeta_core::schema::app::*;
use relmeta_core::schema::decl::{EntityDeclaration, JoinTableOptions, RelationDeclaration};
use relmeta_core::schema::{Builder, SnakeCaseNamingStrategy};
use std_util::prelude::*;

fn builder() -> Builder {
    let mut builder = Schema::builder();
    builder.entity(EntityDeclaration::new("Account", "accountId").column("email"));
    builder.entity(EntityDeclaration::new("Invoice", "id"));
    builder
}

fn relation<'a>(schema: &'a Schema, entity: &str, property: &str) -> &'a Relation {
    let model = assert_some!(schema.model_by_name(entity));
    assert_some!(model.find_relation_with_property_name(property))
}

#[test]
fn column_named_after_property_by_default() {
    let mut builder = builder();
    builder.relation(RelationDeclaration::many_to_one("Invoice", "billedTo", "Account"));
    let schema = assert_ok!(builder.build());

    assert_eq!(relation(&schema, "Invoice", "billedTo").name(&schema), "billedTo");
}

#[test]
fn column_name_goes_through_naming_strategy() {
    let mut builder = builder();
    builder
        .naming_strategy(SnakeCaseNamingStrategy)
        .relation(RelationDeclaration::many_to_one("Invoice", "billedTo", "Account"));
    let schema = assert_ok!(builder.build());

    assert_eq!(relation(&schema, "Invoice", "billedTo").name(&schema), "billed_to");
}

#[test]
fn explicit_column_name_uses_customized_naming() {
    let mut builder = builder();
    builder
        .naming_strategy(SnakeCaseNamingStrategy)
        .relation(
            RelationDeclaration::many_to_one("Invoice", "billedTo", "Account")
                .join_column(JoinColumn::named("BillingAccount")),
        );
    let schema = assert_ok!(builder.build());

    assert_eq!(
        relation(&schema, "Invoice", "billedTo").name(&schema),
        "BillingAccount"
    );
}

#[test]
fn join_column_without_name_falls_back_to_property() {
    let mut builder = builder();
    builder.relation(
        RelationDeclaration::one_to_one("Invoice", "account", "Account")
            .join_column(JoinColumn::new().referencing("email")),
    );
    let schema = assert_ok!(builder.build());

    assert_eq!(relation(&schema, "Invoice", "account").name(&schema), "account");
}

#[test]
fn entity_naming_strategy_overrides_builder_default() {
    let mut builder = Schema::builder();
    builder.entity(EntityDeclaration::new("Account", "id"));
    builder.entity(EntityDeclaration::new("Invoice", "id").naming_strategy(SnakeCaseNamingStrategy));
    builder
        .relation(RelationDeclaration::many_to_one("Invoice", "billedTo", "Account"))
        .relation(RelationDeclaration::one_to_many("Account", "paidInvoices", "Invoice"));
    let schema = assert_ok!(builder.build());

    assert_eq!(relation(&schema, "Invoice", "billedTo").name(&schema), "billed_to");
    assert_eq!(
        relation(&schema, "Account", "paidInvoices").name(&schema),
        "paidInvoices"
    );
}

#[test]
fn referenced_column_falls_back_to_primary_key() {
    let mut builder = builder();
    builder.relation(RelationDeclaration::many_to_one("Invoice", "billedTo", "Account"));
    let schema = assert_ok!(builder.build());

    let billed_to = relation(&schema, "Invoice", "billedTo");
    assert!(billed_to.join_column.is_none());
    assert_eq!(billed_to.referenced_column_name(&schema), "accountId");
}

#[test]
fn referenced_column_from_join_column() {
    let mut builder = builder();
    builder.relation(
        RelationDeclaration::one_to_one("Invoice", "account", "Account")
            .join_column(JoinColumn::named("account_email").referencing("email")),
    );
    let schema = assert_ok!(builder.build());

    let account = relation(&schema, "Invoice", "account");
    assert_eq!(account.referenced_column_name(&schema), "email");
    assert_eq!(account.name(&schema), "account_email");
}

#[test]
fn named_join_column_still_falls_back_to_primary_key() {
    let mut builder = builder();
    builder.relation(
        RelationDeclaration::many_to_one("Invoice", "billedTo", "Account")
            .join_column(JoinColumn::named("account_ref")),
    );
    let schema = assert_ok!(builder.build());

    let billed_to = relation(&schema, "Invoice", "billedTo");
    assert_eq!(billed_to.referenced_column_name(&schema), "accountId");
}

#[test]
#[should_panic(expected = "has no singular column")]
fn column_name_panics_on_many_to_many() {
    let mut builder = builder();
    builder.relation(
        RelationDeclaration::many_to_many("Invoice", "accounts", "Account")
            .join_table(JoinTableOptions::new()),
    );
    let schema = assert_ok!(builder.build());

    relation(&schema, "Invoice", "accounts").name(&schema);
}

#[test]
#[should_panic(expected = "`referenced_column_name` called on many-to-many relation `Invoice.accounts`")]
fn referenced_column_panics_on_many_to_many() {
    let mut builder = builder();
    builder.relation(RelationDeclaration::many_to_many("Invoice", "accounts", "Account"));
    let schema = assert_ok!(builder.build());

    relation(&schema, "Invoice", "accounts").referenced_column_name(&schema);
}
