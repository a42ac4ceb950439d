use super::Name;
use std::fmt;

/// Maps logical names (entity classes, relation properties) to physical
/// table and column names.
///
/// Each entity carries the strategy it was registered with; relation
/// accessors always consult the strategy of the relation's owning entity.
pub trait NamingStrategy: fmt::Debug + Send + Sync {
    /// Table name for an entity class without an explicit table name.
    fn table_name(&self, class_name: &str) -> String;

    /// Column name for a relation property without an explicit join column
    /// name.
    fn relation_name(&self, property_name: &str) -> String;

    /// Column name for a relation whose join column was given an explicit
    /// name.
    fn relation_name_customized(&self, custom_name: &str) -> String;

    /// Junction table name for a many-to-many relation declared on
    /// `first_table` through `first_property`.
    fn join_table_name(&self, first_table: &str, second_table: &str, first_property: &str)
        -> String;

    /// Name of a junction table column referencing `column_name` on
    /// `table_name`.
    fn join_table_column_name(&self, table_name: &str, column_name: &str) -> String;

    /// Disambiguates the two junction columns of a self-referential
    /// many-to-many relation. `index` is 1 for the owning side's column and
    /// 2 for the inverse side's.
    fn join_table_duplicate_column_name(&self, column_name: &str, index: usize) -> String {
        format!("{column_name}_{index}")
    }
}

/// Uses names exactly as declared.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNamingStrategy;

/// Converts every generated name to `snake_case`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeCaseNamingStrategy;

impl NamingStrategy for DefaultNamingStrategy {
    fn table_name(&self, class_name: &str) -> String {
        class_name.to_string()
    }

    fn relation_name(&self, property_name: &str) -> String {
        property_name.to_string()
    }

    fn relation_name_customized(&self, custom_name: &str) -> String {
        custom_name.to_string()
    }

    fn join_table_name(
        &self,
        first_table: &str,
        second_table: &str,
        first_property: &str,
    ) -> String {
        format!("{first_table}_{first_property}_{second_table}")
    }

    fn join_table_column_name(&self, table_name: &str, column_name: &str) -> String {
        format!("{table_name}_{column_name}")
    }
}

impl NamingStrategy for SnakeCaseNamingStrategy {
    fn table_name(&self, class_name: &str) -> String {
        Name::new(class_name).snake_case()
    }

    fn relation_name(&self, property_name: &str) -> String {
        Name::new(property_name).snake_case()
    }

    // Explicit names are chosen by the user and kept verbatim.
    fn relation_name_customized(&self, custom_name: &str) -> String {
        custom_name.to_string()
    }

    fn join_table_name(
        &self,
        first_table: &str,
        second_table: &str,
        first_property: &str,
    ) -> String {
        [first_table, first_property, second_table]
            .iter()
            .map(|part| Name::new(part).snake_case())
            .collect::<Vec<_>>()
            .join("_")
    }

    fn join_table_column_name(&self, table_name: &str, column_name: &str) -> String {
        format!(
            "{}_{}",
            Name::new(table_name).snake_case(),
            Name::new(column_name).snake_case()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_keeps_names() {
        let naming = DefaultNamingStrategy;
        assert_eq!(naming.table_name("BlogPost"), "BlogPost");
        assert_eq!(naming.relation_name("author"), "author");
        assert_eq!(naming.relation_name_customized("author_ref"), "author_ref");
        assert_eq!(
            naming.join_table_name("Post", "Category", "categories"),
            "Post_categories_Category"
        );
        assert_eq!(naming.join_table_column_name("Post", "id"), "Post_id");
        assert_eq!(naming.join_table_duplicate_column_name("User_id", 2), "User_id_2");
    }

    #[test]
    fn snake_case_strategy() {
        let naming = SnakeCaseNamingStrategy;
        assert_eq!(naming.table_name("BlogPost"), "blog_post");
        assert_eq!(naming.relation_name("mainAuthor"), "main_author");
        assert_eq!(naming.relation_name_customized("AuthorRef"), "AuthorRef");
        assert_eq!(
            naming.join_table_name("BlogPost", "Category", "categories"),
            "blog_post_categories_category"
        );
        assert_eq!(
            naming.join_table_column_name("BlogPost", "postId"),
            "blog_post_post_id"
        );
    }
}
