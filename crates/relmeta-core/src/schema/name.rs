use std_util::str;

/// An entity or table name, normalized into its lowercase word parts so that
/// `BlogPost`, `blogPost` and `blog_post` all name the same entity.
///
/// Only used to match names. Models keep the name as it was declared.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(src);
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }
}
