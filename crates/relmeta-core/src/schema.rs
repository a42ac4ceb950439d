pub mod app;
pub use app::Schema;

mod builder;
pub use builder::Builder;

pub mod decl;

mod name;
pub use name::Name;

mod naming;
pub use naming::{DefaultNamingStrategy, NamingStrategy, SnakeCaseNamingStrategy};
