//! Wired relation metadata: models, relations and the arena holding them.

mod model;
pub use model::{Model, ModelId, ModelKind};

mod pk;
pub use pk::PrimaryKey;

mod properties;
pub use properties::PropertiesMap;

mod relation;
pub use relation::{
    InverseSide, InverseSideResolver, JoinColumn, JoinTable, PropertyType, ReferentialAction,
    Relation, RelationId, RelationKind, DEFERRED_TYPE_NAME,
};

mod schema;
pub use schema::Schema;

use super::{Name, NamingStrategy};
