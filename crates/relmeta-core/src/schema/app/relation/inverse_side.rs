use super::PropertiesMap;
use std::fmt;
use std::sync::Arc;

/// How a relation names the property representing its opposite end.
#[derive(Clone)]
pub enum InverseSide {
    /// The property name, given directly.
    Literal(String),

    /// Picks the property from the related entity's properties map.
    Resolver(InverseSideResolver),
}

/// Callback choosing the inverse property out of the related entity's
/// [`PropertiesMap`].
#[derive(Clone)]
pub struct InverseSideResolver(Arc<dyn Fn(&PropertiesMap) -> String + Send + Sync>);

impl InverseSide {
    pub fn literal(name: impl Into<String>) -> Self {
        Self::Literal(name.into())
    }

    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&PropertiesMap) -> String + Send + Sync + 'static,
    {
        Self::Resolver(InverseSideResolver::new(f))
    }

    /// Computes the inverse property name against `properties`, the related
    /// entity's properties map.
    pub fn resolve(&self, properties: &PropertiesMap) -> String {
        match self {
            Self::Literal(name) => name.clone(),
            Self::Resolver(resolver) => resolver.resolve(properties),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub fn is_resolver(&self) -> bool {
        matches!(self, Self::Resolver(_))
    }
}

impl InverseSideResolver {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&PropertiesMap) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn resolve(&self, properties: &PropertiesMap) -> String {
        (self.0)(properties)
    }
}

impl From<&str> for InverseSide {
    fn from(name: &str) -> Self {
        Self::literal(name)
    }
}

impl From<String> for InverseSide {
    fn from(name: String) -> Self {
        Self::Literal(name)
    }
}

impl fmt::Debug for InverseSide {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(name) => fmt.debug_tuple("Literal").field(name).finish(),
            Self::Resolver(resolver) => resolver.fmt(fmt),
        }
    }
}

impl fmt::Debug for InverseSideResolver {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("Resolver(..)")
    }
}
