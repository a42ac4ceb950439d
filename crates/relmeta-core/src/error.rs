mod adhoc;
mod invalid_schema;
mod relation_not_found;

use adhoc::AdhocError;
use invalid_schema::InvalidSchemaError;
use relation_not_found::RelationNotFoundError;
use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while building or querying relation metadata.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    assert!(
                        inner.cause.is_none(),
                        "consequent error must not already have a cause"
                    );
                    inner.kind
                }
                // Shared consequents are flattened into their message.
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .as_ref()
            .and_then(|inner| inner.cause.as_ref())
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    InvalidSchema(InvalidSchemaError),
    RelationNotFound(RelationNotFoundError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            RelationNotFound(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown relmeta error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("bad relation: {}", "author"));
        assert_eq!(err.to_string(), "bad relation: author");
    }

    #[test]
    fn err_macro_builds_adhoc_error() {
        let err = err!("{} relations linked", 3);
        assert_eq!(err.to_string(), "3 relations linked");
        assert!(!err.is_invalid_schema());
    }

    #[test]
    fn error_chain_display() {
        let err = Error::relation_not_found("Post", "posts")
            .context(err!("resolving `Post.author`"))
            .context(err!("building join for `Post`"));

        assert_eq!(
            err.to_string(),
            "building join for `Post`: resolving `Post.author`: \
             relation not found: entity `Post` has no relation with property path `posts`"
        );
    }

    #[test]
    fn context_keeps_root_kind_reachable() {
        let err = Error::invalid_schema("duplicate entity `User`").context(err!("build failed"));
        let source = std::error::Error::source(&err).expect("root cause");
        assert_eq!(
            source.to_string(),
            "invalid schema: duplicate entity `User`"
        );
    }

    #[test]
    fn shared_consequent_is_flattened() {
        let consequent = err!("outer");
        let _keep = consequent.clone();
        let err = err!("inner").context(consequent);
        assert_eq!(err.to_string(), "outer: inner");
    }

    #[test]
    fn relation_not_found_accessors() {
        let err = Error::relation_not_found("Category", "posts");
        assert!(err.is_relation_not_found());
        assert!(!err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "relation not found: entity `Category` has no relation with property path `posts`"
        );
    }

    #[test]
    fn invalid_schema_message() {
        let err = Error::invalid_schema("entity `User` registered twice");
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "invalid schema: entity `User` registered twice"
        );
    }
}
