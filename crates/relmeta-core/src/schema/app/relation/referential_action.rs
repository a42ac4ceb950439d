use std::fmt;
use std::str::FromStr;

/// Referential action applied to the foreign key when the referenced row is
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum ReferentialAction {
    /// Raise an error if any references exist.
    NoAction,
    /// Same as `NoAction`, checked immediately.
    Restrict,
    /// Delete the referencing rows.
    Cascade,
    /// Set the referencing columns to NULL.
    SetNull,
    /// Set the referencing columns to their default values.
    SetDefault,
}

impl ReferentialAction {
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

impl FromStr for ReferentialAction {
    type Err = crate::Error;

    /// Parses the SQL spelling, ignoring case. Spaces may also be written as
    /// underscores or omitted.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NO ACTION" | "NOACTION" | "NO_ACTION" => Ok(Self::NoAction),
            "RESTRICT" => Ok(Self::Restrict),
            "CASCADE" => Ok(Self::Cascade),
            "SET NULL" | "SETNULL" | "SET_NULL" => Ok(Self::SetNull),
            "SET DEFAULT" | "SETDEFAULT" | "SET_DEFAULT" => Ok(Self::SetDefault),
            _ => Err(crate::err!("unknown referential action `{s}`")),
        }
    }
}

impl TryFrom<String> for ReferentialAction {
    type Error = crate::Error;

    fn try_from(value: String) -> crate::Result<Self> {
        value.parse()
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
