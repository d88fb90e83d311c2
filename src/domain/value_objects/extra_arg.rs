//! Extra argument value object
//!
//! Application-specific values appended after the fixed fields of a result
//! line. A `Null` extra is written as the text `null`, unlike a missing error
//! message which is written as an empty field.

use std::fmt;

use uuid::Uuid;

/// A single extra value attached to a measurement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraArg {
    Text(String),
    Integer(i64),
    Bool(bool),
    Null,
}

impl ExtraArg {
    /// Returns true for `ExtraArg::Null`
    pub fn is_null(&self) -> bool {
        matches!(self, ExtraArg::Null)
    }
}

impl fmt::Display for ExtraArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraArg::Text(s) => f.write_str(s),
            ExtraArg::Integer(n) => write!(f, "{}", n),
            ExtraArg::Bool(b) => write!(f, "{}", b),
            ExtraArg::Null => f.write_str("null"),
        }
    }
}

impl From<String> for ExtraArg {
    fn from(s: String) -> Self {
        ExtraArg::Text(s)
    }
}

impl From<&str> for ExtraArg {
    fn from(s: &str) -> Self {
        ExtraArg::Text(s.to_string())
    }
}

impl From<i64> for ExtraArg {
    fn from(n: i64) -> Self {
        ExtraArg::Integer(n)
    }
}

impl From<i32> for ExtraArg {
    fn from(n: i32) -> Self {
        ExtraArg::Integer(n.into())
    }
}

impl From<u32> for ExtraArg {
    fn from(n: u32) -> Self {
        ExtraArg::Integer(n.into())
    }
}

impl From<bool> for ExtraArg {
    fn from(b: bool) -> Self {
        ExtraArg::Bool(b)
    }
}

impl From<Uuid> for ExtraArg {
    fn from(id: Uuid) -> Self {
        ExtraArg::Text(id.to_string())
    }
}

impl<T: Into<ExtraArg>> From<Option<T>> for ExtraArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(ExtraArg::Null, Into::into)
    }
}
