use std::fmt;

use serde::Deserialize;

use crate::{Error, Result};

/// How an enumeration is represented on an external boundary such as JSON or
/// a SQL column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// No adapter is generated for this boundary.
    #[default]
    None,
    /// Encode through the mapped string.
    String,
    /// Encode through the underlying integer.
    Int,
}

impl Encoding {
    /// Parse a user-supplied encoding token for the given axis (`json` or `sql`).
    ///
    /// The empty string means "no encoding"; only `string` and `int` are
    /// accepted otherwise.
    pub fn from_token(axis: &str, token: &str) -> Result<Self> {
        match token {
            "" => Ok(Encoding::None),
            "string" => Ok(Encoding::String),
            "int" => Ok(Encoding::Int),
            _ => Err(Box::new(Error::InvalidEncodingToken {
                axis: axis.to_string(),
                token: token.to_string(),
            })),
        }
    }

    pub fn is_none(self) -> bool {
        self == Encoding::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::None => "none",
            Encoding::String => "string",
            Encoding::Int => "int",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
