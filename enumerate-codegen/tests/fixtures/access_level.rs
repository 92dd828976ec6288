//! Code generated by enumerate for the `models` crate. DO NOT EDIT.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::types::FromSqlError;

/// AccessLevel is the permission granted on a shared document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccessLevel(pub i64);

const _: AccessLevel = AccessLevel(0);

#[allow(non_upper_case_globals)]
pub const ReadOnly: AccessLevel = AccessLevel(1);

#[allow(non_upper_case_globals)]
pub const ReadWrite: AccessLevel = AccessLevel(2);

#[allow(non_upper_case_globals)]
static accessLevelStrings: &[(AccessLevel, &str)] = &[(ReadOnly, "read_only"), (ReadWrite, "read_write")];

impl AccessLevel {
    /// Returns the string form of the AccessLevel, or "" for an unknown value.
    pub fn as_str(&self) -> &'static str {
        accessLevelStrings
            .iter()
            .find(|(v, _)| v == self)
            .map(|(_, s)| *s)
            .unwrap_or("")
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the AccessLevel whose string form is `s`, or the zero value if none matches.
#[allow(non_snake_case)]
pub fn AccessLevelFromString(s: &str) -> AccessLevel {
    accessLevelStrings
        .iter()
        .find(|(_, v)| *v == s)
        .map(|(k, _)| *k)
        .unwrap_or_default()
}

impl std::str::FromStr for AccessLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AccessLevelFromString(s))
    }
}

impl Serialize for AccessLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for AccessLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v: i64 = Deserialize::deserialize(deserializer)?;
        Ok(AccessLevel(v))
    }
}

impl ToSql for AccessLevel {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for AccessLevel {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(AccessLevel(i)),
            _ => Err(FromSqlError::Other("failed to scan AccessLevel: expected an integer".into())),
        }
    }
}
