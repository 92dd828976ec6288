//! Code generated by enumerate for the `models` crate. DO NOT EDIT.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::types::FromSqlError;

/// UserType is an enumeration of values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserType(pub i64);

const _: UserType = UserType(0);

#[allow(non_upper_case_globals)]
pub const UserTypeAdmin: UserType = UserType(1);

#[allow(non_upper_case_globals)]
pub const UserTypeCustomerSupport: UserType = UserType(2);

#[allow(non_upper_case_globals)]
static userTypeStrings: &[(UserType, &str)] = &[
    (UserTypeAdmin, "admin"),
    (UserTypeCustomerSupport, "customer_support"),
];

impl UserType {
    /// Returns the string form of the UserType, or "" for an unknown value.
    pub fn as_str(&self) -> &'static str {
        userTypeStrings
            .iter()
            .find(|(v, _)| v == self)
            .map(|(_, s)| *s)
            .unwrap_or("")
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the UserType whose string form is `s`, or the zero value if none matches.
#[allow(non_snake_case)]
pub fn UserTypeFromString(s: &str) -> UserType {
    userTypeStrings
        .iter()
        .find(|(_, v)| *v == s)
        .map(|(k, _)| *k)
        .unwrap_or_default()
}

impl std::str::FromStr for UserType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(UserTypeFromString(s))
    }
}

impl Serialize for UserType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v: String = Deserialize::deserialize(deserializer)?;
        Ok(UserTypeFromString(&v))
    }
}

impl ToSql for UserType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for UserType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(b) | ValueRef::Blob(b) => std::str::from_utf8(b)
                .map(UserTypeFromString)
                .map_err(|e| FromSqlError::Other(format!("failed to scan UserType: {e}").into())),
            _ => Err(FromSqlError::Other("failed to scan UserType: expected text or blob".into())),
        }
    }
}
