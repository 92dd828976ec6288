//! The enumeration descriptor and its derived names.

use std::path::PathBuf;

use enumerate_core::{to_camel_case, to_pascal_case, to_snake_case};
use serde::Deserialize;

use crate::Encoding;
use crate::Result;
use crate::adapters::adapters;

/// Everything needed to generate one enumeration type.
///
/// A descriptor is built once from parsed input, checked with
/// [`Enum::validate`], and then passed by reference through rendering and
/// formatting. Only `package` and `type_name` are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Enum {
    /// The crate the generated file belongs to.
    pub package: String,
    /// The enumeration type identifier.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Doc text; must start with `"<Type> is"` when present.
    pub description: String,
    /// Raw value names, in declaration order.
    pub values: Vec<String>,
    /// Prepended to every generated value name.
    pub prefix: String,
    #[serde(rename = "json")]
    pub json_encoding: Encoding,
    #[serde(rename = "sql")]
    pub sql_encoding: Encoding,
    /// Explicit output path; derived from the type name when unset.
    #[serde(rename = "out")]
    pub out_file: Option<PathBuf>,
}

impl Enum {
    pub fn new(package: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn json(mut self, encoding: Encoding) -> Self {
        self.json_encoding = encoding;
        self
    }

    pub fn sql(mut self, encoding: Encoding) -> Self {
        self.sql_encoding = encoding;
        self
    }

    pub fn out_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_file = Some(path.into());
        self
    }

    /// Check the descriptor invariants. See [`crate::validate`].
    pub fn validate(&self) -> Result<()> {
        crate::validate(self)
    }

    /// The output path: the explicit one, or `<snake_type>.rs`.
    pub fn file_name(&self) -> PathBuf {
        match &self.out_file {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => PathBuf::from(format!("{}.rs", to_snake_case(&self.type_name))),
        }
    }

    /// The `use` trees required by the requested encodings, JSON first.
    pub fn imports(&self) -> Vec<&'static str> {
        let mut imports: Vec<&'static str> = Vec::new();
        for adapter in adapters() {
            if adapter.encoding(self).is_none() {
                continue;
            }
            for &import in adapter.imports() {
                if !imports.contains(&import) {
                    imports.push(import);
                }
            }
        }
        imports
    }

    pub fn string_map_name(&self) -> String {
        format!("{}Strings", to_camel_case(&self.type_name))
    }

    pub fn constructor_name(&self) -> String {
        format!("{}FromString", to_pascal_case(&self.type_name))
    }

    pub fn value_names(&self) -> Vec<String> {
        let prefix = to_pascal_case(&self.prefix);
        self.values
            .iter()
            .map(|value| format!("{}{}", prefix, to_pascal_case(value)))
            .collect()
    }

    /// Each value name paired with its canonical string literal.
    pub fn mapped_strings(&self) -> Vec<(String, String)> {
        self.value_names()
            .into_iter()
            .zip(self.values.iter().map(|value| to_snake_case(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn user_type() -> Enum {
        Enum::new("models", "UserType")
            .prefix("UserType")
            .values(["Admin", "CustomerSupport"])
    }

    #[test]
    fn test_file_name() {
        assert_eq!(user_type().file_name(), Path::new("user_type.rs"));
        assert_eq!(
            user_type().out_file("src/models/roles.rs").file_name(),
            Path::new("src/models/roles.rs")
        );
        assert_eq!(
            user_type().out_file("").file_name(),
            Path::new("user_type.rs")
        );
    }

    #[test]
    fn test_imports() {
        assert!(user_type().imports().is_empty());

        assert_eq!(
            user_type().json(Encoding::String).imports(),
            ["serde::{Deserialize, Deserializer, Serialize, Serializer}"]
        );

        assert_eq!(
            user_type().sql(Encoding::Int).imports(),
            [
                "rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef}",
                "rusqlite::types::FromSqlError",
            ]
        );

        assert_eq!(
            user_type()
                .sql(Encoding::String)
                .json(Encoding::Int)
                .imports(),
            [
                "serde::{Deserialize, Deserializer, Serialize, Serializer}",
                "rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef}",
                "rusqlite::types::FromSqlError",
            ]
        );
    }

    #[test]
    fn test_string_map_name() {
        assert_eq!(user_type().string_map_name(), "userTypeStrings");
        assert_eq!(Enum::new("p", "http_status").string_map_name(), "httpStatusStrings");
    }

    #[test]
    fn test_constructor_name() {
        assert_eq!(user_type().constructor_name(), "UserTypeFromString");
        assert_eq!(
            Enum::new("p", "http_status").constructor_name(),
            "HttpStatusFromString"
        );
    }

    #[test]
    fn test_value_names() {
        assert_eq!(
            user_type().value_names(),
            ["UserTypeAdmin", "UserTypeCustomerSupport"]
        );
        assert_eq!(
            Enum::new("p", "Level")
                .values(["read_only", "ReadWrite"])
                .value_names(),
            ["ReadOnly", "ReadWrite"]
        );
    }

    #[test]
    fn test_mapped_strings() {
        assert_eq!(
            user_type().mapped_strings(),
            [
                ("UserTypeAdmin".to_string(), "admin".to_string()),
                (
                    "UserTypeCustomerSupport".to_string(),
                    "customer_support".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_deserialize_uses_short_keys() {
        let descriptor: Enum = toml::from_str(
            r#"
            type = "UserType"
            values = ["Admin"]
            json = "string"
            sql = "int"
            out = "roles.rs"
            "#,
        )
        .unwrap();

        assert_eq!(descriptor.type_name, "UserType");
        assert_eq!(descriptor.json_encoding, Encoding::String);
        assert_eq!(descriptor.sql_encoding, Encoding::Int);
        assert_eq!(descriptor.out_file, Some(PathBuf::from("roles.rs")));
        assert!(descriptor.package.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let result: std::result::Result<Enum, _> = toml::from_str("name = \"UserType\"");
        assert!(result.is_err());
    }
}
