//! rusqlite adapter for the SQL boundary.

use super::EncodingAdapter;
use crate::{
    Encoding, Enum,
    ast::{Fn, Impl, Param},
};

const IMPORTS: &[&str] = &[
    "rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef}",
    "rusqlite::types::FromSqlError",
];

const RESERVED: &[&str] = &[
    "rusqlite",
    "FromSql",
    "FromSqlError",
    "FromSqlResult",
    "ToSql",
    "ToSqlOutput",
    "ValueRef",
    "value",
    "b",
    "e",
    "i",
];

/// Generates `ToSql`/`FromSql` impls.
///
/// Scanning matches on rusqlite's `ValueRef`: string mode accepts `Text` and
/// `Blob` and decodes them as UTF-8, int mode accepts `Integer`. Every other
/// shape is an error that names the type.
#[derive(Debug, Clone, Copy, Default)]
pub struct RusqliteAdapter;

impl RusqliteAdapter {
    fn to_sql_body(encoding: Encoding) -> &'static str {
        match encoding {
            Encoding::Int => "Ok(ToSqlOutput::from(self.0))",
            _ => "Ok(ToSqlOutput::from(self.as_str()))",
        }
    }

    fn column_result_body(descriptor: &Enum) -> String {
        let ty = &descriptor.type_name;
        match descriptor.sql_encoding {
            Encoding::Int => format!(
                r#"match value {{
    ValueRef::Integer(i) => Ok({ty}(i)),
    _ => Err(FromSqlError::Other("failed to scan {ty}: expected an integer".into())),
}}"#
            ),
            _ => format!(
                r#"match value {{
    ValueRef::Text(b) | ValueRef::Blob(b) => std::str::from_utf8(b)
        .map({ctor})
        .map_err(|e| FromSqlError::Other(format!("failed to scan {ty}: {{e}}").into())),
    _ => Err(FromSqlError::Other("failed to scan {ty}: expected text or blob".into())),
}}"#,
                ctor = descriptor.constructor_name()
            ),
        }
    }
}

impl EncodingAdapter for RusqliteAdapter {
    fn encoding(&self, descriptor: &Enum) -> Encoding {
        descriptor.sql_encoding
    }

    fn imports(&self) -> &'static [&'static str] {
        IMPORTS
    }

    fn reserved_names(&self) -> &'static [&'static str] {
        RESERVED
    }

    fn impls(&self, descriptor: &Enum) -> Vec<Impl> {
        if descriptor.sql_encoding.is_none() {
            return Vec::new();
        }
        let ty = &descriptor.type_name;

        vec![
            Impl::new(ty).for_trait("ToSql").method(
                Fn::new("to_sql")
                    .private()
                    .param(Param::self_ref())
                    .returns("rusqlite::Result<ToSqlOutput<'_>>")
                    .body_line(Self::to_sql_body(descriptor.sql_encoding)),
            ),
            Impl::new(ty).for_trait("FromSql").method(
                Fn::new("column_result")
                    .private()
                    .param(Param::new("value", "ValueRef<'_>"))
                    .returns("FromSqlResult<Self>")
                    .body(&Self::column_result_body(descriptor)),
            ),
        ]
    }
}
