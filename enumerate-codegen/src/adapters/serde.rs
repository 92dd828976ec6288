//! serde adapter for the JSON boundary.

use super::EncodingAdapter;
use crate::{
    Encoding, Enum,
    ast::{Fn, Impl, Param},
};

const IMPORTS: &[&str] = &["serde::{Deserialize, Deserializer, Serialize, Serializer}"];

const RESERVED: &[&str] = &[
    "serde",
    "Deserialize",
    "Deserializer",
    "Serialize",
    "Serializer",
    "S",
    "D",
    "serializer",
    "deserializer",
    "v",
];

/// Generates hand-written `Serialize`/`Deserialize` impls.
///
/// String mode goes through `as_str` and the reverse constructor; int mode
/// writes and reads the raw `i64`. Decode errors from the deserializer are
/// returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeAdapter;

impl EncodingAdapter for SerdeAdapter {
    fn encoding(&self, descriptor: &Enum) -> Encoding {
        descriptor.json_encoding
    }

    fn imports(&self) -> &'static [&'static str] {
        IMPORTS
    }

    fn reserved_names(&self) -> &'static [&'static str] {
        RESERVED
    }

    fn impls(&self, descriptor: &Enum) -> Vec<Impl> {
        let ty = &descriptor.type_name;
        let (serialize, deserialize) = match descriptor.json_encoding {
            Encoding::None => return Vec::new(),
            Encoding::String => (
                "serializer.serialize_str(self.as_str())".to_string(),
                format!(
                    "let v: String = Deserialize::deserialize(deserializer)?;\nOk({}(&v))",
                    descriptor.constructor_name()
                ),
            ),
            Encoding::Int => (
                "serializer.serialize_i64(self.0)".to_string(),
                format!("let v: i64 = Deserialize::deserialize(deserializer)?;\nOk({}(v))", ty),
            ),
        };

        vec![
            Impl::new(ty).for_trait("Serialize").method(
                Fn::new("serialize")
                    .private()
                    .generic("S")
                    .param(Param::self_ref())
                    .param(Param::new("serializer", "S"))
                    .returns("std::result::Result<S::Ok, S::Error>")
                    .bound("S: Serializer")
                    .body_line(serialize),
            ),
            Impl::new(ty)
                .for_trait("Deserialize<'de>")
                .generic("'de")
                .method(
                    Fn::new("deserialize")
                        .private()
                        .generic("D")
                        .param(Param::new("deserializer", "D"))
                        .returns("std::result::Result<Self, D::Error>")
                        .bound("D: Deserializer<'de>")
                        .body(&deserialize),
                ),
        ]
    }
}
