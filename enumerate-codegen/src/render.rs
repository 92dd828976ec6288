//! Expansion of a descriptor into raw Rust source.
//!
//! The output is syntactically complete but not yet formatted; see
//! [`crate::format_source`].

use indexmap::IndexMap;

use crate::{
    Enum, Error, Result,
    adapters::adapters,
    ast::{Const, Fn, Impl, Param, RustFile, Static, TupleStruct, Use},
};

const DERIVES: &[&str] = &[
    "Debug",
    "Clone",
    "Copy",
    "Default",
    "PartialEq",
    "Eq",
    "Hash",
    "PartialOrd",
    "Ord",
];

/// Render the descriptor into unformatted Rust source.
///
/// The descriptor is expected to have passed validation. Rendering still
/// refuses to emit a file with missing bindings or duplicate constant names,
/// and reports those as [`Error::Render`].
pub fn render(descriptor: &Enum) -> Result<String> {
    EnumRenderer::new(descriptor)?.render()
}

struct EnumRenderer<'a> {
    descriptor: &'a Enum,
    ty: &'a str,
    /// Constant name to canonical string, in declaration order.
    table: IndexMap<String, String>,
}

impl<'a> EnumRenderer<'a> {
    fn new(descriptor: &'a Enum) -> Result<Self> {
        let ty = descriptor.type_name.as_str();
        if ty.is_empty() {
            return Err(Error::render("<unnamed>", "missing binding 'type'"));
        }
        if descriptor.package.is_empty() {
            return Err(Error::render(ty, "missing binding 'package'"));
        }

        let mut table = IndexMap::new();
        for (name, string) in descriptor.mapped_strings() {
            if table.contains_key(&name) {
                return Err(Error::render(ty, format!("duplicate constant '{}'", name)));
            }
            table.insert(name, string);
        }

        Ok(Self {
            descriptor,
            ty,
            table,
        })
    }

    fn render(&self) -> Result<String> {
        let file = RustFile::new()
            .header(format!(
                "Code generated by enumerate for the `{}` crate. DO NOT EDIT.",
                self.descriptor.package
            ))
            .use_stmts(self.descriptor.imports().into_iter().map(Use::new))
            .add(self.type_decl())
            .add(Const::unnamed(self.ty, format!("{}(0)", self.ty)))
            .add_all(self.value_consts())
            .add(self.string_table())
            .add(self.accessor())
            .add(self.display())
            .add(self.constructor())
            .add(self.from_str())
            .add_all(
                adapters()
                    .into_iter()
                    .flat_map(|adapter| adapter.impls(self.descriptor)),
            );

        Ok(file.render())
    }

    fn type_decl(&self) -> TupleStruct {
        let doc = if self.descriptor.description.is_empty() {
            format!("{} is an enumeration of values", self.ty)
        } else {
            self.descriptor.description.clone()
        };

        TupleStruct::new(self.ty)
            .doc(doc)
            .derives(DERIVES.iter().copied())
            .field("pub i64")
    }

    fn value_consts(&self) -> Vec<Const> {
        self.table
            .keys()
            .zip(1..)
            .map(|(name, n)| {
                Const::new(name, self.ty, format!("{}({})", self.ty, n))
                    .attr("allow(non_upper_case_globals)")
            })
            .collect()
    }

    fn string_table(&self) -> Static {
        self.table.iter().fold(
            Static::new(
                self.descriptor.string_map_name(),
                format!("&[({}, &str)]", self.ty),
            )
            .attr("allow(non_upper_case_globals)"),
            |table, (name, string)| table.element(format!("({}, \"{}\")", name, string)),
        )
    }

    fn accessor(&self) -> Impl {
        Impl::new(self.ty).method(
            Fn::new("as_str")
                .doc(format!(
                    "Returns the string form of the {}, or \"\" for an unknown value.",
                    self.ty
                ))
                .param(Param::self_ref())
                .returns("&'static str")
                .body(&format!(
                    "{}\n    .iter()\n    .find(|(v, _)| v == self)\n    .map(|(_, s)| *s)\n    .unwrap_or(\"\")",
                    self.descriptor.string_map_name()
                )),
        )
    }

    fn display(&self) -> Impl {
        Impl::new(self.ty).for_trait("std::fmt::Display").method(
            Fn::new("fmt")
                .private()
                .param(Param::self_ref())
                .param(Param::new("f", "&mut std::fmt::Formatter<'_>"))
                .returns("std::fmt::Result")
                .body_line("f.write_str(self.as_str())"),
        )
    }

    fn constructor(&self) -> Fn {
        Fn::new(self.descriptor.constructor_name())
            .doc(format!(
                "Returns the {} whose string form is `s`, or the zero value if none matches.",
                self.ty
            ))
            .attr("allow(non_snake_case)")
            .param(Param::new("s", "&str"))
            .returns(self.ty)
            .body(&format!(
                "{}\n    .iter()\n    .find(|(_, v)| *v == s)\n    .map(|(k, _)| *k)\n    .unwrap_or_default()",
                self.descriptor.string_map_name()
            ))
    }

    fn from_str(&self) -> Impl {
        Impl::new(self.ty)
            .for_trait("std::str::FromStr")
            .assoc_type("Err", "std::convert::Infallible")
            .method(
                Fn::new("from_str")
                    .private()
                    .param(Param::new("s", "&str"))
                    .returns("std::result::Result<Self, Self::Err>")
                    .body_line(format!("Ok({}(s))", self.descriptor.constructor_name())),
            )
    }
}
