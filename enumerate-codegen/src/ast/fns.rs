//! Rust function builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Rust function.
///
/// Receivers such as `&self` are parameters with an empty type.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// A `&self` receiver.
    pub fn self_ref() -> Self {
        Self::new("&self", "")
    }

    fn format(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions and methods.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    generics: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    bounds: Vec<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            generics: Vec::new(),
            params: Vec::new(),
            return_type: None,
            bounds: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    /// Drop the `pub` qualifier, e.g. for trait method implementations.
    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Add a generic parameter, e.g. `S`.
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a `where` clause predicate, e.g. `S: Serializer`.
    pub fn bound(mut self, predicate: impl Into<String>) -> Self {
        self.bounds.push(predicate.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: &str) -> Self {
        self.body.extend(content.lines().map(str::to_string));
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }

    fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature = format!("{}fn {}{}({})", vis, self.name, generics, params);
        if let Some(ret) = &self.return_type {
            signature.push_str(" -> ");
            signature.push_str(ret);
        }
        if !self.bounds.is_empty() {
            signature.push_str(" where ");
            signature.push_str(&self.bounds.join(", "));
        }
        signature.push_str(" {");
        signature
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.extend(CodeFragment::docs(doc));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        fragments.push(CodeFragment::braced(
            self.signature(),
            self.body.iter().map(CodeFragment::line).collect(),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = Fn::new("greet").build();
        assert_eq!(f, "pub fn greet() {\n}\n");
    }

    #[test]
    fn test_fn_with_params() {
        let f = Fn::new("add")
            .param(Param::new("a", "i64"))
            .param(Param::new("b", "i64"))
            .returns("i64")
            .body_line("a + b")
            .build();
        assert!(f.contains("pub fn add(a: i64, b: i64) -> i64 {"));
        assert!(f.contains("    a + b\n"));
    }

    #[test]
    fn test_method_with_generics_and_bounds() {
        let f = Fn::new("serialize")
            .private()
            .generic("S")
            .param(Param::self_ref())
            .param(Param::new("serializer", "S"))
            .returns("Result<S::Ok, S::Error>")
            .bound("S: Serializer")
            .build();
        assert!(f.starts_with(
            "fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {"
        ));
    }

    #[test]
    fn test_fn_with_doc_and_attr() {
        let f = Fn::new("KindFromString")
            .doc("Parses a Kind.\nUnknown strings map to zero.")
            .attr("allow(non_snake_case)")
            .build();
        assert!(f.starts_with(
            "/// Parses a Kind.\n/// Unknown strings map to zero.\n#[allow(non_snake_case)]\n"
        ));
    }

    #[test]
    fn test_multiline_body() {
        let f = Fn::new("run").private().body("let x = 1;\nx + 1").build();
        assert_eq!(f, "fn run() {\n    let x = 1;\n    x + 1\n}\n");
    }
}
