//! Builders for module-level items: tuple structs, constants and statics.

use crate::builder::{CodeFragment, Renderable};

fn outer_fragments(doc: Option<&str>, attrs: &[String]) -> Vec<CodeFragment> {
    let mut fragments = doc.map(CodeFragment::docs).unwrap_or_default();
    fragments.extend(attrs.iter().map(|attr| CodeFragment::Line(format!("#[{}]", attr))));
    fragments
}

/// Builder for tuple structs such as `pub struct Kind(pub i64);`.
#[derive(Debug, Clone)]
pub struct TupleStruct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    fields: Vec<String>,
}

impl TupleStruct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derives(mut self, derives: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.derives.extend(derives.into_iter().map(Into::into));
        self
    }

    /// Add a positional field, including its visibility (e.g. `pub i64`).
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }
}

impl Renderable for TupleStruct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut attrs = Vec::new();
        if !self.derives.is_empty() {
            attrs.push(format!("derive({})", self.derives.join(", ")));
        }

        let mut fragments = outer_fragments(self.doc.as_deref(), &attrs);
        fragments.push(CodeFragment::Line(format!(
            "pub struct {}({});",
            self.name,
            self.fields.join(", ")
        )));
        fragments
    }
}

/// Builder for constants. A constant without a name renders as `const _`.
#[derive(Debug, Clone)]
pub struct Const {
    name: Option<String>,
    ty: String,
    value: String,
    attrs: Vec<String>,
    is_public: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
            value: value.into(),
            attrs: Vec::new(),
            is_public: true,
        }
    }

    /// An unnamed, private `const _` item.
    pub fn unnamed(ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
            value: value.into(),
            attrs: Vec::new(),
            is_public: false,
        }
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let name = self.name.as_deref().unwrap_or("_");
        let mut fragments = outer_fragments(None, &self.attrs);
        fragments.push(CodeFragment::Line(format!(
            "{}const {}: {} = {};",
            vis, name, self.ty, self.value
        )));
        fragments
    }
}

/// Builder for a `static` initialized with a slice literal.
#[derive(Debug, Clone)]
pub struct Static {
    name: String,
    ty: String,
    attrs: Vec<String>,
    elements: Vec<String>,
}

impl Static {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            attrs: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    /// Append an element of the slice literal.
    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.elements.push(element.into());
        self
    }
}

impl Renderable for Static {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = outer_fragments(None, &self.attrs);
        fragments.push(CodeFragment::Block {
            header: format!("static {}: {} = &[", self.name, self.ty),
            body: self
                .elements
                .iter()
                .map(|e| CodeFragment::Line(format!("{},", e)))
                .collect(),
            close: Some("];".to_string()),
        });
        fragments
    }
}
