//! Rust impl block builder.

use super::Fn;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    trait_name: Option<String>,
    generics: Vec<String>,
    assoc_types: Vec<(String, String)>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            trait_name: None,
            generics: Vec::new(),
            assoc_types: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    /// Add a generic parameter to the impl header, e.g. `'de`.
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    /// Add an associated type, e.g. `type Err = Infallible;`.
    pub fn assoc_type(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.assoc_types.push((name.into(), ty.into()));
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };

        match &self.trait_name {
            Some(trait_name) => format!("impl{} {} for {} {{", generics, trait_name, self.type_name),
            None => format!("impl{} {} {{", generics, self.type_name),
        }
    }

    fn body(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .assoc_types
            .iter()
            .map(|(name, ty)| CodeFragment::Line(format!("type {} = {};", name, ty)))
            .collect();

        for method in &self.methods {
            if !fragments.is_empty() {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(method.to_fragments());
        }
        fragments
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(self.header(), self.body())]
    }
}
