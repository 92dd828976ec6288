//! RustFile abstraction for structured Rust file generation.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A Rust use statement, e.g. `use serde::{Serialize, Serializer};`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Use {
    tree: String,
}

impl Use {
    /// Create a use statement from a full use tree.
    pub fn new(tree: impl Into<String>) -> Self {
        Self { tree: tree.into() }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!("use {};", self.tree))]
    }
}

/// A structured representation of a Rust file.
///
/// Organizes code into a header, imports, and body sections, with blank
/// lines between body items.
///
/// # Example
///
/// ```
/// use enumerate_codegen::ast::{RustFile, TupleStruct, Use};
///
/// let code = RustFile::new()
///     .header("Generated file.")
///     .use_stmt(Use::new("std::fmt"))
///     .add(TupleStruct::new("Kind").field("pub i64"))
///     .render();
///
/// assert_eq!(code, "//! Generated file.\n\nuse std::fmt;\n\npub struct Kind(pub i64);\n");
/// ```
#[derive(Default)]
pub struct RustFile {
    header: Vec<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    /// Create a new empty RustFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an inner doc comment line (`//!`) at the top of the file.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add a use statement.
    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add multiple use statements.
    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body.extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    /// Render the file with 4-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        let mut sections = 0;

        if !self.header.is_empty() {
            for line in &self.header {
                builder.apply_fragment(&CodeFragment::InnerDoc(line.clone()));
            }
            sections += 1;
        }

        if !self.uses.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for use_stmt in &self.uses {
                builder.emit(use_stmt);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
            sections += 1;
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.uses.is_empty() && self.body.is_empty()
    }
}
