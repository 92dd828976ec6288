//! Fragment-based intermediate representation for generated code.

/// A piece of generated code.
///
/// AST nodes lower themselves into fragments, and [`CodeBuilder`] turns
/// fragments into indented text.
///
/// [`CodeBuilder`]: super::CodeBuilder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// An outer Rust doc comment (`///`).
    Doc(String),
    /// An inner Rust doc comment (`//!`).
    InnerDoc(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }

    /// Create doc comment fragments, one per line of `text`.
    pub fn docs(text: &str) -> Vec<Self> {
        text.lines().map(|line| Self::Doc(line.to_string())).collect()
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
