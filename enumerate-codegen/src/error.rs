use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for code generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("package name is required")]
    #[diagnostic(
        code(enumerate::package_required),
        help("run inside a Cargo package or pass --package <name>")
    )]
    PackageRequired,

    #[error("type name is required")]
    #[diagnostic(
        code(enumerate::type_required),
        help("pass the enum type name, e.g. --type UserType")
    )]
    TypeRequired,

    #[error("description must start with '{ty} is'")]
    #[diagnostic(
        code(enumerate::description_invalid),
        help("describe the type in a sentence, e.g. '{ty} is the kind of account'")
    )]
    DescriptionInvalid { ty: String },

    #[error("{field} contains a control character")]
    #[diagnostic(
        code(enumerate::control_character),
        help("the {field} is copied into doc comments; only a description may contain line breaks ('\\n')")
    )]
    ControlCharacter { field: String },

    #[error("invalid {axis} encoding '{token}'")]
    #[diagnostic(
        code(enumerate::invalid_encoding),
        help("valid encodings are: string, int")
    )]
    InvalidEncodingToken { axis: String, token: String },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(enumerate::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        name: String,
        context: String,
        reason: String,
    },

    #[error("{context} '{name}' is a Rust reserved keyword")]
    #[diagnostic(
        code(enumerate::reserved_keyword),
        help("rename the {context} so that it does not generate '{name}'")
    )]
    ReservedKeyword { name: String, context: String },

    #[error("duplicate value '{name}'")]
    #[diagnostic(
        code(enumerate::duplicate_value),
        help("'{first}' and '{second}' both generate the constant '{name}'")
    )]
    DuplicateValue {
        name: String,
        first: String,
        second: String,
    },

    #[error("duplicate string \"{string}\"")]
    #[diagnostic(
        code(enumerate::duplicate_string),
        help("'{first}' and '{second}' both map to \"{string}\"")
    )]
    DuplicateString {
        string: String,
        first: String,
        second: String,
    },

    #[error("value '{name}' collides with the generated {item}")]
    #[diagnostic(
        code(enumerate::name_collision),
        help("rename the value or set a prefix")
    )]
    NameCollision { name: String, item: String },

    #[error("'{first}' and '{second}' are both written to '{}'", path.display())]
    #[diagnostic(
        code(enumerate::duplicate_output),
        help("give one of them a distinct `out` path")
    )]
    DuplicateOutput {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("failed to render {ty}: {message}")]
    #[diagnostic(code(enumerate::render))]
    Render { ty: String, message: String },

    #[error("generated source is not valid Rust")]
    #[diagnostic(
        code(enumerate::format),
        help("this is a bug in enumerate, please report it with the options that produced it")
    )]
    Format {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: syn::Error,
    },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write generated source")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(enumerate::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an invalid identifier error
    pub fn invalid_identifier(
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidIdentifier {
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a reserved keyword error
    pub fn reserved_keyword(name: impl Into<String>, context: impl Into<String>) -> Box<Self> {
        Box::new(Error::ReservedKeyword {
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create a render error for the given type
    pub fn render(ty: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Render {
            ty: ty.into(),
            message: message.into(),
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Whether the error stems from the user's input rather than a defect in
    /// the generator.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            Error::Render { .. } | Error::Format { .. } | Error::Write { .. }
        )
    }
}
