//! Rust enumeration code generation.
//!
//! An [`Enum`] descriptor goes through three stages, each of which can fail
//! with an [`Error`]:
//!
//! 1. [`validate`] checks the descriptor invariants;
//! 2. [`render`] expands it into raw source using the [`ast`] builders and
//!    the encoding [`adapters`];
//! 3. [`format_source`] parses the result with `syn` and prints it with
//!    `prettyplease`.
//!
//! [`Generator`] chains the stages and pairs the output with its path.
//!
//! ```
//! use enumerate_codegen::{Encoding, Enum, Generator};
//!
//! let descriptor = Enum::new("models", "UserType")
//!     .prefix("UserType")
//!     .values(["Admin", "CustomerSupport"])
//!     .json(Encoding::String);
//!
//! let file = Generator::new(&descriptor).generate().unwrap();
//! assert_eq!(file.path().to_str(), Some("user_type.rs"));
//! assert!(file.content().contains("pub struct UserType(pub i64);"));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod adapters;
pub mod ast;
pub mod builder;

mod descriptor;
mod encoding;
mod error;
mod format;
mod generator;
mod manifest;
mod render;
mod validate;

pub use descriptor::Enum;
pub use encoding::Encoding;
pub use error::{Error, Result};
pub use format::format_source;
pub use generator::{Generator, generate};
pub use manifest::{MANIFEST_FILE_NAME, Manifest};
pub use render::render;
pub use validate::validate;
