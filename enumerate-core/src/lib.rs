//! Core utilities for the enumerate code generator.
//!
//! This crate holds the pieces that do not depend on the shape of the
//! generated code: identifier case conversion, writing generated files
//! to disk, and discovering the Cargo package a file belongs to.

mod file;
mod package;
mod utils;

// File operations
pub use file::File;
// Package discovery
pub use package::find_package_name;
// String utilities
pub use utils::{to_camel_case, to_pascal_case, to_snake_case};
