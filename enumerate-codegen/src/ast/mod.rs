//! Rust AST builders for the items of a generated enumeration file.
//!
//! These provide a small, string-based API for constructing Rust syntax.
//! Every builder implements [`Renderable`](crate::builder::Renderable), so
//! it can be collected into a [`RustFile`] and emitted through a
//! [`CodeBuilder`](crate::builder::CodeBuilder).

mod file;
mod fns;
mod impls;
mod items;

pub use file::{RustFile, Use};
pub use fns::{Fn, Param};
pub use impls::Impl;
pub use items::{Const, Static, TupleStruct};
