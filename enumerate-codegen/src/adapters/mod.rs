//! Encoding adapters.
//!
//! Each boundary a generated enumeration can cross (JSON, SQL) is described
//! by an [`EncodingAdapter`]. The renderer asks every adapter for its imports
//! and impl blocks; adapters whose encoding is `none` contribute nothing.

mod rusqlite;
mod serde;

pub use self::{rusqlite::RusqliteAdapter, serde::SerdeAdapter};
use crate::{Encoding, Enum, ast::Impl};

/// Trait for encoding adapters.
///
/// Implement this trait to support another serialization boundary.
pub trait EncodingAdapter {
    /// The descriptor's encoding on this adapter's axis.
    fn encoding(&self, descriptor: &Enum) -> Encoding;

    /// `use` trees required by the generated impls.
    fn imports(&self) -> &'static [&'static str];

    /// Names the generated impls refer to unqualified: imported items, crate
    /// roots, generic parameters and local bindings. The enumeration type
    /// cannot take any of them while the adapter is enabled.
    fn reserved_names(&self) -> &'static [&'static str];

    /// The trait impls for the descriptor, empty when the encoding is `none`.
    fn impls(&self, descriptor: &Enum) -> Vec<Impl>;
}

/// All adapters in import order.
pub fn adapters() -> [&'static dyn EncodingAdapter; 2] {
    [&SerdeAdapter, &RusqliteAdapter]
}
