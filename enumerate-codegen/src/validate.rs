//! Descriptor validation.
//!
//! Checks run in a fixed order and stop at the first failure, so a
//! descriptor with several problems always reports the same one.

use indexmap::IndexMap;

use crate::{Enum, Error, Result, adapters::adapters};

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub(crate) const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
    // Weak keywords
    "union",
];

/// Types the generated code refers to by their short name. An enumeration
/// with one of these names would shadow them inside the generated module.
const SHADOWED_TYPES: &[&str] = &[
    "bool", "char", "str", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16",
    "u32", "u64", "u128", "usize", "String",
];

/// Prelude items the generated code calls by their short name. A value
/// constant, or the tuple struct itself, would shadow them.
const PRELUDE_NAMES: &[&str] = &["Ok", "Err", "Some", "None"];

/// Crate roots and local bindings of the code every enumeration gets. A
/// tuple struct cannot be shadowed by a parameter or closure binding.
const GENERATED_NAMES: &[&str] = &["std", "f", "k", "s", "v"];

/// Check if a name is a Rust reserved keyword
pub(crate) fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Validate that a name is spelled like a Rust identifier.
/// Returns None if valid, Some(reason) if invalid
///
/// Keywords are not rejected here; callers decide which spelling of the name
/// must not be a keyword.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if name.chars().all(|c| c == '_') {
        return Some("name must contain a letter or number");
    }

    None
}

/// Check every descriptor invariant, in order:
///
/// 1. the package is set, on one line;
/// 2. the type is set;
/// 3. the description, if any, starts with `"<Type> is"` and has no control
///    characters besides line breaks;
/// 4. the type is an identifier the generated code does not already use;
/// 5. the prefix, if any, uses identifier characters;
/// 6. every value is an identifier that does not generate a keyword;
/// 7. generated value names are unique;
/// 8. canonical strings are unique;
/// 9. no value name collides with another generated item.
pub fn validate(descriptor: &Enum) -> Result<()> {
    if descriptor.package.is_empty() {
        return Err(Box::new(Error::PackageRequired));
    }
    if descriptor.package.contains(char::is_control) {
        return Err(Box::new(Error::ControlCharacter {
            field: "package".to_string(),
        }));
    }

    let ty = descriptor.type_name.as_str();
    if ty.is_empty() {
        return Err(Box::new(Error::TypeRequired));
    }

    let lead = format!("{ty} is");
    if !descriptor.description.is_empty() && !descriptor.description.starts_with(&lead) {
        return Err(Box::new(Error::DescriptionInvalid { ty: ty.to_string() }));
    }
    if descriptor.description.contains(|c: char| c.is_control() && c != '\n') {
        return Err(Box::new(Error::ControlCharacter {
            field: "description".to_string(),
        }));
    }

    validate_type_name(descriptor)?;

    if !descriptor.prefix.is_empty() {
        if let Some(reason) = validate_identifier(&descriptor.prefix) {
            return Err(Error::invalid_identifier(&descriptor.prefix, "prefix", reason));
        }
    }

    let value_names = descriptor.value_names();
    for (value, name) in descriptor.values.iter().zip(&value_names) {
        if let Some(reason) = validate_identifier(value) {
            return Err(Error::invalid_identifier(value, "value", reason));
        }
        if is_rust_keyword(name) {
            return Err(Error::reserved_keyword(name, "value"));
        }
    }

    check_unique(descriptor.values.iter().zip(&value_names), |name, first, second| {
        Error::DuplicateValue { name, first, second }
    })?;

    let strings: Vec<_> = descriptor.mapped_strings().into_iter().map(|(_, s)| s).collect();
    check_unique(descriptor.values.iter().zip(&strings), |string, first, second| {
        Error::DuplicateString { string, first, second }
    })?;

    check_collisions(descriptor, &value_names)
}

fn validate_type_name(descriptor: &Enum) -> Result<()> {
    let ty = descriptor.type_name.as_str();
    if is_rust_keyword(ty) {
        return Err(Error::reserved_keyword(ty, "type"));
    }
    if let Some(reason) = validate_identifier(ty) {
        return Err(Error::invalid_identifier(ty, "type", reason));
    }
    if SHADOWED_TYPES.contains(&ty) {
        return Err(Error::invalid_identifier(
            ty,
            "type",
            "name shadows a type used by the generated code",
        ));
    }
    if PRELUDE_NAMES.contains(&ty) || GENERATED_NAMES.contains(&ty) {
        return Err(Error::invalid_identifier(
            ty,
            "type",
            "name is used by the generated code",
        ));
    }

    let reserved_by_adapter = adapters().into_iter().any(|adapter| {
        !adapter.encoding(descriptor).is_none() && adapter.reserved_names().contains(&ty)
    });
    if reserved_by_adapter {
        return Err(Error::invalid_identifier(
            ty,
            "type",
            "name is used by the generated encoding impls",
        ));
    }
    Ok(())
}

/// Fail on the first derived key produced by two raw values.
fn check_unique<'a>(
    pairs: impl Iterator<Item = (&'a String, &'a String)>,
    duplicate: impl FnOnce(String, String, String) -> Error,
) -> Result<()> {
    let mut seen: IndexMap<&str, &str> = IndexMap::new();
    for (raw, key) in pairs {
        if let Some(first) = seen.insert(key.as_str(), raw.as_str()) {
            return Err(Box::new(duplicate(
                key.clone(),
                first.to_string(),
                raw.clone(),
            )));
        }
    }
    Ok(())
}

fn check_collisions(descriptor: &Enum, value_names: &[String]) -> Result<()> {
    let reserved = [
        (descriptor.type_name.clone(), "type".to_string()),
        (descriptor.string_map_name(), "string table".to_string()),
        (descriptor.constructor_name(), "constructor".to_string()),
    ];

    for name in value_names {
        if let Some((_, item)) = reserved.iter().find(|(reserved, _)| reserved == name) {
            return Err(Box::new(Error::NameCollision {
                name: name.clone(),
                item: format!("{item} '{name}'"),
            }));
        }
        if PRELUDE_NAMES.contains(&name.as_str()) {
            return Err(Box::new(Error::NameCollision {
                name: name.clone(),
                item: format!("code's use of the prelude '{name}'"),
            }));
        }
    }
    Ok(())
}
