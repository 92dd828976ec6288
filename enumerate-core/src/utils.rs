//! Identifier case conversion.
//!
//! These functions only look at ASCII letter classes, so the output never
//! depends on the locale. Word boundaries are detected the same way by all
//! three, which keeps `to_pascal_case(to_snake_case(x))` faithful to the
//! words of `x`.

/// Convert a string to snake_case (e.g., "HTTPServer" -> "http_server").
///
/// An underscore is inserted before an uppercase letter when it follows a
/// lowercase letter or digit, or when it starts a lowercase run and the
/// previous character is not already an underscore.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + chars.len() / 2);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let after_word = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let starts_word = prev != '_'
                && chars
                    .get(i + 1)
                    .is_some_and(|next| next.is_ascii_lowercase());
            if after_word || starts_word {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Convert a string to camelCase (e.g., "user_type" -> "userType").
pub fn to_camel_case(s: &str) -> String {
    with_first_char(&join_words(s), false)
}

/// Convert a string to PascalCase (e.g., "user_type" -> "UserType").
pub fn to_pascal_case(s: &str) -> String {
    with_first_char(&join_words(s), true)
}

/// Drop every underscore that precedes a letter and uppercase that letter.
fn join_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(next) = chars.next_if(|n| n.is_ascii_alphabetic()) {
                result.push(next.to_ascii_uppercase());
                continue;
            }
        }
        result.push(c);
    }

    result
}

fn with_first_char(s: &str, upper: bool) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) if upper => c.to_uppercase().chain(chars).collect(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
