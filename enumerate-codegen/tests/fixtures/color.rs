//! Code generated by enumerate for the `palette` crate. DO NOT EDIT.

/// Color is a primary color.
/// Mixing them is left to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub i64);

const _: Color = Color(0);

#[allow(non_upper_case_globals)]
pub const ColorRed: Color = Color(1);

#[allow(non_upper_case_globals)]
pub const ColorGreen: Color = Color(2);

#[allow(non_upper_case_globals)]
pub const ColorBlue: Color = Color(3);

#[allow(non_upper_case_globals)]
static colorStrings: &[(Color, &str)] = &[
    (ColorRed, "red"),
    (ColorGreen, "green"),
    (ColorBlue, "blue"),
];

impl Color {
    /// Returns the string form of the Color, or "" for an unknown value.
    pub fn as_str(&self) -> &'static str {
        colorStrings.iter().find(|(v, _)| v == self).map(|(_, s)| *s).unwrap_or("")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the Color whose string form is `s`, or the zero value if none matches.
#[allow(non_snake_case)]
pub fn ColorFromString(s: &str) -> Color {
    colorStrings.iter().find(|(_, v)| *v == s).map(|(k, _)| *k).unwrap_or_default()
}

impl std::str::FromStr for Color {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ColorFromString(s))
    }
}
