use miette::{NamedSource, SourceSpan};
use proc_macro2::LineColumn;

use crate::{Error, Result};

/// Parse the source as a Rust file and print it in canonical form.
///
/// This is also the verifier: anything that does not parse is rejected with
/// [`Error::Format`], pointing at the offending location in `raw`.
pub fn format_source(raw: &str) -> Result<String> {
    match syn::parse_file(raw) {
        Ok(file) => Ok(prettyplease::unparse(&file)),
        Err(source) => {
            let span = byte_offset(raw, source.span().start()).map(|offset| {
                let len = raw[offset..].chars().next().map_or(0, char::len_utf8);
                SourceSpan::from((offset, len))
            });
            Err(Box::new(Error::Format {
                src: NamedSource::new("generated.rs", raw.to_string()),
                span,
                source,
            }))
        }
    }
}

/// Convert a 1-based line and char-based column into a byte offset.
fn byte_offset(src: &str, at: LineColumn) -> Option<usize> {
    if at.line == 0 {
        return None;
    }

    let line_start = if at.line == 1 {
        0
    } else {
        src.match_indices('\n').nth(at.line - 2)?.0 + 1
    };
    let line = src[line_start..].split('\n').next().unwrap_or_default();
    let column = line
        .char_indices()
        .nth(at.column)
        .map_or(line.len(), |(i, _)| i);

    Some(line_start + column)
}
