//! Nesting guard run before a document reaches the parser.
//!
//! The parser and the conversion into [`Field`](super::Field) both recurse
//! once per `{`, `(` or `[`, so nesting is bounded up front with a flat scan
//! that never recurses itself.

use crate::error::DocumentError;

/// Deepest bracket nesting accepted in a document.
pub const MAX_DEPTH: usize = 32;

/// Check that no bracket nests deeper than `limit`.
///
/// Brackets inside strings and `#` comments are ignored. Returns whether the
/// document holds anything besides whitespace, commas, and comments.
pub fn check_nesting(source: &str, limit: usize) -> Result<bool, DocumentError> {
    let bytes = source.strip_prefix('\u{feff}').unwrap_or(source).as_bytes();
    let skipped = source.len() - bytes.len();

    let mut depth = 0usize;
    let mut significant = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' | b',' => i += 1,
            b'#' => {
                while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
                    i += 1;
                }
            }
            b'"' => {
                significant = true;
                i = skip_string(bytes, i);
            }
            b'{' | b'(' | b'[' => {
                significant = true;
                depth += 1;
                if depth > limit {
                    return Err(DocumentError::TooDeep {
                        offset: skipped + i,
                        limit,
                    });
                }
                i += 1;
            }
            b'}' | b')' | b']' => {
                significant = true;
                depth = depth.saturating_sub(1);
                i += 1;
            }
            _ => {
                significant = true;
                i += 1;
            }
        }
    }

    Ok(significant)
}

/// Index just past the string starting at `start`. An unterminated string
/// runs to the end of its line; the parser reports it.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    if bytes[start..].starts_with(b"\"\"\"") {
        let mut i = start + 3;
        while i < bytes.len() {
            if bytes[i..].starts_with(b"\\\"\"\"") {
                i += 4;
            } else if bytes[i..].starts_with(b"\"\"\"") {
                return i + 3;
            } else {
                i += 1;
            }
        }
        return i;
    }

    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            b'\n' | b'\r' => return i,
            _ => i += 1,
        }
    }
    i
}
