//! Glob-to-regex-source compilation.
//!
//! Compiles a path (or glob) into an anchored regular-expression source
//! string. Literal separators are emitted as the escaped token `\/` so
//! they stay distinguishable from the bare `/` used inside generated
//! character classes; the transforms in [`transform`](super::transform)
//! rely on that.
//!
//! Both `/` and `\` count as separators regardless of host platform: the
//! text being corrected later may have been generated on either one.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::TrackError;

/// Characters with special meaning in a regular expression.
const fn is_regex_meta(c: char) -> bool {
    matches!(
        c,
        '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '\\'
    )
}

/// Compile a glob into anchored regex source.
///
/// Translation rules:
/// - `/` and `\` become the escaped separator token `\/`
/// - `**` matches across separators, `*` and `?` within one component
/// - `[...]` and `[!...]` become regex character classes
/// - everything else matches literally
///
/// # Errors
///
/// Returns [`TrackError::Glob`] for globs that cannot be parsed
/// (currently: an unterminated character class).
pub fn compile(glob: &str) -> Result<String, TrackError> {
    let mut source = String::with_capacity(glob.len() * 2 + 2);
    source.push('^');

    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '/' | '\\' => source.push_str(r"\/"),
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    source.push_str(".*");
                } else {
                    source.push_str("[^/]*");
                }
            }
            '?' => source.push_str("[^/]"),
            '[' => compile_class(&mut chars, &mut source).map_err(|reason| TrackError::Glob {
                glob: glob.to_string(),
                reason,
            })?,
            c if is_regex_meta(c) => {
                source.push('\\');
                source.push(c);
            }
            c => source.push(c),
        }
    }

    source.push('$');
    Ok(source)
}

/// Compile a `[...]` class body (opening bracket already consumed).
///
/// `!` or `^` right after the bracket negates; `]` as the first class
/// character is literal, per glob convention.
fn compile_class(chars: &mut Peekable<Chars<'_>>, source: &mut String) -> Result<(), &'static str> {
    source.push('[');
    if matches!(chars.peek(), Some('!' | '^')) {
        chars.next();
        source.push('^');
    }

    let mut first = true;
    while let Some(c) = chars.next() {
        match c {
            ']' if !first => {
                source.push(']');
                return Ok(());
            }
            '\\' | '^' | ']' | '[' => {
                source.push('\\');
                source.push(c);
            }
            c => source.push(c),
        }
        first = false;
    }
    Err("unterminated character class")
}
