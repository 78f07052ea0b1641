//! Pure transforms over compiled regex source.
//!
//! [`glob::compile`](super::glob::compile) emits an anchored source that
//! matches a whole string in the separator style it was built from. These
//! two transforms turn it into the form a session records:
//!
//! - [`strip_anchors`] removes `^`/`$` so the pattern matches the path
//!   anywhere inside larger text
//! - [`generalize_separators`] rewrites every `\/` separator token into
//!   `[/\\]` so one pattern matches both separator styles
//!
//! Both operate on source text only; no regex is compiled here.

/// Remove the leading `^` and trailing `$` anchor from a regex source.
///
/// The trailing `$` is only an anchor when it is not escaped; escape
/// parity decides (`\$` is a literal dollar, `\\$` is an escaped
/// backslash followed by a real anchor).
pub fn strip_anchors(source: &str) -> &str {
    let source = source.strip_prefix('^').unwrap_or(source);
    match source.strip_suffix('$') {
        Some(stripped) if !ends_mid_escape(stripped) => stripped,
        _ => source,
    }
}

/// True when the source ends inside an escape, i.e. with an odd run of
/// trailing backslashes.
fn ends_mid_escape(source: &str) -> bool {
    source.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Rewrite every escaped-`/` separator token into a class matching both
/// separator styles.
///
/// Walks escape pairs atomically so an escaped backslash followed by a
/// separator token (`\\` then `\/`) is never misread across the pair
/// boundary. The bare `/` inside generated classes like `[^/]` is left
/// untouched.
pub fn generalize_separators(source: &str) -> String {
    let mut generalized = String::with_capacity(source.len());
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            generalized.push(c);
            continue;
        }
        match chars.next() {
            Some('/') => generalized.push_str(r"[/\\]"),
            Some(escaped) => {
                generalized.push('\\');
                generalized.push(escaped);
            }
            None => generalized.push('\\'),
        }
    }
    generalized
}
