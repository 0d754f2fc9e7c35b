//! Filesystem-safe name tokens
//!
//! Display names become the `<sanitized>` prefix of every mirror entry. The same
//! mapping is the only alphabet the entry-name parser accepts, so both sides must
//! go through [`sanitize`].

/// Characters allowed in a sanitized token besides ASCII lowercase letters and digits
const EXTRA_ALLOWED: [char; 2] = ['-', '_'];

/// Whether `c` may appear verbatim in a sanitized token.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase() || EXTRA_ALLOWED.contains(&c)
}

/// Lower-case `name`, then replace every character outside `[0-9a-z-_]` with `_`.
///
/// Lower-casing is Unicode-aware, so a character that expands when lower-cased
/// (e.g. `İ`) contributes one `_` per resulting non-ASCII character.
pub fn sanitize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) { c } else { '_' })
        .collect()
}

/// Whether `token` could have been produced by [`sanitize`].
pub fn is_sanitized(token: &str) -> bool {
    token.chars().all(is_token_char)
}
