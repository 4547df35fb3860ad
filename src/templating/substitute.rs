//! `$name` / `${name}` placeholder substitution.
//!
//! Substitution is permissive: a placeholder whose name does not resolve is copied to
//! the output unchanged, as is any `$` that does not start a placeholder. `$$` is the
//! only escape and produces a single `$`.

use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\})",
    )
    .expect("placeholder pattern is a valid regex")
});

fn placeholder_name<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.name("named").or_else(|| caps.name("braced")).map(|m| m.as_str())
}

/// Replaces every placeholder in `template` that `resolve` knows.
///
/// ```rust
/// use basetools::templating::substitute;
///
/// let out = substitute("${GREETING}, $WHO! $$5 ${UNKNOWN}", |name| match name {
///     "GREETING" => Some("Hello"),
///     "WHO" => Some("world"),
///     _ => None,
/// });
/// assert_eq!(out, "Hello, world! $5 ${UNKNOWN}");
/// ```
pub fn substitute<'v, F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<&'v str>,
{
    let mut anchor = 0;
    let mut result = String::with_capacity(template.len());

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        result.push_str(&template[anchor..whole.start()]);
        anchor = whole.end();

        if caps.name("escaped").is_some() {
            result.push('$');
            continue;
        }

        match placeholder_name(&caps).and_then(&mut resolve) {
            Some(value) => result.push_str(value),
            None => result.push_str(whole.as_str()),
        }
    }

    result.push_str(&template[anchor..]);
    result
}

/// Whether `name` can be referenced as a placeholder (`[_A-Za-z][_A-Za-z0-9]*`).
#[must_use]
pub fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Names of all placeholders appearing in `template`, in either syntax.
///
/// `$$` escapes are skipped, so `$$NAME` does not count as a reference to `NAME`.
#[must_use]
pub fn referenced_names(template: &str) -> HashSet<&str> {
    PLACEHOLDER.captures_iter(template).filter_map(|caps| placeholder_name(&caps)).collect()
}
