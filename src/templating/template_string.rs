//! Append-only text builder with repeated-block expansion.

use std::collections::HashSet;
use std::fmt;

use tracing::trace;

use super::substitute::{referenced_names, substitute};
use super::value::{Placeholders, TemplateValue};
use crate::core::BasetoolsError;

/// Opening marker of a repeated block.
pub const BLOCK_BEGIN: &str = "${BEGIN}";
/// Closing marker of a repeated block.
pub const BLOCK_END: &str = "${END}";

/// Accumulates generated text, expanding `${BEGIN}`...`${END}` blocks along the way.
///
/// Each [`append_with`](Self::append_with) call expands the repeated blocks of its
/// fragment against the list values it references, then substitutes the remaining
/// scalar placeholders. Placeholders that do not resolve are kept as literal text.
///
/// ```rust
/// use basetools::templating::{Placeholders, TemplateString};
///
/// let mut text = TemplateString::new();
/// text.append("// generated\n");
/// text.append_with(
///     "${BEGIN}${NAME}-${TAG};${END}",
///     &Placeholders::new().with("NAME", vec!["A", "B"]).with("TAG", "X"),
/// )?;
///
/// assert_eq!(text.to_string(), "// generated\nA-X;B-X;");
/// # Ok::<(), basetools::core::BasetoolsError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateString {
    text: String,
}

impl TemplateString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `fragment` verbatim, without any substitution.
    pub fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    /// Appends `fragment` after expanding its repeated blocks and placeholders.
    ///
    /// # Errors
    ///
    /// - [`BasetoolsError::InconsistentRepeatCount`] when list values referenced in
    ///   the same block differ in length. Nothing is appended in that case.
    /// - [`BasetoolsError::UnterminatedBlock`] for a `${BEGIN}` with no `${END}`.
    pub fn append_with(
        &mut self,
        fragment: &str,
        placeholders: &Placeholders,
    ) -> Result<(), BasetoolsError> {
        let expanded = expand_blocks(fragment, placeholders)?;
        let rendered = substitute(&expanded, |name| placeholders.scalar(name));
        self.text.push_str(&rendered);
        Ok(())
    }

    /// The accumulated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for TemplateString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<TemplateString> for String {
    fn from(value: TemplateString) -> Self {
        value.text
    }
}

/// Replaces every block of `fragment` with its repetitions.
///
/// Scanning resumes after each expansion, so values substituted into a block are
/// never themselves scanned for markers.
fn expand_blocks(fragment: &str, placeholders: &Placeholders) -> Result<String, BasetoolsError> {
    let mut output = String::with_capacity(fragment.len());
    let mut rest = fragment;
    let mut consumed = 0;

    while let Some(start) = rest.find(BLOCK_BEGIN) {
        let body = start + BLOCK_BEGIN.len();
        let Some(end) = rest[body..].find(BLOCK_END).map(|i| body + i + BLOCK_END.len()) else {
            return Err(BasetoolsError::UnterminatedBlock {
                offset: consumed + start,
            });
        };

        output.push_str(&rest[..start]);
        expand_block(&rest[start..end], placeholders, &mut output)?;

        consumed += end;
        rest = &rest[end..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Number of repetitions for `block`: the shared length of the sequences it references.
///
/// A block referencing no sequence is emitted once.
fn repeat_count(
    referenced: &HashSet<&str>,
    placeholders: &Placeholders,
) -> Result<usize, BasetoolsError> {
    let mut count = None;

    for (name, value) in placeholders.iter() {
        let TemplateValue::Sequence(values) = value else {
            continue;
        };
        if !referenced.contains(name) {
            continue;
        }
        match count {
            None => count = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(BasetoolsError::InconsistentRepeatCount {
                    key: name.to_string(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(count.unwrap_or(1))
}

fn expand_block(
    block: &str,
    placeholders: &Placeholders,
    output: &mut String,
) -> Result<(), BasetoolsError> {
    let referenced = referenced_names(block);
    let count = repeat_count(&referenced, placeholders)?;
    trace!(count, referenced = referenced.len(), "expanding repeated block");

    for index in 0..count {
        let iteration = substitute(block, |name| match name {
            "BEGIN" | "END" => Some(""),
            _ => placeholders.get(name).and_then(|value| value.at(index)),
        });
        output.push_str(&iteration);
    }

    Ok(())
}
