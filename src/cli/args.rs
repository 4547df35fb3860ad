//! Variable-length option arguments.
//!
//! Build tools accept options followed by any number of values, for example
//! `-a IA32 X64 AARCH64`. The values run up to the next token that looks like an
//! option. The same rule drives the `--scalar`/`--list` variable definitions that
//! `basetools render` takes after `--`:
//!
//! ```text
//! basetools render AutoGen.h.template -- --scalar MODULE Shell --list GUID gA gB gC
//! ```

use crate::core::BasetoolsError;
use crate::templating::{Placeholders, TemplateValue, is_placeholder_name};

/// Whether `arg` starts a new option: `--name` or `-x...`.
///
/// A lone `-` and a lone `--` are values, as is anything not starting with `-`.
/// Note that negative numbers such as `-1` count as options.
#[must_use]
pub fn is_option_like(arg: &str) -> bool {
    if let Some(long) = arg.strip_prefix("--") {
        return !long.is_empty();
    }
    arg.strip_prefix('-').is_some_and(|short| !short.is_empty())
}

/// Splits `args` into the leading values and the rest, which starts at the first
/// option-like token.
///
/// ```rust
/// use basetools::cli::args::take_variable_arguments;
///
/// let args = ["IA32", "X64", "-b", "DEBUG"];
/// let (values, rest) = take_variable_arguments(&args);
/// assert_eq!(values, ["IA32", "X64"]);
/// assert_eq!(rest, ["-b", "DEBUG"]);
/// ```
pub fn take_variable_arguments<S: AsRef<str>>(args: &[S]) -> (&[S], &[S]) {
    let split = args.iter().position(|arg| is_option_like(arg.as_ref())).unwrap_or(args.len());
    args.split_at(split)
}

enum DefinitionKind {
    Scalar,
    List,
}

/// Parses `--scalar NAME VALUE` / `-s` and `--list NAME VALUE...` / `-l` definitions.
///
/// Later definitions of the same name replace earlier ones. A `--list` with no
/// values binds an empty sequence.
pub fn parse_definitions<S: AsRef<str>>(args: &[S]) -> Result<Placeholders, BasetoolsError> {
    let mut placeholders = Placeholders::new();
    let mut rest = args;

    while let Some((flag, tail)) = rest.split_first() {
        let kind = match flag.as_ref() {
            "-s" | "--scalar" => DefinitionKind::Scalar,
            "-l" | "--list" => DefinitionKind::List,
            other => {
                return Err(BasetoolsError::InvalidDefinition {
                    reason: format!("expected --scalar or --list, found '{other}'"),
                });
            }
        };

        let (values, remaining) = take_variable_arguments(tail);
        let Some((name, values)) = values.split_first() else {
            return Err(BasetoolsError::InvalidDefinition {
                reason: format!("{} requires a variable name", flag.as_ref()),
            });
        };
        let name = name.as_ref();
        if !is_placeholder_name(name) {
            return Err(BasetoolsError::InvalidDefinition {
                reason: format!("'{name}' is not a valid placeholder name"),
            });
        }

        let value = match kind {
            DefinitionKind::Scalar => match values {
                [value] => TemplateValue::Scalar(value.as_ref().to_string()),
                _ => {
                    return Err(BasetoolsError::InvalidDefinition {
                        reason: format!(
                            "--scalar {name} takes exactly one value, found {}",
                            values.len()
                        ),
                    });
                }
            },
            DefinitionKind::List => {
                TemplateValue::Sequence(values.iter().map(|v| v.as_ref().to_string()).collect())
            }
        };

        placeholders.insert(name, value);
        rest = remaining;
    }

    Ok(placeholders)
}
