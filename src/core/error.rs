//! Error handling for basetools
//!
//! This module provides the error types and user-facing error reporting shared by the
//! template expander, the GUID converters, the file helpers and the CLI. The error
//! system follows two rules:
//! 1. **Strongly-typed errors** for the failures callers may want to match on
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`BasetoolsError`] - Enumerated error types for every domain failure
//! - [`ErrorContext`] - Wrapper that adds a suggestion and details for display
//!
//! Library code returns [`BasetoolsError`] for domain failures (an inconsistent
//! repeat count in a template block, a malformed GUID) and `anyhow::Result` for
//! file-system orchestration. The binary funnels everything through
//! [`user_friendly_error`] before printing.
//!
//! # Examples
//!
//! ```rust,no_run
//! use basetools::core::{BasetoolsError, user_friendly_error};
//!
//! let error = BasetoolsError::InconsistentRepeatCount {
//!     key: "GUID_LIST".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // colored error with suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for basetools operations
///
/// # Error Categories
///
/// ## Template Expansion
/// - [`InconsistentRepeatCount`] - List values in one repeated block differ in length
/// - [`UnterminatedBlock`] - `${BEGIN}` without a matching `${END}`
///
/// ## GUID Conversion
/// - [`InvalidGuid`] - GUID text in neither registry nor structure format
///
/// ## Configuration and Input
/// - [`InvalidDefinition`] - Malformed command-line variable definition
/// - [`VariablesParseError`] - Variables file could not be parsed
///
/// ## File System
/// - [`FileSystemError`] - General file system operations
///
/// [`InconsistentRepeatCount`]: BasetoolsError::InconsistentRepeatCount
/// [`UnterminatedBlock`]: BasetoolsError::UnterminatedBlock
/// [`InvalidGuid`]: BasetoolsError::InvalidGuid
/// [`InvalidDefinition`]: BasetoolsError::InvalidDefinition
/// [`VariablesParseError`]: BasetoolsError::VariablesParseError
/// [`FileSystemError`]: BasetoolsError::FileSystemError
#[derive(Error, Debug, Clone)]
pub enum BasetoolsError {
    /// A list-valued placeholder referenced inside a repeated block has a
    /// different length from the other list values in the same block.
    ///
    /// The repeat count of a block is the shared length of all the list values
    /// it references, so a mismatch leaves it undefined.
    #[error("{key} has a different repeat count from the other values in the same block")]
    InconsistentRepeatCount {
        /// The placeholder whose length disagreed with the ones before it
        key: String,
    },

    /// A `${BEGIN}` marker with no `${END}` after it.
    #[error("Repeated block starting at offset {offset} has no matching ${{END}} marker")]
    UnterminatedBlock {
        /// Byte offset of the `${BEGIN}` marker in the appended fragment
        offset: usize,
    },

    /// GUID text that could not be converted.
    #[error("Invalid GUID value string {value}: {reason}")]
    InvalidGuid {
        /// The text as supplied
        value: String,
        /// What was wrong with it
        reason: String,
    },

    /// Malformed `--scalar`/`--list` definition on the command line.
    #[error("Invalid variable definition: {reason}")]
    InvalidDefinition {
        /// Why the definition was rejected
        reason: String,
    },

    /// Variables file syntax or shape error
    #[error("Invalid variables file {file}")]
    VariablesParseError {
        /// Path of the variables file
        file: String,
        /// Parser or validation message
        reason: String,
    },

    /// File system operation failed
    #[error("File system error: {operation}")]
    FileSystemError {
        /// The operation that failed (e.g. "write", "create directory")
        operation: String,
        /// The path or underlying cause involved
        path: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error wrapper carrying an optional suggestion and details for display.
///
/// ```rust,no_run
/// use basetools::core::{BasetoolsError, ErrorContext};
///
/// let context = ErrorContext::new(BasetoolsError::UnterminatedBlock { offset: 12 })
///     .with_suggestion("Close the block with ${END}")
///     .with_details("Repeated blocks cannot span multiple appended fragments");
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: BasetoolsError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context without suggestion or details.
    #[must_use]
    pub const fn new(error: BasetoolsError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Adds a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Adds additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Prints the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Converts any error into an [`ErrorContext`] with suggestions for the CLI.
///
/// Known [`BasetoolsError`] variants get tailored suggestions, a few common
/// [`std::io::Error`] kinds anywhere in the context chain are recognized, and everything else is reported as
/// [`BasetoolsError::Other`] with the full cause chain appended.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(basetools_error) = error.downcast_ref::<BasetoolsError>() {
        return create_error_context(basetools_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(BasetoolsError::FileSystemError {
                    operation: error.to_string(),
                    path: io_error.to_string(),
                })
                .with_details(io_error.to_string())
                .with_suggestion("Check file ownership and permissions of the output location");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(BasetoolsError::FileSystemError {
                    operation: error.to_string(),
                    path: io_error.to_string(),
                })
                .with_details(io_error.to_string())
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(BasetoolsError::Other {
        message,
    })
}

fn create_error_context(error: BasetoolsError) -> ErrorContext {
    match &error {
        BasetoolsError::InconsistentRepeatCount { key } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Make '{key}' the same length as every other list referenced between ${{BEGIN}} and ${{END}}"
            ))
            .with_details("A repeated block is emitted once per element, so all list values it uses must line up"),

        BasetoolsError::UnterminatedBlock { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Close the repeated block with ${END} in the same fragment")
            .with_details("Repeated blocks cannot span multiple appended fragments"),

        BasetoolsError::InvalidGuid { .. } => ErrorContext::new(error.clone())
            .with_suggestion(
                "Use registry format (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx) or structure format \
                 ({0x..., 0x..., 0x..., {0x.., 0x.., 0x.., 0x.., 0x.., 0x.., 0x.., 0x..}})",
            ),

        BasetoolsError::InvalidDefinition { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Use '--scalar NAME VALUE' or '--list NAME VALUE...' after '--'"),

        BasetoolsError::VariablesParseError { file, reason } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Check {file}: variables live in a [vars] table with string, number, boolean or array values"
            ))
            .with_details(reason.clone()),

        _ => ErrorContext::new(error.clone()),
    }
}
