//! Text generation with flat placeholder substitution and repeated blocks.
//!
//! This module implements the small template language used when emitting generated
//! sources (C headers, makefiles, autogen tables). It deliberately supports only two
//! things:
//!
//! - **Placeholders**: `$NAME` or `${NAME}`, replaced by the bound value. `$$` writes
//!   a literal `$`. Names that are not bound are left in the output untouched.
//! - **Repeated blocks**: text between `${BEGIN}` and `${END}` is emitted once per
//!   element of the list values it references. All lists referenced by one block
//!   must have the same length.
//!
//! There are no conditionals, no nested loops and no expressions.
//!
//! # Values
//!
//! Each placeholder is bound to a [`TemplateValue`]: a `Scalar` is substituted
//! everywhere, a `Sequence` only inside repeated blocks. A [`Placeholders`] mapping
//! keeps bindings in insertion order.
//!
//! # Examples
//!
//! ```rust
//! use basetools::templating::{Placeholders, TemplateString};
//!
//! let vars = Placeholders::new()
//!     .with("GUID_NAME", vec!["gEfiFooGuid", "gEfiBarGuid"])
//!     .with("MODULE", "Shell");
//!
//! let mut header = TemplateString::new();
//! header.append_with("// $MODULE\n${BEGIN}extern EFI_GUID ${GUID_NAME};\n${END}", &vars)?;
//!
//! assert_eq!(
//!     header.as_str(),
//!     "// Shell\nextern EFI_GUID gEfiFooGuid;\nextern EFI_GUID gEfiBarGuid;\n"
//! );
//! # Ok::<(), basetools::core::BasetoolsError>(())
//! ```
//!
//! # Errors
//!
//! Expansion fails with [`BasetoolsError::InconsistentRepeatCount`] when the list
//! values used by a block disagree in length, and with
//! [`BasetoolsError::UnterminatedBlock`] when a block is never closed.
//!
//! [`BasetoolsError::InconsistentRepeatCount`]: crate::core::BasetoolsError::InconsistentRepeatCount
//! [`BasetoolsError::UnterminatedBlock`]: crate::core::BasetoolsError::UnterminatedBlock

mod substitute;
mod template_string;
mod value;

pub use substitute::{is_placeholder_name, referenced_names, substitute};
pub use template_string::{BLOCK_BEGIN, BLOCK_END, TemplateString};
pub use value::{Placeholders, TemplateValue};
