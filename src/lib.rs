//! basetools - common helpers for firmware build tooling
//!
//! A handful of small, independent routines that build-file generators lean on:
//!
//! - [`templating`] - `$NAME` substitution with `${BEGIN}`/`${END}` repeated blocks,
//!   used to emit generated C sources and makefiles
//! - [`utils::guid`] - GUID conversion between registry (`8-4-4-4-12`) and C
//!   structure initializer formats
//! - [`utils::fs`] - Directory creation and writes that skip unchanged files
//! - [`utils::progress`] - Background progress-dot printer
//! - [`cli::args`] - Variable-length option values (`-a IA32 X64`)
//!
//! # Example
//!
//! ```rust,no_run
//! use basetools::templating::{Placeholders, TemplateString};
//! use basetools::utils::fs::save_file_on_change;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let vars = Placeholders::new()
//!     .with("PCD_NAME", vec!["PcdFoo", "PcdBar"])
//!     .with("PCD_VALUE", vec!["0x1", "0x2"]);
//!
//! let mut source = TemplateString::new();
//! source.append("// DO NOT EDIT\n");
//! source.append_with("${BEGIN}#define _PCD_VALUE_${PCD_NAME} ${PCD_VALUE}\n${END}", &vars)?;
//!
//! save_file_on_change(Path::new("Build/AutoGen.h"), source.as_str().as_bytes())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! basetools render AutoGen.h.template --vars vars.toml --output-dir Build
//! basetools guid to-struct 8be4df61-93ca-11d2-aa0d-00e098032b8c
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod templating;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
