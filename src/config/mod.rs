//! Configuration inputs for template rendering.
//!
//! Template variables come from two places, merged in this order:
//!
//! 1. A TOML variables file ([`VariablesFile`]) passed with `--vars`
//! 2. Command-line definitions after `--` (see [`crate::cli::args`]), which win
//!    over file values with the same name

pub mod variables;

pub use variables::VariablesFile;
