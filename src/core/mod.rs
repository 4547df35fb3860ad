//! Core types shared across basetools.
//!
//! Currently this is the error layer: [`BasetoolsError`] for typed failures and
//! [`ErrorContext`] / [`user_friendly_error`] for presenting them on the command line.

pub mod error;

pub use error::{BasetoolsError, ErrorContext, user_friendly_error};
