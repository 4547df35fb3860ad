//! Integration test suite for basetools
//!
//! End-to-end tests that run the `basetools` binary against temporary directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **guid**: `basetools guid` conversions and error reporting
//! - **render**: `basetools render` expansion, variables and change-aware output
//! - **library**: Public API scenarios spanning several modules

use assert_cmd::Command;

mod guid;
mod library;
mod render;

/// `basetools` command with progress output disabled and a fixed log filter.
pub fn basetools() -> Command {
    let mut cmd = Command::cargo_bin("basetools").unwrap();
    cmd.env("BASETOOLS_NO_PROGRESS", "1").env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}
